use crate::feed::types::FeedItem;
use crate::profile::Profile;
use crate::projects::catalog::ProjectItem;

pub fn header_lines(profile: &Profile) -> Vec<String> {
    let mut lines = vec![profile.name.to_string(), profile.roles.join(" • "), String::new(), profile.bio.to_string(), String::new()];
    let contacts: Vec<String> = profile.contacts.iter().map(|c| format!("{}: {}", c.label, c.url)).collect();
    lines.push(contacts.join("  "));
    lines
}

pub fn project_lines(projects: &[ProjectItem]) -> Vec<String> {
    let mut lines = vec!["Featured Projects".to_string()];
    for p in projects {
        lines.push(format!("  {} <{}>", p.title, p.link));
        lines.push(format!("    {}", p.description));
        lines.push(format!("    #{}", p.tags.join(" #")));
    }
    lines
}

pub fn post_lines(posts: &[FeedItem]) -> Vec<String> {
    let mut lines = vec!["Latest From the Blog".to_string()];
    for p in posts {
        lines.push(format!("  {} <{}>", p.title, p.link));
        lines.push(format!("    {}", p.published_at));
        if !p.tags.is_empty() {
            lines.push(format!("    #{}", p.tags.join(" #")));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;
    use crate::projects::catalog::PROJECTS;

    #[test]
    fn header_starts_with_name() {
        let lines = header_lines(&PROFILE);
        assert_eq!(lines[0], "Tim Pepper");
        assert_eq!(lines[1], "Software Team Lead • Ocean Conservation Enthusiast");
        assert!(lines.last().unwrap().contains("GitHub: https://github.com/Rodhlann"));
    }

    #[test]
    fn three_lines_per_project() {
        assert_eq!(project_lines(PROJECTS).len(), 1 + 3 * PROJECTS.len());
    }

    #[test]
    fn empty_posts_is_just_the_heading() {
        assert_eq!(post_lines(&[]), vec!["Latest From the Blog".to_string()]);
    }

    #[test]
    fn post_tags_only_when_present() {
        let posts = [
            FeedItem { title: "A".into(), link: "https://x/a".into(), published_at: "2024-01-01".into(), tags: vec!["rust".into()] },
            FeedItem { title: "B".into(), ..FeedItem::default() },
        ];
        let lines = post_lines(&posts);
        assert_eq!(lines, vec![
            "Latest From the Blog".to_string(),
            "  A <https://x/a>".to_string(),
            "    2024-01-01".to_string(),
            "    #rust".to_string(),
            "  B <>".to_string(),
            "    ".to_string(),
        ]);
    }
}
