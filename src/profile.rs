use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// The page header: who this is and how to reach them.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub roles: &'static [&'static str],
    pub bio: &'static str,
    pub contacts: &'static [ContactLink],
}

pub const PROFILE: Profile = Profile {
    name: "Tim Pepper",
    roles: &["Software Team Lead", "Ocean Conservation Enthusiast"],
    bio: "Full-stack developer with a decade of experience building products \
          in TypeScript, React, and Node. Passionate about developer experience, \
          engineering culture, and ocean conservation. Most recently I have been \
          learning Rust, and am very excited to continue tinkering with it.",
    contacts: &[
        ContactLink { label: "GitHub", url: "https://github.com/Rodhlann" },
        ContactLink { label: "Mastodon", url: "https://hachyderm.io/@rodhlann" },
        ContactLink { label: "Email", url: "mailto:tim@timpepper.dev" },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_are_absolute() {
        for c in PROFILE.contacts {
            assert!(url::Url::parse(c.url).is_ok(), "{} has a bad url", c.label);
        }
    }

    #[test]
    fn bio_is_one_paragraph() {
        assert!(!PROFILE.bio.contains('\n'));
        assert!(!PROFILE.bio.contains("  "));
    }
}
