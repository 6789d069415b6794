use askama::Template;

use crate::feed::types::FeedItem;
use crate::profile::Profile;
use crate::projects::catalog::ProjectItem;

use super::reveal::{RevealSchedule, Section};

/// `animation-delay` per section, in milliseconds from page load.
struct RevealDelays {
    header: Option<u128>,
    projects: Option<u128>,
    posts: Option<u128>,
}

impl RevealDelays {
    fn from_schedule(schedule: &RevealSchedule) -> Self {
        let ms = |section| schedule.offset_of(section).map(|d| d.as_millis());
        RevealDelays {
            header: ms(Section::Header),
            projects: ms(Section::Projects),
            posts: ms(Section::Posts),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct PageTemplate<'a> {
    profile: &'a Profile,
    projects: &'a [ProjectItem],
    posts: &'a [FeedItem],
    delays: RevealDelays,
}

/// Render the whole page as one standalone HTML document.
pub fn render_document(profile: &Profile, projects: &[ProjectItem], posts: &[FeedItem], schedule: &RevealSchedule) -> askama::Result<String> {
    PageTemplate { profile, projects, posts, delays: RevealDelays::from_schedule(schedule) }.render()
}
