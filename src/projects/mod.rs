use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::telemetry::{self};
use crate::telemetry::ops::projects::Phase as ProjectsPhase;

pub mod catalog;

use catalog::{Category, ProjectItem};

/// portfolio projects
#[derive(Args)]
pub struct ProjectsCmd {
    /// Only show one category (web, systems)
    #[arg(long)]
    pub category: Option<Category>,
}

#[derive(Serialize)]
struct ProjectList {
    projects: Vec<&'static ProjectItem>,
}

pub fn run(args: ProjectsCmd) -> Result<()> {
    let log = telemetry::projects();
    let _g = log.root_span_kv([("category", format!("{:?}", args.category))]).entered();
    let _s = log.span(&ProjectsPhase::List).entered();

    let projects: Vec<&'static ProjectItem> = catalog::by_category(args.category).collect();
    if telemetry::config::json_mode() {
        log.result(&ProjectList { projects })?;
        return Ok(());
    }
    for p in projects {
        println!("[{}] {} — {}", p.category, p.title, p.link);
        println!("    {}", p.description);
        println!("    tags: {}", p.tags.join(", "));
    }
    Ok(())
}
