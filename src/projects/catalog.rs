use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    Web,
    Systems,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Web => write!(f, "Web"),
            Category::Systems => write!(f, "Systems"),
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Ok(Category::Web),
            "systems" => Ok(Category::Systems),
            _ => bail!("unknown project category: {}", s),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectItem {
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: Category,
}

pub const PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        title: "RSS Reader",
        link: "https://rss-reader-next.vercel.app",
        description: "Modern take on content aggregation using React and Node.js",
        tags: &["typescript", "react", "rust"],
        category: Category::Web,
    },
    ProjectItem {
        title: "A* Search in JavaScript",
        link: "https://timpepper.dev/a-star",
        description: "Web-based pathfinding visualization with interactive controls",
        tags: &["typescript", "algorithms"],
        category: Category::Web,
    },
    ProjectItem {
        title: "A* Search in Rust",
        link: "https://github.com/Rodhlann/rust-astar",
        description: "High-performance pathfinding implementation showcasing Rust's memory safety and speed",
        tags: &["rust", "algorithms"],
        category: Category::Systems,
    },
    ProjectItem {
        title: "Snake Game in Rust",
        link: "https://github.com/Rodhlann/rust-snake",
        description: "Classic game rebuilt with modern Rust patterns and zero-cost abstractions",
        tags: &["rust", "games"],
        category: Category::Systems,
    },
];

pub fn by_category(category: Option<Category>) -> impl Iterator<Item = &'static ProjectItem> {
    PROJECTS.iter().filter(move |p| category.is_none_or(|c| p.category == c))
}
