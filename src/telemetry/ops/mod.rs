pub mod page;
pub mod posts;
pub mod projects;
pub mod render;
pub mod show;
