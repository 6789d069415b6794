pub mod html;
pub mod render;
pub mod reveal;
pub mod show;
pub mod state;
pub mod text;
