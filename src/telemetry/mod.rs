pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

// One typed log context per command
pub fn page() -> LogCtx<ops::page::Page> { LogCtx::new(config::logs_are_json()) }
pub fn posts() -> LogCtx<ops::posts::Posts> { LogCtx::new(config::logs_are_json()) }
pub fn projects() -> LogCtx<ops::projects::Projects> { LogCtx::new(config::logs_are_json()) }
pub fn render() -> LogCtx<ops::render::Render> { LogCtx::new(config::logs_are_json()) }
pub fn show() -> LogCtx<ops::show::Show> { LogCtx::new(config::logs_are_json()) }
