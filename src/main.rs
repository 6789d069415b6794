use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;

mod config;
mod feed;
mod output;
mod page;
mod profile;
mod projects;
mod telemetry;

use config::SiteConfig;
use feed::window::Window;

#[derive(Parser)]
#[command(name = "portfolio", about = "Personal portfolio page: projects, profile and the latest blog posts")]
struct Cli {
    /// RSS feed to pull blog posts from (overrides PORTFOLIO_FEED_URL)
    #[arg(global = true, long)]
    feed_url: Option<String>,
    /// Which posts to keep: first:N or last:N (overrides PORTFOLIO_FEED_WINDOW)
    #[arg(global = true, long)]
    window: Option<Window>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Posts(feed::PostsCmd),
    Projects(projects::ProjectsCmd),
    Render(page::render::RenderCmd),
    Show(page::show::ShowCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and PORTFOLIO_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = SiteConfig::from_env()?.with_overrides(cli.feed_url.as_deref(), cli.window)?;

    match cli.command {
        Commands::Posts(args) => feed::run(&cfg, args).await?,
        Commands::Projects(args) => projects::run(args)?,
        Commands::Render(args) => page::render::run(&cfg, args).await?,
        Commands::Show(args) => page::show::run(&cfg, args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["portfolio", "posts", "--window", "first:3", "--json"]).unwrap();
        assert_eq!(cli.window, Some(Window::First(3)));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Posts(_)));
    }

    #[test]
    fn render_is_plan_only_by_default() {
        let cli = Cli::try_parse_from(["portfolio", "render", "--out", "site/index.html"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert!(!args.apply);
                assert_eq!(args.out, Some(std::path::PathBuf::from("site/index.html")));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn bad_window_is_rejected() {
        assert!(Cli::try_parse_from(["portfolio", "posts", "--window", "last:0"]).is_err());
    }
}
