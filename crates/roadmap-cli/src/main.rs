use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use roadmap_core::app::{AppBuilder, load};
use roadmap_core::config::RoadmapConfig;
use roadmap_core::domain::{Locale, StatusFilter};
use roadmap_core::impls::source_for;
use roadmap_core::view::{ClickTarget, Layout};

mod logging;

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(about = "Render a roadmap.json into an HTML page")]
struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML page.
    Render(RenderArgs),
    /// Print one line per phase: status, completion, title.
    Summary(SourceArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// TOML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File path or http(s) URL of the roadmap document.
    #[arg(long)]
    source: Option<String>,
    /// Status to show ("all" for everything).
    #[arg(long, default_value = StatusFilter::ALL)]
    filter: String,
    #[arg(long)]
    locale: Option<Locale>,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    layout: Option<Layout>,
    /// Timeline item to expand (index in the filtered list); repeatable.
    #[arg(long)]
    expand: Vec<usize>,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SourceArgs {
    fn config(&self) -> Result<RoadmapConfig> {
        let mut config = match &self.config {
            Some(path) => RoadmapConfig::load(path)?,
            None => RoadmapConfig::default(),
        };
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Render(args) => render(args).await,
        Commands::Summary(args) => summary(args).await,
    }
}

impl RenderArgs {
    /// Config file, then `--source` / `--locale`, then `--layout`.
    fn config(&self) -> Result<RoadmapConfig> {
        let mut config = self.source.config()?;
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if !self.expand.is_empty() && config.layout != Layout::Timeline {
            bail!(
                "--expand needs the timeline layout (current: {})",
                config.layout.as_str()
            );
        }
        Ok(config)
    }
}

async fn render(args: RenderArgs) -> Result<()> {
    let config = args.config()?;
    let mut app = AppBuilder::from_config(config).build()?;
    info!(source = %app.source_location(), "loading roadmap");

    // the error page is still written before failing
    let loaded = app.start().await;
    if loaded.is_ok() {
        if args.source.filter != StatusFilter::ALL {
            app.controller.select_status(&args.source.filter)?;
        }
        for index in &args.expand {
            app.controller
                .click_item(*index, ClickTarget::Item)
                .with_context(|| format!("cannot expand item {index}"))?;
        }
    }

    let page = app.page();
    match &args.output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => print!("{page}"),
    }

    loaded.with_context(|| format!("failed to load {}", app.source_location()))
}

async fn summary(args: SourceArgs) -> Result<()> {
    let config = args.config()?;
    let source = source_for(&config.source);
    let state = load(source.as_ref())
        .await
        .with_context(|| format!("failed to load {}", source.location()))?;

    let filter = StatusFilter::parse(&args.filter);
    let phases = filter.apply(state.phases());
    if phases.is_empty() {
        println!("{}", config.locale.empty_message());
        return Ok(());
    }
    for phase in phases {
        println!(
            "{:<12} {:>3}%  {}",
            config.locale.status_label(&phase.status),
            phase.completion(),
            phase.title
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn render_args(args: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(["roadmap", "render"].into_iter().chain(args.iter().copied()))
            .unwrap();
        match cli.command {
            Commands::Render(args) => args,
            Commands::Summary(_) => unreachable!(),
        }
    }

    fn config_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{text}").unwrap();
        file
    }

    #[test]
    fn defaults_without_config() {
        let config = render_args(&[]).config().unwrap();
        assert_eq!(config, RoadmapConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let file = config_file(
            r#"
            source = "from-file.json"
            layout = "timeline"
            locale = "fr"
            title = "Feuille de route"
            "#,
        );
        let path = file.path().to_string_lossy().to_string();
        let config = render_args(&[
            "--config",
            path.as_str(),
            "--source",
            "from-flag.json",
            "--locale",
            "en",
            "--layout",
            "list",
        ])
        .config()
        .unwrap();

        assert_eq!(config.source, "from-flag.json");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.layout, Layout::List);
        // not overridden
        assert_eq!(config.title, "Feuille de route");
    }

    #[test]
    fn config_file_overrides_defaults() {
        let file = config_file(r#"layout = "timeline""#);
        let path = file.path().to_string_lossy().to_string();
        let config = render_args(&["--config", path.as_str()]).config().unwrap();
        assert_eq!(config.layout, Layout::Timeline);
        assert_eq!(config.source, "roadmap.json");
    }

    #[test]
    fn expand_requires_timeline() {
        let err = render_args(&["--expand", "0"]).config().unwrap_err();
        assert!(err.to_string().contains("timeline"));

        let ok = render_args(&["--expand", "0", "--layout", "timeline"]).config();
        assert!(ok.is_ok());
    }
}
