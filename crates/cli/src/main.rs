mod config;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use finder::render::LOADING_MESSAGE;
use finder::{
    render_html, render_text, MovieFinder, RenderOptions, SearchCriteria, SearchSession,
    TmdbSource, ViewState,
};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser)]
#[command(name = "movie-finder", version = env!("MOVIE_FINDER_VERSION"))]
#[command(about = "Search movies by title, actors/directors and genre", long_about = None)]
struct Cli {
    /// Title text the movie title must contain
    #[arg(short, long, default_value = "")]
    title: String,

    /// Comma separated actor/director names; every name must match
    #[arg(short, long, default_value = "")]
    people: String,

    /// Genre name, e.g. "Comedy"
    #[arg(short, long, default_value = "")]
    genre: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show full overviews instead of collapsed ones
    #[arg(long)]
    expand: bool,

    /// TMDB v3 API key, required when any criterion is given
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Response language
    #[arg(long, env = "TMDB_LANGUAGE", default_value = tmdb::DEFAULT_LANGUAGE)]
    language: String,

    /// TMDB API root
    #[arg(long, env = "TMDB_BASE_URL", default_value = tmdb::DEFAULT_BASE_URL)]
    base_url: String,

    /// Maximum in-flight requests per fan-out level
    #[arg(long, env = "MOVIE_FINDER_CONCURRENCY", default_value_t = finder::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl Cli {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria::from_input(&self.title, &self.people, &self.genre)
    }

    fn config(&self) -> anyhow::Result<Config> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .context("TMDB API key missing: pass --api-key or set TMDB_API_KEY")?;

        Ok(Config {
            tmdb_language: self.language.clone(),
            tmdb_base_url: self.base_url.clone(),
            max_concurrent_requests: self.concurrency.max(1),
            request_timeout_secs: self.timeout_secs,
            ..Config::new(api_key)
        })
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            expanded: self.expand,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let criteria = cli.criteria();

    let state = if criteria.is_empty() {
        ViewState::Prompt
    } else {
        search(&cli.config()?, &criteria).await?
    };

    let rendered = render(&state, cli.format, cli.render_options())?;
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(exit_code(&state))
}

async fn search(config: &Config, criteria: &SearchCriteria) -> anyhow::Result<ViewState> {
    let client = config
        .tmdb_client()
        .context("Failed to build TMDB client")?;
    let finder = MovieFinder::new(Arc::new(TmdbSource::new(Arc::new(client))))
        .with_concurrency(config.max_concurrent_requests);

    let session = SearchSession::new();
    tracing::info!("{}", LOADING_MESSAGE);
    finder
        .search_view_in(&session, criteria)
        .await
        .context("Search was superseded by a newer one")
}

fn render(
    state: &ViewState,
    format: OutputFormat,
    options: RenderOptions,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(state, options),
        OutputFormat::Html => render_html(state, options),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(state)?;
            json.push('\n');
            json
        }
    })
}

fn write_output(path: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote results to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn exit_code(state: &ViewState) -> ExitCode {
    match state {
        ViewState::Failed => ExitCode::FAILURE,
        ViewState::Prompt => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    }
}
