//! readmegen — generate README pages for a multi-language sample programs repository.
//!
//! Reads `archive/<letter>/<language>/` folders and writes one page per
//! language:
//!
//! - **in place** (default): `readmegen path/to/sample-programs` writes
//!   `README.md` into every language folder
//! - **output directory**: `readmegen -o pages path/to/sample-programs`
//!   writes `pages/<language>.md`

mod document;
mod error;
mod links;
mod loader;
mod logging;
mod model;
mod naming;
mod readme;
mod render;
mod templates;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use links::{Assume, HttpChecker, LinkChecker};
use model::{Language, Repository};
use readme::{Catalog, ReadmeBuilder};
use render::Renderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "readmegen",
    version,
    about = "Generate README pages for every language folder of a sample programs repository"
)]
struct Cli {
    /// Repository checkout containing the archive/ folder
    repo: PathBuf,

    /// Write pages to this directory as <language>.<ext> instead of
    /// README.<ext> inside each language folder
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// How link liveness is decided: check over HTTP, or assume every
    /// link is live or dead
    #[arg(long, value_enum, default_value_t = LinkMode::Check, env = "READMEGEN_LINKS")]
    links: LinkMode,

    /// Timeout for each link check (e.g. 10s, 500ms)
    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration, env = "READMEGEN_TIMEOUT")]
    timeout: Duration,

    /// Worker threads; 0 uses one per CPU
    #[arg(short = 'j', long, default_value_t = 0)]
    jobs: usize,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LinkMode {
    Check,
    Live,
    Dead,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    if cli.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let renderer = render::create_renderer(&cli.format)?;

    let repo = loader::load(&cli.repo)
        .with_context(|| format!("failed to load repository {}", cli.repo.display()))?;
    tracing::info!(languages = repo.languages.len(), "loaded repository");

    let checker: Box<dyn LinkChecker> = match cli.links {
        LinkMode::Check => {
            Box::new(HttpChecker::new(cli.timeout).context("failed to create HTTP client")?)
        }
        LinkMode::Live => Box::new(Assume(true)),
        LinkMode::Dead => Box::new(Assume(false)),
    };

    let catalog = ReadmeBuilder::new(checker.as_ref()).build_all(&repo);
    write_catalog(&repo, &catalog, renderer.as_ref(), cli.output.as_deref())
}

/// Render and write every page, in repository order.
fn write_catalog(
    repo: &Repository,
    catalog: &Catalog,
    renderer: &dyn Renderer,
    output_dir: Option<&Path>,
) -> Result<()> {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    let ext = renderer.file_extension();
    for language in &repo.languages {
        let Some(page) = catalog.get(&language.name) else {
            continue;
        };
        let out_path = output_path(language, output_dir, ext);
        fs::write(&out_path, renderer.render(page))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(
            language = %language.name,
            path = %out_path.display(),
            "wrote readme"
        );
    }

    tracing::info!(pages = catalog.len(), "done");
    Ok(())
}

/// `<dir>/<language>.<ext>` with an output directory, otherwise
/// `<language folder>/README.<ext>`.
fn output_path(language: &Language, output_dir: Option<&Path>, ext: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(format!("{}.{}", language.name, ext)),
        None => language.dir.join(format!("README.{}", ext)),
    }
}
