use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use fixture_sync::{sync_fixtures, SyncConfig, SyncMode, DEFAULT_FIXTURE_ROOT};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

mod report;

#[derive(Parser)]
#[command(name = "sync-fixtures")]
#[command(
    about = "Refresh data-core-metadata hashes in simple-index fixture pages",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Directory holding *.html fixture pages and their *.whl.metadata sidecars
    #[arg(default_value = DEFAULT_FIXTURE_ROOT)]
    fixtures: PathBuf,

    /// Extension of fixture pages
    #[arg(long, default_value = "html")]
    extension: String,

    /// Hrefs ending with this suffix get a metadata hash
    #[arg(long, default_value = ".whl")]
    dist_suffix: String,

    /// Suffix appended to the href to find the sidecar
    #[arg(long, default_value = ".metadata")]
    sidecar_suffix: String,

    /// Attribute that holds the sidecar hash
    #[arg(long, default_value = "data-core-metadata")]
    attribute: String,

    /// Do not rewrite pages; exit with status 1 if any attribute is stale
    #[arg(long)]
    check: bool,

    /// Print the run summary as JSON (implies --quiet)
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();
    if cli.json {
        cli.quiet = true;
    }

    // Progress and change notices are the tool's output, so they go to stdout bare.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .format(|buf, record| {
            if record.level() <= log::Level::Warn {
                writeln!(buf, "{}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .target(env_logger::Target::Stdout)
        .init();

    let mode = if cli.check {
        SyncMode::Check
    } else {
        SyncMode::Write
    };
    let config = SyncConfig::new(&cli.fixtures)
        .with_fixture_extension(cli.extension.as_str())
        .with_dist_suffix(cli.dist_suffix.as_str())
        .with_sidecar_suffix(cli.sidecar_suffix.as_str())
        .with_metadata_attribute(cli.attribute.as_str())
        .with_mode(mode);

    let stats = sync_fixtures(&config)
        .with_context(|| format!("Failed to sync fixtures in {}", cli.fixtures.display()))?;

    if cli.json {
        println!("{}", report::render_json(&stats)?);
    } else if !cli.quiet {
        println!("{}", report::render_summary(&stats, cli.check));
    }

    if cli.check && !stats.is_clean() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
