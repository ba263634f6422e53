use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use clap::parser::ValueSource;
use colored::Colorize;
use linkweave_core::config::{CrawlConfig, DEFAULT_DEPTH, DEFAULT_TIMEOUT_SECS};
use linkweave_core::crawl::{CrawlOptions, execute_crawl};
use linkweave_core::report::{ReportFormat, render};
use tracing::warn;
use url::Url;

/// Parse the seed URL, trying to add http:// if needed
pub fn parse_seed_url(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(line)
        && url.has_host()
    {
        return Some(url.to_string());
    }

    let with_scheme = format!("http://{}", line);
    if let Ok(url) = Url::parse(&with_scheme) {
        return Some(url.to_string());
    }

    warn!("Invalid seed URL '{}'", line);
    None
}

/// Resolve the crawl configuration from parsed arguments
pub fn config_from_matches(args: &ArgMatches) -> Result<CrawlConfig> {
    let raw_url = args
        .get_one::<String>("url")
        .ok_or_else(|| anyhow!("No target URL set (use --url or the URL environment variable)"))?;
    let url = parse_seed_url(raw_url).with_context(|| format!("Couldn't parse target URL '{}'", raw_url))?;

    let depth = resolve_depth(args)?;
    let timeout_secs = args
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let format = match args.get_one::<String>("format") {
        Some(format) => format.parse::<ReportFormat>()?,
        None => ReportFormat::default(),
    };

    Ok(CrawlConfig {
        url,
        depth,
        timeout_secs,
        format,
        quiet: args.get_flag("quiet"),
    })
}

/// Depth from `--depth` must parse; a bad `DEPTH` from the environment falls
/// back to the default instead.
fn resolve_depth(args: &ArgMatches) -> Result<usize> {
    let Some(raw) = args.get_one::<String>("depth") else {
        return Ok(DEFAULT_DEPTH);
    };

    match raw.trim().parse::<usize>() {
        Ok(depth) => Ok(depth),
        Err(e) if args.value_source("depth") == Some(ValueSource::EnvVariable) => {
            warn!("Ignoring DEPTH='{}' ({}), using {}", raw, e, DEFAULT_DEPTH);
            Ok(DEFAULT_DEPTH)
        }
        Err(e) => Err(anyhow!("Invalid depth '{}': {}", raw, e)),
    }
}

/// Run the crawl and render the report. Nothing is rendered on failure.
pub async fn run_crawl(config: &CrawlConfig) -> Result<String> {
    let options = CrawlOptions {
        url: config.url.clone(),
        max_depth: config.depth,
        timeout_secs: config.timeout_secs,
        show_progress_bars: !config.quiet,
    };

    let root = execute_crawl(options).await?;
    render(&root, config.format)
}

pub async fn handle_crawl(args: &ArgMatches) {
    let config = match config_from_matches(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        eprintln!("\n{} Crawling {}", "→".blue(), config.url.bright_white());
        eprintln!("Max depth: {}\n", config.depth);
    }

    match run_crawl(&config).await {
        Ok(report) => {
            if !config.quiet {
                eprintln!("\n{} Crawl complete!\n", "✓".green().bold());
            }
            print!("{}", report);
        }
        Err(e) => {
            eprintln!("{} Crawl failed: {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
