mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use pydepgraph::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use pydepgraph::adapters::outbound::filesystem::{JsonCacheRepository, DEFAULT_CACHE_FILE};
use pydepgraph::adapters::outbound::formatters::TreeFormatter;
use pydepgraph::application::dto::{CacheStatus, GraphRequest, SourceKind};
use pydepgraph::application::factories::{MetadataSourceFactory, RendererFactory};
use pydepgraph::application::use_cases::GenerateGraphUseCase;
use pydepgraph::graph_resolution::domain::{FigureSize, ResolutionMode};
use pydepgraph::ports::outbound::{PackageSizeSource, ProgressReporter};
use pydepgraph::shared::error::ExitCode;
use pydepgraph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug)]
struct Settings {
    cache_file: PathBuf,
    mode: ResolutionMode,
    figure_size: Option<FigureSize>,
    source: SourceKind,
    index_url: Option<String>,
    python: Option<PathBuf>,
    sizes: bool,
}

#[tokio::main]
async fn main() {
    // clap exits with ExitCode::InvalidArguments (2) on its own
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config)?;

    // Reject an unusable output path before doing any resolution work
    let renderer = RendererFactory::create(&args.output_file)?;

    let metadata_source = MetadataSourceFactory::create(
        settings.source,
        settings.index_url.as_deref(),
        settings.python.as_deref(),
    )?;
    let size_source: Option<Box<dyn PackageSizeSource>> = if settings.sizes {
        Some(MetadataSourceFactory::create_size_source(
            settings.source,
            settings.index_url.as_deref(),
            settings.python.as_deref(),
        )?)
    } else {
        None
    };
    let cache_repository = JsonCacheRepository::new(settings.cache_file.clone());
    let progress_reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(QuietProgressReporter::new())
    } else {
        Box::new(StderrProgressReporter::new())
    };

    if !args.quiet {
        eprintln!(
            "📦 Reading metadata from {}",
            MetadataSourceFactory::describe(
                settings.source,
                settings.index_url.as_deref(),
                settings.python.as_deref()
            )
        );
    }

    let use_case = GenerateGraphUseCase::new(
        metadata_source,
        cache_repository,
        renderer,
        progress_reporter,
        size_source,
    );

    let request = GraphRequest::builder()
        .package(args.package.clone())
        .mode(settings.mode)
        .figure_size(settings.figure_size)
        .build()?;

    let response = use_case.execute(request).await?;

    if args.tree {
        eprintln!();
        eprint!("{}", TreeFormatter::format(&response.graph));
    }

    if !args.quiet {
        if response.cache_status == CacheStatus::Saved {
            eprintln!("💾 Cache updated: {}", settings.cache_file.display());
        }
        eprintln!(
            "✅ Dependency graph of {} written to {}",
            response.graph.root(),
            args.output_file.display()
        );
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(ref path) = args.config {
        return Ok(Some(config::load_config_from_path(path)?));
    }

    let discovered = config::discover_config(Path::new("."))?;
    if discovered.is_some() && !args.quiet {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            config::CONFIG_FILENAME
        );
    }
    Ok(discovered)
}

fn resolve_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let figure_size = match args.figsize.as_deref() {
        Some([width, height]) => Some(FigureSize::new(f64::from(*width), f64::from(*height))?),
        _ => config.figure_size(),
    };

    Ok(Settings {
        cache_file: args
            .cache_file
            .clone()
            .or_else(|| config.cache_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
        mode: ResolutionMode::from_flags(args.refresh, args.no_cache)?,
        figure_size,
        source: args.source.or(config.source_kind()).unwrap_or_default(),
        index_url: args.index_url.clone().or(config.index_url),
        python: args.python.clone().or(config.python),
        sizes: args.sizes || config.sizes.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pydepgraph", "requests", "graph.png"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let settings = resolve_settings(&args(&[]), None).unwrap();
        assert_eq!(settings.cache_file, PathBuf::from(DEFAULT_CACHE_FILE));
        assert_eq!(settings.mode, ResolutionMode::Default);
        assert!(settings.figure_size.is_none());
        assert_eq!(settings.source, SourceKind::PyPi);
        assert!(settings.index_url.is_none());
        assert!(settings.python.is_none());
        assert!(!settings.sizes);
    }

    #[test]
    fn test_resolve_settings_config_fills_gaps() {
        let config = ConfigFile {
            cache_file: Some(PathBuf::from("from-config.json")),
            source: Some("installed".to_string()),
            python: Some(PathBuf::from("/opt/python")),
            figsize: Some(vec![30.0, 12.0]),
            sizes: Some(true),
            ..Default::default()
        };

        let settings = resolve_settings(&args(&["--no-cache"]), Some(config)).unwrap();
        assert!(settings.sizes);
        assert_eq!(settings.cache_file, PathBuf::from("from-config.json"));
        assert_eq!(settings.mode, ResolutionMode::NoCache);
        assert_eq!(settings.source, SourceKind::Installed);
        assert_eq!(settings.python, Some(PathBuf::from("/opt/python")));
        assert_eq!(
            settings.figure_size,
            Some(FigureSize::new(30.0, 12.0).unwrap())
        );
    }

    #[test]
    fn test_resolve_settings_cli_overrides_config() {
        let config = ConfigFile {
            cache_file: Some(PathBuf::from("from-config.json")),
            source: Some("installed".to_string()),
            figsize: Some(vec![30.0, 12.0]),
            ..Default::default()
        };

        let settings = resolve_settings(
            &args(&["-c", "cli.json", "-s", "pypi", "-f", "10", "5", "--refresh"]),
            Some(config),
        )
        .unwrap();
        assert_eq!(settings.cache_file, PathBuf::from("cli.json"));
        assert_eq!(settings.source, SourceKind::PyPi);
        assert_eq!(settings.mode, ResolutionMode::Refresh);
        assert_eq!(
            settings.figure_size,
            Some(FigureSize::new(10.0, 5.0).unwrap())
        );
    }

    #[test]
    fn test_resolve_settings_sizes_flag_without_config() {
        let settings = resolve_settings(&args(&["--sizes"]), None).unwrap();
        assert!(settings.sizes);

        let config = ConfigFile {
            sizes: Some(false),
            ..Default::default()
        };
        let settings = resolve_settings(&args(&["--sizes"]), Some(config)).unwrap();
        assert!(settings.sizes);
    }
}
