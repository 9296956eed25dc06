use clap::Parser;
use pydepgraph::application::dto::SourceKind;
use std::path::PathBuf;

/// Draw the dependency graph of a Python package
#[derive(Parser, Debug)]
#[command(name = "pydepgraph")]
#[command(version)]
#[command(
    about = "Draw the dependency graph of a Python package",
    long_about = "Resolves the direct and transitive dependencies of a Python package, \
                  caches what was looked up in a JSON file, and renders the graph as an image \
                  (.png, .svg, .pdf, .jpg, .gif through Graphviz) or as DOT source (.dot, .gv)."
)]
pub struct Args {
    /// Name of the package whose dependencies are drawn
    pub package: String,

    /// Output file; its extension selects the image format
    pub output_file: PathBuf,

    /// Dependency cache file [default: deps_cache.json]
    #[arg(short, long, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Look up every package again and update the cache
    #[arg(long, conflicts_with = "no_cache")]
    pub refresh: bool,

    /// Neither read nor write the cache file
    #[arg(long)]
    pub no_cache: bool,

    /// Canvas size in inches; derived from the graph size when omitted
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub figsize: Option<Vec<u32>>,

    /// Where dependency metadata comes from: pypi or installed [default: pypi]
    #[arg(short, long)]
    pub source: Option<SourceKind>,

    /// Base URL of a PyPI-compatible JSON API [default: https://pypi.org/pypi]
    #[arg(long, value_name = "URL")]
    pub index_url: Option<String>,

    /// Python interpreter queried by the installed source [default: python3]
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Config file (defaults to pydepgraph.config.yml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Label every node with the size of the package and color it by size
    #[arg(long)]
    pub sizes: bool,

    /// Also print the resolved graph as a text tree to stderr
    #[arg(long)]
    pub tree: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
