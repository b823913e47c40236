use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate firewall EDL files from the Azure Service Tags feed.", long_about = None)]
pub struct Args {
    /// Directory where the EDL text files are written (three files per service tag)
    pub output_dir: PathBuf,

    /// Only generate EDLs for these service tags
    #[arg(long = "include-tags", value_name = "NAME", num_args = 1..)]
    pub include_tags: Option<Vec<String>>,

    /// Skip these service tags
    #[arg(long = "exclude-tags", value_name = "NAME", num_args = 1..)]
    pub exclude_tags: Option<Vec<String>>,

    /// Also save the raw Service Tags JSON to this path
    #[arg(long = "save-json", value_name = "PATH")]
    pub save_json: Option<PathBuf>,

    /// Write a comma-separated index of EDL URLs to this path
    #[arg(long = "url-index", value_name = "PATH")]
    pub url_index: Option<PathBuf>,

    /// Base URL for the URL index (default: EDL_URL_BASE or GitHub Actions context)
    #[arg(long = "url-base", value_name = "URL")]
    pub url_base: Option<String>,

    /// Fetch the feed from this URL instead of discovering the weekly download link
    #[arg(long = "feed-url", value_name = "URL", conflicts_with = "feed_file")]
    pub feed_url: Option<String>,

    /// Read the feed from a local JSON file instead of the network
    #[arg(long = "feed-file", value_name = "PATH")]
    pub feed_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print a summary table of the written EDL files
    #[arg(long)]
    pub summary: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}
