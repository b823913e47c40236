use clap::Parser;
use log::error;
use std::process::ExitCode;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::Args::parse();

    // Configure logging
    stderrlog::new()
        .verbosity(args.verbose.log_level_filter())
        .init()
        .unwrap();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Pipeline
-------------------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> azureedl::Result<()> {
    // Fetch, parse, and validate the Service Tags feed
    let client = cli::build_client(args);
    let feed = client.get_feed()?;

    // Select the service tags to render
    let selection = cli::build_selection(args);
    let selected = feed.select(&selection);

    // Render the EDL files
    let written = azureedl::write_edls(&args.output_dir, &selected)?;
    cli::log::written_files(&written, selected.len());

    // Build and write the URL index
    if let Some(index_path) = &args.url_index {
        let base_url = cli::resolve_url_base(args).ok_or_else(|| {
            azureedl::Error::Config(
                "--url-index requires a base URL (--url-base, EDL_URL_BASE, or GitHub Actions \
                 context)"
                    .to_string(),
            )
        })?;

        let entries = azureedl::build_url_index(&base_url, &written);
        azureedl::write_url_index(index_path, &entries)?;
        cli::log::url_index(index_path, &entries);
    }

    if args.summary {
        cli::output::summary_table(&written);
    }

    Ok(())
}
