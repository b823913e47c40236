use crate::cli;
use azureedl::{Client, ClientBuilder, Selection, SelectionBuilder};
use std::env;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build the feed client from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_client(args: &cli::Args) -> Client {
    let mut builder = ClientBuilder::new();

    if let Some(url) = &args.feed_url {
        builder = builder.url(url);
    }
    if let Some(path) = &args.feed_file {
        builder = builder.file(path);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(path) = &args.save_json {
        builder = builder.save_json(path);
    }

    builder.build()
}

/*--------------------------------------------------------------------------------------
  Build the service tag selection from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_selection(args: &cli::Args) -> Selection {
    let mut builder = SelectionBuilder::new();

    if let Some(names) = &args.include_tags {
        builder = builder.include(names);
    }
    if let Some(names) = &args.exclude_tags {
        builder = builder.exclude(names);
    }

    builder.build()
}

/*--------------------------------------------------------------------------------------
  Resolve the URL-index base URL
--------------------------------------------------------------------------------------*/

/// The base URL for the index, in precedence order: `--url-base`, the `EDL_URL_BASE`
/// environment variable, then a `raw.githubusercontent.com` URL built from the GitHub Actions
/// repository and ref context. The library core never inspects the environment - ambient
/// defaults are resolved here, before the pipeline is invoked.
pub fn resolve_url_base(args: &cli::Args) -> Option<String> {
    if let Some(url_base) = &args.url_base {
        return Some(url_base.clone());
    }

    if let Ok(url_base) = env::var("EDL_URL_BASE") {
        if !url_base.is_empty() {
            return Some(url_base);
        }
    }

    match (env::var("GITHUB_REPOSITORY"), env::var("GITHUB_REF_NAME")) {
        (Ok(repository), Ok(ref_name)) if !repository.is_empty() && !ref_name.is_empty() => {
            Some(format!(
                "https://raw.githubusercontent.com/{repository}/{ref_name}"
            ))
        }
        _ => None,
    }
}
