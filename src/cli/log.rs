use azureedl::{UrlIndexEntry, WrittenFile};
use log::{info, warn};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Written EDL Files
--------------------------------------------------------------------------------------*/

pub fn written_files(written: &[WrittenFile], tag_count: usize) {
    info!(
        "Wrote {} EDL files for {} service tag(s)",
        written.len(),
        tag_count
    );

    if tag_count == 0 {
        warn!("The selection matched no service tags; no EDL files were written");
    }
}

/*--------------------------------------------------------------------------------------
  URL Index
--------------------------------------------------------------------------------------*/

pub fn url_index(path: &Path, entries: &[UrlIndexEntry]) {
    info!("Wrote URL index with {} entries to {:?}", entries.len(), path);
}
