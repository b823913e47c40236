use crate::core::errors::Result;
use crate::core::render::WrittenFile;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  URL Index
-------------------------------------------------------------------------------------------------*/

/// One URL index row: a written file's logical name and its fully-qualified URL.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UrlIndexEntry {
    pub logical_name: String,
    pub url: String,
}

/*--------------------------------------------------------------------------------------
  URL Resolution
--------------------------------------------------------------------------------------*/

/// Join a base URL and a relative file path with exactly one separating slash.
///
/// ```
/// assert_eq!(
///     azureedl::resolve_url("https://example.com/edl", "azurecloud_v4.txt"),
///     "https://example.com/edl/azurecloud_v4.txt"
/// );
/// assert_eq!(
///     azureedl::resolve_url("https://example.com/edl/", "azurecloud_v4.txt"),
///     "https://example.com/edl/azurecloud_v4.txt"
/// );
/// ```
pub fn resolve_url(base_url: &str, relative_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        relative_path.trim_start_matches('/')
    )
}

/*--------------------------------------------------------------------------------------
  Index Construction
--------------------------------------------------------------------------------------*/

/// Build the URL index for a set of written EDL files, one entry per file in render order.
/// Pure function - the only side effect in this module is [write_url_index].
pub fn build_url_index(base_url: &str, written: &[WrittenFile]) -> Vec<UrlIndexEntry> {
    written
        .iter()
        .map(|file| UrlIndexEntry {
            logical_name: file.logical_name.clone(),
            url: resolve_url(base_url, &file.relative_path),
        })
        .collect()
}

/*--------------------------------------------------------------------------------------
  Index Serialization
--------------------------------------------------------------------------------------*/

/// Write the URL index as a headerless two-column CSV: logical name, absolute URL. Consumers
/// know the column order by convention.
pub fn write_url_index(path: &Path, entries: &[UrlIndexEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.write_record([&entry.logical_name, &entry.url])?;
    }
    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
