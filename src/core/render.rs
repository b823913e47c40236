use crate::core::errors::{Error, Result};
use crate::core::partition::{AddressFamily, Partition};
use crate::core::service_tags::ServiceTag;
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Written File Descriptor
-------------------------------------------------------------------------------------------------*/

/// Descriptor for one EDL file written by [write_edls]: the logical name (file stem), the path
/// relative to the output directory, the address family, and the number of prefix lines.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WrittenFile {
    pub tag_name: String,
    pub logical_name: String,
    pub relative_path: String,
    pub family: AddressFamily,
    pub lines: usize,
}

/*-------------------------------------------------------------------------------------------------
  Filename Sanitization
-------------------------------------------------------------------------------------------------*/

/// Map a service tag name to an output file stem: lowercase, with every character outside
/// `[a-z0-9._-]` replaced by `_`. Pure function of the name; [write_edls] rejects runs where
/// two distinct tag names map to the same stem.
///
/// ```
/// assert_eq!(azureedl::sanitize_tag_name("AzureCloud"), "azurecloud");
/// assert_eq!(azureedl::sanitize_tag_name("AzureCloud.EastUS2"), "azurecloud.eastus2");
/// assert_eq!(azureedl::sanitize_tag_name("My Tag/Name"), "my_tag_name");
/// ```
pub fn sanitize_tag_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            match c {
                'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
                _ => '_',
            }
        })
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  EDL Renderer
-------------------------------------------------------------------------------------------------*/

/// Write the EDL files for the selected service tags into `output_dir`, creating the directory
/// when absent and overwriting existing files.
///
/// Each tag produces three files: `<stem>.txt` with the combined prefix list in upstream order,
/// `<stem>_v4.txt` with the IPv4 subset, and `<stem>_v6.txt` with the IPv6 subset. Every file is
/// one CIDR prefix per line with UNIX line endings and a trailing newline; a tag or subset with
/// no prefixes produces an empty file.
///
/// Fails with [Error::NamingCollision] when two distinct tag names sanitize to the same stem.
/// Returns the ordered list of written-file descriptors for the URL index builder.
pub fn write_edls(output_dir: &Path, tags: &[&ServiceTag]) -> Result<Vec<WrittenFile>> {
    check_naming_collisions(tags)?;

    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(tags.len() * 3);
    for tag in tags {
        let stem = sanitize_tag_name(&tag.name);
        let partition = Partition::split(&tag.address_prefixes);

        for family in [
            AddressFamily::Combined,
            AddressFamily::IPv4,
            AddressFamily::IPv6,
        ] {
            written.push(write_list(
                output_dir,
                &tag.name,
                &stem,
                family,
                partition.family(family),
            )?);
        }

        info!(
            "Wrote {stem}.txt (total={}, v4={}, v6={})",
            partition.combined.len(),
            partition.ipv4.len(),
            partition.ipv6.len()
        );
    }

    Ok(written)
}

/*--------------------------------------------------------------------------------------
  Helper Functions
--------------------------------------------------------------------------------------*/

fn check_naming_collisions(tags: &[&ServiceTag]) -> Result<()> {
    let mut stems: BTreeMap<String, &str> = BTreeMap::new();

    for tag in tags {
        let stem = sanitize_tag_name(&tag.name);
        if let Some(first) = stems.insert(stem.clone(), &tag.name) {
            return Err(Error::NamingCollision {
                first: first.to_string(),
                second: tag.name.clone(),
                stem,
            });
        }
    }

    Ok(())
}

fn write_list(
    output_dir: &Path,
    tag_name: &str,
    stem: &str,
    family: AddressFamily,
    prefixes: &[String],
) -> Result<WrittenFile> {
    let logical_name = format!("{stem}{}", family.file_suffix());
    let relative_path = format!("{logical_name}.txt");

    let mut contents = String::new();
    for prefix in prefixes {
        contents.push_str(prefix);
        contents.push('\n');
    }
    fs::write(output_dir.join(&relative_path), contents)?;

    Ok(WrittenFile {
        tag_name: tag_name.to_string(),
        logical_name,
        relative_path,
        family,
        lines: prefixes.len(),
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
