//! Generate firewall External Dynamic List (EDL) files from the Azure Service Tags feed.
//!
//! The crate is a single-pass pipeline: fetch the weekly `ServiceTags_Public_*.json` document
//! ([Client]), parse and validate it ([ServiceTagFeed]), filter the service tags ([Selection]),
//! split each tag's prefixes by address family ([Partition]), write per-tag allowlist files
//! ([write_edls]), and index the written files as public URLs ([build_url_index]).
//!
//! ```no_run
//! # fn main() -> azureedl::Result<()> {
//! let feed = azureedl::get_feed()?;
//!
//! let selection = azureedl::SelectionBuilder::new()
//!     .include(["AzureCloud", "Storage"])
//!     .build();
//!
//! let written = azureedl::write_edls("./edl".as_ref(), &feed.select(&selection))?;
//! let index = azureedl::build_url_index("https://example.com/edl", &written);
//! azureedl::write_url_index("./edl-urls.csv".as_ref(), &index)?;
//! # Ok(())
//! # }
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{
    get_feed, Client, ClientBuilder, Source, CONFIRMATION_URL, DETAILS_URL,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::index::{build_url_index, resolve_url, write_url_index, UrlIndexEntry};
pub use crate::core::partition::{classify, AddressFamily, Partition};
pub use crate::core::render::{sanitize_tag_name, write_edls, WrittenFile};
pub use crate::core::selection::{Selection, SelectionBuilder};
pub use crate::core::service_tags::{ServiceTag, ServiceTagFeed};
