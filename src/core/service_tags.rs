use crate::core::errors::{Error, Result};
use crate::core::json;
use crate::core::selection::Selection;

/*-------------------------------------------------------------------------------------------------
  Service Tag Feed
-------------------------------------------------------------------------------------------------*/

/// The parsed and validated Service Tags feed: the feed's change number and cloud identifier,
/// plus the ordered sequence of [ServiceTag] entries. All data is transient - a feed is built
/// fresh from the raw JSON on every run and lives only in memory.
#[derive(Debug, Eq, PartialEq)]
pub struct ServiceTagFeed {
    pub change_number: Option<u64>,
    pub cloud: Option<String>,

    tags: Vec<ServiceTag>,
}

/// A named group of IP address prefixes representing one cloud service. Prefixes are CIDR
/// strings in upstream order, mixed IPv4/IPv6, possibly empty.
#[derive(Debug, Eq, PartialEq)]
pub struct ServiceTag {
    pub name: String,
    pub address_prefixes: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  Service Tag Feed Implementation
--------------------------------------------------------------------------------------*/

impl ServiceTagFeed {
    /// Parse and validate a raw Service Tags JSON document.
    ///
    /// Fails with [Error::Parse] when the document is not valid JSON and with [Error::Schema]
    /// when the top-level `values` list is absent or an entry has an empty `name`. Entries with
    /// zero address prefixes are retained - they simply produce empty EDL files.
    ///
    /// ```
    /// let json = r#"{"values": [{"name": "Storage", "properties": {"addressPrefixes": []}}]}"#;
    /// let feed = azureedl::ServiceTagFeed::from_json(json).unwrap();
    /// assert_eq!(feed.tags().len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw = json::parse(json)?;

        let values = raw.values.ok_or_else(|| {
            Error::Schema("document does not contain a `values` or `value` list".to_string())
        })?;

        let mut tags = Vec::with_capacity(values.len());
        for value in values {
            if value.name.is_empty() {
                return Err(Error::Schema(
                    "service tag entry with a missing or empty `name`".to_string(),
                ));
            }
            tags.push(ServiceTag {
                name: value.name,
                address_prefixes: value.properties.address_prefixes,
            });
        }

        Ok(Self {
            change_number: raw.change_number,
            cloud: raw.cloud,
            tags,
        })
    }

    /// All service tag entries, in feed order.
    pub fn tags(&self) -> &[ServiceTag] {
        &self.tags
    }

    /// The subset of entries whose names pass the [Selection] criteria, preserving feed order.
    /// Pure function with no failure mode - an empty selection selects everything.
    pub fn select(&self, selection: &Selection) -> Vec<&ServiceTag> {
        self.tags
            .iter()
            .filter(|tag| selection.includes(&tag.name))
            .collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
