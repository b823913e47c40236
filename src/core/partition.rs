use crate::core::errors::{Error, Result};
use ipnetwork::IpNetwork;
use log::warn;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Address Family
-------------------------------------------------------------------------------------------------*/

/// Address family of a rendered EDL: the IPv4 subset, the IPv6 subset, or the combined list in
/// upstream order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AddressFamily {
    Combined,
    IPv4,
    IPv6,
}

impl AddressFamily {
    /// File-stem suffix appended to the sanitized tag name for this family.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            AddressFamily::Combined => "",
            AddressFamily::IPv4 => "_v4",
            AddressFamily::IPv6 => "_v6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Combined => write!(f, "combined"),
            AddressFamily::IPv4 => write!(f, "ipv4"),
            AddressFamily::IPv6 => write!(f, "ipv6"),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Prefix Classification
--------------------------------------------------------------------------------------*/

/// Classify a CIDR prefix string as [AddressFamily::IPv4] or [AddressFamily::IPv6].
///
/// Classification is deterministic and never returns [AddressFamily::Combined]. A string that
/// parses as neither family is [Error::AddressFormat].
///
/// ```
/// use azureedl::AddressFamily;
///
/// assert_eq!(azureedl::classify("10.0.0.0/8").unwrap(), AddressFamily::IPv4);
/// assert_eq!(azureedl::classify("2001:db8::/32").unwrap(), AddressFamily::IPv6);
/// assert!(azureedl::classify("not-a-prefix").is_err());
/// ```
pub fn classify(prefix: &str) -> Result<AddressFamily> {
    match prefix.parse::<IpNetwork>() {
        Ok(IpNetwork::V4(_)) => Ok(AddressFamily::IPv4),
        Ok(IpNetwork::V6(_)) => Ok(AddressFamily::IPv6),
        Err(_) => Err(Error::AddressFormat(prefix.to_string())),
    }
}

/*-------------------------------------------------------------------------------------------------
  Partition
-------------------------------------------------------------------------------------------------*/

/// One service tag's address prefixes split by address family. All three sequences preserve the
/// relative order of the source list; the combined sequence is a faithful copy of the upstream
/// list, duplicates included.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Partition {
    pub combined: Vec<String>,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  Partition Implementation
--------------------------------------------------------------------------------------*/

impl Partition {
    /// Split a prefix list into IPv4 and IPv6 subsets.
    ///
    /// A prefix that parses as neither family is logged and skipped from the per-family
    /// subsets but retained in the combined sequence - one bad prefix never aborts a run.
    pub fn split(prefixes: &[String]) -> Self {
        let mut partition = Partition::default();

        for prefix in prefixes {
            partition.combined.push(prefix.clone());
            match prefix.parse::<IpNetwork>() {
                Ok(IpNetwork::V4(_)) => partition.ipv4.push(prefix.clone()),
                Ok(IpNetwork::V6(_)) => partition.ipv6.push(prefix.clone()),
                Err(_) => {
                    warn!("Skipping unrecognized address prefix {prefix:?}; retained in the combined list only");
                }
            }
        }

        partition
    }

    /// The prefix sequence for one address family.
    pub fn family(&self, family: AddressFamily) -> &[String] {
        match family {
            AddressFamily::Combined => &self.combined,
            AddressFamily::IPv4 => &self.ipv4,
            AddressFamily::IPv6 => &self.ipv6,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
