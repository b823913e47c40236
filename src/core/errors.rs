use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Error type used throughout the crate. Every pipeline stage maps its failures to one of these
/// variants; all of them abort a run except [Error::AddressFormat], which the address partitioner
/// recovers per line (skip and warn).
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure, non-success HTTP status, missing local feed file, or a failed
    /// feed-URL discovery.
    #[error("feed fetch failed: {0}")]
    Fetch(String),

    /// The feed document is not valid JSON.
    #[error("invalid feed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The feed document is valid JSON but does not have the expected shape.
    #[error("unexpected feed shape: {0}")]
    Schema(String),

    /// An address prefix string is neither an IPv4 nor an IPv6 CIDR prefix.
    #[error("unrecognized address prefix: {0:?}")]
    AddressFormat(String),

    /// Two distinct service tag names sanitize to the same output file stem.
    #[error("service tags {first:?} and {second:?} both sanitize to file stem {stem:?}")]
    NamingCollision {
        first: String,
        second: String,
        stem: String,
    },

    /// Invalid or incomplete run configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure writing EDL files, the URL index, or the saved feed JSON.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Error Conversions
--------------------------------------------------------------------------------------*/

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Fetch(error.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Io(std::io::Error::other(error))
    }
}
