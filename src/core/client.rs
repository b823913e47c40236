use crate::core::errors::{Error, Result};
use crate::core::service_tags::ServiceTagFeed;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Feed Locations
-------------------------------------------------------------------------------------------------*/

/// Microsoft "Azure IP Ranges and Service Tags - Public Cloud" download pages. The weekly JSON
/// file sits behind these pages at a versioned `download.microsoft.com` URL that has to be
/// discovered on every run.
pub const DETAILS_URL: &str = "https://www.microsoft.com/en-us/download/details.aspx?id=56519";
pub const CONFIRMATION_URL: &str =
    "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519";

lazy_static! {
    static ref FEED_URL_REGEX: Regex = Regex::new(
        r#"https://download\.microsoft\.com/download/[^"]*ServiceTags_Public_[0-9]+\.json"#
    )
    .unwrap();
}

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ discovers, retrieves, and parses the current Azure Service
/// Tags feed using the default client configuration. Returns a [ServiceTagFeed] ready for
/// selection and rendering.
///
/// ```no_run
/// let feed = azureedl::get_feed().unwrap();
/// for tag in feed.tags() {
///     println!("{}: {} prefixes", tag.name, tag.address_prefixes.len());
/// }
/// ```
pub fn get_feed() -> Result<ServiceTagFeed> {
    Client::new().get_feed()
}

/*-------------------------------------------------------------------------------------------------
  Feed Source
-------------------------------------------------------------------------------------------------*/

/// Where the raw Service Tags JSON comes from.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Source {
    /// Scrape the Microsoft download pages for the current `ServiceTags_Public_*.json` link,
    /// then download it.
    #[default]
    Discover,

    /// Download the feed directly from this URL.
    Url(String),

    /// Read the feed from a local file.
    File(PathBuf),
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
///
/// ```
/// let client = azureedl::ClientBuilder::new()
///     .url("https://download.microsoft.com/example/ServiceTags_Public_20260803.json")
///     .timeout(10)
///     .save_json("/tmp/service-tags.json")
///     .build();
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set. If
/// you want to ignore any environment variables, use [ClientBuilder::default] instead.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    source: Source,
    timeout: Option<u64>,
    save_json: Option<PathBuf>,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from environment
    /// variables when set:
    /// - `AZUREEDL_FEED_URL` - fetch the feed from this URL instead of running discovery
    /// - `AZUREEDL_TIMEOUT` - HTTP request timeout in seconds
    pub fn new() -> Self {
        let source = match env::var("AZUREEDL_FEED_URL") {
            Ok(url) if !url.is_empty() => {
                info!("Using AZUREEDL_FEED_URL: {url}");
                Source::Url(url)
            }
            _ => Source::Discover,
        };

        let timeout = env::var("AZUREEDL_TIMEOUT").ok().and_then(|value| {
            value
                .parse::<u64>()
                .inspect(|_| info!("Using AZUREEDL_TIMEOUT: {value}"))
                .inspect_err(|_| warn!("Invalid AZUREEDL_TIMEOUT: {value}"))
                .ok()
        });

        Self {
            source,
            timeout,
            save_json: None,
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Fetch the feed directly from this URL, skipping discovery.
    pub fn url(mut self, url: &str) -> Self {
        self.source = Source::Url(url.to_string());
        self
    }

    /// Read the feed from a local file instead of the network.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Source::File(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout in seconds; defaults to 30. The feed is fetched with a
    /// single attempt - there is no retry.
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Also save the raw fetched JSON to this path (a pass-through save, not a cache).
    pub fn save_json<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.save_json = Some(path.as_ref().to_path_buf());
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(self) -> Client {
        Client {
            source: self.source,
            timeout: self.timeout.unwrap_or(30),
            save_json: self.save_json,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving the Azure Service Tags feed from a URL, a local file, or (by
/// default) by discovering the current weekly download link on the Microsoft download pages.
///
/// ```no_run
/// let client = azureedl::Client::new();
/// let feed = client.get_feed().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    source: Source,
    timeout: u64,
    save_json: Option<PathBuf>,
}

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// The configured feed source.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The HTTP request timeout in seconds. Defaults to 30.
    ///
    /// ```
    /// let client = azureedl::Client::default();
    /// assert_eq!(client.timeout(), 30);
    /// ```
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// The pass-through save path for the raw fetched JSON, when configured.
    pub fn save_json(&self) -> Option<&Path> {
        self.save_json.as_deref()
    }

    /*-------------------------------------------------------------------------
      Get Feed
    -------------------------------------------------------------------------*/

    /// Retrieve, parse, and validate the Service Tags feed from the configured source.
    pub fn get_feed(&self) -> Result<ServiceTagFeed> {
        let json = self.get_json()?;
        ServiceTagFeed::from_json(&json)
    }

    /// Retrieve the raw Service Tags JSON from the configured source, saving a pass-through
    /// copy when requested.
    pub fn get_json(&self) -> Result<String> {
        let json = match &self.source {
            Source::File(path) => self.get_json_from_file(path)?,
            Source::Url(url) => self.get_json_from_url(url)?,
            Source::Discover => {
                let url = self.discover_feed_url()?;
                self.get_json_from_url(&url)?
            }
        };

        if let Some(path) = &self.save_json {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &json)?;
            info!("Saved raw Service Tags JSON to {path:?}");
        }

        Ok(json)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Find the current `ServiceTags_Public_*.json` download URL. The details page usually
    /// carries the link; the confirmation page is the fallback.
    fn discover_feed_url(&self) -> Result<String> {
        info!("Discovering feed URL: GET {DETAILS_URL}");
        let details_page = self.http_get(DETAILS_URL)?;
        if let Some(url) = find_feed_url(&details_page) {
            info!("Found Service Tags feed URL: {url}");
            return Ok(url);
        }

        info!("No feed link on the details page; trying {CONFIRMATION_URL}");
        let confirmation_page = self.http_get(CONFIRMATION_URL)?;
        if let Some(url) = find_feed_url(&confirmation_page) {
            info!("Found Service Tags feed URL: {url}");
            return Ok(url);
        }

        Err(Error::Fetch(
            "could not find a ServiceTags_Public JSON link on the Microsoft download pages"
                .to_string(),
        ))
    }

    fn get_json_from_url(&self, url: &str) -> Result<String> {
        info!("Get Service Tags feed: GET {url}");
        self.http_get(url)
    }

    fn get_json_from_file(&self, path: &Path) -> Result<String> {
        info!("Get Service Tags feed from file: {path:?}");
        fs::read_to_string(path)
            .map_err(|error| Error::Fetch(format!("failed to read feed file {path:?}: {error}")))
    }

    fn http_get(&self, url: &str) -> Result<String> {
        let response = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .build()?
            .get(url)
            .send()?;
        Ok(response.error_for_status()?.text()?)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Extract the first `ServiceTags_Public_*.json` download link from a download-page document.
fn find_feed_url(html: &str) -> Option<String> {
    FEED_URL_REGEX
        .find(html)
        .map(|found| found.as_str().to_string())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Builder Configuration
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_builder_defaults() {
        let client = Client::default();
        assert_eq!(client.source(), &Source::Discover);
        assert_eq!(client.timeout(), 30);
        assert!(client.save_json().is_none());
    }

    #[test]
    fn test_builder_setters() {
        let client = ClientBuilder::default()
            .url("https://example.com/ServiceTags_Public_20260803.json")
            .timeout(10)
            .save_json("./scratch/service-tags.json")
            .build();

        assert_eq!(
            client.source(),
            &Source::Url("https://example.com/ServiceTags_Public_20260803.json".to_string())
        );
        assert_eq!(client.timeout(), 10);
        assert_eq!(
            client.save_json(),
            Some(Path::new("./scratch/service-tags.json"))
        );
    }

    #[test]
    fn test_builder_file_source() {
        let client = ClientBuilder::default().file("./feed.json").build();
        assert_eq!(client.source(), &Source::File(PathBuf::from("./feed.json")));
    }

    /*----------------------------------------------------------------------------------
      Feed URL Discovery
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_find_feed_url() {
        let html = r#"<a href="https://download.microsoft.com/download/7/1/d/ServiceTags_Public_20260803.json">Download</a>"#;
        assert_eq!(
            find_feed_url(html).unwrap(),
            "https://download.microsoft.com/download/7/1/d/ServiceTags_Public_20260803.json"
        );
    }

    #[test]
    fn test_find_feed_url_takes_first_match() {
        let html = concat!(
            r#"<a href="https://download.microsoft.com/download/a/ServiceTags_Public_20260803.json">"#,
            r#"<a href="https://download.microsoft.com/download/b/ServiceTags_Public_20260727.json">"#,
        );
        assert_eq!(
            find_feed_url(html).unwrap(),
            "https://download.microsoft.com/download/a/ServiceTags_Public_20260803.json"
        );
    }

    #[test]
    fn test_find_feed_url_no_match() {
        assert!(find_feed_url("<html><body>No downloads here</body></html>").is_none());
    }

    /*----------------------------------------------------------------------------------
      File Source
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_get_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("feed.json");
        fs::write(&feed_path, r#"{"values": []}"#).unwrap();

        let client = ClientBuilder::default().file(&feed_path).build();
        assert_eq!(client.get_json().unwrap(), r#"{"values": []}"#);
    }

    #[test]
    fn test_get_json_from_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let client = ClientBuilder::default()
            .file(dir.path().join("absent.json"))
            .build();

        assert!(matches!(client.get_json(), Err(Error::Fetch(_))));
    }

    #[test]
    fn test_save_json_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("feed.json");
        let saved_path = dir.path().join("saved").join("feed-copy.json");
        fs::write(&feed_path, r#"{"values": []}"#).unwrap();

        let client = ClientBuilder::default()
            .file(&feed_path)
            .save_json(&saved_path)
            .build();
        client.get_json().unwrap();

        // Byte-for-byte copy of the raw feed
        assert_eq!(
            fs::read(&saved_path).unwrap(),
            fs::read(&feed_path).unwrap()
        );
    }

    #[test]
    fn test_get_feed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("feed.json");
        fs::write(
            &feed_path,
            r#"{"values": [{"name": "Sql", "properties": {"addressPrefixes": ["192.0.2.0/24"]}}]}"#,
        )
        .unwrap();

        let client = ClientBuilder::default().file(&feed_path).build();
        let feed = client.get_feed().unwrap();

        assert_eq!(feed.tags().len(), 1);
        assert_eq!(feed.tags()[0].name, "Sql");
    }
}
