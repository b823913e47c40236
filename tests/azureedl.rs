use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  azureedl Binary Tests
-------------------------------------------------------------------------------------------------*/

const TEST_FEED: &str = r#"{
  "changeNumber": 342,
  "cloud": "Public",
  "values": [
    {
      "name": "AzureCloud",
      "id": "AzureCloud",
      "properties": {
        "changeNumber": 27,
        "platform": "Azure",
        "addressPrefixes": ["10.0.0.0/8", "2001:db8::/32"]
      }
    },
    {
      "name": "Storage",
      "id": "Storage",
      "properties": {
        "changeNumber": 9,
        "platform": "Azure",
        "addressPrefixes": []
      }
    }
  ]
}"#;

fn write_test_feed(dir: &Path) -> std::path::PathBuf {
    let feed_path = dir.join("feed.json");
    fs::write(&feed_path, TEST_FEED).unwrap();
    feed_path
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("azureedl")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Generate EDLs from a Local Feed File
--------------------------------------------------------------------------------------*/

#[test]
fn command_generate_from_feed_file() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .assert()
        .success();

    let read = |name: &str| fs::read_to_string(output_dir.join(name)).unwrap();

    assert_eq!(read("azurecloud.txt"), "10.0.0.0/8\n2001:db8::/32\n");
    assert_eq!(read("azurecloud_v4.txt"), "10.0.0.0/8\n");
    assert_eq!(read("azurecloud_v6.txt"), "2001:db8::/32\n");
    assert_eq!(read("storage.txt"), "");
    assert_eq!(read("storage_v4.txt"), "");
    assert_eq!(read("storage_v6.txt"), "");
}

/*--------------------------------------------------------------------------------------
  Tag Selection
--------------------------------------------------------------------------------------*/

#[test]
fn command_include_tags() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--include-tags")
        .arg("AzureCloud")
        .assert()
        .success();

    assert!(output_dir.join("azurecloud.txt").exists());
    assert!(!output_dir.join("storage.txt").exists());
}

#[test]
fn command_exclude_tags() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--exclude-tags")
        .arg("AzureCloud")
        .assert()
        .success();

    assert!(!output_dir.join("azurecloud.txt").exists());
    assert!(output_dir.join("storage.txt").exists());
}

/*--------------------------------------------------------------------------------------
  Save JSON Pass-Through
--------------------------------------------------------------------------------------*/

#[test]
fn command_save_json() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");
    let saved_path = dir.path().join("saved-feed.json");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--save-json")
        .arg(&saved_path)
        .assert()
        .success();

    assert_eq!(
        fs::read(&saved_path).unwrap(),
        fs::read(&feed_path).unwrap()
    );
}

/*--------------------------------------------------------------------------------------
  URL Index
--------------------------------------------------------------------------------------*/

#[test]
fn command_url_index() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");
    let index_path = dir.path().join("edl-urls.csv");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--url-index")
        .arg(&index_path)
        .arg("--url-base")
        .arg("https://example.com/edl")
        .assert()
        .success();

    let index = fs::read_to_string(&index_path).unwrap();
    assert!(index.contains("azurecloud,https://example.com/edl/azurecloud.txt\n"));
    assert!(index.contains("azurecloud_v4,https://example.com/edl/azurecloud_v4.txt\n"));
    assert!(index.contains("storage_v6,https://example.com/edl/storage_v6.txt\n"));
    assert!(!index.contains("//azurecloud")); // No double slash in resolved URLs
}

#[test]
fn command_url_index_requires_base_url() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");
    let index_path = dir.path().join("edl-urls.csv");

    Command::cargo_bin("azureedl")
        .unwrap()
        .env_remove("EDL_URL_BASE")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_REF_NAME")
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--url-index")
        .arg(&index_path)
        .assert()
        .failure()
        .stderr(contains("configuration error"));
}

#[test]
fn command_url_index_base_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");
    let index_path = dir.path().join("edl-urls.csv");

    Command::cargo_bin("azureedl")
        .unwrap()
        .env("EDL_URL_BASE", "https://cdn.example.net/lists/")
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--url-index")
        .arg(&index_path)
        .assert()
        .success();

    let index = fs::read_to_string(&index_path).unwrap();
    assert!(index.contains("azurecloud,https://cdn.example.net/lists/azurecloud.txt\n"));
}

#[test]
fn command_url_index_base_from_github_context() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");
    let index_path = dir.path().join("edl-urls.csv");

    Command::cargo_bin("azureedl")
        .unwrap()
        .env_remove("EDL_URL_BASE")
        .env("GITHUB_REPOSITORY", "example/edl-lists")
        .env("GITHUB_REF_NAME", "main")
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .arg("--url-index")
        .arg(&index_path)
        .assert()
        .success();

    let index = fs::read_to_string(&index_path).unwrap();
    assert!(index.contains(
        "azurecloud,https://raw.githubusercontent.com/example/edl-lists/main/azurecloud.txt\n"
    ));
}

/*--------------------------------------------------------------------------------------
  Determinism
--------------------------------------------------------------------------------------*/

#[test]
fn command_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = write_test_feed(dir.path());
    let output_dir = dir.path().join("edl");

    let run = || {
        Command::cargo_bin("azureedl")
            .unwrap()
            .arg(&output_dir)
            .arg("--feed-file")
            .arg(&feed_path)
            .assert()
            .success();
    };

    run();
    let first = fs::read(output_dir.join("azurecloud.txt")).unwrap();
    run();
    let second = fs::read(output_dir.join("azurecloud.txt")).unwrap();

    assert_eq!(first, second);
}

/*--------------------------------------------------------------------------------------
  Failure Modes
--------------------------------------------------------------------------------------*/

#[test]
fn command_missing_feed_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(contains("feed fetch failed"));
}

#[test]
fn command_malformed_feed_json() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.json");
    fs::write(&feed_path, "{not json").unwrap();
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .assert()
        .failure()
        .stderr(contains("invalid feed JSON"));
}

#[test]
fn command_feed_without_values_list() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.json");
    fs::write(&feed_path, r#"{"changeNumber": 1, "cloud": "Public"}"#).unwrap();
    let output_dir = dir.path().join("edl");

    Command::cargo_bin("azureedl")
        .unwrap()
        .arg(&output_dir)
        .arg("--feed-file")
        .arg(&feed_path)
        .assert()
        .failure()
        .stderr(contains("unexpected feed shape"));
}
