use std::fs;

use tempfile::tempdir;

use super::io::parse_config;
use super::{Config, ConfigError, load_config};

#[test]
fn empty_file_uses_defaults() {
    let config: Config = toml::from_str("").expect("empty config should parse");

    assert_eq!(config.history.dir, "checks");
    assert_eq!(config.history.max_scan_records, 500);
    assert_eq!(config.dispatch.poll_interval_secs, 30);
    assert!(config.dispatch.skip_existing_on_start);
    assert!(config.dispatch.track_transitions);
    assert_eq!(config.delivery.timeout_secs, 10);
    assert_eq!(config.slack.username, "checkup");
    assert_eq!(config.enabled_channel_count(), 0);
    assert!(config.validate().is_ok());
}

#[test]
fn loads_channels_from_file() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r##"[history]
dir = "/var/lib/checkup"
max_scan_records = 50

[dispatch]
poll_interval_secs = 15
skip_existing_on_start = false
track_transitions = false

[slack]
enabled = true
webhook = "https://hooks.slack.com/services/T000/B000/XXXX"
channel = "#ops"

[webapi]
enabled = true
url = "http://alerts.internal:8080/checkup"
"##,
    )
    .expect("config should be written");

    let config = load_config(&path).expect("config should load");
    assert_eq!(config.history.dir, "/var/lib/checkup");
    assert_eq!(config.history.max_scan_records, 50);
    assert_eq!(config.dispatch.poll_interval_secs, 15);
    assert!(!config.dispatch.skip_existing_on_start);
    assert!(!config.dispatch.track_transitions);
    assert_eq!(config.slack.channel, "#ops");
    assert_eq!(config.enabled_channel_count(), 2);
}

#[test]
fn enabled_channel_needs_http_url() {
    let config: Config = toml::from_str("[slack]\nenabled = true\n").expect("parse");
    let error = config.validate().expect_err("missing webhook");
    assert!(error.to_string().contains("slack.webhook must not be empty"));

    let config: Config =
        toml::from_str("[webapi]\nenabled = true\nurl = \"ftp://example.com\"\n").expect("parse");
    let error = config.validate().expect_err("non-http url");
    assert!(error.to_string().contains("webapi.url must be an http or https url"));

    let config: Config = toml::from_str("[webapi]\nenabled = false\nurl = \"\"\n").expect("parse");
    assert!(config.validate().is_ok());
}

#[test]
fn zero_intervals_are_rejected() {
    for raw in [
        "[dispatch]\npoll_interval_secs = 0\n",
        "[delivery]\ntimeout_secs = 0\n",
        "[history]\nmax_scan_records = 0\n",
        "[history]\ndir = \" \"\n",
    ] {
        let config: Config = toml::from_str(raw).expect("parse");
        assert!(
            matches!(config.validate(), Err(ConfigError::Validation(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn read_and_parse_failures_name_the_file() {
    let temp = tempdir().expect("temp dir");

    let missing = temp.path().join("absent.toml");
    assert!(matches!(
        load_config(&missing),
        Err(ConfigError::Read { path, .. }) if path.ends_with("absent.toml")
    ));

    let broken = temp.path().join("broken.toml");
    fs::write(&broken, "[dispatch\npoll_interval_secs = 1").expect("write broken config");
    assert!(matches!(
        load_config(&broken),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn errors_name_the_notifier_config() {
    let error = parse_config("[dispatch]\npoll_interval_secs = 0", "inline.toml".to_string())
        .expect_err("zero poll interval should be rejected");
    assert!(error.to_string().starts_with("invalid notifier config:"));

    let error = parse_config("[history", "inline.toml".to_string())
        .expect_err("broken toml should be rejected");
    assert!(error.to_string().contains("notifier config inline.toml"));
}
