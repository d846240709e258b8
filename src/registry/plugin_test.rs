use super::*;
use chrono::TimeZone;

const SAMPLE: &str = r##"[
  {
    "module_name": "nonebot_plugin_status",
    "project_link": "nonebot-plugin-status",
    "name": "服务器状态查看",
    "desc": "通过戳一戳获取服务器状态",
    "author": "yanyongyu",
    "homepage": "https://github.com/nonebot/plugin-status",
    "tags": [{"label": "server", "color": "#aeeaa8"}],
    "is_official": true,
    "type": "application",
    "supported_adapters": null,
    "valid": true,
    "time": "2023-09-01T00:00:00.000000Z",
    "version": "0.8.1",
    "skip_test": false,
    "author_detail": {"name": "yanyongyu"}
  },
  {
    "module_name": "nonebot_plugin_minimal",
    "project_link": "nonebot-plugin-minimal",
    "name": "minimal",
    "time": "not a date"
  }
]"##;

#[test]
fn test_parse_registry_sample() {
    let records: Vec<PluginRecord> = serde_json::from_str(SAMPLE).unwrap();
    assert_eq!(records.len(), 2);

    let status = &records[0];
    assert_eq!(status.author, "yanyongyu");
    assert!(status.is_official);
    assert_eq!(status.plugin_type.as_deref(), Some("application"));
    assert_eq!(status.supported_adapters, None);
    assert_eq!(
        status.time,
        Some(Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(status.tags[0].label, "server");
}

#[test]
fn test_missing_fields_use_defaults_and_bad_time_is_none() {
    let records: Vec<PluginRecord> = serde_json::from_str(SAMPLE).unwrap();
    let minimal = &records[1];
    assert!(minimal.tags.is_empty());
    assert!(!minimal.is_official);
    assert_eq!(minimal.time, None);
    assert_eq!(minimal.display_time(), "-");
}

#[test]
fn test_parse_time_variants() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(parse_time("2024-01-02T03:04:05Z"), Some(expected));
    assert_eq!(parse_time("2024-01-02T11:04:05+08:00"), Some(expected));
    assert_eq!(parse_time("2024-01-02T03:04:05"), Some(expected));
    assert_eq!(parse_time("yesterday"), None);
}

#[test]
fn test_matches_text_fields() {
    let records: Vec<PluginRecord> = serde_json::from_str(SAMPLE).unwrap();
    let status = &records[0];
    assert!(status.matches_text("服务器"));
    assert!(status.matches_text("yanyong"));
    assert!(status.matches_text("plugin_status"));
    assert!(status.matches_text("plugin-status"));
    assert!(status.matches_text("serv"));
    assert!(!status.matches_text("weather"));
}

#[test]
fn test_tag_rgb() {
    let tag = Tag {
        label: "x".to_string(),
        color: "#aeeaa8".to_string(),
    };
    assert_eq!(tag.rgb(), Some((0xae, 0xea, 0xa8)));

    let bad = Tag {
        label: "x".to_string(),
        color: "green".to_string(),
    };
    assert_eq!(bad.rgb(), None);
}

#[test]
fn test_test_status_and_links() {
    let mut records: Vec<PluginRecord> = serde_json::from_str(SAMPLE).unwrap();
    let status = &mut records[0];
    assert_eq!(status.test_status(), TestStatus::Passed);
    assert_eq!(status.install_command(), "nb plugin install nonebot-plugin-status");
    assert_eq!(status.pypi_url(), "https://pypi.org/project/nonebot-plugin-status/");

    status.skip_test = true;
    assert_eq!(status.test_status(), TestStatus::Skipped);
    assert_eq!(records[1].test_status(), TestStatus::Failed);
}
