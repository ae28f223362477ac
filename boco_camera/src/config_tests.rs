use super::*;

// ============================================================================
// DisplayConfig
// ============================================================================

#[test]
fn test_display_config_default() {
    let display = DisplayConfig::default();
    assert_eq!(display.width, 1280);
    assert_eq!(display.height, 720);
}

#[test]
fn test_display_config_from_map() {
    let mut map: HashMap<String, i64> = HashMap::new();
    map.insert("display.width".to_string(), 960);
    map.insert("display.height".to_string(), 640);

    let display = DisplayConfig::from_source(&map).unwrap();
    assert_eq!(display, DisplayConfig { width: 960, height: 640 });
}

#[test]
fn test_display_config_partial_map_uses_defaults() {
    let mut map: HashMap<String, i64> = HashMap::new();
    map.insert("display.height".to_string(), 1080);

    let display = DisplayConfig::from_source(&map).unwrap();
    assert_eq!(display.width, DEFAULT_DISPLAY_WIDTH);
    assert_eq!(display.height, 1080);
}

#[test]
fn test_display_config_rejects_non_positive() {
    let mut map: HashMap<String, i64> = HashMap::new();
    map.insert("display.width".to_string(), -5);

    match DisplayConfig::from_source(&map) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("display.width")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_display_config_rejects_overflow() {
    let mut map: HashMap<String, i64> = HashMap::new();
    map.insert("display.height".to_string(), i64::from(u32::MAX) + 1);

    match DisplayConfig::from_source(&map) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("out of range")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

// ============================================================================
// ProjectConfig
// ============================================================================

const PROJECT: &str = "\
[project]
title = Boco

# reference size
[display]
width = 1920
height = 1080
high_dpi = 1

; physics
[physics]
scale = 0.02
";

#[test]
fn test_project_config_parse() {
    let config = ProjectConfig::parse(PROJECT).unwrap();

    assert_eq!(config.len(), 5);
    assert_eq!(config.get("project.title"), Some("Boco"));
    assert_eq!(config.get("display.width"), Some("1920"));
    assert_eq!(config.get("physics.scale"), Some("0.02"));
    assert_eq!(config.get("display.missing"), None);
}

#[test]
fn test_project_config_as_source() {
    let config = ProjectConfig::parse(PROJECT).unwrap();
    let display = DisplayConfig::from_source(&config).unwrap();
    assert_eq!(display, DisplayConfig { width: 1920, height: 1080 });
}

#[test]
fn test_project_config_non_integer_falls_back() {
    let config = ProjectConfig::parse(PROJECT).unwrap();
    assert_eq!(config.get_int("project.title", 3), 3);
}

#[test]
fn test_project_config_reads_leading_integer() {
    let config = ProjectConfig::parse(
        "[display]\nwidth = 1920.0\nheight = 1080 ; note\noffset = -12px\nplus = +7\nsign = -\n",
    )
    .unwrap();

    assert_eq!(config.get_int("display.width", 0), 1920);
    assert_eq!(config.get_int("display.height", 0), 1080);
    assert_eq!(config.get_int("display.offset", 0), -12);
    assert_eq!(config.get_int("display.plus", 0), 7);
    assert_eq!(config.get_int("display.sign", 5), 5);
    assert_eq!(config.get_int("physics.scale", 9), 9);

    let display = DisplayConfig::from_source(&config).unwrap();
    assert_eq!(display, DisplayConfig { width: 1920, height: 1080 });
}

#[test]
fn test_project_config_empty() {
    let config = ProjectConfig::parse("\n# only a comment\n").unwrap();
    assert!(config.is_empty());
    assert_eq!(DisplayConfig::from_source(&config).unwrap(), DisplayConfig::default());
}

#[test]
fn test_project_config_later_value_wins() {
    let config = ProjectConfig::parse("[display]\nwidth = 800\nwidth = 1024\n").unwrap();
    assert_eq!(config.get_int("display.width", 0), 1024);
}

#[test]
fn test_project_config_rejects_garbage_line() {
    let err = ProjectConfig::parse("[display]\nwidth 1920\n").unwrap_err();
    match err {
        Error::InvalidConfig(msg) => assert!(msg.contains("line 2")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_project_config_rejects_key_outside_section() {
    let err = ProjectConfig::parse("width = 1920\n").unwrap_err();
    assert!(format!("{}", err).contains("outside any section"));
}

#[test]
fn test_project_config_rejects_empty_section_and_key() {
    assert!(ProjectConfig::parse("[ ]\n").is_err());
    assert!(ProjectConfig::parse("[display]\n = 3\n").is_err());
}
