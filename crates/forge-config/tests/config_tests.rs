//! Integration tests for configuration loading and merging

use forge_config::{ConfigLoader, LinkPolicy, ProjectConfig, TargetRules};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn write_project(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("forge.toml"), content).unwrap();
}

#[test]
fn loads_rules_from_project_file() {
    let dir = TempDir::new().unwrap();
    write_project(
        &dir,
        r#"
[game]
name = "Sandstorm"

[rules]
link_policy = "monolithic"
output_to_engine_binaries = false
with_server_code = true
"#,
    );

    let mut loader = ConfigLoader::new();
    let config = loader.load_from_directory(dir.path()).unwrap();

    assert_eq!(config.game_name(), Some("Sandstorm"));
    let rules = config.target_rules();
    assert_eq!(rules.link_policy, Some(LinkPolicy::Monolithic));
    assert!(!rules.output_to_engine_binaries);
    assert!(rules.with_server_code);
}

#[test]
fn missing_rules_section_defaults() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "[game]\nname = \"Sandstorm\"\n");

    let mut loader = ConfigLoader::new();
    let config = loader.load_from_directory(dir.path()).unwrap();

    assert_eq!(config.target_rules(), TargetRules::default());
}

#[rstest]
#[case("link_policy = \"monolithic\"", Some(LinkPolicy::Monolithic))]
#[case("link_policy = \"modular\"", Some(LinkPolicy::Modular))]
#[case("", None)]
fn link_policy_variants(#[case] rules_line: &str, #[case] expected: Option<LinkPolicy>) {
    let dir = TempDir::new().unwrap();
    write_project(
        &dir,
        &format!("[game]\nname = \"Sandstorm\"\n\n[rules]\n{}\n", rules_line),
    );

    let mut loader = ConfigLoader::new();
    let config = loader.load_from_directory(dir.path()).unwrap();
    assert_eq!(config.target_rules().link_policy, expected);
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_project(&dir, "[game\nname = \"broken\"");

    let mut loader = ConfigLoader::new();
    assert!(loader.load_from_directory(dir.path()).is_err());
}

#[test]
fn unknown_rules_field_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_project(
        &dir,
        r#"
[game]
name = "Sandstorm"

[rules]
monolithic = true
"#,
    );

    let mut loader = ConfigLoader::new();
    assert!(loader.load_from_directory(dir.path()).is_err());
}

#[test]
fn project_config_roundtrips_through_toml() {
    let original: ProjectConfig = toml::from_str(
        r#"
[game]
name = "Sandstorm"
default_platform = "ps4"

[rules]
link_policy = "monolithic"
"#,
    )
    .unwrap();

    let serialized = toml::to_string(&original).unwrap();
    let reparsed: ProjectConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(original, reparsed);
}
