use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["prefix"], "$$$/Piwigo");
    assert_eq!(parsed["lang"], "en");
    assert_eq!(parsed["minLength"], 3);
    assert_eq!(parsed["ignoreLog"], true);
    assert!(
        parsed.get("technicalContextTriggers").is_some(),
        "Config should have 'technicalContextTriggers' field"
    );

    assert!(
        content.contains("\n  \"prefix\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .lrlocrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".lrlocrc.json").exists());
    let content = test.read_file(".lrlocrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lrlocrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .lrlocrc.json already exists
    ");

    assert_eq!(test.read_file(".lrlocrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("Main.lua", r#"title = "Hello world""#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
