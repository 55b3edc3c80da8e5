use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::CliTest;

const UPLOAD_TASK: &str = r#"local LrDialogs = import 'LrDialogs'

function PWUploadTask.processRenderedPhotos(functionContext, exportContext)
    log("Starting upload")
    local title = "Cannot upload - "
    progress:setCaption(LOC "$$$/Piwigo/UploadTask/Progress=Uploading photos")
    LrDialogs.message(
        "Delete this album?", "Are you sure?")
    statusMsg = "Published " .. count .. " photos to album"
end
"#;

#[test]
fn test_extract_writes_artefacts() -> Result<()> {
    let test = CliTest::with_file("PWUploadTask.lua", UPLOAD_TASK)?;
    test.write_file("JSON.lua", r#"title = "Never scanned""#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let key_file = test.read_output("out", "TranslatedStrings_en.txt")?;
    let mut settings = insta::Settings::clone_current();
    settings.add_filter(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}", "[DATE]");
    settings.bind(|| {
        assert_snapshot!(key_file, @r#"
        -- =============================================================================
        -- Plugin Localization - EN
        -- Generated: [DATE]
        -- Total keys: 6
        -- =============================================================================

        -- UploadTask
        "$$$/Piwigo/UploadTask/CannotUpload=Cannot upload"
        "$$$/Piwigo/UploadTask/DeleteAlbumQuestion=Delete this album?"
        "$$$/Piwigo/UploadTask/PhotosAlbum=photos to album"
        "$$$/Piwigo/UploadTask/Progress=Uploading photos"
        "$$$/Piwigo/UploadTask/Published=Published"
        "$$$/Piwigo/UploadTask/YouSureQuestion=Are you sure?"
        "#);
    });

    Ok(())
}

#[test]
fn test_extract_replacements_and_metadata() -> Result<()> {
    let test = CliTest::with_file("PWUploadTask.lua", UPLOAD_TASK)?;
    test.extract_command().output()?;

    let replacements: Value =
        serde_json::from_str(&test.read_output("out", "replacements.json")?)?;
    let lines = replacements["files"]["PWUploadTask.lua"]["replacements"]
        .as_array()
        .unwrap();
    let line_nums: Vec<u64> = lines.iter().map(|l| l["line_num"].as_u64().unwrap()).collect();
    assert_eq!(line_nums, vec![5, 8, 9]);

    let concat = &lines[2];
    assert_eq!(concat["is_concatenated"], true);
    assert_eq!(
        concat["replaced_line"],
        r#"statusMsg = LOC "$$$/Piwigo/UploadTask/Published=Published" .. " " .. count .. " " .. LOC "$$$/Piwigo/UploadTask/PhotosAlbum=photos to album""#
    );
    assert_eq!(replacements["prefix"], "$$$/Piwigo");
    assert_eq!(replacements["stats"]["unique_keys"], 5);

    let metadata: Value =
        serde_json::from_str(&test.read_output("out", "spacing_metadata.json")?)?;
    assert_eq!(metadata["total_keys_with_spacing"], 3);
    assert_eq!(
        metadata["metadata"]["$$$/Piwigo/UploadTask/CannotUpload"]["suffix"],
        " - "
    );

    let report = test.read_output("out", "extraction_report.txt")?;
    assert!(report.contains("Log lines ignored         : 1\n"));
    assert!(report.contains("  🔒 PWUploadTask.lua:6\n"));

    Ok(())
}

#[test]
fn test_extract_default_output_location() -> Result<()> {
    let test = CliTest::with_file("Info.lua", r#"LrPluginName = "Piwigo Publisher Plus","#)?;

    let output = test.command().arg("extract").output()?;
    assert!(output.status.success());

    let key_file = test.read_output("__i18n_kit__/Extractor", "TranslatedStrings_en.txt")?;
    assert!(key_file.contains("\"$$$/Piwigo/Info/PiwigoPublisherPlus=Piwigo Publisher Plus\"\n"));

    // A second run must not pick up the previous run's artefacts.
    let stdout = String::from_utf8(test.command().arg("extract").output()?.stdout)?;
    assert!(stdout.contains("Files processed           : 1\n"));

    Ok(())
}

#[test]
fn test_extract_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("Main.lua", "title = \"Ok now\"\nlog(\"debug\"); statusMsg = \"Upload started\"\n")?;
    test.write_file(".lrlocrc.json", r#"{ "prefix": "$$$/FromConfig" }"#)?;

    let output = test
        .extract_command()
        .args(["--prefix", "$$$/MyPlugin", "--lang", "fr", "--no-ignore-log"])
        .output()?;
    assert!(output.status.success());

    let key_file = test.read_output("out", "TranslatedStrings_fr.txt")?;
    assert!(key_file.contains("-- Plugin Localization - FR\n"));
    assert!(key_file.contains("\"$$$/MyPlugin/Main/OkNow=Ok now\"\n"));
    assert!(key_file.contains("\"$$$/MyPlugin/Main/UploadStarted=Upload started\"\n"));

    Ok(())
}

#[test]
fn test_extract_exclude_and_min_length() -> Result<()> {
    let test = CliTest::with_file("Main.lua", "title = \"Abcd\"\ntitle = \"Abcde\"\n")?;
    test.write_file("Vendor.lua", r#"title = "Vendor title""#)?;

    let output = test
        .extract_command()
        .args(["--exclude", "Vendor.lua", "--min-length", "5"])
        .output()?;
    assert!(output.status.success());

    let key_file = test.read_output("out", "TranslatedStrings_en.txt")?;
    assert!(key_file.contains("-- Total keys: 1\n"));
    assert!(key_file.contains("\"$$$/Piwigo/Main/Abcde=Abcde\"\n"));

    Ok(())
}

#[test]
fn test_extract_missing_plugin_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["extract", "missing.lrplugin"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Plugin directory not found: missing.lrplugin"));

    Ok(())
}

#[test]
fn test_extract_invalid_config() -> Result<()> {
    let test = CliTest::with_file("Main.lua", r#"title = "Hello world""#)?;
    test.write_file(".lrlocrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("ignores"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Usage:"));

    Ok(())
}
