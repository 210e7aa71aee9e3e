use anyhow::Result;

use crate::{CliTest, run};

fn app_sheet() -> &'static str {
    "Bundle\tDomain\tKey\ten\tfr\n\
     app\tmessages\thello\tHello\tBonjour\n\
     app\tmessages\tbye\tBye\t\n"
}

#[test]
fn test_export_app_translations() -> Result<()> {
    let test = CliTest::with_file("translations/messages.en.csv", app_sheet())?;

    let output = run(test
        .export_command()
        .args(["out.csv", "--locales", "en,fr"]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Exported 2 rows from 1 file to out.csv"));

    let exported = test.read_file("out.csv")?;
    assert!(exported.starts_with("Bundle\tDomain\tKey\ten\tfr\n"));
    assert!(exported.contains("app\tmessages\thello\tHello\tBonjour\n"));
    assert!(exported.contains("app\tmessages\tbye\tBye\t\n"));

    Ok(())
}

#[test]
fn test_export_reference_locale_first() -> Result<()> {
    let test = CliTest::with_file("translations/messages.fr.csv", app_sheet())?;
    test.write_file("translations/messages.en.csv", app_sheet())?;
    test.write_file(
        ".locsheetrc.json",
        r#"{ "referenceLocale": "en", "translationsRoot": "./translations" }"#,
    )?;

    let output = run(test
        .export_command()
        .args(["out.csv", "--locales", "fr"]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    let exported = test.read_file("out.csv")?;
    assert!(exported.starts_with("Bundle\tDomain\tKey\ten\tfr\n"));

    Ok(())
}

#[test]
fn test_export_inferred_locales() -> Result<()> {
    let test = CliTest::with_file("translations/messages.en.csv", app_sheet())?;
    test.write_file("translations/messages.fr.csv", app_sheet())?;
    test.write_file("translations/readme.txt", "not a sheet")?;

    let output = run(test.export_command().arg("out.csv"))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("locales: en, fr"));

    Ok(())
}

#[test]
fn test_export_configured_bundle() -> Result<()> {
    let test = CliTest::with_file(
        "src/shop/translations/messages.en.csv",
        "Bundle\tDomain\tKey\ten\nshop\tmessages\tcart\tCart\n",
    )?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
            "bundles": {
                "shop": { "path": "src/shop/translations" }
            }
        }"#,
    )?;

    let output = run(test.export_command().args([
        "out.csv",
        "--bundles",
        "shop",
        "--locales",
        "en",
    ]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    let exported = test.read_file("out.csv")?;
    assert!(exported.contains("shop\tmessages\tcart\tCart\n"));

    Ok(())
}

#[test]
fn test_export_unknown_bundle_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.export_command().args(["out.csv", "--bundles", "ghost"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("unknown bundle 'ghost'"));
    assert!(!test.path("out.csv").exists());

    Ok(())
}

#[test]
fn test_export_only_missing() -> Result<()> {
    let test = CliTest::with_file("translations/messages.en.csv", app_sheet())?;

    let output = run(test.export_command().args([
        "out.csv",
        "--locales",
        "en,fr",
        "--only-missing",
    ]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    let exported = test.read_file("out.csv")?;
    assert!(!exported.contains("hello"));
    assert!(exported.contains("bye"));

    Ok(())
}

#[test]
fn test_export_with_bom() -> Result<()> {
    let test = CliTest::with_file("translations/messages.en.csv", app_sheet())?;

    let output = run(test.export_command().args([
        "out.csv",
        "--locales",
        "en,fr",
        "--bom",
    ]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    let bytes = std::fs::read(test.path("out.csv"))?;
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    assert!(bytes[3..].starts_with(b"Bundle"));

    Ok(())
}

#[test]
fn test_failed_export_writes_nothing() -> Result<()> {
    // The sheet lacks a Key column, so aggregation fails.
    let test = CliTest::with_file(
        "translations/messages.en.csv",
        "Bundle\tDomain\ten\napp\tmessages\tHello\n",
    )?;

    let output = run(test
        .export_command()
        .args(["out.csv", "--locales", "en"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("mandatory column 'Key' is missing"));
    assert!(!test.path("out.csv").exists());

    Ok(())
}

#[test]
fn test_export_verbose_reports_parent_delegation() -> Result<()> {
    let test = CliTest::with_file(
        "base/translations/messages.en.csv",
        "Bundle\tDomain\tKey\ten\nbase\tmessages\thello\tHello\n",
    )?;
    test.write_file(
        ".locsheetrc.json",
        r#"{
            "bundles": {
                "base": { "path": "base/translations" },
                "skin": { "path": "skin/translations", "parent": "base" }
            }
        }"#,
    )?;

    let output = run(test.export_command().args([
        "out.csv",
        "--bundles",
        "skin",
        "--locales",
        "en",
        "--verbose",
    ]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Using 'base' to look up translation files."));
    assert!(test.read_file("out.csv")?.contains("base\tmessages\thello\tHello\n"));

    Ok(())
}
