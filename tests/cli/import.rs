use anyhow::Result;

use crate::{CliTest, run};

const SHEET: &str = "Bundle\tDomain\tKey\ten\tfr\n\
                     app\tmessages\thello\tHello\tBonjour\n\
                     app\tmessages\tbye\tBye\tAu revoir\n\
                     shop\tmessages\tcart\tCart\tPanier\n";

#[test]
fn test_import_summary() -> Result<()> {
    let test = CliTest::with_file("catalog.csv", SHEET)?;

    let output = run(test
        .import_command()
        .args(["catalog.csv", "--locales", "en,fr"]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(
        output
            .stdout
            .contains("Imported 3 keys (6 values) across 2 bundles")
    );
    assert!(output.stdout.contains("locales: en, fr"));

    Ok(())
}

#[test]
fn test_import_bundle_filter() -> Result<()> {
    let test = CliTest::with_file("catalog.csv", SHEET)?;

    let output = run(test.import_command().args([
        "catalog.csv",
        "--locales",
        "en",
        "--bundles",
        "shop",
    ]))?;

    assert!(output.success);
    assert!(
        output
            .stdout
            .contains("Imported 1 key (1 value) across 1 bundle")
    );

    Ok(())
}

#[test]
fn test_import_missing_key_column_fails() -> Result<()> {
    let test = CliTest::with_file("catalog.csv", "Bundle\tDomain\ten\napp\tmessages\tHello\n")?;

    let output = run(test
        .import_command()
        .args(["catalog.csv", "--locales", "en"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("mandatory column 'Key' is missing"));

    Ok(())
}

#[test]
fn test_import_missing_locale_column_fails() -> Result<()> {
    let test = CliTest::with_file("catalog.csv", SHEET)?;

    let output = run(test
        .import_command()
        .args(["catalog.csv", "--locales", "en,de"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("locale column 'de' is missing"));

    Ok(())
}

#[test]
fn test_import_short_row_cites_row_and_locale() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.csv",
        "Bundle\tDomain\tKey\ten\tfr\n\
         app\tmessages\thello\tHello\tBonjour\n\
         app\tmessages\tbye\tBye\n",
    )?;

    let output = run(test
        .import_command()
        .args(["catalog.csv", "--locales", "en,fr"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("row 2"));
    assert!(output.stderr.contains("'fr'"));

    Ok(())
}

#[test]
fn test_import_missing_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test
        .import_command()
        .args(["absent.csv", "--locales", "en"]))?;

    assert!(!output.success);
    assert!(output.stderr.contains("file not found"));

    Ok(())
}

#[test]
fn test_import_custom_separator() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.csv",
        "Bundle;Domain;Key;en\napp;messages;hello;Hello\n",
    )?;

    let output = run(test.import_command().args([
        "catalog.csv",
        "--locales",
        "en",
        "--separator",
        ";",
    ]))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Imported 1 key"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;
    assert!(output.success);
    assert!(output.stdout.contains("import"));
    assert!(output.stdout.contains("export"));

    Ok(())
}
