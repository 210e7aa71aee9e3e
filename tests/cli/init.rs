use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Created .locsheetrc.json"));
    assert!(test.path(".locsheetrc.json").exists());

    let config = test.read_file(".locsheetrc.json")?;
    assert!(config.contains("\"referenceLocale\""));
    assert!(config.contains("\"translationsRoot\""));

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::with_file(".locsheetrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert!(!output.success);
    assert!(output.stderr.contains(".locsheetrc.json already exists"));
    assert_eq!(test.read_file(".locsheetrc.json")?, "{}");

    Ok(())
}
