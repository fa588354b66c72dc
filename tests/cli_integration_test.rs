use anyhow::Result;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const EXPECTED_LINES: [&str; 5] = [
    "Hello, World!",
    "Running on MyJSApp",
    "Hi, my name is John Doe and I am 30 years old.",
    "apple",
    "http://example.com",
];

fn demo_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_counter-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_binary_prints_five_lines() -> Result<()> {
    let output = demo_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), EXPECTED_LINES);
    Ok(())
}

#[test]
fn test_verbose_logging_stays_off_stdout() -> Result<()> {
    let mut settings = NamedTempFile::new()?;
    settings.write_all(b"[logging]\nformat = \"json\"\n\n[report]\nsummary = true\n")?;

    let output = demo_command()
        .arg("--verbose")
        .arg("--config")
        .arg(settings.path())
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), EXPECTED_LINES);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Run report"));
    Ok(())
}

#[test]
fn test_settings_file_cannot_change_script_output() -> Result<()> {
    let mut settings = NamedTempFile::new()?;
    settings.write_all(
        b"[logging]\nlevel = \"trace\"\nformat = \"compact\"\n\n[report]\nsummary = true\n",
    )?;

    let output = demo_command()
        .arg("--json-logs")
        .arg("--config")
        .arg(settings.path())
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), EXPECTED_LINES);
    Ok(())
}

#[test]
fn test_invalid_settings_exit_with_config_code() -> Result<()> {
    let mut settings = NamedTempFile::new()?;
    settings.write_all(b"[logging]\nlevel = \"loud\"\n")?;

    let output = demo_command().arg("--config").arg(settings.path()).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("logging.level"));
    Ok(())
}

#[test]
fn test_missing_settings_file_is_io_error() -> Result<()> {
    let output = demo_command()
        .arg("--config")
        .arg("/nonexistent/counter-demo.toml")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}
