//! Running the stock-health binary

use pretty_assertions::assert_eq;
use std::process::Command;

fn stock_health() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stock-health"));
    // dotenvy never overrides a set variable, so a blank key beats any local .env
    command.env("ALPHA_VANTAGE_API_KEY", "").env("RUST_LOG", "off");
    command
}

#[test]
fn test_manual_json_output() {
    let output = stock_health()
        .args([
            "manual",
            "--roe",
            "20",
            "--pe",
            "20",
            "--pb",
            "2",
            "--debt-equity",
            "0.3",
            "--sales-growth",
            "12",
            "--profit-growth",
            "12",
            "--json",
        ])
        .output()
        .expect("failed to run stock-health");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 10);
    assert_eq!(value["verdict"], "GOOD");
}

#[test]
fn test_manual_text_output() {
    let output = stock_health()
        .args([
            "manual",
            "--roe",
            "10",
            "--pe",
            "50",
            "--pb",
            "8",
            "--debt-equity",
            "2",
            "--sales-growth",
            "2",
            "--profit-growth",
            "2",
        ])
        .output()
        .expect("failed to run stock-health");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Score: 0 / 10"));
    assert!(stdout.contains("RISKY (Better avoid)"));
}

#[test]
fn test_fetch_without_api_key_fails() {
    let output = stock_health()
        .args(["fetch", "IBM"])
        .output()
        .expect("failed to run stock-health");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ALPHA_VANTAGE_API_KEY"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_value_fails() {
    let output = stock_health()
        .args(["manual", "--roe", "20"])
        .env("RATE_LIMIT_PER_MINUTE", "lots")
        .output()
        .expect("failed to run stock-health");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration Error"), "stderr: {}", stderr);
    assert!(stderr.contains("RATE_LIMIT_PER_MINUTE"));
}
