#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDate;
use tempfile::TempDir;

/// Script-mode command isolated in its own application directory.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("house_ledger_cli").expect("binary built");
    cmd.env("HOUSE_LEDGER_CLI_SCRIPT", "1")
        .env("HOUSE_LEDGER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
