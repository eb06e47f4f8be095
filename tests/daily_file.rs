use anyhow::Result;
use chrono::{Local, TimeZone};
use std::fs;
use tempfile::tempdir;

use daylog::{DailyFileLogger, FixedClock, LoggerConfig, LoggerError};

fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
    FixedClock::new(Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
}

#[test]
fn info_then_error_rows_land_in_the_dated_file() -> Result<()> {
    let temp = tempdir()?;
    let directory = format!("{}/logs/", temp.path().display());
    let config = LoggerConfig::new(&directory, "svc", "SVC", "42");

    let mut logger = DailyFileLogger::with_clock(config, clock_at(2024, 3, 5, 14, 5, 9))?;
    logger.log_info("start")?;
    logger.log_error("boom")?;

    assert_eq!(
        logger.target_path(),
        format!("{}svc_20240305.log", directory)
    );

    let contents = fs::read_to_string(logger.target_path())?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);

    assert!(lines[0].starts_with("TYPE      DATE"));
    assert!(lines[1].starts_with("Info      05-03-2024 02:05:09"));
    assert!(lines[2].starts_with("Error     05-03-2024 02:05:09"));

    // Both rows carry the configured source and pid at their columns.
    for line in &lines[1..] {
        assert_eq!(&line[35..60], format!("{:<25}", "SVC"));
        assert_eq!(&line[60..64], format!("{:<4}", "42"));
    }

    Ok(())
}

#[test]
fn reopening_the_same_day_appends_without_a_second_header() -> Result<()> {
    let temp = tempdir()?;
    let directory = format!("{}/", temp.path().display());
    let config = LoggerConfig::new(&directory, "svc", "SVC", "42");

    let mut first = DailyFileLogger::with_clock(config.clone(), clock_at(2024, 3, 5, 9, 0, 0))?;
    first.log_info("first run")?;
    first.close();

    let mut second = DailyFileLogger::with_clock(config, clock_at(2024, 3, 5, 10, 0, 0))?;
    second.log_info("second run")?;

    let contents = fs::read_to_string(second.target_path())?;
    let headers = contents
        .lines()
        .filter(|line| line.starts_with("TYPE      "))
        .count();
    assert_eq!(headers, 1);
    assert_eq!(contents.lines().count(), 3);

    Ok(())
}

#[test]
fn closed_logger_reports_the_closed_error() -> Result<()> {
    let temp = tempdir()?;
    let directory = format!("{}/", temp.path().display());
    let config = LoggerConfig::new(&directory, "svc", "SVC", "42");

    let mut logger = DailyFileLogger::with_clock(config, clock_at(2024, 3, 5, 9, 0, 0))?;
    logger.close();

    assert!(matches!(logger.log_info("late"), Err(LoggerError::Closed)));

    Ok(())
}

#[test]
fn logger_built_from_a_toml_config_writes_rows() -> Result<()> {
    let temp = tempdir()?;
    let directory = format!("{}/logs/", temp.path().display());

    let config_path = temp.path().join("daylog.toml");
    fs::write(
        &config_path,
        format!(
            "directory_path = \"{}\"\nfile_prefix = \"svc\"\nsource_name = \"SVC\"\nprocess_id = \"42\"\n",
            directory
        ),
    )?;

    let config = LoggerConfig::load(&config_path)?;
    let mut logger = DailyFileLogger::with_clock(config, clock_at(2024, 3, 5, 9, 0, 0))?;
    logger.log_info("configured")?;

    let contents = fs::read_to_string(logger.target_path())?;
    assert!(contents.contains("configured"));

    Ok(())
}
