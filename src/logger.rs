// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::row::{self, FILE_DATE_FORMAT, Level};

/// Appends fixed-width log rows to a per-day log file.
///
/// The target file is `{directory_path}{file_prefix}_{yyyyMMdd}.log`,
/// named for the date captured at construction. Each log call opens the
/// file, appends exactly one row, and releases the handle before
/// returning, so no handle is held between calls. Calls on one instance
/// are serialized by `&mut self`; appends from other processes sharing
/// the same target file are not coordinated beyond the platform's
/// append semantics.
pub struct DailyFileLogger {
    config: LoggerConfig,
    clock: Box<dyn Clock>,
    target_path: String,
    closed: bool,
}

impl DailyFileLogger {
    /// Construct against the system clock.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        Self::with_clock(config, SystemClock)
    }

    /// Construct with an injected time source.
    ///
    /// Captures the reference date from the clock, creates the target
    /// directory (and missing parents) if absent, and writes the header
    /// row if the target file does not exist yet.
    pub fn with_clock(
        config: LoggerConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, LoggerError> {
        let clock: Box<dyn Clock> = Box::new(clock);
        let target_path = target_path_for(&config, clock.today());

        fs::create_dir_all(&config.directory_path).map_err(|source| {
            LoggerError::DirectoryCreation {
                path: config.directory_path.clone(),
                source,
            }
        })?;

        if !Path::new(&target_path).exists() {
            write_header(&target_path)?;
        }

        Ok(Self {
            config,
            clock,
            target_path,
            closed: false,
        })
    }

    /// The file all rows are appended to. When
    /// `recompute_date_on_each_call` is set, this is the path for the
    /// construction-time reference date.
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// Append one row tagged `Info`.
    pub fn log_info(&mut self, message: &str) -> Result<(), LoggerError> {
        self.append_row(Level::Info, message)
    }

    /// Append one row tagged `Error`.
    pub fn log_error(&mut self, message: &str) -> Result<(), LoggerError> {
        self.append_row(Level::Error, message)
    }

    /// Mark the logger closed. Idempotent; no handle outlives a log
    /// call, so there is nothing to flush. Subsequent log calls fail
    /// with [`LoggerError::Closed`].
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn append_row(&mut self, level: Level, message: &str) -> Result<(), LoggerError> {
        if self.closed {
            return Err(LoggerError::Closed);
        }

        let path = if self.config.recompute_date_on_each_call {
            let path = target_path_for(&self.config, self.clock.today());
            // A file first touched after rollover still needs its header.
            if !Path::new(&path).exists() {
                write_header(&path)?;
            }
            path
        } else {
            self.target_path.clone()
        };

        let row = row::log_row(
            level,
            self.clock.now(),
            &self.config.source_name,
            &self.config.process_id,
            message,
        );

        let mut file = open_for_append(&path)?;
        writeln!(file, "{}", row).map_err(|source| LoggerError::Write {
            path: path.clone(),
            source,
        })
    }
}

fn target_path_for(config: &LoggerConfig, date: NaiveDate) -> String {
    // Literal concatenation: the caller supplies a trailing separator in
    // directory_path when one is needed.
    format!(
        "{}{}_{}.log",
        config.directory_path,
        config.file_prefix,
        date.format(FILE_DATE_FORMAT)
    )
}

fn open_for_append(path: &str) -> Result<File, LoggerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::FileAccess {
            path: path.to_string(),
            source,
        })
}

fn write_header(path: &str) -> Result<(), LoggerError> {
    let mut file = open_for_append(path)?;
    writeln!(file, "{}", row::header_row()).map_err(|source| LoggerError::Write {
        path: path.to_string(),
        source,
    })
}
