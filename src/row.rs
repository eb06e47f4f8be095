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

//! Fixed-width row rendering.
//!
//! Every file starts with a header row naming the columns; log rows use
//! the same left-justified, space-padded minimum widths
//! {10, 25, 25, 4, 50}. Widths are minima, not caps: an over-long field
//! widens its row rather than being truncated.

use chrono::{DateTime, Local};

/// Timestamp layout for log rows: day-month-year plus a 12-hour clock
/// with no AM/PM marker. Existing consumers parse this layout, so it
/// must not change.
pub(crate) const ROW_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// Date layout embedded in the target filename.
pub(crate) const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// Severity tag of a log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Error => "Error",
        }
    }
}

/// The column-title line written once per file.
pub fn header_row() -> String {
    format_columns("TYPE", "DATE", "SOURCE", "PID", "MESSAGE")
}

/// One formatted log row. The message is neither escaped nor truncated.
pub fn log_row(
    level: Level,
    timestamp: DateTime<Local>,
    source: &str,
    pid: &str,
    message: &str,
) -> String {
    let date = timestamp.format(ROW_TIMESTAMP_FORMAT).to_string();
    format_columns(level.tag(), &date, source, pid, message)
}

fn format_columns(kind: &str, date: &str, source: &str, pid: &str, message: &str) -> String {
    format!(
        "{:<10}{:<25}{:<25}{:<4}{:<50}",
        kind, date, source, pid, message
    )
}
