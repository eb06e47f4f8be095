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

use std::io;

use thiserror::Error;

/// Errors surfaced by the logger and its configuration loader.
///
/// Setup failures are returned from construction and per-call write
/// failures from each logging method, so callers decide for themselves
/// whether a failed log write is fatal.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create log directory {path}: {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to log file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A log call arrived after [`close`](crate::DailyFileLogger::close).
    #[error("Logger is closed")]
    Closed,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
