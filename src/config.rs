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

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LoggerError;

/// Describes one log file target. Immutable once handed to a logger.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Directory the log file lives in, created if absent. No separator
    /// is inserted between this and the file prefix, so include a
    /// trailing separator when one is needed.
    pub directory_path: String,

    /// Prefix of the date-derived filename.
    pub file_prefix: String,

    /// Name of the component writing through this logger.
    pub source_name: String,

    /// ID of the process instance writing through this logger.
    pub process_id: String,

    /// Re-resolve the target file from the current date on every log
    /// call instead of fixing it at construction time. Off by default:
    /// a long-lived logger keeps appending to the file named for the
    /// date it was constructed on.
    #[serde(default)]
    pub recompute_date_on_each_call: bool,
}

impl LoggerConfig {
    pub fn new(
        directory_path: &str,
        file_prefix: &str,
        source_name: &str,
        process_id: &str,
    ) -> Self {
        Self {
            directory_path: directory_path.to_string(),
            file_prefix: file_prefix.to_string(),
            source_name: source_name.to_string(),
            process_id: process_id.to_string(),
            recompute_date_on_each_call: false,
        }
    }

    /// Load a config from a TOML file.
    ///
    /// Every field except `recompute_date_on_each_call` is required; a
    /// missing or malformed file is an error, since a partial logger
    /// target is not usable.
    pub fn load(path: &Path) -> Result<Self, LoggerError> {
        let content = fs::read_to_string(path).map_err(|source| LoggerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| LoggerError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }
}
