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

//! Daily file logger.
//!
//! Appends timestamped, fixed-width log rows to a
//! `{prefix}_{yyyyMMdd}.log` file in a configured directory. The file
//! starts with a column-title header row; every log call performs its
//! own open/append/release cycle, so no file handle is held between
//! calls.

pub mod clock;
pub mod config;
pub mod error;
pub mod logger;
pub mod row;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggerConfig;
pub use error::LoggerError;
pub use logger::DailyFileLogger;
pub use row::Level;
