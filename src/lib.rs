// Copyright 2024 FastLabs Developers
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

//! Logroll is the rotating log file backend of a logging stack: for every
//! write it decides whether the currently open output file may keep
//! receiving entries or must be rolled over, and on startup it decides
//! whether a file left over from a previous run still belongs to the
//! current rotation period and may be continued.
//!
//! # Overview
//!
//! The crate is split into two parts:
//!
//! - [`RotationPolicy`]: pure decision logic over timestamps with no I/O.
//!   [`policy::DailyPolicy`] rolls over once per day at a configurable time
//!   of day, midnight by default.
//! - [`RotatingFileWriter`]: owns the file handle, consults the policy, and
//!   performs the actual close-and-reopen. Logging a message never panics
//!   and never returns an error to the call site; failures are routed to an
//!   injectable [`Trap`].
//!
//! Formatting log records into lines, filtering, and dispatching belong to
//! the logging framework sitting on top. A writer instance is not
//! synchronized; callers serialize access per output target.
//!
//! # Example
//!
//! ```no_run
//! use logroll::Level;
//! use logroll::RotatingFileWriter;
//! use logroll::policy::DailyPolicy;
//!
//! let mut writer = RotatingFileWriter::builder()
//!     .policy(DailyPolicy::new())
//!     .build("logs/app.log")
//!     .unwrap();
//!
//! writer.write(Level::Info, "Hello, world!\n");
//! writer.close();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod clock;
mod error;
mod level;
pub mod policy;
pub mod trap;
mod writer;

pub use self::error::Error;
pub use self::level::Level;
pub use self::policy::RotationPolicy;
pub use self::trap::Trap;
pub use self::writer::RotatingFileWriter;
pub use self::writer::RotatingFileWriterBuilder;
