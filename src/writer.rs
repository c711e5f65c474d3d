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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Error;
use crate::Level;
use crate::policy::RotationPolicy;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A writer that appends formatted log entries to a single file and rolls
/// the file over when its rotation policy declares the current period ended.
///
/// The writer exclusively owns the file handle and the policy; nothing here
/// is synchronized. Callers serialize access to one instance, and two
/// writers must never target the same path.
///
/// [`RotatingFileWriter::write`] never fails from the caller's perspective:
/// every I/O error is routed to the configured [`Trap`] and the affected
/// entry is dropped.
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    file: Option<File>,
    policy: RotationPolicy,
    trap: Box<dyn Trap>,
    truncate_next: bool,
    closed: bool,
}

impl RotatingFileWriter {
    /// Create a new [`RotatingFileWriterBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logroll::RotatingFileWriter;
    ///
    /// let builder = RotatingFileWriter::builder();
    /// ```
    #[must_use]
    pub fn builder() -> RotatingFileWriterBuilder {
        RotatingFileWriterBuilder::new()
    }

    /// Append one formatted entry to the log file.
    ///
    /// The entry is written verbatim; line termination is up to the caller.
    /// The level is accepted for uniformity with content-based policies and
    /// is not interpreted by the writer.
    ///
    /// Failures are reported through the trap and leave the writer ready to
    /// retry from scratch on the next call.
    pub fn write(&mut self, level: Level, entry: &str) {
        if let Err(err) = self.write_inner(level, entry) {
            self.trap.trap(&err);
        }
    }

    fn write_inner(&mut self, level: Level, entry: &str) -> Result<(), Error> {
        if self.closed {
            return Err(Error::new("writer already closed")
                .with_context("path", self.path.display()));
        }

        if self.file.is_some() && !self.policy.check(level, entry) {
            self.rotate();
        }

        if self.file.is_none() {
            // either the previous write failed or a rotation is pending;
            // start over from the writer's current state
            let file = open_log_file(&self.path, self.truncate_next)?;
            self.file = Some(file);
            self.truncate_next = false;
        }

        let Some(file) = self.file.as_mut() else {
            return Err(Error::new("log file is not open")
                .with_context("path", self.path.display()));
        };
        if let Err(err) = file.write_all(entry.as_bytes()) {
            self.file = None;
            return Err(Error::new("failed to write log entry")
                .with_context("path", self.path.display())
                .with_source(err));
        }

        Ok(())
    }

    /// Close the finished file and mark the upcoming reopen as truncating.
    ///
    /// The policy is reset exactly once here, before the first write to the
    /// fresh file. If the reopen later fails, the truncation stays pending
    /// so a retry does not append into the finished period's file.
    fn rotate(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(err) = file.flush() {
                let err = Error::new("failed to flush finished log file")
                    .with_context("path", self.path.display())
                    .with_source(err);
                self.trap.trap(&err);
            }
        }
        self.policy.reset();
        self.truncate_next = true;
    }

    /// Flush and release the file handle.
    ///
    /// Idempotent. Entries handed to [`RotatingFileWriter::write`] after
    /// closing are refused and reported through the trap.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Some(mut file) = self.file.take() {
            if let Err(err) = file.flush() {
                let err = Error::new("failed to flush log file on close")
                    .with_context("path", self.path.display())
                    .with_source(err);
                self.trap.trap(&err);
            }
        }
    }
}

impl Drop for RotatingFileWriter {
    fn drop(&mut self) {
        self.close();
    }
}

/// A builder for configuring [`RotatingFileWriter`].
#[derive(Debug)]
pub struct RotatingFileWriterBuilder {
    policy: RotationPolicy,
    trap: Box<dyn Trap>,
}

impl Default for RotatingFileWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotatingFileWriterBuilder {
    /// Create a new [`RotatingFileWriterBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: RotationPolicy::Never,
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the rotation policy.
    ///
    /// Default to [`RotationPolicy::Never`].
    #[must_use]
    pub fn policy(mut self, policy: impl Into<RotationPolicy>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Set the trap for handling errors during logging.
    ///
    /// Default to [`DefaultTrap`].
    #[must_use]
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`RotatingFileWriter`] against the target path.
    ///
    /// Decides exactly once whether a file already on disk belongs to the
    /// current rotation period: if so it is opened for append, preserving
    /// its content; otherwise its content is discarded here, before the
    /// first write. A missing file is created fresh.
    ///
    /// # Errors
    ///
    /// Return an error if the log directory or the log file cannot be
    /// created or opened.
    pub fn build(self, path: impl Into<PathBuf>) -> Result<RotatingFileWriter, Error> {
        let Self { mut policy, trap } = self;
        let path = path.into();

        let last_modified = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .ok()
            .and_then(|mtime| Zoned::try_from(mtime).ok());
        let continued = policy.init_check(last_modified.as_ref());
        let file = open_log_file(&path, !continued)?;

        Ok(RotatingFileWriter {
            path,
            file: Some(file),
            policy,
            trap,
            truncate_next: false,
            closed: false,
        })
    }
}

fn open_log_file(path: &Path, truncate: bool) -> Result<File, Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("dir", dir.display())
                    .with_source(err)
            })?;
        }
    }

    let mut options = OpenOptions::new();
    if truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    options
        .create(true)
        .open(path)
        .map_err(|err| {
            Error::new("failed to open log file")
                .with_context("path", path.display())
                .with_source(err)
        })
}
