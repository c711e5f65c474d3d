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

//! Rotation policies deciding whether the active log file may still accept
//! writes.

use jiff::Zoned;

use crate::Level;

mod daily;
mod time_of_day;

pub use self::daily::DailyPolicy;
pub use self::time_of_day::TimeOfDay;

/// Decides whether the currently open log file may keep receiving entries.
///
/// A policy is pure decision logic over timestamps: it owns no I/O
/// resources. The writer consults [`RotationPolicy::init_check`] exactly
/// once at startup, [`RotationPolicy::check`] before every write, and calls
/// [`RotationPolicy::reset`] right after a rotation completed, before the
/// first write to the fresh file.
#[derive(Debug)]
pub enum RotationPolicy {
    /// Roll over once per day at a configured time of day.
    Daily(DailyPolicy),
    /// Roll over once at startup: a file left over from a previous run is
    /// never continued.
    Startup,
    /// Never roll over: keep appending to the same file.
    Never,
}

impl RotationPolicy {
    /// Decide whether a file left over from a previous run may be continued.
    ///
    /// `last_modified` carries the last-modified instant of the file already
    /// on disk, or `None` if no file exists at the target path. An absent
    /// file is always continuable. For stateful policies this call
    /// establishes the period consulted by subsequent
    /// [`RotationPolicy::check`] calls.
    pub fn init_check(&mut self, last_modified: Option<&Zoned>) -> bool {
        match self {
            RotationPolicy::Daily(policy) => policy.init_check(last_modified),
            RotationPolicy::Startup => last_modified.is_none(),
            RotationPolicy::Never => true,
        }
    }

    /// Whether the current period still covers this moment.
    ///
    /// A pure read; may be called arbitrarily often without mutating the
    /// policy. The entry and its level are accepted for uniformity with
    /// content-based policies and are not inspected by the time-based
    /// variants.
    pub fn check(&self, level: Level, entry: &str) -> bool {
        match self {
            RotationPolicy::Daily(policy) => policy.check(level, entry),
            RotationPolicy::Startup | RotationPolicy::Never => true,
        }
    }

    /// Start a new period at the current instant.
    pub fn reset(&mut self) {
        if let RotationPolicy::Daily(policy) = self {
            policy.reset();
        }
    }

    #[cfg(test)]
    pub(crate) fn set_now(&mut self, now: Zoned) {
        if let RotationPolicy::Daily(policy) = self {
            policy.set_now(now);
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::Never
    }
}

impl From<DailyPolicy> for RotationPolicy {
    fn from(policy: DailyPolicy) -> Self {
        RotationPolicy::Daily(policy)
    }
}
