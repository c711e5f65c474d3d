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

use jiff::Span;
use jiff::Zoned;
use jiff::civil;

use crate::Level;
use crate::clock::Clock;
use crate::policy::TimeOfDay;

/// A policy that rolls the log file over once per day at a fixed time of
/// day.
///
/// The period covered by one file runs from one occurrence of the configured
/// boundary to the next, in the system time zone. The boundary instant
/// itself belongs to the next period: with the default midnight boundary, an
/// entry at 23:59:59.999 still lands in the old file while an entry at
/// 00:00:00.000 triggers a rollover.
#[derive(Debug)]
pub struct DailyPolicy {
    boundary: TimeOfDay,
    period_end: Zoned,
    clock: Clock,
}

impl DailyPolicy {
    /// Create a policy that rolls over at midnight.
    pub fn new() -> DailyPolicy {
        DailyPolicy::at(TimeOfDay::MIDNIGHT)
    }

    /// Create a policy that rolls over at the given time of day.
    pub fn at(boundary: TimeOfDay) -> DailyPolicy {
        DailyPolicy::with_clock(boundary, Clock::DefaultClock)
    }

    fn with_clock(boundary: TimeOfDay, clock: Clock) -> DailyPolicy {
        let period_end = next_boundary(&clock.now(), boundary);
        DailyPolicy {
            boundary,
            period_end,
            clock,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_manual_clock(boundary: TimeOfDay, now: Zoned) -> DailyPolicy {
        use crate::clock::ManualClock;

        DailyPolicy::with_clock(boundary, Clock::ManualClock(ManualClock::new(now)))
    }

    #[cfg(test)]
    pub(crate) fn set_now(&mut self, now: Zoned) {
        self.clock.set_now(now);
    }

    /// Decide whether a file last touched at `last_modified` still belongs
    /// to the period that covers the current instant.
    ///
    /// The file is continuable iff it was last modified at or after the
    /// start of the current period, i.e. the boundary occurrence immediately
    /// preceding the upcoming one. Establishes the period end consulted by
    /// [`DailyPolicy::check`] either way.
    pub(crate) fn init_check(&mut self, last_modified: Option<&Zoned>) -> bool {
        let Some(last_modified) = last_modified else {
            // nothing to continue; a fresh file starts the period computed
            // at construction
            return true;
        };

        self.period_end = next_boundary(&self.clock.now(), self.boundary);
        let period_start = self
            .period_end
            .checked_sub(Span::new().days(1))
            .expect("invalid rotation boundary; this is a bug in the logroll daily policy");
        *last_modified >= period_start
    }

    /// Whether the current instant still falls before the period end.
    pub(crate) fn check(&self, _level: Level, _entry: &str) -> bool {
        self.clock.now() < self.period_end
    }

    /// Move the period end to the next occurrence of the boundary strictly
    /// after the current instant.
    pub(crate) fn reset(&mut self) {
        self.period_end = next_boundary(&self.clock.now(), self.boundary);
    }
}

impl Default for DailyPolicy {
    fn default() -> Self {
        DailyPolicy::new()
    }
}

/// The next occurrence of `boundary` strictly after `now`.
fn next_boundary(now: &Zoned, boundary: TimeOfDay) -> Zoned {
    let time = civil::time(boundary.hour() as i8, boundary.minute() as i8, 0, 0);
    let today = now
        .with()
        .time(time)
        .build()
        .expect("invalid rotation boundary; this is a bug in the logroll daily policy");
    if *now < today {
        today
    } else {
        today
            .checked_add(Span::new().days(1))
            .expect("invalid rotation boundary; this is a bug in the logroll daily policy")
    }
}
