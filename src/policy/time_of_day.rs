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

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A time of day at which a daily rotation boundary occurs.
///
/// The hour may range over `0..=24` where hour 24 denotes midnight, the same
/// boundary as hour 0; it requires minute 0 and is normalized to hour 0 on
/// construction. Immutable once constructed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight, the default rotation boundary.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Create a time of day from an hour in `0..=24` and a minute in `0..=59`.
    ///
    /// # Errors
    ///
    /// Return an error if either value is out of range, or if hour 24 is
    /// combined with a non-zero minute.
    pub fn new(hour: u8, minute: u8) -> Result<TimeOfDay, Error> {
        if hour > 24 {
            return Err(Error::new("hour must be between 0 and 24").with_context("hour", hour));
        }
        if minute > 59 {
            return Err(
                Error::new("minute must be between 0 and 59").with_context("minute", minute)
            );
        }
        if hour == 24 && minute != 0 {
            return Err(Error::new("hour 24 denotes midnight and allows no minutes")
                .with_context("minute", minute));
        }

        let hour = if hour == 24 { 0 } else { hour };
        Ok(TimeOfDay { hour, minute })
    }

    pub(crate) fn hour(&self) -> u8 {
        self.hour
    }

    pub(crate) fn minute(&self) -> u8 {
        self.minute
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay::MIDNIGHT
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse a time of day of the form `"H[H][:MM]"`.
    ///
    /// A bare hour implies minute 0, so `"12"` is the same boundary as
    /// `"12:00"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = match s.split_once(':') {
            None => (s, None),
            Some((hour, minute)) => (hour, Some(minute)),
        };

        let hour = hour.parse::<u8>().map_err(|err| {
            Error::new("failed to parse rotation hour")
                .with_context("input", s)
                .with_source(err)
        })?;
        let minute = match minute {
            None => 0,
            Some(minute) => minute.parse::<u8>().map_err(|err| {
                Error::new("failed to parse rotation minute")
                    .with_context("input", s)
                    .with_source(err)
            })?,
        };

        TimeOfDay::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_times() {
        assert_eq!(TimeOfDay::new(0, 0).unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::new(24, 0).unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::default(), TimeOfDay::MIDNIGHT);

        let half_past_nine = TimeOfDay::new(9, 30).unwrap();
        assert_eq!(half_past_nine.hour(), 9);
        assert_eq!(half_past_nine.minute(), 30);
    }

    #[test]
    fn test_out_of_range_times() {
        assert!(TimeOfDay::new(25, 0).is_err());
        assert!(TimeOfDay::new(12, 60).is_err());
        assert!(TimeOfDay::new(24, 30).is_err());
    }

    #[test]
    fn test_parsing() {
        assert_eq!("24:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(
            "12".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(12, 0).unwrap()
        );
        assert_eq!(
            "09:30".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(9, 30).unwrap()
        );

        assert!("AB:30".parse::<TimeOfDay>().is_err());
        assert!("09:AB".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("9:30:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
        assert_eq!(TimeOfDay::new(9, 30).unwrap().to_string(), "09:30");
        assert_eq!(TimeOfDay::new(24, 0).unwrap().to_string(), "00:00");
    }
}
