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

//! Traps for processing errors that must not unwind into the host
//! application.
//!
//! Logging a message must never crash the caller. Whenever the file writer
//! hits an I/O failure, it converts the failure into an [`Error`] and hands
//! it to its trap instead of returning it.

use std::fmt;

use crate::Error;

mod default;
mod testing;

pub use self::default::DefaultTrap;
pub use self::testing::Testing;

/// A sink for errors that occur while writing log entries.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Process an error.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
