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

use std::sync::Arc;
use std::sync::Mutex;

use crate::Error;
use crate::trap::Trap;

/// A trap that records trapped errors so that a test can assert on them.
///
/// Clones share the same storage: keep one clone in the test and hand the
/// other to the writer.
///
/// # Examples
///
/// ```
/// use logroll::trap::Testing;
///
/// let trap = Testing::default();
/// let probe = trap.clone();
/// assert!(probe.messages().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Testing {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Testing {
    /// The messages trapped so far, in order.
    pub fn messages(&self) -> Vec<String> {
        let messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        messages.clone()
    }
}

impl Trap for Testing {
    fn trap(&self, err: &Error) {
        let mut messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        messages.push(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let trap = Testing::default();
        let probe = trap.clone();

        trap.trap(&Error::new("first"));
        trap.trap(&Error::new("second").with_context("path", "app.log"));

        let messages = probe.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "first");
        assert_eq!(messages[1], "second, context: { path: app.log }");
    }
}
