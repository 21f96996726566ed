// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! src/core/keygen.rs
//!
//! Timestamp-based key generation
//!
//! Keys have the form `<prefix><separator><millis>`, or just `<millis>`
//! when the prefix is empty. The millisecond reading comes from a [`Clock`]
//! so tests and script replays can pin it.
//!
//! Two keys requested within the same millisecond would be identical. The
//! [`CollisionPolicy`] decides what happens then.

use log::warn;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Source of millisecond timestamps.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for tests and deterministic replays.
///
/// # Example
/// ```
/// use multiselect_store::core::keygen::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(5);
/// assert_eq!(clock.now_millis(), 1_005);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Cell<i64>,
}

impl ManualClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    /// Sets the current reading.
    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }

    /// Moves the reading forward by `delta` milliseconds, stopping at the
    /// ends of the `i64` range.
    pub fn advance(&self, delta: i64) {
        self.millis.set(self.millis.get().saturating_add(delta));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// What to do when the clock repeats a reading.
///
/// `Advance` cannot go past `i64::MAX`; a store whose clock reads the
/// maximum falls back to `Overwrite` behaviour for later keys.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Never reuse a timestamp: a reading at or below the last issued one
    /// is bumped to `last + 1`.
    #[default]
    Advance,
    /// Use the raw reading. A repeated key overwrites the earlier item.
    Overwrite,
}

/// Generates store keys from a clock.
#[derive(Debug)]
pub struct KeyGenerator<C> {
    clock: C,
    policy: CollisionPolicy,
    separator: String,
    /// Last timestamp handed out, `None` before the first key
    last_issued: Option<i64>,
}

impl<C: Clock> KeyGenerator<C> {
    pub fn new(clock: C, policy: CollisionPolicy, separator: &str) -> Self {
        Self {
            clock,
            policy,
            separator: separator.to_string(),
            last_issued: None,
        }
    }

    /// Produces the next key for `prefix`.
    pub fn next_key(&mut self, prefix: &str) -> String {
        let stamp = self.next_stamp();

        if prefix.is_empty() {
            stamp.to_string()
        } else {
            format!("{}{}{}", prefix, self.separator, stamp)
        }
    }

    fn next_stamp(&mut self) -> i64 {
        let reading = self.clock.now_millis();

        let stamp = match (self.policy, self.last_issued) {
            (CollisionPolicy::Advance, Some(last)) if reading <= last => {
                match last.checked_add(1) {
                    Some(next) => next,
                    None => {
                        warn!("Timestamp range exhausted at {}, reusing clock reading", last);
                        reading
                    }
                }
            }
            _ => reading,
        };

        // Overwrite keeps the raw reading, so track the maximum seen
        self.last_issued = Some(self.last_issued.map_or(stamp, |last| last.max(stamp)));
        stamp
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_prefix_is_bare_timestamp() {
        let mut keygen = KeyGenerator::new(ManualClock::new(42), CollisionPolicy::Advance, "_");
        assert_eq!(keygen.next_key(""), "42");
    }

    #[test]
    fn test_key_with_prefix() {
        let mut keygen = KeyGenerator::new(ManualClock::new(42), CollisionPolicy::Advance, "_");
        assert_eq!(keygen.next_key("row"), "row_42");
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
