// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::time::{self, DateTime};
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the ambient inputs for request signing.
///
/// Signing is pure CPU work, the only thing it reads from the outside world
/// is the current UTC time. Context makes that input replaceable so that
/// signatures can be reproduced in tests.
///
/// ## Example
///
/// ```
/// use awsign_core::{Context, FixedClock};
/// use awsign_core::time::parse_iso8601;
///
/// let ctx = Context::new()
///     .with_clock(FixedClock::new(parse_iso8601("20150830T123600Z").unwrap()));
/// assert_eq!(ctx.now(), parse_iso8601("20150830T123600Z").unwrap());
/// ```
#[derive(Clone)]
pub struct Context {
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context backed by the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the current UTC time.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }
}

/// Clock is used to read the current UTC time during signing.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Return the current UTC time.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the time from the operating system.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        time::now()
    }
}

/// FixedClock always returns the same instant.
///
/// This is useful for testing or for reproducing a signature.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(DateTime);

impl FixedClock {
    /// Create a clock frozen at `t`.
    pub fn new(t: DateTime) -> Self {
        Self(t)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
