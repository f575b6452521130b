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

//! Shared helpers for the `db-header` test suites.

use core::any::type_name;
use core::cell::RefCell;
use std::fmt::{Debug, Display};
use std::sync::Once;

pub mod logger;

thread_local! {
    // The unit tests run in parallel, so every test thread keeps its own
    // record of the messages logged while it was running.
    pub(crate) static LOG_MESSAGES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

static INIT: Once = Once::new();

/// Installs the capturing logger. Safe to call more than once.
///
/// Tests that assert on log output must call this before exercising the code
/// under test.
pub fn init() {
    INIT.call_once(logger::install);
}

/// A converter of any error into [TestError].
///
/// It is used to print better error messages in the tests.
// The Debug implementation is needed so `TestResult` can be returned from a test.
pub struct TestError;

impl Debug for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TestError")
    }
}

impl<Err: Display> From<Err> for TestError {
    #[track_caller]
    fn from(err: Err) -> Self {
        panic!("{}: {}", type_name::<Err>(), err);
    }
}

pub type TestResult = Result<(), TestError>;
