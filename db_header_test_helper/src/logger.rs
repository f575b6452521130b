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

use crate::LOG_MESSAGES;
use log::{LevelFilter, Log, Metadata, Record};

struct TestLogger {
    delegate: env_logger::Logger,
}

impl Log for TestLogger {
    #[inline]
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            LOG_MESSAGES.with(|msgs| msgs.borrow_mut().push(format!("{}", record.args())));

            self.delegate.log(record);
        }
    }

    fn flush(&self) {}
}

pub(crate) fn install() {
    let delegate = env_logger::Builder::from_default_env().build();
    if log::set_boxed_logger(Box::new(TestLogger { delegate })).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Forgets the messages logged so far by the current test thread.
pub fn clear_log_messages() {
    LOG_MESSAGES.with(|msgs| msgs.borrow_mut().clear());
}

/// Asserts that the current test thread has not logged `unexpected_message`.
#[track_caller]
pub fn assert_not_logged(unexpected_message: &str) {
    LOG_MESSAGES.with(|msgs| {
        if msgs.borrow().iter().any(|msg| msg == unexpected_message) {
            panic!("The following log message should not have been logged: '{unexpected_message}'");
        }
    });
}

/// Asserts that the current test thread has logged `expected_message` and
/// removes it from the recorded messages.
#[track_caller]
pub fn assert_logged(expected_message: &str) {
    let mut deleted = false;
    LOG_MESSAGES.with(|msgs| {
        msgs.borrow_mut().retain(|msg| {
            if msg == expected_message {
                deleted = true;
                false
            } else {
                true
            }
        });
    });

    if !deleted {
        panic!("Expected log message has not been logged: '{expected_message}'");
    }
}
