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

use log::debug;
use std::sync::{
    Once,
    atomic::{AtomicUsize, Ordering},
};

/// Maximum number of bytes a header line may span before the terminator.
/// This is a protection against input that is not a `#db` file at all and
/// has no line feed for a very long time.
/// See [max_header_bytes] to change this limit.
pub const DEFAULT_MAX_HEADER_BYTES: usize = 1024 * 1024;
static MAX_HEADER_BYTES: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_HEADER_BYTES);
static MAX_HEADER_BYTES_ONCE: Once = Once::new();

/// Set a new process-wide maximum length of a header line.
/// Once called, the limit cannot be changed.
///
/// Returns the configured maximum, which might be different from what the
/// function was called with if the value was already set before.
///
/// **NOTE** This function must be called before reading **any** header. The
/// library leverages [`std::sync::Once`](https://doc.rust-lang.org/std/sync/struct.Once.html)
/// to set the limit either when calling this method, or when a
/// [`HeaderParser`](crate::HeaderParser) is built for the first time.
pub fn max_header_bytes(num_bytes: usize) -> usize {
    MAX_HEADER_BYTES_ONCE.call_once(|| {
        debug!("Limiting header lines to {num_bytes} bytes");
        MAX_HEADER_BYTES.store(num_bytes, Ordering::Release);
    });
    MAX_HEADER_BYTES.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_header_bytes_is_set_once() {
        let first = max_header_bytes(DEFAULT_MAX_HEADER_BYTES);
        assert_eq!(max_header_bytes(16), first);
    }
}
