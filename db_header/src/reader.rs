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

//! Logic for extracting the header line from a byte source.

use crate::{DbResult, HeaderParser, LINE_FEED, error::Details};
use log::debug;
use std::io::{BufRead, ErrorKind};

/// Read the header line from `reader` with the default [`HeaderParser`] settings.
///
/// Returns the text before the first line feed, without the line feed. The
/// reader is consumed exactly up to and including that line feed, so the data
/// rows can be read from the same `reader` afterwards:
///
/// ```
/// # use db_header::read_header;
/// # use std::io::BufRead;
/// let mut input: &[u8] = b"#db\tfoo:int\n12345\n";
/// assert_eq!(read_header(&mut input).unwrap(), "#db\tfoo:int");
///
/// let mut row = String::new();
/// input.read_line(&mut row).unwrap();
/// assert_eq!(row, "12345\n");
/// ```
///
/// If the input ends before a line feed, whatever was read is returned as the
/// header. Use [`HeaderParser::builder`] with `require_terminator(true)` to
/// treat that as an error instead.
pub fn read_header(reader: &mut (impl BufRead + ?Sized)) -> DbResult<String> {
    HeaderParser::default().read_header(reader)
}

pub(crate) fn read_line<R: BufRead + ?Sized>(
    reader: &mut R,
    max_bytes: usize,
    require_terminator: bool,
) -> DbResult<String> {
    let mut line = Vec::new();
    loop {
        let (used, done) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Details::ReadHeader(e).into()),
            };

            if available.is_empty() {
                if require_terminator {
                    return Err(Details::UnterminatedHeader.into());
                }
                debug!(
                    "Input ended after {} header bytes without a line feed",
                    line.len()
                );
                break;
            }

            let (chunk, done) = match available.iter().position(|&b| b == LINE_FEED) {
                Some(end) => (&available[..end], true),
                None => (available, false),
            };
            if line.len() + chunk.len() > max_bytes {
                return Err(Details::HeaderTooLong { maximum: max_bytes }.into());
            }
            line.extend_from_slice(chunk);
            (chunk.len() + usize::from(done), done)
        };

        reader.consume(used);
        if done {
            break;
        }
    }

    String::from_utf8(line).map_err(|e| Details::ConvertToUtf8(e).into())
}
