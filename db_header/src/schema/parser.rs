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

use crate::error::Details;
use crate::schema::Schema;
use crate::{DbResult, FIELD_SEPARATOR, MAGIC, TYPE_SEPARATOR, reader, util};
use log::{debug, warn};
use std::io::BufRead;

/// Reads and parses `#db` headers.
///
/// The default parser is what [`Schema::parse_str`] and [`Schema::parse_reader`]
/// use. A stricter one can be built:
///
/// ```
/// # use db_header::{HeaderParser, error::ErrorKind};
/// let parser = HeaderParser::builder().reject_duplicates(true).build();
/// let err = parser.parse_str("#db\tid:int\tid:string").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DuplicateColumn);
/// ```
#[derive(bon::Builder, Clone, Debug)]
pub struct HeaderParser {
    /// Fail on a column name that was already defined instead of keeping the
    /// last definition.
    #[builder(default)]
    reject_duplicates: bool,
    /// Fail when the input ends before the line feed of the header.
    #[builder(default)]
    require_terminator: bool,
    /// Maximum length of the header line, terminator excluded.
    #[builder(default = util::max_header_bytes(util::DEFAULT_MAX_HEADER_BYTES))]
    max_header_bytes: usize,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HeaderParser {
    /// Parse the text of a header line, without its line feed.
    pub fn parse_str(&self, header: &str) -> DbResult<Schema> {
        let mut fields = header.split(FIELD_SEPARATOR);

        // `split` always yields at least one field, possibly empty.
        let magic = fields.next().unwrap_or_default();
        if magic != MAGIC {
            return Err(Details::MissingMagic(magic.to_string()).into());
        }

        let mut schema = Schema::new();
        for (index, field) in fields.enumerate() {
            let (name, data_type) = parse_column(field)?;
            if let Some(replaced) = schema.add_column(name, index, data_type) {
                if self.reject_duplicates {
                    return Err(Details::DuplicateColumn(name.to_string()).into());
                }
                warn!(
                    "Column '{name}' at index {index} replaces its definition at index {}",
                    replaced.index
                );
            }
        }

        debug!("Parsed #db header with {} columns", schema.len());
        Ok(schema)
    }

    /// Read the header line from `reader` and parse it.
    pub fn parse_reader(&self, reader: &mut (impl BufRead + ?Sized)) -> DbResult<Schema> {
        let header = self.read_header(reader)?;
        self.parse_str(&header)
    }

    /// Read the header line from `reader` without parsing it.
    ///
    /// See [`read_header`](crate::read_header) for how much of `reader` is consumed.
    pub fn read_header(&self, reader: &mut (impl BufRead + ?Sized)) -> DbResult<String> {
        reader::read_line(reader, self.max_header_bytes, self.require_terminator)
    }
}

/// Split a `name:type` field into exactly two parts.
fn parse_column(field: &str) -> DbResult<(&str, &str)> {
    let mut parts = field.split(TYPE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(data_type), None) => Ok((name, data_type)),
        _ => Err(Details::MalformedColumn(field.to_string()).into()),
    }
}
