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

//! Reading and parsing of `#db` headers.
//!
//! A `#db` data file is a tab-delimited text file whose first line describes
//! its columns:
//!
//! ```text
//! #db<TAB>name1:type1<TAB>name2:type2<TAB>...<TAB>nameN:typeN<LF>
//! ```
//!
//! The header is turned into a [`Schema`] which maps each column name to its
//! position in a row and its declared type, so that rows can be addressed by
//! column name:
//!
//! ```
//! # use db_header::Schema;
//! # fn main() -> db_header::DbResult<()> {
//! let mut input: &[u8] = b"#db\tid:int\tname:string\n7\tseven\n";
//! let schema = Schema::parse_reader(&mut input)?;
//!
//! let name = schema.get_column("name").expect("name is in the header");
//! assert_eq!(name.index, 1);
//! assert_eq!(name.data_type, "string");
//!
//! // The rows are still in `input`.
//! assert_eq!(input, b"7\tseven\n");
//! # Ok(())
//! # }
//! ```
//!
//! Parsing never terminates the process: every failure is reported as an
//! [`Error`] whose [`kind`](Error::kind) tells what was wrong with the header,
//! and no partially filled [`Schema`] is ever returned.
//!
//! Stricter behaviour, such as rejecting duplicate column names, is available
//! through [`HeaderParser::builder`].

pub mod error;
pub mod reader;
pub mod schema;
pub mod util;
pub mod writer;

pub use error::Error;
pub use reader::read_header;
pub use schema::{Column, HeaderParser, HeaderParserBuilder, Schema};
pub use writer::write_header;

/// A convenience type alias for `Result`s with `Error`s.
pub type DbResult<T> = Result<T, Error>;

/// The first field of every header.
pub const MAGIC: &str = "#db";

/// Separates the fields of a header line.
pub const FIELD_SEPARATOR: char = '\t';

/// Separates the name of a column from its type.
pub const TYPE_SEPARATOR: char = ':';

/// Terminates the header line.
pub const LINE_FEED: u8 = b'\n';
