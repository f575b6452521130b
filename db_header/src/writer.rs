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

//! Logic for writing a `#db` header ahead of the data rows.

use crate::{DbResult, LINE_FEED, Schema, error::Details};
use std::io::Write;

/// Write the header line of `schema`, followed by a line feed, to `writer`.
///
/// Tools that filter or split `#db` data use this to replay the header on
/// each of their outputs.
pub fn write_header<W: Write + ?Sized>(schema: &Schema, writer: &mut W) -> DbResult<()> {
    let mut header = schema.to_header()?.into_bytes();
    header.push(LINE_FEED);
    writer.write_all(&header).map_err(Details::WriteHeader)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use db_header_test_helper::TestResult;
    use pretty_assertions::assert_eq;
    use std::io::{self, BufRead};

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_header_round_trip() -> TestResult {
        let schema = Schema::parse_str("#db\tts:time\tsrc:ip\tdst:ip")?;

        let mut out = Vec::new();
        write_header(&schema, &mut out)?;
        out.extend_from_slice(b"1\t10.0.0.1\t10.0.0.2\n");
        assert_eq!(out, b"#db\tts:time\tsrc:ip\tdst:ip\n1\t10.0.0.1\t10.0.0.2\n");

        let mut input = &out[..];
        assert_eq!(Schema::parse_reader(&mut input)?, schema);
        let mut row = String::new();
        input.read_line(&mut row)?;
        assert_eq!(row, "1\t10.0.0.1\t10.0.0.2\n");
        Ok(())
    }

    #[test]
    fn test_write_header_after_duplicate_column() -> TestResult {
        let schema = Schema::parse_str("#db\ta:int\tb:int\ta:str")?;

        let mut out = Vec::new();
        let err = write_header(&schema, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnIndexGap);
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_write_header_io_error() {
        let schema = Schema::new();
        let err = write_header(&schema, &mut Full).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteHeader);
    }
}
