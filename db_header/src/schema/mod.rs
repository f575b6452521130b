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

//! The column table described by a `#db` header.

mod parser;

pub use crate::schema::parser::{HeaderParser, HeaderParserBuilder};
use crate::{
    DbResult, FIELD_SEPARATOR, LINE_FEED, MAGIC, TYPE_SEPARATOR,
    error::{Details, Error},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, io::BufRead, str::FromStr};

/// A named column of every data row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Position of the column within a row, counted from zero after the magic token.
    pub index: usize,
    /// Declared type label. It is not checked against any known set of types.
    pub data_type: String,
}

/// Maps column names to their [`Column`] definition.
///
/// A `Schema` is usually obtained with [`Schema::parse_str`] or
/// [`Schema::parse_reader`]:
///
/// ```
/// # use db_header::Schema;
/// let schema = Schema::parse_str("#db\tid:int\tname:string").unwrap();
/// assert_eq!(schema.get_column("name").map(|c| c.index), Some(1));
/// assert!(!schema.has_column("value"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: HashMap<String, Column>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `Schema` from the text of a header line, without its line feed.
    pub fn parse_str(input: &str) -> DbResult<Schema> {
        HeaderParser::default().parse_str(input)
    }

    /// Create a `Schema` from the first line of `reader`.
    ///
    /// Only the header line and its terminator are consumed; the data rows can
    /// be read from the same `reader` afterwards.
    pub fn parse_reader(reader: &mut (impl BufRead + ?Sized)) -> DbResult<Schema> {
        HeaderParser::default().parse_reader(reader)
    }

    /// Adds a column, replacing any column with the same name.
    ///
    /// Returns the replaced column.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        index: usize,
        data_type: impl Into<String>,
    ) -> Option<Column> {
        self.columns.insert(
            name.into(),
            Column {
                index,
                data_type: data_type.into(),
            },
        )
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the columns ordered by their index.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        let mut columns: Vec<_> = self
            .columns
            .iter()
            .map(|(name, column)| (name.as_str(), column))
            .collect();
        columns.sort_by_key(|(_, column)| column.index);
        columns.into_iter()
    }

    /// Resolves the `key` column names to their indexes, in the order in which
    /// they appear in a row.
    ///
    /// Fails with [`Details::UnknownColumn`] for the first name that is not
    /// part of the schema.
    pub fn key_indexes(
        &self,
        key: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> DbResult<Vec<usize>> {
        let mut indexes = key
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get_column(name)
                    .map(|column| column.index)
                    .ok_or_else(|| Error::from(Details::UnknownColumn(name.to_string())))
            })
            .collect::<DbResult<Vec<_>>>()?;
        indexes.sort_unstable();
        Ok(indexes)
    }

    /// Renders the header line for this schema, without its line feed.
    ///
    /// Columns are written in index order. Names and types containing a tab,
    /// a colon or a line feed cannot be represented and are rejected, and so
    /// are indexes that do not run from zero without gaps, since the written
    /// header would address the row fields differently.
    pub fn to_header(&self) -> DbResult<String> {
        let mut header = String::from(MAGIC);
        for (position, (name, column)) in self.columns().enumerate() {
            if column.index != position {
                return Err(Details::ColumnIndexGap {
                    name: name.to_string(),
                    index: column.index,
                    expected: position,
                }
                .into());
            }
            if !is_writable(name) || !is_writable(&column.data_type) {
                return Err(Details::UnwritableColumn {
                    name: name.to_string(),
                    data_type: column.data_type.clone(),
                }
                .into());
            }
            header.push(FIELD_SEPARATOR);
            header.push_str(name);
            header.push(TYPE_SEPARATOR);
            header.push_str(&column.data_type);
        }
        Ok(header)
    }
}

fn is_writable(token: &str) -> bool {
    !token
        .chars()
        .any(|c| c == FIELD_SEPARATOR || c == TYPE_SEPARATOR || c == char::from(LINE_FEED))
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schema::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use db_header_test_helper::TestResult;
    use pretty_assertions::assert_eq;

    fn sample() -> Schema {
        let mut schema = Schema::new();
        schema.add_column("name", 1, "string");
        schema.add_column("id", 0, "int");
        schema.add_column("value", 2, "float");
        schema
    }

    #[test]
    fn test_new_schema_is_empty() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
        assert!(schema.get_column("id").is_none());
        assert!(!schema.has_column("id"));
    }

    #[test]
    fn test_add_column_replaces_existing() {
        let mut schema = Schema::new();
        assert_eq!(schema.add_column("id", 0, "int"), None);
        assert_eq!(
            schema.add_column("id", 3, "string"),
            Some(Column {
                index: 0,
                data_type: "int".to_string()
            })
        );
        assert_eq!(schema.len(), 1);
        assert_eq!(
            schema.get_column("id"),
            Some(&Column {
                index: 3,
                data_type: "string".to_string()
            })
        );
    }

    #[test]
    fn test_columns_are_ordered_by_index() {
        let schema = sample();
        let names: Vec<_> = schema.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "name", "value"]);
    }

    #[test]
    fn test_key_indexes_are_sorted() -> TestResult {
        let schema = sample();
        assert_eq!(schema.key_indexes(["value", "id"])?, vec![0, 2]);
        assert!(schema.key_indexes(Vec::<String>::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_key_indexes_unknown_column() {
        match sample()
            .key_indexes(["id", "missing"])
            .map_err(Error::into_details)
        {
            Err(Details::UnknownColumn(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected Details::UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_to_header() -> TestResult {
        assert_eq!(
            sample().to_header()?,
            "#db\tid:int\tname:string\tvalue:float"
        );
        assert_eq!(Schema::new().to_header()?, "#db");
        Ok(())
    }

    #[test]
    fn test_to_header_rejects_separators() {
        let mut schema = Schema::new();
        schema.add_column("a:b", 0, "int");
        let err = schema.to_header().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnwritableColumn);

        let mut schema = Schema::new();
        schema.add_column("a", 0, "in\tt");
        assert_eq!(
            schema.to_header().unwrap_err().kind(),
            ErrorKind::UnwritableColumn
        );
    }

    #[test]
    fn test_to_header_rejects_index_gaps() -> TestResult {
        let schema = Schema::parse_str("#db\ta:int\tb:int\ta:str")?;
        match schema.to_header().map_err(Error::into_details) {
            Err(Details::ColumnIndexGap {
                name,
                index,
                expected,
            }) => {
                assert_eq!(name, "b");
                assert_eq!(index, 1);
                assert_eq!(expected, 0);
            }
            other => panic!("Expected Details::ColumnIndexGap, got {other:?}"),
        }

        let mut schema = Schema::new();
        schema.add_column("id", 1, "int");
        assert_eq!(
            schema.to_header().unwrap_err().kind(),
            ErrorKind::ColumnIndexGap
        );
        Ok(())
    }

    #[test]
    fn test_from_str() -> TestResult {
        let schema: Schema = "#db\tid:int".parse()?;
        assert!(schema.has_column("id"));
        Ok(())
    }

    #[test]
    fn test_serialize_as_map() -> TestResult {
        let mut schema = Schema::new();
        schema.add_column("id", 0, "int");
        assert_eq!(
            serde_json::to_string(&schema)?,
            r#"{"id":{"index":0,"data_type":"int"}}"#
        );

        let back: Schema = serde_json::from_str(r#"{"id":{"index":0,"data_type":"int"}}"#)?;
        assert_eq!(back, schema);
        Ok(())
    }
}
