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

//! Errors reported while reading, parsing and writing `#db` headers.

use std::{error::Error as _, fmt};
use strum_macros::{Display, EnumDiscriminants};

/// Errors encountered while handling a `#db` header.
///
/// To inspect the error use [`details`](Self::details) or [`into_details`](Self::into_details)
/// to get the [`Details`], or [`kind`](Self::kind) when the payload is not needed.
#[derive(thiserror::Error, Debug)]
#[repr(transparent)]
#[error(transparent)]
pub struct Error {
    details: Box<Details>,
}

impl Error {
    pub fn new(details: Details) -> Self {
        Self {
            details: Box::new(details),
        }
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn into_details(self) -> Details {
        *self.details
    }

    /// The kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self.details.as_ref())
    }
}

impl From<Details> for Error {
    fn from(details: Details) -> Self {
        Self::new(details)
    }
}

#[derive(thiserror::Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, Display))]
pub enum Details {
    #[error("missing #db magic in header, found {0:?}")]
    MissingMagic(String),

    #[error("invalid column definition in header: {0:?}")]
    MalformedColumn(String),

    #[error("column {0:?} is defined more than once in header")]
    DuplicateColumn(String),

    #[error("column {0:?} is not present in the schema")]
    UnknownColumn(String),

    /// A column name or type contains one of the header separators.
    #[error("column {name:?} with type {data_type:?} cannot be written to a header")]
    UnwritableColumn { name: String, data_type: String },

    /// The column indexes do not run from zero without gaps, as after a
    /// duplicate column replaced an earlier one.
    #[error("column {name:?} has index {index} but would be written at index {expected}")]
    ColumnIndexGap {
        name: String,
        index: usize,
        expected: usize,
    },

    #[error("Failed to read header: {0}")]
    ReadHeader(#[source] std::io::Error),

    #[error("EOF before end of header")]
    UnterminatedHeader,

    #[error("header is longer than the maximum of {maximum} bytes")]
    HeaderTooLong { maximum: usize },

    #[error("Invalid utf-8 string in header")]
    ConvertToUtf8(#[source] std::string::FromUtf8Error),

    #[error("Failed to write header: {0}")]
    WriteHeader(#[source] std::io::Error),
}

impl fmt::Debug for Details {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut msg = self.to_string();
        if let Some(e) = self.source() {
            msg.extend([": ", &e.to_string()]);
        }
        write!(f, "{msg}")
    }
}
