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

//! Prints the columns of the `#db` data read from stdin, one per line.
//!
//! ```sh
//! printf '#db\tid:int\tname:string\n1\tone\n' | cargo run --example describe_header
//! ```

use db_header::{DbResult, Schema};
use std::io::{self, BufRead};

fn main() -> DbResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let schema = Schema::parse_reader(&mut input)?;

    for (name, column) in schema.columns() {
        println!("{}\t{name}\t{}", column.index, column.data_type);
    }

    let rows = input.lines().map_while(Result::ok).count();
    println!("{rows} rows");
    Ok(())
}
