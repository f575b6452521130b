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

use criterion::{Criterion, criterion_group, criterion_main};
use db_header::{Schema, read_header};
use std::hint::black_box;
use std::io::{BufReader, Cursor};

fn make_header(columns: usize) -> String {
    let mut header = String::from("#db");
    for i in 0..columns {
        header.push_str(&format!("\tcolumn_{i}:int"));
    }
    header
}

fn bench_parse_str(c: &mut Criterion) {
    let small = make_header(8);
    let wide = make_header(1_000);

    c.bench_function("parse 8 columns", |b| {
        b.iter(|| Schema::parse_str(black_box(&small)))
    });
    c.bench_function("parse 1000 columns", |b| {
        b.iter(|| Schema::parse_str(black_box(&wide)))
    });
}

fn bench_read_header(c: &mut Criterion) {
    let mut data = make_header(1_000).into_bytes();
    data.push(b'\n');
    for i in 0..10_000 {
        data.extend_from_slice(format!("{i}\n").as_bytes());
    }

    c.bench_function("read 1000 column header", |b| {
        b.iter(|| {
            let mut reader = BufReader::new(Cursor::new(black_box(&data)));
            read_header(&mut reader)
        })
    });
}

criterion_group!(benches, bench_parse_str, bench_read_header);
criterion_main!(benches);
