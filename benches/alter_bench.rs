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

use criterion::{criterion_group, criterion_main, Criterion};
use sqlalter::dialect::{BigQueryDialect, MySqlDialect};
use sqlalter::parser::Parser;
use sqlalter::tokenizer::Tokenizer;

const MYSQL_ALTER: &str = "
    ALTER TABLE `shop`.`orders`
        ADD COLUMN `note` varchar(255) NOT NULL DEFAULT '' COMMENT 'free text' AFTER `status`,
        ADD INDEX `idx_customer` (`customer_id`, `created_at` DESC) USING BTREE,
        ADD CONSTRAINT `fk_customer` FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`) ON DELETE CASCADE,
        MODIFY COLUMN `total` decimal(12, 2) NOT NULL,
        DROP COLUMN `legacy_flag`,
        RENAME INDEX `idx_old` TO `idx_new`,
        ENGINE = InnoDB,
        ROW_FORMAT = DYNAMIC,
        DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci,
        ALGORITHM = INPLACE,
        LOCK = NONE
";

const PARTITIONED_ALTER: &str = "
    ALTER TABLE sales PARTITION BY RANGE COLUMNS(sold_at) (
        PARTITION p2019 VALUES LESS THAN ('2020-01-01'),
        PARTITION p2020 VALUES LESS THAN ('2021-01-01'),
        PARTITION p2021 VALUES LESS THAN ('2022-01-01'),
        PARTITION pmax VALUES LESS THAN MAXVALUE
    )
";

const PIPE_QUERY: &str = "
    FROM my-project.dataset.produce
    |> WHERE sales > 0 AND item NOT IN ('kiwi', 'fig')
    |> EXTEND sales * price AS revenue
    |> AGGREGATE SUM(revenue) AS total, COUNT(*) AS num GROUP BY item
    |> ORDER BY total DESC
    |> LIMIT 10
";

fn alter_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqlalter parsing benchmark");
    let dialect = MySqlDialect {};

    group.bench_function("sqlalter::alter", |b| {
        b.iter(|| Parser::parse_sql(&dialect, MYSQL_ALTER));
    });

    group.bench_function("sqlalter::partition_by", |b| {
        b.iter(|| Parser::parse_sql(&dialect, PARTITIONED_ALTER));
    });

    let bigquery = BigQueryDialect {};
    group.bench_function("sqlalter::pipes", |b| {
        b.iter(|| Parser::parse_sql(&bigquery, PIPE_QUERY));
    });
}

fn deparse_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqlalter deparsing benchmark");
    let statements = match Parser::parse_sql(&MySqlDialect {}, MYSQL_ALTER) {
        Ok(statements) => statements,
        Err(e) => panic!("benchmark input does not parse: {e}"),
    };

    group.bench_function("sqlalter::deparse_alter", |b| {
        b.iter(|| statements.iter().map(ToString::to_string).collect::<Vec<_>>());
    });
}

fn tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqlalter tokenization benchmark");
    let dialect = MySqlDialect {};

    group.bench_function("sqlalter::tokenize_alter", |b| {
        b.iter(|| Tokenizer::new(&dialect, MYSQL_ALTER).tokenize());
    });
}

criterion_group!(benches, alter_statements, deparse_statements, tokenize);
criterion_main!(benches);
