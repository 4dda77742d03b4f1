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

#![warn(clippy::all)]
//! Test SQL syntax specific to BigQuery: column options, array types, pipe
//! syntax and hyphenated project names.

#[macro_use]
mod test_utils;

use matches::assert_matches;
use pretty_assertions::assert_eq;
use sqlalter::ast::*;
use sqlalter::dialect::{BigQueryDialect, GenericDialect};
use sqlalter::parser::ParserError;
use test_utils::*;

fn bigquery() -> TestedDialects {
    TestedDialects::new(vec![Box::new(BigQueryDialect {})])
}

fn bigquery_and_generic() -> TestedDialects {
    TestedDialects::new(vec![Box::new(BigQueryDialect {}), Box::new(GenericDialect {})])
}

#[test]
fn parse_alter_column_set_options() {
    let sql = "ALTER TABLE mydataset.mytable ALTER COLUMN price SET OPTIONS (description='Price per unit')";
    assert_eq!(
        alter_expression_with_name(bigquery().verified_stmt(sql), "mydataset.mytable"),
        AlterExpression::AlterColumn {
            column_keyword: ColumnKeyword::Column,
            column_name: "price".into(),
            action: AlterColumnAction::SetOptions("(description='Price per unit')".to_string()),
        }
    );

    bigquery().one_statement_parses_to(
        "ALTER TABLE t ALTER COLUMN c SET OPTIONS ( allow_commit_timestamp = true )",
        "ALTER TABLE t ALTER COLUMN c SET OPTIONS (allow_commit_timestamp = true)",
    );
}

#[test]
fn parse_array_column_types() {
    let expression = alter_expression_with_name(
        bigquery().one_statement_parses_to(
            "ALTER TABLE Singers ADD COLUMN NAMES ARRAY<STRING(MAX)>",
            "ALTER TABLE Singers ADD COLUMN NAMES ARRAY<STRING (MAX)>",
        ),
        "Singers",
    );
    assert_eq!(
        expression,
        AlterExpression::add_column(ColumnDataType::new("NAMES").with_data_type(
            ColDataType::new("ARRAY").with_element(ColDataType::new("STRING").with_argument("MAX"))
        ))
    );
    bigquery_and_generic().verified_stmt("ALTER TABLE t ALTER COLUMN tags SET DATA TYPE ARRAY<INT64>");
}

#[test]
fn parse_quoted_project_table_names() {
    let alter = bigquery().verified_stmt("ALTER TABLE `my-project.dataset.events` DROP COLUMN IF EXISTS legacy");
    match alter {
        Statement::Alter(alter) => assert_eq!(
            alter.table,
            ObjectName(vec![Ident::with_quote('`', "my-project.dataset.events")])
        ),
        other => panic!("Expected ALTER TABLE, got {other:?}"),
    }
    bigquery().verified_stmt("ALTER TABLE `my-project`.dataset.`events` FORCE");
}

#[test]
fn parse_hyphenated_names_in_from() {
    let query = bigquery().verified_query("FROM my-project.dataset.sales AS s |> WHERE s.amount > 100");
    assert_eq!(
        query.body,
        QueryBody::From(TableFactor {
            name: ObjectName(vec!["my-project".into(), "dataset".into(), "sales".into()]),
            alias: Some("s".into()),
        })
    );

    // hyphens outside a FROM clause stay operators
    assert!(bigquery()
        .parse_sql_statements("ALTER TABLE my-project.dataset.sales FORCE")
        .is_err());
}

#[test]
fn parse_pipe_chain() {
    let sql = "FROM Produce |> WHERE item <> 'bananas' |> EXTEND sales * 2 AS doubled |> DROP category |> AGGREGATE SUM(doubled) AS total GROUP BY item |> ORDER BY total DESC |> LIMIT 5 OFFSET 1";
    let query = bigquery().verified_query(sql);
    assert_eq!(query.pipe_operators.len(), 6);
    assert_matches!(query.pipe_operators[0], PipeOperator::Where { .. });
    assert_eq!(
        query.pipe_operators[2],
        PipeOperator::Drop {
            columns: vec!["category".into()],
        }
    );
    assert_eq!(
        query.pipe_operators[5],
        PipeOperator::Limit {
            expr: Expr::value(number("5")),
            offset: Some(Expr::value(number("1"))),
        }
    );

    bigquery().verified_stmt("SELECT * FROM t |> RENAME a AS b |> AS u |> SELECT u.b");
    bigquery().verified_stmt("EXPLAIN FROM t |> WHERE a IS NOT NULL");
}

#[test]
fn pipes_need_dialect_support() {
    let no_pipes = all_dialects_where(|d| !d.supports_pipe_operator());
    assert!(no_pipes.parse_sql_statements("FROM t |> WHERE a = 1").is_err());
}

#[test]
fn parse_pipe_errors() {
    assert_eq!(
        bigquery().parse_sql_statements("FROM t |> ORDER a"),
        Err(ParserError::ParserError(
            "Expected: BY, found: a at Line: 1, Column: 17".to_string()
        ))
    );
}
