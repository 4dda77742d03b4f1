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

//! Test the ability for dialects to override parsing

use sqlalter::{
    ast::{Alter, AlterExpression, Statement},
    dialect::Dialect,
    keywords::Keyword,
    parser::{Parser, ParserError},
};

/// Accepts MySQL's standalone `RENAME TABLE a TO b` as an ALTER TABLE
#[derive(Debug)]
struct RenameTableDialect {}

impl Dialect for RenameTableDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        is_identifier_start(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_identifier_part(ch)
    }

    fn parse_statement(&self, parser: &mut Parser) -> Option<Result<Statement, ParserError>> {
        if parser.parse_keywords(&[Keyword::RENAME, Keyword::TABLE]) {
            Some(parse_rename_table(parser))
        } else {
            None
        }
    }
}

fn parse_rename_table(parser: &mut Parser) -> Result<Statement, ParserError> {
    let table = parser.parse_object_name()?;
    parser.expect_keyword(Keyword::TO)?;
    let new_name = parser.parse_object_name()?;
    Ok(Statement::Alter(Alter::new(table).with_expression(
        AlterExpression::RenameTable {
            as_keyword: false,
            new_name,
        },
    )))
}

#[test]
fn custom_statement_parser() -> Result<(), ParserError> {
    let dialect = RenameTableDialect {};
    let ast = Parser::parse_sql(&dialect, "RENAME TABLE db.old_t TO db.new_t")?;
    assert_eq!(ast.len(), 1);
    assert_eq!(ast[0].to_string(), "ALTER TABLE db.old_t RENAME TO db.new_t");

    // everything else falls back to the default statement parser
    let ast = Parser::parse_sql(&dialect, "ALTER TABLE t FORCE")?;
    assert_eq!(ast[0].to_string(), "ALTER TABLE t FORCE");
    Ok(())
}

#[test]
fn custom_statement_parser_errors() {
    let dialect = RenameTableDialect {};
    assert_eq!(
        Parser::parse_sql(&dialect, "RENAME TABLE a b"),
        Err(ParserError::ParserError(
            "Expected: TO, found: b at Line: 1, Column: 16".to_string()
        ))
    );
}

#[test]
fn custom_dialect_defaults() {
    let dialect = RenameTableDialect {};
    assert!(!dialect.supports_pipe_operator());
    assert!(!dialect.supports_create_synonym());
    assert!(Parser::parse_sql(&dialect, "CREATE SYNONYM s FOR t").is_err());
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == '_'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_'
}
