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

//! # SQL ALTER TABLE parser, deparser and visitor framework
//!
//! Parses `ALTER TABLE` statements of the MySQL, PostgreSQL, Oracle and
//! BigQuery dialects into a typed Abstract Syntax Tree ([AST]), deparses
//! the tree back to SQL text, and lets callers walk it with visitors.
//! A handful of companion statements are supported as well: `EXPLAIN`,
//! `DESCRIBE`, Oracle `CREATE SYNONYM` and a small query subset with
//! BigQuery pipe operators.
//!
//! # Example parsing SQL text
//!
//! ```
//! use sqlalter::dialect::MySqlDialect;
//! use sqlalter::parser::Parser;
//!
//! let sql = "ALTER TABLE mytab ADD COLUMN col1 int (10) NOT NULL, DROP INDEX idx_1";
//!
//! let ast = Parser::parse_sql(&MySqlDialect {}, sql).unwrap();
//!
//! println!("AST: {:?}", ast);
//! ```
//!
//! # Creating SQL text from AST
//!
//! Every node implements [`Display`] by running the [`Deparser`] over
//! it, so a parsed statement prints back as canonical SQL:
//!
//! ```
//! use sqlalter::dialect::GenericDialect;
//! use sqlalter::parser::Parser;
//!
//! let sql = "ALTER TABLE t ENGINE=InnoDB, COMMENT 'users'";
//! let ast = Parser::parse_sql(&GenericDialect {}, sql).unwrap();
//! assert_eq!(ast[0].to_string(), "ALTER TABLE t ENGINE = InnoDB, COMMENT 'users'");
//! ```
//!
//! # Visiting the AST
//!
//! [`ast::StatementVisitor`], [`ast::ExpressionVisitor`] and
//! [`ast::PipeOperatorVisitor`] dispatch on the concrete node type and
//! carry a caller chosen context value; see [`ast::Visit`] and
//! [`ast::visit_expressions`] for the closure based helpers.
//!
//! ```
//! use core::ops::ControlFlow;
//! use sqlalter::ast::{visit_expressions, Expr};
//! use sqlalter::dialect::GenericDialect;
//! use sqlalter::parser::Parser;
//!
//! let statements = Parser::parse_sql(&GenericDialect {}, "SELECT a FROM t WHERE b = 1").unwrap();
//! let mut identifiers = vec![];
//! let _ = visit_expressions(&statements, |expr| {
//!     if let Expr::Identifier(ident) = expr {
//!         identifiers.push(ident.value.clone());
//!     }
//!     ControlFlow::<()>::Continue(())
//! });
//! assert_eq!(identifiers, vec!["a", "b"]);
//! ```
//!
//! [AST]: ast
//! [`Display`]: core::fmt::Display
//! [`Deparser`]: deparser::Deparser

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::upper_case_acronyms)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
#[cfg(test)]
extern crate pretty_assertions;

#[macro_use]
pub mod dialect;
pub mod ast;
pub mod deparser;
mod display_utils;
pub mod keywords;
pub mod parser;
pub mod tokenizer;

#[doc(hidden)]
// This is required to make utilities accessible by both the crate-internal
// unit-tests and by the integration tests <https://stackoverflow.com/a/44541071/1026>
// External users are not supposed to rely on this module.
#[cfg(any(test, feature = "std"))]
pub mod test_utils;
