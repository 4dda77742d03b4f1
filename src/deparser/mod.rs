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

//! SQL text generation.
//!
//! The [`Deparser`] implements the statement, expression and pipe operator
//! visitor traits and writes canonical SQL into any [`fmt::Write`] buffer.
//! Every `Display` impl of the AST goes through it, so the rendering rules
//! live in one place:
//!
//! ```
//! # use sqlalter::ast::{Alter, AlterExpression};
//! # use sqlalter::deparser::{deparse, Deparser};
//! # use sqlalter::ast::StatementNode;
//! let alter = Alter::new("t").with_expression(AlterExpression::comment("users"));
//!
//! let mut buffer = String::new();
//! alter.accept(&mut Deparser::new(&mut buffer), ()).unwrap();
//! assert_eq!("ALTER TABLE t COMMENT = 'users'", buffer);
//! assert_eq!(buffer, deparse(&alter));
//! ```
#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::fmt::{self, Write};

use crate::ast::{Alter, CreateSynonym, ExplainStatement, Query, StatementNode, StatementVisitor};

mod alter;
mod expr;
mod query;

/// Writes SQL text for AST nodes into a caller provided buffer.
pub struct Deparser<'a, W: Write + ?Sized> {
    buffer: &'a mut W,
}

impl<'a, W: Write + ?Sized> Deparser<'a, W> {
    pub fn new(buffer: &'a mut W) -> Self {
        Deparser { buffer }
    }
}

impl<W: Write + ?Sized> Write for Deparser<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.write_str(s)
    }
}

impl<W: Write + ?Sized> StatementVisitor<()> for Deparser<'_, W> {
    type Output = fmt::Result;

    fn visit_alter(&mut self, alter: &Alter, _: ()) -> fmt::Result {
        self.alter(alter)
    }

    fn visit_explain(&mut self, explain: &ExplainStatement, _: ()) -> fmt::Result {
        self.explain(explain)
    }

    fn visit_create_synonym(&mut self, synonym: &CreateSynonym, _: ()) -> fmt::Result {
        write!(self, "CREATE ")?;
        if synonym.or_replace {
            write!(self, "OR REPLACE ")?;
        }
        if synonym.public {
            write!(self, "PUBLIC ")?;
        }
        write!(self, "SYNONYM {} FOR {}", synonym.synonym, synonym.for_object)
    }

    fn visit_query(&mut self, query: &Query, _: ()) -> fmt::Result {
        self.query(query)
    }
}

/// Render a statement into a new `String`.
pub fn deparse<N: StatementNode>(node: &N) -> String {
    let mut buffer = String::new();
    // writing into a String never fails
    let _ = node.accept(&mut Deparser::new(&mut buffer), ());
    buffer
}
