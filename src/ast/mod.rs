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

//! SQL Abstract Syntax Tree (AST) types
#[cfg(not(feature = "std"))]
use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::data_type::ColDataType;
pub use self::ddl::{
    Alter, AlterColumnAction, AlterConstraintKeyword, AlterExpression, AlterOperation,
    CharacterSetCollate, ColumnDataType, ColumnKeyword, CreateSynonym, DropBehavior, RenameKind,
    TableOption,
};
pub use self::explain::{DescribeAlias, ExplainOption, ExplainOptionType, ExplainStatement, ExplainTarget};
pub use self::operator::{BinaryOperator, UnaryOperator};
pub use self::partition::{
    PartitionBy, PartitionDefinition, PartitionEngine, PartitionKey, PartitionMethod,
    PartitionOperation,
};
pub use self::query::{
    IdentWithAlias, OrderByExpr, PipeOperator, Query, QueryBody, Select, SelectItem, TableFactor,
};
pub use self::table_constraints::{
    CheckConstraint, ConstraintState, ForeignKeyIndex, Index, IndexColumn, IndexKeyword,
    IndexType, NamedConstraint, ReferentialAction, ReferentialActionKind,
    ReferentialActionOption, TableConstraint,
};
pub use self::value::{
    escape_double_quote_string, escape_quoted_string, escape_single_quote_string,
    EscapeQuotedString, Value,
};
pub use self::visit::{visit_expressions, visit_relations, visit_statements, Visit, Visitor};
pub use self::visitor::{
    ExpressionNode, ExpressionVisitor, PipeOperatorNode, PipeOperatorVisitor, StatementNode,
    StatementVisitor,
};
pub(crate) use crate::display_utils::{display_comma_separated, display_separated};
use crate::deparser::Deparser;
use crate::tokenizer::Word;

mod data_type;
mod ddl;
mod explain;
mod operator;
mod partition;
mod query;
mod table_constraints;
mod value;
mod visit;
mod visitor;

/// An identifier, decomposed into its value or character data and the quote style.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ident {
    /// The value of the identifier without quotes.
    pub value: String,
    /// The starting quote if any. Valid quote characters are the double quote,
    /// backtick and opening square bracket.
    pub quote_style: Option<char>,
}

impl Ident {
    /// Create a new identifier with the given value and no quotes.
    pub fn new<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Ident {
            value: value.into(),
            quote_style: None,
        }
    }

    /// Create a new quoted identifier with the given quote and value.
    pub fn with_quote<S>(quote: char, value: S) -> Self
    where
        S: Into<String>,
    {
        Ident {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident {
            value: value.to_string(),
            quote_style: None,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.quote_style {
            Some(q) if q == '"' || q == '\'' || q == '`' => {
                let escaped = value::escape_quoted_string(&self.value, q);
                write!(f, "{q}{escaped}{q}")
            }
            Some(q) => write!(f, "{q}{}{}", self.value, Word::matching_end_quote(q)),
            None => f.write_str(&self.value),
        }
    }
}

/// A name of a table, view, custom type, etc., possibly multi-part, i.e. db.schema.obj
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectName(pub Vec<Ident>);

impl From<Vec<Ident>> for ObjectName {
    fn from(idents: Vec<Ident>) -> Self {
        ObjectName(idents)
    }
}

impl From<&str> for ObjectName {
    fn from(name: &str) -> Self {
        ObjectName(vec![Ident::new(name)])
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", display_separated(&self.0, "."))
    }
}

/// An SQL expression of any type.
///
/// The parser does not distinguish between expressions of different types
/// (e.g. boolean vs string), so the caller must handle expressions of
/// inappropriate type, like `WHERE 1` or `SELECT 1=1`, as necessary.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// Identifier e.g. table name or column name
    Identifier(Ident),
    /// Multi-part identifier, e.g. `table_alias.column` or `schema.table.col`
    CompoundIdentifier(Vec<Ident>),
    /// A literal value, such as string, number or NULL
    Value(Value),
    /// Binary operation e.g. `1 + 1` or `foo > bar`
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    /// Unary operation e.g. `NOT foo`
    UnaryOp { op: UnaryOperator, expr: Box<Expr> },
    /// Nested expression e.g. `(foo > bar)` or `(1)`
    Nested(Box<Expr>),
    /// Scalar function call e.g. `LEFT(foo, 5)`
    Function(Function),
    /// `IS NULL` operator
    IsNull(Box<Expr>),
    /// `IS NOT NULL` operator
    IsNotNull(Box<Expr>),
    /// `[ NOT ] IN (val1, val2, ...)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    /// `<expr> [ NOT ] BETWEEN <low> AND <high>`
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    /// Unqualified wildcard, only valid as a function argument as in `COUNT(*)`
    Wildcard,
}

impl Expr {
    /// Shorthand for `Expr::Value(value)`
    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Value(value.into())
    }

    /// Shorthand for an unquoted identifier expression
    pub fn ident(name: &str) -> Self {
        Expr::Identifier(Ident::new(name))
    }

    /// Build `self <op> right`
    pub fn binary(self, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}

/// A function call
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub name: ObjectName,
    pub args: Vec<Expr>,
}

impl Function {
    pub fn new(name: impl Into<ObjectName>, args: Vec<Expr>) -> Self {
        Function {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).function(self)
    }
}

/// A top-level statement (SELECT, ALTER TABLE, EXPLAIN, etc.)
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    /// ```sql
    /// ALTER TABLE [ IF EXISTS ] [ ONLY ] name expression [, ...]
    /// ```
    Alter(Alter),
    /// ```sql
    /// EXPLAIN [ option ... ] query
    /// DESCRIBE table
    /// ```
    Explain(ExplainStatement),
    /// ```sql
    /// CREATE [ OR REPLACE ] [ PUBLIC ] SYNONYM name FOR object
    /// ```
    CreateSynonym(CreateSynonym),
    /// `SELECT` or FROM-first query, with optional pipe operators
    Query(Box<Query>),
}

impl From<Alter> for Statement {
    fn from(alter: Alter) -> Self {
        Statement::Alter(alter)
    }
}

impl From<ExplainStatement> for Statement {
    fn from(explain: ExplainStatement) -> Self {
        Statement::Explain(explain)
    }
}

impl From<CreateSynonym> for Statement {
    fn from(synonym: CreateSynonym) -> Self {
        Statement::CreateSynonym(synonym)
    }
}

impl From<Query> for Statement {
    fn from(query: Query) -> Self {
        Statement::Query(Box::new(query))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}
