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

//! Query subset: `SELECT` and FROM-first queries with pipe operators.
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Ident, ObjectName, PipeOperatorNode, StatementNode};
use crate::deparser::Deparser;

/// A query: a body followed by any number of pipe operators.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    pub body: QueryBody,
    /// Pipe operators, in the order written
    pub pipe_operators: Vec<PipeOperator>,
}

impl Query {
    pub fn new(body: QueryBody) -> Self {
        Query {
            body,
            pipe_operators: vec![],
        }
    }

    pub fn with_pipe_operator(mut self, operator: PipeOperator) -> Self {
        self.pipe_operators.push(operator);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueryBody {
    /// `SELECT ...`
    Select(Box<Select>),
    /// `FROM t`, the FROM-first form of pipe syntax
    From(TableFactor),
}

/// `SELECT [DISTINCT] items [FROM table] [WHERE selection]`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Select {
    pub distinct: bool,
    pub projection: Vec<SelectItem>,
    pub from: Option<TableFactor>,
    pub selection: Option<Expr>,
}

/// A table reference with an optional alias
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableFactor {
    pub name: ObjectName,
    pub alias: Option<Ident>,
}

impl fmt::Display for TableFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// One item of a projection list
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectItem {
    /// Any expression, not followed by `[ AS ] alias`
    UnnamedExpr(Expr),
    /// An expression, followed by `[ AS ] alias`
    ExprWithAlias { expr: Expr, alias: Ident },
    /// An unqualified `*`
    Wildcard,
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).select_item(self)
    }
}

/// An `ORDER BY` expression
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderByExpr {
    pub expr: Expr,
    /// Optional `ASC` or `DESC`
    pub asc: Option<bool>,
}

impl fmt::Display for OrderByExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).order_by_expr(self)
    }
}

/// `ident AS alias`, as used by the `RENAME` pipe operator
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentWithAlias {
    pub ident: Ident,
    pub alias: Ident,
}

impl fmt::Display for IdentWithAlias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} AS {}", self.ident, self.alias)
    }
}

/// Pipe syntax, first introduced in Google BigQuery.
/// Example:
///
/// ```sql
/// FROM Produce
/// |> WHERE sales > 0
/// |> AGGREGATE SUM(sales) AS total_sales, COUNT(*) AS num_sales
///    GROUP BY item;
/// ```
///
/// See <https://cloud.google.com/bigquery/docs/reference/standard-sql/pipe-syntax#pipe_syntax>
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PipeOperator {
    /// Filters the results of the input table.
    ///
    /// Syntax: `|> WHERE <condition>`
    Where { expr: Expr },
    /// Syntax `|> SELECT <expr> [[AS] alias], ...`
    Select { exprs: Vec<SelectItem> },
    /// Propagates the existing table and adds computed columns.
    ///
    /// Syntax: `|> EXTEND <expr> [[AS] alias], ...`
    Extend { exprs: Vec<SelectItem> },
    /// Syntax: `|> DROP <column>, ...`
    Drop { columns: Vec<Ident> },
    /// Syntax: `|> AS <alias>`
    As { alias: Ident },
    /// Syntax: `|> LIMIT <n> [OFFSET <m>]`
    Limit { expr: Expr, offset: Option<Expr> },
    /// `ORDER BY <expr> [ASC|DESC], ...`
    OrderBy { exprs: Vec<OrderByExpr> },
    /// Syntax: `|> RENAME old_name AS new_name, ...`
    Rename { mappings: Vec<IdentWithAlias> },
    /// Syntax:
    /// ```norust
    /// |> AGGREGATE [<agg_expr> [[AS] alias], ...]
    /// [GROUP BY <grouping_expr> [AS alias], ...]
    /// ```
    Aggregate {
        full_table_exprs: Vec<SelectItem>,
        group_by_expr: Vec<SelectItem>,
    },
}

impl fmt::Display for PipeOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}
