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

use core::fmt::{self, Write};

use crate::ast::{
    display_comma_separated, ExplainOption, ExplainStatement, ExplainTarget, Expr, ExpressionNode,
    Ident, IdentWithAlias, OrderByExpr, PipeOperatorNode, PipeOperatorVisitor, Query, QueryBody,
    SelectItem,
};
use crate::display_utils::write_separated;

use super::Deparser;

impl<W: Write + ?Sized> Deparser<'_, W> {
    pub(crate) fn query(&mut self, query: &Query) -> fmt::Result {
        match &query.body {
            QueryBody::Select(select) => {
                write!(self, "SELECT ")?;
                if select.distinct {
                    write!(self, "DISTINCT ")?;
                }
                self.select_items(&select.projection)?;
                if let Some(from) = &select.from {
                    write!(self, " FROM {from}")?;
                }
                if let Some(selection) = &select.selection {
                    write!(self, " WHERE ")?;
                    selection.accept(self, ())?;
                }
            }
            QueryBody::From(table) => write!(self, "FROM {table}")?,
        }
        for operator in &query.pipe_operators {
            write!(self, " |> ")?;
            operator.accept(self, ())?;
        }
        Ok(())
    }

    pub(crate) fn explain(&mut self, explain: &ExplainStatement) -> fmt::Result {
        write!(self, "{}", explain.keyword)?;
        match &explain.target {
            ExplainTarget::Table(table) => write!(self, " {table}"),
            ExplainTarget::Query(query) => {
                for option in &explain.options {
                    write!(self, " ")?;
                    self.explain_option(option)?;
                }
                write!(self, " ")?;
                self.query(query)
            }
        }
    }

    pub(crate) fn explain_option(&mut self, option: &ExplainOption) -> fmt::Result {
        write!(self, "{}", option.option_type)?;
        if let Some(value) = &option.value {
            write!(self, " {value}")?;
        }
        Ok(())
    }

    pub(crate) fn select_item(&mut self, item: &SelectItem) -> fmt::Result {
        match item {
            SelectItem::UnnamedExpr(expr) => expr.accept(self, ()),
            SelectItem::ExprWithAlias { expr, alias } => {
                expr.accept(self, ())?;
                write!(self, " AS {alias}")
            }
            SelectItem::Wildcard => write!(self, "*"),
        }
    }

    fn select_items(&mut self, items: &[SelectItem]) -> fmt::Result {
        write_separated(self, items, ", ", |d, item| d.select_item(item))
    }

    pub(crate) fn order_by_expr(&mut self, order_by: &OrderByExpr) -> fmt::Result {
        order_by.expr.accept(self, ())?;
        match order_by.asc {
            Some(true) => write!(self, " ASC"),
            Some(false) => write!(self, " DESC"),
            None => Ok(()),
        }
    }
}

impl<W: Write + ?Sized> PipeOperatorVisitor<()> for Deparser<'_, W> {
    type Output = fmt::Result;

    fn visit_where(&mut self, expr: &Expr, _: ()) -> fmt::Result {
        write!(self, "WHERE ")?;
        expr.accept(self, ())
    }

    fn visit_select(&mut self, exprs: &[SelectItem], _: ()) -> fmt::Result {
        write!(self, "SELECT ")?;
        self.select_items(exprs)
    }

    fn visit_extend(&mut self, exprs: &[SelectItem], _: ()) -> fmt::Result {
        write!(self, "EXTEND ")?;
        self.select_items(exprs)
    }

    fn visit_drop(&mut self, columns: &[Ident], _: ()) -> fmt::Result {
        write!(self, "DROP {}", display_comma_separated(columns))
    }

    fn visit_as(&mut self, alias: &Ident, _: ()) -> fmt::Result {
        write!(self, "AS {alias}")
    }

    fn visit_limit(&mut self, expr: &Expr, offset: Option<&Expr>, _: ()) -> fmt::Result {
        write!(self, "LIMIT ")?;
        expr.accept(self, ())?;
        if let Some(offset) = offset {
            write!(self, " OFFSET ")?;
            offset.accept(self, ())?;
        }
        Ok(())
    }

    fn visit_order_by(&mut self, exprs: &[OrderByExpr], _: ()) -> fmt::Result {
        write!(self, "ORDER BY ")?;
        write_separated(self, exprs, ", ", |d, e| d.order_by_expr(e))
    }

    fn visit_rename(&mut self, mappings: &[IdentWithAlias], _: ()) -> fmt::Result {
        write!(self, "RENAME {}", display_comma_separated(mappings))
    }

    fn visit_aggregate(
        &mut self,
        full_table_exprs: &[SelectItem],
        group_by: &[SelectItem],
        _: (),
    ) -> fmt::Result {
        write!(self, "AGGREGATE")?;
        if !full_table_exprs.is_empty() {
            write!(self, " ")?;
            self.select_items(full_table_exprs)?;
        }
        if !group_by.is_empty() {
            write!(self, " GROUP BY ")?;
            self.select_items(group_by)?;
        }
        Ok(())
    }
}
