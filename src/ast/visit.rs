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

//! Recursive walker with pre/post hooks, built on the visitor traits.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::ops::ControlFlow;

use crate::ast::{
    Alter, AlterColumnAction, AlterExpression, BinaryOperator, CreateSynonym, ExplainStatement,
    ExplainTarget, Expr, ExpressionNode, ExpressionVisitor, Function, Ident, IdentWithAlias,
    ObjectName, OrderByExpr, PartitionKey, PipeOperatorNode, PipeOperatorVisitor, Query,
    QueryBody, SelectItem, Statement, StatementNode, StatementVisitor, TableConstraint,
    TableFactor, UnaryOperator, Value,
};

/// A type that can be visited by a `visitor`
pub trait Visit {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break>;
}

impl<T: Visit> Visit for Option<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Some(s) = self {
            s.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Vec<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        for v in self {
            v.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Box<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        T::visit(self, visitor)
    }
}

/// A visitor that can be used to walk an AST tree
pub trait Visitor {
    type Break;

    /// Invoked for any relations (e.g. tables) that appear in the AST before visiting children
    fn pre_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for any relations (e.g. tables) that appear in the AST after visiting children
    fn post_visit_relation(&mut self, _relation: &ObjectName) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for any expressions that appear in the AST before visiting children
    fn pre_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for any expressions that appear in the AST
    fn post_visit_expr(&mut self, _expr: &Expr) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for any statements that appear in the AST before visiting children
    fn pre_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Invoked for any statements that appear in the AST after visiting children
    fn post_visit_statement(&mut self, _statement: &Statement) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

impl Visit for Statement {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_statement(self)?;
        self.accept(&mut Walker(visitor), ())?;
        visitor.post_visit_statement(self)
    }
}

impl Visit for Alter {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.accept(&mut Walker(visitor), ())
    }
}

impl Visit for Query {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.accept(&mut Walker(visitor), ())
    }
}

impl Visit for Expr {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_expr(self)?;
        self.accept(&mut Walker(visitor), ())?;
        visitor.post_visit_expr(self)
    }
}

impl Visit for ObjectName {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        visitor.pre_visit_relation(self)?;
        visitor.post_visit_relation(self)
    }
}

impl Visit for SelectItem {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        match self {
            SelectItem::UnnamedExpr(expr) | SelectItem::ExprWithAlias { expr, .. } => {
                expr.visit(visitor)
            }
            SelectItem::Wildcard => ControlFlow::Continue(()),
        }
    }
}

impl Visit for TableFactor {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        self.name.visit(visitor)
    }
}

/// Drives a [`Visitor`] through the double-dispatch visitor traits: the
/// walker only descends, the hooks are called by the [`Visit`] impls.
struct Walker<'a, V>(&'a mut V);

impl<V: Visitor> Walker<'_, V> {
    fn alter_expression(&mut self, expression: &AlterExpression) -> ControlFlow<V::Break> {
        match expression {
            AlterExpression::AddConstraint(TableConstraint::ForeignKey(fk)) => {
                fk.foreign_table.visit(self.0)
            }
            AlterExpression::AddConstraint(TableConstraint::Check(check)) => {
                check.expression.visit(self.0)
            }
            AlterExpression::AlterColumn {
                action: AlterColumnAction::SetDefault(expr),
                ..
            } => expr.visit(self.0),
            AlterExpression::RenameTable { new_name, .. } => new_name.visit(self.0),
            AlterExpression::ExchangePartition { table, .. } => table.visit(self.0),
            AlterExpression::SetTableOption(option) => option.value.visit(self.0),
            AlterExpression::PartitionBy(by) => match &by.key {
                PartitionKey::Expression(expr) => expr.visit(self.0),
                PartitionKey::Columns { .. } => ControlFlow::Continue(()),
            },
            _ => ControlFlow::Continue(()),
        }
    }
}

impl<V: Visitor> StatementVisitor<()> for Walker<'_, V> {
    type Output = ControlFlow<V::Break>;

    fn visit_alter(&mut self, alter: &Alter, _: ()) -> Self::Output {
        alter.table.visit(self.0)?;
        for expression in &alter.expressions {
            self.alter_expression(expression)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_explain(&mut self, explain: &ExplainStatement, _: ()) -> Self::Output {
        match &explain.target {
            ExplainTarget::Table(name) => name.visit(self.0),
            ExplainTarget::Query(query) => query.visit(self.0),
        }
    }

    fn visit_create_synonym(&mut self, synonym: &CreateSynonym, _: ()) -> Self::Output {
        synonym.synonym.visit(self.0)?;
        synonym.for_object.visit(self.0)
    }

    fn visit_query(&mut self, query: &Query, _: ()) -> Self::Output {
        match &query.body {
            QueryBody::Select(select) => {
                select.projection.visit(self.0)?;
                select.from.visit(self.0)?;
                select.selection.visit(self.0)?;
            }
            QueryBody::From(table) => table.visit(self.0)?,
        }
        for operator in &query.pipe_operators {
            operator.accept(self, ())?;
        }
        ControlFlow::Continue(())
    }
}

impl<V: Visitor> ExpressionVisitor<()> for Walker<'_, V> {
    type Output = ControlFlow<V::Break>;

    fn visit_identifier(&mut self, _: &Ident, _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_compound_identifier(&mut self, _: &[Ident], _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_value(&mut self, _: &Value, _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_binary_op(&mut self, left: &Expr, _: &BinaryOperator, right: &Expr, _: ()) -> Self::Output {
        left.visit(self.0)?;
        right.visit(self.0)
    }

    fn visit_unary_op(&mut self, _: &UnaryOperator, expr: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)
    }

    fn visit_nested(&mut self, expr: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)
    }

    fn visit_function(&mut self, function: &Function, _: ()) -> Self::Output {
        function.args.visit(self.0)
    }

    fn visit_is_null(&mut self, expr: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)
    }

    fn visit_is_not_null(&mut self, expr: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)
    }

    fn visit_in_list(&mut self, expr: &Expr, list: &[Expr], _: bool, _: ()) -> Self::Output {
        expr.visit(self.0)?;
        for item in list {
            item.visit(self.0)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_between(&mut self, expr: &Expr, _: bool, low: &Expr, high: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)?;
        low.visit(self.0)?;
        high.visit(self.0)
    }

    fn visit_wildcard(&mut self, _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }
}

impl<V: Visitor> PipeOperatorVisitor<()> for Walker<'_, V> {
    type Output = ControlFlow<V::Break>;

    fn visit_where(&mut self, expr: &Expr, _: ()) -> Self::Output {
        expr.visit(self.0)
    }

    fn visit_select(&mut self, exprs: &[SelectItem], _: ()) -> Self::Output {
        for item in exprs {
            item.visit(self.0)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_extend(&mut self, exprs: &[SelectItem], context: ()) -> Self::Output {
        self.visit_select(exprs, context)
    }

    fn visit_drop(&mut self, _: &[Ident], _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_as(&mut self, _: &Ident, _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_limit(&mut self, expr: &Expr, offset: Option<&Expr>, _: ()) -> Self::Output {
        expr.visit(self.0)?;
        if let Some(offset) = offset {
            offset.visit(self.0)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_order_by(&mut self, exprs: &[OrderByExpr], _: ()) -> Self::Output {
        for order_by in exprs {
            order_by.expr.visit(self.0)?;
        }
        ControlFlow::Continue(())
    }

    fn visit_rename(&mut self, _: &[IdentWithAlias], _: ()) -> Self::Output {
        ControlFlow::Continue(())
    }

    fn visit_aggregate(&mut self, full_table_exprs: &[SelectItem], group_by: &[SelectItem], context: ()) -> Self::Output {
        self.visit_select(full_table_exprs, context)?;
        self.visit_select(group_by, context)
    }
}

struct RelationVisitor<F>(F);

impl<E, F: FnMut(&ObjectName) -> ControlFlow<E>> Visitor for RelationVisitor<F> {
    type Break = E;

    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<Self::Break> {
        self.0(relation)
    }
}

/// Invokes the provided closure on all relations present in v
///
/// # Example
/// ```
/// # use sqlalter::parser::Parser;
/// # use sqlalter::dialect::MySqlDialect;
/// # use sqlalter::ast::visit_relations;
/// # use core::ops::ControlFlow;
/// let sql = "ALTER TABLE orders ADD CONSTRAINT fk_customer FOREIGN KEY (customer_id) REFERENCES customers (id)";
/// let statements = Parser::parse_sql(&MySqlDialect {}, sql).unwrap();
///
/// let mut visited = vec![];
/// visit_relations(&statements, |relation| {
///     visited.push(relation.to_string());
///     ControlFlow::<()>::Continue(())
/// });
///
/// assert_eq!(visited, ["orders", "customers"]);
/// ```
pub fn visit_relations<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&ObjectName) -> ControlFlow<E>,
{
    let mut visitor = RelationVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

struct ExprVisitor<F>(F);

impl<E, F: FnMut(&Expr) -> ControlFlow<E>> Visitor for ExprVisitor<F> {
    type Break = E;

    fn pre_visit_expr(&mut self, expr: &Expr) -> ControlFlow<Self::Break> {
        self.0(expr)
    }
}

/// Invokes the provided closure on all expressions present in v
pub fn visit_expressions<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&Expr) -> ControlFlow<E>,
{
    let mut visitor = ExprVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

struct StatementVisitorFn<F>(F);

impl<E, F: FnMut(&Statement) -> ControlFlow<E>> Visitor for StatementVisitorFn<F> {
    type Break = E;

    fn pre_visit_statement(&mut self, statement: &Statement) -> ControlFlow<Self::Break> {
        self.0(statement)
    }
}

/// Invokes the provided closure on all statements present in v
pub fn visit_statements<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&Statement) -> ControlFlow<E>,
{
    let mut visitor = StatementVisitorFn(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}
