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

//! Double-dispatch visitor traits.
//!
//! Every node family has a visitor trait with one method per concrete
//! variant, and a node trait whose `accept` selects that method. Operations
//! over the tree (the [`Deparser`](crate::deparser::Deparser), the
//! [`Visit`](crate::ast::Visit) walker, user code) implement the visitor
//! traits instead of matching on the nodes themselves.
//!
//! Each visitor chooses its `Output` type and a context type `C` that is
//! passed through `accept` unchanged.

use crate::ast::{
    Alter, BinaryOperator, CreateSynonym, ExplainStatement, Expr, Function, Ident,
    IdentWithAlias, OrderByExpr, PipeOperator, Query, SelectItem, Statement, UnaryOperator, Value,
};

/// A visitor over statements
pub trait StatementVisitor<C> {
    type Output;

    fn visit_alter(&mut self, alter: &Alter, context: C) -> Self::Output;

    fn visit_explain(&mut self, explain: &ExplainStatement, context: C) -> Self::Output;

    fn visit_create_synonym(&mut self, synonym: &CreateSynonym, context: C) -> Self::Output;

    fn visit_query(&mut self, query: &Query, context: C) -> Self::Output;
}

/// A visitor over expressions
pub trait ExpressionVisitor<C> {
    type Output;

    fn visit_identifier(&mut self, ident: &Ident, context: C) -> Self::Output;

    fn visit_compound_identifier(&mut self, idents: &[Ident], context: C) -> Self::Output;

    fn visit_value(&mut self, value: &Value, context: C) -> Self::Output;

    fn visit_binary_op(
        &mut self,
        left: &Expr,
        op: &BinaryOperator,
        right: &Expr,
        context: C,
    ) -> Self::Output;

    fn visit_unary_op(&mut self, op: &UnaryOperator, expr: &Expr, context: C) -> Self::Output;

    fn visit_nested(&mut self, expr: &Expr, context: C) -> Self::Output;

    fn visit_function(&mut self, function: &Function, context: C) -> Self::Output;

    fn visit_is_null(&mut self, expr: &Expr, context: C) -> Self::Output;

    fn visit_is_not_null(&mut self, expr: &Expr, context: C) -> Self::Output;

    fn visit_in_list(
        &mut self,
        expr: &Expr,
        list: &[Expr],
        negated: bool,
        context: C,
    ) -> Self::Output;

    fn visit_between(
        &mut self,
        expr: &Expr,
        negated: bool,
        low: &Expr,
        high: &Expr,
        context: C,
    ) -> Self::Output;

    fn visit_wildcard(&mut self, context: C) -> Self::Output;
}

/// A visitor over pipe operators
pub trait PipeOperatorVisitor<C> {
    type Output;

    fn visit_where(&mut self, expr: &Expr, context: C) -> Self::Output;

    fn visit_select(&mut self, exprs: &[SelectItem], context: C) -> Self::Output;

    fn visit_extend(&mut self, exprs: &[SelectItem], context: C) -> Self::Output;

    fn visit_drop(&mut self, columns: &[Ident], context: C) -> Self::Output;

    fn visit_as(&mut self, alias: &Ident, context: C) -> Self::Output;

    fn visit_limit(&mut self, expr: &Expr, offset: Option<&Expr>, context: C) -> Self::Output;

    fn visit_order_by(&mut self, exprs: &[OrderByExpr], context: C) -> Self::Output;

    fn visit_rename(&mut self, mappings: &[IdentWithAlias], context: C) -> Self::Output;

    fn visit_aggregate(
        &mut self,
        full_table_exprs: &[SelectItem],
        group_by: &[SelectItem],
        context: C,
    ) -> Self::Output;
}

/// A node that dispatches to a [`StatementVisitor`]
pub trait StatementNode {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output;
}

/// A node that dispatches to an [`ExpressionVisitor`]
pub trait ExpressionNode {
    fn accept<V: ExpressionVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output;
}

/// A node that dispatches to a [`PipeOperatorVisitor`]
pub trait PipeOperatorNode {
    fn accept<V: PipeOperatorVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output;
}

impl StatementNode for Statement {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        match self {
            Statement::Alter(alter) => visitor.visit_alter(alter, context),
            Statement::Explain(explain) => visitor.visit_explain(explain, context),
            Statement::CreateSynonym(synonym) => visitor.visit_create_synonym(synonym, context),
            Statement::Query(query) => visitor.visit_query(query, context),
        }
    }
}

impl StatementNode for Alter {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        visitor.visit_alter(self, context)
    }
}

impl StatementNode for ExplainStatement {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        visitor.visit_explain(self, context)
    }
}

impl StatementNode for CreateSynonym {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        visitor.visit_create_synonym(self, context)
    }
}

impl StatementNode for Query {
    fn accept<V: StatementVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        visitor.visit_query(self, context)
    }
}

impl ExpressionNode for Expr {
    fn accept<V: ExpressionVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        match self {
            Expr::Identifier(ident) => visitor.visit_identifier(ident, context),
            Expr::CompoundIdentifier(idents) => visitor.visit_compound_identifier(idents, context),
            Expr::Value(value) => visitor.visit_value(value, context),
            Expr::BinaryOp { left, op, right } => visitor.visit_binary_op(left, op, right, context),
            Expr::UnaryOp { op, expr } => visitor.visit_unary_op(op, expr, context),
            Expr::Nested(expr) => visitor.visit_nested(expr, context),
            Expr::Function(function) => visitor.visit_function(function, context),
            Expr::IsNull(expr) => visitor.visit_is_null(expr, context),
            Expr::IsNotNull(expr) => visitor.visit_is_not_null(expr, context),
            Expr::InList {
                expr,
                list,
                negated,
            } => visitor.visit_in_list(expr, list, *negated, context),
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => visitor.visit_between(expr, *negated, low, high, context),
            Expr::Wildcard => visitor.visit_wildcard(context),
        }
    }
}

impl PipeOperatorNode for PipeOperator {
    fn accept<V: PipeOperatorVisitor<C>, C>(&self, visitor: &mut V, context: C) -> V::Output {
        match self {
            PipeOperator::Where { expr } => visitor.visit_where(expr, context),
            PipeOperator::Select { exprs } => visitor.visit_select(exprs, context),
            PipeOperator::Extend { exprs } => visitor.visit_extend(exprs, context),
            PipeOperator::Drop { columns } => visitor.visit_drop(columns, context),
            PipeOperator::As { alias } => visitor.visit_as(alias, context),
            PipeOperator::Limit { expr, offset } => {
                visitor.visit_limit(expr, offset.as_ref(), context)
            }
            PipeOperator::OrderBy { exprs } => visitor.visit_order_by(exprs, context),
            PipeOperator::Rename { mappings } => visitor.visit_rename(mappings, context),
            PipeOperator::Aggregate {
                full_table_exprs,
                group_by_expr,
            } => visitor.visit_aggregate(full_table_exprs, group_by_expr, context),
        }
    }
}
