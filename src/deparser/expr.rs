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
    BinaryOperator, Expr, ExpressionNode, ExpressionVisitor, Function, Ident, UnaryOperator,
    Value,
};
use crate::display_utils::write_separated;

use super::Deparser;

impl<W: Write + ?Sized> Deparser<'_, W> {
    pub(crate) fn function(&mut self, function: &Function) -> fmt::Result {
        write!(self, "{}(", function.name)?;
        self.exprs(&function.args)?;
        write!(self, ")")
    }

    /// Comma separated expressions
    pub(crate) fn exprs(&mut self, exprs: &[Expr]) -> fmt::Result {
        write_separated(self, exprs, ", ", |d, e| e.accept(d, ()))
    }
}

impl<W: Write + ?Sized> ExpressionVisitor<()> for Deparser<'_, W> {
    type Output = fmt::Result;

    fn visit_identifier(&mut self, ident: &Ident, _: ()) -> fmt::Result {
        write!(self, "{ident}")
    }

    fn visit_compound_identifier(&mut self, idents: &[Ident], _: ()) -> fmt::Result {
        write_separated(self, idents, ".", |d, i| write!(d, "{i}"))
    }

    fn visit_value(&mut self, value: &Value, _: ()) -> fmt::Result {
        write!(self, "{value}")
    }

    fn visit_binary_op(
        &mut self,
        left: &Expr,
        op: &BinaryOperator,
        right: &Expr,
        _: (),
    ) -> fmt::Result {
        left.accept(self, ())?;
        write!(self, " {op} ")?;
        right.accept(self, ())
    }

    fn visit_unary_op(&mut self, op: &UnaryOperator, expr: &Expr, _: ()) -> fmt::Result {
        match op {
            UnaryOperator::Not => write!(self, "{op} ")?,
            _ => write!(self, "{op}")?,
        }
        expr.accept(self, ())
    }

    fn visit_nested(&mut self, expr: &Expr, _: ()) -> fmt::Result {
        write!(self, "(")?;
        expr.accept(self, ())?;
        write!(self, ")")
    }

    fn visit_function(&mut self, function: &Function, _: ()) -> fmt::Result {
        self.function(function)
    }

    fn visit_is_null(&mut self, expr: &Expr, _: ()) -> fmt::Result {
        expr.accept(self, ())?;
        write!(self, " IS NULL")
    }

    fn visit_is_not_null(&mut self, expr: &Expr, _: ()) -> fmt::Result {
        expr.accept(self, ())?;
        write!(self, " IS NOT NULL")
    }

    fn visit_in_list(&mut self, expr: &Expr, list: &[Expr], negated: bool, _: ()) -> fmt::Result {
        expr.accept(self, ())?;
        write!(self, " {}IN (", if negated { "NOT " } else { "" })?;
        self.exprs(list)?;
        write!(self, ")")
    }

    fn visit_between(
        &mut self,
        expr: &Expr,
        negated: bool,
        low: &Expr,
        high: &Expr,
        _: (),
    ) -> fmt::Result {
        expr.accept(self, ())?;
        write!(self, " {}BETWEEN ", if negated { "NOT " } else { "" })?;
        low.accept(self, ())?;
        write!(self, " AND ")?;
        high.accept(self, ())
    }

    fn visit_wildcard(&mut self, _: ()) -> fmt::Result {
        write!(self, "*")
    }
}
