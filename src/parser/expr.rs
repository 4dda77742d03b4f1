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

//! Expression parsing (precedence climbing)

use log::trace;

use crate::parser::*;

const OR_PREC: u8 = 5;
const AND_PREC: u8 = 10;
const UNARY_NOT_PREC: u8 = 15;
const IS_PREC: u8 = 17;
const BETWEEN_PREC: u8 = 20;
const EQ_PREC: u8 = 20;
const PIPE_PREC: u8 = 21;
const CARET_PREC: u8 = 22;
const AMPERSAND_PREC: u8 = 23;
const PLUS_MINUS_PREC: u8 = 30;
const MUL_DIV_MOD_OP_PREC: u8 = 40;
const UNARY_SIGN_PREC: u8 = 50;

impl Parser<'_> {
    /// Parse a new expression
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        self.parse_subexpr(0)
    }

    /// Parse tokens until the precedence changes
    pub fn parse_subexpr(&mut self, precedence: u8) -> Result<Expr, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        let mut expr = self.parse_prefix()?;
        trace!("prefix: {:?}", expr);
        loop {
            let next_precedence = self.get_next_precedence()?;
            trace!("next precedence: {:?}", next_precedence);

            if precedence >= next_precedence {
                break;
            }

            expr = self.parse_infix(expr, next_precedence)?;
        }
        Ok(expr)
    }

    /// Parse an expression prefix
    pub fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::TRUE if w.quote_style.is_none() => Ok(Expr::Value(Value::Boolean(true))),
                Keyword::FALSE if w.quote_style.is_none() => {
                    Ok(Expr::Value(Value::Boolean(false)))
                }
                Keyword::NULL if w.quote_style.is_none() => Ok(Expr::Value(Value::Null)),
                Keyword::NOT if w.quote_style.is_none() => Ok(Expr::UnaryOp {
                    op: UnaryOperator::Not,
                    expr: Box::new(self.parse_subexpr(UNARY_NOT_PREC)?),
                }),
                _ => self.parse_identifier_expr(w.to_ident()),
            },
            Token::Number(n, l) => Ok(Expr::Value(Value::Number(n, l))),
            Token::SingleQuotedString(s) => Ok(Expr::Value(Value::SingleQuotedString(s))),
            Token::DoubleQuotedString(s) => Ok(Expr::Value(Value::DoubleQuotedString(s))),
            tok @ Token::Minus | tok @ Token::Plus => {
                let op = if tok == Token::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Minus
                };
                Ok(Expr::UnaryOp {
                    op,
                    expr: Box::new(self.parse_subexpr(UNARY_SIGN_PREC)?),
                })
            }
            Token::LParen => {
                let expr = Expr::Nested(Box::new(self.parse_expr()?));
                self.expect_token(&Token::RParen)?;
                Ok(expr)
            }
            Token::Mul => Ok(Expr::Wildcard),
            _ => self.expected("an expression", next_token),
        }
    }

    /// An identifier, `a.b.c` or a function call `f(args)`, after its first
    /// part has been consumed
    fn parse_identifier_expr(&mut self, first: Ident) -> Result<Expr, ParserError> {
        let mut id_parts = vec![first];
        while self.consume_token(&Token::Period) {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => id_parts.push(w.to_ident()),
                _ => return self.expected("an identifier after '.'", next_token),
            }
        }

        if self.consume_token(&Token::LParen) {
            let args = self.parse_comma_separated0(Parser::parse_expr, Token::RParen)?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expr::Function(Function::new(ObjectName(id_parts), args)));
        }

        if id_parts.len() == 1 {
            Ok(Expr::Identifier(id_parts.remove(0)))
        } else {
            Ok(Expr::CompoundIdentifier(id_parts))
        }
    }

    /// Parse an operator following an expression
    pub fn parse_infix(&mut self, expr: Expr, precedence: u8) -> Result<Expr, ParserError> {
        let tok = self.next_token();

        let regular_binary_operator = match &tok.token {
            Token::Spaceship => Some(BinaryOperator::Spaceship),
            Token::DoubleEq | Token::Eq => Some(BinaryOperator::Eq),
            Token::Neq => Some(BinaryOperator::NotEq),
            Token::Gt => Some(BinaryOperator::Gt),
            Token::GtEq => Some(BinaryOperator::GtEq),
            Token::Lt => Some(BinaryOperator::Lt),
            Token::LtEq => Some(BinaryOperator::LtEq),
            Token::Plus => Some(BinaryOperator::Plus),
            Token::Minus => Some(BinaryOperator::Minus),
            Token::Mul => Some(BinaryOperator::Multiply),
            Token::Mod => Some(BinaryOperator::Modulo),
            Token::StringConcat => Some(BinaryOperator::StringConcat),
            Token::Pipe => Some(BinaryOperator::BitwiseOr),
            Token::Caret => Some(BinaryOperator::BitwiseXor),
            Token::Ampersand => Some(BinaryOperator::BitwiseAnd),
            Token::Div => Some(BinaryOperator::Divide),
            Token::Word(w) => match w.keyword {
                Keyword::AND => Some(BinaryOperator::And),
                Keyword::OR => Some(BinaryOperator::Or),
                _ => None,
            },
            _ => None,
        };

        if let Some(op) = regular_binary_operator {
            return Ok(Expr::BinaryOp {
                left: Box::new(expr),
                op,
                right: Box::new(self.parse_subexpr(precedence)?),
            });
        }

        let keyword = match &tok.token {
            Token::Word(w) => w.keyword,
            _ => Keyword::NoKeyword,
        };
        match keyword {
            Keyword::IS => {
                if self.parse_keyword(Keyword::NULL) {
                    Ok(Expr::IsNull(Box::new(expr)))
                } else if self.parse_keywords(&[Keyword::NOT, Keyword::NULL]) {
                    Ok(Expr::IsNotNull(Box::new(expr)))
                } else {
                    self.expected("[NOT] NULL after IS", self.peek_token())
                }
            }
            Keyword::NOT | Keyword::IN | Keyword::BETWEEN => {
                self.prev_token();
                let negated = self.parse_keyword(Keyword::NOT);
                if self.parse_keyword(Keyword::IN) {
                    self.parse_in(expr, negated)
                } else if self.parse_keyword(Keyword::BETWEEN) {
                    self.parse_between(expr, negated)
                } else {
                    self.expected("IN or BETWEEN after NOT", self.peek_token())
                }
            }
            // Can only happen if `get_next_precedence` got out of sync with this function
            _ => parser_err!(format!("No infix parser for token {:?}", tok.token), tok.location),
        }
    }

    /// Parses the parens following the `[ NOT ] IN` operator
    pub fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let list = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RParen)?;
        Ok(Expr::InList {
            expr: Box::new(expr),
            list,
            negated,
        })
    }

    /// Parses `BETWEEN <low> AND <high>`, assuming the `BETWEEN` keyword was already consumed
    pub fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        // Stop parsing subexpressions for <low> and <high> on tokens with
        // precedence lower than that of `BETWEEN`, such as `AND`, `IS`, etc.
        let low = self.parse_subexpr(BETWEEN_PREC)?;
        self.expect_keyword(Keyword::AND)?;
        let high = self.parse_subexpr(BETWEEN_PREC)?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        })
    }

    /// Get the precedence of the next token
    pub fn get_next_precedence(&self) -> Result<u8, ParserError> {
        let token = self.peek_token();
        trace!("get_next_precedence() {:?}", token);
        let [_, next_token] = self.peek_tokens();
        match token.token {
            Token::Word(w) if w.keyword == Keyword::OR => Ok(OR_PREC),
            Token::Word(w) if w.keyword == Keyword::AND => Ok(AND_PREC),
            Token::Word(w) if w.keyword == Keyword::NOT => match next_token {
                // The precedence of NOT varies depending on the keyword that
                // follows it. If it is followed by IN or BETWEEN, it takes
                // on the precedence of those tokens. Otherwise it is not an
                // infix operator, and therefore has zero precedence.
                Token::Word(w) if w.keyword == Keyword::IN => Ok(BETWEEN_PREC),
                Token::Word(w) if w.keyword == Keyword::BETWEEN => Ok(BETWEEN_PREC),
                _ => Ok(0),
            },
            Token::Word(w) if w.keyword == Keyword::IS => Ok(IS_PREC),
            Token::Word(w) if w.keyword == Keyword::IN => Ok(BETWEEN_PREC),
            Token::Word(w) if w.keyword == Keyword::BETWEEN => Ok(BETWEEN_PREC),
            Token::Eq
            | Token::DoubleEq
            | Token::Lt
            | Token::LtEq
            | Token::Neq
            | Token::Gt
            | Token::GtEq
            | Token::Spaceship => Ok(EQ_PREC),
            Token::Pipe => Ok(PIPE_PREC),
            Token::Caret => Ok(CARET_PREC),
            Token::Ampersand => Ok(AMPERSAND_PREC),
            Token::Plus | Token::Minus => Ok(PLUS_MINUS_PREC),
            Token::Mul | Token::Div | Token::Mod | Token::StringConcat => Ok(MUL_DIV_MOD_OP_PREC),
            _ => Ok(0),
        }
    }
}
