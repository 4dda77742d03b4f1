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

//! SQL Parser for the query subset: `SELECT` and FROM-first queries,
//! followed by pipe operators

use crate::keywords;
use crate::parser::*;

impl Parser<'_> {
    /// Parse a query, starting at `SELECT` or `FROM`
    pub fn parse_query(&mut self) -> Result<Query, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        let body = if self.parse_keyword(Keyword::SELECT) {
            QueryBody::Select(Box::new(self.parse_select()?))
        } else {
            self.expect_keyword(Keyword::FROM)?;
            QueryBody::From(self.parse_table_factor()?)
        };

        let mut query = Query::new(body);
        if self.dialect.supports_pipe_operator() {
            while self.consume_token(&Token::VerticalBarRightAngleBracket) {
                query.pipe_operators.push(self.parse_pipe_operator()?);
            }
        }
        Ok(query)
    }

    /// Parse the rest of a `SELECT`, after the keyword
    fn parse_select(&mut self) -> Result<Select, ParserError> {
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        let projection = self.parse_comma_separated(Parser::parse_select_item)?;
        let from = if self.parse_keyword(Keyword::FROM) {
            Some(self.parse_table_factor()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Select {
            distinct,
            projection,
            from,
            selection,
        })
    }

    /// `name [[AS] alias]`
    pub fn parse_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        let name = self.parse_object_name_in_clause(true)?;
        let alias = self.parse_optional_alias(keywords::RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor { name, alias })
    }

    /// `*` or `expr [[AS] alias]`
    pub fn parse_select_item(&mut self) -> Result<SelectItem, ParserError> {
        if self.consume_token(&Token::Mul) {
            return Ok(SelectItem::Wildcard);
        }
        let expr = self.parse_expr()?;
        match self.parse_optional_alias(keywords::RESERVED_FOR_COLUMN_ALIAS)? {
            Some(alias) => Ok(SelectItem::ExprWithAlias { expr, alias }),
            None => Ok(SelectItem::UnnamedExpr(expr)),
        }
    }

    /// `expr [ASC|DESC]`
    pub fn parse_order_by_expr(&mut self) -> Result<OrderByExpr, ParserError> {
        let expr = self.parse_expr()?;
        let asc = match self.parse_one_of_keywords(&[Keyword::ASC, Keyword::DESC]) {
            Some(Keyword::ASC) => Some(true),
            Some(_) => Some(false),
            None => None,
        };
        Ok(OrderByExpr { expr, asc })
    }

    /// Parse one pipe operator, after the `|>` token
    pub fn parse_pipe_operator(&mut self) -> Result<PipeOperator, ParserError> {
        let next_token = self.next_token();
        let keyword = match &next_token.token {
            Token::Word(w) if w.quote_style.is_none() => w.keyword,
            _ => Keyword::NoKeyword,
        };
        let operator = match keyword {
            Keyword::WHERE => PipeOperator::Where {
                expr: self.parse_expr()?,
            },
            Keyword::SELECT => PipeOperator::Select {
                exprs: self.parse_comma_separated(Parser::parse_select_item)?,
            },
            Keyword::EXTEND => PipeOperator::Extend {
                exprs: self.parse_comma_separated(Parser::parse_select_item)?,
            },
            Keyword::DROP => PipeOperator::Drop {
                columns: self.parse_comma_separated(|p| p.parse_identifier(false))?,
            },
            Keyword::AS => PipeOperator::As {
                alias: self.parse_identifier(false)?,
            },
            Keyword::LIMIT => {
                let expr = self.parse_expr()?;
                let offset = if self.parse_keyword(Keyword::OFFSET) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                PipeOperator::Limit { expr, offset }
            }
            Keyword::ORDER => {
                self.expect_keyword(Keyword::BY)?;
                PipeOperator::OrderBy {
                    exprs: self.parse_comma_separated(Parser::parse_order_by_expr)?,
                }
            }
            Keyword::RENAME => PipeOperator::Rename {
                mappings: self.parse_comma_separated(|p| {
                    let ident = p.parse_identifier(false)?;
                    let _ = p.parse_keyword(Keyword::AS);
                    let alias = p.parse_identifier(false)?;
                    Ok(IdentWithAlias { ident, alias })
                })?,
            },
            Keyword::AGGREGATE => {
                let full_table_exprs = if self.peek_keyword(Keyword::GROUP)
                    || self.peek_pipe_operator_end()
                {
                    vec![]
                } else {
                    self.parse_comma_separated(Parser::parse_select_item)?
                };
                let group_by_expr = if self.parse_keywords(&[Keyword::GROUP, Keyword::BY]) {
                    self.parse_comma_separated(Parser::parse_select_item)?
                } else {
                    vec![]
                };
                PipeOperator::Aggregate {
                    full_table_exprs,
                    group_by_expr,
                }
            }
            _ => {
                return self.expected(
                    "one of WHERE, SELECT, EXTEND, DROP, AS, LIMIT, ORDER BY, RENAME or AGGREGATE",
                    next_token,
                )
            }
        };
        Ok(operator)
    }

    fn peek_pipe_operator_end(&self) -> bool {
        matches!(
            self.peek_token().token,
            Token::VerticalBarRightAngleBracket | Token::SemiColon | Token::EOF
        )
    }
}
