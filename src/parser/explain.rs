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

//! SQL Parser for EXPLAIN and DESCRIBE

use crate::parser::*;

impl Parser<'_> {
    /// Parse the rest of an `EXPLAIN`, `DESCRIBE` or `DESC` statement,
    /// whose keyword was already consumed.
    pub fn parse_explain(&mut self, keyword: DescribeAlias) -> Result<Statement, ParserError> {
        let mut options = vec![];
        while let Some(option) = self.parse_explain_option()? {
            options.push(option);
        }

        let target = if self.peek_keyword(Keyword::SELECT) || self.peek_keyword(Keyword::FROM) {
            ExplainTarget::Query(Box::new(self.parse_query()?))
        } else {
            ExplainTarget::Table(self.parse_object_name()?)
        };

        let mut explain = ExplainStatement::new(keyword, target);
        for option in options {
            explain.add_option(option);
        }
        Ok(Statement::Explain(explain))
    }

    fn parse_explain_option(&mut self) -> Result<Option<ExplainOption>, ParserError> {
        let Some(keyword) = self.parse_one_of_keywords(&[
            Keyword::ANALYZE,
            Keyword::VERBOSE,
            Keyword::COSTS,
            Keyword::BUFFERS,
            Keyword::FORMAT,
            Keyword::PLAN,
        ]) else {
            return Ok(None);
        };
        let option = match keyword {
            Keyword::ANALYZE => self.parse_explain_flag(ExplainOptionType::Analyze),
            Keyword::VERBOSE => self.parse_explain_flag(ExplainOptionType::Verbose),
            Keyword::COSTS => self.parse_explain_flag(ExplainOptionType::Costs),
            Keyword::BUFFERS => self.parse_explain_flag(ExplainOptionType::Buffers),
            Keyword::FORMAT => {
                let next_token = self.next_token();
                match next_token.token {
                    Token::Word(w) => ExplainOption::new(ExplainOptionType::Format).with_value(w.value),
                    _ => return self.expected("an output format", next_token),
                }
            }
            _ => {
                if self.parse_keyword(Keyword::FOR) {
                    ExplainOption::new(ExplainOptionType::PlanFor)
                } else {
                    ExplainOption::new(ExplainOptionType::Plan)
                }
            }
        };
        Ok(Some(option))
    }

    /// An option with an optional boolean value: `ANALYZE`, `COSTS FALSE`, `BUFFERS ON`
    fn parse_explain_flag(&mut self, option_type: ExplainOptionType) -> ExplainOption {
        let option = ExplainOption::new(option_type);
        match self.parse_one_of_keywords(&[Keyword::TRUE, Keyword::FALSE, Keyword::ON]) {
            Some(Keyword::TRUE) => option.with_value("TRUE"),
            Some(Keyword::FALSE) => option.with_value("FALSE"),
            Some(_) => option.with_value("ON"),
            None if self.parse_word("OFF") => option.with_value("OFF"),
            None => option,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect::OracleDialect;
    use crate::test_utils::{all_dialects, TestedDialects};

    #[test]
    fn parse_explain_options() {
        let sql = "EXPLAIN ANALYZE VERBOSE COSTS FALSE BUFFERS ON FORMAT JSON SELECT * FROM t";
        match all_dialects().verified_stmt(sql) {
            Statement::Explain(explain) => {
                assert_eq!(explain.keyword, DescribeAlias::Explain);
                assert_eq!(explain.options.len(), 5);
                assert_eq!(
                    explain.option(ExplainOptionType::Costs),
                    Some(&ExplainOption::new(ExplainOptionType::Costs).with_value("FALSE"))
                );
                assert_eq!(
                    explain.option(ExplainOptionType::Format),
                    Some(&ExplainOption::new(ExplainOptionType::Format).with_value("JSON"))
                );
                assert!(matches!(explain.target, ExplainTarget::Query(_)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn parse_repeated_option_keeps_first_position() {
        all_dialects().one_statement_parses_to(
            "EXPLAIN ANALYZE VERBOSE ANALYZE FALSE SELECT a FROM t",
            "EXPLAIN ANALYZE FALSE VERBOSE SELECT a FROM t",
        );
    }

    #[test]
    fn parse_describe_table() {
        for keyword in ["DESCRIBE", "DESC"] {
            match all_dialects().verified_stmt(&format!("{keyword} employees")) {
                Statement::Explain(explain) => {
                    assert_eq!(explain.target, ExplainTarget::Table("employees".into()))
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn parse_explain_plan_for() {
        TestedDialects::new(vec![Box::new(OracleDialect {})])
            .verified_stmt("EXPLAIN PLAN FOR SELECT * FROM employees WHERE id = 1");
    }
}
