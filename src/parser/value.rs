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

use core::str::FromStr;

use crate::parser::*;

impl Parser<'_> {
    /// Parse a literal value (numbers, strings, booleans, NULL)
    pub fn parse_value(&mut self) -> Result<Value, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) if w.quote_style.is_none() => match w.keyword {
                Keyword::TRUE => Ok(Value::Boolean(true)),
                Keyword::FALSE => Ok(Value::Boolean(false)),
                Keyword::NULL => Ok(Value::Null),
                _ => self.expected("a concrete value", TokenWithLocation {
                    token: Token::Word(w),
                    location: next_token.location,
                }),
            },
            Token::Number(n, l) => Ok(Value::Number(n, l)),
            Token::SingleQuotedString(s) => Ok(Value::SingleQuotedString(s)),
            Token::DoubleQuotedString(s) => Ok(Value::DoubleQuotedString(s)),
            _ => self.expected("a value", next_token),
        }
    }

    /// Parse an unsigned literal integer/long
    pub fn parse_literal_uint(&mut self) -> Result<u64, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Number(s, _) => Self::parse::<u64>(s, next_token.location),
            _ => self.expected("literal int", next_token),
        }
    }

    /// Parse a quoted string literal
    pub fn parse_literal_string(&mut self) -> Result<Value, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::SingleQuotedString(s) => Ok(Value::SingleQuotedString(s)),
            Token::DoubleQuotedString(s) => Ok(Value::DoubleQuotedString(s)),
            _ => self.expected("literal string", next_token),
        }
    }

    pub(crate) fn parse<T: FromStr>(s: String, loc: Location) -> Result<T, ParserError>
    where
        <T as FromStr>::Err: fmt::Display,
    {
        s.parse::<T>().map_err(|e| {
            ParserError::ParserError(format!(
                "Could not parse '{s}' as {}: {e}{loc}",
                core::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Value;
    use crate::parser::ParserError;
    use crate::test_utils::all_dialects;

    #[test]
    fn test_parse_literal_uint() {
        all_dialects().run_parser_method("101", |parser| {
            assert_eq!(parser.parse_literal_uint(), Ok(101));
        });
        all_dialects().run_parser_method("p1", |parser| {
            assert_eq!(
                parser.parse_literal_uint(),
                Err(ParserError::ParserError(
                    "Expected: literal int, found: p1 at Line: 1, Column: 1".to_string()
                ))
            );
        });
    }

    #[test]
    fn test_parse_value() {
        all_dialects().run_parser_method("'Y' TRUE NULL 8", |parser| {
            assert_eq!(parser.parse_value(), Ok(Value::SingleQuotedString("Y".into())));
            assert_eq!(parser.parse_value(), Ok(Value::Boolean(true)));
            assert_eq!(parser.parse_value(), Ok(Value::Null));
            assert_eq!(parser.parse_value(), Ok(Value::number("8")));
        });
    }
}
