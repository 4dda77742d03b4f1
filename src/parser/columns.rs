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

//! Column definitions, data types and text captured as written

use crate::keywords;
use crate::parser::*;

/// Accumulates tokens back into SQL text, collapsing whitespace runs
/// (comments included) into a single space.
#[derive(Default)]
struct CapturedText {
    text: String,
    pending_space: bool,
}

impl CapturedText {
    fn push(&mut self, token: &Token) {
        if let Token::Whitespace(_) = token {
            self.pending_space = !self.text.is_empty();
            return;
        }
        if self.pending_space && !self.text.ends_with('(') && *token != Token::RParen {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push_str(&token.to_string());
    }
}

impl Parser<'_> {
    /// Parse a parenthesized group, e.g. `(allow_commit_timestamp=true)`,
    /// and return it as written, parentheses included.
    pub(crate) fn parse_parenthesized_text(&mut self) -> Result<String, ParserError> {
        self.expect_token(&Token::LParen)?;
        let mut captured = CapturedText::default();
        captured.push(&Token::LParen);
        let mut depth = 1usize;
        while depth > 0 {
            let token = self
                .next_token_no_skip()
                .cloned()
                .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF));
            match token.token {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                Token::EOF => return self.expected(")", token),
                _ => {}
            }
            captured.push(&token.token);
        }
        Ok(captured.text)
    }

    /// Capture the tokens up to the next top-level `,`, `;` or unbalanced `)`.
    pub(crate) fn parse_text_until_delimiter(&mut self) -> Result<String, ParserError> {
        let mut captured = CapturedText::default();
        let mut depth = 0usize;
        loop {
            let token = self.peek_token_no_skip();
            match token.token {
                Token::EOF | Token::SemiColon => break,
                Token::Comma | Token::RParen if depth == 0 => break,
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                _ => {}
            }
            captured.push(&token.token);
            self.index += 1;
        }
        if captured.text.is_empty() {
            return self.expected("a value", self.peek_token());
        }
        Ok(captured.text)
    }

    /// Parse a data type such as `varchar(255)`, `timestamp with time zone`
    /// or `ARRAY<STRING(MAX)>`, keeping its spelling.
    pub fn parse_col_data_type(&mut self) -> Result<ColDataType, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        let next_token = self.next_token();
        let mut name = match next_token.token {
            Token::Word(w) => w.to_string(),
            _ => return self.expected("a data type name", next_token),
        };

        let lower = name.to_lowercase();
        let continuation: &[&[Keyword]] = match lower.as_str() {
            "timestamp" | "time" | "date" => &[
                &[Keyword::WITH, Keyword::TIME, Keyword::ZONE],
                &[Keyword::WITHOUT, Keyword::TIME, Keyword::ZONE],
            ],
            "bit" | "char" | "character" => &[&[Keyword::VARYING]],
            "double" => &[&[Keyword::PRECISION]],
            _ => &[],
        };
        for words in continuation {
            if let Some(spelled) = self.parse_keywords_as_written(words) {
                name.push(' ');
                name.push_str(&spelled);
                break;
            }
        }

        let mut data_type = ColDataType::new(name);
        if self.consume_token(&Token::Lt) {
            data_type = data_type.with_element(self.parse_col_data_type()?);
            self.expect_token(&Token::Gt)?;
        }
        if self.consume_token(&Token::LParen) {
            data_type.arguments = self.parse_comma_separated_with_trailing_commas(
                Parser::parse_text_until_delimiter,
                false,
            )?;
            self.expect_token(&Token::RParen)?;
        }
        Ok(data_type)
    }

    /// Match `keywords` in sequence and return them as written, e.g.
    /// `with time zone`. Nothing is consumed when they do not match.
    fn parse_keywords_as_written(&mut self, keywords: &[Keyword]) -> Option<String> {
        let index = self.index;
        let mut words = Vec::with_capacity(keywords.len());
        for &keyword in keywords {
            match self.parse_keyword_token(keyword) {
                Some(token) => words.push(token.to_string()),
                None => {
                    self.index = index;
                    return None;
                }
            }
        }
        Some(words.join(" "))
    }

    /// Parse `name [type] [spec ...]`, stopping at a top-level `,` or `)`.
    pub fn parse_column_data_type(&mut self) -> Result<ColumnDataType, ParserError> {
        let column_name = self.parse_identifier(false)?;
        let mut column = ColumnDataType::new(column_name);
        if !self.peek_column_spec_start() {
            column.data_type = Some(self.parse_col_data_type()?);
        }
        column.column_specs = self.parse_column_specs()?;
        Ok(column)
    }

    /// True when the next token cannot start a data type: a word that
    /// begins a column spec (`NOT`, `DEFAULT`, `COMMENT` ...) or punctuation.
    fn peek_column_spec_start(&self) -> bool {
        match self.peek_token().token {
            Token::Word(w) => {
                w.quote_style.is_none() && keywords::RESERVED_FOR_COLUMN_SPEC.contains(&w.keyword)
            }
            _ => true,
        }
    }

    /// Collect the free-form tokens of a column definition. A parenthesized
    /// group becomes a single spec.
    fn parse_column_specs(&mut self) -> Result<Vec<String>, ParserError> {
        let mut specs = vec![];
        loop {
            match self.peek_token().token {
                Token::Comma | Token::SemiColon | Token::RParen | Token::EOF => break,
                Token::LParen => specs.push(self.parse_parenthesized_text()?),
                _ => specs.push(self.next_token().to_string()),
            }
        }
        Ok(specs)
    }
}
