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

use super::*;

impl Parser<'_> {
    /// Consume the parser and return its underlying token buffer
    pub fn into_tokens(self) -> Vec<TokenWithLocation> {
        self.tokens
    }

    /// Return the first non-whitespace token that has not yet been processed
    /// (or None if reached end-of-file)
    pub fn peek_token(&self) -> TokenWithLocation {
        self.peek_nth_token(0)
    }

    /// Returns the `N` next non-whitespace tokens that have not yet been
    /// processed.
    ///
    /// Example:
    /// ```rust
    /// # use sqlalter::dialect::GenericDialect;
    /// # use sqlalter::parser::Parser;
    /// # use sqlalter::keywords::Keyword;
    /// # use sqlalter::tokenizer::{Token, Word};
    /// let dialect = GenericDialect {};
    /// let mut parser = Parser::new(&dialect).try_with_sql("DROP PRIMARY KEY").unwrap();
    ///
    /// // Note that Rust infers the number of tokens to peek based on the
    /// // length of the slice pattern!
    /// assert!(matches!(
    ///     parser.peek_tokens(),
    ///     [
    ///         Token::Word(Word { keyword: Keyword::DROP, .. }),
    ///         Token::Word(Word { keyword: Keyword::PRIMARY, .. }),
    ///     ]
    /// ));
    /// ```
    pub fn peek_tokens<const N: usize>(&self) -> [Token; N] {
        let mut index = self.index;
        core::array::from_fn(|_| loop {
            let token = self.tokens.get(index);
            index += 1;
            if let Some(TokenWithLocation {
                token: Token::Whitespace(_),
                location: _,
            }) = token
            {
                continue;
            }
            break token.map(|t| t.token.clone()).unwrap_or(Token::EOF);
        })
    }

    /// Return nth non-whitespace token that has not yet been processed
    pub fn peek_nth_token(&self, mut n: usize) -> TokenWithLocation {
        let mut index = self.index;
        loop {
            index += 1;
            match self.tokens.get(index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    location: _,
                }) => continue,
                non_whitespace => {
                    if n == 0 {
                        return non_whitespace
                            .cloned()
                            .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF));
                    }
                    n -= 1;
                }
            }
        }
    }

    /// Return the first token, possibly whitespace, that has not yet been processed
    /// (or None if reached end-of-file).
    pub fn peek_token_no_skip(&self) -> TokenWithLocation {
        self.tokens
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF))
    }

    /// Look for all of the expected keywords in sequence, without consuming them
    pub fn peek_keywords(&mut self, expected: &[Keyword]) -> bool {
        let index = self.index;
        let matched = self.parse_keywords(expected);
        self.index = index;
        matched
    }

    /// Return the first non-whitespace token that has not yet been processed
    /// (or None if reached end-of-file) and mark it as processed. OK to call
    /// repeatedly after reaching EOF.
    pub fn next_token(&mut self) -> TokenWithLocation {
        loop {
            self.index += 1;
            match self.tokens.get(self.index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    location: _,
                }) => continue,
                token => {
                    return token
                        .cloned()
                        .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF))
                }
            }
        }
    }

    /// Return the first unprocessed token, possibly whitespace.
    pub fn next_token_no_skip(&mut self) -> Option<&TokenWithLocation> {
        self.index += 1;
        self.tokens.get(self.index - 1)
    }

    /// Push back the last one non-whitespace token. OK to call after
    /// `next_token()` indicates an EOF; a no-op before the first token.
    pub fn prev_token(&mut self) {
        while self.index > 0 {
            self.index -= 1;
            if let Some(TokenWithLocation {
                token: Token::Whitespace(_),
                location: _,
            }) = self.tokens.get(self.index)
            {
                continue;
            }
            return;
        }
    }

    /// Report `found` was encountered instead of `expected`
    pub fn expected<T>(&self, expected: &str, found: TokenWithLocation) -> Result<T, ParserError> {
        parser_err!(
            format!("Expected: {expected}, found: {found}"),
            found.location
        )
    }

    /// If the current token is the `expected` keyword, consume it and returns
    /// true. Otherwise, no tokens are consumed and returns false.
    #[must_use]
    pub fn parse_keyword(&mut self, expected: Keyword) -> bool {
        self.parse_keyword_token(expected).is_some()
    }

    #[must_use]
    pub fn parse_keyword_token(&mut self, expected: Keyword) -> Option<TokenWithLocation> {
        match self.peek_token().token {
            Token::Word(w) if expected == w.keyword => Some(self.next_token()),
            _ => None,
        }
    }

    #[must_use]
    pub fn peek_keyword(&self, expected: Keyword) -> bool {
        matches!(self.peek_token().token, Token::Word(w) if expected == w.keyword)
    }

    /// If the current and subsequent tokens exactly match the `keywords`
    /// sequence, consume them and returns true. Otherwise, no tokens are
    /// consumed and returns false
    #[must_use]
    pub fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        let index = self.index;
        for &keyword in keywords {
            if !self.parse_keyword(keyword) {
                // reset index and return immediately
                self.index = index;
                return false;
            }
        }
        true
    }

    /// If the current token is one of the given `keywords`, consume the token
    /// and return the keyword that matches. Otherwise, no tokens are consumed
    /// and returns [`None`].
    #[must_use]
    pub fn parse_one_of_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        match self.peek_token().token {
            Token::Word(w) => keywords
                .iter()
                .find(|keyword| **keyword == w.keyword)
                .map(|keyword| {
                    self.next_token();
                    *keyword
                }),
            _ => None,
        }
    }

    /// If the current token is one of the expected keywords, consume the token
    /// and return the keyword that matches. Otherwise, return an error.
    pub fn expect_one_of_keywords(&mut self, keywords: &[Keyword]) -> Result<Keyword, ParserError> {
        if let Some(keyword) = self.parse_one_of_keywords(keywords) {
            Ok(keyword)
        } else {
            let keywords: Vec<String> = keywords.iter().map(|x| format!("{x:?}")).collect();
            self.expected(
                &format!("one of {}", keywords.join(" or ")),
                self.peek_token(),
            )
        }
    }

    /// If the current token is the `expected` keyword, consume the token.
    /// Otherwise, return an error.
    pub fn expect_keyword(&mut self, expected: Keyword) -> Result<TokenWithLocation, ParserError> {
        if let Some(token) = self.parse_keyword_token(expected) {
            Ok(token)
        } else {
            self.expected(format!("{:?}", &expected).as_str(), self.peek_token())
        }
    }

    /// If the current and subsequent tokens exactly match the `keywords`
    /// sequence, consume them and returns Ok. Otherwise, return an Error.
    pub fn expect_keywords(&mut self, expected: &[Keyword]) -> Result<(), ParserError> {
        for &kw in expected {
            self.expect_keyword(kw)?;
        }
        Ok(())
    }

    /// Consume an unquoted word spelled `expected` (ignoring case) that is not
    /// a reserved keyword, e.g. `OFF` or `INPLACE`.
    #[must_use]
    pub fn parse_word(&mut self, expected: &str) -> bool {
        match self.peek_token().token {
            Token::Word(w) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(expected) => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    /// Consume the next token if it matches the expected token, otherwise return false
    #[must_use]
    pub fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == *expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// If the current and subsequent tokens exactly match the `tokens`
    /// sequence, consume them and returns true. Otherwise, no tokens are
    /// consumed and returns false
    #[must_use]
    pub fn consume_tokens(&mut self, tokens: &[Token]) -> bool {
        let index = self.index;
        for token in tokens {
            if !self.consume_token(token) {
                self.index = index;
                return false;
            }
        }
        true
    }

    /// Bail out if the current token is not an expected keyword, or consume it if it is
    pub fn expect_token(&mut self, expected: &Token) -> Result<TokenWithLocation, ParserError> {
        if self.peek_token() == *expected {
            Ok(self.next_token())
        } else {
            self.expected(&expected.to_string(), self.peek_token())
        }
    }

    /// Consume an optional `=`, returning whether it was present.
    pub(crate) fn parse_optional_eq(&mut self) -> bool {
        self.consume_token(&Token::Eq)
    }

    /// Whether the next token ends the current clause: `,`, `;`, `)` or EOF.
    pub(crate) fn peek_clause_end(&self) -> bool {
        matches!(
            self.peek_token().token,
            Token::Comma | Token::SemiColon | Token::RParen | Token::EOF
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::all_dialects;
    use crate::tokenizer::Token;

    #[test]
    fn test_peek_and_consume() {
        all_dialects().run_parser_method("ENGINE = InnoDB", |parser| {
            assert!(parser.peek_keyword(crate::keywords::Keyword::ENGINE));
            assert!(parser.parse_keyword(crate::keywords::Keyword::ENGINE));
            assert!(parser.parse_optional_eq());
            assert!(!parser.parse_optional_eq());
            assert!(parser.parse_word("innodb"));
            assert_eq!(parser.peek_token(), Token::EOF);
            assert!(parser.peek_clause_end());
        });
    }

    #[test]
    fn test_parse_keywords_resets_on_mismatch() {
        use crate::keywords::Keyword;
        all_dialects().run_parser_method("DROP PRIMARY INDEX", |parser| {
            assert!(!parser.parse_keywords(&[Keyword::DROP, Keyword::PRIMARY, Keyword::KEY]));
            assert!(parser.peek_keywords(&[Keyword::DROP, Keyword::PRIMARY]));
            assert_eq!(
                parser.expect_one_of_keywords(&[Keyword::ADD, Keyword::ALTER]),
                Err(crate::parser::ParserError::ParserError(
                    "Expected: one of ADD or ALTER, found: DROP at Line: 1, Column: 1"
                        .to_string()
                ))
            );
        });
    }
}
