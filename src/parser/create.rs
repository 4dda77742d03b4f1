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

//! SQL Parser for CREATE SYNONYM

use crate::parser::*;

impl Parser<'_> {
    /// Parse a `CREATE` statement, assuming the `CREATE` keyword was
    /// already consumed. Only `CREATE [OR REPLACE] [PUBLIC] SYNONYM` is
    /// supported, and only by dialects that have synonyms.
    pub fn parse_create(&mut self) -> Result<Statement, ParserError> {
        if !self.dialect.supports_create_synonym() {
            return self.expected("an SQL statement", self.peek_token());
        }
        let or_replace = self.parse_keywords(&[Keyword::OR, Keyword::REPLACE]);
        let public = self.parse_keyword(Keyword::PUBLIC);
        self.expect_keyword(Keyword::SYNONYM)?;
        let synonym = self.parse_object_name()?;
        self.expect_keyword(Keyword::FOR)?;
        let for_object = self.parse_object_name()?;
        debug!("parsed synonym {synonym} for {for_object}");
        Ok(Statement::CreateSynonym(
            CreateSynonym::new(synonym, for_object)
                .with_or_replace(or_replace)
                .with_public(public),
        ))
    }
}
