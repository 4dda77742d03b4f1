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

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::display_comma_separated;

/// A column data type as written, e.g. `varchar(255)`, `decimal(10, 2)`,
/// `timestamp with time zone` or `ARRAY<STRING(MAX)>`.
///
/// Types are not resolved: the name keeps the spelling (and case) of the
/// input and the arguments are the raw argument tokens.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColDataType {
    /// Type name, possibly several words (`double precision`)
    pub name: String,
    /// Parenthesized arguments, e.g. `["10", "2"]` for `decimal(10, 2)`
    pub arguments: Vec<String>,
    /// Element type of `ARRAY<...>`
    pub element: Option<Box<ColDataType>>,
}

impl ColDataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            element: None,
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_element(mut self, element: ColDataType) -> Self {
        self.element = Some(Box::new(element));
        self
    }
}

impl fmt::Display for ColDataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(element) = &self.element {
            write!(f, "<{element}>")?;
        }
        if !self.arguments.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.arguments))?;
        }
        Ok(())
    }
}
