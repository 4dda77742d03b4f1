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
use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{ObjectName, Query, StatementNode};
use crate::deparser::Deparser;

/// The keyword that introduced the statement
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DescribeAlias {
    Explain,
    Describe,
    Desc,
}

impl fmt::Display for DescribeAlias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DescribeAlias::Explain => "EXPLAIN",
            DescribeAlias::Describe => "DESCRIBE",
            DescribeAlias::Desc => "DESC",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExplainOptionType {
    Analyze,
    Verbose,
    Costs,
    Buffers,
    Format,
    Plan,
    /// Oracle `PLAN FOR`
    PlanFor,
}

impl fmt::Display for ExplainOptionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ExplainOptionType::Analyze => "ANALYZE",
            ExplainOptionType::Verbose => "VERBOSE",
            ExplainOptionType::Costs => "COSTS",
            ExplainOptionType::Buffers => "BUFFERS",
            ExplainOptionType::Format => "FORMAT",
            ExplainOptionType::Plan => "PLAN",
            ExplainOptionType::PlanFor => "PLAN FOR",
        })
    }
}

/// An option with an optional value, e.g. `ANALYZE`, `COSTS FALSE`,
/// `FORMAT JSON`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExplainOption {
    pub option_type: ExplainOptionType,
    pub value: Option<String>,
}

impl ExplainOption {
    pub fn new(option_type: ExplainOptionType) -> Self {
        ExplainOption {
            option_type,
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ExplainOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).explain_option(self)
    }
}

/// What is being explained or described
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExplainTarget {
    /// `DESCRIBE t`
    Table(ObjectName),
    /// `EXPLAIN [options] query`
    Query(Box<Query>),
}

/// `EXPLAIN|DESCRIBE|DESC [options] target`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExplainStatement {
    pub keyword: DescribeAlias,
    /// At most one option per type, in insertion order
    pub options: Vec<ExplainOption>,
    pub target: ExplainTarget,
}

impl ExplainStatement {
    pub fn new(keyword: DescribeAlias, target: ExplainTarget) -> Self {
        ExplainStatement {
            keyword,
            options: vec![],
            target,
        }
    }

    /// Add an option, replacing the value of an existing option of the same
    /// type in place.
    pub fn add_option(&mut self, option: ExplainOption) {
        match self
            .options
            .iter_mut()
            .find(|o| o.option_type == option.option_type)
        {
            Some(existing) => existing.value = option.value,
            None => self.options.push(option),
        }
    }

    pub fn with_option(mut self, option: ExplainOption) -> Self {
        self.add_option(option);
        self
    }

    pub fn option(&self, option_type: ExplainOptionType) -> Option<&ExplainOption> {
        self.options.iter().find(|o| o.option_type == option_type)
    }
}

impl fmt::Display for ExplainStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}
