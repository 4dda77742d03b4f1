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

//! Partition definitions used by the partition clauses of ALTER TABLE.
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Ident};
use crate::deparser::Deparser;

/// The value bound keyword of a partition definition
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartitionOperation {
    /// `VALUES LESS THAN (..)`
    LessThan,
    /// `VALUES IN (..)`
    In,
}

impl fmt::Display for PartitionOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PartitionOperation::LessThan => "VALUES LESS THAN",
            PartitionOperation::In => "VALUES IN",
        })
    }
}

/// `PARTITION name [VALUES LESS THAN|IN (v, ...)] [ENGINE [=] engine]`
///
/// Values are kept as written: numbers, quoted strings, `MAXVALUE` or a
/// function call such as `UNIX_TIMESTAMP('2021-05-01 00:00:00')`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionDefinition {
    pub name: Ident,
    pub operation: Option<PartitionOperation>,
    pub values: Vec<String>,
    pub storage_engine: Option<PartitionEngine>,
}

impl PartitionDefinition {
    pub fn new(name: impl Into<Ident>) -> Self {
        PartitionDefinition {
            name: name.into(),
            operation: None,
            values: vec![],
            storage_engine: None,
        }
    }

    /// `VALUES LESS THAN (values)`
    pub fn less_than<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.operation = Some(PartitionOperation::LessThan);
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// `VALUES IN (values)`
    pub fn values_in<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.operation = Some(PartitionOperation::In);
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// `ENGINE = engine`
    pub fn with_storage_engine(mut self, engine: impl Into<Ident>) -> Self {
        self.storage_engine = Some(PartitionEngine::new(engine));
        self
    }

    pub fn with_engine_clause(mut self, engine: PartitionEngine) -> Self {
        self.storage_engine = Some(engine);
        self
    }
}

/// `[STORAGE] ENGINE [=] name` of a partition definition
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionEngine {
    pub storage: bool,
    pub equals: bool,
    pub name: Ident,
}

impl PartitionEngine {
    pub fn new(name: impl Into<Ident>) -> Self {
        PartitionEngine {
            storage: false,
            equals: true,
            name: name.into(),
        }
    }

    pub fn with_storage(mut self, storage: bool) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_equals(mut self, equals: bool) -> Self {
        self.equals = equals;
        self
    }
}

impl fmt::Display for PartitionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).partition_definition(self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartitionMethod {
    Range,
    List,
    Hash,
    Key,
}

impl fmt::Display for PartitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PartitionMethod::Range => "RANGE",
            PartitionMethod::List => "LIST",
            PartitionMethod::Hash => "HASH",
            PartitionMethod::Key => "KEY",
        })
    }
}

/// What a table is partitioned on
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartitionKey {
    /// `RANGE (expr)`, `HASH (expr)`
    Expression(Expr),
    /// `RANGE COLUMNS(a, b)` or `KEY (a, b)`
    Columns {
        columns_keyword: bool,
        columns: Vec<Ident>,
    },
}

/// `PARTITION BY [LINEAR] RANGE|LIST|HASH|KEY key [PARTITIONS n] [(definitions)]`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionBy {
    pub linear: bool,
    pub method: PartitionMethod,
    pub key: PartitionKey,
    pub partition_count: Option<u64>,
    pub partitions: Vec<PartitionDefinition>,
}

impl PartitionBy {
    pub fn new(method: PartitionMethod, key: PartitionKey) -> Self {
        PartitionBy {
            linear: false,
            method,
            key,
            partition_count: None,
            partitions: vec![],
        }
    }

    pub fn with_partition(mut self, partition: PartitionDefinition) -> Self {
        self.partitions.push(partition);
        self
    }
}

impl fmt::Display for PartitionBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).partition_by(self)
    }
}
