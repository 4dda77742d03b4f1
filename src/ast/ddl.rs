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

//! AST types specific to ALTER TABLE and CREATE SYNONYM statements
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{
    ColDataType, Expr, Ident, IndexKeyword, ObjectName, PartitionBy, PartitionDefinition,
    StatementNode, TableConstraint, Value,
};
use crate::deparser::Deparser;

/// `ALTER TABLE [ IF EXISTS ] [ ONLY ] name alter_expression [, ...]`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alter {
    /// `IF EXISTS` after `ALTER TABLE`
    pub if_exists: bool,
    /// PostgreSQL `ONLY`: do not recurse into descendant tables
    pub only: bool,
    pub table: ObjectName,
    /// One entry per comma separated clause, in the order written
    pub expressions: Vec<AlterExpression>,
}

impl Alter {
    pub fn new(table: impl Into<ObjectName>) -> Self {
        Alter {
            if_exists: false,
            only: false,
            table: table.into(),
            expressions: vec![],
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub fn with_only(mut self, only: bool) -> Self {
        self.only = only;
        self
    }

    pub fn with_expression(mut self, expression: AlterExpression) -> Self {
        self.expressions.push(expression);
        self
    }

    /// The operation tag of every clause, in order.
    pub fn operations(&self) -> Vec<AlterOperation> {
        self.expressions.iter().map(AlterExpression::operation).collect()
    }
}

impl fmt::Display for Alter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}

/// Whether a column clause was written with `COLUMN`, `COLUMNS` or neither.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnKeyword {
    #[default]
    None,
    Column,
    Columns,
}

impl ColumnKeyword {
    /// The keyword followed by a space, or nothing.
    pub fn prefix(&self) -> &'static str {
        match self {
            ColumnKeyword::None => "",
            ColumnKeyword::Column => "COLUMN ",
            ColumnKeyword::Columns => "COLUMNS ",
        }
    }
}

/// `CASCADE` or `RESTRICT` after a `DROP` clause
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl fmt::Display for DropBehavior {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DropBehavior::Cascade => "CASCADE",
            DropBehavior::Restrict => "RESTRICT",
        })
    }
}

/// Object kind of `RENAME INDEX|KEY|CONSTRAINT old TO new`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenameKind {
    Index,
    Key,
    Constraint,
}

impl fmt::Display for RenameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RenameKind::Index => "INDEX",
            RenameKind::Key => "KEY",
            RenameKind::Constraint => "CONSTRAINT",
        })
    }
}

/// Keyword of `ALTER CONSTRAINT|CHECK name [NOT] ENFORCED`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterConstraintKeyword {
    Constraint,
    Check,
}

impl fmt::Display for AlterConstraintKeyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AlterConstraintKeyword::Constraint => "CONSTRAINT",
            AlterConstraintKeyword::Check => "CHECK",
        })
    }
}

/// A column name with an optional data type and the column definition
/// tokens that follow it, as used by `ADD`, `MODIFY` and `CHANGE`.
///
/// The specs are kept as written (`NOT NULL`, `DEFAULT '0'`, `AFTER id`, ...):
/// they are not interpreted.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDataType {
    /// `COLUMN` written before an item of a parenthesized `MODIFY` list
    pub column_keyword: ColumnKeyword,
    pub column_name: Ident,
    pub data_type: Option<ColDataType>,
    pub column_specs: Vec<String>,
}

impl ColumnDataType {
    pub fn new(column_name: impl Into<Ident>) -> Self {
        ColumnDataType {
            column_keyword: ColumnKeyword::None,
            column_name: column_name.into(),
            data_type: None,
            column_specs: vec![],
        }
    }

    pub fn with_column_keyword(mut self, column_keyword: ColumnKeyword) -> Self {
        self.column_keyword = column_keyword;
        self
    }

    pub fn with_data_type(mut self, data_type: ColDataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Append a column spec token, e.g. `NOT` or `'comment'`.
    pub fn with_spec(mut self, spec: impl Into<String>) -> Self {
        self.column_specs.push(spec.into());
        self
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).column_data_type(self)
    }
}

/// The action of an `ALTER [COLUMN] name ...` clause
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterColumnAction {
    /// `TYPE t` or, with `set_data_keywords`, `SET DATA TYPE t`
    SetDataType {
        data_type: ColDataType,
        set_data_keywords: bool,
    },
    /// `SET DEFAULT expr`
    SetDefault(Expr),
    /// `DROP DEFAULT`
    DropDefault,
    /// `SET NOT NULL`
    SetNotNull,
    /// `DROP NOT NULL`
    DropNotNull,
    /// `SET VISIBLE` (true) or `SET INVISIBLE` (false)
    SetVisibility(bool),
    /// `SET OPTIONS (...)`, the parenthesized text kept as written
    SetOptions(String),
}

/// A `name [=] value` table option without dedicated syntax, e.g.
/// `ROW_FORMAT = DYNAMIC` or `ENCRYPTION 'N'`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableOption {
    /// Upper-case option name
    pub name: String,
    /// Whether `=` was written between name and value
    pub equals: bool,
    pub value: Expr,
}

impl TableOption {
    pub fn new(name: &str, equals: bool, value: Expr) -> Self {
        TableOption {
            name: name.to_uppercase(),
            equals,
            value,
        }
    }
}

impl fmt::Display for TableOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).table_option(self)
    }
}

/// The `COLLATE [=] name` tail of a character set clause.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CharacterSetCollate {
    pub equals: bool,
    pub collation: Ident,
}

/// One clause of an ALTER TABLE statement.
///
/// Each variant carries exactly the payload of its operation; the tag is
/// available through [`AlterExpression::operation`].
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterExpression {
    /// `ADD [COLUMN|COLUMNS] [IF NOT EXISTS] col type ...` or
    /// `ADD [COLUMN|COLUMNS] (col type ..., ...)`
    AddColumns {
        column_keyword: ColumnKeyword,
        if_not_exists: bool,
        parenthesized: bool,
        columns: Vec<ColumnDataType>,
    },
    /// `ADD PRIMARY KEY ...`, `ADD INDEX ...`, `ADD CONSTRAINT ...`, ...
    AddConstraint(TableConstraint),
    /// `ADD PARTITION (PARTITION p VALUES ..., ...)`
    AddPartition { partitions: Vec<PartitionDefinition> },
    /// `ALTER [COLUMN] name action`
    AlterColumn {
        column_keyword: ColumnKeyword,
        column_name: Ident,
        action: AlterColumnAction,
    },
    /// `ALTER INDEX name VISIBLE|INVISIBLE`
    AlterIndex { name: Ident, visible: bool },
    /// `ALTER CONSTRAINT|CHECK name [NOT] ENFORCED`
    AlterConstraint {
        keyword: AlterConstraintKeyword,
        name: Ident,
        enforced: bool,
    },
    /// `DROP [COLUMN] [IF EXISTS] name [CASCADE|RESTRICT]`
    DropColumn {
        column_keyword: ColumnKeyword,
        if_exists: bool,
        column_name: Ident,
        drop_behavior: Option<DropBehavior>,
    },
    /// `DROP CONSTRAINT [IF EXISTS] name [CASCADE|RESTRICT]`
    DropConstraint {
        if_exists: bool,
        name: Ident,
        drop_behavior: Option<DropBehavior>,
    },
    /// `DROP INDEX|KEY name`
    DropIndex { keyword: IndexKeyword, name: Ident },
    /// `DROP PRIMARY KEY`
    DropPrimaryKey,
    /// `DROP UNIQUE (cols)`
    DropUnique { columns: Vec<Ident> },
    /// `DROP FOREIGN KEY [name] [(cols)]`
    DropForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
    },
    /// `MODIFY [COLUMN] col ...` or `MODIFY [COLUMN] (col ..., ...)`
    Modify {
        column_keyword: ColumnKeyword,
        parenthesized: bool,
        columns: Vec<ColumnDataType>,
    },
    /// `CHANGE [COLUMN] old_name new_name type ...`
    Change {
        column_keyword: ColumnKeyword,
        old_name: Ident,
        column: ColumnDataType,
    },
    /// `RENAME [COLUMN] old TO new`
    RenameColumn {
        column_keyword: ColumnKeyword,
        old_name: Ident,
        new_name: Ident,
    },
    /// `RENAME INDEX|KEY|CONSTRAINT old TO new`
    RenameObject {
        kind: RenameKind,
        old_name: Ident,
        new_name: Ident,
    },
    /// `RENAME TO new` or `RENAME AS new`
    RenameTable { as_keyword: bool, new_name: ObjectName },
    /// `COMMENT [=] 'text'`
    Comment { equals: bool, text: Value },
    /// `[DEFAULT] COLLATE [=] name`
    Collate {
        default: bool,
        equals: bool,
        collation: Ident,
    },
    /// `CONVERT TO CHARACTER SET cs [COLLATE c]` or
    /// `[DEFAULT] CHARACTER SET [=] cs [COLLATE [=] c]`
    Convert {
        convert_to: bool,
        default: bool,
        equals: bool,
        character_set: Ident,
        collate: Option<CharacterSetCollate>,
    },
    /// `LOCK [=] DEFAULT|NONE|SHARED|EXCLUSIVE`
    Lock { equals: bool, lock: Ident },
    /// `ALGORITHM [=] DEFAULT|INSTANT|INPLACE|COPY`
    Algorithm { equals: bool, algorithm: Ident },
    /// `ENGINE [=] name`
    Engine { equals: bool, engine: Ident },
    /// `KEY_BLOCK_SIZE [=] n`
    KeyBlockSize { equals: bool, size: u64 },
    /// `FORCE`
    Force,
    /// Any other `name [=] value` table option
    SetTableOption(TableOption),
    /// `DISCARD TABLESPACE`
    DiscardTablespace,
    /// `IMPORT TABLESPACE`
    ImportTablespace,
    /// `DISABLE KEYS`
    DisableKeys,
    /// `ENABLE KEYS`
    EnableKeys,
    /// `DROP PARTITION p, ...`
    DropPartition { partitions: Vec<Ident> },
    /// `TRUNCATE PARTITION p, ...`
    TruncatePartition { partitions: Vec<Ident> },
    /// `ANALYZE PARTITION p, ...`
    AnalyzePartition { partitions: Vec<Ident> },
    /// `CHECK PARTITION p, ...`
    CheckPartition { partitions: Vec<Ident> },
    /// `OPTIMIZE PARTITION p, ...`
    OptimizePartition { partitions: Vec<Ident> },
    /// `REBUILD PARTITION p, ...`
    RebuildPartition { partitions: Vec<Ident> },
    /// `REPAIR PARTITION p, ...`
    RepairPartition { partitions: Vec<Ident> },
    /// `COALESCE PARTITION n`
    CoalescePartition { count: u64 },
    /// `REORGANIZE PARTITION p, ... INTO (PARTITION ..., ...)`
    ReorganizePartition {
        partitions: Vec<Ident>,
        into: Vec<PartitionDefinition>,
    },
    /// `EXCHANGE PARTITION p WITH TABLE t [WITH|WITHOUT VALIDATION]`
    ExchangePartition {
        partition: Ident,
        table: ObjectName,
        validation: Option<bool>,
    },
    /// `REMOVE PARTITIONING`
    RemovePartitioning,
    /// `DISCARD PARTITION p, ... TABLESPACE`
    DiscardPartition { partitions: Vec<Ident> },
    /// `IMPORT PARTITION p, ... TABLESPACE`
    ImportPartition { partitions: Vec<Ident> },
    /// `PARTITION BY ...`
    PartitionBy(PartitionBy),
    /// A recognized clause without a model (e.g. `MOVE TABLESPACE users`),
    /// kept as written.
    Unspecific(String),
}

impl AlterExpression {
    /// The operation tag of this clause.
    pub fn operation(&self) -> AlterOperation {
        match self {
            AlterExpression::AddColumns { .. } | AlterExpression::AddConstraint(_) => {
                AlterOperation::Add
            }
            AlterExpression::AlterColumn { .. }
            | AlterExpression::AlterIndex { .. }
            | AlterExpression::AlterConstraint { .. } => AlterOperation::Alter,
            AlterExpression::DropColumn { .. }
            | AlterExpression::DropConstraint { .. }
            | AlterExpression::DropIndex { .. } => AlterOperation::Drop,
            AlterExpression::DropPrimaryKey => AlterOperation::DropPrimaryKey,
            AlterExpression::DropUnique { .. } => AlterOperation::DropUnique,
            AlterExpression::DropForeignKey { .. } => AlterOperation::DropForeignKey,
            AlterExpression::Modify { .. } => AlterOperation::Modify,
            AlterExpression::Change { .. } => AlterOperation::Change,
            AlterExpression::RenameColumn { .. } => AlterOperation::Rename,
            AlterExpression::RenameObject { kind, .. } => match kind {
                RenameKind::Index => AlterOperation::RenameIndex,
                RenameKind::Key => AlterOperation::RenameKey,
                RenameKind::Constraint => AlterOperation::RenameConstraint,
            },
            AlterExpression::RenameTable { .. } => AlterOperation::RenameTable,
            AlterExpression::Comment { .. } => AlterOperation::Comment,
            AlterExpression::Collate { .. } => AlterOperation::Collate,
            AlterExpression::Convert { .. } => AlterOperation::Convert,
            AlterExpression::Lock { .. } => AlterOperation::Lock,
            AlterExpression::Algorithm { .. } => AlterOperation::Algorithm,
            AlterExpression::Engine { .. } => AlterOperation::Engine,
            AlterExpression::KeyBlockSize { .. } => AlterOperation::KeyBlockSize,
            AlterExpression::Force => AlterOperation::Force,
            AlterExpression::SetTableOption(_) => AlterOperation::SetTableOption,
            AlterExpression::DiscardTablespace => AlterOperation::DiscardTablespace,
            AlterExpression::ImportTablespace => AlterOperation::ImportTablespace,
            AlterExpression::DisableKeys => AlterOperation::DisableKeys,
            AlterExpression::EnableKeys => AlterOperation::EnableKeys,
            AlterExpression::AddPartition { .. } => AlterOperation::AddPartition,
            AlterExpression::DropPartition { .. } => AlterOperation::DropPartition,
            AlterExpression::TruncatePartition { .. } => AlterOperation::TruncatePartition,
            AlterExpression::AnalyzePartition { .. } => AlterOperation::AnalyzePartition,
            AlterExpression::CheckPartition { .. } => AlterOperation::CheckPartition,
            AlterExpression::OptimizePartition { .. } => AlterOperation::OptimizePartition,
            AlterExpression::RebuildPartition { .. } => AlterOperation::RebuildPartition,
            AlterExpression::RepairPartition { .. } => AlterOperation::RepairPartition,
            AlterExpression::CoalescePartition { .. } => AlterOperation::CoalescePartition,
            AlterExpression::ReorganizePartition { .. } => AlterOperation::ReorganizePartition,
            AlterExpression::ExchangePartition { .. } => AlterOperation::ExchangePartition,
            AlterExpression::RemovePartitioning => AlterOperation::RemovePartitioning,
            AlterExpression::DiscardPartition { .. } => AlterOperation::DiscardPartition,
            AlterExpression::ImportPartition { .. } => AlterOperation::ImportPartition,
            AlterExpression::PartitionBy(_) => AlterOperation::PartitionBy,
            AlterExpression::Unspecific(_) => AlterOperation::Unspecific,
        }
    }

    /// `ADD COLUMN column`
    pub fn add_column(column: ColumnDataType) -> Self {
        AlterExpression::AddColumns {
            column_keyword: ColumnKeyword::Column,
            if_not_exists: false,
            parenthesized: false,
            columns: vec![column],
        }
    }

    /// `ADD constraint`
    pub fn add_constraint(constraint: impl Into<TableConstraint>) -> Self {
        AlterExpression::AddConstraint(constraint.into())
    }

    /// `ADD PARTITION (partitions)`
    pub fn add_partitions(partitions: Vec<PartitionDefinition>) -> Self {
        AlterExpression::AddPartition { partitions }
    }

    /// `DROP COLUMN name`
    pub fn drop_column(column_name: impl Into<Ident>) -> Self {
        AlterExpression::DropColumn {
            column_keyword: ColumnKeyword::Column,
            if_exists: false,
            column_name: column_name.into(),
            drop_behavior: None,
        }
    }

    /// `DROP CONSTRAINT name`
    pub fn drop_constraint(name: impl Into<Ident>) -> Self {
        AlterExpression::DropConstraint {
            if_exists: false,
            name: name.into(),
            drop_behavior: None,
        }
    }

    /// `RENAME COLUMN old TO new`
    pub fn rename_column(old_name: impl Into<Ident>, new_name: impl Into<Ident>) -> Self {
        AlterExpression::RenameColumn {
            column_keyword: ColumnKeyword::Column,
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    /// `COMMENT = 'text'`
    pub fn comment(text: &str) -> Self {
        AlterExpression::Comment {
            equals: true,
            text: Value::SingleQuotedString(text.to_string()),
        }
    }

    /// `COLLATE = name`
    pub fn collate(collation: impl Into<Ident>) -> Self {
        AlterExpression::Collate {
            default: false,
            equals: true,
            collation: collation.into(),
        }
    }

    /// `ENGINE = name`
    pub fn engine(engine: impl Into<Ident>) -> Self {
        AlterExpression::Engine {
            equals: true,
            engine: engine.into(),
        }
    }

    /// `ALGORITHM = name`
    pub fn algorithm(algorithm: impl Into<Ident>) -> Self {
        AlterExpression::Algorithm {
            equals: true,
            algorithm: algorithm.into(),
        }
    }

    /// `LOCK = name`
    pub fn lock(lock: impl Into<Ident>) -> Self {
        AlterExpression::Lock {
            equals: true,
            lock: lock.into(),
        }
    }

    /// `name = value` for any other table option
    pub fn table_option(name: &str, value: Expr) -> Self {
        AlterExpression::SetTableOption(TableOption::new(name, true, value))
    }
}

impl fmt::Display for AlterExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).alter_expression(self)
    }
}

/// The closed set of ALTER TABLE operation tags.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterOperation {
    Add,
    Alter,
    Drop,
    DropPrimaryKey,
    DropUnique,
    DropForeignKey,
    Modify,
    Change,
    Rename,
    RenameTable,
    RenameIndex,
    RenameKey,
    RenameConstraint,
    Collate,
    Convert,
    Lock,
    Algorithm,
    Engine,
    Force,
    Comment,
    SetTableOption,
    KeyBlockSize,
    AddPartition,
    DropPartition,
    TruncatePartition,
    CoalescePartition,
    ReorganizePartition,
    ExchangePartition,
    AnalyzePartition,
    CheckPartition,
    OptimizePartition,
    RebuildPartition,
    RepairPartition,
    RemovePartitioning,
    DiscardPartition,
    ImportPartition,
    DiscardTablespace,
    ImportTablespace,
    DisableKeys,
    EnableKeys,
    PartitionBy,
    Unspecific,
}

impl fmt::Display for AlterOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AlterOperation::Add => "ADD",
            AlterOperation::Alter => "ALTER",
            AlterOperation::Drop => "DROP",
            AlterOperation::DropPrimaryKey => "DROP_PRIMARY_KEY",
            AlterOperation::DropUnique => "DROP_UNIQUE",
            AlterOperation::DropForeignKey => "DROP_FOREIGN_KEY",
            AlterOperation::Modify => "MODIFY",
            AlterOperation::Change => "CHANGE",
            AlterOperation::Rename => "RENAME",
            AlterOperation::RenameTable => "RENAME_TABLE",
            AlterOperation::RenameIndex => "RENAME_INDEX",
            AlterOperation::RenameKey => "RENAME_KEY",
            AlterOperation::RenameConstraint => "RENAME_CONSTRAINT",
            AlterOperation::Collate => "COLLATE",
            AlterOperation::Convert => "CONVERT",
            AlterOperation::Lock => "LOCK",
            AlterOperation::Algorithm => "ALGORITHM",
            AlterOperation::Engine => "ENGINE",
            AlterOperation::Force => "FORCE",
            AlterOperation::Comment => "COMMENT",
            AlterOperation::SetTableOption => "SET_TABLE_OPTION",
            AlterOperation::KeyBlockSize => "KEY_BLOCK_SIZE",
            AlterOperation::AddPartition => "ADD_PARTITION",
            AlterOperation::DropPartition => "DROP_PARTITION",
            AlterOperation::TruncatePartition => "TRUNCATE_PARTITION",
            AlterOperation::CoalescePartition => "COALESCE_PARTITION",
            AlterOperation::ReorganizePartition => "REORGANIZE_PARTITION",
            AlterOperation::ExchangePartition => "EXCHANGE_PARTITION",
            AlterOperation::AnalyzePartition => "ANALYZE_PARTITION",
            AlterOperation::CheckPartition => "CHECK_PARTITION",
            AlterOperation::OptimizePartition => "OPTIMIZE_PARTITION",
            AlterOperation::RebuildPartition => "REBUILD_PARTITION",
            AlterOperation::RepairPartition => "REPAIR_PARTITION",
            AlterOperation::RemovePartitioning => "REMOVE_PARTITIONING",
            AlterOperation::DiscardPartition => "DISCARD_PARTITION",
            AlterOperation::ImportPartition => "IMPORT_PARTITION",
            AlterOperation::DiscardTablespace => "DISCARD_TABLESPACE",
            AlterOperation::ImportTablespace => "IMPORT_TABLESPACE",
            AlterOperation::DisableKeys => "DISABLE_KEYS",
            AlterOperation::EnableKeys => "ENABLE_KEYS",
            AlterOperation::PartitionBy => "PARTITION_BY",
            AlterOperation::Unspecific => "UNSPECIFIC",
        })
    }
}

/// `CREATE [ OR REPLACE ] [ PUBLIC ] SYNONYM synonym FOR object`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateSynonym {
    pub or_replace: bool,
    pub public: bool,
    pub synonym: ObjectName,
    pub for_object: ObjectName,
}

impl CreateSynonym {
    pub fn new(synonym: impl Into<ObjectName>, for_object: impl Into<ObjectName>) -> Self {
        CreateSynonym {
            or_replace: false,
            public: false,
            synonym: synonym.into(),
            for_object: for_object.into(),
        }
    }

    pub fn with_or_replace(mut self, or_replace: bool) -> Self {
        self.or_replace = or_replace;
        self
    }

    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

impl fmt::Display for CreateSynonym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.accept(&mut Deparser::new(f), ())
    }
}
