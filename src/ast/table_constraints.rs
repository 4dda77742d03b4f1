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

//! Index and constraint definitions used by `ALTER TABLE ... ADD`.
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Ident, ObjectName};
use crate::deparser::Deparser;

/// A table-level constraint or index, as added by `ALTER TABLE ... ADD`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableConstraint {
    /// `PRIMARY KEY (..)`, `UNIQUE [KEY] (..)`, `INDEX name (..)`, `FULLTEXT (..)`, ...
    Index(Index),
    /// `CONSTRAINT [name] PRIMARY KEY|UNIQUE ...`
    Named(NamedConstraint),
    /// `[CONSTRAINT name] FOREIGN KEY (..) REFERENCES t [(..)] [ON ...]`
    ForeignKey(ForeignKeyIndex),
    /// `[CONSTRAINT name] CHECK (expr)`
    Check(CheckConstraint),
}

impl From<Index> for TableConstraint {
    fn from(index: Index) -> Self {
        TableConstraint::Index(index)
    }
}

impl From<NamedConstraint> for TableConstraint {
    fn from(constraint: NamedConstraint) -> Self {
        TableConstraint::Named(constraint)
    }
}

impl From<ForeignKeyIndex> for TableConstraint {
    fn from(fk: ForeignKeyIndex) -> Self {
        TableConstraint::ForeignKey(fk)
    }
}

impl From<CheckConstraint> for TableConstraint {
    fn from(check: CheckConstraint) -> Self {
        TableConstraint::Check(check)
    }
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).table_constraint(self)
    }
}

/// The kind of an index definition
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexType {
    /// `INDEX` or `KEY`
    Plain,
    /// `PRIMARY KEY`
    Primary,
    /// `UNIQUE [INDEX|KEY]`
    Unique,
    /// `FULLTEXT [INDEX|KEY]`
    Fulltext,
    /// `SPATIAL [INDEX|KEY]`
    Spatial,
}

/// `INDEX` or `KEY`, which are synonyms in MySQL.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexKeyword {
    Index,
    Key,
}

impl fmt::Display for IndexKeyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            IndexKeyword::Index => "INDEX",
            IndexKeyword::Key => "KEY",
        })
    }
}

/// A column of an index, with an optional prefix length and direction:
/// `user_name(10) DESC`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexColumn {
    pub name: Ident,
    pub length: Option<String>,
    /// `Some(true)` for `ASC`, `Some(false)` for `DESC`
    pub asc: Option<bool>,
}

impl IndexColumn {
    pub fn new(name: impl Into<Ident>) -> Self {
        IndexColumn {
            name: name.into(),
            length: None,
            asc: None,
        }
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }
}

impl fmt::Display for IndexColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(length) = &self.length {
            write!(f, "({length})")?;
        }
        match self.asc {
            Some(true) => write!(f, " ASC"),
            Some(false) => write!(f, " DESC"),
            None => Ok(()),
        }
    }
}

/// Constraint characteristics that follow the index or reference part of a
/// constraint, e.g. `DEFERRABLE INITIALLY DEFERRED NOVALIDATE`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintState {
    Deferrable,
    NotDeferrable,
    InitiallyDeferred,
    InitiallyImmediate,
    Enable,
    Disable,
    Validate,
    NoValidate,
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstraintState::Deferrable => "DEFERRABLE",
            ConstraintState::NotDeferrable => "NOT DEFERRABLE",
            ConstraintState::InitiallyDeferred => "INITIALLY DEFERRED",
            ConstraintState::InitiallyImmediate => "INITIALLY IMMEDIATE",
            ConstraintState::Enable => "ENABLE",
            ConstraintState::Disable => "DISABLE",
            ConstraintState::Validate => "VALIDATE",
            ConstraintState::NoValidate => "NOVALIDATE",
        })
    }
}

/// An index definition.
///
/// `index_spec` holds the trailing index options as written, one entry per
/// option: `USING BTREE`, `KEY_BLOCK_SIZE = 8`, `WITH PARSER ngram`,
/// `COMMENT 'text'`, `VISIBLE`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Index {
    pub index_type: IndexType,
    /// `INDEX`/`KEY` after the type keyword, if written
    pub keyword: Option<IndexKeyword>,
    pub name: Option<Ident>,
    /// `USING method` between the name and the column list
    pub using: Option<Ident>,
    pub columns: Vec<IndexColumn>,
    pub index_spec: Vec<String>,
    pub characteristics: Vec<ConstraintState>,
}

impl Index {
    pub fn new(index_type: IndexType) -> Self {
        Index {
            index_type,
            keyword: None,
            name: None,
            using: None,
            columns: vec![],
            index_spec: vec![],
            characteristics: vec![],
        }
    }

    pub fn with_keyword(mut self, keyword: IndexKeyword) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub fn with_name(mut self, name: impl Into<Ident>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_using(mut self, using: impl Into<Ident>) -> Self {
        self.using = Some(using.into());
        self
    }

    pub fn with_column(mut self, column: IndexColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_spec(mut self, spec: impl Into<String>) -> Self {
        self.index_spec.push(spec.into());
        self
    }

    pub fn with_characteristic(mut self, state: ConstraintState) -> Self {
        self.characteristics.push(state);
        self
    }

    /// Names of the indexed columns, without length or direction.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.value.as_str()).collect()
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Deparser::new(f).index(self)
    }
}

/// `CONSTRAINT [name] <index>`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedConstraint {
    pub name: Option<Ident>,
    pub index: Index,
}

impl NamedConstraint {
    pub fn new(name: Option<Ident>, index: Index) -> Self {
        NamedConstraint { name, index }
    }
}

/// `ON UPDATE` or `ON DELETE`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferentialActionKind {
    Update,
    Delete,
}

impl fmt::Display for ReferentialActionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ReferentialActionKind::Update => "ON UPDATE",
            ReferentialActionKind::Delete => "ON DELETE",
        })
    }
}

/// `<referential_action> =
/// { RESTRICT | CASCADE | SET NULL | NO ACTION | SET DEFAULT }`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferentialActionOption {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl fmt::Display for ReferentialActionOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ReferentialActionOption::Cascade => "CASCADE",
            ReferentialActionOption::SetNull => "SET NULL",
            ReferentialActionOption::SetDefault => "SET DEFAULT",
            ReferentialActionOption::Restrict => "RESTRICT",
            ReferentialActionOption::NoAction => "NO ACTION",
        })
    }
}

/// `ON UPDATE|DELETE action`
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferentialAction {
    pub kind: ReferentialActionKind,
    pub action: ReferentialActionOption,
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.action)
    }
}

/// `[CONSTRAINT name] FOREIGN KEY (cols) REFERENCES table [(cols)] [actions] [states]`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForeignKeyIndex {
    /// Name given with `CONSTRAINT name`
    pub name: Option<Ident>,
    pub columns: Vec<Ident>,
    pub foreign_table: ObjectName,
    pub referred_columns: Vec<Ident>,
    /// At most one action per kind, in declaration order
    pub referential_actions: Vec<ReferentialAction>,
    pub characteristics: Vec<ConstraintState>,
}

impl ForeignKeyIndex {
    pub fn new(
        columns: Vec<Ident>,
        foreign_table: impl Into<ObjectName>,
        referred_columns: Vec<Ident>,
    ) -> Self {
        ForeignKeyIndex {
            name: None,
            columns,
            foreign_table: foreign_table.into(),
            referred_columns,
            referential_actions: vec![],
            characteristics: vec![],
        }
    }

    pub fn with_name(mut self, name: impl Into<Ident>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the action for `kind`, replacing any earlier action of that kind
    /// in place.
    pub fn with_referential_action(
        mut self,
        kind: ReferentialActionKind,
        action: ReferentialActionOption,
    ) -> Self {
        self.set_referential_action(kind, action);
        self
    }

    pub fn set_referential_action(
        &mut self,
        kind: ReferentialActionKind,
        action: ReferentialActionOption,
    ) {
        match self.referential_actions.iter_mut().find(|a| a.kind == kind) {
            Some(existing) => existing.action = action,
            None => self
                .referential_actions
                .push(ReferentialAction { kind, action }),
        }
    }

    /// The action declared for `kind`, if any.
    pub fn referential_action(&self, kind: ReferentialActionKind) -> Option<ReferentialActionOption> {
        self.referential_actions
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.action)
    }

    pub fn with_characteristic(mut self, state: ConstraintState) -> Self {
        self.characteristics.push(state);
        self
    }
}

/// `[CONSTRAINT name] CHECK (expr)`
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckConstraint {
    pub name: Option<Ident>,
    pub expression: Expr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referential_actions_keep_one_per_kind() {
        let fk = ForeignKeyIndex::new(vec!["col".into()], "reftab", vec!["id".into()])
            .with_referential_action(ReferentialActionKind::Delete, ReferentialActionOption::SetDefault)
            .with_referential_action(ReferentialActionKind::Update, ReferentialActionOption::Cascade)
            .with_referential_action(ReferentialActionKind::Delete, ReferentialActionOption::Cascade);

        assert_eq!(2, fk.referential_actions.len());
        assert_eq!(
            Some(ReferentialActionOption::Cascade),
            fk.referential_action(ReferentialActionKind::Delete)
        );
        assert_eq!(
            ReferentialActionKind::Delete,
            fk.referential_actions[0].kind,
            "replacing an action keeps its position"
        );
        assert_eq!(
            "FOREIGN KEY (col) REFERENCES reftab (id) ON DELETE CASCADE ON UPDATE CASCADE",
            TableConstraint::from(fk).to_string()
        );
    }

    #[test]
    fn index_display() {
        let index = Index::new(IndexType::Plain)
            .with_keyword(IndexKeyword::Index)
            .with_name("idx_user_id_name")
            .with_column(IndexColumn::new("user_id"))
            .with_column(IndexColumn::new("user_name").with_length("10"));
        assert_eq!("INDEX idx_user_id_name (user_id, user_name(10))", index.to_string());
        assert_eq!(vec!["user_id", "user_name"], index.column_names());

        let fulltext = Index::new(IndexType::Fulltext)
            .with_name("my_idx")
            .with_column(IndexColumn::new("col1"))
            .with_column(IndexColumn::new("col2"))
            .with_spec("KEY_BLOCK_SIZE = 8")
            .with_spec("INVISIBLE");
        assert_eq!(
            "FULLTEXT my_idx(col1, col2) KEY_BLOCK_SIZE = 8 INVISIBLE",
            fulltext.to_string()
        );

        let pk = Index::new(IndexType::Primary)
            .with_column(IndexColumn::new("id"))
            .with_characteristic(ConstraintState::Deferrable)
            .with_characteristic(ConstraintState::NoValidate);
        assert_eq!("PRIMARY KEY (id) DEFERRABLE NOVALIDATE", pk.to_string());
    }
}
