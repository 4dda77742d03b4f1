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

//! Emission rules for ALTER TABLE and its payload types.

use core::fmt::{self, Write};

use crate::ast::{
    display_comma_separated, Alter, AlterColumnAction, AlterExpression, ColumnDataType,
    ExpressionNode, ForeignKeyIndex, Ident, Index, IndexKeyword, IndexType, PartitionBy,
    PartitionDefinition, PartitionKey, TableConstraint, TableOption,
};
use crate::display_utils::write_separated;

use super::Deparser;

impl<W: Write + ?Sized> Deparser<'_, W> {
    pub(crate) fn alter(&mut self, alter: &Alter) -> fmt::Result {
        write!(self, "ALTER TABLE ")?;
        if alter.if_exists {
            write!(self, "IF EXISTS ")?;
        }
        if alter.only {
            write!(self, "ONLY ")?;
        }
        write!(self, "{}", alter.table)?;
        if !alter.expressions.is_empty() {
            write!(self, " ")?;
            write_separated(self, &alter.expressions, ", ", |d, e| d.alter_expression(e))?;
        }
        Ok(())
    }

    pub(crate) fn alter_expression(&mut self, expression: &AlterExpression) -> fmt::Result {
        match expression {
            AlterExpression::AddColumns {
                column_keyword,
                if_not_exists,
                parenthesized,
                columns,
            } => {
                write!(self, "ADD {}", column_keyword.prefix())?;
                if *if_not_exists {
                    write!(self, "IF NOT EXISTS ")?;
                }
                self.column_definitions(columns, *parenthesized)
            }
            AlterExpression::AddConstraint(constraint) => {
                write!(self, "ADD ")?;
                self.table_constraint(constraint)
            }
            AlterExpression::AddPartition { partitions } => {
                write!(self, "ADD PARTITION (")?;
                self.partition_definitions(partitions)?;
                write!(self, ")")
            }
            AlterExpression::AlterColumn {
                column_keyword,
                column_name,
                action,
            } => {
                write!(self, "ALTER {}{column_name} ", column_keyword.prefix())?;
                self.alter_column_action(action)
            }
            AlterExpression::AlterIndex { name, visible } => {
                let visibility = if *visible { "VISIBLE" } else { "INVISIBLE" };
                write!(self, "ALTER INDEX {name} {visibility}")
            }
            AlterExpression::AlterConstraint {
                keyword,
                name,
                enforced,
            } => {
                let not = if *enforced { "" } else { "NOT " };
                write!(self, "ALTER {keyword} {name} {not}ENFORCED")
            }
            AlterExpression::DropColumn {
                column_keyword,
                if_exists,
                column_name,
                drop_behavior,
            } => {
                write!(self, "DROP {}", column_keyword.prefix())?;
                if *if_exists {
                    write!(self, "IF EXISTS ")?;
                }
                write!(self, "{column_name}")?;
                if let Some(behavior) = drop_behavior {
                    write!(self, " {behavior}")?;
                }
                Ok(())
            }
            AlterExpression::DropConstraint {
                if_exists,
                name,
                drop_behavior,
            } => {
                write!(self, "DROP CONSTRAINT ")?;
                if *if_exists {
                    write!(self, "IF EXISTS ")?;
                }
                write!(self, "{name}")?;
                if let Some(behavior) = drop_behavior {
                    write!(self, " {behavior}")?;
                }
                Ok(())
            }
            AlterExpression::DropIndex { keyword, name } => write!(self, "DROP {keyword} {name}"),
            AlterExpression::DropPrimaryKey => write!(self, "DROP PRIMARY KEY"),
            AlterExpression::DropUnique { columns } => {
                write!(self, "DROP UNIQUE ({})", display_comma_separated(columns))
            }
            AlterExpression::DropForeignKey { name, columns } => {
                write!(self, "DROP FOREIGN KEY")?;
                if let Some(name) = name {
                    write!(self, " {name}")?;
                }
                if !columns.is_empty() {
                    write!(self, " ({})", display_comma_separated(columns))?;
                }
                Ok(())
            }
            AlterExpression::Modify {
                column_keyword,
                parenthesized,
                columns,
            } => {
                write!(self, "MODIFY {}", column_keyword.prefix())?;
                self.column_definitions(columns, *parenthesized)
            }
            AlterExpression::Change {
                column_keyword,
                old_name,
                column,
            } => {
                write!(self, "CHANGE {}{old_name} ", column_keyword.prefix())?;
                self.column_data_type(column)
            }
            AlterExpression::RenameColumn {
                column_keyword,
                old_name,
                new_name,
            } => write!(
                self,
                "RENAME {}{old_name} TO {new_name}",
                column_keyword.prefix()
            ),
            AlterExpression::RenameObject {
                kind,
                old_name,
                new_name,
            } => write!(self, "RENAME {kind} {old_name} TO {new_name}"),
            AlterExpression::RenameTable {
                as_keyword,
                new_name,
            } => {
                let keyword = if *as_keyword { "AS" } else { "TO" };
                write!(self, "RENAME {keyword} {new_name}")
            }
            AlterExpression::Comment { equals, text } => {
                write!(self, "COMMENT{} {text}", eq(*equals))
            }
            AlterExpression::Collate {
                default,
                equals,
                collation,
            } => {
                if *default {
                    write!(self, "DEFAULT ")?;
                }
                write!(self, "COLLATE{} {collation}", eq(*equals))
            }
            AlterExpression::Convert {
                convert_to,
                default,
                equals,
                character_set,
                collate,
            } => {
                if *convert_to {
                    write!(self, "CONVERT TO CHARACTER SET {character_set}")?;
                } else {
                    if *default {
                        write!(self, "DEFAULT ")?;
                    }
                    write!(self, "CHARACTER SET{} {character_set}", eq(*equals))?;
                }
                if let Some(collate) = collate {
                    write!(self, " COLLATE{} {}", eq(collate.equals), collate.collation)?;
                }
                Ok(())
            }
            AlterExpression::Lock { equals, lock } => write!(self, "LOCK{} {lock}", eq(*equals)),
            AlterExpression::Algorithm { equals, algorithm } => {
                write!(self, "ALGORITHM{} {algorithm}", eq(*equals))
            }
            AlterExpression::Engine { equals, engine } => {
                write!(self, "ENGINE{} {engine}", eq(*equals))
            }
            AlterExpression::KeyBlockSize { equals, size } => {
                write!(self, "KEY_BLOCK_SIZE{} {size}", eq(*equals))
            }
            AlterExpression::Force => write!(self, "FORCE"),
            AlterExpression::SetTableOption(option) => self.table_option(option),
            AlterExpression::DiscardTablespace => write!(self, "DISCARD TABLESPACE"),
            AlterExpression::ImportTablespace => write!(self, "IMPORT TABLESPACE"),
            AlterExpression::DisableKeys => write!(self, "DISABLE KEYS"),
            AlterExpression::EnableKeys => write!(self, "ENABLE KEYS"),
            AlterExpression::DropPartition { partitions } => {
                self.partition_names("DROP", partitions)
            }
            AlterExpression::TruncatePartition { partitions } => {
                self.partition_names("TRUNCATE", partitions)
            }
            AlterExpression::AnalyzePartition { partitions } => {
                self.partition_names("ANALYZE", partitions)
            }
            AlterExpression::CheckPartition { partitions } => {
                self.partition_names("CHECK", partitions)
            }
            AlterExpression::OptimizePartition { partitions } => {
                self.partition_names("OPTIMIZE", partitions)
            }
            AlterExpression::RebuildPartition { partitions } => {
                self.partition_names("REBUILD", partitions)
            }
            AlterExpression::RepairPartition { partitions } => {
                self.partition_names("REPAIR", partitions)
            }
            AlterExpression::CoalescePartition { count } => {
                write!(self, "COALESCE PARTITION {count}")
            }
            AlterExpression::ReorganizePartition { partitions, into } => {
                self.partition_names("REORGANIZE", partitions)?;
                write!(self, " INTO (")?;
                self.partition_definitions(into)?;
                write!(self, ")")
            }
            AlterExpression::ExchangePartition {
                partition,
                table,
                validation,
            } => {
                write!(self, "EXCHANGE PARTITION {partition} WITH TABLE {table}")?;
                match validation {
                    Some(true) => write!(self, " WITH VALIDATION"),
                    Some(false) => write!(self, " WITHOUT VALIDATION"),
                    None => Ok(()),
                }
            }
            AlterExpression::RemovePartitioning => write!(self, "REMOVE PARTITIONING"),
            AlterExpression::DiscardPartition { partitions } => {
                self.partition_names("DISCARD", partitions)?;
                write!(self, " TABLESPACE")
            }
            AlterExpression::ImportPartition { partitions } => {
                self.partition_names("IMPORT", partitions)?;
                write!(self, " TABLESPACE")
            }
            AlterExpression::PartitionBy(partition_by) => self.partition_by(partition_by),
            AlterExpression::Unspecific(text) => write!(self, "{text}"),
        }
    }

    fn alter_column_action(&mut self, action: &AlterColumnAction) -> fmt::Result {
        match action {
            AlterColumnAction::SetDataType {
                data_type,
                set_data_keywords,
            } => {
                if *set_data_keywords {
                    write!(self, "SET DATA ")?;
                }
                write!(self, "TYPE {data_type}")
            }
            AlterColumnAction::SetDefault(expr) => {
                write!(self, "SET DEFAULT ")?;
                expr.accept(self, ())
            }
            AlterColumnAction::DropDefault => write!(self, "DROP DEFAULT"),
            AlterColumnAction::SetNotNull => write!(self, "SET NOT NULL"),
            AlterColumnAction::DropNotNull => write!(self, "DROP NOT NULL"),
            AlterColumnAction::SetVisibility(true) => write!(self, "SET VISIBLE"),
            AlterColumnAction::SetVisibility(false) => write!(self, "SET INVISIBLE"),
            AlterColumnAction::SetOptions(options) => write!(self, "SET OPTIONS {options}"),
        }
    }

    fn column_definitions(&mut self, columns: &[ColumnDataType], parenthesized: bool) -> fmt::Result {
        if parenthesized {
            write!(self, "(")?;
        }
        write_separated(self, columns, ", ", |d, c| d.column_data_type(c))?;
        if parenthesized {
            write!(self, ")")?;
        }
        Ok(())
    }

    pub(crate) fn column_data_type(&mut self, column: &ColumnDataType) -> fmt::Result {
        write!(self, "{}{}", column.column_keyword.prefix(), column.column_name)?;
        if let Some(data_type) = &column.data_type {
            write!(self, " {data_type}")?;
        }
        for spec in &column.column_specs {
            write!(self, " {spec}")?;
        }
        Ok(())
    }

    pub(crate) fn table_option(&mut self, option: &TableOption) -> fmt::Result {
        write!(self, "{}{} ", option.name, eq(option.equals))?;
        option.value.accept(self, ())
    }

    pub(crate) fn table_constraint(&mut self, constraint: &TableConstraint) -> fmt::Result {
        match constraint {
            TableConstraint::Index(index) => self.index(index),
            TableConstraint::Named(named) => {
                write!(self, "CONSTRAINT ")?;
                if let Some(name) = &named.name {
                    write!(self, "{name} ")?;
                }
                self.index(&named.index)
            }
            TableConstraint::ForeignKey(fk) => self.foreign_key(fk),
            TableConstraint::Check(check) => {
                if let Some(name) = &check.name {
                    write!(self, "CONSTRAINT {name} ")?;
                }
                write!(self, "CHECK (")?;
                check.expression.accept(self, ())?;
                write!(self, ")")
            }
        }
    }

    pub(crate) fn index(&mut self, index: &Index) -> fmt::Result {
        let keyword = index.keyword.map(|k| match k {
            IndexKeyword::Index => " INDEX",
            IndexKeyword::Key => " KEY",
        });
        match index.index_type {
            IndexType::Plain => write!(self, "{}", index.keyword.unwrap_or(IndexKeyword::Index))?,
            IndexType::Primary => write!(self, "PRIMARY KEY")?,
            IndexType::Unique => write!(self, "UNIQUE{}", keyword.unwrap_or_default())?,
            IndexType::Fulltext => write!(self, "FULLTEXT{}", keyword.unwrap_or_default())?,
            IndexType::Spatial => write!(self, "SPATIAL{}", keyword.unwrap_or_default())?,
        }
        if let Some(name) = &index.name {
            write!(self, " {name}")?;
        }
        if let Some(using) = &index.using {
            write!(self, " USING {using}")?;
        }
        if !index.columns.is_empty() {
            let abut = index.name.is_some()
                && matches!(index.index_type, IndexType::Fulltext | IndexType::Spatial);
            if !abut {
                write!(self, " ")?;
            }
            write!(self, "({})", display_comma_separated(&index.columns))?;
        }
        for spec in &index.index_spec {
            write!(self, " {spec}")?;
        }
        for state in &index.characteristics {
            write!(self, " {state}")?;
        }
        Ok(())
    }

    fn foreign_key(&mut self, fk: &ForeignKeyIndex) -> fmt::Result {
        if let Some(name) = &fk.name {
            write!(self, "CONSTRAINT {name} ")?;
        }
        write!(
            self,
            "FOREIGN KEY ({}) REFERENCES {}",
            display_comma_separated(&fk.columns),
            fk.foreign_table
        )?;
        if !fk.referred_columns.is_empty() {
            // a named constraint keeps the table and its columns together
            let separator = if fk.name.is_some() { "" } else { " " };
            write!(
                self,
                "{separator}({})",
                display_comma_separated(&fk.referred_columns)
            )?;
        }
        for action in &fk.referential_actions {
            write!(self, " {action}")?;
        }
        for state in &fk.characteristics {
            write!(self, " {state}")?;
        }
        Ok(())
    }

    fn partition_names(&mut self, verb: &str, partitions: &[Ident]) -> fmt::Result {
        write!(self, "{verb} PARTITION {}", display_comma_separated(partitions))
    }

    fn partition_definitions(&mut self, partitions: &[PartitionDefinition]) -> fmt::Result {
        write_separated(self, partitions, ", ", |d, p| d.partition_definition(p))
    }

    pub(crate) fn partition_definition(&mut self, partition: &PartitionDefinition) -> fmt::Result {
        write!(self, "PARTITION {}", partition.name)?;
        if let Some(operation) = &partition.operation {
            write!(self, " {operation} ({})", display_comma_separated(&partition.values))?;
        }
        if let Some(engine) = &partition.storage_engine {
            let storage = if engine.storage { " STORAGE" } else { "" };
            write!(self, "{storage} ENGINE{} {}", eq(engine.equals), engine.name)?;
        }
        Ok(())
    }

    pub(crate) fn partition_by(&mut self, partition_by: &PartitionBy) -> fmt::Result {
        write!(self, "PARTITION BY ")?;
        if partition_by.linear {
            write!(self, "LINEAR ")?;
        }
        write!(self, "{}", partition_by.method)?;
        match &partition_by.key {
            PartitionKey::Expression(expr) => {
                write!(self, " (")?;
                expr.accept(self, ())?;
                write!(self, ")")?;
            }
            PartitionKey::Columns {
                columns_keyword: true,
                columns,
            } => write!(self, " COLUMNS({})", display_comma_separated(columns))?,
            PartitionKey::Columns {
                columns_keyword: false,
                columns,
            } => write!(self, " ({})", display_comma_separated(columns))?,
        }
        if let Some(count) = partition_by.partition_count {
            write!(self, " PARTITIONS {count}")?;
        }
        if !partition_by.partitions.is_empty() {
            write!(self, " (")?;
            self.partition_definitions(&partition_by.partitions)?;
            write!(self, ")")?;
        }
        Ok(())
    }
}

fn eq(equals: bool) -> &'static str {
    if equals {
        " ="
    } else {
        ""
    }
}
