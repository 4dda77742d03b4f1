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

//! SQL Parser for ALTER

use crate::parser::*;

/// Keywords that start an ALTER TABLE clause. A comma followed by one of
/// these ends a partition name list.
const ALTER_CLAUSE_KEYWORDS: &[Keyword] = &[
    Keyword::ADD,
    Keyword::ALGORITHM,
    Keyword::ALTER,
    Keyword::ANALYZE,
    Keyword::AUTO_INCREMENT,
    Keyword::AVG_ROW_LENGTH,
    Keyword::CHANGE,
    Keyword::CHARACTER,
    Keyword::CHECK,
    Keyword::CHECKSUM,
    Keyword::COALESCE,
    Keyword::COLLATE,
    Keyword::COMMENT,
    Keyword::COMPRESSION,
    Keyword::CONVERT,
    Keyword::DEFAULT,
    Keyword::DELAY_KEY_WRITE,
    Keyword::DISABLE,
    Keyword::DISCARD,
    Keyword::DROP,
    Keyword::ENABLE,
    Keyword::ENCRYPTION,
    Keyword::ENGINE,
    Keyword::EXCHANGE,
    Keyword::FORCE,
    Keyword::IMPORT,
    Keyword::INSERT_METHOD,
    Keyword::KEY_BLOCK_SIZE,
    Keyword::LOCK,
    Keyword::MAX_ROWS,
    Keyword::MIN_ROWS,
    Keyword::MODIFY,
    Keyword::MOVE,
    Keyword::OPTIMIZE,
    Keyword::PACK_KEYS,
    Keyword::PARTITION,
    Keyword::REBUILD,
    Keyword::REMOVE,
    Keyword::RENAME,
    Keyword::REORGANIZE,
    Keyword::REPAIR,
    Keyword::ROW_FORMAT,
    Keyword::STATS_AUTO_RECALC,
    Keyword::STATS_PERSISTENT,
    Keyword::STATS_SAMPLE_PAGES,
    Keyword::TABLESPACE,
    Keyword::TRUNCATE,
];

/// `name [=] value` table options kept as [`TableOption`]s
const TABLE_OPTION_KEYWORDS: &[Keyword] = &[
    Keyword::AUTO_INCREMENT,
    Keyword::AVG_ROW_LENGTH,
    Keyword::CHECKSUM,
    Keyword::COMPRESSION,
    Keyword::DELAY_KEY_WRITE,
    Keyword::ENCRYPTION,
    Keyword::INSERT_METHOD,
    Keyword::MAX_ROWS,
    Keyword::MIN_ROWS,
    Keyword::PACK_KEYS,
    Keyword::ROW_FORMAT,
    Keyword::STATS_AUTO_RECALC,
    Keyword::STATS_PERSISTENT,
    Keyword::STATS_SAMPLE_PAGES,
    Keyword::TABLESPACE,
];

impl Parser<'_> {
    /// Parse `ALTER TABLE [IF EXISTS] [ONLY] name expression [, ...]`,
    /// assuming the `ALTER` keyword was already consumed.
    pub fn parse_alter(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let only = self.parse_keyword(Keyword::ONLY);
        let table = self.parse_object_name()?;
        debug!("parsing ALTER TABLE {table}");

        let mut alter = Alter::new(table).with_if_exists(if_exists).with_only(only);
        alter.expressions =
            self.parse_comma_separated_with_trailing_commas(Parser::parse_alter_expression, false)?;
        Ok(Statement::Alter(alter))
    }

    /// Parse one comma separated clause of an ALTER TABLE statement
    pub fn parse_alter_expression(&mut self) -> Result<AlterExpression, ParserError> {
        let next_token = self.next_token();
        let keyword = match &next_token.token {
            Token::Word(w) if w.quote_style.is_none() => w.keyword,
            _ => Keyword::NoKeyword,
        };
        debug!("ALTER TABLE clause {keyword:?}");
        let expression = match keyword {
            Keyword::ADD => self.parse_alter_add()?,
            Keyword::ALTER => self.parse_alter_alter()?,
            Keyword::DROP => self.parse_alter_drop()?,
            Keyword::MODIFY => {
                let column_keyword = self.parse_column_keyword();
                if self.consume_token(&Token::LParen) {
                    let columns = self.parse_comma_separated_with_trailing_commas(
                        |p| {
                            let item_keyword = if p.parse_keyword(Keyword::COLUMN) {
                                ColumnKeyword::Column
                            } else {
                                ColumnKeyword::None
                            };
                            Ok(p.parse_column_data_type()?.with_column_keyword(item_keyword))
                        },
                        false,
                    )?;
                    self.expect_token(&Token::RParen)?;
                    AlterExpression::Modify {
                        column_keyword,
                        parenthesized: true,
                        columns,
                    }
                } else {
                    AlterExpression::Modify {
                        column_keyword,
                        parenthesized: false,
                        columns: vec![self.parse_column_data_type()?],
                    }
                }
            }
            Keyword::CHANGE => {
                let column_keyword = self.parse_column_keyword();
                let old_name = self.parse_identifier(false)?;
                let column = self.parse_column_data_type()?;
                AlterExpression::Change {
                    column_keyword,
                    old_name,
                    column,
                }
            }
            Keyword::RENAME => self.parse_alter_rename()?,
            Keyword::COLLATE => self.parse_alter_collate(false)?,
            Keyword::DEFAULT => {
                if self.parse_keyword(Keyword::COLLATE) {
                    self.parse_alter_collate(true)?
                } else {
                    self.expect_keywords(&[Keyword::CHARACTER, Keyword::SET])?;
                    self.parse_alter_character_set(true)?
                }
            }
            Keyword::CHARACTER => {
                self.expect_keyword(Keyword::SET)?;
                self.parse_alter_character_set(false)?
            }
            Keyword::CONVERT => {
                self.expect_keywords(&[Keyword::TO, Keyword::CHARACTER, Keyword::SET])?;
                let character_set = self.parse_identifier(false)?;
                AlterExpression::Convert {
                    convert_to: true,
                    default: false,
                    equals: false,
                    character_set,
                    collate: self.parse_optional_character_set_collate()?,
                }
            }
            Keyword::LOCK => AlterExpression::Lock {
                equals: self.parse_optional_eq(),
                lock: self.parse_identifier(false)?,
            },
            Keyword::ALGORITHM => AlterExpression::Algorithm {
                equals: self.parse_optional_eq(),
                algorithm: self.parse_identifier(false)?,
            },
            Keyword::ENGINE => AlterExpression::Engine {
                equals: self.parse_optional_eq(),
                engine: self.parse_identifier(false)?,
            },
            Keyword::KEY_BLOCK_SIZE => AlterExpression::KeyBlockSize {
                equals: self.parse_optional_eq(),
                size: self.parse_literal_uint()?,
            },
            Keyword::FORCE => AlterExpression::Force,
            Keyword::COMMENT => AlterExpression::Comment {
                equals: self.parse_optional_eq(),
                text: self.parse_literal_string()?,
            },
            kw if TABLE_OPTION_KEYWORDS.contains(&kw) => {
                let equals = self.parse_optional_eq();
                AlterExpression::SetTableOption(TableOption::new(
                    &format!("{kw:?}"),
                    equals,
                    self.parse_expr()?,
                ))
            }
            Keyword::DISCARD | Keyword::IMPORT => {
                let discard = keyword == Keyword::DISCARD;
                if self.parse_keyword(Keyword::TABLESPACE) {
                    if discard {
                        AlterExpression::DiscardTablespace
                    } else {
                        AlterExpression::ImportTablespace
                    }
                } else {
                    self.expect_keyword(Keyword::PARTITION)?;
                    let partitions = self.parse_partition_names()?;
                    self.expect_keyword(Keyword::TABLESPACE)?;
                    if discard {
                        AlterExpression::DiscardPartition { partitions }
                    } else {
                        AlterExpression::ImportPartition { partitions }
                    }
                }
            }
            Keyword::DISABLE => {
                self.expect_keyword(Keyword::KEYS)?;
                AlterExpression::DisableKeys
            }
            Keyword::ENABLE => {
                self.expect_keyword(Keyword::KEYS)?;
                AlterExpression::EnableKeys
            }
            Keyword::TRUNCATE
            | Keyword::ANALYZE
            | Keyword::CHECK
            | Keyword::OPTIMIZE
            | Keyword::REBUILD
            | Keyword::REPAIR => {
                self.expect_keyword(Keyword::PARTITION)?;
                let partitions = self.parse_partition_names()?;
                match keyword {
                    Keyword::TRUNCATE => AlterExpression::TruncatePartition { partitions },
                    Keyword::ANALYZE => AlterExpression::AnalyzePartition { partitions },
                    Keyword::CHECK => AlterExpression::CheckPartition { partitions },
                    Keyword::OPTIMIZE => AlterExpression::OptimizePartition { partitions },
                    Keyword::REBUILD => AlterExpression::RebuildPartition { partitions },
                    _ => AlterExpression::RepairPartition { partitions },
                }
            }
            Keyword::COALESCE => {
                self.expect_keyword(Keyword::PARTITION)?;
                AlterExpression::CoalescePartition {
                    count: self.parse_literal_uint()?,
                }
            }
            Keyword::REORGANIZE => {
                self.expect_keyword(Keyword::PARTITION)?;
                let partitions = self.parse_partition_names()?;
                self.expect_keyword(Keyword::INTO)?;
                let into = self.parse_parenthesized_partition_definitions()?;
                AlterExpression::ReorganizePartition { partitions, into }
            }
            Keyword::EXCHANGE => {
                self.expect_keyword(Keyword::PARTITION)?;
                let partition = self.parse_identifier(false)?;
                self.expect_keywords(&[Keyword::WITH, Keyword::TABLE])?;
                let table = self.parse_object_name()?;
                let validation = if self.parse_keywords(&[Keyword::WITH, Keyword::VALIDATION]) {
                    Some(true)
                } else if self.parse_keywords(&[Keyword::WITHOUT, Keyword::VALIDATION]) {
                    Some(false)
                } else {
                    None
                };
                AlterExpression::ExchangePartition {
                    partition,
                    table,
                    validation,
                }
            }
            Keyword::REMOVE => {
                self.expect_keyword(Keyword::PARTITIONING)?;
                AlterExpression::RemovePartitioning
            }
            Keyword::PARTITION => {
                self.expect_keyword(Keyword::BY)?;
                AlterExpression::PartitionBy(self.parse_partition_by()?)
            }
            Keyword::MOVE => {
                self.prev_token();
                AlterExpression::Unspecific(self.parse_text_until_delimiter()?)
            }
            _ => return self.expected("an ALTER TABLE operation", next_token),
        };
        Ok(expression)
    }

    /// `COLUMN`, `COLUMNS` or nothing
    fn parse_column_keyword(&mut self) -> ColumnKeyword {
        match self.parse_one_of_keywords(&[Keyword::COLUMN, Keyword::COLUMNS]) {
            Some(Keyword::COLUMN) => ColumnKeyword::Column,
            Some(_) => ColumnKeyword::Columns,
            None => ColumnKeyword::None,
        }
    }

    fn parse_alter_add(&mut self) -> Result<AlterExpression, ParserError> {
        if self.parse_keyword(Keyword::PARTITION) {
            let partitions = self.parse_parenthesized_partition_definitions()?;
            return Ok(AlterExpression::AddPartition { partitions });
        }

        let column_keyword = self.parse_column_keyword();
        if column_keyword == ColumnKeyword::None && self.peek_table_constraint() {
            return Ok(AlterExpression::AddConstraint(
                self.parse_table_constraint()?,
            ));
        }

        let if_not_exists = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let (parenthesized, columns) = if self.consume_token(&Token::LParen) {
            let columns = self.parse_comma_separated_with_trailing_commas(
                Parser::parse_column_data_type,
                false,
            )?;
            self.expect_token(&Token::RParen)?;
            (true, columns)
        } else {
            (false, vec![self.parse_column_data_type()?])
        };
        Ok(AlterExpression::AddColumns {
            column_keyword,
            if_not_exists,
            parenthesized,
            columns,
        })
    }

    fn peek_table_constraint(&self) -> bool {
        match self.peek_token().token {
            Token::Word(w) if w.quote_style.is_none() => matches!(
                w.keyword,
                Keyword::CONSTRAINT
                    | Keyword::PRIMARY
                    | Keyword::UNIQUE
                    | Keyword::INDEX
                    | Keyword::KEY
                    | Keyword::FULLTEXT
                    | Keyword::SPATIAL
                    | Keyword::FOREIGN
                    | Keyword::CHECK
            ),
            _ => false,
        }
    }

    /// Parse a table constraint or index definition, as it follows `ADD`
    pub fn parse_table_constraint(&mut self) -> Result<TableConstraint, ParserError> {
        if self.parse_keyword(Keyword::CONSTRAINT) {
            let name = match self.peek_token().token {
                Token::Word(w)
                    if w.quote_style.is_none()
                        && matches!(
                            w.keyword,
                            Keyword::PRIMARY
                                | Keyword::UNIQUE
                                | Keyword::FOREIGN
                                | Keyword::CHECK
                        ) =>
                {
                    None
                }
                _ => Some(self.parse_identifier(false)?),
            };
            if self.parse_keyword(Keyword::FOREIGN) {
                let mut fk = self.parse_foreign_key()?;
                fk.name = name;
                return Ok(fk.into());
            }
            if self.parse_keyword(Keyword::CHECK) {
                let expression = self.parse_parenthesized(Parser::parse_expr)?;
                return Ok(CheckConstraint { name, expression }.into());
            }
            let index = self.parse_index()?;
            return Ok(NamedConstraint::new(name, index).into());
        }

        if self.parse_keyword(Keyword::FOREIGN) {
            return Ok(self.parse_foreign_key()?.into());
        }
        if self.parse_keyword(Keyword::CHECK) {
            let expression = self.parse_parenthesized(Parser::parse_expr)?;
            return Ok(CheckConstraint {
                name: None,
                expression,
            }
            .into());
        }
        Ok(self.parse_index()?.into())
    }

    fn parse_index_keyword(&mut self) -> Option<IndexKeyword> {
        match self.parse_one_of_keywords(&[Keyword::INDEX, Keyword::KEY]) {
            Some(Keyword::INDEX) => Some(IndexKeyword::Index),
            Some(_) => Some(IndexKeyword::Key),
            None => None,
        }
    }

    /// `PRIMARY KEY|UNIQUE|INDEX|KEY|FULLTEXT|SPATIAL [name] [USING m] (cols) [spec...] [state...]`
    fn parse_index(&mut self) -> Result<Index, ParserError> {
        let index_type = self.expect_one_of_keywords(&[
            Keyword::PRIMARY,
            Keyword::UNIQUE,
            Keyword::INDEX,
            Keyword::KEY,
            Keyword::FULLTEXT,
            Keyword::SPATIAL,
        ])?;
        let mut index = match index_type {
            Keyword::PRIMARY => {
                self.expect_keyword(Keyword::KEY)?;
                Index::new(IndexType::Primary)
            }
            Keyword::INDEX => Index::new(IndexType::Plain).with_keyword(IndexKeyword::Index),
            Keyword::KEY => Index::new(IndexType::Plain).with_keyword(IndexKeyword::Key),
            _ => {
                let index_type = match index_type {
                    Keyword::UNIQUE => IndexType::Unique,
                    Keyword::FULLTEXT => IndexType::Fulltext,
                    _ => IndexType::Spatial,
                };
                let mut index = Index::new(index_type);
                index.keyword = self.parse_index_keyword();
                index
            }
        };

        if !matches!(self.peek_token().token, Token::LParen) && !self.peek_keyword(Keyword::USING)
        {
            index.name = Some(self.parse_identifier(false)?);
        }
        if self.parse_keyword(Keyword::USING) {
            index.using = Some(self.parse_identifier(false)?);
        }
        index.columns = self.parse_parenthesized(|p| {
            p.parse_comma_separated_with_trailing_commas(Parser::parse_index_column, false)
        })?;
        index.index_spec = self.parse_index_specs()?;
        index.characteristics = self.parse_constraint_states();
        Ok(index)
    }

    /// `name [(length)] [ASC|DESC]`
    fn parse_index_column(&mut self) -> Result<IndexColumn, ParserError> {
        let mut column = IndexColumn::new(self.parse_identifier(false)?);
        if self.consume_token(&Token::LParen) {
            let next_token = self.next_token();
            match next_token.token {
                Token::Number(n, _) => column.length = Some(n),
                _ => return self.expected("an index prefix length", next_token),
            }
            self.expect_token(&Token::RParen)?;
        }
        column.asc = match self.parse_one_of_keywords(&[Keyword::ASC, Keyword::DESC]) {
            Some(Keyword::ASC) => Some(true),
            Some(_) => Some(false),
            None => None,
        };
        Ok(column)
    }

    /// Index options after the column list, kept in order as written
    fn parse_index_specs(&mut self) -> Result<Vec<String>, ParserError> {
        let mut specs = vec![];
        loop {
            if self.parse_keyword(Keyword::USING) {
                specs.push(format!("USING {}", self.parse_identifier(false)?));
            } else if self.parse_keyword(Keyword::KEY_BLOCK_SIZE) {
                let _ = self.parse_optional_eq();
                specs.push(format!("KEY_BLOCK_SIZE = {}", self.parse_literal_uint()?));
            } else if self.parse_keywords(&[Keyword::WITH, Keyword::PARSER]) {
                specs.push(format!("WITH PARSER {}", self.parse_identifier(false)?));
            } else if self.parse_keyword(Keyword::COMMENT) {
                specs.push(format!("COMMENT {}", self.parse_literal_string()?));
            } else if self.parse_keyword(Keyword::VISIBLE) {
                specs.push("VISIBLE".to_string());
            } else if self.parse_keyword(Keyword::INVISIBLE) {
                specs.push("INVISIBLE".to_string());
            } else {
                return Ok(specs);
            }
        }
    }

    fn parse_constraint_states(&mut self) -> Vec<ConstraintState> {
        let mut states = vec![];
        loop {
            let state = if self.parse_keyword(Keyword::DEFERRABLE) {
                ConstraintState::Deferrable
            } else if self.parse_keywords(&[Keyword::NOT, Keyword::DEFERRABLE]) {
                ConstraintState::NotDeferrable
            } else if self.parse_keywords(&[Keyword::INITIALLY, Keyword::DEFERRED]) {
                ConstraintState::InitiallyDeferred
            } else if self.parse_keywords(&[Keyword::INITIALLY, Keyword::IMMEDIATE]) {
                ConstraintState::InitiallyImmediate
            } else if self.parse_keyword(Keyword::ENABLE) {
                ConstraintState::Enable
            } else if self.parse_keyword(Keyword::DISABLE) {
                ConstraintState::Disable
            } else if self.parse_keyword(Keyword::VALIDATE) {
                ConstraintState::Validate
            } else if self.parse_keyword(Keyword::NOVALIDATE) {
                ConstraintState::NoValidate
            } else {
                return states;
            };
            states.push(state);
        }
    }

    /// `KEY (cols) REFERENCES table [(cols)] [ON UPDATE|DELETE action]...`,
    /// after `FOREIGN`
    fn parse_foreign_key(&mut self) -> Result<ForeignKeyIndex, ParserError> {
        self.expect_keyword(Keyword::KEY)?;
        let columns = self.parse_parenthesized_identifiers()?;
        self.expect_keyword(Keyword::REFERENCES)?;
        let foreign_table = self.parse_object_name()?;
        let referred_columns = if matches!(self.peek_token().token, Token::LParen) {
            self.parse_parenthesized_identifiers()?
        } else {
            vec![]
        };
        let mut fk = ForeignKeyIndex::new(columns, foreign_table, referred_columns);
        loop {
            let location = self.peek_token().location;
            if !self.parse_keyword(Keyword::ON) {
                break;
            }
            let kind = match self.expect_one_of_keywords(&[Keyword::UPDATE, Keyword::DELETE])? {
                Keyword::UPDATE => ReferentialActionKind::Update,
                _ => ReferentialActionKind::Delete,
            };
            if fk.referential_action(kind).is_some() {
                return parser_err!(format!("Duplicate {kind} clause"), location);
            }
            let action = self.parse_referential_action()?;
            fk.set_referential_action(kind, action);
        }
        fk.characteristics = self.parse_constraint_states();
        Ok(fk)
    }

    fn parse_referential_action(&mut self) -> Result<ReferentialActionOption, ParserError> {
        if self.parse_keyword(Keyword::RESTRICT) {
            Ok(ReferentialActionOption::Restrict)
        } else if self.parse_keyword(Keyword::CASCADE) {
            Ok(ReferentialActionOption::Cascade)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::NULL]) {
            Ok(ReferentialActionOption::SetNull)
        } else if self.parse_keywords(&[Keyword::NO, Keyword::ACTION]) {
            Ok(ReferentialActionOption::NoAction)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
            Ok(ReferentialActionOption::SetDefault)
        } else {
            self.expected(
                "one of RESTRICT, CASCADE, SET NULL, NO ACTION or SET DEFAULT",
                self.peek_token(),
            )
        }
    }

    fn parse_alter_alter(&mut self) -> Result<AlterExpression, ParserError> {
        if self.parse_keyword(Keyword::INDEX) {
            let name = self.parse_identifier(false)?;
            let visible = match self.expect_one_of_keywords(&[Keyword::VISIBLE, Keyword::INVISIBLE])? {
                Keyword::VISIBLE => true,
                _ => false,
            };
            return Ok(AlterExpression::AlterIndex { name, visible });
        }
        if let Some(keyword) = self.parse_one_of_keywords(&[Keyword::CONSTRAINT, Keyword::CHECK]) {
            let keyword = if keyword == Keyword::CONSTRAINT {
                AlterConstraintKeyword::Constraint
            } else {
                AlterConstraintKeyword::Check
            };
            let name = self.parse_identifier(false)?;
            let enforced = !self.parse_keyword(Keyword::NOT);
            self.expect_keyword(Keyword::ENFORCED)?;
            return Ok(AlterExpression::AlterConstraint {
                keyword,
                name,
                enforced,
            });
        }

        let column_keyword = self.parse_column_keyword();
        let column_name = self.parse_identifier(false)?;
        let action = if self.parse_keyword(Keyword::TYPE) {
            AlterColumnAction::SetDataType {
                data_type: self.parse_col_data_type()?,
                set_data_keywords: false,
            }
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DATA, Keyword::TYPE]) {
            AlterColumnAction::SetDataType {
                data_type: self.parse_col_data_type()?,
                set_data_keywords: true,
            }
        } else if self.parse_keywords(&[Keyword::SET, Keyword::DEFAULT]) {
            AlterColumnAction::SetDefault(self.parse_expr()?)
        } else if self.parse_keywords(&[Keyword::DROP, Keyword::DEFAULT]) {
            AlterColumnAction::DropDefault
        } else if self.parse_keywords(&[Keyword::SET, Keyword::NOT, Keyword::NULL]) {
            AlterColumnAction::SetNotNull
        } else if self.parse_keywords(&[Keyword::DROP, Keyword::NOT, Keyword::NULL]) {
            AlterColumnAction::DropNotNull
        } else if self.parse_keywords(&[Keyword::SET, Keyword::VISIBLE]) {
            AlterColumnAction::SetVisibility(true)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::INVISIBLE]) {
            AlterColumnAction::SetVisibility(false)
        } else if self.parse_keywords(&[Keyword::SET, Keyword::OPTIONS]) {
            AlterColumnAction::SetOptions(self.parse_parenthesized_text()?)
        } else {
            return self.expected(
                "TYPE, SET or DROP after ALTER COLUMN",
                self.peek_token(),
            );
        };
        Ok(AlterExpression::AlterColumn {
            column_keyword,
            column_name,
            action,
        })
    }

    fn parse_alter_drop(&mut self) -> Result<AlterExpression, ParserError> {
        if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
            return Ok(AlterExpression::DropPrimaryKey);
        }
        if self.parse_keyword(Keyword::UNIQUE) {
            return Ok(AlterExpression::DropUnique {
                columns: self.parse_parenthesized_identifiers()?,
            });
        }
        if self.parse_keywords(&[Keyword::FOREIGN, Keyword::KEY]) {
            let name = if self.peek_clause_end() || matches!(self.peek_token().token, Token::LParen)
            {
                None
            } else {
                Some(self.parse_identifier(false)?)
            };
            let columns = if matches!(self.peek_token().token, Token::LParen) {
                self.parse_parenthesized_identifiers()?
            } else {
                vec![]
            };
            return Ok(AlterExpression::DropForeignKey { name, columns });
        }
        if let Some(keyword) = self.parse_one_of_keywords(&[Keyword::INDEX, Keyword::KEY]) {
            let keyword = if keyword == Keyword::INDEX {
                IndexKeyword::Index
            } else {
                IndexKeyword::Key
            };
            return Ok(AlterExpression::DropIndex {
                keyword,
                name: self.parse_identifier(false)?,
            });
        }
        if self.parse_keyword(Keyword::PARTITION) {
            return Ok(AlterExpression::DropPartition {
                partitions: self.parse_partition_names()?,
            });
        }
        if self.parse_keyword(Keyword::CONSTRAINT) {
            let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
            let name = self.parse_identifier(false)?;
            return Ok(AlterExpression::DropConstraint {
                if_exists,
                name,
                drop_behavior: self.parse_drop_behavior(),
            });
        }

        let column_keyword = self.parse_column_keyword();
        let if_exists = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let column_name = self.parse_identifier(false)?;
        Ok(AlterExpression::DropColumn {
            column_keyword,
            if_exists,
            column_name,
            drop_behavior: self.parse_drop_behavior(),
        })
    }

    fn parse_drop_behavior(&mut self) -> Option<DropBehavior> {
        match self.parse_one_of_keywords(&[Keyword::CASCADE, Keyword::RESTRICT]) {
            Some(Keyword::CASCADE) => Some(DropBehavior::Cascade),
            Some(_) => Some(DropBehavior::Restrict),
            None => None,
        }
    }

    fn parse_alter_rename(&mut self) -> Result<AlterExpression, ParserError> {
        if let Some(keyword) = self.parse_one_of_keywords(&[Keyword::TO, Keyword::AS]) {
            return Ok(AlterExpression::RenameTable {
                as_keyword: keyword == Keyword::AS,
                new_name: self.parse_object_name()?,
            });
        }
        let kind = match self.parse_one_of_keywords(&[
            Keyword::INDEX,
            Keyword::KEY,
            Keyword::CONSTRAINT,
        ]) {
            Some(Keyword::INDEX) => Some(RenameKind::Index),
            Some(Keyword::KEY) => Some(RenameKind::Key),
            Some(_) => Some(RenameKind::Constraint),
            None => None,
        };
        let column_keyword = match kind {
            Some(_) => ColumnKeyword::None,
            None => self.parse_column_keyword(),
        };
        let old_name = self.parse_identifier(false)?;
        self.expect_keyword(Keyword::TO)?;
        let new_name = self.parse_identifier(false)?;
        Ok(match kind {
            Some(kind) => AlterExpression::RenameObject {
                kind,
                old_name,
                new_name,
            },
            None => AlterExpression::RenameColumn {
                column_keyword,
                old_name,
                new_name,
            },
        })
    }

    /// `[=] collation`, after `[DEFAULT] COLLATE`
    fn parse_alter_collate(&mut self, default: bool) -> Result<AlterExpression, ParserError> {
        Ok(AlterExpression::Collate {
            default,
            equals: self.parse_optional_eq(),
            collation: self.parse_identifier(false)?,
        })
    }

    /// `[=] charset [COLLATE [=] collation]`, after `[DEFAULT] CHARACTER SET`
    fn parse_alter_character_set(&mut self, default: bool) -> Result<AlterExpression, ParserError> {
        let equals = self.parse_optional_eq();
        let character_set = self.parse_identifier(false)?;
        Ok(AlterExpression::Convert {
            convert_to: false,
            default,
            equals,
            character_set,
            collate: self.parse_optional_character_set_collate()?,
        })
    }

    fn parse_optional_character_set_collate(
        &mut self,
    ) -> Result<Option<CharacterSetCollate>, ParserError> {
        if !self.parse_keyword(Keyword::COLLATE) {
            return Ok(None);
        }
        Ok(Some(CharacterSetCollate {
            equals: self.parse_optional_eq(),
            collation: self.parse_identifier(false)?,
        }))
    }

    /// Parse `p1, p2, ...`. A comma followed by the start of another clause
    /// ends the list.
    fn parse_partition_names(&mut self) -> Result<Vec<Ident>, ParserError> {
        let mut partitions = vec![self.parse_identifier(false)?];
        while matches!(self.peek_token().token, Token::Comma) {
            let clause_follows = match self.peek_nth_token(1).token {
                Token::Word(w) => {
                    w.quote_style.is_none() && ALTER_CLAUSE_KEYWORDS.contains(&w.keyword)
                }
                _ => false,
            };
            if clause_follows {
                break;
            }
            self.next_token();
            partitions.push(self.parse_identifier(false)?);
        }
        Ok(partitions)
    }

    fn parse_parenthesized_partition_definitions(
        &mut self,
    ) -> Result<Vec<PartitionDefinition>, ParserError> {
        self.parse_parenthesized(|p| {
            p.parse_comma_separated_with_trailing_commas(Parser::parse_partition_definition, false)
        })
    }

    /// `PARTITION name [VALUES LESS THAN (..)|MAXVALUE | VALUES IN (..)] [[STORAGE] ENGINE [=] e]`
    pub fn parse_partition_definition(&mut self) -> Result<PartitionDefinition, ParserError> {
        self.expect_keyword(Keyword::PARTITION)?;
        let mut partition = PartitionDefinition::new(self.parse_identifier(false)?);
        if self.parse_keyword(Keyword::VALUES) {
            if self.parse_keywords(&[Keyword::LESS, Keyword::THAN]) {
                partition.operation = Some(PartitionOperation::LessThan);
                partition.values = if self.parse_keyword(Keyword::MAXVALUE) {
                    vec!["MAXVALUE".to_string()]
                } else {
                    self.parse_partition_values()?
                };
            } else {
                self.expect_keyword(Keyword::IN)?;
                partition.operation = Some(PartitionOperation::In);
                partition.values = self.parse_partition_values()?;
            }
        }
        let storage = self.parse_word("STORAGE");
        if storage {
            self.expect_keyword(Keyword::ENGINE)?;
        }
        if storage || self.parse_keyword(Keyword::ENGINE) {
            let equals = self.parse_optional_eq();
            partition.storage_engine = Some(
                PartitionEngine::new(self.parse_identifier(false)?)
                    .with_storage(storage)
                    .with_equals(equals),
            );
        }
        Ok(partition)
    }

    fn parse_partition_values(&mut self) -> Result<Vec<String>, ParserError> {
        self.parse_parenthesized(|p| {
            p.parse_comma_separated_with_trailing_commas(Parser::parse_text_until_delimiter, false)
        })
    }

    /// `[LINEAR] RANGE|LIST|HASH|KEY (expr) | COLUMNS(cols) [PARTITIONS n] [(definitions)]`,
    /// after `PARTITION BY`
    fn parse_partition_by(&mut self) -> Result<PartitionBy, ParserError> {
        let linear = self.parse_keyword(Keyword::LINEAR);
        let method = match self.expect_one_of_keywords(&[
            Keyword::RANGE,
            Keyword::LIST,
            Keyword::HASH,
            Keyword::KEY,
        ])? {
            Keyword::RANGE => PartitionMethod::Range,
            Keyword::LIST => PartitionMethod::List,
            Keyword::HASH => PartitionMethod::Hash,
            _ => PartitionMethod::Key,
        };
        let key = if self.parse_keyword(Keyword::COLUMNS) {
            PartitionKey::Columns {
                columns_keyword: true,
                columns: self.parse_parenthesized_identifiers()?,
            }
        } else if method == PartitionMethod::Key {
            PartitionKey::Columns {
                columns_keyword: false,
                columns: self.parse_parenthesized_identifiers()?,
            }
        } else {
            PartitionKey::Expression(self.parse_parenthesized(Parser::parse_expr)?)
        };
        let mut partition_by = PartitionBy::new(method, key);
        partition_by.linear = linear;
        if self.parse_keyword(Keyword::PARTITIONS) {
            partition_by.partition_count = Some(self.parse_literal_uint()?);
        }
        if matches!(self.peek_token().token, Token::LParen) {
            partition_by.partitions = self.parse_parenthesized_partition_definitions()?;
        }
        Ok(partition_by)
    }
}
