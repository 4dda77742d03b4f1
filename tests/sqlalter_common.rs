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

#![warn(clippy::all)]
//! Test SQL syntax, which all sqlalter dialects must parse in the same way.
//!
//! Note that it does not mean all SQL here is valid in all the dialects, only
//! that 1) it's either standard or widely supported and 2) it can be parsed by
//! sqlalter regardless of the chosen dialect (i.e. it doesn't conflict with
//! dialect-specific parsing rules).

mod test_utils;

use matches::assert_matches;
use pretty_assertions::assert_eq;
use sqlalter::ast::*;
use sqlalter::dialect::{GenericDialect, OracleDialect};
use sqlalter::parser::{Parser, ParserError, ParserOptions};

use test_utils::*;

#[test]
fn parse_add_column() {
    init_logger();
    let sql = "ALTER TABLE mytable ADD COLUMN mycolumn varchar(255)";
    let canonical = "ALTER TABLE mytable ADD COLUMN mycolumn varchar (255)";
    let expression = alter_expression_with_name(
        all_dialects().one_statement_parses_to(sql, canonical),
        "mytable",
    );
    assert_eq!(
        expression,
        AlterExpression::add_column(
            ColumnDataType::new("mycolumn")
                .with_data_type(ColDataType::new("varchar").with_argument("255"))
        )
    );
    assert_eq!(expression.operation(), AlterOperation::Add);

    match alter_expression_with_name(
        all_dialects().verified_stmt("ALTER TABLE mytable ADD mycolumn varchar (255)"),
        "mytable",
    ) {
        AlterExpression::AddColumns {
            column_keyword,
            if_not_exists,
            parenthesized,
            columns,
        } => {
            assert_eq!(column_keyword, ColumnKeyword::None);
            assert!(!if_not_exists);
            assert!(!parenthesized);
            assert_eq!(columns.len(), 1);
        }
        other => panic!("Expected ADD COLUMN, got {other:?}"),
    }
}

#[test]
fn parse_add_columns_variants() {
    match alter_expression(
        all_dialects().verified_stmt("ALTER TABLE tab ADD COLUMNS (col1 int, col2 varchar (10) NOT NULL)"),
    ) {
        AlterExpression::AddColumns {
            column_keyword,
            parenthesized,
            columns,
            ..
        } => {
            assert_eq!(column_keyword, ColumnKeyword::Columns);
            assert!(parenthesized);
            assert_eq!(
                columns,
                vec![
                    ColumnDataType::new("col1").with_data_type(ColDataType::new("int")),
                    ColumnDataType::new("col2")
                        .with_data_type(ColDataType::new("varchar").with_argument("10"))
                        .with_spec("NOT")
                        .with_spec("NULL"),
                ]
            );
        }
        other => panic!("Expected ADD COLUMNS, got {other:?}"),
    }

    assert_matches!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ADD COLUMN IF NOT EXISTS c int")),
        AlterExpression::AddColumns {
            if_not_exists: true,
            ..
        }
    );

    all_dialects().verified_stmt("ALTER TABLE tab ADD COLUMN ts timestamp with time zone");
    all_dialects().verified_stmt("ALTER TABLE tab ADD COLUMN amount double precision DEFAULT 0");
    all_dialects().verified_stmt("ALTER TABLE db.tab ADD COLUMN c decimal (10, 2)");
}

#[test]
fn parse_drop_column_and_friends() {
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DROP COLUMN c")),
        AlterExpression::drop_column("c")
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DROP COLUMN IF EXISTS c CASCADE")),
        AlterExpression::DropColumn {
            column_keyword: ColumnKeyword::Column,
            if_exists: true,
            column_name: "c".into(),
            drop_behavior: Some(DropBehavior::Cascade),
        }
    );
    assert_matches!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DROP c")),
        AlterExpression::DropColumn {
            column_keyword: ColumnKeyword::None,
            ..
        }
    );

    let drops = [
        ("ALTER TABLE tab DROP PRIMARY KEY", AlterOperation::DropPrimaryKey),
        ("ALTER TABLE tab DROP UNIQUE (a, b)", AlterOperation::DropUnique),
        ("ALTER TABLE tab DROP FOREIGN KEY fk_name", AlterOperation::DropForeignKey),
        ("ALTER TABLE tab DROP FOREIGN KEY (a)", AlterOperation::DropForeignKey),
        ("ALTER TABLE tab DROP INDEX idx", AlterOperation::Drop),
        ("ALTER TABLE tab DROP KEY idx", AlterOperation::Drop),
        ("ALTER TABLE tab DROP CONSTRAINT IF EXISTS ck RESTRICT", AlterOperation::Drop),
    ];
    for (sql, operation) in drops {
        assert_eq!(alter_expression(all_dialects().verified_stmt(sql)).operation(), operation);
    }

    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DROP FOREIGN KEY fk_name")),
        AlterExpression::DropForeignKey {
            name: Some("fk_name".into()),
            columns: vec![],
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DROP KEY idx")),
        AlterExpression::DropIndex {
            keyword: IndexKeyword::Key,
            name: "idx".into(),
        }
    );
}

#[test]
fn parse_rename() {
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab RENAME COLUMN a TO b")),
        AlterExpression::rename_column("a", "b")
    );
    assert_matches!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab RENAME a TO b")),
        AlterExpression::RenameColumn {
            column_keyword: ColumnKeyword::None,
            ..
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab RENAME TO db.new_tab")),
        AlterExpression::RenameTable {
            as_keyword: false,
            new_name: ObjectName(vec!["db".into(), "new_tab".into()]),
        }
    );

    for (sql, operation) in [
        ("ALTER TABLE tab RENAME AS new_tab", AlterOperation::RenameTable),
        ("ALTER TABLE tab RENAME INDEX i1 TO i2", AlterOperation::RenameIndex),
        ("ALTER TABLE tab RENAME KEY k1 TO k2", AlterOperation::RenameKey),
        ("ALTER TABLE tab RENAME CONSTRAINT c1 TO c2", AlterOperation::RenameConstraint),
    ] {
        assert_eq!(alter_expression(all_dialects().verified_stmt(sql)).operation(), operation);
    }
}

#[test]
fn parse_alter_column_actions() {
    let cases = [
        (
            "ALTER TABLE tab ALTER COLUMN c SET DEFAULT 100",
            AlterColumnAction::SetDefault(Expr::value(number("100"))),
        ),
        ("ALTER TABLE tab ALTER COLUMN c DROP DEFAULT", AlterColumnAction::DropDefault),
        ("ALTER TABLE tab ALTER COLUMN c SET NOT NULL", AlterColumnAction::SetNotNull),
        ("ALTER TABLE tab ALTER COLUMN c DROP NOT NULL", AlterColumnAction::DropNotNull),
        ("ALTER TABLE tab ALTER COLUMN c SET INVISIBLE", AlterColumnAction::SetVisibility(false)),
        (
            "ALTER TABLE tab ALTER COLUMN c TYPE varchar (20)",
            AlterColumnAction::SetDataType {
                data_type: ColDataType::new("varchar").with_argument("20"),
                set_data_keywords: false,
            },
        ),
        (
            "ALTER TABLE tab ALTER COLUMN c SET DATA TYPE int",
            AlterColumnAction::SetDataType {
                data_type: ColDataType::new("int"),
                set_data_keywords: true,
            },
        ),
    ];
    for (sql, expected_action) in cases {
        match alter_expression(all_dialects().verified_stmt(sql)) {
            AlterExpression::AlterColumn {
                column_keyword,
                column_name,
                action,
            } => {
                assert_eq!(column_keyword, ColumnKeyword::Column);
                assert_eq!(column_name, Ident::new("c"));
                assert_eq!(action, expected_action, "{sql}");
            }
            other => panic!("Expected ALTER COLUMN, got {other:?}"),
        }
    }

    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ALTER INDEX idx INVISIBLE")),
        AlterExpression::AlterIndex {
            name: "idx".into(),
            visible: false,
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ALTER CONSTRAINT ck NOT ENFORCED")),
        AlterExpression::AlterConstraint {
            keyword: AlterConstraintKeyword::Constraint,
            name: "ck".into(),
            enforced: false,
        }
    );
    all_dialects().verified_stmt("ALTER TABLE tab ALTER CHECK ck ENFORCED");
}

#[test]
fn parse_add_constraints() {
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ADD PRIMARY KEY (id)")),
        AlterExpression::add_constraint(
            Index::new(IndexType::Primary).with_column(IndexColumn::new("id"))
        )
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ADD CONSTRAINT pk PRIMARY KEY (id)")),
        AlterExpression::add_constraint(NamedConstraint::new(
            Some("pk".into()),
            Index::new(IndexType::Primary).with_column(IndexColumn::new("id"))
        ))
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ADD UNIQUE KEY uk (a, b)")),
        AlterExpression::add_constraint(
            Index::new(IndexType::Unique)
                .with_keyword(IndexKeyword::Key)
                .with_name("uk")
                .with_column(IndexColumn::new("a"))
                .with_column(IndexColumn::new("b"))
        )
    );

    let index = match alter_expression(
        all_dialects().verified_stmt("ALTER TABLE tab ADD INDEX idx (a, b(10) DESC)"),
    ) {
        AlterExpression::AddConstraint(TableConstraint::Index(index)) => index,
        other => panic!("Expected ADD INDEX, got {other:?}"),
    };
    assert_eq!(index.column_names(), vec!["a", "b"]);
    assert_eq!(index.columns[1].length.as_deref(), Some("10"));
    assert_eq!(index.columns[1].asc, Some(false));

    all_dialects().verified_stmt("ALTER TABLE tab ADD CONSTRAINT UNIQUE (a)");
    all_dialects().verified_stmt("ALTER TABLE tab ADD KEY k (a)");
    all_dialects().verified_stmt("ALTER TABLE tab ADD CHECK (a > 0)");
    match alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ADD CONSTRAINT ck CHECK (a > 0 AND b IS NOT NULL)")) {
        AlterExpression::AddConstraint(TableConstraint::Check(check)) => {
            assert_eq!(check.name, Some(Ident::new("ck")));
            assert_eq!(check.expression.to_string(), "a > 0 AND b IS NOT NULL");
        }
        other => panic!("Expected CHECK constraint, got {other:?}"),
    }
}

#[test]
fn parse_add_foreign_key() {
    let sql = "ALTER TABLE test ADD FOREIGN KEY (user_id) REFERENCES ra_user (id) ON DELETE CASCADE";
    let fk = match alter_expression_with_name(all_dialects().verified_stmt(sql), "test") {
        AlterExpression::AddConstraint(TableConstraint::ForeignKey(fk)) => fk,
        other => panic!("Expected FOREIGN KEY, got {other:?}"),
    };
    assert_eq!(fk.name, None);
    assert_eq!(fk.columns, vec![Ident::new("user_id")]);
    assert_eq!(fk.foreign_table, ObjectName::from("ra_user"));
    assert_eq!(fk.referred_columns, vec![Ident::new("id")]);
    assert_eq!(
        fk.referential_action(ReferentialActionKind::Delete),
        Some(ReferentialActionOption::Cascade)
    );
    assert_eq!(fk.referential_action(ReferentialActionKind::Update), None);

    // actions keep declaration order, one per kind
    let fk = match alter_expression(all_dialects().verified_stmt(
        "ALTER TABLE tab ADD FOREIGN KEY (a) REFERENCES other (id) ON DELETE SET NULL ON UPDATE NO ACTION",
    )) {
        AlterExpression::AddConstraint(TableConstraint::ForeignKey(fk)) => fk,
        other => panic!("Expected FOREIGN KEY, got {other:?}"),
    };
    assert_eq!(
        fk.referential_actions,
        vec![
            ReferentialAction {
                kind: ReferentialActionKind::Delete,
                action: ReferentialActionOption::SetNull,
            },
            ReferentialAction {
                kind: ReferentialActionKind::Update,
                action: ReferentialActionOption::NoAction,
            },
        ]
    );
    let res = all_dialects().parse_sql_statements(
        "ALTER TABLE tab ADD FOREIGN KEY (a) REFERENCES other (id) ON DELETE SET NULL ON UPDATE NO ACTION ON DELETE RESTRICT",
    );
    assert_eq!(
        ParserError::ParserError(
            "Duplicate ON DELETE clause at Line: 1, Column: 98".to_string()
        ),
        res.unwrap_err()
    );

    // named constraints keep the referenced table and its columns together
    all_dialects().one_statement_parses_to(
        "ALTER TABLE tab ADD CONSTRAINT fk FOREIGN KEY (a) REFERENCES other (id) ON UPDATE SET DEFAULT",
        "ALTER TABLE tab ADD CONSTRAINT fk FOREIGN KEY (a) REFERENCES other(id) ON UPDATE SET DEFAULT",
    );
    all_dialects().verified_stmt("ALTER TABLE tab ADD FOREIGN KEY (customer_id) REFERENCES customers");
}

#[test]
fn parse_modify_and_change() {
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab MODIFY COLUMN c int NOT NULL")),
        AlterExpression::Modify {
            column_keyword: ColumnKeyword::Column,
            parenthesized: false,
            columns: vec![ColumnDataType::new("c")
                .with_data_type(ColDataType::new("int"))
                .with_spec("NOT")
                .with_spec("NULL")],
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab CHANGE COLUMN old_c new_c varchar (10)")),
        AlterExpression::Change {
            column_keyword: ColumnKeyword::Column,
            old_name: "old_c".into(),
            column: ColumnDataType::new("new_c")
                .with_data_type(ColDataType::new("varchar").with_argument("10")),
        }
    );
    all_dialects().verified_stmt("ALTER TABLE tab MODIFY c varchar (10)");
    all_dialects().verified_stmt("ALTER TABLE tab CHANGE old_c new_c int NOT NULL");
}

#[test]
fn parse_table_options() {
    let alter = all_dialects().one_statement_parses_to(
        "ALTER TABLE tbl_name FORCE, ENGINE=InnoDB, ALGORITHM=INPLACE, LOCK=NONE",
        "ALTER TABLE tbl_name FORCE, ENGINE = InnoDB, ALGORITHM = INPLACE, LOCK = NONE",
    );
    match alter {
        Statement::Alter(alter) => {
            assert_eq!(
                alter.operations(),
                vec![
                    AlterOperation::Force,
                    AlterOperation::Engine,
                    AlterOperation::Algorithm,
                    AlterOperation::Lock
                ]
            );
            assert_eq!(alter.expressions[1], AlterExpression::engine("InnoDB"));
        }
        other => panic!("Expected ALTER TABLE, got {other:?}"),
    }

    all_dialects().verified_stmt("ALTER TABLE tbl_name ALGORITHM INSTANT");
    all_dialects().verified_stmt("ALTER TABLE tbl_name LOCK SHARED");
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab COMMENT = 'users'")),
        AlterExpression::comment("users")
    );
    all_dialects().verified_stmt("ALTER TABLE tab COMMENT 'users'");
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab KEY_BLOCK_SIZE = 8")),
        AlterExpression::KeyBlockSize {
            equals: true,
            size: 8,
        }
    );

    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ROW_FORMAT = DYNAMIC")),
        AlterExpression::table_option("ROW_FORMAT", Expr::ident("DYNAMIC"))
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab AUTO_INCREMENT = 100")),
        AlterExpression::table_option("auto_increment", Expr::value(number("100")))
    );
    match alter_expression(all_dialects().verified_stmt("ALTER TABLE tab ENCRYPTION 'N'")) {
        AlterExpression::SetTableOption(option) => {
            assert_eq!(option.name, "ENCRYPTION");
            assert!(!option.equals);
        }
        other => panic!("Expected a table option, got {other:?}"),
    }

    for (sql, operation) in [
        ("ALTER TABLE tab DISCARD TABLESPACE", AlterOperation::DiscardTablespace),
        ("ALTER TABLE tab IMPORT TABLESPACE", AlterOperation::ImportTablespace),
        ("ALTER TABLE tab DISABLE KEYS", AlterOperation::DisableKeys),
        ("ALTER TABLE tab ENABLE KEYS", AlterOperation::EnableKeys),
        ("ALTER TABLE tab TABLESPACE ts1", AlterOperation::SetTableOption),
    ] {
        assert_eq!(alter_expression(all_dialects().verified_stmt(sql)).operation(), operation);
    }
}

#[test]
fn parse_collate_and_character_set() {
    assert_eq!(
        alter_expression_with_name(
            all_dialects().verified_stmt("ALTER TABLE tbl_name COLLATE = collation_name"),
            "tbl_name"
        ),
        AlterExpression::collate("collation_name")
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab DEFAULT COLLATE utf8mb4_bin")),
        AlterExpression::Collate {
            default: true,
            equals: false,
            collation: "utf8mb4_bin".into(),
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt(
            "ALTER TABLE tab CONVERT TO CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci"
        )),
        AlterExpression::Convert {
            convert_to: true,
            default: false,
            equals: false,
            character_set: "utf8mb4".into(),
            collate: Some(CharacterSetCollate {
                equals: false,
                collation: "utf8mb4_unicode_ci".into(),
            }),
        }
    );
    all_dialects().verified_stmt("ALTER TABLE tab DEFAULT CHARACTER SET = latin1");
    all_dialects().verified_stmt("ALTER TABLE tab CHARACTER SET utf8 COLLATE = utf8_bin");
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab CHARACTER SET utf8"))
            .operation(),
        AlterOperation::Convert
    );
}

#[test]
fn parse_partition_maintenance() {
    assert_eq!(
        alter_expression_with_name(
            all_dialects().verified_stmt(
                "ALTER TABLE t1 ADD PARTITION (PARTITION p3 VALUES LESS THAN (2002))"
            ),
            "t1"
        ),
        AlterExpression::add_partitions(vec![PartitionDefinition::new("p3").less_than(["2002"])])
    );

    for (sql, operation) in [
        ("ALTER TABLE tab DROP PARTITION p0, p1", AlterOperation::DropPartition),
        ("ALTER TABLE tab TRUNCATE PARTITION p0", AlterOperation::TruncatePartition),
        ("ALTER TABLE tab ANALYZE PARTITION p0, p1", AlterOperation::AnalyzePartition),
        ("ALTER TABLE tab CHECK PARTITION p0", AlterOperation::CheckPartition),
        ("ALTER TABLE tab OPTIMIZE PARTITION p0", AlterOperation::OptimizePartition),
        ("ALTER TABLE tab REBUILD PARTITION p0, p1", AlterOperation::RebuildPartition),
        ("ALTER TABLE tab REPAIR PARTITION p0", AlterOperation::RepairPartition),
        ("ALTER TABLE tab COALESCE PARTITION 2", AlterOperation::CoalescePartition),
        ("ALTER TABLE tab REMOVE PARTITIONING", AlterOperation::RemovePartitioning),
        ("ALTER TABLE tab DISCARD PARTITION p1, p2 TABLESPACE", AlterOperation::DiscardPartition),
        ("ALTER TABLE tab IMPORT PARTITION p1 TABLESPACE", AlterOperation::ImportPartition),
        (
            "ALTER TABLE tab EXCHANGE PARTITION p0 WITH TABLE t2 WITH VALIDATION",
            AlterOperation::ExchangePartition,
        ),
    ] {
        assert_eq!(alter_expression(all_dialects().verified_stmt(sql)).operation(), operation);
    }

    assert_eq!(
        alter_expression(all_dialects().verified_stmt(
            "ALTER TABLE tab REORGANIZE PARTITION p0, p1 INTO (PARTITION n0 VALUES LESS THAN (5), PARTITION n1 VALUES LESS THAN (MAXVALUE))"
        )),
        AlterExpression::ReorganizePartition {
            partitions: vec!["p0".into(), "p1".into()],
            into: vec![
                PartitionDefinition::new("n0").less_than(["5"]),
                PartitionDefinition::new("n1").less_than(["MAXVALUE"]),
            ],
        }
    );
    assert_eq!(
        alter_expression(all_dialects().verified_stmt("ALTER TABLE tab COALESCE PARTITION 2")),
        AlterExpression::CoalescePartition { count: 2 }
    );
}

#[test]
fn parse_partition_by() {
    match alter_expression(all_dialects().verified_stmt("ALTER TABLE tab PARTITION BY HASH (id) PARTITIONS 4")) {
        AlterExpression::PartitionBy(by) => {
            assert!(!by.linear);
            assert_eq!(by.method, PartitionMethod::Hash);
            assert_eq!(by.key, PartitionKey::Expression(Expr::ident("id")));
            assert_eq!(by.partition_count, Some(4));
            assert!(by.partitions.is_empty());
        }
        other => panic!("Expected PARTITION BY, got {other:?}"),
    }
    all_dialects().verified_stmt("ALTER TABLE tab PARTITION BY LINEAR KEY (a, b) PARTITIONS 2");
    all_dialects().verified_stmt(
        "ALTER TABLE tab PARTITION BY RANGE COLUMNS(created_at) (PARTITION p0 VALUES LESS THAN ('2021-01-01'), PARTITION p1 VALUES LESS THAN (MAXVALUE))",
    );
    all_dialects().verified_stmt(
        "ALTER TABLE tab PARTITION BY LIST (region) (PARTITION p_east VALUES IN (1, 2, 3), PARTITION p_west VALUES IN (4, 5))",
    );
}

#[test]
fn parse_unmodelled_clause_is_kept_as_written() {
    assert_eq!(
        alter_expression_with_name(
            all_dialects().verified_stmt("ALTER TABLE t1 MOVE TABLESPACE users"),
            "t1"
        ),
        AlterExpression::Unspecific("MOVE TABLESPACE users".to_string())
    );
    let alter = all_dialects().verified_alter("ALTER TABLE t1 MOVE TABLESPACE users, FORCE");
    assert_eq!(
        alter.operations(),
        vec![AlterOperation::Unspecific, AlterOperation::Force]
    );
}

#[test]
fn parse_if_exists_and_only() {
    let alter = all_dialects().verified_alter("ALTER TABLE IF EXISTS ONLY tab DROP COLUMN c");
    assert!(alter.if_exists);
    assert!(alter.only);
    assert_eq!(alter.table, ObjectName::from("tab"));
}

#[test]
fn parse_multiple_clauses_in_order() {
    let alter = all_dialects().verified_alter(
        "ALTER TABLE tab ADD COLUMN a int, DROP COLUMN b, RENAME TO tab2, COMMENT = 'x'",
    );
    assert_eq!(
        alter.operations(),
        vec![
            AlterOperation::Add,
            AlterOperation::Drop,
            AlterOperation::RenameTable,
            AlterOperation::Comment
        ]
    );
    assert_eq!(
        alter
            .operations()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["ADD", "DROP", "RENAME_TABLE", "COMMENT"]
    );
}

#[test]
fn parse_multiple_statements() {
    let statements = all_dialects()
        .parse_sql_statements("ALTER TABLE a FORCE; ALTER TABLE b FORCE;")
        .unwrap();
    assert_eq_vec(&["ALTER TABLE a FORCE", "ALTER TABLE b FORCE"], &statements);
}

#[test]
fn build_alter_without_parsing() {
    let alter = Alter::new("orders")
        .with_if_exists(true)
        .with_expression(AlterExpression::add_column(
            ColumnDataType::new("note")
                .with_data_type(ColDataType::new("varchar").with_argument("64"))
                .with_spec("DEFAULT")
                .with_spec("'n/a'"),
        ))
        .with_expression(AlterExpression::drop_constraint("ck_total"));
    let sql = "ALTER TABLE IF EXISTS orders ADD COLUMN note varchar (64) DEFAULT 'n/a', DROP CONSTRAINT ck_total";
    assert_eq!(alter.to_string(), sql);
    assert_eq!(all_dialects().verified_alter(sql), alter);
}

#[test]
fn parse_alter_errors() {
    let res = all_dialects().parse_sql_statements("ALTER tab ADD c int");
    assert_eq!(
        ParserError::ParserError("Expected: TABLE, found: tab at Line: 1, Column: 7".to_string()),
        res.unwrap_err()
    );

    let res = all_dialects().parse_sql_statements("ALTER TABLE tab");
    assert_eq!(
        ParserError::ParserError("Expected: an ALTER TABLE operation, found: EOF".to_string()),
        res.unwrap_err()
    );

    let res = all_dialects().parse_sql_statements("ALTER TABLE tab ALTER COLUMN c RESET");
    assert_eq!(
        ParserError::ParserError(
            "Expected: TYPE, SET or DROP after ALTER COLUMN, found: RESET at Line: 1, Column: 32"
                .to_string()
        ),
        res.unwrap_err()
    );

    let res = all_dialects().parse_sql_statements("ALTER TABLE tab COALESCE PARTITION many");
    assert_eq!(
        ParserError::ParserError(
            "Expected: literal int, found: many at Line: 1, Column: 36".to_string()
        ),
        res.unwrap_err()
    );

    let res = all_dialects()
        .parse_sql_statements("ALTER TABLE tab ADD FOREIGN KEY (a) REFERENCES b (id) ON DELETE EXPLODE");
    assert!(res.is_err());
}

#[test]
fn alter_clauses_never_take_trailing_commas() {
    let dialects = TestedDialects::new_with_options(
        all_dialects().dialects,
        ParserOptions::new().with_trailing_commas(true),
    );
    assert_eq!(
        dialects.parse_sql_statements("ALTER TABLE tab DROP COLUMN a,"),
        Err(ParserError::ParserError(
            "Expected: an ALTER TABLE operation, found: EOF".to_string()
        ))
    );
}

#[test]
fn parse_deeply_nested_expression_hits_recursion_limit() {
    let sql = "ALTER TABLE tab ADD CHECK ((((((a > 0))))))";
    assert_eq!(
        all_dialects()
            .with_recursion_limit(4)
            .parse_sql_statements(sql),
        Err(ParserError::RecursionLimitExceeded)
    );
    all_dialects().verified_stmt(sql);
}

#[test]
fn parse_explain_and_describe() {
    let explain = match all_dialects().verified_stmt("EXPLAIN ANALYZE VERBOSE SELECT * FROM t") {
        Statement::Explain(explain) => explain,
        other => panic!("Expected EXPLAIN, got {other:?}"),
    };
    assert_eq!(explain.keyword, DescribeAlias::Explain);
    assert_eq!(
        explain.options,
        vec![
            ExplainOption::new(ExplainOptionType::Analyze),
            ExplainOption::new(ExplainOptionType::Verbose)
        ]
    );
    assert_matches!(explain.target, ExplainTarget::Query(_));

    all_dialects().verified_stmt("EXPLAIN FORMAT JSON SELECT a FROM t WHERE a = 1");
    all_dialects().verified_stmt("EXPLAIN COSTS FALSE SELECT a FROM t");

    for (sql, keyword) in [
        ("DESCRIBE employees", DescribeAlias::Describe),
        ("DESC employees", DescribeAlias::Desc),
        ("EXPLAIN employees", DescribeAlias::Explain),
    ] {
        match all_dialects().verified_stmt(sql) {
            Statement::Explain(explain) => {
                assert_eq!(explain.keyword, keyword);
                assert_eq!(explain.target, ExplainTarget::Table("employees".into()));
            }
            other => panic!("Expected DESCRIBE, got {other:?}"),
        }
    }
}

#[test]
fn parse_select_subset() {
    let select = all_dialects()
        .verified_only_select("SELECT a, b AS c, COUNT(*) FROM t WHERE a IN (1, 2) AND b BETWEEN 1 AND 5");
    assert!(!select.distinct);
    assert_eq!(select.projection.len(), 3);
    assert_eq!(select.projection[2], SelectItem::UnnamedExpr(call("COUNT", [Expr::Wildcard])));
    assert_eq!(select.from, Some(table("t")));
    assert_matches!(
        select.selection,
        Some(Expr::BinaryOp {
            op: BinaryOperator::And,
            ..
        })
    );

    all_dialects().verified_stmt("SELECT DISTINCT * FROM db.t AS x WHERE NOT (x.a IS NULL)");
    all_dialects().verified_stmt("FROM t");
}

#[test]
fn parse_create_synonym_where_supported() {
    let dialects = TestedDialects::new(vec![Box::new(GenericDialect {}), Box::new(OracleDialect {})]);
    match dialects.verified_stmt("CREATE OR REPLACE PUBLIC SYNONYM emp FOR hr.employees") {
        Statement::CreateSynonym(synonym) => {
            assert_eq!(
                synonym,
                CreateSynonym::new("emp", ObjectName(vec!["hr".into(), "employees".into()]))
                    .with_or_replace(true)
                    .with_public(true)
            );
        }
        other => panic!("Expected CREATE SYNONYM, got {other:?}"),
    }

    let unsupported = all_dialects_where(|d| !d.supports_create_synonym());
    assert_eq!(
        unsupported.parse_sql_statements("CREATE SYNONYM s FOR t"),
        Err(ParserError::ParserError(
            "Expected: an SQL statement, found: SYNONYM at Line: 1, Column: 8".to_string()
        ))
    );
}

#[test]
fn parse_unknown_statement() {
    assert_eq!(
        Parser::parse_sql(&GenericDialect {}, "TRUNCATE TABLE t"),
        Err(ParserError::ParserError(
            "Expected: an SQL statement, found: TRUNCATE at Line: 1, Column: 1".to_string()
        ))
    );
}
