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
//! Test SQL syntax specific to PostgreSQL. The parser based on the
//! generic dialect is also tested (on the inputs it can handle).

use pretty_assertions::assert_eq;

use sqlalter::ast::*;
use sqlalter::dialect::{GenericDialect, PostgreSqlDialect};
use sqlalter::parser::ParserError;
use test_utils::*;

#[macro_use]
mod test_utils;

fn pg() -> TestedDialects {
    TestedDialects::new(vec![Box::new(PostgreSqlDialect {})])
}

fn pg_and_generic() -> TestedDialects {
    TestedDialects::new(vec![
        Box::new(PostgreSqlDialect {}),
        Box::new(GenericDialect {}),
    ])
}

#[test]
fn parse_alter_table_if_exists_only() {
    let alter = pg_and_generic()
        .verified_alter("ALTER TABLE IF EXISTS ONLY public.users ALTER COLUMN email TYPE varchar (320)");
    assert!(alter.if_exists);
    assert!(alter.only);
    assert_eq!(alter.table.to_string(), "public.users");
    assert_eq!(
        alter.expressions,
        vec![AlterExpression::AlterColumn {
            column_keyword: ColumnKeyword::Column,
            column_name: "email".into(),
            action: AlterColumnAction::SetDataType {
                data_type: ColDataType::new("varchar").with_argument("320"),
                set_data_keywords: false,
            },
        }]
    );

    let alter = pg().verified_alter("ALTER TABLE ONLY users DROP COLUMN legacy");
    assert!(!alter.if_exists);
    assert!(alter.only);
}

#[test]
fn parse_alter_column_forms() {
    let alter = pg().verified_alter(
        "ALTER TABLE users ALTER COLUMN a DROP NOT NULL, ALTER COLUMN b SET NOT NULL, ALTER c SET DATA TYPE bigint",
    );
    assert_eq!(
        alter.expressions,
        vec![
            AlterExpression::AlterColumn {
                column_keyword: ColumnKeyword::Column,
                column_name: "a".into(),
                action: AlterColumnAction::DropNotNull,
            },
            AlterExpression::AlterColumn {
                column_keyword: ColumnKeyword::Column,
                column_name: "b".into(),
                action: AlterColumnAction::SetNotNull,
            },
            AlterExpression::AlterColumn {
                column_keyword: ColumnKeyword::None,
                column_name: "c".into(),
                action: AlterColumnAction::SetDataType {
                    data_type: ColDataType::new("bigint"),
                    set_data_keywords: true,
                },
            },
        ]
    );

    match alter_expression(pg().verified_stmt("ALTER TABLE tab ALTER COLUMN created SET DEFAULT now()")) {
        AlterExpression::AlterColumn {
            action: AlterColumnAction::SetDefault(default),
            ..
        } => assert_eq!(default, call("now", [])),
        other => panic!("Expected SET DEFAULT, got {other:?}"),
    }
    pg().verified_stmt("ALTER TABLE tab ALTER COLUMN status SET DEFAULT 'active'");
    pg().verified_stmt("ALTER TABLE tab ALTER COLUMN ts TYPE timestamp without time zone");
    pg().verified_stmt("ALTER TABLE tab ADD COLUMN tags character varying (40) NOT NULL");
}

#[test]
fn parse_double_quoted_identifiers() {
    assert_eq!(
        alter_expression_with_name(
            pg().verified_stmt(r#"ALTER TABLE "users" RENAME COLUMN "Name" TO "full_name""#),
            r#""users""#
        ),
        AlterExpression::rename_column(
            Ident::with_quote('"', "Name"),
            Ident::with_quote('"', "full_name")
        )
    );
    pg().verified_stmt(r#"ALTER TABLE "Orders" RENAME TO "orders_2020""#);
}

#[test]
fn parse_constraints_with_characteristics() {
    assert_eq!(
        alter_expression(pg().verified_stmt("ALTER TABLE tab DROP CONSTRAINT IF EXISTS fk_owner CASCADE")),
        AlterExpression::DropConstraint {
            if_exists: true,
            name: "fk_owner".into(),
            drop_behavior: Some(DropBehavior::Cascade),
        }
    );

    assert_eq!(
        alter_expression(pg().verified_stmt(
            "ALTER TABLE tab ADD CONSTRAINT uq_email UNIQUE (email) DEFERRABLE INITIALLY DEFERRED"
        )),
        AlterExpression::add_constraint(NamedConstraint::new(
            Some("uq_email".into()),
            Index::new(IndexType::Unique)
                .with_column(IndexColumn::new("email"))
                .with_characteristic(ConstraintState::Deferrable)
                .with_characteristic(ConstraintState::InitiallyDeferred)
        ))
    );

    let fk = match alter_expression(pg().verified_stmt(
        "ALTER TABLE tab ADD CONSTRAINT fk_owner FOREIGN KEY (owner_id) REFERENCES accounts(id) ON DELETE NO ACTION NOT DEFERRABLE",
    )) {
        AlterExpression::AddConstraint(TableConstraint::ForeignKey(fk)) => fk,
        other => panic!("Expected FOREIGN KEY, got {other:?}"),
    };
    assert_eq!(fk.characteristics, vec![ConstraintState::NotDeferrable]);
    assert_eq!(
        fk.referential_action(ReferentialActionKind::Delete),
        Some(ReferentialActionOption::NoAction)
    );

    pg().verified_stmt("ALTER TABLE tab ADD CONSTRAINT positive_price CHECK (price > 0 OR price IS NULL)");
}

#[test]
fn parse_postgres_errors() {
    assert_eq!(
        pg().parse_sql_statements("ALTER TABLE t ALTER COLUMN c SET"),
        Err(ParserError::ParserError(
            "Expected: TYPE, SET or DROP after ALTER COLUMN, found: SET at Line: 1, Column: 30"
                .to_string()
        ))
    );
    assert_eq!(
        pg().parse_sql_statements("ALTER TABLE t DROP CONSTRAINT IF EXISTS"),
        Err(ParserError::ParserError(
            "Expected: identifier, found: EOF".to_string()
        ))
    );
}
