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
//! Test SQL syntax specific to Oracle. The parser based on the generic
//! dialect is also tested (on the inputs it can handle).

use pretty_assertions::assert_eq;

use sqlalter::ast::*;
use sqlalter::dialect::{GenericDialect, OracleDialect};
use test_utils::*;

#[macro_use]
mod test_utils;

fn oracle() -> TestedDialects {
    TestedDialects::new(vec![Box::new(OracleDialect {})])
}

fn oracle_and_generic() -> TestedDialects {
    TestedDialects::new(vec![Box::new(OracleDialect {}), Box::new(GenericDialect {})])
}

#[test]
fn parse_parenthesized_modify() {
    let expression = alter_expression_with_name(
        oracle_and_generic().verified_stmt(
            "ALTER TABLE employees MODIFY (salary number (10, 2) DEFAULT 0, hire_date DEFAULT sysdate, b DROP DEFAULT)",
        ),
        "employees",
    );
    assert_eq!(
        expression,
        AlterExpression::Modify {
            column_keyword: ColumnKeyword::None,
            parenthesized: true,
            columns: vec![
                ColumnDataType::new("salary")
                    .with_data_type(
                        ColDataType::new("number")
                            .with_argument("10")
                            .with_argument("2")
                    )
                    .with_spec("DEFAULT")
                    .with_spec("0"),
                ColumnDataType::new("hire_date")
                    .with_spec("DEFAULT")
                    .with_spec("sysdate"),
                ColumnDataType::new("b").with_spec("DROP").with_spec("DEFAULT"),
            ],
        }
    );

    assert_eq!(
        alter_expression_with_name(
            oracle().verified_stmt("ALTER TABLE a MODIFY (COLUMN b DROP NOT NULL, COLUMN c DROP NOT NULL)"),
            "a",
        ),
        AlterExpression::Modify {
            column_keyword: ColumnKeyword::None,
            parenthesized: true,
            columns: vec![
                ColumnDataType::new("b")
                    .with_column_keyword(ColumnKeyword::Column)
                    .with_spec("DROP")
                    .with_spec("NOT")
                    .with_spec("NULL"),
                ColumnDataType::new("c")
                    .with_column_keyword(ColumnKeyword::Column)
                    .with_spec("DROP")
                    .with_spec("NOT")
                    .with_spec("NULL"),
            ],
        }
    );
    oracle().verified_stmt("ALTER TABLE t MODIFY (COLUMN a varchar2 (10), b DEFAULT 1)");
}

#[test]
fn parse_parenthesized_add() {
    match alter_expression_with_name(
        oracle().verified_stmt("ALTER TABLE hr.emp$hist ADD (col# number, note varchar2 (100) NOT NULL)"),
        "hr.emp$hist",
    ) {
        AlterExpression::AddColumns {
            column_keyword,
            parenthesized,
            columns,
            ..
        } => {
            assert_eq!(column_keyword, ColumnKeyword::None);
            assert!(parenthesized);
            assert_eq!(columns[0].column_name, Ident::new("col#"));
            assert_eq!(columns.len(), 2);
        }
        other => panic!("Expected ADD, got {other:?}"),
    }
}

#[test]
fn parse_constraint_states() {
    let fk = match alter_expression(oracle().verified_stmt(
        "ALTER TABLE tab ADD CONSTRAINT fk_dept FOREIGN KEY (dept_id) REFERENCES departments(id) ENABLE NOVALIDATE",
    )) {
        AlterExpression::AddConstraint(TableConstraint::ForeignKey(fk)) => fk,
        other => panic!("Expected FOREIGN KEY, got {other:?}"),
    };
    assert_eq!(
        fk.characteristics,
        vec![ConstraintState::Enable, ConstraintState::NoValidate]
    );

    assert_eq!(
        alter_expression(oracle().verified_stmt("ALTER TABLE tab ADD CONSTRAINT pk_tab PRIMARY KEY (id) DISABLE")),
        AlterExpression::add_constraint(NamedConstraint::new(
            Some("pk_tab".into()),
            Index::new(IndexType::Primary)
                .with_column(IndexColumn::new("id"))
                .with_characteristic(ConstraintState::Disable)
        ))
    );

    let index = match alter_expression(
        oracle_and_generic().verified_stmt("ALTER TABLE tab ADD PRIMARY KEY (id) DEFERRABLE NOVALIDATE"),
    ) {
        AlterExpression::AddConstraint(TableConstraint::Index(index)) => index,
        other => panic!("Expected PRIMARY KEY, got {other:?}"),
    };
    assert_eq!(index.index_type, IndexType::Primary);
    assert_eq!(index.columns, vec![IndexColumn::new("id")]);
    assert!(index.index_spec.is_empty());
    assert_eq!(
        index.characteristics,
        vec![ConstraintState::Deferrable, ConstraintState::NoValidate]
    );

    oracle().verified_stmt(
        "ALTER TABLE tab ADD CONSTRAINT ck_sal CHECK (salary > 0)",
    );
    oracle().verified_stmt("ALTER TABLE tab DROP CONSTRAINT ck_sal");
}

#[test]
fn parse_move_is_kept_as_written() {
    assert_eq!(
        alter_expression(oracle().verified_stmt("ALTER TABLE tab MOVE TABLESPACE users")),
        AlterExpression::Unspecific("MOVE TABLESPACE users".to_string())
    );
    assert_eq!(
        alter_expression(oracle().one_statement_parses_to(
            "ALTER TABLE tab MOVE   ONLINE  COMPRESS",
            "ALTER TABLE tab MOVE ONLINE COMPRESS",
        ))
        .operation(),
        AlterOperation::Unspecific
    );
}

#[test]
fn parse_synonyms() {
    let synonym = match oracle().verified_stmt("CREATE PUBLIC SYNONYM emp FOR hr.employees") {
        Statement::CreateSynonym(synonym) => synonym,
        other => panic!("Expected CREATE SYNONYM, got {other:?}"),
    };
    assert_eq!(
        synonym,
        CreateSynonym::new("emp", ObjectName(vec!["hr".into(), "employees".into()]))
            .with_public(true)
    );
    oracle().verified_stmt("CREATE OR REPLACE SYNONYM sales.offices FOR hr.locations");
}

#[test]
fn parse_explain_plan_for() {
    match oracle().verified_stmt("EXPLAIN PLAN FOR SELECT last_name FROM employees WHERE id = 7") {
        Statement::Explain(explain) => {
            assert_eq!(
                explain.options,
                vec![ExplainOption::new(ExplainOptionType::PlanFor)]
            );
            assert!(explain.option(ExplainOptionType::Analyze).is_none());
        }
        other => panic!("Expected EXPLAIN, got {other:?}"),
    }
}

#[test]
fn parse_oracle_quoted_identifiers() {
    oracle().verified_stmt(r#"ALTER TABLE "Emp" RENAME COLUMN "Sal" TO salary"#);
    oracle().verified_stmt("ALTER TABLE tab COMMENT = 'payroll'");
}
