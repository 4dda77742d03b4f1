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

//! This module defines
//! 1) a list of constants for every keyword
//! 2) an `ALL_KEYWORDS` array with every keyword in it
//!
//! This is not a list of *reserved* keywords: some of these can be
//! parsed as identifiers if the parser decides so. This means that
//! new keywords can be added here without affecting the parse result.
//!
//! As a matter of fact, most of these keywords are not used at all
//! and could be removed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines a string constant for a single keyword: `kw_def!(SELECT);`
/// expands to `pub const SELECT = "SELECT";`
macro_rules! kw_def {
    ($ident:ident = $string_keyword:expr) => {
        pub const $ident: &'static str = $string_keyword;
    };
    ($ident:ident) => {
        kw_def!($ident = stringify!($ident));
    };
}

/// Expands to a list of `kw_def!()` invocations for each keyword
/// and defines an ALL_KEYWORDS array of the defined constants.
macro_rules! define_keywords {
    ($(
        $ident:ident $(= $string_keyword:expr)?
    ),*) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            NoKeyword,
            $($ident),*
        }

        pub const ALL_KEYWORDS_INDEX: &[Keyword] = &[
            $(Keyword::$ident),*
        ];

        $(kw_def!($ident $(= $string_keyword)?);)*
        pub const ALL_KEYWORDS: &[&str] = &[
            $($ident),*
        ];
    };
}

// The following keywords should be sorted to be able to match using binary search
define_keywords!(
    ACTION,
    ADD,
    AFTER,
    AGGREGATE,
    ALGORITHM,
    ALL,
    ALTER,
    ANALYZE,
    AND,
    ARRAY,
    AS,
    ASC,
    AUTO_INCREMENT,
    AVG_ROW_LENGTH,
    BETWEEN,
    BIT,
    BUFFERS,
    BY,
    CASCADE,
    CHANGE,
    CHAR,
    CHARACTER,
    CHARSET,
    CHECK,
    CHECKSUM,
    COALESCE,
    COLLATE,
    COLUMN,
    COLUMNS,
    COMMENT,
    COMPRESSION,
    CONSTRAINT,
    CONVERT,
    COSTS,
    CREATE,
    DATA,
    DATE,
    DEFAULT,
    DEFERRABLE,
    DEFERRED,
    DELAY_KEY_WRITE,
    DELETE,
    DESC,
    DESCRIBE,
    DISABLE,
    DISCARD,
    DISTINCT,
    DOUBLE,
    DROP,
    ENABLE,
    ENCRYPTION,
    ENFORCED,
    ENGINE,
    EXCHANGE,
    EXISTS,
    EXPLAIN,
    EXTEND,
    FALSE,
    FIRST,
    FOR,
    FORCE,
    FOREIGN,
    FORMAT,
    FROM,
    FULLTEXT,
    GENERATED,
    GROUP,
    HASH,
    IF,
    IMMEDIATE,
    IMPORT,
    IN,
    INDEX,
    INITIALLY,
    INSERT_METHOD,
    INTO,
    INVISIBLE,
    IS,
    KEY,
    KEYS,
    KEY_BLOCK_SIZE,
    LESS,
    LIMIT,
    LINEAR,
    LIST,
    LOCK,
    MAXVALUE,
    MAX_ROWS,
    MIN_ROWS,
    MODIFY,
    MOVE,
    NO,
    NOT,
    NOVALIDATE,
    NULL,
    OFFSET,
    ON,
    ONLY,
    OPTIMIZE,
    OPTIONS,
    OR,
    ORDER,
    PACK_KEYS,
    PARSER,
    PARTITION,
    PARTITIONING,
    PARTITIONS,
    PLAN,
    PRECISION,
    PRIMARY,
    PUBLIC,
    RANGE,
    REBUILD,
    REFERENCES,
    REMOVE,
    RENAME,
    REORGANIZE,
    REPAIR,
    REPLACE,
    RESTRICT,
    ROW_FORMAT,
    SELECT,
    SET,
    SPATIAL,
    STATS_AUTO_RECALC,
    STATS_PERSISTENT,
    STATS_SAMPLE_PAGES,
    STORED,
    SYNONYM,
    TABLE,
    TABLESPACE,
    THAN,
    TIME,
    TIMESTAMP,
    TO,
    TRUE,
    TRUNCATE,
    TYPE,
    UNIQUE,
    UPDATE,
    USING,
    VALIDATE,
    VALIDATION,
    VALUES,
    VARYING,
    VERBOSE,
    VIRTUAL,
    VISIBLE,
    WHERE,
    WITH,
    WITHOUT,
    ZONE
);

/// Keywords that end a column definition's data type: a word from this
/// list directly after a column name starts the column specs instead.
pub const RESERVED_FOR_COLUMN_SPEC: &[Keyword] = &[
    Keyword::AFTER,
    Keyword::AS,
    Keyword::AUTO_INCREMENT,
    Keyword::CHECK,
    Keyword::COLLATE,
    Keyword::COMMENT,
    Keyword::CONSTRAINT,
    Keyword::DEFAULT,
    Keyword::DROP,
    Keyword::FIRST,
    Keyword::GENERATED,
    Keyword::NOT,
    Keyword::NULL,
    Keyword::PRIMARY,
    Keyword::REFERENCES,
    Keyword::SET,
    Keyword::UNIQUE,
];


/// Can't be used as a column alias, so that `SELECT <expr> alias`
/// can be parsed unambiguously without looking ahead.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    Keyword::AND,
    Keyword::BETWEEN,
    Keyword::FROM,
    Keyword::GROUP,
    Keyword::IN,
    Keyword::IS,
    Keyword::LIMIT,
    Keyword::NOT,
    Keyword::OFFSET,
    Keyword::OR,
    Keyword::ORDER,
    Keyword::WHERE,
];

/// Can't be used as a table alias, so that `FROM table_name alias`
/// can be parsed unambiguously without looking ahead.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    Keyword::GROUP,
    Keyword::LIMIT,
    Keyword::OFFSET,
    Keyword::ORDER,
    Keyword::WHERE,
];
