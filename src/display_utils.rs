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

//! Utilities for formatting SQL AST nodes.

use core::fmt::{self, Display, Write};

/// A value that displays a list of values joined by a separator.
pub struct DisplaySeparated<'a, T>
where
    T: Display,
{
    slice: &'a [T],
    sep: &'static str,
}

impl<T> Display for DisplaySeparated<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut delim = "";
        for t in self.slice {
            f.write_str(delim)?;
            delim = self.sep;
            t.fmt(f)?;
        }
        Ok(())
    }
}

pub fn display_separated<'a, T>(slice: &'a [T], sep: &'static str) -> DisplaySeparated<'a, T>
where
    T: Display,
{
    DisplaySeparated { slice, sep }
}

pub fn display_comma_separated<T>(slice: &[T]) -> DisplaySeparated<'_, T>
where
    T: Display,
{
    DisplaySeparated { slice, sep: ", " }
}

/// Write `items` to `w`, calling `write_item` for each one and `sep` in between.
///
/// Used where the items are not `Display` themselves but are rendered through
/// a visitor, so the separator logic is shared with [`DisplaySeparated`].
pub(crate) fn write_separated<W, T, F>(
    w: &mut W,
    items: &[T],
    sep: &str,
    mut write_item: F,
) -> fmt::Result
where
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    let mut delim = "";
    for item in items {
        w.write_str(delim)?;
        delim = sep;
        write_item(w, item)?;
    }
    Ok(())
}
