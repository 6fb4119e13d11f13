// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// Renders `data` row by row, one cell per column, in the given style.
pub struct Table<'a, S, T, C> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    /// Header, also used as the key in JSON output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

/// Plain aligned columns separated by spaces, without a header.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    indent: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: "  ",
            indent: "",
        }
    }

    pub fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = column_widths(columns.len(), &cells);

        for (i, (row, data)) in cells.iter().zip(data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.indent)?;

            for (j, (col, cell)) in columns.iter().zip(row).enumerate() {
                let last = j + 1 == columns.len();
                let padding = widths[j].saturating_sub(cell.width());
                let cell = match col.color(data) {
                    Some(color) => cell.as_ref().color(color).to_string(),
                    None => cell.to_string(),
                };

                match col.padding_direction() {
                    // last column does not need trailing padding
                    PaddingDirection::Left if last => write!(f, "{cell}")?,
                    PaddingDirection::Left => write!(f, "{cell}{}", " ".repeat(padding))?,
                    PaddingDirection::Right => write!(f, "{}{cell}", " ".repeat(padding))?,
                }

                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// A JSON array with one object per row, keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        let key = col.name().into_owned();
                        let value = serde_json::Value::String(col.format(row).into_owned());
                        (key, value)
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

fn column_widths(len: usize, cells: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut widths = vec![0; len];
    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}
