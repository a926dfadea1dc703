//! Minimal reader for mmCIF `loop_` tables.
//!
//! Only what the coordinate parser and the DSSP annotation reader need: find
//! the loop of a given category, split its values into rows, and look values
//! up by item name. Values may wrap across lines, be quoted with `'` or `"`,
//! or be semicolon-delimited text fields.

use log::warn;

/// One `loop_` table restricted to a single category.
#[derive(Debug, Clone)]
pub struct CifLoop {
    category: String,
    /// Item names after the category prefix, e.g. `label_seq_id`.
    items: Vec<String>,
    /// Column index of each entry of `items` within a row.
    columns: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl CifLoop {
    /// The category name including the leading underscore, e.g. `_atom_site`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether the loop declares the given item.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the loop has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows of the loop.
    pub fn records(&self) -> impl Iterator<Item = CifRecord<'_>> {
        self.rows.iter().enumerate().map(move |(index, row)| CifRecord {
            table: self,
            index,
            row,
        })
    }

    fn column(&self, item: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i == item)
            .map(|pos| self.columns[pos])
    }
}

/// A single row of a [`CifLoop`].
#[derive(Debug, Clone, Copy)]
pub struct CifRecord<'a> {
    table: &'a CifLoop,
    index: usize,
    row: &'a [String],
}

impl<'a> CifRecord<'a> {
    /// Zero-based row number within the loop.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw value of an item, including the `.` and `?` placeholders.
    pub fn raw(&self, item: &str) -> Option<&'a str> {
        let col = self.table.column(item)?;
        self.row.get(col).map(|s| s.as_str())
    }

    /// The value of an item, treating `.` (inapplicable) and `?` (unknown) as absent.
    pub fn get(&self, item: &str) -> Option<&'a str> {
        self.raw(item).filter(|v| !is_null(v))
    }
}

/// Whether a CIF value is one of the null placeholders.
pub fn is_null(value: &str) -> bool {
    value == "." || value == "?"
}

/// The block name of the first `data_` header, if any.
pub fn data_block_id(input: &str) -> Option<&str> {
    input
        .lines()
        .map(str::trim)
        .find_map(|l| l.strip_prefix("data_"))
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Locate the first `loop_` containing items of `category` and parse it.
///
/// `category` includes the leading underscore (`_atom_site`). Columns of
/// other categories in a mixed loop are kept for row alignment but are not
/// addressable. A trailing row with too few values is dropped with a warning.
pub fn find_loop(input: &str, category: &str) -> Option<CifLoop> {
    let prefix = format!("{}.", category);
    let mut lines = input.lines().peekable();

    while let Some(line) = lines.next() {
        if line.trim() != "loop_" {
            continue;
        }

        let mut tags: Vec<String> = Vec::new();
        while let Some(&next) = lines.peek() {
            let t = next.trim();
            if t.starts_with('_') {
                if let Some(tag) = t.split_whitespace().next() {
                    tags.push(tag.to_string());
                }
                lines.next();
            } else if t.is_empty() {
                lines.next();
            } else {
                break;
            }
        }

        if !tags.iter().any(|t| t.starts_with(&prefix)) {
            continue;
        }

        let mut tokens: Vec<String> = Vec::new();
        while let Some(&next) = lines.peek() {
            let t = next.trim_end();
            let trimmed = t.trim_start();
            if trimmed.starts_with('#')
                || trimmed.starts_with('_')
                || trimmed == "loop_"
                || trimmed.starts_with("data_")
            {
                break;
            }
            lines.next();
            if let Some(first) = t.strip_prefix(';') {
                tokens.push(read_text_field(first, &mut lines));
            } else {
                tokens.extend(tokenize_line(trimmed));
            }
        }

        let ncols = tags.len();
        let remainder = tokens.len() % ncols;
        if remainder != 0 {
            warn!(
                "{} loop has {} trailing value(s) that do not fill a row; ignoring them",
                category, remainder
            );
            tokens.truncate(tokens.len() - remainder);
        }

        let mut rows = Vec::with_capacity(tokens.len() / ncols);
        let mut iter = tokens.into_iter();
        loop {
            let row: Vec<String> = iter.by_ref().take(ncols).collect();
            if row.len() < ncols {
                break;
            }
            rows.push(row);
        }

        let (columns, items): (Vec<usize>, Vec<String>) = tags
            .iter()
            .enumerate()
            .filter_map(|(col, tag)| {
                tag.strip_prefix(&prefix)
                    .map(|item| (col, item.to_string()))
            })
            .unzip();

        return Some(CifLoop {
            category: category.to_string(),
            items,
            columns,
            rows,
        });
    }

    None
}

/// Collect a semicolon-delimited text field whose opening line has already been consumed.
fn read_text_field<'a, I>(first: &str, lines: &mut std::iter::Peekable<I>) -> String
where
    I: Iterator<Item = &'a str>,
{
    let mut text = String::from(first);
    for line in lines.by_ref() {
        if line.starts_with(';') {
            break;
        }
        text.push('\n');
        text.push_str(line);
    }
    text.trim().to_string()
}

/// Tokenize a single mmCIF data line, respecting single- and double-quoted strings.
///
/// A quote only closes a value when followed by whitespace or the end of the
/// line, so primes inside names such as `"O5'"` survive.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        if chars[i] == '\'' || chars[i] == '"' {
            let quote = chars[i];
            let start = i + 1;
            let mut end = start;
            while end < len
                && !(chars[end] == quote && (end + 1 == len || chars[end + 1].is_whitespace()))
            {
                end += 1;
            }
            tokens.push(chars[start..end.min(len)].iter().collect());
            i = end + 1;
            continue;
        }

        let start = i;
        while i < len && !chars[i].is_whitespace() {
            i += 1;
        }
        tokens.push(chars[start..i].iter().collect());
    }

    tokens
}
