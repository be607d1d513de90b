//! In-memory tables and CSV schema validation

use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::dataset::{ColumnKind, DatasetSchema};

/// Row-level problems reported per file before the rest are only counted.
pub const MAX_REPORTED_PROBLEMS: usize = 20;

/// Why a present file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentProblem {
    /// The file has no header row.
    Empty,
    /// The file exceeds the configured read limit.
    TooLarge { limit: u64 },
    /// Required columns absent from the header.
    MissingColumns { columns: Vec<String> },
    /// A record could not be parsed (ragged row, invalid UTF-8, ...).
    BadRecord { line: u64, message: String },
    /// A cell in a typed required column does not parse.
    InvalidValue {
        line: u64,
        column: String,
        value: String,
        expected: ColumnKind,
    },
    /// Further row problems were found but not listed.
    MoreProblems { count: usize },
}

impl fmt::Display for ContentProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentProblem::Empty => write!(f, "file is empty"),
            ContentProblem::TooLarge { limit } => {
                write!(f, "file exceeds the {limit}-byte read limit")
            }
            ContentProblem::MissingColumns { columns } => {
                write!(f, "missing required columns: {}", columns.join(", "))
            }
            ContentProblem::BadRecord { line, message } => write!(f, "line {line}: {message}"),
            ContentProblem::InvalidValue {
                line,
                column,
                value,
                expected,
            } => write!(
                f,
                "line {line}: column {column} expects {expected}, found {value:?}"
            ),
            ContentProblem::MoreProblems { count } => write!(f, "{count} more problems"),
        }
    }
}

/// A loaded table of trimmed string cells.
///
/// Required columns are guaranteed present and, for typed columns, parseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV from `reader` and validate it against `schema`.
    pub fn from_reader<R: Read>(
        reader: R,
        schema: DatasetSchema,
    ) -> std::result::Result<Self, Vec<ContentProblem>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = match reader.headers() {
            Ok(headers) => headers.iter().map(normalize_header_name).collect(),
            Err(e) => {
                return Err(vec![ContentProblem::BadRecord {
                    line: 1,
                    message: e.to_string(),
                }]);
            }
        };

        if columns.iter().all(|c| c.is_empty()) {
            return Err(vec![ContentProblem::Empty]);
        }

        let present: HashSet<&str> = columns.iter().map(String::as_str).collect();
        let missing: Vec<String> = schema
            .column_names()
            .filter(|name| !present.contains(name))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(vec![ContentProblem::MissingColumns { columns: missing }]);
        }

        let typed: Vec<(usize, &str, ColumnKind)> = schema
            .required
            .iter()
            .filter(|spec| spec.kind != ColumnKind::Text)
            .filter_map(|spec| {
                columns
                    .iter()
                    .position(|c| c == spec.name)
                    .map(|idx| (idx, spec.name, spec.kind))
            })
            .collect();

        let mut problems = ProblemList::default();
        let mut rows = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // records() starts after the header, lines are 1-based
            let fallback_line = idx as u64 + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map_or(fallback_line, |p| p.line());
                    problems.push(ContentProblem::BadRecord {
                        line,
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            let line = record.position().map_or(fallback_line, |p| p.line());

            for &(col, name, kind) in &typed {
                let value = record.get(col).unwrap_or_default();
                if !cell_matches(value, kind) {
                    problems.push(ContentProblem::InvalidValue {
                        line,
                        column: name.to_string(),
                        value: value.to_string(),
                        expected: kind,
                    });
                }
            }

            rows.push(record.iter().map(str::to_string).collect());
        }

        if let Some(problems) = problems.finish() {
            return Err(problems);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn text_column(&self, name: &str) -> Option<Vec<&str>> {
        let col = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(col).map_or("", String::as_str))
                .collect(),
        )
    }

    /// `None` if the column is absent or any cell is not an integer.
    pub fn i64_column(&self, name: &str) -> Option<Vec<i64>> {
        self.text_column(name)?
            .into_iter()
            .map(|v| v.parse::<i64>().ok())
            .collect()
    }

    /// `None` if the column is absent or any cell is not a number.
    pub fn f64_column(&self, name: &str) -> Option<Vec<f64>> {
        self.text_column(name)?
            .into_iter()
            .map(|v| v.parse::<f64>().ok())
            .collect()
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// Bounded problem collector.
#[derive(Default)]
struct ProblemList {
    listed: Vec<ContentProblem>,
    suppressed: usize,
}

impl ProblemList {
    fn push(&mut self, problem: ContentProblem) {
        if self.listed.len() < MAX_REPORTED_PROBLEMS {
            self.listed.push(problem);
        } else {
            self.suppressed += 1;
        }
    }

    fn finish(mut self) -> Option<Vec<ContentProblem>> {
        if self.listed.is_empty() {
            return None;
        }
        if self.suppressed > 0 {
            self.listed.push(ContentProblem::MoreProblems {
                count: self.suppressed,
            });
        }
        Some(self.listed)
    }
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn cell_matches(value: &str, kind: ColumnKind) -> bool {
    match kind {
        ColumnKind::Text => true,
        ColumnKind::Integer => value.parse::<i64>().is_ok(),
        ColumnKind::Float => !value.is_empty() && value.parse::<f64>().is_ok(),
    }
}
