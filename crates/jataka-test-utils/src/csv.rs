//! CSV fixtures built from the dataset registry.

use jataka_data::{ColumnKind, DatasetName};

/// Sample cell for a column of the given kind.
pub fn sample_value(kind: ColumnKind, row: usize) -> String {
    match kind {
        ColumnKind::Text => format!("value{row}"),
        ColumnKind::Integer => (row + 1).to_string(),
        ColumnKind::Float => format!("0.{}", row + 1),
    }
}

/// A CSV with exactly the required columns and `rows` valid data rows.
pub fn valid_csv_rows(dataset: DatasetName, rows: usize) -> String {
    let schema = dataset.schema();
    let mut out = schema.column_names().collect::<Vec<_>>().join(",");
    out.push('\n');
    for row in 0..rows {
        let cells: Vec<_> = schema
            .required
            .iter()
            .map(|column| sample_value(column.kind, row))
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// A valid CSV with two data rows.
pub fn valid_csv(dataset: DatasetName) -> String {
    valid_csv_rows(dataset, 2)
}

/// A CSV whose header lacks `missing`, otherwise valid.
///
/// # Panics
/// Panics if `missing` is not a required column of `dataset`.
pub fn csv_without_column(dataset: DatasetName, missing: &str) -> String {
    let schema = dataset.schema();
    assert!(
        schema.column_names().any(|name| name == missing),
        "{missing} is not a required column of {dataset}"
    );
    let kept: Vec<_> = schema.required.iter().filter(|c| c.name != missing).collect();

    let mut out = kept.iter().map(|c| c.name).collect::<Vec<_>>().join(",");
    out.push('\n');
    let cells: Vec<_> = kept.iter().map(|c| sample_value(c.kind, 0)).collect();
    out.push_str(&cells.join(","));
    out.push('\n');
    out
}
