//! Dataset loading from JSON and CSV files.
//!
//! Responsibilities:
//! - Read a data file and build a `Dataset` (columns plus text rows).
//! - Apply filter columns requested on the command line.
//! - Fit column widths to their content when a width is not declared.
//!
//! Does NOT handle:
//! - Filtering, sorting or paging (see `table`).
//!
//! Invariants:
//! - Column ids are unique within a dataset.
//! - Every row has exactly one cell per column.

use std::path::{Path, PathBuf};

use datagrid_config::constants::{MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::table::{ColumnDef, Dataset, FilterKind, Row};

/// Widest content used when fitting a column width.
const FIT_WIDTH_LIMIT: usize = 30;

/// Errors produced while loading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported data file format: {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),

    #[error("Data file declares no columns")]
    NoColumns,

    #[error("Column id '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("Filter requested for unknown column '{0}'")]
    UnknownColumn(String),
}

/// Loading options supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Overrides the title found in the file.
    pub title: Option<String>,
    /// Column ids that get a multi-value filter.
    pub value_filters: Vec<String>,
    /// Column ids that get a date-range filter.
    pub date_filters: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct JsonDataset {
    #[serde(default)]
    title: Option<String>,
    columns: Vec<ColumnDef>,
    #[serde(default)]
    rows: Vec<Map<String, Value>>,
}

/// Load a dataset, choosing the parser by file extension.
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset, DataError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let read = || {
        std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let dataset = match extension.as_deref() {
        Some("json") => parse_json(&read()?, &stem, options)?,
        Some("csv") => parse_csv(read()?.as_bytes(), &stem, options)?,
        _ => return Err(DataError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::info!(
        path = %path.display(),
        title = %dataset.title,
        columns = dataset.columns.len(),
        rows = dataset.rows.len(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Parse the JSON dataset format.
pub fn parse_json(
    content: &str,
    fallback_title: &str,
    options: &LoadOptions,
) -> Result<Dataset, DataError> {
    let parsed: JsonDataset = serde_json::from_str(content)?;
    let mut columns = parsed.columns;

    let rows = parsed
        .rows
        .iter()
        .map(|record| {
            for key in record.keys() {
                if !columns.iter().any(|c| &c.id == key) {
                    tracing::debug!(key = %key, "Ignoring field without a column");
                }
            }
            Row::new(
                columns
                    .iter()
                    .map(|column| record.get(&column.id).map(value_text).unwrap_or_default())
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    let title = options
        .title
        .clone()
        .or(parsed.title)
        .unwrap_or_else(|| fallback_title.to_string());
    finish(title, &mut columns, rows, options)
}

/// Parse CSV with a header row; every header becomes a column.
pub fn parse_csv(
    reader: impl std::io::Read,
    fallback_title: &str,
    options: &LoadOptions,
) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut columns: Vec<ColumnDef> = csv_reader
        .headers()?
        .iter()
        .map(|header| ColumnDef::new(header.trim()))
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }

    let title = options
        .title
        .clone()
        .unwrap_or_else(|| fallback_title.to_string());
    finish(title, &mut columns, rows, options)
}

fn finish(
    title: String,
    columns: &mut Vec<ColumnDef>,
    rows: Vec<Row>,
    options: &LoadOptions,
) -> Result<Dataset, DataError> {
    if columns.is_empty() {
        return Err(DataError::NoColumns);
    }
    for (index, column) in columns.iter().enumerate() {
        if columns[..index].iter().any(|earlier| earlier.id == column.id) {
            return Err(DataError::DuplicateColumn(column.id.clone()));
        }
    }

    apply_filter_options(columns, &options.value_filters, FilterKind::Values)?;
    apply_filter_options(columns, &options.date_filters, FilterKind::DateRange)?;

    let dataset = Dataset::new(title, std::mem::take(columns), rows);
    Ok(fit_widths(dataset))
}

fn apply_filter_options(
    columns: &mut [ColumnDef],
    ids: &[String],
    kind: FilterKind,
) -> Result<(), DataError> {
    for id in ids {
        let column = columns
            .iter_mut()
            .find(|column| &column.id == id)
            .ok_or_else(|| DataError::UnknownColumn(id.clone()))?;
        column.filter = Some(kind);
    }
    Ok(())
}

/// Give columns without a declared width room for their header and content.
fn fit_widths(mut dataset: Dataset) -> Dataset {
    for (index, column) in dataset.columns.iter_mut().enumerate() {
        if column.width.is_some() {
            continue;
        }
        let content = dataset
            .rows
            .iter()
            .map(|row| row.cell(index).chars().count())
            .max()
            .unwrap_or(0)
            .min(FIT_WIDTH_LIMIT);
        // Header text plus sort and filter markers.
        let header = column.title().chars().count() + 4;
        let fitted = content.max(header) + 2;
        let fitted = u16::try_from(fitted).unwrap_or(MAX_COLUMN_WIDTH);
        column.width = Some(fitted.clamp(MIN_COLUMN_WIDTH.max(column.min_width), MAX_COLUMN_WIDTH));
    }
    dataset
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
