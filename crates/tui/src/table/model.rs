//! Dataset and row types.

use super::column::ColumnDef;

/// One record; cells are aligned with the dataset's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell text for `column`; missing cells read as empty.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// A titled table of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub title: String,
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, padding short rows to the column count.
    pub fn new(title: impl Into<String>, columns: Vec<ColumnDef>, rows: Vec<Row>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.cells.resize(width, String::new());
                row
            })
            .collect();
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    /// Index of the column with `id`.
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_padded_to_column_count() {
        let dataset = Dataset::new(
            "People",
            vec![ColumnDef::new("name"), ColumnDef::new("email")],
            vec![Row::new(vec!["Ana".into()])],
        );
        assert_eq!(dataset.rows[0].cells.len(), 2);
        assert_eq!(dataset.rows[0].cell(1), "");
        assert_eq!(dataset.rows[0].cell(7), "");
        assert_eq!(dataset.column_index("email"), Some(1));
    }
}
