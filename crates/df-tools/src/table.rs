//! Bordered ASCII tables for tool output.

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One table column: header text, alignment and an optional cap on cell width.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub align: Align,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            align: Align::Right,
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table rendered with `+---+` borders, one space of cell padding and a
/// rule under the header.
pub struct TextTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: Vec<Column>) -> Self {
        TextTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row. Short rows are padded with empty cells, long rows cut to
    /// the column count. Cells over the column's max width are truncated
    /// with `...` before layout.
    pub fn add_row(&mut self, cells: Vec<String>) {
        let mut row: Vec<String> = cells;
        row.resize(self.columns.len(), String::new());
        for (cell, column) in row.iter_mut().zip(&self.columns) {
            if let Some(max) = column.max_width {
                let truncated = truncate(cell, max);
                *cell = truncated;
            }
        }
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.header.chars().count())
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn rule(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for ((cell, width), column) in cells.iter().zip(widths).zip(&self.columns) {
            let pad = width - cell.chars().count();
            match column.align {
                Align::Left => {
                    line.push(' ');
                    line.push_str(cell);
                    line.push_str(&" ".repeat(pad + 1));
                }
                Align::Right => {
                    line.push_str(&" ".repeat(pad + 1));
                    line.push_str(cell);
                    line.push(' ');
                }
            }
            line.push('|');
        }
        line
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = Self::rule(&widths);
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.format_row(&headers, &widths));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&self.format_row(row, &widths));
            out.push('\n');
        }
        out.push_str(&rule);
        out
    }
}

/// Truncate `s` to at most `max` characters, ending in `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
