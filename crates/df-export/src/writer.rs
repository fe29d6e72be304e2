use std::path::PathBuf;

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use tracing::debug;

use crate::record::{CellValue, Record};
use crate::ExportError;

/// Header fill used by the upstream export templates.
const HEADER_FILL: u32 = 0x366092;

/// Widest a column is allowed to autosize to, in characters.
const MAX_COLUMN_WIDTH: f64 = 50.0;

/// Export settings.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output file name; `.xlsx` is appended when missing and a timestamp is
    /// inserted before the extension to avoid clobbering earlier exports.
    pub filename: String,
    /// Name of the data sheet.
    pub sheet_name: String,
    /// Add a `Resumen` sheet with record count and numeric-column stats.
    pub include_summary: bool,
    /// Columns to summarize (sum and mean) on the summary sheet.
    pub numeric_columns: Vec<String>,
    /// Target directory; defaults to the user's Downloads directory.
    pub directory: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            filename: "export.xlsx".to_string(),
            sheet_name: "Datos".to_string(),
            include_summary: false,
            numeric_columns: Vec::new(),
            directory: None,
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub file_name: String,
    pub rows: usize,
    pub columns: usize,
    pub sheets: usize,
    pub exported_at: String,
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
) -> Result<(), ExportError> {
    match value {
        CellValue::Text(s) => sheet.write_string(row, col, s)?,
        CellValue::Number(n) => sheet.write_number(row, col, *n)?,
        CellValue::Bool(b) => sheet.write_boolean(row, col, *b)?,
        CellValue::Empty => sheet,
    };
    Ok(())
}

fn timestamped_filename(filename: &str) -> String {
    let base = filename.strip_suffix(".xlsx").unwrap_or(filename);
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.xlsx", base, timestamp)
}

fn output_directory(options: &ExportOptions) -> PathBuf {
    if let Some(ref dir) = options.directory {
        return dir.clone();
    }
    dirs_next::download_dir()
        .or_else(|| dirs_next::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write `records` to an xlsx file.
///
/// The first record fixes the columns; later records are matched by field
/// name and missing fields produce empty cells.
pub fn export_records(
    records: &[Record],
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let first = records.first().ok_or(ExportError::NoData)?;
    if first.is_empty() {
        return Err(ExportError::NoData);
    }
    let columns = first.field_names();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&options.sheet_name)?;

    // Header row
    let header = header_format();
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, &header)?;
    }

    // Data rows, matched by field name against the header set
    let mut widths: Vec<usize> = columns.iter().map(|name| name.chars().count()).collect();
    for (row, record) in records.iter().enumerate() {
        for (col, name) in columns.iter().enumerate() {
            let value = record.get(name).unwrap_or(&CellValue::Empty);
            write_cell(sheet, (row + 1) as u32, col as u16, value)?;
            widths[col] = widths[col].max(value.display_len());
        }
    }

    for (col, width) in widths.iter().enumerate() {
        let adjusted = ((width + 2) as f64).min(MAX_COLUMN_WIDTH);
        sheet.set_column_width(col as u16, adjusted)?;
    }

    let mut sheets = 1;
    if options.include_summary && !options.numeric_columns.is_empty() {
        write_summary_sheet(&mut workbook, records, &columns, &options.numeric_columns)?;
        sheets += 1;
    }

    let directory = output_directory(options);
    std::fs::create_dir_all(&directory)?;
    let file_name = timestamped_filename(&options.filename);
    let path = directory.join(&file_name);
    workbook.save(&path)?;
    debug!(path = %path.display(), rows = records.len(), "export written");

    Ok(ExportReport {
        path,
        file_name,
        rows: records.len(),
        columns: columns.len(),
        sheets,
        exported_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

fn write_summary_sheet(
    workbook: &mut Workbook,
    records: &[Record],
    columns: &[String],
    numeric_columns: &[String],
) -> Result<(), ExportError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Resumen")?;

    let header = header_format();
    sheet.write_string_with_format(0, 0, "Métrica", &header)?;
    sheet.write_string_with_format(0, 1, "Valor", &header)?;

    let mut row = 1u32;
    sheet.write_string(row, 0, "Total de registros")?;
    sheet.write_number(row, 1, records.len() as f64)?;
    row += 1;

    for name in numeric_columns {
        if !columns.contains(name) {
            continue;
        }
        let values: Vec<f64> = records
            .iter()
            .filter_map(|record| record.get(name).and_then(CellValue::as_number))
            .collect();
        if values.is_empty() {
            continue;
        }
        let total: f64 = values.iter().sum();
        let mean = total / values.len() as f64;

        sheet.write_string(row, 0, format!("Total {}", name))?;
        sheet.write_number(row, 1, round2(total))?;
        row += 1;
        sheet.write_string(row, 0, format!("Promedio {}", name))?;
        sheet.write_number(row, 1, round2(mean))?;
        row += 1;
    }

    sheet.set_column_width(0, 30.0)?;
    sheet.set_column_width(1, 15.0)?;
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
