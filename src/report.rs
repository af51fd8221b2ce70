//! Report exporter.
//!
//! Turns a [`ResultTable`] into a console listing and a single-sheet
//! spreadsheet. The sheet layout is computed first as a [`ReportSheet`]
//! so it can be inspected without touching the filesystem; writing it out
//! is a separate step.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::internal::secs_to_string;
use crate::types::ResultTable;

/// Name of the worksheet in the exported workbook.
pub const SHEET_NAME: &str = "Benchmark Results";

/// Excel number format for every duration cell.
pub const SECONDS_FORMAT: &str = "0.000000";

/// Characters added to the longest value of a column.
const COLUMN_MARGIN: usize = 2;

/// Scale from characters to Excel column width units.
const COLUMN_WIDTH_FACTOR: f64 = 1.2;

/// Format seconds with six decimals.
///
/// # Example
///
/// ```
/// use cipherbench::format_seconds;
///
/// assert_eq!(format_seconds(2.0), "2.000000");
/// ```
pub fn format_seconds(secs: f64) -> String {
    secs_to_string(secs)
}

/// Render the results as console text, one line per case.
///
/// ```text
/// RSA 1024: [0.010000, 0.020000, 0.030000] (mean: 0.020000s)
/// ```
pub fn render_console(table: &ResultTable) -> String {
    let mut out = String::new();
    for (label, sample) in table.iter() {
        let runs: Vec<String> = sample.values().iter().map(|&s| format_seconds(s)).collect();
        out.push_str(&format!(
            "{}: [{}] (mean: {}s)\n",
            label,
            runs.join(", "),
            format_seconds(sample.mean())
        ));
    }
    out
}

/// One data row of the report sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Case label, e.g. `"AES 256"`
    pub label: String,
    /// One cell per configured run; `None` where the case has fewer runs
    pub runs: Vec<Option<f64>>,
    /// Mean of the case's full sample
    pub mean: f64,
}

/// The laid-out report: header, rows and column widths.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    /// Header cells, `Algorithm`, `Run 1 (s)` ... `Mean (s)`
    pub header: Vec<String>,
    /// One row per case, in table order
    pub rows: Vec<ReportRow>,
    /// Width of every column, in Excel units
    pub column_widths: Vec<f64>,
}

impl ReportSheet {
    /// Lay out `table` for `repetitions` run columns.
    ///
    /// The header always has `repetitions` run columns. A case with fewer
    /// runs leaves the trailing run cells blank; runs beyond `repetitions`
    /// are not shown.
    pub fn build(table: &ResultTable, repetitions: usize) -> Self {
        let mut header = Vec::with_capacity(repetitions + 2);
        header.push("Algorithm".to_string());
        header.extend((1..=repetitions).map(|run| format!("Run {} (s)", run)));
        header.push("Mean (s)".to_string());

        let rows: Vec<ReportRow> = table
            .iter()
            .map(|(label, sample)| ReportRow {
                label: label.to_string(),
                runs: (0..repetitions)
                    .map(|i| sample.values().get(i).copied())
                    .collect(),
                mean: sample.mean(),
            })
            .collect();

        let column_widths = column_widths(&header, &rows);

        Self {
            header,
            rows,
            column_widths,
        }
    }

    /// Cell text of a row as shown in the sheet, blanks as empty strings.
    pub fn rendered_row(row: &ReportRow) -> Vec<String> {
        let mut cells = Vec::with_capacity(row.runs.len() + 2);
        cells.push(row.label.clone());
        cells.extend(
            row.runs
                .iter()
                .map(|run| run.map(format_seconds).unwrap_or_default()),
        );
        cells.push(format_seconds(row.mean));
        cells
    }
}

/// Longest rendered value per column plus the margin, scaled to Excel units.
fn column_widths(header: &[String], rows: &[ReportRow]) -> Vec<f64> {
    let mut longest: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (col, cell) in ReportSheet::rendered_row(row).iter().enumerate() {
            if let Some(max) = longest.get_mut(col) {
                *max = (*max).max(cell.chars().count());
            }
        }
    }

    longest
        .into_iter()
        .map(|len| (len + COLUMN_MARGIN) as f64 * COLUMN_WIDTH_FACTOR)
        .collect()
}

/// Write `sheet` to an `.xlsx` file at `path`, replacing any existing file.
///
/// The header row is bold. Durations are stored as numbers with the
/// [`SECONDS_FORMAT`] number format, so the spreadsheet can still compute
/// with them.
pub fn write_spreadsheet(sheet: &ReportSheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let seconds = Format::new().set_num_format(SECONDS_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in sheet.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title.as_str(), &bold)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let xl_row = (i + 1) as u32;
        worksheet.write_string(xl_row, 0, row.label.as_str())?;

        for (j, run) in row.runs.iter().enumerate() {
            if let Some(secs) = run {
                worksheet.write_number_with_format(xl_row, (j + 1) as u16, *secs, &seconds)?;
            }
        }

        let mean_col = (row.runs.len() + 1) as u16;
        worksheet.write_number_with_format(xl_row, mean_col, row.mean, &seconds)?;
    }

    for (col, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    workbook.save(path)?;
    tracing::debug!(path = %path.display(), rows = sheet.rows.len(), "spreadsheet saved");
    Ok(())
}

/// Lay out `table` and write it to `path` in one step.
pub fn export_results(
    table: &ResultTable,
    repetitions: usize,
    path: impl AsRef<Path>,
) -> Result<ReportSheet> {
    let sheet = ReportSheet::build(table, repetitions);
    write_spreadsheet(&sheet, path)?;
    Ok(sheet)
}
