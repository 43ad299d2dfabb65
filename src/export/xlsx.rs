// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{
    DayDetailRow, EventExport, detail_headers, detail_to_row, event_to_row, raw_headers,
    week_headers, week_to_rows,
};
use crate::export::notify_export_success;
use crate::models::report::WeekMatrix;
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export the weekly report workbook: weekly matrix, per-day detail and
/// raw events, one sheet each, with styling and auto column widths.
pub(crate) fn export_xlsx(
    matrix: &WeekMatrix,
    details: &[DayDetailRow],
    events: &[EventExport],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let headers: Vec<String> = week_headers(matrix);
    let header_refs: Vec<&str> = headers.iter().map(|h| h.as_str()).collect();
    write_sheet(
        workbook.add_worksheet().set_name("Week").map_err(to_io_app_error)?,
        &header_refs,
        week_to_rows(matrix),
    )?;

    let detail_rows: Vec<Vec<String>> = details.iter().map(detail_to_row).collect();
    write_sheet(
        workbook
            .add_worksheet()
            .set_name("Day detail")
            .map_err(to_io_app_error)?,
        &detail_headers(),
        detail_rows,
    )?;

    let raw_rows: Vec<Vec<String>> = events.iter().map(event_to_row).collect();
    write_sheet(
        workbook
            .add_worksheet()
            .set_name("Raw events")
            .map_err(to_io_app_error)?,
        &raw_headers(),
        raw_rows,
    )?;

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, headers: &[&str], rows: Vec<Vec<String>>) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let num_align = FormatAlign::Right;

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in cells.iter().enumerate() {
            let v = value.as_str();

            write_xlsx_cell(worksheet, row, col as u16, v, band_color, num_align)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    Ok(())
}

/// Write a single cell, interpreting the string as date/time/number when
/// possible so Excel gets typed values instead of text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    band_color: Color,
    num_align: FormatAlign,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band_color)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = excel_serial(s) {
        let fmt = base.set_num_format(num_format).set_align(num_align);
        worksheet
            .write_number_with_format(row, col, serial, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    if let Ok(n) = s.parse::<f64>() {
        let fmt = base.set_align(num_align);
        worksheet
            .write_number_with_format(row, col, n, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_io_app_error)?;
    Ok(())
}

/// Recognize the two string shapes the report cells carry, a `YYYY-MM-DD`
/// date or a `HH:MM` scan time, and return the Excel serial value with its
/// number format. Everything else stays text or plain number.
fn excel_serial(s: &str) -> Option<(&'static str, f64)> {
    // Excel's day zero
    const EPOCH: (i32, u32, u32) = (1899, 12, 30);

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2)?;
        let days = d.signed_duration_since(epoch).num_days() as f64;
        return Some(("yyyy-mm-dd", days));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let fraction = f64::from(t.num_seconds_from_midnight()) / 86_400.0;
        return Some(("hh:mm", fraction));
    }

    None
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
