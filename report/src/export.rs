//! Multi-sheet workbook export

use std::path::Path;

use kazam_dex::{CellValue, Column, EffectivenessMatrix, EnrichedCreature, RankedView, ViewKind};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

/// Sheet holding the full enriched dataset
pub const DATASET_SHEET: &str = "pkmn";

/// Sheet holding the effectiveness matrix
pub const MATRIX_SHEET: &str = "matrix";

/// Header cell of the matrix sheet's row-label column
pub const MATRIX_LABEL_HEADER: &str = "Attacking";

/// Write the dataset, the matrix and every view to one workbook
pub fn write_workbook(
    path: &Path,
    collection: &[EnrichedCreature],
    matrix: &EffectivenessMatrix,
    views: &[(ViewKind, RankedView<'_>)],
) -> Result<(), XlsxError> {
    let mut workbook = build_workbook(collection, matrix, views)?;
    workbook.save(path)?;
    tracing::info!(path = %path.display(), sheets = views.len() + 2, "Wrote workbook");
    Ok(())
}

/// Sheet order: `pkmn`, `matrix`, then one sheet per view in the order given.
pub fn build_workbook(
    collection: &[EnrichedCreature],
    matrix: &EffectivenessMatrix,
    views: &[(ViewKind, RankedView<'_>)],
) -> Result<Workbook, XlsxError> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    workbook.push_worksheet(table_sheet(
        DATASET_SHEET,
        &Column::FULL,
        collection.iter(),
        &header,
    )?);
    workbook.push_worksheet(matrix_sheet(matrix, &header)?);

    for (kind, view) in views {
        workbook.push_worksheet(table_sheet(
            kind.sheet_name(),
            &view.columns,
            view.iter(),
            &header,
        )?);
    }

    Ok(workbook)
}

fn table_sheet<'a>(
    name: &str,
    columns: &[Column],
    rows: impl Iterator<Item = &'a EnrichedCreature>,
    header: &Format,
) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;

    for (col, column) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, column.header(), header)?;
    }

    for (i, creature) in rows.enumerate() {
        let row = i as u32 + 1;
        for (col, column) in columns.iter().enumerate() {
            write_cell(&mut sheet, row, col as u16, &column.value(creature))?;
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();
    Ok(sheet)
}

fn matrix_sheet(matrix: &EffectivenessMatrix, header: &Format) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(MATRIX_SHEET)?;

    sheet.write_string_with_format(0, 0, MATRIX_LABEL_HEADER, header)?;
    for (col, defending) in matrix.types().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16 + 1, defending.as_str(), header)?;
    }

    for (i, (attacking, values)) in matrix.rows().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string_with_format(row, 0, attacking.as_str(), header)?;
        for (col, value) in values.iter().enumerate() {
            sheet.write_number(row, col as u16 + 1, *value)?;
        }
    }

    sheet.set_freeze_panes(1, 1)?;
    Ok(sheet)
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
) -> Result<(), XlsxError> {
    match value {
        CellValue::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        CellValue::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}
