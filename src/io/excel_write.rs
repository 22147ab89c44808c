use std::path::Path;

use rust_xlsxwriter::{Table, Workbook};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::UnassignedDuty;

/// Sheet (and file stem) used for the unassigned-duties export.
pub const UNASSIGNED_SHEET: &str = "duties_left";
/// Header row of the unassigned-duties export.
pub const UNASSIGNED_COLUMNS: [&str; 2] = ["Unassigned Duties", "Primary/Secondary"];

/// A table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Lays out the duty slots that still need a holder.
    pub fn unassigned(duties: &[UnassignedDuty]) -> Self {
        Self {
            sheet_name: UNASSIGNED_SHEET.to_string(),
            columns: UNASSIGNED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: duties
                .iter()
                .map(|slot| vec![slot.duty.clone(), slot.role.label().to_string()])
                .collect(),
        }
    }
}

/// Writes the unassigned duty slots to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), slots = duties.len()))]
pub fn write_unassigned(path: &Path, duties: &[UnassignedDuty]) -> Result<()> {
    write_table(path, &SheetTable::unassigned(duties))
}

/// Writes a single table, header first, to a new workbook at `path`.
pub fn write_table(path: &Path, table: &SheetTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    // Excel tables need at least one data row.
    if !table.rows.is_empty() {
        let mut excel_table = Table::new();
        excel_table.set_autofilter(true);
        let col_end = (table.columns.len() as u16).saturating_sub(1);
        worksheet.add_table(0, 0, table.rows.len() as u32, col_end, &excel_table)?;
    }
    worksheet.autofit();

    workbook.save(path)?;
    debug!(row_count = table.rows.len(), "workbook saved");
    Ok(())
}
