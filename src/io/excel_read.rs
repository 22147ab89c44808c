use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::{debug, instrument};

use crate::error::{Result, ToolError};
use crate::model::Roster;

/// Reads the entries of column A of the first worksheet, starting at row 1.
///
/// Blank cells are skipped and values are trimmed. A roster without a single
/// entry is rejected.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_column(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            ToolError::InputRead(format!("workbook {} has no worksheets", path.display()))
        })?
        .map_err(ToolError::from)?;

    // The range only covers used cells; if it starts right of column A there
    // is nothing to read.
    let starts_in_column_a = range.start().map(|(_, col)| col == 0).unwrap_or(false);
    let entries: Vec<String> = if starts_in_column_a {
        range
            .rows()
            .map(|row| cell_to_string(row.first()))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    } else {
        Vec::new()
    };

    if entries.is_empty() {
        return Err(ToolError::InputRead(format!(
            "no entries found in column A of {}",
            path.display()
        )));
    }

    debug!(entry_count = entries.len(), "read roster column");
    Ok(entries)
}

/// Loads the personnel and duty rosters.
pub fn read_roster(personnel: &Path, duties: &Path) -> Result<Roster> {
    Ok(Roster {
        personnel: read_column(personnel)?,
        duties: read_column(duties)?,
    })
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
