use calamine::{Reader, Xlsx, open_workbook};
use duty_letters::ToolError;
use duty_letters::io::{excel_read, excel_write};
use duty_letters::model::{Role, UnassignedDuty};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

fn write_column(path: &Path, values: &[&str]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row, value) in values.iter().enumerate() {
        if !value.is_empty() {
            worksheet
                .write_string(row as u32, 0, *value)
                .expect("cell written");
        }
    }
    workbook.save(path).expect("workbook saved");
}

fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook opened");
    let range = workbook
        .worksheet_range(sheet)
        .expect("sheet present")
        .expect("sheet read");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn roster_column_skips_blank_rows() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("personnel.xlsx");
    write_column(&path, &["HM2 Kemp", "", "  HM3 Diaz  ", "HN Brooks"]);

    let entries = excel_read::read_column(&path).expect("roster read");

    assert_eq!(entries, vec!["HM2 Kemp", "HM3 Diaz", "HN Brooks"]);
}

#[test]
fn numeric_cells_are_read_as_text() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("duties.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .write_string(0, 0, "Crash Cart Coordinator")
        .expect("cell written");
    worksheet.write_number(1, 0, 42.0).expect("cell written");
    workbook.save(&path).expect("workbook saved");

    let entries = excel_read::read_column(&path).expect("roster read");

    assert_eq!(entries, vec!["Crash Cart Coordinator", "42"]);
}

#[test]
fn empty_roster_is_an_input_error() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("empty.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&path).expect("workbook saved");

    let error = excel_read::read_column(&path).expect_err("roster is empty");
    assert!(matches!(error, ToolError::InputRead(_)));
}

#[test]
fn missing_roster_is_reported() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("absent.xlsx");

    let error = excel_read::read_column(&path).expect_err("file is missing");
    assert!(matches!(error, ToolError::MissingInput(missing) if missing == path));
}

#[test]
fn read_roster_loads_both_lists() {
    let temp_dir = tempdir().expect("temporary directory");
    let personnel = temp_dir.path().join("personnel.xlsx");
    let duties = temp_dir.path().join("duties.xlsx");
    write_column(&personnel, &["HM2 Kemp", "HM3 Diaz"]);
    write_column(&duties, &["Crash Cart Coordinator"]);

    let roster = excel_read::read_roster(&personnel, &duties).expect("roster read");

    assert_eq!(roster.personnel, vec!["HM2 Kemp", "HM3 Diaz"]);
    assert_eq!(roster.duties, vec!["Crash Cart Coordinator"]);
}

#[test]
fn unassigned_export_lists_every_open_slot() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("duties_left.xlsx");
    let slots = vec![
        UnassignedDuty::new("Crash Cart Coordinator", Role::Primary),
        UnassignedDuty::new("Crash Cart Coordinator", Role::Secondary),
        UnassignedDuty::new("Infection Control Surveillance Officer", Role::Primary),
        UnassignedDuty::new("Infection Control Surveillance Officer", Role::Secondary),
    ];

    excel_write::write_unassigned(&path, &slots).expect("export written");
    let rows = read_sheet(&path, excel_write::UNASSIGNED_SHEET);

    assert_eq!(rows[0], vec!["Unassigned Duties", "Primary/Secondary"]);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1], vec!["Crash Cart Coordinator", "PRIMARY"]);
    assert_eq!(
        rows[4],
        vec!["Infection Control Surveillance Officer", "SECONDARY"]
    );
}
