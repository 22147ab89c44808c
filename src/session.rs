use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ToolError};
use crate::io::{docx_write, excel_read, excel_write};
use crate::letter::{self, DEFAULT_WRAP_WIDTH, LetterRequest};
use crate::model::{Assignment, AssignmentPlan, Role, Roster, UnassignedDuty};
use crate::prompt::Prompter;

const PERSONNEL_QUESTION: &str = "Which Excel has the personnel of the department?";
const DUTIES_QUESTION: &str = "Which Excel lists the collateral duties?";
const OFFICER_QUESTION: &str = "Enter the name of the officer who's signing the letters: ";

/// Where rosters are found and letters are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory searched for roster workbooks when no path is given.
    pub workbook_dir: PathBuf,
    /// Directory receiving the letters and the leftover-duty sheet.
    pub output_dir: PathBuf,
    pub personnel: Option<PathBuf>,
    pub duties: Option<PathBuf>,
    pub wrap_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            workbook_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            personnel: None,
            duties: None,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub letters: Vec<PathBuf>,
    pub unassigned: Vec<UnassignedDuty>,
    pub unassigned_export: Option<PathBuf>,
}

/// Runs one interactive assignment session end to end.
#[instrument(level = "info", skip_all, fields(output = %config.output_dir.display()))]
pub fn run(prompter: &mut dyn Prompter, config: &SessionConfig) -> Result<SessionSummary> {
    let personnel = resolve_workbook(
        prompter,
        config,
        config.personnel.as_deref(),
        PERSONNEL_QUESTION,
    )?;
    let duties = resolve_workbook(prompter, config, config.duties.as_deref(), DUTIES_QUESTION)?;
    let roster = excel_read::read_roster(&personnel, &duties)?;
    info!(
        personnel = roster.personnel.len(),
        duties = roster.duties.len(),
        "rosters loaded"
    );

    let officer = confirm_officer_name(prompter)?;
    let plan = collect_assignments(prompter, &roster)?;
    let letters = generate_letters(&plan, &officer, Local::now().date_naive(), config)?;

    let mut unassigned_export = None;
    if !plan.unassigned.is_empty() {
        warn!(slots = plan.unassigned.len(), "duties left without a holder");
        let path = config
            .output_dir
            .join(format!("{}.xlsx", excel_write::UNASSIGNED_SHEET));
        let question = format!(
            "{} duty slots are unassigned. Save them to {}?",
            plan.unassigned.len(),
            path.display()
        );
        if prompter.confirm(&question)? {
            excel_write::write_unassigned(&path, &plan.unassigned)?;
            unassigned_export = Some(path);
        }
    }

    Ok(SessionSummary {
        letters,
        unassigned: plan.unassigned,
        unassigned_export,
    })
}

fn resolve_workbook(
    prompter: &mut dyn Prompter,
    config: &SessionConfig,
    explicit: Option<&Path>,
    question: &str,
) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        Some(path) => Err(ToolError::MissingInput(path.to_path_buf())),
        None => choose_workbook(prompter, &config.workbook_dir, question),
    }
}

/// Lists the `.xlsx` files in `dir`, sorted by name, skipping Excel lock files.
pub fn find_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut workbooks = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_xlsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        let is_lock_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("~$"));
        if path.is_file() && is_xlsx && !is_lock_file {
            workbooks.push(path);
        }
    }
    workbooks.sort();
    Ok(workbooks)
}

/// Asks the operator which workbook in `dir` answers `question`.
pub fn choose_workbook(
    prompter: &mut dyn Prompter,
    dir: &Path,
    question: &str,
) -> Result<PathBuf> {
    let mut workbooks = find_workbooks(dir)?;
    if workbooks.is_empty() {
        return Err(ToolError::InputRead(format!(
            "no .xlsx workbooks found in {}",
            dir.display()
        )));
    }

    let names: Vec<String> = workbooks
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect();
    let choice = prompter.choose_one(question, &names)?;
    if choice >= workbooks.len() {
        return Err(invalid_choice(choice));
    }
    debug!(workbook = %names[choice], "workbook selected");
    Ok(workbooks.swap_remove(choice))
}

/// Asks for the signing officer's name until the operator confirms it.
pub fn confirm_officer_name(prompter: &mut dyn Prompter) -> Result<String> {
    loop {
        let name = prompter.input(OFFICER_QUESTION)?.trim().to_string();
        if name.is_empty() {
            continue;
        }
        if prompter.confirm(&format!("You entered: {name}. Is this correct?"))? {
            return Ok(name);
        }
    }
}

/// Walks every duty, primary then secondary, and records who holds it.
pub fn collect_assignments(
    prompter: &mut dyn Prompter,
    roster: &Roster,
) -> Result<AssignmentPlan> {
    let mut plan = AssignmentPlan::default();

    for duty in &roster.duties {
        for role in Role::ALL {
            if !prompter.confirm(&format!("Assign a {role} holder for {duty}?"))? {
                plan.unassigned.push(UnassignedDuty::new(duty.clone(), role));
                continue;
            }
            let choice = prompter.choose_one(
                &format!("Who's going to be the {role} for: {duty}?"),
                &roster.personnel,
            )?;
            let member = roster
                .personnel
                .get(choice)
                .cloned()
                .ok_or_else(|| invalid_choice(choice))?;
            debug!(%duty, %role, %member, "duty assigned");
            plan.assignments.push(Assignment::new(duty.clone(), role, member));
        }
    }

    Ok(plan)
}

/// Writes one letter per assignment into the output directory.
///
/// Every letter needs its own file name; a clash is reported before anything
/// is written.
#[instrument(level = "info", skip_all, fields(letters = plan.assignments.len()))]
pub fn generate_letters(
    plan: &AssignmentPlan,
    officer: &str,
    date: NaiveDate,
    config: &SessionConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir)?;

    let mut file_names = HashSet::with_capacity(plan.assignments.len());
    for assignment in &plan.assignments {
        let file_name = LetterRequest::new(assignment, officer).file_name();
        if !file_names.insert(file_name.clone()) {
            return Err(ToolError::DocumentWrite {
                path: config.output_dir.join(file_name),
                message: format!(
                    "{} {} for {} would overwrite an earlier letter",
                    assignment.role, assignment.duty, assignment.member
                ),
            });
        }
    }

    let mut written = Vec::with_capacity(plan.assignments.len());
    for assignment in &plan.assignments {
        let request = LetterRequest::new(assignment, officer);
        let document = letter::build_letter(&request, date, config.wrap_width)?;
        let path = docx_write::write_letter(&config.output_dir, &document, &request.file_name())?;
        info!(path = %path.display(), "letter written");
        written.push(path);
    }
    Ok(written)
}

fn invalid_choice(choice: usize) -> ToolError {
    ToolError::Prompt(format!("menu choice {} is out of range", choice + 1))
}
