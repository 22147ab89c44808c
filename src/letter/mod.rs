//! Content of the appointment letter.
//!
//! The letter follows a fixed memorandum template. Only the date, the member,
//! the role, the duty title and the signing officer vary between letters, so
//! the builder produces a plain [`LetterDocument`] that the writers in
//! [`crate::io`] can serialise without knowing anything about the template.

pub mod wrap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::{Assignment, Role};

pub use wrap::{DEFAULT_WRAP_WIDTH, WrappedTitle, wrap_title};

const FROM_BLOCK: &str = "From: Division Officer, Pharmacy Department, Navy Medicine Readiness and Training\n           Command Lemoore";
const VIA_LINE: &str = "Via:    Leading Chief Petty Officer, Pharmacy Department";
const REFERENCE_BLOCK: &str = "Ref:    (a) NMRTC PHARMACY DEPARTMENT COLLATERAL DUTY \n\t    EXPECTATIONS\n           (b) NMRTC PHARMACY DEPARTMENT PERSONAL QUALIFICATION\n                STANDARDS";
const REMEDIAL_PARAGRAPH: &str = "2.  Failure to properly execute assigned duties will result in remedial training from the department Leading Petty Officer for correction.  If remedial corrective actions prove unsuccessful, it will be the recommendation of leadership to forward to Leading Petty Officer, and or Senior Enlisted Leader for further disciplinary review and actions.";
const DURATION_PARAGRAPH: &str =
    "3.  This appointment will remain in effect until reassignment, unless otherwise directed.";
const COPY_TO_BLOCK: &str = "Copy to:\nDIVO FOLDER";
const SIGNATURE_INDENT: &str = "\t\t\t\t\t\t\t";
const LETTER_SUFFIX: &str = "Appointment Letter";

/// Extension used for generated letters.
pub const LETTER_EXTENSION: &str = "docx";

/// Part of the memorandum a paragraph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Date,
    Heading,
    Addressing,
    Subject,
    References,
    Body,
    Spacing,
    Signature,
    CopyTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// A single paragraph. `\n` marks a line break and `\t` a tab stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub section: Section,
    pub text: String,
    pub bold: bool,
    pub alignment: Alignment,
}

impl Paragraph {
    fn new(section: Section, text: impl Into<String>) -> Self {
        Self {
            section,
            text: text.into(),
            bold: false,
            alignment: Alignment::Left,
        }
    }

    fn spacing() -> Self {
        Self::new(Section::Spacing, String::new())
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// The full memorandum for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDocument {
    paragraphs: Vec<Paragraph>,
}

impl LetterDocument {
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// First paragraph of the given section, if the letter has one.
    pub fn section(&self, section: Section) -> Option<&Paragraph> {
        self.paragraphs.iter().find(|p| p.section == section)
    }

    /// All paragraphs of the given section in document order.
    pub fn sections(&self, section: Section) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(move |p| p.section == section)
    }
}

/// Values substituted into the letter template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRequest {
    pub duty: String,
    pub member: String,
    pub role: Role,
    pub officer: String,
}

impl LetterRequest {
    pub fn new(assignment: &Assignment, officer: impl Into<String>) -> Self {
        Self {
            duty: assignment.duty.clone(),
            member: assignment.member.clone(),
            role: assignment.role,
            officer: officer.into(),
        }
    }

    /// File name the letter is saved under.
    pub fn file_name(&self) -> String {
        letter_file_name(&self.duty, self.role, &self.member)
    }
}

/// Formats a date as `D MMM YYYY`, e.g. `5 Mar 2024`.
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Builds the subject line, wrapping the duty title when it is too long.
pub fn subject_line(duty: &str, role: Role, wrap_width: usize) -> Result<String> {
    let title = wrap_title(duty, wrap_width)?.to_uppercase();
    Ok(format!("Subj:  APPOINTMENT AS {} {title}", role.label()))
}

/// Assembles the memorandum for `request`, dated `date`.
pub fn build_letter(
    request: &LetterRequest,
    date: NaiveDate,
    wrap_width: usize,
) -> Result<LetterDocument> {
    let subject = subject_line(&request.duty, request.role, wrap_width)?;

    let paragraphs = vec![
        Paragraph::new(Section::Date, format_letter_date(date)).align(Alignment::Right),
        Paragraph::new(Section::Heading, "MEMORANDUM").bold(),
        Paragraph::new(
            Section::Addressing,
            format!("{FROM_BLOCK}\nTo:     {}, USN\n{VIA_LINE}", request.member),
        ),
        Paragraph::new(Section::Subject, subject),
        Paragraph::new(Section::References, REFERENCE_BLOCK),
        Paragraph::new(Section::Body, appointment_paragraph(&request.duty)),
        Paragraph::new(Section::Body, REMEDIAL_PARAGRAPH),
        Paragraph::new(Section::Body, DURATION_PARAGRAPH),
        Paragraph::spacing(),
        Paragraph::spacing(),
        Paragraph::new(
            Section::Signature,
            format!("{SIGNATURE_INDENT}{}", request.officer.to_uppercase()),
        ),
        Paragraph::spacing(),
        Paragraph::new(Section::CopyTo, COPY_TO_BLOCK),
    ];

    Ok(LetterDocument { paragraphs })
}

fn appointment_paragraph(duty: &str) -> String {
    format!(
        "1.  Effective immediately, you are hereby appointed as the {duty} for the Pharmacy \
         Department at Navy Medicine Readiness and Training Command Lemoore.  You will be \
         guided in the conduct of your duties by reference (a) and (b) and directly \
         responsible to the Division Officer."
    )
}

/// Replaces path separators so the value can be used inside a file name.
pub fn sanitize_file_component(value: &str) -> String {
    value.replace(['/', '\\'], "-")
}

/// `{duty} Appointment Letter-{ROLE} {member}.docx` with separators removed.
pub fn letter_file_name(duty: &str, role: Role, member: &str) -> String {
    format!(
        "{} {LETTER_SUFFIX}-{} {}.{LETTER_EXTENSION}",
        sanitize_file_component(duty),
        role.label(),
        sanitize_file_component(member),
    )
}
