use std::fmt;

/// Which holder of a duty an assignment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
}

impl Role {
    /// Both roles in the order the operator is asked about them.
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    /// Upper-case label used on letters, file names and the export sheet.
    pub fn label(self) -> &'static str {
        match self {
            Role::Primary => "PRIMARY",
            Role::Secondary => "SECONDARY",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A duty handed to a member of the department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub duty: String,
    pub role: Role,
    pub member: String,
}

impl Assignment {
    pub fn new(duty: impl Into<String>, role: Role, member: impl Into<String>) -> Self {
        Self {
            duty: duty.into(),
            role,
            member: member.into(),
        }
    }
}

/// A duty slot the operator chose to come back to later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignedDuty {
    pub duty: String,
    pub role: Role,
}

impl UnassignedDuty {
    pub fn new(duty: impl Into<String>, role: Role) -> Self {
        Self {
            duty: duty.into(),
            role,
        }
    }
}

/// Personnel and duty lists loaded from the two roster workbooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub personnel: Vec<String>,
    pub duties: Vec<String>,
}

/// Outcome of walking every duty with the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentPlan {
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<UnassignedDuty>,
}
