//! Risk-flagging check run before a student is evaluated.

use thiserror::Error;

use super::student::{Nationality, Student, StudentId};

/// A student flagged for removal from the simulation.
///
/// Returned as the error side of [`check`]; the evaluation loop turns it into
/// transcript lines and carries on with the next student.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} is flagged for deportation: too many missed lectures and the basics are not respected")]
pub struct RiskFlag {
    /// Identifier of the flagged student.
    pub student_id: StudentId,
    /// Name of the flagged student.
    pub name: String,
}

impl RiskFlag {
    /// Follow-up line reported after the flag itself.
    #[must_use]
    pub fn removal_notice(&self) -> String {
        format!("{} has been removed from the simulation", self.name)
    }
}

/// Flag the student iff at risk and a non-union member.
///
/// # Errors
///
/// Returns [`RiskFlag`] when the student is flagged.
pub fn check(student: &Student) -> Result<(), RiskFlag> {
    if student.is_at_risk() && student.nationality() == Nationality::NonUnionMember {
        return Err(RiskFlag {
            student_id: student.id(),
            name: student.name().to_string(),
        });
    }
    Ok(())
}
