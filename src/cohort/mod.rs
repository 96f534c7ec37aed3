//! Cohort domain: students, lecture catalog, evaluation policies and the
//! risk-flagging rule.

pub mod catalog;
pub mod flagging;
pub mod policy;
pub mod roster;
pub mod student;

pub use catalog::{week_label, ContentCatalog};
pub use flagging::RiskFlag;
pub use policy::Policy;
pub use roster::Roster;
pub use student::{Nationality, Standing, Student, StudentId};
