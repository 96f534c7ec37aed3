//! Student records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::rng::SimRng;

/// Lectures missed beyond this count put a student at risk.
pub const RISK_MISSED_THRESHOLD: u32 = 4;

/// Opaque student identifier, generated once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Draw a fresh identifier from the run's random source.
    #[must_use]
    pub fn generate(rng: &mut SimRng) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen_bytes16()).into_uuid())
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Nationality category of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    /// Local citizen.
    Local,
    /// Citizen of a union member state.
    UnionMember,
    /// Citizen of a state outside the union.
    NonUnionMember,
}

impl std::fmt::Display for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Local => "local",
            Self::UnionMember => "union member",
            Self::NonUnionMember => "non-union member",
        };
        f.write_str(label)
    }
}

/// Capability set governing risk evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Regular risk evaluation.
    #[default]
    Standard,
    /// Never at risk.
    Immune,
}

/// A single student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    lectures_missed: u32,
    respects_basics: bool,
    nationality: Nationality,
    standing: Standing,
}

impl Student {
    /// Create a student with standard standing.
    #[must_use]
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        lectures_missed: u32,
        respects_basics: bool,
        nationality: Nationality,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            lectures_missed,
            respects_basics,
            nationality,
            standing: Standing::Standard,
        }
    }

    /// Promote to the immune variant, keeping every other attribute.
    #[must_use]
    pub fn into_immune(self) -> Self {
        Self {
            standing: Standing::Immune,
            ..self
        }
    }

    /// Attend a lecture: one fewer missed lecture, floored at zero.
    pub fn attend(&mut self) {
        self.lectures_missed = self.lectures_missed.saturating_sub(1);
    }

    /// Whether the student has missed too much while not respecting the basics.
    ///
    /// Immune students are never at risk.
    #[must_use]
    pub const fn is_at_risk(&self) -> bool {
        match self.standing {
            Standing::Immune => false,
            Standing::Standard => {
                self.lectures_missed > RISK_MISSED_THRESHOLD && !self.respects_basics
            }
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// Name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of lectures currently counted as missed.
    #[must_use]
    pub const fn lectures_missed(&self) -> u32 {
        self.lectures_missed
    }

    /// Whether the student respects the basics.
    #[must_use]
    pub const fn respects_basics(&self) -> bool {
        self.respects_basics
    }

    /// Nationality category.
    #[must_use]
    pub const fn nationality(&self) -> Nationality {
        self.nationality
    }

    /// Current standing.
    #[must_use]
    pub const fn standing(&self) -> Standing {
        self.standing
    }

    /// Shorthand for `standing() == Standing::Immune`.
    #[must_use]
    pub const fn is_immune(&self) -> bool {
        matches!(self.standing, Standing::Immune)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(missed: u32, respects: bool, nationality: Nationality) -> Student {
        let mut rng = SimRng::new(42);
        Student::new(StudentId::generate(&mut rng), "Test", missed, respects, nationality)
    }

    #[test]
    fn test_attend_decrements() {
        let mut s = student(3, true, Nationality::Local);
        s.attend();
        assert_eq!(s.lectures_missed(), 2);
    }

    #[test]
    fn test_attend_floors_at_zero() {
        let mut s = student(0, true, Nationality::Local);
        s.attend();
        s.attend();
        assert_eq!(s.lectures_missed(), 0);
    }

    #[test]
    fn test_at_risk_boundary() {
        assert!(!student(4, false, Nationality::Local).is_at_risk());
        assert!(student(5, false, Nationality::Local).is_at_risk());
        assert!(!student(9, true, Nationality::Local).is_at_risk());
    }

    #[test]
    fn test_immune_never_at_risk() {
        let s = student(20, false, Nationality::NonUnionMember).into_immune();
        assert!(s.is_immune());
        assert!(!s.is_at_risk());
    }

    #[test]
    fn test_into_immune_keeps_attributes() {
        let original = student(5, false, Nationality::NonUnionMember);
        let promoted = original.clone().into_immune();
        assert_eq!(promoted.id(), original.id());
        assert_eq!(promoted.name(), original.name());
        assert_eq!(promoted.lectures_missed(), original.lectures_missed());
        assert_eq!(promoted.respects_basics(), original.respects_basics());
        assert_eq!(promoted.nationality(), original.nationality());
        assert_eq!(original.standing(), Standing::Standard);
        assert_eq!(promoted.standing(), Standing::Immune);
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut rng = SimRng::new(1);
        let a = StudentId::generate(&mut rng);
        let b = StudentId::generate(&mut rng);
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36);
    }

    #[test]
    fn test_nationality_display() {
        assert_eq!(Nationality::NonUnionMember.to_string(), "non-union member");
    }

    #[test]
    fn test_nationality_serde() {
        let yaml = serde_yaml::to_string(&Nationality::NonUnionMember).unwrap();
        assert_eq!(yaml.trim(), "non_union_member");
    }
}
