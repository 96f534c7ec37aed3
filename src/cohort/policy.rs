//! Pass/fail evaluation policies.
//!
//! The three policies are interchangeable and stateless. No ordering between
//! their pass sets is assumed: a student can pass `Strict` and still fail
//! `WeightedScore`.

use serde::{Deserialize, Serialize};

use super::student::Student;
use crate::engine::rng::SimRng;

/// Weighted score at or above this fails.
pub const WEIGHTED_PASS_BELOW: f64 = 5.0;

/// A pass/fail decision rule over a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Pass iff at most 2 lectures missed and the basics are respected.
    Strict,
    /// Pass iff at most 6 lectures missed or the basics are respected.
    Lenient,
    /// Pass iff `missed * 0.8 ± 2` is below 5.
    WeightedScore,
}

impl Policy {
    /// Every policy, in selection order.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Lenient, Self::WeightedScore];

    /// Pick a policy uniformly at random.
    pub fn choose(rng: &mut SimRng) -> Self {
        // ALL is non-empty, so the index is always present.
        rng.choose_index(Self::ALL.len())
            .map_or(Self::Strict, |i| Self::ALL[i])
    }

    /// Decide whether the student passes.
    #[must_use]
    pub fn evaluate(self, student: &Student) -> bool {
        match self {
            Self::Strict => student.lectures_missed() <= 2 && student.respects_basics(),
            Self::Lenient => student.lectures_missed() <= 6 || student.respects_basics(),
            Self::WeightedScore => weighted_score(student) < WEIGHTED_PASS_BELOW,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
            Self::WeightedScore => "weighted score",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Score used by [`Policy::WeightedScore`]; lower is better.
#[must_use]
pub fn weighted_score(student: &Student) -> f64 {
    let conduct = if student.respects_basics() { -2.0 } else { 2.0 };
    f64::from(student.lectures_missed()) * 0.8 + conduct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cohort::student::{Nationality, StudentId};

    fn student(missed: u32, respects: bool) -> Student {
        let mut rng = SimRng::new(3);
        Student::new(StudentId::generate(&mut rng), "S", missed, respects, Nationality::Local)
    }

    #[test]
    fn test_strict() {
        assert!(Policy::Strict.evaluate(&student(2, true)));
        assert!(!Policy::Strict.evaluate(&student(3, true)));
        assert!(!Policy::Strict.evaluate(&student(0, false)));
    }

    #[test]
    fn test_lenient() {
        assert!(Policy::Lenient.evaluate(&student(6, false)));
        assert!(!Policy::Lenient.evaluate(&student(7, false)));
        assert!(Policy::Lenient.evaluate(&student(30, true)));
    }

    #[test]
    fn test_strict_and_lenient_samples() {
        let s = student(3, false);
        assert!(!Policy::Strict.evaluate(&s));
        assert!(Policy::Lenient.evaluate(&s));

        // missed=0 without respecting the basics fails strict.
        let s = student(0, false);
        assert!(!Policy::Strict.evaluate(&s));
        assert!(Policy::Lenient.evaluate(&s));
    }

    #[test]
    fn test_weighted_score_values() {
        assert!((weighted_score(&student(5, false)) - 6.0).abs() < 1e-12);
        assert!((weighted_score(&student(5, true)) - 2.0).abs() < 1e-12);
        assert!(!Policy::WeightedScore.evaluate(&student(5, false)));
        assert!(Policy::WeightedScore.evaluate(&student(5, true)));
    }

    #[test]
    fn test_weighted_score_boundary() {
        // 0.8 * 3 + 2 = 4.4 passes; 0.8 * 4 + 2 = 5.2 fails.
        assert!(Policy::WeightedScore.evaluate(&student(3, false)));
        assert!(!Policy::WeightedScore.evaluate(&student(4, false)));
        // 0.8 * 8 - 2 = 4.4 passes; 0.8 * 9 - 2 = 5.2 fails.
        assert!(Policy::WeightedScore.evaluate(&student(8, true)));
        assert!(!Policy::WeightedScore.evaluate(&student(9, true)));
    }

    #[test]
    fn test_choose_draws_every_policy() {
        let mut rng = SimRng::new(11);
        let drawn: std::collections::HashSet<Policy> =
            (0..200).map(|_| Policy::choose(&mut rng)).collect();
        assert_eq!(drawn.len(), Policy::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(Policy::WeightedScore.to_string(), "weighted score");
    }
}
