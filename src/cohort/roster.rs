//! The ordered collection of students for one run.

use super::student::{Nationality, Student, StudentId};
use crate::config::StudentSpec;
use crate::engine::rng::SimRng;

/// Ordered, in-memory roster owned by the simulation driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create students from seed records, drawing an identifier for each.
    #[must_use]
    pub fn from_specs(specs: &[StudentSpec], rng: &mut SimRng) -> Self {
        let students = specs
            .iter()
            .map(|spec| {
                Student::new(
                    StudentId::generate(rng),
                    spec.name.clone(),
                    spec.lectures_missed,
                    spec.respects_basics,
                    spec.nationality,
                )
            })
            .collect();
        Self { students }
    }

    /// Promote one uniformly chosen non-union member to the immune variant.
    ///
    /// The student keeps its roster position. Returns the promoted student,
    /// or `None` when the roster has no non-union members.
    pub fn grant_exemption(&mut self, rng: &mut SimRng) -> Option<&Student> {
        let candidates: Vec<usize> = self
            .students
            .iter()
            .enumerate()
            .filter(|(_, s)| s.nationality() == Nationality::NonUnionMember)
            .map(|(i, _)| i)
            .collect();

        let idx = candidates[rng.choose_index(candidates.len())?];
        let promoted = self.students[idx].clone().into_immune();
        self.students[idx] = promoted;
        self.students.get(idx)
    }

    /// Students in roster order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Mutable iteration in roster order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Student> {
        self.students.iter_mut()
    }

    /// Number of students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
