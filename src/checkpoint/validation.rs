//! Structural validation of checkpoint data.
//!
//! Uses Validation to accumulate ALL violations, so a damaged checkpoint
//! is reported in full rather than one problem at a time.

use super::error::{CheckpointError, CheckpointViolation};
use super::Checkpoint;
use crate::core::Symbol;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<CheckpointViolation>>;

impl<S: Symbol> Checkpoint<S> {
    /// Check every structural invariant, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CheckpointViolation>> {
        let mut known: HashSet<&S> = HashSet::with_capacity(self.records.len());
        let mut checks: Vec<Check> = Vec::new();

        for record in &self.records {
            if !known.insert(record.symbol()) {
                checks.push(Validation::fail(CheckpointViolation::DuplicateRecord {
                    symbol: record.symbol().name().to_string(),
                }));
            }
        }

        if !known.contains(&S::none()) {
            checks.push(Validation::fail(CheckpointViolation::MissingNoneRecord));
        }

        for record in &self.records {
            for next in record.observed_next() {
                if !known.contains(next) {
                    checks.push(Validation::fail(CheckpointViolation::DanglingTransition {
                        from: record.symbol().name().to_string(),
                        to: next.name().to_string(),
                    }));
                }
            }
        }

        if !known.contains(&self.training_cursor) {
            checks.push(Validation::fail(CheckpointViolation::UnknownTrainingCursor {
                cursor: self.training_cursor.name().to_string(),
            }));
        }

        if !known.contains(&self.play_cursor) {
            checks.push(Validation::fail(CheckpointViolation::UnknownPlayCursor {
                cursor: self.play_cursor.name().to_string(),
            }));
        }

        let observations = self.observation_count();
        if self.trained != (observations > 0) {
            checks.push(Validation::fail(CheckpointViolation::TrainedFlagMismatch {
                trained: self.trained,
                observations,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and convert the outcome into a `Result`.
    pub fn ensure_valid(&self) -> Result<(), CheckpointError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(CheckpointError::ValidationFailed {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}
