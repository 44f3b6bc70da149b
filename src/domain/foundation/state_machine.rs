//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing phase
//! transitions of the assessment flow.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AssessmentPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Intake, Answering) | (Answering, Results) | (Results, Answering)
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Intake => vec![Answering],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let next = session.phase().transition_to(AssessmentPhase::Results)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "phase",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A one-way fuse: intact until blown, then nothing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Fuse {
        Intact,
        Blown,
    }

    impl StateMachine for Fuse {
        fn can_transition_to(&self, target: &Self) -> bool {
            matches!((self, target), (Fuse::Intact, Fuse::Blown))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Fuse::Intact => vec![Fuse::Blown],
                Fuse::Blown => vec![],
            }
        }
    }

    #[test]
    fn allowed_transition_returns_target() {
        assert_eq!(Fuse::Intact.transition_to(Fuse::Blown), Ok(Fuse::Blown));
    }

    #[test]
    fn rejected_transition_names_both_states() {
        let err = Fuse::Blown.transition_to(Fuse::Intact).unwrap_err();
        assert_eq!(err.field(), "phase");
        assert!(err.to_string().contains("Blown to Intact"));
    }

    #[test]
    fn state_without_exits_is_terminal() {
        assert!(Fuse::Blown.is_terminal());
        assert!(!Fuse::Intact.is_terminal());
    }
}
