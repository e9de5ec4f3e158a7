//! Option exercise styles.
//!
//! An `ExerciseType` defines *when* an option can be exercised. Exercise
//! dates are not modelled: an option lives on `[0, T]` in year fractions.

use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    #[default]
    European,
    /// Can be exercised at any time up to expiry.
    American,
}

impl ExerciseType {
    /// Build from the `is_american` flag of the flat pricing interface.
    pub fn from_is_american(is_american: bool) -> Self {
        if is_american {
            ExerciseType::American
        } else {
            ExerciseType::European
        }
    }

    /// `true` if early exercise is allowed.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_exercise_flag() {
        assert!(ExerciseType::American.allows_early_exercise());
        assert!(!ExerciseType::European.allows_early_exercise());
        assert_eq!(ExerciseType::from_is_american(true), ExerciseType::American);
        assert_eq!(ExerciseType::default(), ExerciseType::European);
    }
}
