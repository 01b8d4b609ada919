//! Transition rule - decides whether an edit crossed a tier boundary.

use crate::types::PasswordStrength;

use super::{MEDIUM_MIN, STRONG_MIN};

/// Returns true when the indicator should animate for this edit.
///
/// The check re-derives whether the old text already sat in the final
/// tier's length range, instead of comparing against a stored previous
/// tier. Edits that stay inside one range never re-signal; edits that
/// land in the range from outside always do, even when demotion left
/// the displayed tier unchanged.
pub fn crosses_boundary(strength: PasswordStrength, old_len: usize) -> bool {
    match strength {
        PasswordStrength::Weak => old_len >= MEDIUM_MIN,
        PasswordStrength::Medium => old_len >= STRONG_MIN || old_len < MEDIUM_MIN,
        PasswordStrength::Strong => old_len < STRONG_MIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_silent_from_weak_range() {
        assert!(!crosses_boundary(PasswordStrength::Weak, 0));
        assert!(!crosses_boundary(PasswordStrength::Weak, 9));
    }

    #[test]
    fn test_weak_signals_from_above() {
        assert!(crosses_boundary(PasswordStrength::Weak, 10));
        assert!(crosses_boundary(PasswordStrength::Weak, 25));
    }

    #[test]
    fn test_medium_silent_inside_range() {
        assert!(!crosses_boundary(PasswordStrength::Medium, 10));
        assert!(!crosses_boundary(PasswordStrength::Medium, 15));
        assert!(!crosses_boundary(PasswordStrength::Medium, 19));
    }

    #[test]
    fn test_medium_signals_from_either_side() {
        assert!(crosses_boundary(PasswordStrength::Medium, 9));
        assert!(crosses_boundary(PasswordStrength::Medium, 20));
    }

    #[test]
    fn test_strong_silent_from_strong_range() {
        assert!(!crosses_boundary(PasswordStrength::Strong, 20));
        assert!(!crosses_boundary(PasswordStrength::Strong, 64));
    }

    #[test]
    fn test_strong_signals_from_below() {
        assert!(crosses_boundary(PasswordStrength::Strong, 19));
        assert!(crosses_boundary(PasswordStrength::Strong, 0));
    }
}
