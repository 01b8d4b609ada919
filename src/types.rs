//! Strength tiers and evaluation results.

/// Password strength tier.
///
/// Ordered: `Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Human-readable description shown next to the indicator.
    pub fn description(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Too weak",
            PasswordStrength::Medium => "Could be stronger",
            PasswordStrength::Strong => "Strong password",
        }
    }

    /// Demotes by one tier. Weak is the floor.
    pub fn demoted(self) -> PasswordStrength {
        match self {
            PasswordStrength::Strong => PasswordStrength::Medium,
            PasswordStrength::Medium | PasswordStrength::Weak => PasswordStrength::Weak,
        }
    }
}

/// Result of classifying one edit.
///
/// Produced fresh on every evaluation; `description` always matches
/// `strength` after any dictionary demotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub strength: PasswordStrength,
    pub description: &'static str,
    /// True when the edit crossed a tier boundary and the indicator
    /// animation should play.
    pub changed: bool,
}
