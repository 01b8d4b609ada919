//! Tier rule - assigns a strength tier from password length.

use crate::types::PasswordStrength;

/// Shortest length that classifies as Medium.
pub const MEDIUM_MIN: usize = 10;

/// Shortest length that classifies as Strong.
pub const STRONG_MIN: usize = 20;

/// Maps a password length (in characters) to its strength tier.
///
/// Total over all lengths: 0-9 Weak, 10-19 Medium, 20+ Strong.
pub fn tier_for_length(len: usize) -> PasswordStrength {
    if len >= STRONG_MIN {
        PasswordStrength::Strong
    } else if len >= MEDIUM_MIN {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}
