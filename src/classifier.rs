//! Strength classifier - main classification logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{crosses_boundary, dictionary_demotion, tier_for_length};
use crate::types::StrengthEvaluation;

/// Classifies the candidate password and decides whether the edit that
/// produced it crossed a tier boundary.
///
/// # Arguments
/// * `new_text` - The candidate text after the edit
/// * `old_text` - The full text before the edit
/// * `dictionary_penalty` - Enables the one-step dictionary demotion
/// * `is_dictionary_word` - Known-word predicate; queried only when the
///   penalty is enabled, and only with `new_text`
///
/// # Returns
/// A `StrengthEvaluation` with the final tier, its description, and the
/// transition signal.
pub fn classify_password(
    new_text: &SecretString,
    old_text: &SecretString,
    dictionary_penalty: bool,
    is_dictionary_word: impl Fn(&str) -> bool,
) -> StrengthEvaluation {
    let new_len = new_text.expose_secret().chars().count();
    let old_len = old_text.expose_secret().chars().count();

    let mut strength = tier_for_length(new_len);

    if dictionary_penalty {
        strength = dictionary_demotion(strength, new_text, is_dictionary_word);
    }

    // The signal is derived from the old text's length against the final
    // tier's range, not from a stored previous tier.
    let changed = crosses_boundary(strength, old_len);

    StrengthEvaluation {
        strength,
        description: strength.description(),
        changed,
    }
}
