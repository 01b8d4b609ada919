//! Demotion rule - knocks the tier down one step for dictionary words.

use crate::types::PasswordStrength;
use secrecy::{ExposeSecret, SecretString};

/// Applies the dictionary penalty to an already-computed tier.
///
/// The predicate is queried with the full password text; a hit demotes
/// Strong to Medium and Medium to Weak. Weak stays Weak.
pub fn dictionary_demotion(
    strength: PasswordStrength,
    password: &SecretString,
    is_dictionary_word: impl Fn(&str) -> bool,
) -> PasswordStrength {
    if is_dictionary_word(password.expose_secret()) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password matches a dictionary word, demoting tier");
        strength.demoted()
    } else {
        strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_demotion_strong_hit() {
        let pwd = secret("correcthorsebatterystaple");
        let result = dictionary_demotion(PasswordStrength::Strong, &pwd, |_| true);
        assert_eq!(result, PasswordStrength::Medium);
    }

    #[test]
    fn test_demotion_medium_hit() {
        let pwd = secret("possibility");
        let result = dictionary_demotion(PasswordStrength::Medium, &pwd, |_| true);
        assert_eq!(result, PasswordStrength::Weak);
    }

    #[test]
    fn test_demotion_weak_hit_stays_weak() {
        let pwd = secret("cat");
        let result = dictionary_demotion(PasswordStrength::Weak, &pwd, |_| true);
        assert_eq!(result, PasswordStrength::Weak);
    }

    #[test]
    fn test_demotion_miss_keeps_tier() {
        let pwd = secret("xk3!pv9z#qwL20chars!");
        let result = dictionary_demotion(PasswordStrength::Strong, &pwd, |_| false);
        assert_eq!(result, PasswordStrength::Strong);
    }

    #[test]
    fn test_demotion_predicate_sees_full_text() {
        let pwd = secret("hello world");
        let seen = std::cell::RefCell::new(String::new());
        let result = dictionary_demotion(PasswordStrength::Medium, &pwd, |w| {
            *seen.borrow_mut() = w.to_string();
            false
        });
        assert_eq!(result, PasswordStrength::Medium);
        assert_eq!(*seen.borrow(), "hello world");
    }
}
