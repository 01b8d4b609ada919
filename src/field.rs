//! Password field state
//!
//! Owns the text being edited, the committed password, the secure-entry
//! flag, and the last displayed strength. Produces the view-model values
//! (description, indicator segments, icon) a presentation layer renders.

use std::ops::Range;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::classifier::classify_password;
use crate::types::{PasswordStrength, StrengthEvaluation};

/// Known-word predicate injected into the field.
pub type DictionaryPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Icon shown on the show/hide button, named by asset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureEntryIcon {
    EyesClosed,
    EyesOpen,
}

impl SecureEntryIcon {
    pub fn asset_name(self) -> &'static str {
        match self {
            SecureEntryIcon::EyesClosed => "eyes-closed",
            SecureEntryIcon::EyesOpen => "eyes-open",
        }
    }
}

/// Appearance of one indicator segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Unused,
    Lit,
}

/// View-model for the three-segment strength indicator.
///
/// The weak segment is always lit; segments above the achieved tier are
/// unused. `pulse` names the segment to animate, set only for edits that
/// crossed a tier boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub weak: SegmentState,
    pub medium: SegmentState,
    pub strong: SegmentState,
    pub pulse: Option<PasswordStrength>,
}

impl IndicatorState {
    pub fn new(strength: PasswordStrength, changed: bool) -> Self {
        let lit_from = |min: PasswordStrength| {
            if strength >= min {
                SegmentState::Lit
            } else {
                SegmentState::Unused
            }
        };
        Self {
            weak: SegmentState::Lit,
            medium: lit_from(PasswordStrength::Medium),
            strong: lit_from(PasswordStrength::Strong),
            pulse: if changed { Some(strength) } else { None },
        }
    }

    /// Indicator state for a just-computed evaluation.
    pub fn for_evaluation(evaluation: &StrengthEvaluation) -> Self {
        Self::new(evaluation.strength, evaluation.changed)
    }
}

/// Event emitted to observers of the field.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub enum FieldEvent {
    /// An edit was accepted and classified.
    StrengthChanged(StrengthEvaluation),
    /// Editing finished; the committed password is readable on the field.
    ValueCommitted,
}

/// State of a password entry control.
///
/// All mutation goes through [`propose_edit`](Self::propose_edit),
/// [`commit`](Self::commit) and
/// [`toggle_obscured`](Self::toggle_obscured); every operation runs to
/// completion on the caller's thread.
pub struct PasswordField {
    text: SecretString,
    password: SecretString,
    obscured: bool,
    strength: PasswordStrength,
    description: &'static str,
    dictionary: Option<DictionaryPredicate>,
    #[cfg(feature = "async")]
    events: Option<mpsc::Sender<FieldEvent>>,
}

impl PasswordField {
    /// Creates an empty, obscured field with the dictionary penalty
    /// disabled.
    pub fn new() -> Self {
        Self {
            text: SecretString::new(String::new().into()),
            password: SecretString::new(String::new().into()),
            obscured: true,
            strength: PasswordStrength::Weak,
            description: PasswordStrength::Weak.description(),
            dictionary: None,
            #[cfg(feature = "async")]
            events: None,
        }
    }

    /// Creates a field with the dictionary penalty enabled.
    ///
    /// Callers whose dictionary failed to load should use [`new`](Self::new)
    /// instead, which leaves the penalty path disabled.
    pub fn with_dictionary(is_dictionary_word: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        let mut field = Self::new();
        field.dictionary = Some(Box::new(is_dictionary_word));
        field
    }

    /// Registers the channel that receives [`FieldEvent`]s. Events are
    /// delivered with a non-blocking send; a full or closed channel drops
    /// the event.
    #[cfg(feature = "async")]
    pub fn set_event_sender(&mut self, sender: mpsc::Sender<FieldEvent>) {
        self.events = Some(sender);
    }

    /// Proposes replacing the char range `range` of the current text with
    /// `replacement`, the way a text-field delegate reports a pending edit.
    ///
    /// On accept the spliced text becomes the working text, the displayed
    /// strength is updated and the evaluation is returned. A range that is
    /// not a valid char range of the current text rejects the edit and
    /// leaves the field untouched.
    pub fn propose_edit(
        &mut self,
        range: Range<usize>,
        replacement: &str,
    ) -> Option<StrengthEvaluation> {
        let spliced = splice(self.text.expose_secret(), &range, replacement)?;
        let new_text = SecretString::new(spliced.into());

        let evaluation = match &self.dictionary {
            Some(is_word) => classify_password(&new_text, &self.text, true, is_word),
            None => classify_password(&new_text, &self.text, false, |_| false),
        };

        self.text = new_text;
        self.strength = evaluation.strength;
        self.description = evaluation.description;

        #[cfg(feature = "async")]
        self.send_event(FieldEvent::StrengthChanged(evaluation.clone()));

        Some(evaluation)
    }

    /// Commits the working text as the field's password and notifies
    /// observers once.
    pub fn commit(&mut self) -> &SecretString {
        self.password = SecretString::new(self.text.expose_secret().to_owned().into());

        #[cfg(feature = "async")]
        self.send_event(FieldEvent::ValueCommitted);

        &self.password
    }

    /// Flips obscuration and returns the icon for the new state.
    pub fn toggle_obscured(&mut self) -> SecureEntryIcon {
        self.obscured = !self.obscured;
        self.secure_entry_icon()
    }

    /// The committed password. Empty until the first [`commit`](Self::commit).
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// The text currently being edited.
    pub fn text(&self) -> &SecretString {
        &self.text
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_obscured(&self) -> bool {
        self.obscured
    }

    pub fn secure_entry_icon(&self) -> SecureEntryIcon {
        if self.obscured {
            SecureEntryIcon::EyesClosed
        } else {
            SecureEntryIcon::EyesOpen
        }
    }

    /// Steady-state indicator for the displayed strength, with no pulse.
    pub fn indicator(&self) -> IndicatorState {
        IndicatorState::new(self.strength, false)
    }

    #[cfg(feature = "async")]
    fn send_event(&self, event: FieldEvent) {
        if let Some(tx) = &self.events {
            if let Err(_e) = tx.try_send(event) {
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to deliver field event: {}", _e);
            }
        }
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}

/// Splices `replacement` over the char range `range` of `text`.
///
/// Returns `None` when the range is inverted or runs past the end of the
/// text. Indices are chars, matching how the classifier counts length.
fn splice(text: &str, range: &Range<usize>, replacement: &str) -> Option<String> {
    let char_count = text.chars().count();
    if range.start > range.end || range.end > char_count {
        return None;
    }

    let mut spliced = String::with_capacity(text.len() + replacement.len());
    spliced.extend(text.chars().take(range.start));
    spliced.push_str(replacement);
    spliced.extend(text.chars().skip(range.end));
    Some(spliced)
}
