//! Password entry field state machine
//!
//! This library provides the toolkit-free state of a password entry
//! control: tiered strength classification with an optional
//! dictionary-word penalty, a boundary-crossing transition signal that
//! gates the indicator animation, secure-entry toggling, and edit
//! interception by splicing.
//!
//! # Features
//!
//! - `async` (default): Enables field event delivery over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the dictionary word list
//!   (default: `./assets/dictionary.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use password_field::{init_dictionary, is_dictionary_word, PasswordField};
//! use secrecy::ExposeSecret;
//!
//! // Initialize the dictionary (call once at startup); fall back to a
//! // penalty-free field if the word list is unavailable.
//! let mut field = match init_dictionary() {
//!     Ok(_) => PasswordField::with_dictionary(is_dictionary_word),
//!     Err(_) => PasswordField::new(),
//! };
//!
//! // A keystroke proposes an edit; the evaluation drives the view.
//! if let Some(evaluation) = field.propose_edit(0..0, "correct horse") {
//!     println!("{} (animate: {})", evaluation.description, evaluation.changed);
//! }
//!
//! // The user finished editing.
//! let password = field.commit();
//! println!("committed {} chars", password.expose_secret().chars().count());
//! ```

// Internal modules
mod classifier;
mod dictionary;
mod field;
mod rules;
mod types;

// Public API
pub use classifier::classify_password;
pub use dictionary::{
    get_dictionary, init_dictionary, init_dictionary_from_path, is_dictionary_word,
    DictionaryError,
};
pub use field::{
    DictionaryPredicate, IndicatorState, PasswordField, SecureEntryIcon, SegmentState,
};
pub use types::{PasswordStrength, StrengthEvaluation};

#[cfg(feature = "async")]
pub use field::FieldEvent;
