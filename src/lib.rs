//! Sign-up form checks
//!
//! This library scores candidate passwords for a registration form: an
//! ordered list of rule hints, an entropy score (0-100) and a redundancy
//! score, plus name validation and a submit-readiness predicate.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file used by
//!   [`Blacklist::from_env`] (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use signup_guard::{can_submit, evaluate_password, validate_name};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("AbcdEf12!@34".to_string().into());
//! let evaluation = evaluate_password(&password);
//!
//! assert!(evaluation.all_satisfied());
//! assert_eq!(evaluation.entropy(), 100);
//! assert!(evaluation.redundancy() <= 20);
//!
//! assert!(!validate_name("A").is_valid());
//! assert!(can_submit("Alice", &password));
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod form;
mod name;
mod rules;
mod types;

// Public API
pub use blacklist::{BLACKLIST_PATH_ENV, Blacklist, BlacklistError, blacklist_path};
pub use evaluator::{Evaluator, evaluate_password};
pub use form::can_submit;
pub use name::{MIN_NAME_LENGTH, NameError, NameValidation, validate_name};
pub use rules::{MAX_REDUNDANCY, MIN_LENGTH, PasswordRule, RULES, redundancy};
pub use types::{HintResult, PasswordEvaluation, RuleId, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
