//! Sign-up form readiness.

use secrecy::SecretString;

use crate::evaluator::Evaluator;

/// Whether the submit button should be enabled.
///
/// True iff `name` is valid and `password` satisfies every rule of the
/// default evaluator. Cheap enough to call on every input change.
pub fn can_submit(name: &str, password: &SecretString) -> bool {
    Evaluator::new().can_submit(name, password)
}
