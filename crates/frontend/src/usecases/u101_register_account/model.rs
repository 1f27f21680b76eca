//! Mock submission of the registration form.

use super::state::{validate_all, RegistrationForm};
use crate::shared::async_op::with_latency;

/// Emails the mock registry already knows. Registering one of them drives
/// the failure branch of the submit flow.
const TAKEN_EMAILS: &[&str] = &["taken@scrapdz.dz", "contact@ecorecycle.dz"];

/// Submit the finished form. Resolves to the new account's display name, or
/// an error the view surfaces as a dismissible banner while keeping the
/// form intact for retry.
pub async fn submit_registration(form: &RegistrationForm) -> Result<String, String> {
    if let Some((_, message)) = validate_all(form).into_iter().next() {
        return Err(message);
    }

    let email = form.email.trim().to_lowercase();
    let result = if TAKEN_EMAILS.contains(&email.as_str()) {
        Err("An account with this email already exists".to_string())
    } else {
        Ok(form.organization_name.clone())
    };

    with_latency(900, result).await
}
