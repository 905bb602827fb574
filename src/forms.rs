//! Local form reconciliation and validation.
//!
//! These checks run before any network call: a profile update identical to
//! the last-fetched record and a change-password form with mismatched
//! new/confirm values are both rejected here.

use crate::api::types::Profile;
use anyhow::{bail, Result};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

/// Optional per-field edits applied on top of the last-fetched profile.
#[derive(Clone, Debug, Default)]
pub struct ProfileEdits {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl ProfileEdits {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }

    /// Overlay the edits on `initial`, producing the candidate record.
    #[must_use]
    pub fn apply(&self, initial: &Profile) -> Profile {
        Profile {
            username: self.username.clone().unwrap_or_else(|| initial.username.clone()),
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| initial.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| initial.last_name.clone()),
            email: self.email.clone().unwrap_or_else(|| initial.email.clone()),
            phone_number: self
                .phone_number
                .clone()
                .unwrap_or_else(|| initial.phone_number.clone()),
        }
    }

    /// Reconcile the edits against the last-fetched profile.
    ///
    /// # Errors
    /// Returns "No changes detected." when the candidate equals the initial
    /// record, or a validation error for a malformed email.
    pub fn reconcile(&self, initial: &Profile) -> Result<Profile> {
        let candidate = self.apply(initial);

        if candidate == *initial {
            bail!("No changes detected.");
        }

        if let Some(email) = &self.email {
            validate_email(email)?;
        }

        Ok(candidate)
    }
}

/// Validate a change-password form before it reaches the network.
///
/// # Errors
/// Returns an error for empty fields or a new/confirm mismatch.
pub fn validate_password_change(
    old_password: &SecretString,
    new_password: &SecretString,
    confirm_password: &SecretString,
) -> Result<()> {
    if old_password.expose_secret().is_empty() || new_password.expose_secret().is_empty() {
        bail!("Old and new passwords are required");
    }

    if new_password.expose_secret() != confirm_password.expose_secret() {
        bail!("New password and confirmation do not match");
    }

    Ok(())
}

/// Validate a registration form locally.
///
/// # Errors
/// Returns an error for an empty username, malformed email, empty password,
/// or password/confirm mismatch.
pub fn validate_registration(
    profile: &Profile,
    password: &SecretString,
    confirm_password: &SecretString,
) -> Result<()> {
    if profile.username.trim().is_empty() {
        bail!("Username is required");
    }

    validate_email(&profile.email)?;

    if password.expose_secret().is_empty() {
        bail!("Password is required");
    }

    if password.expose_secret() != confirm_password.expose_secret() {
        bail!("Password and confirmation do not match");
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    // Shape check only; the backend remains the authority.
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
    if !pattern.is_match(email) {
        bail!("Enter a valid email address: {email}");
    }
    Ok(())
}

/// Convert a snake_case field name to a human label, used when rendering
/// field-level validation errors from the backend.
#[must_use]
pub fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Profile {
        Profile {
            username: "amina".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Said".to_string(),
            email: "amina@example.com".to_string(),
            phone_number: "+20123456789".to_string(),
        }
    }

    #[test]
    fn unchanged_update_is_rejected_locally() {
        let edits = ProfileEdits::default();
        let err = edits.reconcile(&initial()).unwrap_err();
        assert_eq!(err.to_string(), "No changes detected.");
    }

    #[test]
    fn edit_matching_current_value_is_still_unchanged() {
        let edits = ProfileEdits {
            first_name: Some("Amina".to_string()),
            ..ProfileEdits::default()
        };
        assert!(edits.reconcile(&initial()).is_err());
    }

    #[test]
    fn real_edit_produces_candidate() {
        let edits = ProfileEdits {
            last_name: Some("Hassan".to_string()),
            ..ProfileEdits::default()
        };
        let candidate = edits.reconcile(&initial()).unwrap();
        assert_eq!(candidate.last_name, "Hassan");
        assert_eq!(candidate.username, "amina");
    }

    #[test]
    fn malformed_email_edit_is_rejected() {
        let edits = ProfileEdits {
            email: Some("not-an-email".to_string()),
            ..ProfileEdits::default()
        };
        assert!(edits.reconcile(&initial()).is_err());
    }

    #[test]
    fn password_mismatch_never_reaches_network() {
        let old = SecretString::from("old-secret".to_string());
        let new = SecretString::from("new-secret".to_string());
        let confirm = SecretString::from("different".to_string());

        let err = validate_password_change(&old, &new, &confirm).unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn password_change_requires_both_fields() {
        let empty = SecretString::from(String::new());
        let new = SecretString::from("new-secret".to_string());

        assert!(validate_password_change(&empty, &new, &new).is_err());
        assert!(validate_password_change(&new, &empty, &empty).is_err());
    }

    #[test]
    fn matching_passwords_validate() {
        let old = SecretString::from("old-secret".to_string());
        let new = SecretString::from("new-secret".to_string());

        assert!(validate_password_change(&old, &new, &new).is_ok());
    }

    #[test]
    fn registration_checks_email_and_confirmation() {
        let password = SecretString::from("secret".to_string());

        let mut profile = initial();
        profile.email = "broken".to_string();
        assert!(validate_registration(&profile, &password, &password).is_err());

        let profile = initial();
        let confirm = SecretString::from("other".to_string());
        assert!(validate_registration(&profile, &password, &confirm).is_err());
        assert!(validate_registration(&profile, &password, &password).is_ok());
    }

    #[test]
    fn label_converts_snake_case() {
        assert_eq!(label("first_name"), "First name");
        assert_eq!(label("phone_number"), "Phone number");
        assert_eq!(label("email"), "Email");
    }
}
