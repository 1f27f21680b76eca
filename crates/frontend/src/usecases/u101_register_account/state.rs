//! Wizard state: form data, step machine and per-step validation.
//!
//! Everything here is pure so the rules are unit-testable; the view only
//! wires signals to these functions.

use contracts::shared::geo;
use contracts::shared::validation::{
    is_valid_email, is_valid_phone_dz, ValidationRules,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Buyer,
    Seller,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Buyer => "buyer",
            AccountType::Seller => "seller",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Buyer => "Buyer",
            AccountType::Seller => "Seller",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Account,
    Organization,
    Location,
    Review,
}

impl WizardStep {
    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::Account,
            WizardStep::Organization,
            WizardStep::Location,
            WizardStep::Review,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Account => 0,
            WizardStep::Organization => 1,
            WizardStep::Location => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Account => "Account",
            WizardStep::Organization => "Organization",
            WizardStep::Location => "Location",
            WizardStep::Review => "Review & submit",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Account => Some(WizardStep::Organization),
            WizardStep::Organization => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Account => None,
            WizardStep::Organization => Some(WizardStep::Account),
            WizardStep::Location => Some(WizardStep::Organization),
            WizardStep::Review => Some(WizardStep::Location),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub account_type: AccountType,
    pub organization_name: String,
    pub trade_register: String,
    pub phone: String,
    pub wilaya: String,
    pub dayra: String,
    pub baladia: String,
    pub address: String,
}

/// Selecting a wilaya invalidates everything below it.
pub fn set_wilaya(form: &mut RegistrationForm, value: &str) {
    if form.wilaya != value {
        form.wilaya = value.to_string();
        form.dayra.clear();
        form.baladia.clear();
    }
}

/// Selecting a dayra invalidates the baladia.
pub fn set_dayra(form: &mut RegistrationForm, value: &str) {
    if form.dayra != value {
        form.dayra = value.to_string();
        form.baladia.clear();
    }
}

/// Field errors of one step: (field key, message). An empty result means the
/// step can be left.
pub fn validate_step(form: &RegistrationForm, step: WizardStep) -> Vec<(&'static str, String)> {
    let mut errors = Vec::new();
    match step {
        WizardStep::Account => {
            if let Err(e) = ValidationRules::required().validate_string(&form.email, "Email") {
                errors.push(("email", e));
            } else if !is_valid_email(&form.email) {
                errors.push(("email", "Email address is not valid".to_string()));
            }
            if let Err(e) = ValidationRules::required_with_min_length(8)
                .validate_string(&form.password, "Password")
            {
                errors.push(("password", e));
            }
            if form.password_confirm != form.password {
                errors.push(("password_confirm", "Passwords do not match".to_string()));
            }
        }
        WizardStep::Organization => {
            if let Err(e) = ValidationRules::required()
                .validate_string(&form.organization_name, "Organization name")
            {
                errors.push(("organization_name", e));
            }
            // Only sellers need a trade register entry.
            if form.account_type == AccountType::Seller {
                if let Err(e) = ValidationRules::required()
                    .validate_string(&form.trade_register, "Trade register number")
                {
                    errors.push(("trade_register", e));
                }
            }
            if form.phone.trim().is_empty() {
                errors.push(("phone", "Phone is required".to_string()));
            } else if !is_valid_phone_dz(&form.phone) {
                errors.push(("phone", "Phone number is not a valid Algerian number".to_string()));
            }
        }
        WizardStep::Location => {
            if geo::wilaya_by_name(&form.wilaya).is_none() {
                errors.push(("wilaya", "Select a wilaya".to_string()));
            } else if !geo::dayras_of(&form.wilaya).iter().any(|d| d.name == form.dayra) {
                errors.push(("dayra", "Select a dayra".to_string()));
            } else if !geo::baladias_of(&form.wilaya, &form.dayra).contains(&form.baladia.as_str())
            {
                errors.push(("baladia", "Select a baladia".to_string()));
            }
        }
        WizardStep::Review => {}
    }
    errors
}

/// Validation of the whole form, run once more before submitting.
pub fn validate_all(form: &RegistrationForm) -> Vec<(&'static str, String)> {
    WizardStep::all()
        .iter()
        .flat_map(|step| validate_step(form, *step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            email: "new@scrapdz.dz".into(),
            password: "s3cret-pass".into(),
            password_confirm: "s3cret-pass".into(),
            account_type: AccountType::Seller,
            organization_name: "EcoRecycle".into(),
            trade_register: "16/00-1234567B22".into(),
            phone: "0550123456".into(),
            wilaya: "Alger".into(),
            dayra: "Hussein Dey".into(),
            baladia: "Kouba".into(),
            address: "12 Rue Didouche Mourad".into(),
        }
    }

    #[test]
    fn test_valid_form_passes_every_step() {
        assert!(validate_all(&valid_form()).is_empty());
    }

    #[test]
    fn test_account_step_rejects_bad_email_and_short_password() {
        let mut form = valid_form();
        form.email = "nope".into();
        form.password = "short".into();
        form.password_confirm = "short".into();
        let errors = validate_step(&form, WizardStep::Account);
        let fields: Vec<&str> = errors.iter().map(|(f, _)| *f).collect();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn test_password_confirmation_must_match() {
        let mut form = valid_form();
        form.password_confirm = "different".into();
        let errors = validate_step(&form, WizardStep::Account);
        assert!(errors.iter().any(|(f, _)| *f == "password_confirm"));
    }

    #[test]
    fn test_trade_register_required_for_sellers_only() {
        let mut form = valid_form();
        form.trade_register.clear();
        assert!(validate_step(&form, WizardStep::Organization)
            .iter()
            .any(|(f, _)| *f == "trade_register"));

        form.account_type = AccountType::Buyer;
        assert!(validate_step(&form, WizardStep::Organization).is_empty());
    }

    #[test]
    fn test_changing_wilaya_resets_dayra_and_baladia() {
        let mut form = valid_form();
        set_wilaya(&mut form, "Oran");
        assert_eq!(form.wilaya, "Oran");
        assert!(form.dayra.is_empty());
        assert!(form.baladia.is_empty());
        // re-selecting the same wilaya keeps the children
        set_dayra(&mut form, "Arzew");
        set_wilaya(&mut form, "Oran");
        assert_eq!(form.dayra, "Arzew");
    }

    #[test]
    fn test_location_step_rejects_foreign_baladia() {
        let mut form = valid_form();
        // baladia exists, but under another dayra
        form.baladia = "Casbah".into();
        assert!(validate_step(&form, WizardStep::Location)
            .iter()
            .any(|(f, _)| *f == "baladia"));
    }

    #[test]
    fn test_step_machine_walks_forward_and_back() {
        let mut step = WizardStep::Account;
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(step, WizardStep::Review);
        assert_eq!(step.prev(), Some(WizardStep::Location));
        assert_eq!(WizardStep::Account.prev(), None);
    }
}
