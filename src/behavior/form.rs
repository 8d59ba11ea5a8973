use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const SERVICES: [&str; 4] = [
    "CRM System",
    "Lead Generation",
    "Customer Support",
    "Voice Agent",
];

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Service,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

pub fn validate(values: &ContactFormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if values.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required.");
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required.");
    } else if !EMAIL.is_match(email) {
        errors.insert(Field::Email, "Please enter a valid email address.");
    }

    if values.company.trim().is_empty() {
        errors.insert(Field::Company, "Company name is required.");
    }

    if !SERVICES.contains(&values.service.as_str()) {
        errors.insert(Field::Service, "Please select a service.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Form state between renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub values: ContactFormValues,
    pub errors: FieldErrors,
}

impl ContactFormState {
    pub fn update(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validates and, on success, hands out the submitted values and resets
    /// the form. Returns `None` while any required field is missing.
    pub fn submit(&mut self) -> Option<ContactFormValues> {
        match validate(&self.values) {
            Ok(()) => {
                self.errors.clear();
                Some(std::mem::take(&mut self.values))
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormValues {
        ContactFormValues {
            name: "Elia".into(),
            email: "elia@example.ch".into(),
            company: "Muster AG".into(),
            service: "Voice Agent".into(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn empty_name_reports_only_name() {
        let mut values = filled();
        values.name = "   ".into();
        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Name), Some(&"Name is required."));
    }

    #[test]
    fn email_messages_distinguish_missing_and_malformed() {
        let mut values = filled();
        values.email = String::new();
        assert_eq!(validate(&values).unwrap_err()[&Field::Email], "Email is required.");

        values.email = "elia@".into();
        assert_eq!(
            validate(&values).unwrap_err()[&Field::Email],
            "Please enter a valid email address."
        );
    }

    #[test]
    fn unknown_service_is_rejected() {
        let mut values = filled();
        values.service = "Blockchain".into();
        assert!(validate(&values).unwrap_err().contains_key(&Field::Service));
    }

    #[test]
    fn empty_submit_does_not_fire() {
        let mut state = ContactFormState::default();
        assert_eq!(state.submit(), None);
        assert_eq!(state.error(Field::Name), Some("Name is required."));
        assert_eq!(state.error(Field::Company), Some("Company name is required."));
        assert_eq!(state.error(Field::Message), None);
    }

    #[test]
    fn valid_submit_fires_once_and_resets() {
        let mut state = ContactFormState {
            values: filled(),
            errors: FieldErrors::new(),
        };
        assert_eq!(state.submit(), Some(filled()));
        assert_eq!(state.values, ContactFormValues::default());
        assert_eq!(state.submit(), None);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = ContactFormState::default();
        state.submit();
        state.update(Field::Name, "Lis".into());
        assert_eq!(state.error(Field::Name), None);
        assert!(state.error(Field::Email).is_some());
    }
}
