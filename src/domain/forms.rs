//! Form state management for the contact and booking flows.
//!
//! A form is a fixed set of declared fields plus a name→value mapping that
//! starts all-empty. Every edit replaces exactly one entry of the mapping;
//! the only validation is the declared required-presence check performed
//! before a submission is allowed to start.

use std::collections::HashMap;
use super::errors::{DomainError, DomainResult};

/// What kind of input a field accepts.
///
/// Kinds are declarative: they pick the editing affordance and placeholder
/// in the UI, they do not add validation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Time,
    Multiline,
    /// A closed set of options cycled through instead of typed.
    Select(&'static [&'static str]),
}

/// Declaration of a single form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key used in the value mapping and on the wire
    pub name: &'static str,
    /// Label shown next to the field
    pub label: &'static str,
    /// Whether a submission may start while this field is empty
    pub required: bool,
    pub kind: FieldKind,
}

/// Options for the contact form's service-interest select.
pub const SERVICE_TYPES: &[&str] = &[
    "elite-shopping",
    "errands",
    "student-assistance",
    "nutrimeal",
    "membership",
    "other",
];

/// Options for the booking form's service-category select.
pub const SERVICE_CATEGORIES: &[&str] = &[
    "elite-shopping",
    "errands-dropoffs",
    "grocery-delivery",
    "student-assistance",
    "nutrimeal",
    "other",
];

pub const URGENCY_LEVELS: &[&str] = &["normal", "urgent", "asap"];

/// Field declarations for the contact inquiry form.
pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", label: "Name", required: true, kind: FieldKind::Text },
    FieldSpec { name: "email", label: "Email", required: true, kind: FieldKind::Email },
    FieldSpec { name: "phone", label: "Phone", required: false, kind: FieldKind::Phone },
    FieldSpec { name: "service_type", label: "Service Interest", required: false, kind: FieldKind::Select(SERVICE_TYPES) },
    FieldSpec { name: "message", label: "Message", required: true, kind: FieldKind::Multiline },
];

/// Field declarations for the service booking form.
pub const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "client_name", label: "Full Name", required: true, kind: FieldKind::Text },
    FieldSpec { name: "client_email", label: "Email", required: true, kind: FieldKind::Email },
    FieldSpec { name: "client_phone", label: "Phone", required: false, kind: FieldKind::Phone },
    FieldSpec { name: "service_category", label: "Service Category", required: true, kind: FieldKind::Select(SERVICE_CATEGORIES) },
    FieldSpec { name: "service_details", label: "Service Details", required: true, kind: FieldKind::Multiline },
    FieldSpec { name: "preferred_date", label: "Preferred Date", required: false, kind: FieldKind::Date },
    FieldSpec { name: "preferred_time", label: "Preferred Time", required: false, kind: FieldKind::Time },
    FieldSpec { name: "urgency", label: "Urgency", required: false, kind: FieldKind::Select(URGENCY_LEVELS) },
];

/// Holds the current value of every field in one form.
///
/// # Examples
///
/// ```
/// use concierge::domain::{FormState, CONTACT_FIELDS};
///
/// let mut form = FormState::new(CONTACT_FIELDS);
/// form.set_value("name", "Ada".to_string()).unwrap();
/// assert_eq!(form.value("name"), "Ada");
/// assert_eq!(form.value("email"), "");
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: HashMap<String, String>,
}

impl FormState {
    /// Creates a form with every declared field mapped to the empty string.
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        let values = fields
            .iter()
            .map(|field| (field.name.to_string(), String::new()))
            .collect();
        Self { fields, values }
    }

    /// The field declarations this form was built from.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks up a field declaration by mapping key.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Current value of a field, or the empty string for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(|v| v.as_str()).unwrap_or("")
    }

    /// Replaces the value of exactly one field, leaving all others unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownField` if the name was not declared for
    /// this form; the mapping's key set never grows or shrinks.
    pub fn set_value(&mut self, name: &str, value: String) -> DomainResult<()> {
        if self.field(name).is_none() {
            return Err(DomainError::UnknownField(name.to_string()));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Advances a select field to its next option.
    ///
    /// An empty value advances to the first option; the last option wraps
    /// around. Counts as a single field-edit event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownField` for undeclared names and
    /// `DomainError::NotASelectField` when the field takes free text.
    pub fn cycle_select(&mut self, name: &str) -> DomainResult<()> {
        let field = self
            .field(name)
            .ok_or_else(|| DomainError::UnknownField(name.to_string()))?;
        let FieldKind::Select(options) = field.kind else {
            return Err(DomainError::NotASelectField(name.to_string()));
        };

        let current = self.value(name);
        let next = match options.iter().position(|option| *option == current) {
            Some(index) => options[(index + 1) % options.len()],
            None => options[0],
        };
        self.values.insert(name.to_string(), next.to_string());
        Ok(())
    }

    /// Resets every field back to the empty string.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Labels of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.required && self.value(field.name).trim().is_empty())
            .map(|field| field.label)
            .collect()
    }

    /// True once every required field holds a non-blank value.
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// True when no field holds any value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_starts_all_empty() {
        let form = FormState::new(CONTACT_FIELDS);

        assert!(form.is_empty());
        for field in CONTACT_FIELDS {
            assert_eq!(form.value(field.name), "");
        }
    }

    #[test]
    fn test_set_value_replaces_exactly_one_entry() {
        let mut form = FormState::new(CONTACT_FIELDS);
        form.set_value("email", "ada@example.com".to_string()).unwrap();

        assert_eq!(form.value("email"), "ada@example.com");
        // No cross-field interference
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("phone"), "");
        assert_eq!(form.value("service_type"), "");
        assert_eq!(form.value("message"), "");
    }

    #[test]
    fn test_set_value_overwrites_previous_value() {
        let mut form = FormState::new(CONTACT_FIELDS);
        form.set_value("name", "Ada".to_string()).unwrap();
        form.set_value("name", "Grace".to_string()).unwrap();

        assert_eq!(form.value("name"), "Grace");
    }

    #[test]
    fn test_set_value_rejects_undeclared_field() {
        let mut form = FormState::new(CONTACT_FIELDS);
        let result = form.set_value("favourite_color", "gold".to_string());

        assert_eq!(result, Err(DomainError::UnknownField("favourite_color".to_string())));
        assert!(form.is_empty());
    }

    #[test]
    fn test_cycle_select_starts_at_first_option_and_wraps() {
        let mut form = FormState::new(BOOKING_FIELDS);

        form.cycle_select("urgency").unwrap();
        assert_eq!(form.value("urgency"), "normal");
        form.cycle_select("urgency").unwrap();
        assert_eq!(form.value("urgency"), "urgent");
        form.cycle_select("urgency").unwrap();
        assert_eq!(form.value("urgency"), "asap");
        form.cycle_select("urgency").unwrap();
        assert_eq!(form.value("urgency"), "normal");
    }

    #[test]
    fn test_cycle_select_rejects_text_field() {
        let mut form = FormState::new(BOOKING_FIELDS);
        let result = form.cycle_select("client_name");

        assert_eq!(result, Err(DomainError::NotASelectField("client_name".to_string())));
    }

    #[test]
    fn test_missing_required_reports_labels() {
        let mut form = FormState::new(BOOKING_FIELDS);
        form.set_value("client_name", "Ada".to_string()).unwrap();
        form.set_value("client_email", "ada@example.com".to_string()).unwrap();

        let missing = form.missing_required();
        assert_eq!(missing, vec!["Service Category", "Service Details"]);
        assert!(!form.is_complete());
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let mut form = FormState::new(CONTACT_FIELDS);
        form.set_value("name", "   ".to_string()).unwrap();

        assert!(form.missing_required().contains(&"Name"));
    }

    #[test]
    fn test_clear_resets_to_all_empty() {
        let mut form = FormState::new(CONTACT_FIELDS);
        form.set_value("name", "Ada".to_string()).unwrap();
        form.set_value("message", "Hello".to_string()).unwrap();

        form.clear();

        assert!(form.is_empty());
        // Key set is unchanged, only values reset
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("message"), "");
    }
}
