use std::collections::HashMap;

pub const SUCCESS_MESSAGE: &str = "پیام شما با موفقیت ارسال شد!";
pub const MISSING_FIELDS_MESSAGE: &str = "لطفاً تمام فیلدها را پر کنید.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Blob,
}

impl FieldValue {
    fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Blob => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted,
    MissingFields,
}

impl FormOutcome {
    pub fn message(self) -> &'static str {
        match self {
            FormOutcome::Accepted => SUCCESS_MESSAGE,
            FormOutcome::MissingFields => MISSING_FIELDS_MESSAGE,
        }
    }

    pub fn clears_form(self) -> bool {
        self == FormOutcome::Accepted
    }
}

pub fn validate<I, K>(entries: I) -> FormOutcome
where
    I: IntoIterator<Item = (K, FieldValue)>,
    K: Into<String>,
{
    let fields: HashMap<String, FieldValue> = entries
        .into_iter()
        .map(|(name, value)| (name.into(), value))
        .collect();

    if fields.values().all(FieldValue::is_filled) {
        FormOutcome::Accepted
    } else {
        FormOutcome::MissingFields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn all_filled_is_accepted() {
        let outcome = validate([("name", text("Sara")), ("message", text("hi"))]);
        assert_eq!(outcome, FormOutcome::Accepted);
        assert!(outcome.clears_form());
        assert_eq!(outcome.message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn one_empty_field_rejects() {
        let outcome = validate([("name", text("Sara")), ("email", text(""))]);
        assert_eq!(outcome, FormOutcome::MissingFields);
        assert!(!outcome.clears_form());
        assert_eq!(outcome.message(), "لطفاً تمام فیلدها را پر کنید.");
    }

    #[test]
    fn last_value_of_repeated_name_counts() {
        assert_eq!(
            validate([("tag", text("")), ("tag", text("vpn"))]),
            FormOutcome::Accepted
        );
        assert_eq!(
            validate([("tag", text("vpn")), ("tag", text(""))]),
            FormOutcome::MissingFields
        );
    }

    #[test]
    fn files_and_empty_forms_pass() {
        assert_eq!(validate([("avatar", FieldValue::Blob)]), FormOutcome::Accepted);
        assert_eq!(validate(Vec::<(String, FieldValue)>::new()), FormOutcome::Accepted);
    }
}
