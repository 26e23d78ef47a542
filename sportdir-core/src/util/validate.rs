use thiserror::Error;

use crate::entities::{TimeOfDayParseError, UnsupportedSlotDuration, Weekday};

pub use fast_chemail::is_valid_email;

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trims the given text and discards it if nothing remains.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Trims all items and removes blank ones.
pub fn non_blank_items(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| non_blank(Some(item)))
        .collect()
}

#[derive(Debug, Error)]
pub enum RegistrationInvalidation {
    #[error("The facility kind is missing")]
    Kind,
    #[error("The name is missing")]
    Name,
    #[error("The city is missing")]
    City,
    #[error("Either an address or the flag 'address unspecified' is required")]
    Address,
    #[error("Invalid map coordinates")]
    Position,
    #[error("At least one phone number is required")]
    Phone,
    #[error("At least one e-mail address is required")]
    EmailMissing,
    #[error("Invalid e-mail address: '{0}'")]
    Email(String),
    #[error("Invalid price: {0}")]
    Price(f64),
    #[error("The sport is missing")]
    Sport,
    #[error("At least one positive price is required")]
    PriceMissing,
    #[error("The specialization is missing")]
    Specialization,
    #[error("Only venues can have sub-fields")]
    SubFieldsNotAllowed,
    #[error("Sub-field #{position}: {reason}")]
    SubField {
        position: usize,
        reason: SubFieldInvalidation,
    },
}

#[derive(Debug, Error)]
pub enum SubFieldInvalidation {
    #[error("the name is missing")]
    Name,
    #[error("the sport type is missing")]
    SportType,
    #[error("at least one priced time interval is required")]
    PriceMissing,
    #[error("prices must be positive")]
    NonPositivePrice,
    #[error("invalid price: {0}")]
    Price(f64),
    #[error("the start of a time interval must be before its end")]
    EmptyInterval,
    #[error("invalid opening times on {0:?}")]
    OpeningTimes(Weekday),
    #[error(transparent)]
    TimeOfDay(#[from] TimeOfDayParseError),
    #[error(transparent)]
    SlotDuration(#[from] UnsupportedSlotDuration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_blank_items() {
        assert_eq!(
            vec!["0740 123 456".to_string()],
            non_blank_items(vec!["  ".into(), " 0740 123 456 ".into(), "".into()])
        );
        assert_eq!(None, non_blank(Some(" \n".into())));
        assert_eq!(Some("x".to_string()), non_blank(Some(" x ".into())));
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("office@sala.ro"));
        assert!(!is_valid_email("office@"));
        assert!(!is_valid_email("office"));
    }

    #[test]
    fn human_readable_sub_field_reason() {
        let err = RegistrationInvalidation::SubField {
            position: 2,
            reason: SubFieldInvalidation::PriceMissing,
        };
        assert_eq!(
            "Sub-field #2: at least one priced time interval is required",
            err.to_string()
        );
    }
}
