use super::common::{day, today};
use crate::fleet::compliance::documents::{deadline_status, DocumentStatus};

#[test]
fn classifies_deadlines_from_the_evaluation_day() {
    assert_eq!(
        deadline_status(Some(day(-1)), today()),
        DocumentStatus::Expired
    );
    assert_eq!(deadline_status(Some(today()), today()), DocumentStatus::Valid);
    assert_eq!(
        deadline_status(Some(day(1)), today()),
        DocumentStatus::ExpiringSoon
    );
    assert_eq!(
        deadline_status(Some(day(30)), today()),
        DocumentStatus::ExpiringSoon
    );
    assert_eq!(deadline_status(Some(day(31)), today()), DocumentStatus::Valid);
    assert_eq!(deadline_status(None, today()), DocumentStatus::Missing);
}

#[test]
fn labels_follow_operator_language() {
    assert_eq!(DocumentStatus::Valid.label(), "Valido");
    assert_eq!(DocumentStatus::ExpiringSoon.label(), "In scadenza");
    assert_eq!(DocumentStatus::Expired.label(), "Scaduto");
    assert_eq!(DocumentStatus::Missing.label(), "Mancante");
}
