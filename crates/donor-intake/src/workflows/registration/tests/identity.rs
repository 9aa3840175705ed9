use super::common::complete_draft;
use crate::workflows::registration::domain::{DraftPatch, GovernmentIdKind, RegistrationDraft};
use crate::workflows::registration::{identity, DraftStore};

fn all_kinds() -> [GovernmentIdKind; 3] {
    [
        GovernmentIdKind::Aadhaar,
        GovernmentIdKind::VoterId,
        GovernmentIdKind::DrivingLicense,
    ]
}

#[test]
fn aadhaar_groups_digits_in_fours() {
    assert_eq!(
        identity::format(GovernmentIdKind::Aadhaar, "234567890123"),
        "2345 6789 0123"
    );
    assert_eq!(identity::format(GovernmentIdKind::Aadhaar, "2345"), "2345");
    assert_eq!(identity::format(GovernmentIdKind::Aadhaar, "23456"), "2345 6");
    assert_eq!(
        identity::format(GovernmentIdKind::Aadhaar, "23-45 67a89"),
        "2345 6789"
    );
    // Excess digits are truncated at twelve.
    assert_eq!(
        identity::format(GovernmentIdKind::Aadhaar, "2345678901239999"),
        "2345 6789 0123"
    );
}

#[test]
fn aadhaar_validation_checks_in_order() {
    assert_eq!(
        identity::validate(GovernmentIdKind::Aadhaar, "2345 6789 0123"),
        None
    );
    assert_eq!(
        identity::validate(GovernmentIdKind::Aadhaar, "2345 6789"),
        Some("Aadhaar must be exactly 12 digits".to_string())
    );
    assert_eq!(
        identity::validate(GovernmentIdKind::Aadhaar, "2345 6789 012X"),
        Some("Aadhaar must contain only numbers".to_string())
    );
    assert_eq!(
        identity::validate(GovernmentIdKind::Aadhaar, "1234 5678 9012"),
        Some("Aadhaar cannot start with 0 or 1".to_string())
    );
    assert_eq!(
        identity::validate(GovernmentIdKind::Aadhaar, "0234 5678 9012"),
        Some("Aadhaar cannot start with 0 or 1".to_string())
    );
}

#[test]
fn voter_id_enforces_letter_and_digit_zones() {
    assert_eq!(
        identity::format(GovernmentIdKind::VoterId, "abc1234567"),
        "ABC1234567"
    );
    // A digit typed in the letter zone is dropped, not repositioned.
    assert_eq!(
        identity::format(GovernmentIdKind::VoterId, "ab1c123456"),
        "ABC123456"
    );
    // Letters after the prefix are dropped.
    assert_eq!(
        identity::format(GovernmentIdKind::VoterId, "abcx1y2345678"),
        "ABC1234567"
    );
    assert_eq!(identity::format(GovernmentIdKind::VoterId, "12ab"), "AB");
}

#[test]
fn voter_id_validation_messages() {
    assert_eq!(identity::validate(GovernmentIdKind::VoterId, "ABC1234567"), None);
    assert_eq!(
        identity::validate(GovernmentIdKind::VoterId, "ABC123"),
        Some("Voter ID must be exactly 10 characters".to_string())
    );
    assert_eq!(
        identity::validate(GovernmentIdKind::VoterId, "abc1234567"),
        Some("Voter ID must have 3 letters followed by 7 digits".to_string())
    );
}

#[test]
fn driving_license_segments_with_separators() {
    assert_eq!(identity::format(GovernmentIdKind::DrivingLicense, "ka"), "KA");
    assert_eq!(
        identity::format(GovernmentIdKind::DrivingLicense, "ka01"),
        "KA-01"
    );
    assert_eq!(
        identity::format(GovernmentIdKind::DrivingLicense, "ka0120"),
        "KA-01 20"
    );
    assert_eq!(
        identity::format(GovernmentIdKind::DrivingLicense, "ka0120231234567"),
        "KA-01 20 2312 34567"
    );
    // Digits typed in the state zone are dropped; letters later in the
    // stream still fill the state zone.
    assert_eq!(
        identity::format(GovernmentIdKind::DrivingLicense, "9ka0120"),
        "KA-01 20"
    );
}

#[test]
fn driving_license_length_gate_never_reconciles_with_pattern() {
    // The formatter caps the compact value at 15 characters, so the
    // 16-character gate always fires first.
    let formatted = identity::format(GovernmentIdKind::DrivingLicense, "KA01202312345678901");
    assert_eq!(
        identity::validate(GovernmentIdKind::DrivingLicense, &formatted),
        Some("Driving License must be 16 characters".to_string())
    );

    // A 16-character compact value clears the gate and then fails the
    // 15-character pattern.
    assert_eq!(
        identity::validate(GovernmentIdKind::DrivingLicense, "KA01203456789012"),
        Some("Invalid Driving License format".to_string())
    );
}

#[test]
fn formatting_is_idempotent_for_every_kind() {
    let samples = [
        "234567890123",
        "ab1c123456",
        "ka0120231234567",
        "  mixed 12 INPUT-99 ",
        "",
        "!!!",
    ];
    for kind in all_kinds() {
        for sample in samples {
            let once = identity::format(kind, sample);
            let twice = identity::format(kind, &once);
            assert_eq!(once, twice, "{kind:?} format not idempotent for {sample:?}");
        }
    }
}

#[test]
fn formatting_is_prefix_stable_for_every_kind() {
    // Typing one character at a time must only ever extend the rendered
    // value, never rewrite what is already on screen.
    let keystrokes = [
        (GovernmentIdKind::Aadhaar, "2345678901239999"),
        (GovernmentIdKind::VoterId, "abcx1y2345678"),
        (GovernmentIdKind::DrivingLicense, "ka01-2023 1234567"),
    ];
    for (kind, input) in keystrokes {
        let full = identity::format(kind, input);
        let mut previous_len = 0;
        for end in 0..=input.len() {
            let partial = identity::format(kind, &input[..end]);
            assert!(
                full.starts_with(&partial),
                "{kind:?}: {partial:?} is not a prefix of {full:?}"
            );
            assert!(
                partial.len() >= previous_len,
                "{kind:?}: formatted length shrank at keystroke {end}"
            );
            previous_len = partial.len();
        }
    }
}

#[test]
fn formatted_output_respects_display_caps() {
    let long = "z9".repeat(40);
    assert!(
        identity::format(GovernmentIdKind::Aadhaar, &long).len()
            <= identity::AADHAAR_DISPLAY_MAX
    );
    assert!(
        identity::format(GovernmentIdKind::VoterId, &long).len()
            <= identity::VOTER_ID_DISPLAY_MAX
    );
    assert!(
        identity::format(GovernmentIdKind::DrivingLicense, &long).len()
            <= identity::DRIVING_LICENSE_DISPLAY_MAX
    );
}

#[test]
fn id_pair_must_be_both_empty_or_both_populated() {
    let mut draft = RegistrationDraft::default();
    assert_eq!(identity::submit_error(&draft), None);

    draft.government_id_type = Some(GovernmentIdKind::Aadhaar);
    assert_eq!(
        identity::submit_error(&draft),
        Some("Please enter Government ID Number for the selected ID type".to_string())
    );

    draft.government_id_type = None;
    draft.government_id_number = Some("2345 6789 0123".to_string());
    assert_eq!(
        identity::submit_error(&draft),
        Some("Please select Government ID Type for the entered ID number".to_string())
    );

    draft.government_id_type = Some(GovernmentIdKind::Aadhaar);
    assert_eq!(identity::submit_error(&draft), None);
}

#[test]
fn switching_id_type_clears_the_number() {
    let mut store = DraftStore::with_draft(complete_draft());
    assert!(store.draft().government_id_number.is_some());

    store.apply(DraftPatch::GovernmentIdType(Some(GovernmentIdKind::VoterId)));
    assert_eq!(store.draft().government_id_number, None);

    // The store formats through the newly selected type.
    store.apply(DraftPatch::GovernmentIdNumber("abc1234567".to_string()));
    assert_eq!(
        store.draft().government_id_number.as_deref(),
        Some("ABC1234567")
    );
}
