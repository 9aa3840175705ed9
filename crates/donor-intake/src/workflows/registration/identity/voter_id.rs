const LETTER_PREFIX: usize = 3;
const TOTAL: usize = 10;

/// Uppercase alphanumerics only, with zone enforcement: the first three
/// accepted characters must be letters (digits typed there are dropped) and
/// the remaining seven must be digits (letters typed there are dropped).
pub(super) fn format(raw: &str) -> String {
    let mut display = String::with_capacity(TOTAL);
    for ch in raw.chars() {
        if display.len() == TOTAL {
            break;
        }
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        if display.len() < LETTER_PREFIX {
            if ch.is_ascii_alphabetic() {
                display.push(ch.to_ascii_uppercase());
            }
        } else if ch.is_ascii_digit() {
            display.push(ch);
        }
    }
    display
}

pub(super) fn validate(value: &str) -> Option<String> {
    if value.chars().count() != TOTAL {
        return Some("Voter ID must be exactly 10 characters".to_string());
    }

    let prefix_ok = value
        .chars()
        .take(LETTER_PREFIX)
        .all(|ch| ch.is_ascii_uppercase());
    let digits_ok = value
        .chars()
        .skip(LETTER_PREFIX)
        .all(|ch| ch.is_ascii_digit());

    if !(prefix_ok && digits_ok) {
        return Some("Voter ID must have 3 letters followed by 7 digits".to_string());
    }
    None
}
