const DIGITS: usize = 12;
const GROUP: usize = 4;

/// Strip everything but digits, cap at 12, and regroup as `XXXX XXXX XXXX`.
pub(super) fn format(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .take(DIGITS)
        .collect();

    let mut display = String::with_capacity(DIGITS + DIGITS / GROUP);
    for (index, digit) in digits.into_iter().enumerate() {
        if index > 0 && index % GROUP == 0 {
            display.push(' ');
        }
        display.push(digit);
    }
    display
}

/// Checks run in order; the first failure wins. The leading-digit rule comes
/// from India's Aadhaar numbering scheme, which never issues numbers starting
/// with 0 or 1.
pub(super) fn validate(value: &str) -> Option<String> {
    let compact: String = value.chars().filter(|ch| *ch != ' ').collect();

    if compact.chars().count() != DIGITS {
        return Some("Aadhaar must be exactly 12 digits".to_string());
    }
    if !compact.chars().all(|ch| ch.is_ascii_digit()) {
        return Some("Aadhaar must contain only numbers".to_string());
    }
    if compact.starts_with('0') || compact.starts_with('1') {
        return Some("Aadhaar cannot start with 0 or 1".to_string());
    }
    None
}
