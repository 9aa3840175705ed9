const STATE_LEN: usize = 2;
const RTO_LEN: usize = 2;
const MAX_DIGITS: usize = 11;

struct Segments {
    state: String,
    rto: String,
    digits: String,
}

/// Walk the alphanumeric stream into three zones: two letters for the state
/// code (digits dropped), two unrestricted characters for the RTO code, then
/// digits only, capped at eleven.
fn segment(raw: &str) -> Segments {
    let mut state = String::with_capacity(STATE_LEN);
    let mut rto = String::with_capacity(RTO_LEN);
    let mut digits = String::with_capacity(MAX_DIGITS);

    for ch in raw.chars() {
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        if state.len() < STATE_LEN {
            if ch.is_ascii_alphabetic() {
                state.push(ch.to_ascii_uppercase());
            }
        } else if rto.len() < RTO_LEN {
            rto.push(ch.to_ascii_uppercase());
        } else if digits.len() < MAX_DIGITS && ch.is_ascii_digit() {
            digits.push(ch);
        }
    }

    Segments { state, rto, digits }
}

/// Reassemble as `SS-RR YY YYYY N...`, omitting separators for zones the
/// donor has not reached yet. Digits only start accumulating once the RTO
/// zone is full, so each separator has a complete zone in front of it.
pub(super) fn format(raw: &str) -> String {
    let Segments { state, rto, digits } = segment(raw);

    let mut display = String::with_capacity(super::DRIVING_LICENSE_DISPLAY_MAX);
    display.push_str(&state);
    if !rto.is_empty() {
        display.push('-');
        display.push_str(&rto);
    }
    if !digits.is_empty() {
        display.push(' ');
        display.push_str(&digits[..digits.len().min(2)]);
        if digits.len() > 2 {
            display.push(' ');
            display.push_str(&digits[2..digits.len().min(6)]);
        }
        if digits.len() > 6 {
            display.push(' ');
            display.push_str(&digits[6..]);
        }
    }
    display
}

// The length gate demands 16 characters while the zone pattern describes 15
// (2 letters + 2 alphanumerics + 11 digits). The production rules disagree
// the same way; both are kept until product settles the license format.
pub(super) fn validate(value: &str) -> Option<String> {
    let compact: Vec<char> = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-'))
        .collect();

    if compact.len() != 16 {
        return Some("Driving License must be 16 characters".to_string());
    }
    if !matches_pattern(&compact) {
        return Some("Invalid Driving License format".to_string());
    }
    None
}

fn matches_pattern(compact: &[char]) -> bool {
    compact.len() == STATE_LEN + RTO_LEN + MAX_DIGITS
        && compact[..STATE_LEN].iter().all(|ch| ch.is_ascii_uppercase())
        && compact[STATE_LEN..STATE_LEN + RTO_LEN]
            .iter()
            .all(|ch| ch.is_ascii_alphanumeric())
        && compact[STATE_LEN + RTO_LEN..]
            .iter()
            .all(|ch| ch.is_ascii_digit())
}
