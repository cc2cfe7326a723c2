use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Rupay,
    Unknown,
}

/// Strips the separators callers are allowed to include in a card number.
pub fn clean_card_number(number: &str) -> String {
    number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Luhn check over a 13-19 digit card number (spaces and dashes ignored).
pub fn validate_card_number(number: &str) -> bool {
    let cleaned = clean_card_number(number);
    if cleaned.len() < 13 || cleaned.len() > 19 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for b in cleaned.bytes().rev() {
        let mut digit = (b - b'0') as u32;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// Prefix-based network classification, first match wins. This is a
/// heuristic, not authoritative BIN data.
pub fn detect_card_network(number: &str) -> CardNetwork {
    let cleaned = clean_card_number(number);
    let bytes = cleaned.as_bytes();

    match bytes.first() {
        Some(b'4') => CardNetwork::Visa,
        Some(b'5') if matches!(bytes.get(1), Some(b'1'..=b'5')) => CardNetwork::Mastercard,
        Some(b'3') if matches!(bytes.get(1), Some(b'4') | Some(b'7')) => CardNetwork::Amex,
        Some(b'6') if matches!(bytes.get(1), Some(b'0') | Some(b'5')) => CardNetwork::Rupay,
        Some(b'8') if matches!(bytes.get(1), Some(b'1'..=b'9')) => CardNetwork::Rupay,
        _ => CardNetwork::Unknown,
    }
}
