/// Validates a UPI virtual payment address: a handle of letters, digits,
/// `.`, `_` or `-`, then `@`, then an alphanumeric bank tag.
pub fn validate_vpa(vpa: &str) -> bool {
    let Some((handle, bank)) = vpa.split_once('@') else {
        return false;
    };

    !handle.is_empty()
        && !bank.is_empty()
        && handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        && bank.chars().all(|c| c.is_ascii_alphanumeric())
}
