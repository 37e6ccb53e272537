//! Prompt validators. Each returns the inline message the prompt shows
//! before asking again.

/// Last octet of the device address: one to three digits, value within 0-255.
pub fn last_octet(input: &str) -> Result<(), String> {
    if input.is_empty() || input.len() > 3 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Enter 1 to 3 digits".to_string());
    }
    match input.parse::<u16>() {
        Ok(n) if n <= 255 => Ok(()),
        _ => Err("Must be between 0 and 255".to_string()),
    }
}

/// Port number in (0, 65535].
pub fn port(input: &str) -> Result<(), String> {
    match input.parse::<u32>() {
        Ok(p) if (1..=65535).contains(&p) => Ok(()),
        _ => Err("Enter valid port number".to_string()),
    }
}

/// Wireless debugging pairing code: exactly six digits.
pub fn pair_code(input: &str) -> Result<(), String> {
    if input.len() == 6 && input.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Pair code must be exactly 6 digits".to_string())
    }
}
