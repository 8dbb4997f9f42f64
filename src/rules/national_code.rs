use crate::error::{RadeError, Result};

pub const INVALID_NATIONAL_CODE_MESSAGE: &str = "کد ملی وارد شده معتبر نیست.";

/// Exactly ten ASCII digits with a valid check digit, otherwise `InvalidInput`.
pub fn validate_national_code(code: &str) -> Result<String> {
    let digits = parse_digits(code).ok_or_else(invalid)?;
    check_digit(&digits)?;
    Ok(code.to_owned())
}

/// Like [`validate_national_code`], but a malformed input (wrong length or a
/// non-digit) yields an empty string. Only a wrong check digit is an error.
pub fn validate_national_code_lenient(code: &str) -> Result<String> {
    let Some(digits) = parse_digits(code) else {
        return Ok(String::new());
    };
    check_digit(&digits)?;
    Ok(code.to_owned())
}

fn parse_digits(code: &str) -> Option<[u32; 10]> {
    if code.len() != 10 {
        return None;
    }
    let mut digits = [0u32; 10];
    for (slot, c) in digits.iter_mut().zip(code.chars()) {
        *slot = c.is_ascii_digit().then(|| c.to_digit(10)).flatten()?;
    }
    Some(digits)
}

fn check_digit(digits: &[u32; 10]) -> Result<()> {
    let sum = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum::<u32>()
        % 11;
    let check = digits[9];

    if (sum < 2 && check == sum) || (sum >= 2 && check + sum == 11) {
        Ok(())
    } else {
        Err(invalid())
    }
}

fn invalid() -> RadeError {
    RadeError::invalid_input(INVALID_NATIONAL_CODE_MESSAGE)
}
