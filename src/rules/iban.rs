use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RadeError, Result};

pub const INVALID_IBAN_MESSAGE: &str =
    "فرمت شماره شبا وارد شده صحیح نیست. شماره شبا باید 24 رقم بدون IR یا 26 کاراکتر با IR باشد.";

static PREFIXED_IBAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:ir)([0-9]{24})$").expect("iban pattern"));
static PLAIN_IBAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{24}$").expect("iban pattern"));

/// Strips spaces and an optional (case-insensitive) `IR` prefix, returns the 24 digits.
pub fn validate_iban(iban: &str) -> Result<String> {
    let normalized = iban.replace(' ', "");

    if let Some(digits) = PREFIXED_IBAN.captures(&normalized).and_then(|caps| caps.get(1)) {
        return Ok(digits.as_str().to_owned());
    }
    if PLAIN_IBAN.is_match(&normalized) {
        return Ok(normalized);
    }
    Err(RadeError::invalid_input(INVALID_IBAN_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: &str = "820540102680020817909002";

    #[test]
    fn prefix_is_optional_and_case_insensitive() {
        for prefix in ["", "IR", "ir", "Ir", "iR"] {
            let input = format!("{prefix}{DIGITS}");
            assert_eq!(validate_iban(&input).unwrap(), DIGITS, "input {input}");
        }
    }

    #[test]
    fn spaces_are_ignored() {
        assert_eq!(validate_iban("IR82 0540 1026 8002 0817 9090 02").unwrap(), DIGITS);
        assert_eq!(validate_iban(" 8205 4010 2680 0208 1790 9002 ").unwrap(), DIGITS);
    }

    #[test]
    fn rejects_wrong_length_or_prefix() {
        for input in [
            "",
            "IR",
            "82054010268002081790900",
            "8205401026800208179090021",
            "DE820540102680020817909002",
            "IR82054010268002081790900a",
            "IR-820540102680020817909002",
        ] {
            let err = validate_iban(input).unwrap_err();
            assert_eq!(err.code(), 422, "input {input:?}");
            assert_eq!(err.to_string(), INVALID_IBAN_MESSAGE);
        }
    }
}
