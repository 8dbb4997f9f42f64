use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RadeError, Result};

pub const INVALID_MOBILE_MESSAGE: &str = "شماره موبایل صحیح نیست. مثال: 09123456789";

static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("mobile pattern"));

pub fn validate_mobile(mobile: &str) -> Result<String> {
    if MOBILE.is_match(mobile) {
        Ok(mobile.to_owned())
    } else {
        Err(RadeError::invalid_input(INVALID_MOBILE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iranian_mobiles() {
        assert_eq!(validate_mobile("09123456789").unwrap(), "09123456789");
        assert_eq!(validate_mobile("09350000000").unwrap(), "09350000000");
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "9123456789", "0912345678", "091234567890", "+989123456789", "08123456789", "0912345678a"] {
            let err = validate_mobile(input).unwrap_err();
            assert_eq!(err.code(), 422, "input {input:?}");
            assert_eq!(err.to_string(), INVALID_MOBILE_MESSAGE);
        }
    }
}
