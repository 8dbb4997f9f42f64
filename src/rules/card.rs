use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RadeError, Result};

pub const INVALID_CARD_MESSAGE: &str =
    "فرمت شماره کارت وارد شده صحیح نیست. شماره‌کارت باید 16 رقم یا به فرمت 1111-2222-3333-4444 باشد.";

static DASHED_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}$").expect("card pattern"));
static PLAIN_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card pattern"));

/// Accepts `1111-2222-3333-4444` or 16 plain digits, returns the 16 digits.
pub fn validate_card_number(card_number: &str) -> Result<String> {
    if DASHED_CARD.is_match(card_number) {
        return Ok(card_number.replace('-', ""));
    }
    if PLAIN_CARD.is_match(card_number) {
        return Ok(card_number.to_owned());
    }
    Err(RadeError::invalid_input(INVALID_CARD_MESSAGE))
}
