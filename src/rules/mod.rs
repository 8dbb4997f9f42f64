//! Input rules applied before any gateway call.
//!
//! Each rule takes the raw user input (already digit-normalized by the
//! caller) and returns the normalized value the gateway expects, or
//! [`RadeError::InvalidInput`](crate::error::RadeError::InvalidInput) with
//! code 422.

pub mod card;
pub mod iban;
pub mod mobile;
pub mod national_code;

pub use card::{validate_card_number, INVALID_CARD_MESSAGE};
pub use iban::{validate_iban, INVALID_IBAN_MESSAGE};
pub use mobile::{validate_mobile, INVALID_MOBILE_MESSAGE};
pub use national_code::{validate_national_code, validate_national_code_lenient, INVALID_NATIONAL_CODE_MESSAGE};
