//! Per-endpoint services: normalize and validate input, call the gateway,
//! map the response into a result record.

pub mod card_to_deposit;
pub mod card_to_iban;
pub mod deposit_to_iban;
pub mod dto;
pub mod envelope;
pub mod factory;
pub mod iban_inquiry;
pub mod iban_owner_verification;
pub mod kind;
pub mod shahkar;

pub use dto::{Bank, Birthday, CardToDeposit, CardToIban, DepositToIban, IbanInquiry, IbanOwnerVerification, Shahkar};
pub use factory::ServiceFactory;
pub use kind::ServiceKind;
