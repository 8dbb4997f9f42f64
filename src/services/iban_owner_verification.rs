use std::sync::Arc;

use http::Method;
use serde_json::json;

use crate::client::{RequestExecutor, RequestOptions};
use crate::error::Result;
use crate::helpers::numbers::to_english_digits;
use crate::rules::{validate_iban, validate_national_code};
use crate::services::dto::{Birthday, IbanOwnerVerification};
use crate::services::envelope;

pub const IBAN_OWNER_VERIFICATION_PATH: &str = "/service/ibanOwnerVerification";

/// Checks that an IBAN belongs to the person with the given national code and birth date.
pub struct IbanOwnerVerificationService {
    executor: Arc<RequestExecutor>,
}

impl IbanOwnerVerificationService {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    pub async fn iban_owner_verification(
        &self,
        iban: &str,
        national_code: &str,
        birthday: &Birthday,
    ) -> Result<IbanOwnerVerification> {
        let national_code = validate_national_code(&to_english_digits(national_code))?;
        let iban = validate_iban(&to_english_digits(iban))?;
        let birthday = Birthday::new(
            to_english_digits(&birthday.year),
            to_english_digits(&birthday.month),
            to_english_digits(&birthday.day),
        );

        let options = RequestOptions::json(json!({
            "nid": national_code,
            "iban": iban,
            "birthday": birthday,
        }));
        let body = self
            .executor
            .execute(Method::POST, IBAN_OWNER_VERIFICATION_PATH, &options)
            .await?;

        let kind = self.executor.kind();
        Ok(IbanOwnerVerification {
            result: envelope::result_value(&body, kind)?,
            trace_id: envelope::trace_id(&body, kind)?,
        })
    }
}
