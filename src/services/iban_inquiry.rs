use std::sync::Arc;

use http::Method;
use serde_json::json;

use crate::client::{RequestExecutor, RequestOptions};
use crate::error::Result;
use crate::helpers::numbers::to_english_digits;
use crate::rules::validate_iban;
use crate::services::dto::IbanInquiry;
use crate::services::envelope;

pub const IBAN_INQUIRY_PATH: &str = "/service/ibanInquiry";

pub struct IbanInquiryService {
    executor: Arc<RequestExecutor>,
}

impl IbanInquiryService {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    pub async fn iban_inquiry(&self, iban: &str) -> Result<IbanInquiry> {
        let iban = validate_iban(&to_english_digits(iban))?;

        let options = RequestOptions::json(json!({ "iban": iban }));
        let body = self.executor.execute(Method::POST, IBAN_INQUIRY_PATH, &options).await?;

        let kind = self.executor.kind();
        let mut result: IbanInquiry = envelope::nested_result(&body, kind)?;
        result.trace_id = envelope::trace_id(&body, kind)?;
        Ok(result)
    }
}
