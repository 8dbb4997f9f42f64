use std::sync::Arc;

use http::Method;
use serde_json::json;

use crate::client::{RequestExecutor, RequestOptions};
use crate::error::Result;
use crate::helpers::numbers::to_english_digits;
use crate::rules::validate_card_number;
use crate::services::dto::CardToIban;
use crate::services::envelope;

pub const CARD_TO_IBAN_PATH: &str = "/service/cardToIban";

pub struct CardToIbanService {
    executor: Arc<RequestExecutor>,
}

impl CardToIbanService {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    pub async fn card_to_iban(&self, card_number: &str) -> Result<CardToIban> {
        let card_number = validate_card_number(&to_english_digits(card_number))?;

        let options = RequestOptions::json(json!({ "card_number": card_number }));
        let body = self.executor.execute(Method::POST, CARD_TO_IBAN_PATH, &options).await?;

        let kind = self.executor.kind();
        let mut result: CardToIban = envelope::nested_result(&body, kind)?;
        result.trace_id = envelope::trace_id(&body, kind)?;
        Ok(result)
    }
}
