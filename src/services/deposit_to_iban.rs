use std::sync::Arc;

use http::Method;
use serde_json::json;

use crate::client::{RequestExecutor, RequestOptions};
use crate::error::Result;
use crate::helpers::numbers::to_english_digits;
use crate::services::dto::{Bank, DepositToIban};
use crate::services::envelope;

pub const DEPOSIT_TO_IBAN_PATH: &str = "/service/depositToIban";
pub const BANK_LIST_PATH: &str = "/service/banks/depositToIban";

/// Deposit number to IBAN conversion and the list of banks it supports.
pub struct DepositToIbanService {
    executor: Arc<RequestExecutor>,
    bank_list_executor: Arc<RequestExecutor>,
}

impl DepositToIbanService {
    pub fn new(executor: Arc<RequestExecutor>, bank_list_executor: Arc<RequestExecutor>) -> Self {
        Self { executor, bank_list_executor }
    }

    /// `bank_code` is one of the codes returned by [`Self::bank_list`].
    pub async fn deposit_to_iban(&self, deposit_number: &str, bank_code: &str) -> Result<DepositToIban> {
        let deposit_number = to_english_digits(deposit_number);

        let options = RequestOptions::json(json!({ "deposit": deposit_number, "bank": bank_code }));
        let body = self.executor.execute(Method::POST, DEPOSIT_TO_IBAN_PATH, &options).await?;

        let kind = self.executor.kind();
        let mut result: DepositToIban = envelope::nested_result(&body, kind)?;
        result.trace_id = envelope::trace_id(&body, kind)?;
        Ok(result)
    }

    pub async fn bank_list(&self) -> Result<Vec<Bank>> {
        let body = self
            .bank_list_executor
            .execute(Method::GET, BANK_LIST_PATH, &RequestOptions::default())
            .await?;
        envelope::data(&body, self.bank_list_executor.kind())
    }
}
