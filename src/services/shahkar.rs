use std::sync::Arc;

use http::Method;
use serde_json::json;

use crate::client::{RequestExecutor, RequestOptions};
use crate::error::Result;
use crate::helpers::numbers::to_english_digits;
use crate::rules::{validate_mobile, validate_national_code};
use crate::services::dto::Shahkar;
use crate::services::envelope;

pub const SHAHKAR_PATH: &str = "/service/shahkar";

/// Mobile number ownership check against a national code.
pub struct ShahkarService {
    executor: Arc<RequestExecutor>,
}

impl ShahkarService {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    pub async fn shahkar(&self, mobile: &str, national_code: &str) -> Result<Shahkar> {
        let national_code = validate_national_code(&to_english_digits(national_code))?;
        let mobile = validate_mobile(&to_english_digits(mobile))?;

        let options = RequestOptions::json(json!({ "mobile": mobile, "nid": national_code }));
        let body = self.executor.execute(Method::POST, SHAHKAR_PATH, &options).await?;

        let kind = self.executor.kind();
        Ok(Shahkar {
            result: envelope::result_value(&body, kind)?,
            trace_id: envelope::trace_id(&body, kind)?,
        })
    }
}
