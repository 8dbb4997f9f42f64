//! Result records returned by the endpoint services.
//!
//! Field names on the wire are camelCase (`bankName`, `IBAN`, ...); the
//! records serialize with snake_case names. `trace_id` comes from
//! `data.RadeTraceID` and is filled in after the result body is decoded.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CardToIban {
    #[serde(skip_deserializing)]
    pub trace_id: String,
    #[serde(deserialize_with = "text")]
    pub bank_name: String,
    #[serde(deserialize_with = "text")]
    pub bank_enum: String,
    #[serde(deserialize_with = "text")]
    pub bank_logo: String,
    #[serde(rename(deserialize = "IBAN"), deserialize_with = "text")]
    pub iban: String,
    #[serde(rename(deserialize = "card"), deserialize_with = "text")]
    pub card_number: String,
    #[serde(deserialize_with = "text")]
    pub deposit: String,
    #[serde(rename(deserialize = "depositOwners"), deserialize_with = "text")]
    pub owners: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CardToDeposit {
    #[serde(skip_deserializing)]
    pub trace_id: String,
    #[serde(deserialize_with = "text")]
    pub bank_name: String,
    #[serde(deserialize_with = "text")]
    pub bank_enum: String,
    #[serde(deserialize_with = "text")]
    pub bank_logo: String,
    #[serde(deserialize_with = "text")]
    pub deposit: String,
    #[serde(deserialize_with = "text")]
    pub dest_card: String,
    #[serde(rename(deserialize = "depositOwners"), deserialize_with = "text")]
    pub owners: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DepositToIban {
    #[serde(skip_deserializing)]
    pub trace_id: String,
    #[serde(deserialize_with = "text")]
    pub bank_name: String,
    #[serde(deserialize_with = "text")]
    pub bank_enum: String,
    #[serde(deserialize_with = "text")]
    pub bank_logo: String,
    #[serde(rename(deserialize = "IBAN"), deserialize_with = "text")]
    pub iban: String,
    #[serde(deserialize_with = "text")]
    pub deposit: String,
    #[serde(rename(deserialize = "depositOwners"), deserialize_with = "text")]
    pub owners: String,
}

/// One entry of the deposit-to-IBAN bank list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct IbanInquiry {
    #[serde(skip_deserializing)]
    pub trace_id: String,
    #[serde(deserialize_with = "text")]
    pub bank_name: String,
    #[serde(deserialize_with = "text")]
    pub bank_enum: String,
    #[serde(deserialize_with = "text")]
    pub bank_logo: String,
    #[serde(rename(deserialize = "depositOwners"), deserialize_with = "text")]
    pub owners: String,
    #[serde(default)]
    pub deposit_comment: Option<String>,
    #[serde(default)]
    pub deposit_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IbanOwnerVerification {
    pub trace_id: String,
    /// Verification payload as returned by the gateway.
    pub result: Value,
}

impl IbanOwnerVerification {
    pub fn is_verified(&self) -> bool {
        truthy(&self.result)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shahkar {
    pub trace_id: String,
    /// Whether the mobile number belongs to the national code, as sent by the gateway.
    pub result: Value,
}

impl Shahkar {
    pub fn is_matched(&self) -> bool {
        truthy(&self.result)
    }
}

/// Birth date sent with an IBAN owner verification (Solar Hijri calendar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Birthday {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl Birthday {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self { year: year.into(), month: month.into(), day: day.into() }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        Value::Object(map) => map.get("result").or_else(|| map.get("matched")).is_some_and(truthy),
        _ => false,
    }
}

/// Strings pass through, numbers are rendered; anything else is a decode error.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected text, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_to_iban_reads_wire_names() {
        let dto: CardToIban = serde_json::from_value(json!({
            "bankName": "Saman", "bankEnum": "SAMAN", "bankLogo": "https://logo",
            "IBAN": "IR820540102680020817909002", "card": "6219861012345678",
            "deposit": "849-800-1234567-1", "depositOwners": "Ali Rezaei"
        }))
        .unwrap();
        assert_eq!(dto.iban, "IR820540102680020817909002");
        assert_eq!(dto.card_number, "6219861012345678");
        assert_eq!(dto.owners, "Ali Rezaei");
        assert_eq!(dto.trace_id, "");

        let out = serde_json::to_value(&dto).unwrap();
        assert_eq!(out["bank_name"], "Saman");
        assert!(out.get("bankName").is_none());
    }

    #[test]
    fn missing_field_fails() {
        let res = serde_json::from_value::<CardToDeposit>(json!({"bankName": "Saman"}));
        assert!(res.is_err());
    }

    #[test]
    fn numbers_are_accepted_as_text() {
        let bank: Bank = serde_json::from_value(json!({"name": "Mellat", "code": 12})).unwrap();
        assert_eq!(bank.code, "12");
        assert!(serde_json::from_value::<Bank>(json!({"name": null, "code": 1})).is_err());
    }

    #[test]
    fn optional_inquiry_fields() {
        let dto: IbanInquiry = serde_json::from_value(json!({
            "bankName": "Melli", "bankEnum": "MELLI", "bankLogo": "l",
            "depositOwners": "Sara", "depositComment": null
        }))
        .unwrap();
        assert_eq!(dto.deposit_comment, None);
        assert_eq!(dto.deposit_description, None);
    }

    #[test]
    fn verification_values_are_interpreted() {
        let shahkar = |result| Shahkar { trace_id: "t".into(), result };
        assert!(shahkar(json!(true)).is_matched());
        assert!(shahkar(json!("true")).is_matched());
        assert!(shahkar(json!(1)).is_matched());
        assert!(shahkar(json!({"matched": true})).is_matched());
        assert!(!shahkar(json!(false)).is_matched());
        assert!(!shahkar(json!(0)).is_matched());
        assert!(!shahkar(json!(null)).is_matched());
    }
}
