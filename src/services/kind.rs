use std::fmt;

use serde::Serialize;

/// Gateway operations. Keys the per-kind executor cache and tags errors/metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceKind {
    CardToIban,
    CardToDeposit,
    DepositToIban,
    DepositToIbanBankList,
    IbanInquiry,
    IbanOwnerVerification,
    Shahkar,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 7] = [
        ServiceKind::CardToIban,
        ServiceKind::CardToDeposit,
        ServiceKind::DepositToIban,
        ServiceKind::DepositToIbanBankList,
        ServiceKind::IbanInquiry,
        ServiceKind::IbanOwnerVerification,
        ServiceKind::Shahkar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::CardToIban => "cardToIban",
            ServiceKind::CardToDeposit => "cardToDeposit",
            ServiceKind::DepositToIban => "depositToIban",
            ServiceKind::DepositToIbanBankList => "depositToIbanBankList",
            ServiceKind::IbanInquiry => "ibanInquiry",
            ServiceKind::IbanOwnerVerification => "ibanOwnerVerification",
            ServiceKind::Shahkar => "shahkar",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for kind in ServiceKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }

    #[test]
    fn indexes_are_dense() {
        for (i, kind) in ServiceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
