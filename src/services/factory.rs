use std::sync::{Arc, OnceLock};

use reqwest::Client;
use tracing::debug;

use crate::auth::TokenManager;
use crate::client::RequestExecutor;
use crate::services::card_to_deposit::CardToDepositService;
use crate::services::card_to_iban::CardToIbanService;
use crate::services::deposit_to_iban::DepositToIbanService;
use crate::services::iban_inquiry::IbanInquiryService;
use crate::services::iban_owner_verification::IbanOwnerVerificationService;
use crate::services::kind::ServiceKind;
use crate::services::shahkar::ShahkarService;

/// Builds endpoint services on demand. Each [`ServiceKind`] gets one executor,
/// created on first use and shared afterwards.
pub struct ServiceFactory {
    client: Client,
    token_manager: Arc<TokenManager>,
    executors: [OnceLock<Arc<RequestExecutor>>; ServiceKind::ALL.len()],
}

impl ServiceFactory {
    pub fn new(client: Client, token_manager: Arc<TokenManager>) -> Self {
        Self {
            client,
            token_manager,
            executors: Default::default(),
        }
    }

    pub fn executor(&self, kind: ServiceKind) -> Arc<RequestExecutor> {
        self.executors[kind.index()]
            .get_or_init(|| {
                debug!(service = %kind, "building request executor");
                Arc::new(RequestExecutor::new(kind, self.client.clone(), self.token_manager.clone()))
            })
            .clone()
    }

    pub fn card_to_iban(&self) -> CardToIbanService {
        CardToIbanService::new(self.executor(ServiceKind::CardToIban))
    }

    pub fn card_to_deposit(&self) -> CardToDepositService {
        CardToDepositService::new(self.executor(ServiceKind::CardToDeposit))
    }

    pub fn deposit_to_iban(&self) -> DepositToIbanService {
        DepositToIbanService::new(
            self.executor(ServiceKind::DepositToIban),
            self.executor(ServiceKind::DepositToIbanBankList),
        )
    }

    pub fn iban_inquiry(&self) -> IbanInquiryService {
        IbanInquiryService::new(self.executor(ServiceKind::IbanInquiry))
    }

    pub fn iban_owner_verification(&self) -> IbanOwnerVerificationService {
        IbanOwnerVerificationService::new(self.executor(ServiceKind::IbanOwnerVerification))
    }

    pub fn shahkar(&self) -> ShahkarService {
        ShahkarService::new(self.executor(ServiceKind::Shahkar))
    }
}
