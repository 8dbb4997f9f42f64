use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::auth::TokenManager;
use crate::cache::{FileTokenStore, TokenStore};
use crate::config::{ServiceConfig, SettingsConfig};
use crate::error::{RadeError, Result};
use crate::services::{
    Bank, Birthday, CardToDeposit, CardToIban, DepositToIban, IbanInquiry, IbanOwnerVerification, ServiceFactory,
    Shahkar,
};

/// Entry point of the SDK: one method per gateway operation.
///
/// ```no_run
/// # async fn run() -> rade_client::error::Result<()> {
/// use rade_client::{RadeServices, ServiceConfig};
///
/// let rade = RadeServices::new(ServiceConfig::from_env())?;
/// let result = rade.card_to_iban("6037-9975-1234-5678").await?;
/// println!("{} ({})", result.iban, result.trace_id);
/// # Ok(())
/// # }
/// ```
pub struct RadeServices {
    factory: ServiceFactory,
    token_manager: Arc<TokenManager>,
}

impl RadeServices {
    /// Tokens are cached in the file named by `settings.token_cache_path`.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let store = Arc::new(FileTokenStore::new(config.settings.token_cache_path.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: ServiceConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let client = build_client(&config.settings)?;
        let token_manager = Arc::new(TokenManager::with_client(config.credentials, store, client.clone())?);
        info!(base_url = token_manager.credentials().base_url(), "rade client ready");

        Ok(Self {
            factory: ServiceFactory::new(client, token_manager.clone()),
            token_manager,
        })
    }

    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.token_manager
    }

    pub fn factory(&self) -> &ServiceFactory {
        &self.factory
    }

    pub async fn card_to_iban(&self, card_number: &str) -> Result<CardToIban> {
        self.factory.card_to_iban().card_to_iban(card_number).await
    }

    pub async fn card_to_deposit(&self, card_number: &str) -> Result<CardToDeposit> {
        self.factory.card_to_deposit().card_to_deposit(card_number).await
    }

    pub async fn deposit_to_iban(&self, deposit_number: &str, bank_code: &str) -> Result<DepositToIban> {
        self.factory.deposit_to_iban().deposit_to_iban(deposit_number, bank_code).await
    }

    pub async fn deposit_to_iban_bank_list(&self) -> Result<Vec<Bank>> {
        self.factory.deposit_to_iban().bank_list().await
    }

    pub async fn iban_inquiry(&self, iban: &str) -> Result<IbanInquiry> {
        self.factory.iban_inquiry().iban_inquiry(iban).await
    }

    pub async fn iban_owner_verification(
        &self,
        iban: &str,
        national_code: &str,
        birthday: &Birthday,
    ) -> Result<IbanOwnerVerification> {
        self.factory
            .iban_owner_verification()
            .iban_owner_verification(iban, national_code, birthday)
            .await
    }

    pub async fn shahkar(&self, mobile: &str, national_code: &str) -> Result<Shahkar> {
        self.factory.shahkar().shahkar(mobile, national_code).await
    }
}

fn build_client(settings: &SettingsConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(settings.timeout_ms))
        .build()
        .map_err(|e| RadeError::Config(format!("cannot build HTTP client: {e}")))
}
