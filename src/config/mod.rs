pub mod credentials;
pub mod loader;
pub mod settings;

pub use credentials::Credentials;
pub use loader::ServiceConfig;
pub use settings::SettingsConfig;
