//! Token value and the stores that persist it.

pub mod file_store;
pub mod store;
pub mod token;

pub use file_store::FileTokenStore;
pub use store::{MemoryTokenStore, TokenStore};
pub use token::AccessToken;
