pub mod log_store;
pub mod providers;
pub mod relay;

pub use log_store::{LogStore, LogStoreError};
pub use providers::{ProviderError, TextProvider};
pub use relay::{RelayError, RelayService};
