//! Provider selection, adapters, and the remote request client.

mod adapter;
mod remote;
pub mod retry;
mod select;

pub use remote::RemoteClient;
pub use retry::RetryPolicy;
pub use select::ProviderSelector;
