//! Per-contract storage generators.
//!
//! Each module hard-codes the slot layout of one IMA contract and writes the
//! values its initializer leaves behind.

pub mod community_locker;
pub mod key_storage;
pub mod message_proxy_for_schain;
pub mod proxy_admin;
pub mod token_manager_linker;

pub use community_locker::CommunityLocker;
pub use key_storage::KeyStorage;
pub use message_proxy_for_schain::MessageProxyForSchain;
pub use proxy_admin::ProxyAdmin;
pub use token_manager_linker::TokenManagerLinker;
