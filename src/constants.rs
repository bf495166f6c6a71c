/// Role allowed to register token managers in the linker
pub const REGISTRAR_ROLE: &str = "REGISTRAR_ROLE";
/// Role allowed to connect and disconnect chains in the message proxy
pub const CHAIN_CONNECTOR_ROLE: &str = "CHAIN_CONNECTOR_ROLE";
/// Role allowed to register extra contracts in the message proxy
pub const EXTRA_CONTRACT_REGISTRAR_ROLE: &str = "EXTRA_CONTRACT_REGISTRAR_ROLE";
/// Role allowed to change message proxy constants
pub const CONSTANT_SETTER_ROLE: &str = "CONSTANT_SETTER_ROLE";
/// Name of the main chain, implicitly connected to every schain
pub const MAINNET_NAME: &str = "Mainnet";
/// Gas limit for incoming message post-processing in the message proxy
pub const DEFAULT_GAS_LIMIT: u64 = 3_000_000;
/// Minimum seconds between two outgoing messages of one user (5 minutes)
pub const DEFAULT_TIME_LIMIT_SEC: u64 = 300;
/// Top-level genesis key the accounts are merged into
pub const DEFAULT_ALLOC_KEY: &str = "alloc";
