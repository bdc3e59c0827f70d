//! Account abstraction related constants

/// Entry point smart contract (ERC-4337 path)
pub mod entry_point {
    /// Address of the canonical entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
    /// Version of the entry point smart contract
    pub const VERSION: &str = "0.6.0";
}

/// zkSync Era system contracts (formal addresses in the kernel space)
pub mod era_system_contracts {
    /// The bootloader, the privileged host process driving the account lifecycle
    pub const BOOTLOADER: &str = "0x0000000000000000000000000000000000008001";
    /// Per-sender sequence number store
    pub const NONCE_HOLDER: &str = "0x0000000000000000000000000000000000008003";
    /// Contract deployer, only reachable through the system-call path
    pub const CONTRACT_DEPLOYER: &str = "0x0000000000000000000000000000000000008006";
    /// Base token (ether) system contract
    pub const BASE_TOKEN: &str = "0x000000000000000000000000000000000000800a";
}

/// Account validation
pub mod validation {
    /// Magic returned by `validateTransaction` when the signature checks out
    /// (first four bytes of the selector of `validateTransaction`)
    pub const ACCOUNT_VALIDATION_SUCCESS_MAGIC: [u8; 4] = [0x20, 0x2b, 0xcc, 0xe7];
    /// Sentinel returned for any failed validation
    pub const ACCOUNT_VALIDATION_FAILURE_MAGIC: [u8; 4] = [0x00, 0x00, 0x00, 0x00];
    /// Validation data returned by the ERC-4337 path on signature mismatch
    pub const SIG_VALIDATION_FAILED: u64 = 1;
}

/// Era EIP-712 transactions
pub mod era_transaction {
    /// Transaction type byte of Era native (EIP-712) transactions
    pub const EIP712_TX_TYPE: u8 = 0x71;
    /// EIP-712 domain name
    pub const DOMAIN_NAME: &str = "zkSync";
    /// EIP-712 domain version
    pub const DOMAIN_VERSION: &str = "2";
}
