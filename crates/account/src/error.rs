use ethers::types::{Address, Bytes, U256};
use thiserror::Error;

/// Errors thrown by the generic (ERC-4337) account
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// Caller is neither the entry point nor the account owner
    #[error("caller {0:?} is not the entry point or the owner")]
    NotFromEntryPointOrOwner(Address),
    /// The dispatched call reverted; the callee's raw revert payload is
    /// forwarded bit-for-bit so callers can diagnose the underlying reason
    #[error("execution failed: {revert}")]
    ExecutionFailed {
        /// Raw revert data of the failed call
        revert: Bytes,
    },
}

/// Errors thrown by the Era account
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EraAccountError {
    /// Caller is not the bootloader
    #[error("caller {0:?} is not the bootloader")]
    NotFromBootLoader(Address),
    /// Caller is neither the bootloader nor the account owner
    #[error("caller {0:?} is not the bootloader or the owner")]
    NotFromBootLoaderOrOwner(Address),
    /// Account balance does not cover the fee reservation plus value
    #[error("not enough balance: required {required}, available {available}")]
    NotEnoughBalance {
        /// Fee reservation across all gas limits plus the transferred value
        required: U256,
        /// Current account balance
        available: U256,
    },
    /// Fee transfer to the bootloader failed
    #[error("failed to pay the fee to the bootloader")]
    FailedToPay,
    /// The dispatched call failed; unlike the generic account, no revert
    /// data is carried here
    #[error("execution failed")]
    ExecutionFailed,
    /// The nonce holder refused the nonce increment
    #[error(transparent)]
    Nonce(#[from] NonceError),
}

/// Error returned by the nonce holder system contract
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NonceError {
    /// Declared nonce does not match the tracked sequence number
    #[error("nonce mismatch: declared {declared}, expected {expected}")]
    Mismatch {
        /// Nonce declared by the transaction
        declared: U256,
        /// Nonce the holder currently expects
        expected: U256,
    },
}

/// Error returned by a host value transfer
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    /// Sender balance does not cover the transferred value
    #[error("insufficient balance: transferring {value}, available {available}")]
    InsufficientBalance {
        /// Value being transferred
        value: U256,
        /// Sender balance
        available: U256,
    },
    /// The recipient refused the transfer
    #[error("transfer rejected by recipient")]
    Rejected,
}
