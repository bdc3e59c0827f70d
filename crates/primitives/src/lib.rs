//! Smart contract account primitive types
//!
//! This crate contains the primitive types shared by the ERC-4337 and zkSync Era
//! account implementations: user operations and their canonical hashes, the Era
//! EIP-712 transaction shape, network configuration, and signing tooling.

pub mod chain;
pub mod constants;
mod era;
mod user_operation;
mod utils;
mod wallet;

pub use chain::{ChainError, NetworkConfig};
pub use era::EraTransaction;
pub use user_operation::{PackError, PackedUserOperation, UserOperationHash, UserOperationSigned};
pub use utils::{pack_uint128, unpack_uint128};
pub use wallet::Wallet;
