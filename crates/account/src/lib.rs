//! Smart contract account validation and execution
//!
//! Two parallel implementations of the user-operation authorization state machine:
//! [`SimpleAccount`] for ERC-4337 chains, driven by an entry point contract, and
//! [`EraAccount`] for zkSync Era, driven by the bootloader. Both depend only on
//! host-supplied primitives (balance store, value transfer, call dispatch, nonce
//! holder) behind the [`Host`] and [`SystemHost`] traits.

mod era;
mod error;
mod host;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
mod signature;
mod simple;

pub use era::{EraAccount, ValidationMagic, BOOTLOADER, CONTRACT_DEPLOYER};
pub use error::{AccountError, EraAccountError, NonceError, TransferError};
pub use host::{Host, Revert, SystemHost};
pub use simple::{Authorization, SimpleAccount};
