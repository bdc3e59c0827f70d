//! Host environment traits
//!
//! Accounts never touch chain state directly; the invoking host (entry point or
//! bootloader) supplies balances, value transfers, call dispatch and, on Era, the
//! system-call path and the nonce holder. Hosts serialize invocations, so all
//! methods take `&mut self` and run to completion without suspension.

use crate::error::{NonceError, TransferError};
use ethers::types::{Address, Bytes, U256};

/// Raw revert payload of a failed call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Revert(pub Bytes);

/// Execution environment of the generic (ERC-4337) account
pub trait Host {
    /// Current native balance of the account
    fn balance_of(&self, account: &Address) -> U256;

    /// Transfers native value between accounts
    fn transfer(&mut self, from: &Address, to: &Address, value: U256)
        -> Result<(), TransferError>;

    /// Dispatches an external call; on failure the callee's raw revert
    /// payload is returned
    fn call(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
        data: &Bytes,
    ) -> Result<Bytes, Revert>;
}

/// Execution environment of the Era account, extending [`Host`] with the
/// privileged paths only the Era kernel provides
pub trait SystemHost: Host {
    /// Dispatches a call through the privileged system-call path; ordinary
    /// calls cannot reach system contracts on Era
    fn system_call(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
        data: &Bytes,
    ) -> Result<Bytes, Revert>;

    /// Asks the nonce holder to increment the tracked nonce of `account` if and
    /// only if it currently equals `declared`. The increment persists for the
    /// rest of the invocation even when later checks fail.
    fn increment_nonce_if_equals(
        &mut self,
        account: &Address,
        declared: U256,
    ) -> Result<(), NonceError>;
}
