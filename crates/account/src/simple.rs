//! Generic (ERC-4337) account: signature validation and call execution
//!
//! The account moves an operation from unvalidated to validated exactly once,
//! through [`SimpleAccount::validate_user_op`]; there is no reverse transition.
//! Execution is a separate entry point with the same caller gate.

use crate::{
    error::AccountError,
    host::Host,
    signature::recover_personal,
};
use custos_primitives::{constants::validation::SIG_VALIDATION_FAILED, UserOperationHash, UserOperationSigned};
use ethers::types::{Address, Bytes, U256};
use tracing::{debug, trace};

/// Outcome of validating a user operation: either the signer is the owner or
/// the typed signature-mismatch rejection. There is no partial success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    /// Recovered signer equals the account owner
    Authorized,
    /// Recovered signer differs from the owner, or the signature is malformed
    SigMismatch,
}

impl Authorization {
    /// Whether validation succeeded
    pub fn is_authorized(&self) -> bool {
        matches!(self, Authorization::Authorized)
    }

    /// On-wire validation data the entry point expects (0 on success)
    pub fn validation_data(&self) -> U256 {
        match self {
            Authorization::Authorized => U256::zero(),
            Authorization::SigMismatch => SIG_VALIDATION_FAILED.into(),
        }
    }
}

/// Smart contract account driven by an entry point contract
#[derive(Clone, Debug)]
pub struct SimpleAccount {
    /// Address of the account itself
    address: Address,
    /// The single authorized signer, immutable after creation
    owner: Address,
    /// The entry point allowed to drive this account
    entry_point: Address,
}

impl SimpleAccount {
    /// Creates the account with its owner and entry point; both are fixed for
    /// the lifetime of the account
    pub fn new(address: Address, owner: Address, entry_point: Address) -> Self {
        Self { address, owner, entry_point }
    }

    /// Address of the account
    pub fn address(&self) -> Address {
        self.address
    }

    /// Owner of the account
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Entry point driving the account
    pub fn entry_point(&self) -> Address {
        self.entry_point
    }

    fn require_from_entry_point_or_owner(&self, caller: Address) -> Result<(), AccountError> {
        if caller != self.entry_point && caller != self.owner {
            return Err(AccountError::NotFromEntryPointOrOwner(caller));
        }
        Ok(())
    }

    /// Validates a user operation against the owner's signature.
    ///
    /// The signer is recovered from the canonical operation digest wrapped in
    /// the personal-message prefix. A non-matching or malformed signature is
    /// reported as [`Authorization::SigMismatch`], never as an error. When the
    /// entry point is owed `missing_funds`, the pre-fund transfer is attempted
    /// best-effort; a refusing entry point must not be able to halt the account,
    /// so its failure is ignored.
    pub fn validate_user_op<H: Host>(
        &self,
        caller: Address,
        uo: &UserOperationSigned,
        uo_hash: &UserOperationHash,
        missing_funds: U256,
        host: &mut H,
    ) -> Result<Authorization, AccountError> {
        self.require_from_entry_point_or_owner(caller)?;

        let auth = match recover_personal(&uo_hash.0, &uo.signature) {
            Some(signer) if signer == self.owner => Authorization::Authorized,
            _ => Authorization::SigMismatch,
        };
        debug!("validated user operation {uo_hash:?} for {:?}: {auth:?}", self.address);

        if !missing_funds.is_zero() {
            // best-effort pre-fund, failure intentionally ignored
            let _ = host.transfer(&self.address, &self.entry_point, missing_funds);
            trace!("pre-funded entry point with up to {missing_funds}");
        }

        Ok(auth)
    }

    /// Dispatches an arbitrary call from the account, exactly once.
    ///
    /// On callee failure the raw revert payload is forwarded unchanged inside
    /// [`AccountError::ExecutionFailed`].
    pub fn execute<H: Host>(
        &self,
        caller: Address,
        dest: Address,
        value: U256,
        payload: &Bytes,
        host: &mut H,
    ) -> Result<Bytes, AccountError> {
        self.require_from_entry_point_or_owner(caller)?;

        host.call(&self.address, &dest, value, payload)
            .map_err(|revert| AccountError::ExecutionFailed { revert: revert.0 })
    }
}
