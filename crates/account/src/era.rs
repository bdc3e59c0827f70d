//! zkSync Era account: phased validation, fee payment and execution
//!
//! The bootloader drives four separate entry points in order:
//! `validate_transaction` -> `pay_for_transaction` ->
//! (`prepare_for_paymaster`) -> `execute_transaction`. The account does not
//! track which phase it is in; sequencing is the bootloader's contract, and the
//! phases are guarded only by caller-identity gates.

use crate::{
    error::EraAccountError,
    host::SystemHost,
    signature::recover_raw,
};
use custos_primitives::{
    constants::{
        era_system_contracts,
        validation::{ACCOUNT_VALIDATION_FAILURE_MAGIC, ACCOUNT_VALIDATION_SUCCESS_MAGIC},
    },
    EraTransaction,
};
use ethers::types::{Address, H256, U256};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    /// Bootloader system contract, sole driver of the validation phases
    pub static ref BOOTLOADER: Address =
        era_system_contracts::BOOTLOADER.parse().expect("valid bootloader address");
    /// Contract deployer system contract, reached over the system-call path
    pub static ref CONTRACT_DEPLOYER: Address =
        era_system_contracts::CONTRACT_DEPLOYER.parse().expect("valid deployer address");
}

/// Four-byte validation result returned to the bootloader. Validation never
/// reverts over a bad signature; the magic is the sole result channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationMagic(pub [u8; 4]);

impl ValidationMagic {
    /// Magic signalling a valid owner signature
    pub const SUCCESS: ValidationMagic = ValidationMagic(ACCOUNT_VALIDATION_SUCCESS_MAGIC);
    /// Zero sentinel signalling a failed validation
    pub const FAILURE: ValidationMagic = ValidationMagic(ACCOUNT_VALIDATION_FAILURE_MAGIC);

    /// Whether validation succeeded
    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// Smart contract account driven by the Era bootloader
#[derive(Clone, Debug)]
pub struct EraAccount {
    /// Address of the account itself
    address: Address,
    /// The single authorized signer, immutable after creation
    owner: Address,
    /// Chain the account is deployed on, fixes the EIP-712 domain
    chain_id: u64,
}

impl EraAccount {
    /// Creates the account with its owner; owner and chain are fixed for the
    /// lifetime of the account
    pub fn new(address: Address, owner: Address, chain_id: u64) -> Self {
        Self { address, owner, chain_id }
    }

    /// Address of the account
    pub fn address(&self) -> Address {
        self.address
    }

    /// Owner of the account
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Validates the transaction: nonce, funds, then signature.
    ///
    /// The nonce holder is asked to increment this account's nonce first; its
    /// failure propagates unchanged. The funds check runs strictly after the
    /// increment, so a failed funds check still consumes the nonce slot and the
    /// transaction cannot be replayed. A bad or malformed signature is reported
    /// through the returned magic, never as an error.
    pub fn validate_transaction<H: SystemHost>(
        &self,
        caller: Address,
        _tx_hash: H256,
        suggested_signed_hash: Option<H256>,
        tx: &EraTransaction,
        host: &mut H,
    ) -> Result<ValidationMagic, EraAccountError> {
        if caller != *BOOTLOADER {
            return Err(EraAccountError::NotFromBootLoader(caller));
        }

        // nonce and funds both belong to this account, whatever tx.from says
        host.increment_nonce_if_equals(&self.address, tx.nonce)?;

        let required = tx.required_balance().unwrap_or(U256::max_value());
        let available = host.balance_of(&self.address);
        if available < required {
            return Err(EraAccountError::NotEnoughBalance { required, available });
        }

        let digest = suggested_signed_hash.unwrap_or_else(|| tx.signed_hash(self.chain_id));
        let magic = match recover_raw(&digest, &tx.signature) {
            Some(signer) if signer == self.owner => ValidationMagic::SUCCESS,
            _ => ValidationMagic::FAILURE,
        };
        debug!("validated era transaction for {:?}: success={}", self.address, magic.is_success());
        Ok(magic)
    }

    /// Executes the transaction's main call.
    ///
    /// Calls targeting the contract deployer are routed through the privileged
    /// system-call path; everything else goes through an ordinary call. Both
    /// paths collapse a callee failure to [`EraAccountError::ExecutionFailed`]
    /// without revert data.
    pub fn execute_transaction<H: SystemHost>(
        &self,
        caller: Address,
        tx: &EraTransaction,
        host: &mut H,
    ) -> Result<(), EraAccountError> {
        if caller != *BOOTLOADER && caller != self.owner {
            return Err(EraAccountError::NotFromBootLoaderOrOwner(caller));
        }

        let result = if tx.to == *CONTRACT_DEPLOYER {
            host.system_call(&self.address, &tx.to, tx.value, &tx.data)
        } else {
            host.call(&self.address, &tx.to, tx.value, &tx.data)
        };

        result.map(|_| ()).map_err(|_| EraAccountError::ExecutionFailed)
    }

    /// Pays the transaction fee to the bootloader. Ungated: invoked by host
    /// orchestration, once, with no retry.
    pub fn pay_for_transaction<H: SystemHost>(
        &self,
        tx: &EraTransaction,
        host: &mut H,
    ) -> Result<(), EraAccountError> {
        let fee = tx.fee().ok_or(EraAccountError::FailedToPay)?;
        host.transfer(&self.address, &BOOTLOADER, fee)
            .map_err(|_| EraAccountError::FailedToPay)
    }

    /// Paymaster preparation hook. Paymaster flows are not supported; the entry
    /// point exists for the bootloader interface and does nothing.
    pub fn prepare_for_paymaster<H: SystemHost>(
        &self,
        _tx_hash: H256,
        _suggested_signed_hash: Option<H256>,
        _tx: &EraTransaction,
        _host: &mut H,
    ) -> Result<(), EraAccountError> {
        Ok(())
    }

    /// Out-of-bootloader execution hook. Present for the interface; carries no
    /// logic.
    pub fn execute_transaction_from_outside<H: SystemHost>(
        &self,
        _tx: &EraTransaction,
        _host: &mut H,
    ) -> Result<(), EraAccountError> {
        Ok(())
    }
}
