//! Per-chain network configuration
//!
//! The validation core never looks up chains itself; hosts hand it a resolved
//! [`NetworkConfig`]. Resolution covers the chains the accounts are deployed on,
//! everything else is a configuration failure.

use crate::constants::entry_point;
use alloy_chains::{Chain, NamedChain};
use ethers::types::Address;
use lazy_static::lazy_static;
use thiserror::Error;

lazy_static! {
    /// Canonical entry point contract address
    pub static ref ENTRY_POINT: Address =
        entry_point::ADDRESS.parse().expect("valid entry point address");
    /// First default account of local development nodes (anvil/hardhat)
    pub static ref DEV_ACCOUNT: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        .parse()
        .expect("valid dev account address");
}

/// Chain configuration error
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// No network configuration exists for the chain id
    #[error("chain {0} is not supported")]
    UnsupportedChain(u64),
}

/// Network configuration for one chain: the entry point coordinating user
/// operations and the account owner address operations are signed with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The chain this configuration belongs to
    pub chain: Chain,
    /// Entry point contract address (zero on Era chains, where the bootloader
    /// drives accounts natively)
    pub entry_point: Address,
    /// Default owning account
    pub account: Address,
}

impl NetworkConfig {
    /// Resolves the network configuration for the given chain id
    pub fn resolve(chain_id: u64) -> Result<Self, ChainError> {
        let chain = Chain::from_id(chain_id);
        let named = chain.named().ok_or(ChainError::UnsupportedChain(chain_id))?;
        let (ep, account) = match named {
            NamedChain::Mainnet | NamedChain::Sepolia => (*ENTRY_POINT, Address::zero()),
            // Era chains run account abstraction natively, there is no entry point
            NamedChain::ZkSync | NamedChain::ZkSyncTestnet => (Address::zero(), Address::zero()),
            NamedChain::Dev | NamedChain::AnvilHardhat => (Address::zero(), *DEV_ACCOUNT),
            _ => return Err(ChainError::UnsupportedChain(chain_id)),
        };
        Ok(Self { chain, entry_point: ep, account })
    }

    /// Overrides the owning account
    pub fn with_account(mut self, account: Address) -> Self {
        self.account = account;
        self
    }

    /// Overrides the entry point address (local deployments)
    pub fn with_entry_point(mut self, entry_point: Address) -> Self {
        self.entry_point = entry_point;
        self
    }
}
