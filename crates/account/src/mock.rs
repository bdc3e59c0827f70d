//! In-memory host for tests
//!
//! `MockHost` plays the execution environment: it keeps native balances and
//! nonces, records every dispatched call, and hosts one mock token whose
//! mint-like call credits a per-address ledger. Targets can be forced to revert
//! with a chosen payload.

use crate::{
    error::{NonceError, TransferError},
    host::{Host, Revert, SystemHost},
};
use ethers::{
    abi::{self, ParamType, Token},
    types::{Address, Bytes, U256},
    utils::id,
};
use std::collections::HashMap;

/// One dispatched call, as the account handed it to the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    /// Whether the call went through the privileged system path
    pub system: bool,
}

/// In-memory execution environment
#[derive(Clone, Debug)]
pub struct MockHost {
    balances: HashMap<Address, U256>,
    nonces: HashMap<Address, U256>,
    token_balances: HashMap<Address, U256>,
    reverts: HashMap<Address, Bytes>,
    /// Address of the mock token contract
    pub token: Address,
    /// Every call dispatched through the host, in order
    pub calls: Vec<CallRecord>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            nonces: HashMap::new(),
            token_balances: HashMap::new(),
            reverts: HashMap::new(),
            token: Address::repeat_byte(0x70),
            calls: Vec::new(),
        }
    }

    /// Credits `amount` of native balance to `account`
    pub fn fund(&mut self, account: Address, amount: U256) {
        let entry = self.balances.entry(account).or_default();
        *entry += amount;
    }

    /// Overwrites the native balance of `account`
    pub fn set_balance(&mut self, account: Address, amount: U256) {
        self.balances.insert(account, amount);
    }

    /// Current nonce tracked for `account`
    pub fn nonce_of(&self, account: &Address) -> U256 {
        self.nonces.get(account).copied().unwrap_or_default()
    }

    /// Mock token balance of `account`
    pub fn token_balance_of(&self, account: &Address) -> U256 {
        self.token_balances.get(account).copied().unwrap_or_default()
    }

    /// Forces every call to `target` to revert with `payload`
    pub fn revert_on(&mut self, target: Address, payload: Bytes) {
        self.reverts.insert(target, payload);
    }

    /// Calldata of the mock token's `mint(address,uint256)` call
    pub fn mint_call_data(to: Address, amount: U256) -> Bytes {
        let mut data = id("mint(address,uint256)").to_vec();
        data.extend(abi::encode(&[Token::Address(to), Token::Uint(amount)]));
        data.into()
    }

    fn dispatch(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
        data: &Bytes,
        system: bool,
    ) -> Result<Bytes, Revert> {
        self.calls.push(CallRecord {
            from: *from,
            to: *to,
            value,
            data: data.clone(),
            system,
        });

        if let Some(payload) = self.reverts.get(to) {
            return Err(Revert(payload.clone()));
        }

        if !value.is_zero() {
            self.transfer(from, to, value).map_err(|_| Revert(Bytes::default()))?;
        }

        if *to == self.token {
            let selector = id("mint(address,uint256)");
            if data.len() >= 4 && data[0..4] == selector {
                let tokens =
                    abi::decode(&[ParamType::Address, ParamType::Uint(256)], &data[4..])
                        .map_err(|_| Revert(Bytes::default()))?;
                if let (Token::Address(to), Token::Uint(amount)) = (&tokens[0], &tokens[1]) {
                    let entry = self.token_balances.entry(*to).or_default();
                    *entry += *amount;
                }
            }
        }

        Ok(Bytes::default())
    }
}

impl Host for MockHost {
    fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
    ) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        if available < value {
            return Err(TransferError::InsufficientBalance { value, available });
        }
        self.balances.insert(*from, available - value);
        let entry = self.balances.entry(*to).or_default();
        *entry += value;
        Ok(())
    }

    fn call(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
        data: &Bytes,
    ) -> Result<Bytes, Revert> {
        self.dispatch(from, to, value, data, false)
    }
}

impl SystemHost for MockHost {
    fn system_call(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
        data: &Bytes,
    ) -> Result<Bytes, Revert> {
        self.dispatch(from, to, value, data, true)
    }

    fn increment_nonce_if_equals(
        &mut self,
        account: &Address,
        declared: U256,
    ) -> Result<(), NonceError> {
        let entry = self.nonces.entry(*account).or_default();
        if *entry != declared {
            return Err(NonceError::Mismatch { declared, expected: *entry });
        }
        *entry += U256::one();
        Ok(())
    }
}
