//! Shared setup for Custos integration tests

use custos_account::{mock::MockHost, EraAccount, SimpleAccount};
use custos_primitives::Wallet;
use ethers::types::{Address, U256};

/// Deterministic owner key used across tests
pub const TEST_PHRASE: &str = "test test test test test test test test test test test junk";

/// Local development chain
pub const DEV_CHAIN_ID: u64 = 31337;

/// zkSync Era mainnet chain
pub const ERA_CHAIN_ID: u64 = 324;

/// Owner wallet for the given chain
pub fn owner_wallet(chain_id: u64) -> Wallet {
    Wallet::from_phrase(TEST_PHRASE, chain_id).expect("valid test phrase")
}

/// A generic account with its entry point and a funded mock host
pub fn simple_account_fixture() -> (SimpleAccount, Wallet, MockHost) {
    let wallet = owner_wallet(DEV_CHAIN_ID);
    let entry_point = Address::repeat_byte(0xee);
    let account = SimpleAccount::new(Address::repeat_byte(0xaa), wallet.address(), entry_point);

    let mut host = MockHost::new();
    host.fund(account.address(), U256::exp10(18));
    (account, wallet, host)
}

/// An Era account with a funded mock host
pub fn era_account_fixture() -> (EraAccount, Wallet, MockHost) {
    let wallet = owner_wallet(ERA_CHAIN_ID);
    let account = EraAccount::new(Address::repeat_byte(0xaa), wallet.address(), ERA_CHAIN_ID);

    let mut host = MockHost::new();
    host.fund(account.address(), U256::exp10(18));
    (account, wallet, host)
}
