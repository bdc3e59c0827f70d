//! Full zkSync Era account lifecycle as the bootloader sequences it:
//! validate, pay, execute.

use custos_account::{mock::MockHost, EraAccountError, Host, ValidationMagic, BOOTLOADER};
use custos_primitives::EraTransaction;
use custos_tests::{era_account_fixture, ERA_CHAIN_ID};
use ethers::types::{Address, H256, U256};

#[test]
fn bootloader_lifecycle_validate_pay_execute() -> eyre::Result<()> {
    let (account, wallet, mut host) = era_account_fixture();

    let mint_amount = U256::from(250_000u64);
    let tx = EraTransaction::default()
        .from(account.address())
        .to(host.token)
        .gas_limit(1_000_000.into())
        .max_fee_per_gas(100_000.into())
        .nonce(0.into())
        .data(MockHost::mint_call_data(account.address(), mint_amount));
    let tx = wallet.sign_era_transaction(&tx, ERA_CHAIN_ID)?;

    // phase 1: validation consumes the nonce and checks funds and signature
    let magic = account.validate_transaction(
        *BOOTLOADER,
        H256::zero(),
        None,
        &tx,
        &mut host,
    )?;
    assert_eq!(magic, ValidationMagic::SUCCESS);
    assert_eq!(host.nonce_of(&account.address()), U256::one());

    // phase 2: the fee reservation moves to the bootloader
    account.pay_for_transaction(&tx, &mut host)?;
    assert_eq!(host.balance_of(&*BOOTLOADER), tx.fee().unwrap());

    // phase 3: the main call runs
    account.execute_transaction(*BOOTLOADER, &tx, &mut host)?;
    assert_eq!(host.token_balance_of(&account.address()), mint_amount);
    Ok(())
}

#[test]
fn second_transaction_must_use_next_nonce() -> eyre::Result<()> {
    let (account, wallet, mut host) = era_account_fixture();

    let tx = |nonce: u64| {
        let tx = EraTransaction::default()
            .from(account.address())
            .to(Address::repeat_byte(0x11))
            .gas_limit(100_000.into())
            .max_fee_per_gas(1_000.into())
            .nonce(nonce.into());
        wallet.sign_era_transaction(&tx, ERA_CHAIN_ID).unwrap()
    };

    account.validate_transaction(*BOOTLOADER, H256::zero(), None, &tx(0), &mut host)?;

    // replaying nonce 0 is rejected by the nonce holder
    let err = account
        .validate_transaction(*BOOTLOADER, H256::zero(), None, &tx(0), &mut host)
        .unwrap_err();
    assert!(matches!(err, EraAccountError::Nonce(_)));

    // nonce 1 goes through
    let magic =
        account.validate_transaction(*BOOTLOADER, H256::zero(), None, &tx(1), &mut host)?;
    assert_eq!(magic, ValidationMagic::SUCCESS);
    Ok(())
}

#[test]
fn owner_may_execute_directly_but_not_validate() {
    let (account, wallet, mut host) = era_account_fixture();
    let tx = EraTransaction::default().from(account.address()).to(Address::repeat_byte(0x11));

    let err = account
        .validate_transaction(wallet.address(), H256::zero(), None, &tx, &mut host)
        .unwrap_err();
    assert_eq!(err, EraAccountError::NotFromBootLoader(wallet.address()));

    account.execute_transaction(wallet.address(), &tx, &mut host).unwrap();
    assert_eq!(host.calls.len(), 1);
}
