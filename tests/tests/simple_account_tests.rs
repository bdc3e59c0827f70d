//! End-to-end flow of the generic (ERC-4337) account: construct, sign,
//! validate, execute, driven the way an entry point would drive it.

use custos_account::{mock::MockHost, AccountError, Authorization, Host};
use custos_primitives::{NetworkConfig, UserOperationSigned};
use custos_tests::{simple_account_fixture, DEV_CHAIN_ID};
use ethers::types::{Address, Bytes, U256};

#[tokio::test]
async fn signed_operation_validates_and_executes() -> eyre::Result<()> {
    let (account, wallet, mut host) = simple_account_fixture();

    let mint_amount = U256::from(500_000u64);
    let uo = UserOperationSigned::default()
        .sender(account.address())
        .nonce(0.into())
        .call_data(MockHost::mint_call_data(account.address(), mint_amount))
        .call_gas_limit(200_000.into())
        .verification_gas_limit(100_000.into())
        .max_fee_per_gas(3_000_000_000_u64.into());
    let uo = wallet.sign_uo(&uo, &account.entry_point(), DEV_CHAIN_ID).await?;
    let hash = uo.hash(&account.entry_point(), DEV_CHAIN_ID);

    // entry point asks for validation, with a pre-fund owed
    let auth = account.validate_user_op(
        account.entry_point(),
        &uo,
        &hash,
        U256::from(10_000),
        &mut host,
    )?;
    assert_eq!(auth, Authorization::Authorized);
    assert_eq!(host.balance_of(&account.entry_point()), U256::from(10_000));

    // then dispatches the call payload
    let token = host.token;
    account.execute(account.entry_point(), token, U256::zero(), &uo.call_data, &mut host)?;
    assert_eq!(host.token_balance_of(&account.address()), mint_amount);
    Ok(())
}

#[tokio::test]
async fn tampered_operation_fails_validation() -> eyre::Result<()> {
    let (account, wallet, mut host) = simple_account_fixture();

    let uo = UserOperationSigned::default().sender(account.address()).nonce(0.into());
    let signed = wallet.sign_uo(&uo, &account.entry_point(), DEV_CHAIN_ID).await?;

    // raise the fee after signing; the digest no longer matches the signature
    let tampered = signed.clone().max_fee_per_gas(9_999_999_999_u64.into());
    let hash = tampered.hash(&account.entry_point(), DEV_CHAIN_ID);

    let auth = account.validate_user_op(
        account.entry_point(),
        &tampered,
        &hash,
        U256::zero(),
        &mut host,
    )?;
    assert_eq!(auth, Authorization::SigMismatch);
    Ok(())
}

#[test]
fn stranger_cannot_execute_and_leaves_no_trace() {
    let (account, _, mut host) = simple_account_fixture();
    let stranger = Address::repeat_byte(0x99);
    let before = host.balance_of(&account.address());

    let err = account
        .execute(stranger, Address::random(), U256::from(1), &Bytes::default(), &mut host)
        .unwrap_err();
    assert_eq!(err, AccountError::NotFromEntryPointOrOwner(stranger));
    assert!(host.calls.is_empty());
    assert_eq!(host.balance_of(&account.address()), before);
}

#[test]
fn network_config_wires_the_entry_point() {
    let config = NetworkConfig::resolve(DEV_CHAIN_ID).unwrap();
    let ep = Address::repeat_byte(0xee);
    assert_eq!(config.with_entry_point(ep).entry_point, ep);
    assert!(NetworkConfig::resolve(0xdead_beef).is_err());
}
