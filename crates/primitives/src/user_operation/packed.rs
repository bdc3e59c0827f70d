//! Packed wire form of the user operation
//!
//! The packed shape folds the two gas limits and the two fee parameters into one
//! 32-byte word each (high 128 bits = first field). It is only a wire format;
//! validation logic works on the unpacked [`UserOperationSigned`].

use super::UserOperationSigned;
use crate::utils::{as_checksum_addr, fits_uint128, pack_uint128, unpack_uint128};
use ethers::{
    contract::{EthAbiCodec, EthAbiType},
    types::{Address, Bytes, H256, U256},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a user operation cannot be represented in packed form
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// A gas or fee field exceeds 128 bits and cannot share a packed word
    #[error("field {field} does not fit into 128 bits")]
    Overflow { field: &'static str },
}

/// User operation in packed wire form
#[derive(Default, Clone, Debug, PartialEq, Eq, EthAbiCodec, EthAbiType, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackedUserOperation {
    /// Sender of the user operation
    #[serde(serialize_with = "as_checksum_addr")]
    pub sender: Address,

    /// Nonce (anti replay protection)
    pub nonce: U256,

    /// Init code for the account
    pub init_code: Bytes,

    /// The data that is passed to the sender during the main execution call
    pub call_data: Bytes,

    /// verificationGasLimit (high 128 bits) and callGasLimit (low 128 bits)
    pub account_gas_limits: H256,

    /// The amount of gas to compensate the bundler for pre-verification execution and calldata
    pub pre_verification_gas: U256,

    /// maxPriorityFeePerGas (high 128 bits) and maxFeePerGas (low 128 bits)
    pub gas_fees: H256,

    /// Paymaster address followed by extra paymaster data
    pub paymaster_and_data: Bytes,

    /// Signature over the canonical user operation hash
    pub signature: Bytes,
}

impl PackedUserOperation {
    /// Packs a user operation into the wire form, erroring when a gas or fee field
    /// does not fit its 128-bit half
    pub fn try_from_user_operation(uo: &UserOperationSigned) -> Result<Self, PackError> {
        for (field, val) in [
            ("verificationGasLimit", &uo.verification_gas_limit),
            ("callGasLimit", &uo.call_gas_limit),
            ("maxPriorityFeePerGas", &uo.max_priority_fee_per_gas),
            ("maxFeePerGas", &uo.max_fee_per_gas),
        ] {
            if !fits_uint128(val) {
                return Err(PackError::Overflow { field });
            }
        }

        Ok(Self {
            sender: uo.sender,
            nonce: uo.nonce,
            init_code: uo.init_code.clone(),
            call_data: uo.call_data.clone(),
            account_gas_limits: pack_uint128(uo.verification_gas_limit, uo.call_gas_limit),
            pre_verification_gas: uo.pre_verification_gas,
            gas_fees: pack_uint128(uo.max_priority_fee_per_gas, uo.max_fee_per_gas),
            paymaster_and_data: uo.paymaster_and_data.clone(),
            signature: uo.signature.clone(),
        })
    }
}

impl From<PackedUserOperation> for UserOperationSigned {
    fn from(packed: PackedUserOperation) -> Self {
        let (verification_gas_limit, call_gas_limit) = unpack_uint128(&packed.account_gas_limits);
        let (max_priority_fee_per_gas, max_fee_per_gas) = unpack_uint128(&packed.gas_fees);
        Self {
            sender: packed.sender,
            nonce: packed.nonce,
            init_code: packed.init_code,
            call_data: packed.call_data,
            call_gas_limit,
            verification_gas_limit,
            pre_verification_gas: packed.pre_verification_gas,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            paymaster_and_data: packed.paymaster_and_data,
            signature: packed.signature,
        }
    }
}
