//! Native (EIP-712) transaction type for zkSync Era accounts

use crate::constants::era_transaction::{DOMAIN_NAME, DOMAIN_VERSION, EIP712_TX_TYPE};
use ethers::{
    abi::{encode, Token},
    types::{Address, Bytes, H256, U256},
    utils::keccak256,
};
use serde::{Deserialize, Serialize};

/// Type hash of the Era EIP-712 `Transaction` struct
const TRANSACTION_TYPE: &str = "Transaction(uint256 txType,uint256 from,uint256 to,uint256 gasLimit,uint256 gasPerPubdataByteLimit,uint256 maxFeePerGas,uint256 maxPriorityFeePerGas,uint256 paymaster,uint256 nonce,uint256 value,bytes data,bytes32[] factoryDeps,bytes paymasterInput)";

/// Type hash of the EIP-712 domain
const DOMAIN_TYPE: &str = "EIP712Domain(string name,string version,uint256 chainId)";

/// Era native transaction, the unit of authorization on the zkSync Era path
///
/// Field order and hashing follow the Era typed-data encoding exactly; the signer
/// recovers against the raw EIP-712 digest, without a personal-message prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraTransaction {
    /// Transaction type (0x71 for native Era transactions)
    pub tx_type: U256,

    /// Sender of the transaction
    pub from: Address,

    /// Destination of the main execution call
    pub to: Address,

    /// Gas limit covering both validation and execution
    pub gas_limit: U256,

    /// Upper bound on gas charged per byte of published pubdata
    pub gas_per_pubdata_byte_limit: U256,

    /// Maximum fee per gas (similar to EIP-1559)
    pub max_fee_per_gas: U256,

    /// Maximum priority fee per gas (similar to EIP-1559)
    pub max_priority_fee_per_gas: U256,

    /// Paymaster sponsoring the transaction (zero when the account pays itself)
    pub paymaster: Address,

    /// Nonce (anti replay protection)
    pub nonce: U256,

    /// Value passed with the main execution call
    pub value: U256,

    /// Calldata of the main execution call
    pub data: Bytes,

    /// Bytecode hashes of contracts to be deployed with this transaction
    pub factory_deps: Vec<H256>,

    /// Input handed to the paymaster (empty when unsponsored)
    pub paymaster_input: Bytes,

    /// Signature over the EIP-712 digest, expected to be 65-byte r || s || v
    pub signature: Bytes,
}

impl Default for EraTransaction {
    fn default() -> Self {
        Self {
            tx_type: EIP712_TX_TYPE.into(),
            from: Address::zero(),
            to: Address::zero(),
            gas_limit: U256::zero(),
            gas_per_pubdata_byte_limit: U256::zero(),
            max_fee_per_gas: U256::zero(),
            max_priority_fee_per_gas: U256::zero(),
            paymaster: Address::zero(),
            nonce: U256::zero(),
            value: U256::zero(),
            data: Bytes::default(),
            factory_deps: Vec::new(),
            paymaster_input: Bytes::default(),
            signature: Bytes::default(),
        }
    }
}

fn addr_as_uint(addr: &Address) -> Token {
    Token::Uint(U256::from_big_endian(addr.as_bytes()))
}

impl EraTransaction {
    /// Hash of the EIP-712 `Transaction` struct
    pub fn struct_hash(&self) -> H256 {
        let factory_deps_packed: Vec<u8> =
            self.factory_deps.iter().flat_map(|h| h.0.to_vec()).collect();
        keccak256(encode(&[
            Token::Uint(U256::from_big_endian(&keccak256(TRANSACTION_TYPE.as_bytes()))),
            Token::Uint(self.tx_type),
            addr_as_uint(&self.from),
            addr_as_uint(&self.to),
            Token::Uint(self.gas_limit),
            Token::Uint(self.gas_per_pubdata_byte_limit),
            Token::Uint(self.max_fee_per_gas),
            Token::Uint(self.max_priority_fee_per_gas),
            addr_as_uint(&self.paymaster),
            Token::Uint(self.nonce),
            Token::Uint(self.value),
            Token::Uint(U256::from_big_endian(&keccak256(&self.data))),
            Token::Uint(U256::from_big_endian(&keccak256(factory_deps_packed))),
            Token::Uint(U256::from_big_endian(&keccak256(&self.paymaster_input))),
        ]))
        .into()
    }

    /// EIP-712 domain separator of the Era chain with the given chain id
    pub fn domain_separator(chain_id: u64) -> H256 {
        keccak256(encode(&[
            Token::Uint(U256::from_big_endian(&keccak256(DOMAIN_TYPE.as_bytes()))),
            Token::Uint(U256::from_big_endian(&keccak256(DOMAIN_NAME.as_bytes()))),
            Token::Uint(U256::from_big_endian(&keccak256(DOMAIN_VERSION.as_bytes()))),
            Token::Uint(U256::from(chain_id)),
        ]))
        .into()
    }

    /// Canonical digest of the transaction, the value the account owner signs
    pub fn signed_hash(&self, chain_id: u64) -> H256 {
        let mut buf = Vec::with_capacity(66);
        buf.extend_from_slice(&[0x19, 0x01]);
        buf.extend_from_slice(Self::domain_separator(chain_id).as_bytes());
        buf.extend_from_slice(self.struct_hash().as_bytes());
        keccak256(buf).into()
    }

    /// Fee reserved for the transaction across its whole gas limit,
    /// `None` on arithmetic overflow
    pub fn fee(&self) -> Option<U256> {
        self.gas_limit.checked_mul(self.max_fee_per_gas)
    }

    /// Balance the sender must hold for the transaction to be admitted:
    /// the full fee reservation plus the transferred value
    pub fn required_balance(&self) -> Option<U256> {
        self.fee()?.checked_add(self.value)
    }

    // Builder pattern helpers

    /// Sets the sender of the transaction
    pub fn from(mut self, from: Address) -> Self {
        self.from = from;
        self
    }

    /// Sets the destination of the transaction
    pub fn to(mut self, to: Address) -> Self {
        self.to = to;
        self
    }

    /// Sets the gas limit of the transaction
    pub fn gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Sets the gas per pubdata byte limit of the transaction
    pub fn gas_per_pubdata_byte_limit(mut self, limit: U256) -> Self {
        self.gas_per_pubdata_byte_limit = limit;
        self
    }

    /// Sets the max fee per gas of the transaction
    pub fn max_fee_per_gas(mut self, max_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = max_fee_per_gas;
        self
    }

    /// Sets the max priority fee per gas of the transaction
    pub fn max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: U256) -> Self {
        self.max_priority_fee_per_gas = max_priority_fee_per_gas;
        self
    }

    /// Sets the nonce of the transaction
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the value of the transaction
    pub fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Sets the calldata of the transaction
    pub fn data(mut self, data: Bytes) -> Self {
        self.data = data;
        self
    }

    /// Sets the signature of the transaction
    pub fn signature(mut self, signature: Bytes) -> Self {
        self.signature = signature;
        self
    }
}
