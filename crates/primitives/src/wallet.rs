//! A `Wallet` is a wrapper around an ethers wallet that signs user operations
//! and Era transactions with the owner key

use crate::{EraTransaction, UserOperationSigned};
use ethers::{
    prelude::{k256::ecdsa::SigningKey, rand},
    signers::{coins_bip39::English, MnemonicBuilder, Signer},
    types::Address,
};
use expanded_pathbuf::ExpandedPathBuf;
use std::fs;
use tracing::trace;

const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Wrapper around ethers wallet
#[derive(Clone, Debug)]
pub struct Wallet {
    /// Signing key of the wallet
    pub signer: ethers::signers::Wallet<SigningKey>,
}

impl Wallet {
    /// Builds a `Wallet` from a randomly generated mnemonic and writes the
    /// phrase to the given directory
    pub fn build_random(path: ExpandedPathBuf, chain_id: u64) -> eyre::Result<Self> {
        let mut rng = rand::thread_rng();

        fs::create_dir_all(&path)?;

        let wallet = MnemonicBuilder::<English>::default()
            .write_to(path.to_path_buf())
            .derivation_path(DERIVATION_PATH)?
            .build_random(&mut rng)?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Creates a wallet from the file containing the mnemonic phrase
    pub fn from_file(path: ExpandedPathBuf, chain_id: u64) -> eyre::Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(path.to_path_buf())
            .derivation_path(DERIVATION_PATH)?
            .build()?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Creates a wallet from the given mnemonic phrase
    pub fn from_phrase(phrase: &str, chain_id: u64) -> eyre::Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .derivation_path(DERIVATION_PATH)?
            .build()?;

        Ok(Self { signer: wallet.with_chain_id(chain_id) })
    }

    /// Address of the signing key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signs the user operation for the given entry point and chain.
    ///
    /// The canonical user operation hash is wrapped in the personal-message
    /// prefix before signing, matching what the generic account recovers against.
    pub async fn sign_uo(
        &self,
        uo: &UserOperationSigned,
        entry_point: &Address,
        chain_id: u64,
    ) -> eyre::Result<UserOperationSigned> {
        let hash = uo.hash(entry_point, chain_id);
        trace!("signing user operation {hash:?} for sender {:?}", uo.sender);
        let sig = self.signer.sign_message(hash.0.as_bytes()).await?;
        Ok(uo.clone().signature(sig.to_vec().into()))
    }

    /// Signs the Era transaction for the given chain.
    ///
    /// Era accounts recover against the raw EIP-712 digest, so the digest is
    /// signed as-is, without a personal-message prefix.
    pub fn sign_era_transaction(
        &self,
        tx: &EraTransaction,
        chain_id: u64,
    ) -> eyre::Result<EraTransaction> {
        let digest = tx.signed_hash(chain_id);
        let sig = self.signer.sign_hash(digest)?;
        Ok(tx.clone().signature(sig.to_vec().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::Signature;

    const PHRASE: &str = "test test test test test test test test test test test junk";

    #[tokio::test]
    async fn sign_uo_recovers_to_wallet_address() {
        let wallet = Wallet::from_phrase(PHRASE, 1).unwrap();
        let uo = UserOperationSigned::default().sender(wallet.address()).nonce(0.into());
        let ep: Address = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789".parse().unwrap();

        let signed = wallet.sign_uo(&uo, &ep, 1).await.unwrap();
        assert_eq!(signed.signature.len(), 65);

        let sig = Signature::try_from(signed.signature.as_ref()).unwrap();
        let hash = signed.hash(&ep, 1);
        // personal-message recovery over the digest bytes
        assert_eq!(sig.recover(hash.0.as_bytes().to_vec()).unwrap(), wallet.address());
    }

    #[test]
    fn sign_era_transaction_recovers_to_wallet_address() {
        let wallet = Wallet::from_phrase(PHRASE, 324).unwrap();
        let tx = EraTransaction::default().from(wallet.address()).nonce(1.into());

        let signed = wallet.sign_era_transaction(&tx, 324).unwrap();
        let sig = Signature::try_from(signed.signature.as_ref()).unwrap();
        // raw digest recovery, no prefix
        assert_eq!(sig.recover(signed.signed_hash(324)).unwrap(), wallet.address());
    }

    #[test]
    fn build_random_writes_phrase() {
        let dir = tempfile::tempdir().unwrap();
        let wallet =
            Wallet::build_random(ExpandedPathBuf(dir.path().to_path_buf()), 1).unwrap();
        let phrase_file = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap().path();
        let recovered = Wallet::from_file(ExpandedPathBuf(phrase_file), 1).unwrap();
        assert_eq!(wallet.address(), recovered.address());
    }
}
