//! ECDSA signer recovery over account digests

use ethers::types::{Address, Signature, H256};

/// Recovers the signer from a 65-byte r || s || v signature over the digest
/// wrapped in the personal-message prefix (generic path). Malformed signatures
/// recover to `None`, never to an error.
pub(crate) fn recover_personal(digest: &H256, signature: &[u8]) -> Option<Address> {
    let sig = Signature::try_from(signature).ok()?;
    sig.recover(digest.as_bytes().to_vec()).ok()
}

/// Recovers the signer directly from the raw digest, without any prefix
/// (Era path).
pub(crate) fn recover_raw(digest: &H256, signature: &[u8]) -> Option<Address> {
    let sig = Signature::try_from(signature).ok()?;
    sig.recover(*digest).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::{core::rand::thread_rng, signers::{LocalWallet, Signer}, utils::keccak256};

    #[tokio::test]
    async fn personal_and_raw_recovery_differ() {
        let wallet = LocalWallet::new(&mut thread_rng());
        let digest = H256::from(keccak256(b"operation"));

        let personal = wallet.sign_message(digest.as_bytes()).await.unwrap();
        assert_eq!(recover_personal(&digest, &personal.to_vec()), Some(wallet.address()));
        assert_ne!(recover_raw(&digest, &personal.to_vec()), Some(wallet.address()));

        let raw = wallet.sign_hash(digest).unwrap();
        assert_eq!(recover_raw(&digest, &raw.to_vec()), Some(wallet.address()));
    }

    #[test]
    fn malformed_signatures_recover_to_none() {
        let digest = H256::from(keccak256(b"operation"));
        assert_eq!(recover_personal(&digest, &[]), None);
        assert_eq!(recover_personal(&digest, &[0u8; 64]), None);
        assert_eq!(recover_raw(&digest, &[0xffu8; 65]), None);
    }
}
