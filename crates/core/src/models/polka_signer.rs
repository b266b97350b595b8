use sp_core::{sr25519, Pair};
use sp_runtime::{
    traits::{IdentifyAccount, Verify},
    MultiSignature,
};
use subxt::{tx::Signer, utils::AccountId32};

use crate::prelude::*;

/// Signs disbursement transactions on behalf of the sending account.
#[derive(Clone, derive_more::Debug, Getters)]
#[debug("PolkaSigner({})", account_id)]
pub struct PolkaSigner {
    #[getset(get = "pub")]
    account_id: AccountId32,
    signer: sr25519::Pair,
}

impl PolkaSigner {
    pub fn new(signer: sr25519::Pair) -> Self {
        let account_id = <MultiSignature as Verify>::Signer::from(signer.public()).into_account();
        let bytes: [u8; 32] = account_id.into();
        Self {
            account_id: AccountId32::from(bytes),
            signer,
        }
    }

    /// Derives the signer from a secret URI such as `//Alice` or a mnemonic phrase.
    pub fn from_secret_uri(suri: &str) -> Result<Self, BootstrapError> {
        let pair = sr25519::Pair::from_string(suri, None).map_err(|e| {
            BootstrapError::InvalidSignerUri {
                underlying: format!("{e:?}"),
            }
        })?;
        Ok(Self::new(pair))
    }
}

impl From<sr25519::Pair> for PolkaSigner {
    fn from(pair: sr25519::Pair) -> Self {
        Self::new(pair)
    }
}

impl Signer<PolkadotConfig> for PolkaSigner {
    fn account_id(&self) -> <PolkadotConfig as subxt::Config>::AccountId {
        self.account_id.clone()
    }

    fn sign(&self, signer_payload: &[u8]) -> <PolkadotConfig as subxt::Config>::Signature {
        let signature = self.signer.sign(signer_payload);
        subxt::utils::MultiSignature::Sr25519(signature.0)
    }
}
