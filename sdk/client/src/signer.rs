use {
  crate::{
    chain::{Ed25519Signature, RestClient, SubmissionRequest},
    error::TransactionError,
  },
  boostify_primitives::{Address, EntryFunctionPayload, PendingTransaction},
  ed25519_dalek::{Keypair, PublicKey, SecretKey, Signer},
  std::time::{Duration, SystemTime, UNIX_EPOCH},
  tracing::info,
};

/// An agent holding key material that authorizes and submits
/// transactions on behalf of the connected account.
#[allow(async_fn_in_trait)]
pub trait SigningProvider {
  /// The connected identity, if any.
  fn account(&self) -> Option<Address>;

  async fn sign_and_submit(
    &self,
    payload: EntryFunctionPayload,
  ) -> Result<PendingTransaction, TransactionError>;
}

/// Gas and expiry knobs of locally signed transactions.
#[derive(Debug, Clone, Copy)]
pub struct GasSettings {
  pub max_gas_amount: u64,
  pub gas_unit_price: u64,
  pub expiration: Duration,
}

impl Default for GasSettings {
  fn default() -> Self {
    Self {
      max_gas_amount: 200_000,
      gas_unit_price: 100,
      expiration: Duration::from_secs(60),
    }
  }
}

/// Signs with an Ed25519 key held in memory and submits through the
/// node JSON API.
pub struct LocalSigner {
  keypair: Keypair,
  address: Address,
  node: RestClient,
  gas: GasSettings,
}

impl LocalSigner {
  pub fn new(keypair: Keypair, node: RestClient, gas: GasSettings) -> Self {
    let address = Address::from(keypair.public);
    Self {
      keypair,
      address,
      node,
      gas,
    }
  }

  /// Builds a signer from a hex encoded 32 byte secret key,
  /// with or without a `0x` prefix.
  pub fn from_hex(
    secret: &str,
    node: RestClient,
    gas: GasSettings,
  ) -> Result<Self, TransactionError> {
    let bytes = hex::decode(secret.trim().trim_start_matches("0x"))
      .map_err(|e| TransactionError::Signing(e.to_string()))?;
    let secret = SecretKey::from_bytes(&bytes)
      .map_err(|e| TransactionError::Signing(e.to_string()))?;
    let public = PublicKey::from(&secret);
    Ok(Self::new(Keypair { secret, public }, node, gas))
  }

  fn expiration_timestamp(&self) -> Result<u64, TransactionError> {
    let now = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map_err(|e| TransactionError::Signing(e.to_string()))?;
    Ok((now + self.gas.expiration).as_secs())
  }
}

impl SigningProvider for LocalSigner {
  fn account(&self) -> Option<Address> {
    Some(self.address)
  }

  async fn sign_and_submit(
    &self,
    payload: EntryFunctionPayload,
  ) -> Result<PendingTransaction, TransactionError> {
    let sequence_number = self.node.sequence_number(&self.address).await?;
    let mut request = SubmissionRequest {
      sender: self.address.to_long_string(),
      sequence_number: sequence_number.to_string(),
      max_gas_amount: self.gas.max_gas_amount.to_string(),
      gas_unit_price: self.gas.gas_unit_price.to_string(),
      expiration_timestamp_secs: self.expiration_timestamp()?.to_string(),
      payload,
      signature: None,
    };

    let message = self.node.encode_submission(&request).await?;
    let signature = self.keypair.sign(&message);

    request.signature = Some(Ed25519Signature {
      kind: "ed25519_signature",
      public_key: format!("0x{}", hex::encode(self.keypair.public.as_bytes())),
      signature: format!("0x{}", hex::encode(signature.to_bytes())),
    });

    let pending = self.node.submit(&request).await?;
    info!(
      "submitted {} from {} as {pending:?}",
      request.payload.function, self.address
    );
    Ok(pending)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{GasSettings, LocalSigner, SigningProvider},
    crate::chain::RestClient,
    boostify_primitives::Address,
    ed25519_dalek::Keypair,
  };

  #[test]
  fn hex_secret_yields_matching_account() {
    let keypair = Keypair::generate(&mut rand::thread_rng());
    let secret = hex::encode(keypair.secret.as_bytes());
    let expected = Address::from(keypair.public);

    let plain = LocalSigner::from_hex(
      &secret,
      RestClient::default(),
      GasSettings::default(),
    )
    .unwrap();
    let prefixed = LocalSigner::from_hex(
      &format!("0x{secret}"),
      RestClient::default(),
      GasSettings::default(),
    )
    .unwrap();

    assert_eq!(plain.account(), Some(expected));
    assert_eq!(prefixed.account(), Some(expected));
  }

  #[test]
  fn rejects_bad_secret() {
    assert!(LocalSigner::from_hex(
      "abcd",
      RestClient::default(),
      GasSettings::default()
    )
    .is_err());
    assert!(LocalSigner::from_hex(
      "zz",
      RestClient::default(),
      GasSettings::default()
    )
    .is_err());
  }
}
