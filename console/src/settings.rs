use {
  boostify_sdk::{GasSettings, DEFAULT_INDEXER_URL, DEFAULT_NODE_URL},
  clap::{ArgGroup, Parser},
  humantime::Duration,
  std::path::PathBuf,
};

/// Boostify Reward Console
///
/// Collects participants of a reward contract from the indexer, runs
/// reward rounds as the contract administrator, or registers the
/// connected wallet as a participant.
#[derive(Debug, Parser)]
#[clap(group(
  ArgGroup::new("key")
    .required(true)
    .args(["secret_key", "key_file"])))]
pub struct SystemSettings {
  /// GraphQL endpoint of the activity indexer
  #[clap(long,
    default_value = DEFAULT_INDEXER_URL,
    value_name = "URL")]
  indexer_url: String,

  /// Base url of the full node REST API
  #[clap(long,
    default_value = DEFAULT_NODE_URL,
    value_name = "URL")]
  node_url: String,

  /// Hex encoded Ed25519 secret key of the connected wallet
  #[clap(long, short, value_name = "HEX")]
  secret_key: Option<String>,

  /// File containing the hex encoded Ed25519 secret key
  #[clap(long, short, value_name = "PATH")]
  key_file: Option<PathBuf>,

  /// Contract addresses to register at startup, the last one is selected
  #[clap(long, short, value_name = "ADDRESS")]
  contract: Vec<String>,

  /// How often a submitted transaction is polled for its outcome
  #[clap(long,
    value_name = "DURATION",
    default_value = "1s")]
  poll_interval: Duration,

  /// Maximum gas units a transaction may consume
  #[clap(long,
    value_name = "UNITS",
    default_value = "200000")]
  max_gas: u64,

  /// Price per gas unit in octas
  #[clap(long,
    value_name = "OCTAS",
    default_value = "100")]
  gas_price: u64,

  /// Validity period of a signed transaction
  #[clap(long,
    value_name = "DURATION",
    default_value = "60s")]
  expiration: Duration,
}

impl SystemSettings {
  pub fn indexer_url(&self) -> &str {
    &self.indexer_url
  }

  pub fn node_url(&self) -> &str {
    &self.node_url
  }

  pub fn contracts(&self) -> &[String] {
    &self.contract
  }

  pub fn poll_interval(&self) -> std::time::Duration {
    self.poll_interval.into()
  }

  /// The secret key, either given inline or read from the key file.
  pub fn secret_key(&self) -> anyhow::Result<String> {
    match (&self.secret_key, &self.key_file) {
      (Some(secret), _) => Ok(secret.clone()),
      (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
      (None, None) => Err(anyhow::anyhow!("no wallet key configured")),
    }
  }

  pub fn gas(&self) -> GasSettings {
    GasSettings {
      max_gas_amount: self.max_gas,
      gas_unit_price: self.gas_price,
      expiration: self.expiration.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::SystemSettings, clap::Parser, std::time::Duration};

  #[test]
  fn defaults() {
    let settings =
      SystemSettings::try_parse_from(["boostify", "--secret-key", "00"])
        .unwrap();
    assert_eq!(
      settings.indexer_url(),
      "https://api.random.aptoslabs.com/v1/graphql"
    );
    assert_eq!(settings.node_url(), "https://api.random.aptoslabs.com/v1");
    assert_eq!(settings.poll_interval(), Duration::from_secs(1));
    assert_eq!(settings.gas().max_gas_amount, 200_000);
    assert_eq!(settings.gas().expiration, Duration::from_secs(60));
    assert_eq!(settings.secret_key().unwrap(), "00");
    assert!(settings.contracts().is_empty());
  }

  #[test]
  fn key_is_required() {
    assert!(SystemSettings::try_parse_from(["boostify"]).is_err());
  }

  #[test]
  fn repeated_contracts() {
    let settings = SystemSettings::try_parse_from([
      "boostify",
      "-s",
      "00",
      "-c",
      "0x1",
      "--contract",
      "0x2",
      "--poll-interval",
      "250ms",
    ])
    .unwrap();
    assert_eq!(settings.contracts(), &["0x1", "0x2"]);
    assert_eq!(settings.poll_interval(), Duration::from_millis(250));
  }
}
