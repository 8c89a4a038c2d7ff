use {
  crate::error::{ResourceError, TransactionError},
  boostify_primitives::{Address, PendingTransaction},
  reqwest::StatusCode,
  serde::{de::DeserializeOwned, Deserialize, Serialize},
  std::time::Duration,
  tracing::{debug, info},
};

pub const DEFAULT_NODE_URL: &str = "https://api.random.aptoslabs.com/v1";

/// Read access to the chain, used to confirm submitted transactions and
/// to read contract resources.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
  /// Resolves once the transaction is committed. There is no timeout,
  /// an unresponsive node stalls the caller.
  async fn wait_for_transaction(&self, hash: &str)
    -> Result<(), TransactionError>;

  /// Reads the `data` of a resource stored under an account.
  async fn account_resource<T: DeserializeOwned>(
    &self,
    address: &Address,
    resource_type: &str,
  ) -> Result<T, ResourceError>;
}

#[derive(Debug, Deserialize)]
struct TransactionStatus {
  #[serde(rename = "type")]
  kind: String,
  #[serde(default)]
  success: Option<bool>,
  #[serde(default)]
  vm_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountResource<T> {
  data: T,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
  sequence_number: String,
}

/// Body of both the signing-message encoder and the submission
/// endpoint of the node JSON API. The signature is only present on
/// submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
  pub sender: String,
  pub sequence_number: String,
  pub max_gas_amount: String,
  pub gas_unit_price: String,
  pub expiration_timestamp_secs: String,
  pub payload: boostify_primitives::EntryFunctionPayload,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub signature: Option<Ed25519Signature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ed25519Signature {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub public_key: String,
  pub signature: String,
}

/// Client of a full node REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
  http: reqwest::Client,
  base: String,
  poll_interval: Duration,
}

impl Default for RestClient {
  fn default() -> Self {
    Self::new(DEFAULT_NODE_URL)
  }
}

impl RestClient {
  pub fn new(base: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      base: base.into().trim_end_matches('/').to_owned(),
      poll_interval: Duration::from_secs(1),
    }
  }

  /// How often a pending transaction is polled for its outcome.
  pub fn with_poll_interval(mut self, interval: Duration) -> Self {
    self.poll_interval = interval;
    self
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  pub async fn sequence_number(
    &self,
    address: &Address,
  ) -> Result<u64, TransactionError> {
    let url = format!("{}/accounts/{}", self.base, address.to_long_string());
    let response = self.http.get(url).send().await?;
    if !response.status().is_success() {
      return Err(TransactionError::Rejected(format!(
        "account {address} lookup failed with status {}",
        response.status()
      )));
    }

    let info: AccountInfo = response.json().await?;
    info
      .sequence_number
      .parse()
      .map_err(|_| TransactionError::Malformed(info.sequence_number))
  }

  /// Asks the node for the BCS signing message of a transaction.
  pub async fn encode_submission(
    &self,
    request: &SubmissionRequest,
  ) -> Result<Vec<u8>, TransactionError> {
    let url = format!("{}/transactions/encode_submission", self.base);
    let response = self.http.post(url).json(request).send().await?;
    if !response.status().is_success() {
      return Err(TransactionError::Rejected(response.text().await?));
    }

    let encoded: String = response.json().await?;
    hex::decode(encoded.trim_start_matches("0x"))
      .map_err(|e| TransactionError::Malformed(e.to_string()))
  }

  pub async fn submit(
    &self,
    request: &SubmissionRequest,
  ) -> Result<PendingTransaction, TransactionError> {
    let url = format!("{}/transactions", self.base);
    let response = self.http.post(url).json(request).send().await?;
    if !response.status().is_success() {
      return Err(TransactionError::Rejected(response.text().await?));
    }
    Ok(response.json().await?)
  }
}

impl ChainClient for RestClient {
  async fn wait_for_transaction(
    &self,
    hash: &str,
  ) -> Result<(), TransactionError> {
    let url = format!("{}/transactions/by_hash/{hash}", self.base);
    loop {
      let response = self.http.get(&url).send().await?;
      match response.status() {
        StatusCode::NOT_FOUND => {
          debug!("transaction {hash} not yet known to the node");
        }
        status if status.is_success() => {
          let status: TransactionStatus = response.json().await?;
          if status.kind != "pending_transaction" {
            return match status.success {
              Some(true) => {
                info!("transaction {hash} committed");
                Ok(())
              }
              _ => Err(TransactionError::Failed {
                hash: hash.to_owned(),
                vm_status: status.vm_status.unwrap_or_default(),
              }),
            };
          }
          debug!("transaction {hash} pending");
        }
        status => {
          return Err(TransactionError::Rejected(format!(
            "transaction lookup failed with status {status}"
          )));
        }
      }
      tokio::time::sleep(self.poll_interval).await;
    }
  }

  async fn account_resource<T: DeserializeOwned>(
    &self,
    address: &Address,
    resource_type: &str,
  ) -> Result<T, ResourceError> {
    let url = format!(
      "{}/accounts/{}/resource/{resource_type}",
      self.base,
      address.to_long_string()
    );
    let response = self.http.get(url).send().await?;
    match response.status() {
      StatusCode::NOT_FOUND => Err(ResourceError::NotFound {
        address: address.to_string(),
        resource: resource_type.to_owned(),
      }),
      status if status.is_success() => {
        let resource: AccountResource<serde_json::Value> =
          response.json().await?;
        Ok(serde_json::from_value(resource.data)?)
      }
      status => Err(ResourceError::Status(status.as_u16())),
    }
  }
}
