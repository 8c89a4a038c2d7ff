use {
  boostify_primitives::{AddressError, WindowError},
  thiserror::Error,
};

/// Rejected user input. Nothing was sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("invalid contract address: {0}")]
  InvalidAddress(#[from] AddressError),

  #[error("no contract address is selected")]
  MissingTarget,

  #[error("contract {0} is not in the registry")]
  UnknownContract(String),

  #[error("invalid time window: {0}")]
  InvalidWindow(#[from] WindowError),

  #[error("number of rewards must be positive")]
  ZeroRewards,
}

/// Failures of the indexer analytics query.
#[derive(Debug, Error)]
pub enum QueryError {
  #[error("indexer transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("indexer responded with status {0}")]
  Status(u16),

  #[error("indexer reported errors: {0}")]
  Service(String),

  #[error("indexer response has no data")]
  MissingData,

  #[error("indexer returned a malformed address {0:?}")]
  MalformedAddress(String),

  #[error("cannot express the query window: {0}")]
  Window(#[from] WindowError),
}

/// Failures anywhere between building a payload and its confirmation.
#[derive(Debug, Error)]
pub enum TransactionError {
  #[error("signing provider has no connected account")]
  NotConnected,

  #[error("signing failed: {0}")]
  Signing(String),

  #[error("node rejected the transaction: {0}")]
  Rejected(String),

  #[error("transaction {hash} failed on chain: {vm_status}")]
  Failed { hash: String, vm_status: String },

  #[error("node transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("malformed node response: {0}")]
  Malformed(String),
}

/// Failures reading an account resource.
#[derive(Debug, Error)]
pub enum ResourceError {
  #[error("resource {resource} not found under {address}")]
  NotFound { address: String, resource: String },

  #[error("node transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("node responded with status {0}")]
  Status(u16),

  #[error("malformed resource data: {0}")]
  Malformed(#[from] serde_json::Error),
}

/// Umbrella error of every widget operation.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Query(#[from] QueryError),

  #[error(transparent)]
  Transaction(#[from] TransactionError),

  #[error(transparent)]
  Resource(#[from] ResourceError),

  #[error("another operation is still in progress")]
  Busy,
}
