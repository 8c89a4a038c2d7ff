use {
  crate::Address,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  std::fmt::{Debug, Display},
};

/// Fully qualified name of an on-chain entry function or resource,
/// addressed as `<address>::<module>::<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryFunctionId {
  pub address: Address,
  pub module: String,
  pub name: String,
}

impl EntryFunctionId {
  pub fn new(
    address: Address,
    module: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      address,
      module: module.into(),
      name: name.into(),
    }
  }
}

impl Display for EntryFunctionId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}::{}::{}", self.address, self.module, self.name)
  }
}

/// A call to an entry function as understood by wallets and by the
/// node JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "entry_function_payload")]
pub struct EntryFunctionPayload {
  /// `<address>::<module>::<function>`
  pub function: String,

  /// Generic type arguments, always empty for the reward contract.
  pub type_arguments: Vec<String>,

  /// Call arguments in their JSON encoding. Vectors of addresses are
  /// arrays of strings and 64-bit integers are decimal strings.
  pub arguments: Vec<Value>,
}

impl EntryFunctionPayload {
  pub fn new(function: &EntryFunctionId, arguments: Vec<Value>) -> Self {
    Self {
      function: function.to_string(),
      type_arguments: vec![],
      arguments,
    }
  }
}

/// What a signing provider hands back after a successful submission.
/// The transaction is not yet committed at this point.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
  pub hash: String,
}

impl Debug for PendingTransaction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "pending({})", self.hash)
  }
}
