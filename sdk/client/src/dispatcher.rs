use {
  crate::{
    chain::ChainClient,
    error::{ResourceError, TransactionError},
    signer::SigningProvider,
  },
  boostify_primitives::{
    Address,
    EntryFunctionId,
    EntryFunctionPayload,
    PendingTransaction,
    RewardState,
    REWARD_MODULE,
    REWARD_STATE_RESOURCE,
  },
  serde_json::Value,
  tracing::info,
};

pub const ADD_WALLET: &str = "add_wallet";
pub const START_REWARD_GROUP: &str = "start_reward_group";
pub const END_REWARD_GROUP: &str = "end_reward_groupA";
pub const RESET_REWARD: &str = "reset_reward";

/// Builds calls against the reward module of a contract, submits them
/// through the signing provider and waits for the chain to commit
/// them.
///
/// Each operation is a single attempt, nothing is retried.
pub struct Dispatcher<S, C> {
  signer: S,
  chain: C,
}

impl<S: SigningProvider, C: ChainClient> Dispatcher<S, C> {
  pub fn new(signer: S, chain: C) -> Self {
    Self { signer, chain }
  }

  pub fn signer(&self) -> &S {
    &self.signer
  }

  pub fn chain(&self) -> &C {
    &self.chain
  }

  /// Registers the connected account as a participant.
  pub async fn add_wallet(
    &self,
    contract: &Address,
  ) -> Result<PendingTransaction, TransactionError> {
    self.submit(contract, ADD_WALLET, vec![]).await
  }

  /// Opens a reward round over the given participants, sent in the full
  /// 64 digit form the indexer reports them in.
  pub async fn start_reward_group(
    &self,
    contract: &Address,
    participants: &[Address],
  ) -> Result<PendingTransaction, TransactionError> {
    let participants = participants
      .iter()
      .map(|a| Value::String(a.to_long_string()))
      .collect();
    self
      .submit(contract, START_REWARD_GROUP, vec![Value::Array(participants)])
      .await
  }

  /// Closes the round. Winner selection happens on chain.
  pub async fn end_reward_group(
    &self,
    contract: &Address,
    amount: u64,
  ) -> Result<PendingTransaction, TransactionError> {
    self
      .submit(contract, END_REWARD_GROUP, vec![Value::String(
        amount.to_string(),
      )])
      .await
  }

  pub async fn reset_reward(
    &self,
    contract: &Address,
  ) -> Result<PendingTransaction, TransactionError> {
    self.submit(contract, RESET_REWARD, vec![]).await
  }

  /// Reads the round state resource. Nothing is signed.
  pub async fn reward_state(
    &self,
    contract: &Address,
  ) -> Result<RewardState, ResourceError> {
    let resource =
      EntryFunctionId::new(*contract, REWARD_MODULE, REWARD_STATE_RESOURCE);
    self
      .chain
      .account_resource(contract, &resource.to_string())
      .await
  }

  async fn submit(
    &self,
    contract: &Address,
    function: &str,
    arguments: Vec<Value>,
  ) -> Result<PendingTransaction, TransactionError> {
    let function = EntryFunctionId::new(*contract, REWARD_MODULE, function);
    let pending = self
      .signer
      .sign_and_submit(EntryFunctionPayload::new(&function, arguments))
      .await?;

    info!("awaiting confirmation of {function} in {pending:?}");
    self.chain.wait_for_transaction(&pending.hash).await?;
    Ok(pending)
  }
}
