use {
  crate::Address,
  serde::{Deserialize, Serialize},
};

/// Name of the Move module implementing the reward rounds.
pub const REWARD_MODULE: &str = "VarRandomRewardSystem";

/// Name of the resource holding the round state under the contract
/// account.
pub const REWARD_STATE_RESOURCE: &str = "RewardState";

/// Snapshot of the on-chain `RewardState` resource.
///
/// Winners are chosen by the contract when a round ends. The snapshot
/// goes stale as soon as it is read and must be fetched again to see
/// later changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardState {
  pub reward_active: bool,
  pub reward_winners: Vec<Address>,
}

impl RewardState {
  pub fn is_winner(&self, address: &Address) -> bool {
    self.reward_winners.contains(address)
  }
}
