mod address;
mod reward;
mod transaction;
mod window;

pub use {
  address::{Address, Error as AddressError},
  reward::{RewardState, REWARD_MODULE, REWARD_STATE_RESOURCE},
  transaction::{EntryFunctionId, EntryFunctionPayload, PendingTransaction},
  window::{
    format_timestamp,
    parse_timestamp,
    Error as WindowError,
    TimeWindow,
  },
};
