use {
  crate::{admin::is_admin, error::ValidationError, Error},
  boostify_primitives::{Address, RewardState, TimeWindow},
  std::{
    num::NonZeroU32,
    sync::{
      atomic::{AtomicBool, Ordering},
      Arc,
    },
  },
};

/// Contract addresses entered during this session, with at most one
/// of them selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractRegistry {
  entries: Vec<Address>,
  selected: Option<usize>,
}

impl ContractRegistry {
  pub fn entries(&self) -> &[Address] {
    &self.entries
  }

  pub fn selected(&self) -> Option<&Address> {
    self.selected.and_then(|i| self.entries.get(i))
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Appends the address unless already present, then selects it.
  pub fn insert(&mut self, address: Address) {
    let index = match self.entries.iter().position(|a| *a == address) {
      Some(index) => index,
      None => {
        self.entries.push(address);
        self.entries.len() - 1
      }
    };
    self.selected = Some(index);
  }

  pub fn select(&mut self, address: &Address) -> Result<(), ValidationError> {
    let index = self
      .entries
      .iter()
      .position(|a| a == address)
      .ok_or_else(|| ValidationError::UnknownContract(address.to_string()))?;
    self.selected = Some(index);
    Ok(())
  }
}

/// Scalar values entered by the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
  pub reward_amount: u64,
  pub num_rewards: NonZeroU32,
  pub function_name: String,
  pub window: TimeWindow,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      reward_amount: 0,
      num_rewards: NonZeroU32::MIN,
      function_name: String::new(),
      window: TimeWindow::now(),
    }
  }
}

/// Set while an external call is in flight. Clones observe the same
/// flag, so a renderer can show progress while an action awaits.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
  pub fn is_busy(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }

  /// Atomically raises the flag. Fails if it is already raised, so two
  /// triggers can never both get through.
  pub fn acquire(&self) -> Result<BusyGuard, Error> {
    self
      .0
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .map(|_| BusyGuard(self.0.clone()))
      .map_err(|_| Error::Busy)
  }
}

/// Lowers the busy flag when dropped, on every exit path.
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

/// Everything the widget remembers for the lifetime of one session.
/// Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
  pub registry: ContractRegistry,
  pub config: SessionConfig,
  pub participants: Vec<Address>,
  pub reward_state: RewardState,
  pub address_input: String,
  busy: BusyFlag,
}

impl Session {
  pub fn busy(&self) -> &BusyFlag {
    &self.busy
  }

  pub fn selected_contract(&self) -> Option<&Address> {
    self.registry.selected()
  }

  /// Selected contract, or the error shown when none is selected.
  pub fn target(&self) -> Result<Address, ValidationError> {
    self
      .registry
      .selected()
      .copied()
      .ok_or(ValidationError::MissingTarget)
  }

  /// Recomputed on every call from the current inputs.
  pub fn is_admin(&self, connected: Option<&Address>) -> bool {
    is_admin(connected, self.registry.selected())
  }

  /// Validates and registers the candidate, which becomes the selected
  /// contract. The input buffer is cleared only on success.
  pub fn add_contract_address(
    &mut self,
    candidate: &str,
  ) -> Result<Address, ValidationError> {
    let address: Address = candidate.parse()?;
    self.registry.insert(address);
    self.address_input.clear();
    Ok(address)
  }

  /// Registers whatever is currently typed in the input buffer.
  pub fn submit_address_input(&mut self) -> Result<Address, ValidationError> {
    let candidate = self.address_input.clone();
    self.add_contract_address(&candidate)
  }

  pub fn select_contract(
    &mut self,
    candidate: &str,
  ) -> Result<Address, ValidationError> {
    let address: Address = candidate.parse()?;
    self.registry.select(&address)?;
    Ok(address)
  }

  pub fn set_num_rewards(&mut self, count: u32) -> Result<(), ValidationError> {
    self.config.num_rewards =
      NonZeroU32::new(count).ok_or(ValidationError::ZeroRewards)?;
    Ok(())
  }
}
