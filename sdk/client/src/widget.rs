use {
  crate::{
    chain::ChainClient,
    dispatcher::Dispatcher,
    error::ValidationError,
    indexer::IndexerClient,
    session::Session,
    signer::SigningProvider,
    view::View,
    Error,
  },
  boostify_primitives::{Address, TimeWindow},
  std::fmt::Display,
  tracing::{error, info},
};

const SELECT_CONTRACT: &str = "Please select a contract address.";
const INVALID_CONTRACT: &str =
  "Invalid contract address. Please enter a valid Aptos account address.";
const BUSY: &str = "Another operation is still in progress.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Success,
  Error,
}

/// A short user-facing message describing the outcome of an action.
/// Diagnostic detail goes to the log, never in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub level: Level,
  pub message: String,
}

impl Notification {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      level: Level::Success,
      message: message.into(),
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      level: Level::Error,
      message: message.into(),
    }
  }

  pub fn is_error(&self) -> bool {
    self.level == Level::Error
  }
}

impl Display for Notification {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.level {
      Level::Success => write!(f, "[ok] {}", self.message),
      Level::Error => write!(f, "[error] {}", self.message),
    }
  }
}

/// The reward widget: session state plus the clients every action
/// talks to. Every action reports its outcome as a [`Notification`]
/// and never fails, leaving prior state untouched when something goes
/// wrong.
pub struct Widget<S, C> {
  session: Session,
  dispatcher: Dispatcher<S, C>,
  indexer: IndexerClient,
}

impl<S: SigningProvider, C: ChainClient> Widget<S, C> {
  pub fn new(dispatcher: Dispatcher<S, C>, indexer: IndexerClient) -> Self {
    Self {
      session: Session::default(),
      dispatcher,
      indexer,
    }
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub fn session_mut(&mut self) -> &mut Session {
    &mut self.session
  }

  pub fn dispatcher(&self) -> &Dispatcher<S, C> {
    &self.dispatcher
  }

  pub fn connected(&self) -> Option<Address> {
    self.dispatcher.signer().account()
  }

  pub fn is_admin(&self) -> bool {
    self.session.is_admin(self.connected().as_ref())
  }

  pub fn view(&self) -> View {
    View::render(&self.session, self.connected().as_ref())
  }

  pub fn add_contract_address(&mut self, candidate: &str) -> Notification {
    self.session.address_input = candidate.to_owned();
    match self.session.submit_address_input() {
      Ok(address) => {
        info!("contract {address} added and selected");
        Notification::success(format!("Contract {address} selected."))
      }
      Err(e) => {
        error!("rejected contract address {candidate:?}: {e}");
        Notification::error(INVALID_CONTRACT)
      }
    }
  }

  pub fn select_contract(&mut self, candidate: &str) -> Notification {
    match self.session.select_contract(candidate) {
      Ok(address) => {
        Notification::success(format!("Contract {address} selected."))
      }
      Err(e) => {
        error!("cannot select {candidate:?}: {e}");
        Notification::error(e.to_string())
      }
    }
  }

  pub fn set_reward_amount(&mut self, amount: u64) {
    self.session.config.reward_amount = amount;
  }

  pub fn set_num_rewards(&mut self, count: u32) -> Notification {
    match self.session.set_num_rewards(count) {
      Ok(()) => {
        Notification::success(format!("Number of rewards set to {count}."))
      }
      Err(e) => Notification::error(e.to_string()),
    }
  }

  pub fn set_function_name(&mut self, function: impl Into<String>) {
    self.session.config.function_name = function.into();
  }

  pub fn set_window(&mut self, window: TimeWindow) {
    self.session.config.window = window;
  }

  /// Replaces the participant set with the callers of the configured
  /// function within the configured window.
  pub async fn collect_participants(&mut self) -> Notification {
    let result = self.try_collect_participants().await;
    report(
      result,
      "Owner addresses collected successfully!",
      "Failed to collect owner addresses.",
    )
  }

  pub async fn add_wallet(&mut self) -> Notification {
    let result = self.try_add_wallet().await;
    report(result, "Wallet added successfully!", "Failed to add wallet.")
  }

  /// Starts a round over the current participant set.
  pub async fn start_reward_group(&mut self) -> Notification {
    let result = self.try_start_reward_group().await;
    report(
      result,
      "Reward group started successfully!",
      "Failed to start reward group.",
    )
  }

  pub async fn end_reward_group(&mut self) -> Notification {
    let result = self.try_end_reward_group().await;
    report(result, "Reward ended successfully!", "Failed to end reward.")
  }

  pub async fn reset_reward(&mut self) -> Notification {
    let result = self.try_reset_reward().await;
    report(result, "Reward reset successfully!", "Failed to reset reward.")
  }

  /// Refreshes the reward state snapshot of the selected contract.
  pub async fn fetch_reward_state(&mut self) -> Notification {
    let result = self.try_fetch_reward_state().await;
    report(
      result,
      "Reward retrieved successfully!",
      "Failed to get reward.",
    )
  }

  async fn try_collect_participants(&mut self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let participants = self
      .indexer
      .collect_participants(
        &self.session.config.function_name,
        &self.session.config.window,
      )
      .await?;
    self.session.participants = participants;
    Ok(())
  }

  async fn try_add_wallet(&self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let contract = self.session.target()?;
    self.dispatcher.add_wallet(&contract).await?;
    Ok(())
  }

  async fn try_start_reward_group(&self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let contract = self.session.target()?;
    self
      .dispatcher
      .start_reward_group(&contract, &self.session.participants)
      .await?;
    Ok(())
  }

  async fn try_end_reward_group(&self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let contract = self.session.target()?;
    self
      .dispatcher
      .end_reward_group(&contract, self.session.config.reward_amount)
      .await?;
    Ok(())
  }

  async fn try_reset_reward(&self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let contract = self.session.target()?;
    self.dispatcher.reset_reward(&contract).await?;
    Ok(())
  }

  async fn try_fetch_reward_state(&mut self) -> Result<(), Error> {
    let _busy = self.session.busy().acquire()?;
    let contract = self.session.target()?;
    let state = self.dispatcher.reward_state(&contract).await?;
    info!("reward state of {contract}: {state:?}");
    self.session.reward_state = state;
    Ok(())
  }
}

fn report(
  result: Result<(), Error>,
  success: &str,
  failure: &str,
) -> Notification {
  match result {
    Ok(()) => {
      info!("{success}");
      Notification::success(success)
    }
    Err(Error::Busy) => Notification::error(BUSY),
    Err(Error::Validation(ValidationError::MissingTarget)) => {
      error!("{failure} no contract selected");
      Notification::error(SELECT_CONTRACT)
    }
    Err(e) => {
      error!("{failure} {e}");
      Notification::error(failure)
    }
  }
}
