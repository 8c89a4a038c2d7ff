use {
  crate::session::Session,
  boostify_primitives::{Address, RewardState, TimeWindow},
  std::fmt::{Display, Formatter, Result as FmtResult},
};

/// One line of the participants table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
  pub address: Address,
  pub winner: bool,
}

/// Joins participants against the winners of the last fetched reward
/// state. Derived on every render, never stored.
pub fn participant_rows(
  participants: &[Address],
  reward: &RewardState,
) -> Vec<ParticipantRow> {
  participants
    .iter()
    .map(|address| ParticipantRow {
      address: *address,
      winner: reward.is_winner(address),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDashboard {
  pub reward_amount: u64,
  pub num_rewards: u32,
  pub function_name: String,
  pub window: TimeWindow,
  pub reward_active: bool,
  pub winners: Vec<Address>,
  pub rows: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDashboard {
  pub contract: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dashboard {
  Admin(AdminDashboard),
  Participant(ParticipantDashboard),
}

/// What the user sees: the contract list and, depending on who is
/// connected, either the admin or the participant dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
  pub contracts: Vec<Address>,
  pub selected: Option<Address>,
  pub busy: bool,
  pub dashboard: Dashboard,
}

impl View {
  pub fn render(session: &Session, connected: Option<&Address>) -> Self {
    let dashboard = match session.is_admin(connected) {
      true => Dashboard::Admin(AdminDashboard {
        reward_amount: session.config.reward_amount,
        num_rewards: session.config.num_rewards.get(),
        function_name: session.config.function_name.clone(),
        window: session.config.window,
        reward_active: session.reward_state.reward_active,
        winners: session.reward_state.reward_winners.clone(),
        rows: participant_rows(&session.participants, &session.reward_state),
      }),
      false => Dashboard::Participant(ParticipantDashboard {
        contract: session.selected_contract().copied(),
      }),
    };

    Self {
      contracts: session.registry.entries().to_vec(),
      selected: session.selected_contract().copied(),
      busy: session.busy().is_busy(),
      dashboard,
    }
  }

  pub fn is_admin(&self) -> bool {
    matches!(self.dashboard, Dashboard::Admin(_))
  }
}

impl Display for View {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    writeln!(f, "Contract Addresses")?;
    if self.contracts.is_empty() {
      writeln!(f, "  (none)")?;
    }
    for contract in &self.contracts {
      let marker = match Some(contract) == self.selected.as_ref() {
        true => '*',
        false => ' ',
      };
      writeln!(f, " {marker} {contract}")?;
    }
    if self.busy {
      writeln!(f, "[working...]")?;
    }
    writeln!(f)?;
    write!(f, "{}", self.dashboard)
  }
}

impl Display for Dashboard {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Dashboard::Admin(admin) => write!(f, "{admin}"),
      Dashboard::Participant(user) => write!(f, "{user}"),
    }
  }
}

impl Display for AdminDashboard {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    writeln!(f, "Admin Dashboard")?;
    writeln!(f, "  Reward Amount:     {}", self.reward_amount)?;
    writeln!(f, "  Number of Rewards: {}", self.num_rewards)?;
    writeln!(f, "  Time Window:       {}", self.window)?;
    writeln!(f, "  Function Name:     {}", self.function_name)?;
    writeln!(f, "  Reward Active:     {}", match self.reward_active {
      true => "Yes",
      false => "No",
    })?;
    if !self.winners.is_empty() {
      let winners: Vec<_> =
        self.winners.iter().map(|w| w.to_string()).collect();
      writeln!(f, "  Winning Wallet:    {}", winners.join(", "))?;
    }
    writeln!(f)?;
    writeln!(f, "Participant Addresses")?;
    if self.rows.is_empty() {
      writeln!(f, "  (none)")?;
    }
    for row in &self.rows {
      let status = match row.winner {
        true => "Active",
        false => "Inactive",
      };
      writeln!(f, "  {:<68} {status}", row.address.to_string())?;
    }
    Ok(())
  }
}

impl Display for ParticipantDashboard {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    writeln!(f, "User Dashboard")?;
    writeln!(f, "  Add your wallet to participate in the reward system.")
  }
}
