use {
  anyhow::{anyhow, bail},
  boostify_sdk::{
    primitives::TimeWindow,
    ChainClient,
    Notification,
    SigningProvider,
    Widget,
  },
  std::str::FromStr,
};

pub const HELP: &str = "\
commands:
  show                         render the widget
  add-contract <address>       register and select a contract
  select <address>             select a registered contract
  add-wallet                   register your wallet as a participant
admin only:
  amount <n>                   reward amount used when ending a round
  rewards <n>                  number of rewards
  function <id>                entry function whose callers participate
  window <start> <end>         time window, YYYY-MM-DDTHH:MM:SS (UTC)
  window last <duration>       time window ending now, e.g. 24h
  collect                      collect participant addresses
  start                        start a reward group over the participants
  end                          end the reward group
  reset                        reset the reward
  reward                       fetch the winning wallets
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Help,
  Quit,
  Show,
  AddContract(String),
  Select(String),
  AddWallet,
  Amount(u64),
  Rewards(u32),
  Function(String),
  Window(TimeWindow),
  Collect,
  Start,
  End,
  Reset,
  Reward,
}

impl Command {
  /// Actions shown on the admin dashboard only.
  pub fn admin_only(&self) -> bool {
    matches!(
      self,
      Command::Amount(_)
        | Command::Rewards(_)
        | Command::Function(_)
        | Command::Window(_)
        | Command::Collect
        | Command::Start
        | Command::End
        | Command::Reset
        | Command::Reward
    )
  }
}

impl FromStr for Command {
  type Err = anyhow::Error;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
      return Ok(Command::Show);
    };
    let args: Vec<&str> = words.collect();

    let single = |name: &str| -> anyhow::Result<String> {
      match args.as_slice() {
        [arg] => Ok((*arg).to_owned()),
        _ => bail!("usage: {verb} <{name}>"),
      }
    };

    Ok(match verb {
      "help" | "?" => Command::Help,
      "quit" | "exit" => Command::Quit,
      "show" => Command::Show,
      "add-contract" => Command::AddContract(single("address")?),
      "select" => Command::Select(single("address")?),
      "add-wallet" => Command::AddWallet,
      "amount" => Command::Amount(single("n")?.parse()?),
      "rewards" => Command::Rewards(single("n")?.parse()?),
      "function" => Command::Function(single("id")?),
      "window" => Command::Window(match args.as_slice() {
        ["last", length] => {
          TimeWindow::last(humantime::parse_duration(length)?)?
        }
        [start, end] => TimeWindow::parse(start, end)?,
        _ => bail!("usage: window <start> <end> | window last <duration>"),
      }),
      "collect" => Command::Collect,
      "start" => Command::Start,
      "end" => Command::End,
      "reset" => Command::Reset,
      "reward" => Command::Reward,
      other => return Err(anyhow!("unknown command {other:?}, try help")),
    })
  }
}

/// Runs one command against the widget and returns the notification to
/// show, if any. Commands gated to the other dashboard are refused the
/// same way hidden buttons would be.
pub async fn execute<S: SigningProvider, C: ChainClient>(
  widget: &mut Widget<S, C>,
  command: Command,
) -> Option<Notification> {
  let admin = widget.is_admin();
  if command.admin_only() && !admin {
    return Some(Notification::error(
      "Only the contract administrator can do that.",
    ));
  }
  if command == Command::AddWallet && admin {
    return Some(Notification::error(
      "Add Wallet is available on the user dashboard only.",
    ));
  }

  match command {
    Command::Help | Command::Quit | Command::Show => None,
    Command::AddContract(address) => {
      Some(widget.add_contract_address(&address))
    }
    Command::Select(address) => Some(widget.select_contract(&address)),
    Command::AddWallet => Some(widget.add_wallet().await),
    Command::Amount(amount) => {
      widget.set_reward_amount(amount);
      None
    }
    Command::Rewards(count) => Some(widget.set_num_rewards(count)),
    Command::Function(function) => {
      widget.set_function_name(function);
      None
    }
    Command::Window(window) => {
      widget.set_window(window);
      None
    }
    Command::Collect => Some(widget.collect_participants().await),
    Command::Start => Some(widget.start_reward_group().await),
    Command::End => Some(widget.end_reward_group().await),
    Command::Reset => Some(widget.reset_reward().await),
    Command::Reward => Some(widget.fetch_reward_state().await),
  }
}

#[cfg(test)]
mod tests {
  use {super::Command, std::time::Duration};

  #[test]
  fn parses_commands() {
    assert_eq!("".parse::<Command>().unwrap(), Command::Show);
    assert_eq!("  collect ".parse::<Command>().unwrap(), Command::Collect);
    assert_eq!(
      "add-contract 0xABCDEF1234".parse::<Command>().unwrap(),
      Command::AddContract("0xABCDEF1234".into())
    );
    assert_eq!(
      "amount 250".parse::<Command>().unwrap(),
      Command::Amount(250)
    );
    assert_eq!(
      "function 0x1::VarRandomRewardSystem::add_wallet"
        .parse::<Command>()
        .unwrap(),
      Command::Function("0x1::VarRandomRewardSystem::add_wallet".into())
    );
  }

  #[test]
  fn parses_windows() {
    let Command::Window(window) =
      "window 2024-05-31T12:00:00 2024-06-01T12:00:00"
        .parse::<Command>()
        .unwrap()
    else {
      panic!("expected a window");
    };
    assert_eq!(window.end() - window.start(), Duration::from_secs(86400));

    let Command::Window(window) =
      "window last 24h".parse::<Command>().unwrap()
    else {
      panic!("expected a window");
    };
    assert_eq!(window.end() - window.start(), Duration::from_secs(86400));
  }

  #[test]
  fn rejects_bad_input() {
    assert!("amount".parse::<Command>().is_err());
    assert!("amount -1".parse::<Command>().is_err());
    assert!("rewards 1 2".parse::<Command>().is_err());
    assert!("window 2024-06-01T12:00:00".parse::<Command>().is_err());
    assert!(
      "window 2024-06-02T00:00:00 2024-06-01T00:00:00"
        .parse::<Command>()
        .is_err()
    );
    assert!("launch".parse::<Command>().is_err());
  }

  #[test]
  fn admin_gating() {
    assert!(Command::Start.admin_only());
    assert!(Command::Reward.admin_only());
    assert!(!Command::AddWallet.admin_only());
    assert!(!Command::AddContract("0x1".into()).admin_only());
  }
}
