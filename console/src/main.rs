use {
  crate::{
    repl::{execute, Command, HELP},
    settings::SystemSettings,
  },
  boostify_sdk::{Dispatcher, IndexerClient, LocalSigner, RestClient, Widget},
  clap::Parser,
  tokio::io::{stdin, AsyncBufReadExt, BufReader},
  tracing::info,
  tracing_subscriber::FmtSubscriber,
};

mod repl;
mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // logs go to stderr so they don't interleave with the rendered widget
  tracing::subscriber::set_global_default(
    FmtSubscriber::builder()
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  let settings = SystemSettings::parse();
  info!(
    "indexer: {}, node: {}, gas: {:?}",
    settings.indexer_url(),
    settings.node_url(),
    settings.gas()
  );

  let node = RestClient::new(settings.node_url())
    .with_poll_interval(settings.poll_interval());
  let signer = LocalSigner::from_hex(
    &settings.secret_key()?,
    node.clone(),
    settings.gas(),
  )?;

  let mut widget = Widget::new(
    Dispatcher::new(signer, node),
    IndexerClient::new(settings.indexer_url()),
  );

  for contract in settings.contracts() {
    println!("{}", widget.add_contract_address(contract));
  }

  if let Some(account) = widget.connected() {
    info!("connected wallet {account}");
  }

  println!("{}", widget.view());
  println!("{HELP}");

  let mut lines = BufReader::new(stdin()).lines();
  while let Some(line) = lines.next_line().await? {
    let command = match line.parse::<Command>() {
      Ok(command) => command,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };

    match command {
      Command::Quit => break,
      Command::Help => println!("{HELP}"),
      command => {
        if let Some(notification) = execute(&mut widget, command).await {
          println!("{notification}");
        }
        println!("{}", widget.view());
      }
    }
  }

  Ok(())
}
