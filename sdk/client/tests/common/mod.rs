#![allow(dead_code)]

use {
  axum::{extract::State, http::StatusCode, routing::post, Json, Router},
  boostify_sdk::{
    primitives::{Address, EntryFunctionPayload, PendingTransaction},
    BusyFlag,
    ChainClient,
    Dispatcher,
    IndexerClient,
    ResourceError,
    SigningProvider,
    TransactionError,
    Widget,
  },
  serde::de::DeserializeOwned,
  serde_json::Value,
  std::{
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
  },
};

/// Signing provider double that records every payload it is asked to
/// submit and whether the widget was busy at that moment.
#[derive(Clone, Default)]
pub struct MockSigner {
  pub account: Option<Address>,
  pub submitted: Arc<Mutex<Vec<EntryFunctionPayload>>>,
  pub busy_during_submit: Arc<Mutex<Vec<bool>>>,
  pub observe: Arc<Mutex<Option<BusyFlag>>>,
  pub reject: Arc<Mutex<bool>>,
}

impl MockSigner {
  pub fn connected(account: &str) -> Self {
    Self {
      account: Some(account.parse().unwrap()),
      ..Default::default()
    }
  }

  pub fn payloads(&self) -> Vec<EntryFunctionPayload> {
    self.submitted.lock().unwrap().clone()
  }

  pub fn set_reject(&self, reject: bool) {
    *self.reject.lock().unwrap() = reject;
  }
}

impl SigningProvider for MockSigner {
  fn account(&self) -> Option<Address> {
    self.account
  }

  async fn sign_and_submit(
    &self,
    payload: EntryFunctionPayload,
  ) -> Result<PendingTransaction, TransactionError> {
    if let Some(flag) = self.observe.lock().unwrap().as_ref() {
      self.busy_during_submit.lock().unwrap().push(flag.is_busy());
    }

    if *self.reject.lock().unwrap() {
      return Err(TransactionError::Signing("user rejected".into()));
    }

    let mut submitted = self.submitted.lock().unwrap();
    submitted.push(payload);
    Ok(PendingTransaction {
      hash: format!("0x{:064x}", submitted.len()),
    })
  }
}

/// Chain double with a configurable confirmation outcome and reward
/// state resource.
#[derive(Clone, Default)]
pub struct MockChain {
  pub awaited: Arc<Mutex<Vec<String>>>,
  pub fail_confirmation: Arc<Mutex<bool>>,
  pub resource: Arc<Mutex<Option<Value>>>,
  pub resource_reads: Arc<Mutex<Vec<(Address, String)>>>,
}

impl MockChain {
  pub fn set_resource(&self, data: Option<Value>) {
    *self.resource.lock().unwrap() = data;
  }

  pub fn set_fail_confirmation(&self, fail: bool) {
    *self.fail_confirmation.lock().unwrap() = fail;
  }

  pub fn awaited(&self) -> Vec<String> {
    self.awaited.lock().unwrap().clone()
  }
}

impl ChainClient for MockChain {
  async fn wait_for_transaction(
    &self,
    hash: &str,
  ) -> Result<(), TransactionError> {
    self.awaited.lock().unwrap().push(hash.to_owned());
    match *self.fail_confirmation.lock().unwrap() {
      true => Err(TransactionError::Failed {
        hash: hash.to_owned(),
        vm_status: "Move abort".into(),
      }),
      false => Ok(()),
    }
  }

  async fn account_resource<T: DeserializeOwned>(
    &self,
    address: &Address,
    resource_type: &str,
  ) -> Result<T, ResourceError> {
    self
      .resource_reads
      .lock()
      .unwrap()
      .push((*address, resource_type.to_owned()));

    match self.resource.lock().unwrap().clone() {
      Some(data) => Ok(serde_json::from_value(data)?),
      None => Err(ResourceError::NotFound {
        address: address.to_string(),
        resource: resource_type.to_owned(),
      }),
    }
  }
}

/// Serves `app` on an ephemeral localhost port for the rest of the
/// test and returns its base url.
pub fn serve(app: Router) -> anyhow::Result<String> {
  let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))?;
  let addr = listener.local_addr()?;
  let server =
    axum::Server::from_tcp(listener)?.serve(app.into_make_service());
  tokio::spawn(server);
  Ok(format!("http://{addr}"))
}

#[derive(Clone)]
struct IndexerState {
  status: StatusCode,
  response: Value,
  queries: Arc<Mutex<Vec<String>>>,
}

async fn graphql(
  State(state): State<IndexerState>,
  Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
  if let Some(query) = body.get("query").and_then(Value::as_str) {
    state.queries.lock().unwrap().push(query.to_owned());
  }
  (state.status, Json(state.response))
}

/// Starts a GraphQL endpoint that answers every query with `response`.
/// Returns the endpoint url and the documents it received.
pub fn spawn_indexer(
  status: StatusCode,
  response: Value,
) -> anyhow::Result<(String, Arc<Mutex<Vec<String>>>)> {
  let queries = Arc::new(Mutex::new(vec![]));
  let app = Router::new()
    .route("/v1/graphql", post(graphql))
    .with_state(IndexerState {
      status,
      response,
      queries: queries.clone(),
    });
  Ok((format!("{}/v1/graphql", serve(app)?), queries))
}

/// Full 64 digit form of a short address, the way indexers return it.
pub fn long(address: &str) -> String {
  address.parse::<Address>().unwrap().to_long_string()
}

pub fn widget(
  signer: &MockSigner,
  chain: &MockChain,
  indexer: IndexerClient,
) -> Widget<MockSigner, MockChain> {
  let widget =
    Widget::new(Dispatcher::new(signer.clone(), chain.clone()), indexer);
  *signer.observe.lock().unwrap() = Some(widget.session().busy().clone());
  widget
}
