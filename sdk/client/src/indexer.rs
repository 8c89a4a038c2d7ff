use {
  crate::error::QueryError,
  boostify_primitives::{format_timestamp, Address, TimeWindow},
  serde::{Deserialize, Serialize},
  serde_json::Value,
  tracing::{debug, info},
};

pub const DEFAULT_INDEXER_URL: &str =
  "https://api.random.aptoslabs.com/v1/graphql";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
  query: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
  data: Option<ActivityData>,
  #[serde(default)]
  errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ActivityData {
  coin_activities: Option<Vec<CoinActivity>>,
}

#[derive(Debug, Deserialize)]
struct CoinActivity {
  event_account_address: String,
}

/// Read-only client of the GraphQL analytics service that indexes
/// historical on-chain activity.
#[derive(Debug, Clone)]
pub struct IndexerClient {
  http: reqwest::Client,
  endpoint: String,
}

impl Default for IndexerClient {
  fn default() -> Self {
    Self::new(DEFAULT_INDEXER_URL)
  }
}

impl IndexerClient {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.into(),
    }
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Returns the distinct accounts that invoked `function` within the
  /// window, in the order the indexer reports them.
  pub async fn collect_participants(
    &self,
    function: &str,
    window: &TimeWindow,
  ) -> Result<Vec<Address>, QueryError> {
    let document = participants_query(function, window)?;
    debug!("indexer query: {document}");

    let response = self
      .http
      .post(&self.endpoint)
      .json(&QueryRequest { query: &document })
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(QueryError::Status(status.as_u16()));
    }

    let participants = extract_participants(response.json().await?)?;
    info!(
      "collected {} participants of {function} in {window}",
      participants.len()
    );
    Ok(participants)
  }
}

/// GraphQL document selecting distinct callers of an entry function
/// within an inclusive time range.
fn participants_query(
  function: &str,
  window: &TimeWindow,
) -> Result<String, QueryError> {
  Ok(format!(
    r#"query CollectParticipants {{
  coin_activities(
    where: {{
      entry_function_id_str: {{_eq: {function}}},
      transaction_timestamp: {{_lte: "{end}", _gte: "{start}"}}
    }}
    distinct_on: event_account_address
  ) {{
    event_account_address
    coin_type
    entry_function_id_str
    transaction_timestamp
  }}
}}"#,
    function = graphql_string(function),
    start = format_timestamp(&window.start())?,
    end = format_timestamp(&window.end())?,
  ))
}

/// GraphQL string literals share JSON's escaping rules.
fn graphql_string(value: &str) -> String {
  Value::String(value.to_owned()).to_string()
}

fn extract_participants(
  response: QueryResponse,
) -> Result<Vec<Address>, QueryError> {
  match response.errors {
    None | Some(Value::Null) => {}
    Some(errors) => return Err(QueryError::Service(errors.to_string())),
  }

  response
    .data
    .and_then(|data| data.coin_activities)
    .ok_or(QueryError::MissingData)?
    .into_iter()
    .map(|activity| {
      activity
        .event_account_address
        .parse()
        .map_err(|_| {
          QueryError::MalformedAddress(activity.event_account_address)
        })
    })
    .collect()
}
