mod admin;
mod chain;
mod dispatcher;
mod error;
mod indexer;
mod session;
mod signer;
mod view;
mod widget;

pub use {
  admin::is_admin,
  boostify_primitives as primitives,
  chain::{
    ChainClient,
    Ed25519Signature,
    RestClient,
    SubmissionRequest,
    DEFAULT_NODE_URL,
  },
  dispatcher::{
    Dispatcher,
    ADD_WALLET,
    END_REWARD_GROUP,
    RESET_REWARD,
    START_REWARD_GROUP,
  },
  error::{Error, QueryError, ResourceError, TransactionError, ValidationError},
  indexer::{IndexerClient, DEFAULT_INDEXER_URL},
  session::{BusyFlag, BusyGuard, ContractRegistry, Session, SessionConfig},
  signer::{GasSettings, LocalSigner, SigningProvider},
  view::{
    participant_rows,
    AdminDashboard,
    Dashboard,
    ParticipantDashboard,
    ParticipantRow,
    View,
  },
  widget::{Level, Notification, Widget},
};
