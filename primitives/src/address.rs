use {
  ed25519_dalek::PublicKey,
  multihash::{Hasher, Sha3_256},
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

/// Number of hex digits in a fully expanded address.
const ADDRESS_HEX_LEN: usize = 64;

/// Signature scheme byte appended to a public key when deriving
/// the authentication key of a single-signer Ed25519 account.
const ED25519_SCHEME: u8 = 0x00;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("address must start with 0x")]
  MissingPrefix,

  #[error("address must have between 1 and 64 hex digits, got {0}")]
  InvalidLength(usize),

  #[error("address contains non-hex character {0:?}")]
  InvalidCharacter(char),
}

/// Represents an address of an on-chain account.
///
/// The same address type identifies user wallets, contract (module
/// publisher) accounts and the winners reported by the reward contract.
///
/// The textual form is `0x` followed by 1 to 64 hex digits. Short forms
/// are left-padded with zeros, so `0x1` and `0x0001` name the same
/// account and compare equal.
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 32]);

impl Address {
  pub const fn new(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  /// Checks a candidate string against the address format without
  /// constructing the value.
  pub fn is_valid(candidate: &str) -> bool {
    Self::from_str(candidate).is_ok()
  }

  /// Full 64 digit form, as returned by indexers and the node API.
  pub fn to_long_string(&self) -> String {
    format!("0x{}", hex::encode(self.0))
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let digits = hex::encode(self.0);
    let trimmed = digits.trim_start_matches('0');
    match trimmed.is_empty() {
      true => write!(f, "0x0"),
      false => write!(f, "0x{trimmed}"),
    }
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address({self})")
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    addr.to_string()
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let digits = s.strip_prefix("0x").ok_or(Error::MissingPrefix)?;

    if digits.is_empty() || digits.len() > ADDRESS_HEX_LEN {
      return Err(Error::InvalidLength(digits.len()));
    }

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
      return Err(Error::InvalidCharacter(c));
    }

    let padded = format!("{digits:0>ADDRESS_HEX_LEN$}");
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(padded, &mut bytes)
      .map_err(|_| Error::InvalidLength(digits.len()))?;
    Ok(Self(bytes))
  }
}

impl TryFrom<&str> for Address {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

impl TryFrom<String> for Address {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    FromStr::from_str(&value)
  }
}

/// The account address of a freshly created single-key account is
/// its authentication key: `sha3_256(public_key || scheme)`.
impl From<PublicKey> for Address {
  fn from(p: PublicKey) -> Self {
    let mut hasher = Sha3_256::default();
    hasher.update(p.as_bytes());
    hasher.update(&[ED25519_SCHEME]);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(hasher.finalize());
    Self(bytes)
  }
}
