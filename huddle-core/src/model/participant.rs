use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of one connected end-user session.
///
/// Registered users carry their stable numeric id; trial sessions carry a
/// client-generated token. On the wire a user id is a bare JSON number and a
/// guest token a bare string, so the two ranges never conflate.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantId {
    User(i64),
    Guest(String),
}

impl ParticipantId {
    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest(_))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid participant identity {0:?}")]
pub struct ParseIdentityError(pub String);

impl FromStr for ParticipantId {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIdentityError(s.to_owned()));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<i64>()
                .map(Self::User)
                .map_err(|_| ParseIdentityError(s.to_owned()));
        }
        Ok(Self::Guest(s.to_owned()))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "{id}"),
            Self::Guest(token) => f.write_str(token),
        }
    }
}

/// The profile shape pushed in `room_users` rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ParticipantId,
    pub username: String,
    pub points: i64,
}
