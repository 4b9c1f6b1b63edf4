use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

#[derive(Clone, Hash, PartialEq, Eq, Debug, Deserialize, Serialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct DebateId(pub Uuid);

impl DebateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(raw)?))
    }

    pub fn as_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl Default for DebateId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct InternalDebate {
    pub id: DebateId,
    pub topic: String,
    /// Free-text winner label, empty until the debate is finalized.
    pub outcome: String,
}

impl InternalDebate {
    pub fn is_finalized(&self) -> bool {
        !self.outcome.is_empty()
    }
}
