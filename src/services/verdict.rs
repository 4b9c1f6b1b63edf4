use crate::db::debate::DebateId;
use crate::db::vote::{InternalVote, VoteChoice};
use crate::db::{DebateReader, VoteStore};
use crate::error::ApiError;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Winner {
    User,
    Bot,
    Draw,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct VoteCounts {
    pub user: u32,
    pub bot: u32,
}

impl VoteCounts {
    pub fn winner(&self) -> Winner {
        if self.user > self.bot {
            Winner::User
        } else if self.bot > self.user {
            Winner::Bot
        } else {
            Winner::Draw
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeoplesChoice {
    pub winner: Winner,
    pub counts: VoteCounts,
}

/// The combined verdict: the AI outcome stored on the debate plus the
/// spectator majority.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdicts {
    pub debate_id: String,
    pub ai_verdict: String,
    pub peoples_choice: PeoplesChoice,
}

/// Votes with a label that doesn't decode are skipped, not reported.
pub fn tally(votes: &[InternalVote]) -> VoteCounts {
    let mut counts = VoteCounts { user: 0, bot: 0 };
    for vote in votes {
        match VoteChoice::from_label(&vote.choice) {
            Some(VoteChoice::User) => counts.user += 1,
            Some(VoteChoice::Bot) => counts.bot += 1,
            None => {}
        }
    }
    counts
}

/// Loads a debate's stored outcome and tallies its spectator votes.
///
/// Unlike submission this does not require the debate to be finalized; a
/// verdict on an unfinished debate simply carries an empty AI outcome.
pub async fn debate_verdicts(
    debates: &dyn DebateReader,
    votes: &dyn VoteStore,
    debate_id: DebateId,
) -> Result<Verdicts, ApiError> {
    debug!(
        "Aggregating verdicts for debate {debate_id}",
        debate_id = debate_id.as_string()
    );
    let debate = debates
        .debate_by_id(debate_id.clone())
        .await
        .map_err(|report| ApiError::internal("Failed to look up debate", report))?
        .ok_or(ApiError::DebateNotFound)?;

    let records = votes
        .votes_by_debate(debate_id.clone())
        .await
        .map_err(|report| ApiError::internal("Failed to fetch votes", report))?;

    let counts = tally(&records);
    Ok(Verdicts {
        debate_id: debate_id.as_string(),
        ai_verdict: debate.outcome,
        peoples_choice: PeoplesChoice {
            winner: counts.winner(),
            counts,
        },
    })
}
