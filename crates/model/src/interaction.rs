use crate::{Choice, Draft, PollIndex, ViewerId};
use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// A single request from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Interaction {
    /// Who is asking.
    pub viewer: ViewerId,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Submit the create form.
    Create(Draft),
    /// Vote for the `option`-th choice of the `poll`-th poll.
    Vote { poll: PollIndex, option: usize },
    /// Open a single poll.
    Select { poll: PollIndex },
    /// Show every poll, newest first.
    List,
}

/// What the presentation layer renders after an interaction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Created { poll: PollIndex },
    Voted { poll: PollView },
    Poll { poll: PollView },
    Polls { polls: Vec<PollView> },
    Error { message: String },
}

/// A poll as seen by one particular viewer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollView {
    pub index: PollIndex,
    pub question: String,
    pub choices: Vec<Choice>,
    /// The choice this viewer already voted for. Vote buttons are disabled
    /// when this is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voted: Option<usize>,
}
