use crate::PollIndex;
use serde::{Deserialize, Serialize};

/// Notifications for the page embedding the widget. These are fire-and-forget:
/// nothing ever waits on the host to acknowledge them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// A vote was accepted.
    PollVoted { result: Outcome },
    /// A viewer opened a poll.
    SelectPoll {
        #[serde(rename = "pollId")]
        poll_id: PollIndex,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
}
