use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// How often a single viewer may vote on the same poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VotePolicy {
    /// The first vote is final. Later attempts fail with
    /// [`AlreadyVoted`](crate::error::Error::AlreadyVoted).
    #[default]
    OncePerViewer,
    /// Every vote counts, repeats included. No ballots are recorded.
    Unlimited,
}

#[derive(Debug)]
pub struct UnknownPolicy;

impl Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown vote policy (expected `once` or `unlimited`)")
    }
}

impl core::error::Error for UnknownPolicy {}

impl FromStr for VotePolicy {
    type Err = UnknownPolicy;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim() {
            "once" => Ok(Self::OncePerViewer),
            "unlimited" => Ok(Self::Unlimited),
            _ => Err(UnknownPolicy),
        }
    }
}
