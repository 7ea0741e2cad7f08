use core::fmt::{self, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The question is blank once trimmed.
    MissingQuestion,
    /// Fewer than two non-blank choices remain after filtering.
    TooFewChoices,
    /// There is no poll or choice at the given position.
    NotFound,
    /// The viewer already has a vote recorded for this poll.
    AlreadyVoted,
    /// The choice's counter is at its maximum and cannot take another vote.
    TallyFull,
}

impl Error {
    /// Whether the poll submission itself was rejected.
    pub const fn is_validation(self) -> bool {
        matches!(self, Self::MissingQuestion | Self::TooFewChoices)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingQuestion => "poll question is missing",
            Self::TooFewChoices => "poll needs at least two non-blank choices",
            Self::NotFound => "no such poll or choice",
            Self::AlreadyVoted => "viewer has already voted on this poll",
            Self::TallyFull => "vote counter is full",
        })
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
