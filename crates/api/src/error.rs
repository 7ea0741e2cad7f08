use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingQuestion,
    TooFewChoices,
    UnknownPoll,
    AlreadyVoted,
    TallyFull,
}

impl From<store::error::Error> for Error {
    fn from(err: store::error::Error) -> Self {
        use store::error::Error as StoreError;
        match err {
            StoreError::MissingQuestion => Self::MissingQuestion,
            StoreError::TooFewChoices => Self::TooFewChoices,
            StoreError::NotFound => Self::UnknownPoll,
            StoreError::AlreadyVoted => Self::AlreadyVoted,
            StoreError::TallyFull => Self::TallyFull,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingQuestion => "Please enter a question.",
            Self::TooFewChoices => "Please fill in at least two options.",
            Self::UnknownPoll => "That poll or option does not exist.",
            Self::AlreadyVoted => "You have already voted on this poll.",
            Self::TallyFull => "This option cannot take any more votes.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
