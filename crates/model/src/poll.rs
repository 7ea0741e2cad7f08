use alloc::{string::String, vec, vec::Vec};
use serde::{Deserialize, Serialize};

/// One selectable answer within a poll.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    /// Display text, trimmed and non-empty.
    pub text: String,
    /// Number of accepted votes.
    pub votes: u64,
}

impl Choice {
    pub fn new(text: String) -> Self {
        Self { text, votes: 0 }
    }
}

/// A validated poll as held by the store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Poll {
    /// Creation number of this poll. Unlike its position in the collection,
    /// this never changes once assigned.
    pub serial: u64,
    /// Question to be displayed above the choices.
    pub question: String,
    /// Possible answers in the order they were entered.
    pub choices: Vec<Choice>,
}

/// Acceptable schema for new polls. The texts are kept exactly as typed into
/// the form; trimming and blank filtering happen on submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Draft {
    pub question: String,
    pub options: Vec<String>,
}

impl Default for Draft {
    /// An empty form starts out with two blank options.
    fn default() -> Self {
        Self { question: String::new(), options: vec![String::new(), String::new()] }
    }
}

impl Draft {
    pub fn new<Q, I, T>(question: Q, options: I) -> Self
    where
        Q: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { question: question.into(), options: options.into_iter().map(Into::into).collect() }
    }
}
