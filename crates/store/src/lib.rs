#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
mod policy;

use alloc::{
    collections::{btree_map::Entry, BTreeMap, VecDeque},
    vec::Vec,
};

pub use model::{Choice, Draft, Poll, PollIndex, ViewerId};
pub use policy::{UnknownPolicy, VotePolicy};

/// In-memory collection of polls and their tallies. Every mutation goes through
/// [`create_poll`](Self::create_poll), [`submit`](Self::submit), or
/// [`cast_vote`](Self::cast_vote), each of which either fully applies or leaves
/// the store untouched.
#[derive(Debug, Default)]
pub struct PollStore {
    /// Newest poll first.
    polls: VecDeque<Poll>,
    /// Recorded choice per viewer and poll serial. Always empty under
    /// [`VotePolicy::Unlimited`].
    ballots: BTreeMap<(ViewerId, u64), usize>,
    next_serial: u64,
    policy: VotePolicy,
}

impl PollStore {
    pub fn new(policy: VotePolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    pub const fn policy(&self) -> VotePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }

    /// Validates and prepends a new poll. Surrounding whitespace is stripped
    /// from every text and blank options are dropped. On success, the new poll
    /// sits at index `0`.
    pub fn create_poll<I, T>(&mut self, question: &str, options: I) -> error::Result<PollIndex>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let question = question.trim();
        if question.is_empty() {
            log::warn!("rejected poll without a question");
            return Err(error::Error::MissingQuestion);
        }

        let choices: Vec<_> = options
            .into_iter()
            .filter_map(|text| {
                let text = text.as_ref().trim();
                (!text.is_empty()).then(|| Choice::new(text.into()))
            })
            .collect();
        if choices.len() < 2 {
            log::warn!("rejected poll {question:?} with {} usable choice(s)", choices.len());
            return Err(error::Error::TooFewChoices);
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        log::debug!("created poll #{serial} {question:?} with {} choices", choices.len());
        self.polls.push_front(Poll { serial, question: question.into(), choices });
        Ok(0)
    }

    /// Same as [`create_poll`](Self::create_poll), taking the raw form.
    pub fn submit(&mut self, draft: Draft) -> error::Result<PollIndex> {
        self.create_poll(&draft.question, &draft.options)
    }

    /// Adds exactly one vote to the `choice`-th option of the `poll`-th poll.
    pub fn cast_vote(&mut self, viewer: ViewerId, poll: PollIndex, choice: usize) -> error::Result<()> {
        let entry = self.polls.get_mut(poll).ok_or(error::Error::NotFound)?;
        let serial = entry.serial;
        let target = entry.choices.get_mut(choice).ok_or(error::Error::NotFound)?;
        let Some(votes) = target.votes.checked_add(1) else {
            log::warn!("choice {choice} of poll #{serial} cannot take any more votes");
            return Err(error::Error::TallyFull);
        };

        if let VotePolicy::OncePerViewer = self.policy {
            match self.ballots.entry((viewer, serial)) {
                Entry::Occupied(_) => {
                    log::warn!("viewer {viewer} tried to vote twice on poll #{serial}");
                    return Err(error::Error::AlreadyVoted);
                }
                Entry::Vacant(slot) => {
                    slot.insert(choice);
                }
            }
        }

        target.votes = votes;
        log::debug!("viewer {viewer} voted for choice {choice} of poll #{serial}");
        Ok(())
    }

    /// Every poll, newest first.
    pub fn list_polls(&self) -> impl ExactSizeIterator<Item = &Poll> + '_ {
        self.polls.iter()
    }

    pub fn get_poll(&self, poll: PollIndex) -> Option<&Poll> {
        self.polls.get(poll)
    }

    /// The choice this viewer has on record for the `poll`-th poll, if any.
    pub fn voted_choice(&self, viewer: ViewerId, poll: PollIndex) -> Option<usize> {
        let serial = self.polls.get(poll)?.serial;
        self.ballots.get(&(viewer, serial)).copied()
    }
}
