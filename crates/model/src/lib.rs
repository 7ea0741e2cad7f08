#![no_std]
extern crate alloc;

pub mod event;
pub mod interaction;
pub mod poll;

pub use event::{HostEvent, Outcome};
pub use poll::{Choice, Draft, Poll};

/// Session-local identity of whoever casts a vote.
pub type ViewerId = core::num::NonZeroU64;

/// Position of a poll in the newest-first collection.
pub type PollIndex = usize;
