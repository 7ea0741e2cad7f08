use api::VotePolicy;
use std::env::{self, VarError};

pub struct Config {
    /// How often one viewer may vote on the same poll.
    pub policy: VotePolicy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_policy_var(env::var("VOTE_POLICY"))
    }

    fn from_policy_var(var: Result<String, VarError>) -> anyhow::Result<Self> {
        let policy = match var {
            Ok(policy) => policy.parse()?,
            Err(VarError::NotPresent) => VotePolicy::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { policy })
    }
}
