//! Identifier allocation for lists and items.

use std::collections::HashSet;

use anyhow::{Result, anyhow, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound of ids handed out by [`IdPolicy::Random`].
pub const RANDOM_ID_UPPER: i32 = 999;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Increasing counter starting at 1.
    #[default]
    Sequential,
    /// Uniform in `[0, RANDOM_ID_UPPER)`, never one already in use.
    Random,
}

#[derive(Debug, Clone)]
pub struct IdGenerator {
    policy: IdPolicy,
    next: i32,
}

impl IdGenerator {
    pub fn new(policy: IdPolicy) -> Self {
        Self { policy, next: 1 }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Allocate an id not present in `used`.
    pub fn next_id(&mut self, used: &HashSet<i32>) -> Result<i32> {
        match self.policy {
            IdPolicy::Sequential => self.next_sequential(used),
            IdPolicy::Random => next_random(used, &mut rand::thread_rng()),
        }
    }

    fn next_sequential(&mut self, used: &HashSet<i32>) -> Result<i32> {
        loop {
            let id = self.next;
            self.next = id
                .checked_add(1)
                .ok_or_else(|| anyhow!("sequential id counter overflowed"))?;
            if !used.contains(&id) {
                return Ok(id);
            }
        }
    }
}

fn next_random<R: Rng>(used: &HashSet<i32>, rng: &mut R) -> Result<i32> {
    let free: Vec<i32> = (0..RANDOM_ID_UPPER)
        .filter(|id| !used.contains(id))
        .collect();
    match free.choose(rng) {
        Some(id) => Ok(*id),
        None => bail!("all {} random ids are in use", RANDOM_ID_UPPER),
    }
}
