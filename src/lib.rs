//! Action selection for tabular reinforcement learning.
//!
//! The learning loop owns a Q-table behind a [`SharedQTable`] handle and
//! hands clones of that handle to the policies built here. Policies only
//! read it, a lock at a time, so every decision sees the latest values the
//! loop has written. Randomness is always supplied by the caller.

pub mod argmax;
pub mod blackjack;
pub mod config;
pub mod error;
pub mod policy;
pub mod table;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use argmax::{max_indices, select_max_index};
pub use blackjack::{BlackjackPolicy, default_blackjack_policy, make_blackjack_policy};
pub use config::ExplorationConfig;
pub use error::{PolicyError, Result};
pub use policy::{EpsilonSoftPolicy, GreedyPolicy, Policy, make_epsilon_policy, make_greedy_policy, single_row_policy};
pub use table::{DefaultQTable, QTableLike};
pub use types::{ActionIndex, BLACKJACK_ACTIONS, BlackjackState, HIT, QTable, QValue, STICK, SharedQTable, shared};
