use fxhash::FxHashMap;
use std::sync::{Arc, RwLock};

pub type ActionIndex = usize;
pub type QValue = f64;
pub type QTable<S> = FxHashMap<S, Vec<QValue>>;
pub type SharedQTable<Q> = Arc<RwLock<Q>>;

pub type BlackjackState = (u8, u8, bool); // (player sum, dealer card, usable ace)

pub const STICK: ActionIndex = 0;
pub const HIT: ActionIndex = 1;
pub const BLACKJACK_ACTIONS: usize = 2;

/// Wraps a table in the handle policies are bound to.
pub fn shared<Q>(table: Q) -> SharedQTable<Q> {
    Arc::new(RwLock::new(table))
}
