use crate::policy::{GreedyPolicy, make_greedy_policy};
use crate::table::QTableLike;
use crate::types::{ActionIndex, BlackjackState, HIT, STICK, SharedQTable};

/// Stick on 20 or 21, hit otherwise.
pub fn default_blackjack_policy(state: &BlackjackState) -> ActionIndex {
    match state.0 {
        20 | 21 => STICK,
        _ => HIT,
    }
}

pub type BlackjackPolicy<Q> = GreedyPolicy<BlackjackState, Q, fn(&BlackjackState) -> ActionIndex>;

/// Greedy blackjack policy that plays the default rule until a state has values.
pub fn make_blackjack_policy<Q>(table: SharedQTable<Q>) -> BlackjackPolicy<Q>
where
    Q: QTableLike<BlackjackState>,
{
    make_greedy_policy(table, default_blackjack_policy as fn(&BlackjackState) -> ActionIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use crate::types::{QTable, shared};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn sticks_only_on_twenty_and_twenty_one() {
        assert_eq!(default_blackjack_policy(&(20, 10, false)), STICK);
        assert_eq!(default_blackjack_policy(&(21, 1, true)), STICK);
        assert_eq!(default_blackjack_policy(&(19, 5, false)), HIT);
        assert_eq!(default_blackjack_policy(&(12, 2, true)), HIT);
    }

    #[test]
    fn learned_values_override_default_rule() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut q = QTable::<BlackjackState>::default();
        q.insert((20, 10, false), vec![-1.0, 0.5]);
        let policy = make_blackjack_policy(shared(q));
        assert_eq!(policy.decide(&(20, 10, false), rng).unwrap(), HIT);
        assert_eq!(policy.decide(&(21, 10, false), rng).unwrap(), STICK);
        assert_eq!(policy.decide(&(13, 10, false), rng).unwrap(), HIT);
    }
}
