use crate::argmax::{max_indices, select_max_index};
use crate::config::ExplorationConfig;
use crate::error::{PolicyError, Result};
use crate::table::QTableLike;
use crate::types::{ActionIndex, QTable, QValue, SharedQTable, shared};
use fxhash::FxHashMap;
use rand::Rng;
use std::borrow::Cow;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::RwLockReadGuard;

/// Maps a state to an action, drawing any randomness from `rng`.
pub trait Policy<S> {
    fn decide<R: Rng + ?Sized>(&self, state: &S, rng: &mut R) -> Result<ActionIndex>;
}

fn read<Q>(table: &SharedQTable<Q>) -> Result<RwLockReadGuard<'_, Q>> {
    table.read().map_err(|_| PolicyError::Poisoned)
}

/// Greedy over Q for stored states, `fallback` for everything else.
pub struct GreedyPolicy<S, Q, F> {
    table: SharedQTable<Q>,
    fallback: F,
    state: PhantomData<fn(&S)>,
}

pub fn make_greedy_policy<S, Q, F>(table: SharedQTable<Q>, fallback: F) -> GreedyPolicy<S, Q, F>
where
    Q: QTableLike<S>,
    F: Fn(&S) -> ActionIndex,
{
    log::debug!("building greedy policy with fallback");
    GreedyPolicy {
        table,
        fallback,
        state: PhantomData,
    }
}

impl<S, Q, F> GreedyPolicy<S, Q, F>
where
    S: Eq + Hash,
    Q: QTableLike<S>,
    F: Fn(&S) -> ActionIndex,
{
    /// Freezes the current decision for each of `states`.
    pub fn snapshot<I, R>(&self, states: I, rng: &mut R) -> Result<FxHashMap<S, ActionIndex>>
    where
        I: IntoIterator<Item = S>,
        R: Rng + ?Sized,
    {
        states
            .into_iter()
            .map(|state| self.decide(&state, rng).map(|action| (state, action)))
            .collect()
    }
}

impl<S, Q, F> Policy<S> for GreedyPolicy<S, Q, F>
where
    Q: QTableLike<S>,
    F: Fn(&S) -> ActionIndex,
{
    fn decide<R: Rng + ?Sized>(&self, state: &S, rng: &mut R) -> Result<ActionIndex> {
        let table = read(&self.table)?;
        if !table.contains(state) {
            log::trace!("unseen state, using fallback");
            return Ok((self.fallback)(state));
        }
        select_max_index(&table.action_values(state)?, rng)
    }
}

impl<S, Q, F: Clone> Clone for GreedyPolicy<S, Q, F> {
    fn clone(&self) -> Self {
        GreedyPolicy {
            table: self.table.clone(),
            fallback: self.fallback.clone(),
            state: PhantomData,
        }
    }
}

/// Uniform over all actions with probability epsilon, tie-breaking greedy
/// over Q otherwise.
///
/// There is no fallback: exploiting a state the table cannot answer fails
/// with `KeyNotFound`, unless the table itself supplies default rows.
pub struct EpsilonSoftPolicy<S, Q> {
    table: SharedQTable<Q>,
    epsilon: f64,
    num_actions: usize,
    state: PhantomData<fn(&S)>,
}

pub fn make_epsilon_policy<S, Q>(
    table: SharedQTable<Q>,
    epsilon: f64,
    num_actions: usize,
) -> Result<EpsilonSoftPolicy<S, Q>>
where
    Q: QTableLike<S>,
{
    EpsilonSoftPolicy::from_config(table, ExplorationConfig::new(epsilon, num_actions))
}

/// Epsilon-soft policy over a table holding one row under the unit state.
pub fn single_row_policy(values: Vec<QValue>, epsilon: f64) -> Result<EpsilonSoftPolicy<(), QTable<()>>> {
    let num_actions = values.len();
    let mut table = QTable::default();
    table.insert((), values);
    make_epsilon_policy(shared(table), epsilon, num_actions)
}

impl<S, Q> EpsilonSoftPolicy<S, Q>
where
    Q: QTableLike<S>,
{
    /// Validates the parameters and every row currently stored.
    pub fn from_config(table: SharedQTable<Q>, config: ExplorationConfig) -> Result<Self> {
        config.validate()?;
        let found = {
            let guard = read(&table)?;
            let stored = guard.rows().map(<[QValue]>::len).find(|&n| n != config.num_actions);
            stored.or(guard.default_width().filter(|&n| n != config.num_actions))
        };
        if let Some(found) = found {
            return Err(PolicyError::ShapeMismatch {
                expected: config.num_actions,
                found,
            });
        }
        log::debug!(
            "building epsilon-soft policy (epsilon {}, {} actions)",
            config.epsilon,
            config.num_actions
        );
        Ok(EpsilonSoftPolicy {
            table,
            epsilon: config.epsilon,
            num_actions: config.num_actions,
            state: PhantomData,
        })
    }

    /// Takes the action count from the row of `canonical`, once.
    pub fn from_canonical_state(table: SharedQTable<Q>, epsilon: f64, canonical: &S) -> Result<Self> {
        let num_actions = read(&table)?.action_values(canonical)?.len();
        Self::from_config(table, ExplorationConfig::new(epsilon, num_actions))
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// The distribution `decide` samples from in `state`.
    pub fn action_probabilities(&self, state: &S) -> Result<Vec<f64>> {
        let table = read(&self.table)?;
        let ties = max_indices(&self.row(&table, state)?)?;
        let n = self.num_actions as f64;
        let mut probs = vec![self.epsilon / n; self.num_actions];
        for i in ties.iter().copied() {
            probs[i] += (1.0 - self.epsilon) / ties.len() as f64;
        }
        Ok(probs)
    }

    fn row<'t>(&self, table: &'t Q, state: &S) -> Result<Cow<'t, [QValue]>> {
        let row = table.action_values(state)?;
        match row.len() == self.num_actions {
            true => Ok(row),
            false => Err(PolicyError::ShapeMismatch {
                expected: self.num_actions,
                found: row.len(),
            }),
        }
    }
}

impl<S, Q> Policy<S> for EpsilonSoftPolicy<S, Q>
where
    Q: QTableLike<S>,
{
    fn decide<R: Rng + ?Sized>(&self, state: &S, rng: &mut R) -> Result<ActionIndex> {
        if rng.random::<f64>() < self.epsilon {
            log::trace!("exploring");
            return Ok(rng.random_range(0..self.num_actions));
        }
        let table = read(&self.table)?;
        select_max_index(&self.row(&table, state)?, rng)
    }
}

impl<S, Q> Clone for EpsilonSoftPolicy<S, Q> {
    fn clone(&self) -> Self {
        EpsilonSoftPolicy {
            table: self.table.clone(),
            epsilon: self.epsilon,
            num_actions: self.num_actions,
            state: PhantomData,
        }
    }
}
