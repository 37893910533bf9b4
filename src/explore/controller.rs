//! Backtracking exploration of a graph that is only visible one room at a time.
//!
//! The controller never sees the whole graph. At each step it reads the exits
//! of the room it stands in, queues every unresolved exit as a
//! `(reverse, forward)` pair on a LIFO stack, and pops the top entry to decide
//! where to go next. Because the forward move always sits on top of its own
//! way back, new frontiers are explored depth-first and every branch is
//! unwound through the exit it was entered by.
//!
//! This relies on exits being invertible: walking `d` and then
//! `d.opposite()` returns to the same room. When that does not hold, a popped
//! entry can name an exit the current room lacks and the movement error is
//! returned to the caller.
//!
//! When the stack runs dry before the target count is reached, the controller
//! wanders through a random exit. That fallback has no bound: if the target
//! is larger than the number of reachable rooms, [`ExplorationController::explore`]
//! never returns.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Direction, GraphError, GraphResult, VertexId};

use super::movement::MovementInterface;

/// Ordered record of every move taken, replayable from the start room.
pub type TravelPath = Vec<Direction>;

/// What lies behind an exit, as far as the controller knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit<V> {
    /// Exit seen but not yet walked.
    Unknown,
    /// Exit walked; leads to this vertex.
    Known(V),
}

impl<V> Exit<V> {
    /// Whether the destination has been resolved.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The resolved destination, if any.
    pub fn vertex(&self) -> Option<&V> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown => None,
        }
    }
}

/// Exits of one discovered room.
pub type RoomEntry<V> = BTreeMap<Direction, Exit<V>>;

/// Everything discovered so far, keyed by room.
pub type ExplorationMap<V> = HashMap<V, RoomEntry<V>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveKind {
    Forward,
    Reverse,
}

/// A queued move. A reverse move's source is unset until its forward partner
/// has been walked and the room on the other side is known.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMove<V> {
    source: Option<V>,
    direction: Direction,
    kind: MoveKind,
}

/// Result of a single [`ExplorationController::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The target count has been reached; no move was made.
    Finished,
    /// A queued move was popped and walked.
    Backtracked(Direction),
    /// The queue was empty; a random exit was walked.
    Wandered(Direction),
}

impl StepOutcome {
    /// Direction walked during the step, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Finished => None,
            Self::Backtracked(d) | Self::Wandered(d) => Some(*d),
        }
    }
}

/// Drives a [`MovementInterface`] until a known number of rooms has been seen.
pub struct ExplorationController<V: VertexId, R = StdRng> {
    /// Number of distinct rooms to discover before stopping.
    target: usize,
    /// Discovered room -> direction -> neighbor or unknown.
    map: ExplorationMap<V>,
    /// Queued moves, top of stack last.
    pending: Vec<PendingMove<V>>,
    /// Every move taken so far.
    path: TravelPath,
    /// Source for the random fallback.
    rng: R,
}

impl<V: VertexId> ExplorationController<V, StdRng> {
    /// Create a controller whose fallback draws from OS entropy.
    pub fn new(target: usize) -> Self {
        Self::with_rng(target, StdRng::from_entropy())
    }

    /// Create a controller with a reproducible fallback.
    pub fn with_seed(target: usize, seed: u64) -> Self {
        Self::with_rng(target, StdRng::seed_from_u64(seed))
    }
}

impl<V: VertexId, R: Rng> ExplorationController<V, R> {
    /// Create a controller with a caller-supplied random source.
    pub fn with_rng(target: usize, rng: R) -> Self {
        Self {
            target,
            map: HashMap::new(),
            pending: Vec::new(),
            path: Vec::new(),
            rng,
        }
    }

    /// Step until `target` rooms are discovered and return the moves taken.
    ///
    /// Does not return if `target` exceeds the number of reachable rooms.
    pub fn explore<M>(&mut self, world: &mut M) -> GraphResult<TravelPath>
    where
        M: MovementInterface<Vertex = V>,
    {
        while self.step(world)? != StepOutcome::Finished {}
        log::debug!(
            "exploration finished: {} rooms, {} moves",
            self.map.len(),
            self.path.len()
        );
        Ok(self.path.clone())
    }

    /// Record the current room, then make at most one move.
    pub fn step<M>(&mut self, world: &mut M) -> GraphResult<StepOutcome>
    where
        M: MovementInterface<Vertex = V>,
    {
        let here = world.current_position();
        let exits = world.exits(&here)?;

        let mut entry = self.map.get(&here).cloned().unwrap_or_default();
        for &direction in &exits {
            let exit = entry.entry(direction).or_insert(Exit::Unknown);
            if exit.is_known() || self.is_queued(&here, direction) {
                continue;
            }
            self.pending.push(PendingMove {
                source: None,
                direction: direction.opposite(),
                kind: MoveKind::Reverse,
            });
            self.pending.push(PendingMove {
                source: Some(here.clone()),
                direction,
                kind: MoveKind::Forward,
            });
        }
        if self.map.insert(here.clone(), entry).is_none() {
            log::debug!(
                "discovered room {} ({}/{})",
                here,
                self.map.len(),
                self.target
            );
        }

        if self.map.len() >= self.target {
            return Ok(StepOutcome::Finished);
        }

        if let Some(next) = self.pending.last().cloned() {
            world.travel(next.direction)?;
            self.pending.pop();
            self.path.push(next.direction);

            let arrived = world.current_position();
            log::trace!("{} --{}--> {}", here, next.direction, arrived);
            let source = next.source.unwrap_or(here);
            self.resolve(&source, next.direction, arrived.clone());

            if next.kind == MoveKind::Forward {
                if let Some(back) = self.pending.last_mut() {
                    if back.kind == MoveKind::Reverse && back.source.is_none() {
                        back.source = Some(arrived);
                    }
                }
            }
            return Ok(StepOutcome::Backtracked(next.direction));
        }

        let direction = *exits
            .choose(&mut self.rng)
            .ok_or_else(|| GraphError::NoExits(here.to_string()))?;
        log::debug!("queue empty at room {}; wandering {}", here, direction);
        world.travel(direction)?;
        self.path.push(direction);
        Ok(StepOutcome::Wandered(direction))
    }

    /// Whether a move out of `vertex` through `direction` is already queued.
    fn is_queued(&self, vertex: &V, direction: Direction) -> bool {
        self.pending
            .iter()
            .any(|m| m.direction == direction && m.source.as_ref() == Some(vertex))
    }

    /// Point an unknown exit of `source` at `arrived`. Known exits are left as is.
    fn resolve(&mut self, source: &V, direction: Direction, arrived: V) {
        if let Some(entry) = self.map.get_mut(source) {
            let exit = entry.entry(direction).or_insert(Exit::Unknown);
            if !exit.is_known() {
                *exit = Exit::Known(arrived);
            }
        }
    }

    /// Number of rooms to discover.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of distinct rooms discovered so far.
    pub fn discovered_count(&self) -> usize {
        self.map.len()
    }

    /// Number of queued moves.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The partially known map built so far.
    pub fn exploration_map(&self) -> &ExplorationMap<V> {
        &self.map
    }

    /// Moves taken so far.
    pub fn travel_path(&self) -> &[Direction] {
        &self.path
    }

    /// Consume the controller, keeping only the moves taken.
    pub fn into_travel_path(self) -> TravelPath {
        self.path
    }
}
