//! Discovering an unknown graph by walking it.

pub mod controller;
pub mod movement;

pub use controller::{
    Exit, ExplorationController, ExplorationMap, RoomEntry, StepOutcome, TravelPath,
};
pub use movement::{replay, MovementInterface};
