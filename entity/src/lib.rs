//! SeaORM entities for the rallylink store.
//!
//! Three relations: `team`, `player`, and the `player_team` membership join.

pub mod prelude;

pub mod player;
pub mod player_team;
pub mod team;
