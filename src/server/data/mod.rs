//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against a plain connection or inside a transaction.

pub mod player;
pub mod player_team;
pub mod team;
