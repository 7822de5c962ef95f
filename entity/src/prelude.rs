pub use super::player::Entity as Player;
pub use super::player_team::Entity as PlayerTeam;
pub use super::team::Entity as Team;
