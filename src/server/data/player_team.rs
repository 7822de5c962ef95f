use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct PlayerTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerTeamRepository<'a, C> {
    /// Creates a new instance of [`PlayerTeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Check whether the player is already a member of the team
    pub async fn exists(&self, player_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::PlayerTeam::find_by_id((player_id, team_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Record a player as a member of a team
    ///
    /// Errors with a primary key violation if the membership already exists, use
    /// [`Self::add_if_absent`] for set semantics.
    pub async fn create(&self, player_id: i32, team_id: i32) -> Result<(), DbErr> {
        let membership = entity::player_team::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            team_id: ActiveValue::Set(team_id),
        };

        entity::prelude::PlayerTeam::insert(membership)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Add the membership unless it is already present
    ///
    /// # Returns
    /// - `true` if a new membership was recorded
    /// - `false` if the player was already on the team
    pub async fn add_if_absent(&self, player_id: i32, team_id: i32) -> Result<bool, DbErr> {
        if self.exists(player_id, team_id).await? {
            return Ok(false);
        }

        self.create(player_id, team_id).await?;

        Ok(true)
    }
}
