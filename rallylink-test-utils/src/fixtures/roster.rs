//! Team and player database fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn roster<'a>(&'a mut self) -> RosterFixtures<'a> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> RosterFixtures<'a> {
    /// Insert a team with the given name.
    ///
    /// Names are not unique, calling this twice with the same name creates two teams.
    pub async fn insert_mock_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a player with the given href and standard test attributes.
    pub async fn insert_mock_player(
        &self,
        href: &str,
    ) -> Result<entity::player::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            name: ActiveValue::Set("Test Player".to_string()),
            href: ActiveValue::Set(href.to_string()),
            location: ActiveValue::Set("Atlanta, GA".to_string()),
            ntrp: ActiveValue::Set("3.5C".to_string()),
            rating: ActiveValue::Set("3.40".to_string()),
            gender: ActiveValue::Set("Female".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Record a player as a member of a team.
    pub async fn insert_membership(&self, player_id: i32, team_id: i32) -> Result<(), TestError> {
        entity::prelude::PlayerTeam::insert(entity::player_team::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            team_id: ActiveValue::Set(team_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
