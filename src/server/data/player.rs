use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::roster::ScrapedPlayer;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a player from a scraped roster row
    ///
    /// # Arguments
    /// - `player`: Scraped roster row, its href becomes the player's external key
    /// - `gender`: Gender of the flight the roster was scraped from
    pub async fn create(
        &self,
        player: ScrapedPlayer,
        gender: String,
    ) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(player.name),
            href: ActiveValue::Set(player.href),
            location: ActiveValue::Set(player.location),
            ntrp: ActiveValue::Set(player.ntrp),
            rating: ActiveValue::Set(player.rating),
            gender: ActiveValue::Set(gender),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    /// Get a player using the catalog href
    pub async fn find_by_href(&self, href: &str) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Href.eq(href))
            .one(self.db)
            .await
    }

    /// Overwrite every descriptive attribute of an existing player
    ///
    /// The href is left untouched; it is the player's identity. `updated_at` is bumped
    /// even when the scraped values match what is stored.
    pub async fn update(
        &self,
        existing: entity::player::Model,
        player: ScrapedPlayer,
        gender: String,
    ) -> Result<entity::player::Model, DbErr> {
        let mut player_am = existing.into_active_model();
        player_am.name = ActiveValue::Set(player.name);
        player_am.location = ActiveValue::Set(player.location);
        player_am.ntrp = ActiveValue::Set(player.ntrp);
        player_am.rating = ActiveValue::Set(player.rating);
        player_am.gender = ActiveValue::Set(gender);
        player_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        player_am.update(self.db).await
    }
}
