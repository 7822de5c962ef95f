use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team
    pub async fn create(&self, name: String) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Get a team by name
    ///
    /// Team names are not unique, when several teams share a name the one created
    /// first is returned.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .order_by_asc(entity::team::Column::Id)
            .one(self.db)
            .await
    }
}
