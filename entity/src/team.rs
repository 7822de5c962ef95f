use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_team::Entity")]
    PlayerTeam,
}

impl Related<super::player_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTeam.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_team::Relation::Player.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_team::Relation::Team.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
