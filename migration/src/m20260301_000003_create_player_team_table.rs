use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_team_table::Team, m20260301_000002_create_player_table::Player,
};

static PK_PLAYER_TEAM: &str = "pk_player_team";
static IDX_PLAYER_TEAM_TEAM_ID: &str = "idx_player_team_team_id";
static FK_PLAYER_TEAM_PLAYER_ID: &str = "fk_player_team_player_id";
static FK_PLAYER_TEAM_TEAM_ID: &str = "fk_player_team_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTeam::Table)
                    .if_not_exists()
                    .col(integer(PlayerTeam::PlayerId))
                    .col(integer(PlayerTeam::TeamId))
                    .primary_key(
                        Index::create()
                            .name(PK_PLAYER_TEAM)
                            .col(PlayerTeam::PlayerId)
                            .col(PlayerTeam::TeamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_TEAM_ID)
                    .table(PlayerTeam::Table)
                    .col(PlayerTeam::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_PLAYER_ID)
                    .from_tbl(PlayerTeam::Table)
                    .from_col(PlayerTeam::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_TEAM_ID)
                    .from_tbl(PlayerTeam::Table)
                    .from_col(PlayerTeam::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_TEAM_ID)
                    .table(PlayerTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_PLAYER_ID)
                    .table(PlayerTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_TEAM_ID)
                    .table(PlayerTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlayerTeam {
    Table,
    PlayerId,
    TeamId,
}
