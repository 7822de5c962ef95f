use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_NAME: &str = "idx_team_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::Name))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Team names are not unique; two flights may field teams with the same name.
        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_NAME)
                    .table(Team::Table)
                    .col(Team::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_TEAM_NAME).table(Team::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
