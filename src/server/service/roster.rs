use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{player::PlayerRepository, player_team::PlayerTeamRepository, team::TeamRepository},
    error::Error,
    model::roster::ScrapedPlayer,
};

/// Reconciles scraped rosters into the team and player tables.
pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a scraped roster for a team.
    ///
    /// The team is looked up by name and created if missing. Each player is matched on
    /// href; a match has its attributes overwritten, otherwise a new player is created.
    /// Memberships are only added when absent, so running the same roster twice leaves
    /// the store unchanged apart from `updated_at`.
    ///
    /// Everything happens in one transaction. On error nothing is persisted.
    ///
    /// # Arguments
    /// - `team_name` - Name of the team the roster belongs to
    /// - `gender` - Gender of the flight, stored on every player
    /// - `players` - Scraped rows in page order, hrefs may repeat
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - One persisted player per scraped row, in the same order
    /// - `Err(Error::DbErr)` - A query failed, the transaction was rolled back
    #[tracing::instrument(skip(self, players), fields(players = players.len()))]
    pub async fn reconcile(
        &self,
        team_name: &str,
        gender: &str,
        players: Vec<ScrapedPlayer>,
    ) -> Result<Vec<entity::player::Model>, Error> {
        let txn = self.db.begin().await?;

        match Self::persist(&txn, team_name, gender, players).await {
            Ok(persisted) => {
                txn.commit().await?;

                Ok(persisted)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back roster transaction: {}", rollback_err);
                }

                Err(err.into())
            }
        }
    }

    async fn persist(
        txn: &DatabaseTransaction,
        team_name: &str,
        gender: &str,
        players: Vec<ScrapedPlayer>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let team_repo = TeamRepository::new(txn);
        let player_repo = PlayerRepository::new(txn);
        let membership_repo = PlayerTeamRepository::new(txn);

        let team = match team_repo.find_by_name(team_name).await? {
            Some(team) => team,
            None => {
                tracing::debug!("Creating team {}", team_name);
                team_repo.create(team_name.to_string()).await?
            }
        };

        let mut persisted = Vec::with_capacity(players.len());
        let mut created = 0;
        let mut joined = 0;

        for scraped in players {
            let player = match player_repo.find_by_href(&scraped.href).await? {
                Some(existing) => {
                    player_repo
                        .update(existing, scraped, gender.to_string())
                        .await?
                }
                None => {
                    created += 1;
                    player_repo.create(scraped, gender.to_string()).await?
                }
            };

            if membership_repo.add_if_absent(player.id, team.id).await? {
                joined += 1;
            }

            persisted.push(player);
        }

        tracing::info!(
            "Reconciled {} players for team {} ({} new players, {} new memberships)",
            persisted.len(),
            team.name,
            created,
            joined
        );

        Ok(persisted)
    }
}
