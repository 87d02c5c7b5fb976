use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::api::AllianceListRow;

pub struct AllianceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllianceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the alliance or refreshes its attributes when a row with the
    /// same EVE Online alliance ID already exists.
    pub async fn upsert(
        &self,
        row: &AllianceListRow,
    ) -> Result<entity::eve_alliance::Model, DbErr> {
        let alliance = entity::eve_alliance::ActiveModel {
            alliance_id: ActiveValue::Set(row.alliance_id),
            name: ActiveValue::Set(row.name.clone()),
            ticker: ActiveValue::Set(row.ticker.clone()),
            member_count: ActiveValue::Set(row.member_count),
            date_founded: ActiveValue::Set(row.date_founded),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::EveAlliance::insert(alliance)
            .on_conflict(
                OnConflict::column(entity::eve_alliance::Column::AllianceId)
                    .update_columns([
                        entity::eve_alliance::Column::Name,
                        entity::eve_alliance::Column::Ticker,
                        entity::eve_alliance::Column::MemberCount,
                        entity::eve_alliance::Column::DateFounded,
                        entity::eve_alliance::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Get an alliance using its EVE Online alliance ID
    pub async fn get_by_alliance_id(
        &self,
        alliance_id: i64,
    ) -> Result<Option<entity::eve_alliance::Model>, DbErr> {
        entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(self.db)
            .await
    }

    /// All stored alliances in insertion order
    pub async fn all(&self) -> Result<Vec<entity::eve_alliance::Model>, DbErr> {
        entity::prelude::EveAlliance::find()
            .order_by_asc(entity::eve_alliance::Column::Id)
            .all(self.db)
            .await
    }
}
