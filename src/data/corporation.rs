use chrono::{NaiveDateTime, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::api::CorporationSheet;

pub struct CorporationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CorporationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a corporation was seen in an alliance's member rowset:
    /// creates the corporation if this is its first observation, otherwise
    /// points its alliance reference at `alliance_pk` with the given join
    /// date. Detail columns are left untouched.
    pub async fn upsert_membership(
        &self,
        corporation_id: i64,
        alliance_pk: i32,
        join_date: NaiveDateTime,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            alliance_id: ActiveValue::Set(Some(alliance_pk)),
            alliance_join_date: ActiveValue::Set(Some(join_date)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::EveCorporation::insert(corporation)
            .on_conflict(
                OnConflict::column(entity::eve_corporation::Column::CorporationId)
                    .update_columns([
                        entity::eve_corporation::Column::AllianceId,
                        entity::eve_corporation::Column::AllianceJoinDate,
                        entity::eve_corporation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Merges corporation sheet details into the stored record, creating it
    /// on first observation. The alliance reference is owned by the full
    /// alliance sync and is never modified here.
    pub async fn upsert_sheet(
        &self,
        sheet: &CorporationSheet,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(sheet.corporation_id),
            name: ActiveValue::Set(sheet.name.clone()),
            ticker: ActiveValue::Set(sheet.ticker.clone()),
            ceo_id: ActiveValue::Set(sheet.ceo_id),
            member_count: ActiveValue::Set(sheet.member_count),
            description: ActiveValue::Set(sheet.description.clone()),
            url: ActiveValue::Set(sheet.url.clone()),
            tax_rate: ActiveValue::Set(sheet.tax_rate),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::EveCorporation::insert(corporation)
            .on_conflict(
                OnConflict::column(entity::eve_corporation::Column::CorporationId)
                    .update_columns([
                        entity::eve_corporation::Column::Name,
                        entity::eve_corporation::Column::Ticker,
                        entity::eve_corporation::Column::CeoId,
                        entity::eve_corporation::Column::MemberCount,
                        entity::eve_corporation::Column::Description,
                        entity::eve_corporation::Column::Url,
                        entity::eve_corporation::Column::TaxRate,
                        entity::eve_corporation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Clears the alliance reference and join date of every corporation whose
    /// EVE Online ID is not in `seen_corporation_ids` and whose reference is
    /// currently set. Returns the number of corporations cleared.
    pub async fn clear_stale_memberships(
        &self,
        seen_corporation_ids: &[i64],
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::EveCorporation::update_many()
            .col_expr(
                entity::eve_corporation::Column::AllianceId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::eve_corporation::Column::AllianceJoinDate,
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .col_expr(
                entity::eve_corporation::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::eve_corporation::Column::AllianceId.is_not_null())
            .filter(
                entity::eve_corporation::Column::CorporationId
                    .is_not_in(seen_corporation_ids.iter().copied()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Get a corporation using its EVE Online corporation ID
    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }

    /// Current member corporations of the alliance with surrogate key
    /// `alliance_pk`, in insertion order
    pub async fn find_by_alliance(
        &self,
        alliance_pk: i32,
    ) -> Result<Vec<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::AllianceId.eq(alliance_pk))
            .order_by_asc(entity::eve_corporation::Column::Id)
            .all(self.db)
            .await
    }

    /// All stored corporations
    pub async fn all(&self) -> Result<Vec<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .order_by_asc(entity::eve_corporation::Column::Id)
            .all(self.db)
            .await
    }
}
