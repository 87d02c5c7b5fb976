use sea_orm::entity::prelude::*;

/// An EVE Online player corporation.
///
/// Created on first observation, either from an alliance member rowset or a
/// direct corporation sheet query. The alliance reference is a weak link, not
/// ownership; it is rewritten by every full sync and `alliance_join_date` is
/// only meaningful while the reference is set. Detail columns stay `None`
/// until a corporation sheet has been fetched. Rows are never deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub corporation_id: i64,
    pub alliance_id: Option<i32>,
    pub alliance_join_date: Option<DateTime>,
    pub name: Option<String>,
    pub ticker: Option<String>,
    pub ceo_id: Option<i64>,
    pub member_count: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub url: Option<String>,
    pub tax_rate: Option<f32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_alliance::Entity",
        from = "Column::AllianceId",
        to = "super::eve_alliance::Column::Id"
    )]
    EveAlliance,
}

impl Related<super::eve_alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveAlliance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
