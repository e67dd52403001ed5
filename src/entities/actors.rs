use sea_orm::entity::prelude::*;

/// Deduplicated by (actor_id, actor) pair, so the source id is indexed but
/// deliberately not unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub index: i32,
    #[sea_orm(indexed)]
    pub actor_id: i64,
    pub actor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
