use sea_orm::entity::prelude::*;

/// One row per (title, actor, character). An actor may play several
/// characters in the same title.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters_bridge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub actor_id: i64,
    pub character_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
