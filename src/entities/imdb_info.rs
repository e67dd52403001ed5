use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One row per title that has any rating data; titles without ratings have
/// no row here at all.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "imdb_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub index: i32,
    pub movie_id: Option<String>,
    pub show_id: Option<String>,
    pub imdb_id: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
