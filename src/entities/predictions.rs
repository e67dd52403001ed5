use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Append-only log written by the serving API, never by the pipeline.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "predictions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub index: i64,
    pub timestamp: String,
    pub user_id: String,
    pub prediction_value: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
