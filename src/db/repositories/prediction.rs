use crate::entities::{predictions, prelude::*};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

pub struct PredictionRepository {
    conn: DatabaseConnection,
}

impl PredictionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Appends one record, assigning the timestamp and sequential id
    /// server-side, and returns the stored row.
    pub async fn add(&self, user_id: &str, prediction_value: f64) -> Result<predictions::Model> {
        let model = predictions::ActiveModel {
            timestamp: Set(chrono::Utc::now().to_rfc3339()),
            user_id: Set(user_id.to_string()),
            prediction_value: Set(prediction_value),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;
        Ok(model)
    }

    pub async fn list(&self) -> Result<Vec<predictions::Model>> {
        let rows = Predictions::find()
            .order_by_asc(predictions::Column::Index)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}
