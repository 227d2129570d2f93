//! Suggestion entity - Free-text menu feedback left by a customer.
//!
//! Inserted by `/sugerencia`; never read back by the bot.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Suggestion database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sugerencias")]
pub struct Model {
    /// Surrogate key
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer who wrote it
    #[sea_orm(column_name = "cliente_id")]
    pub customer_id: i64,
    /// Suggestion body, trimmed
    #[sea_orm(column_name = "texto")]
    pub text: String,
    /// Submission date
    #[sea_orm(column_name = "fecha")]
    pub date: Date,
}

/// Defines relationships between Suggestion and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each suggestion belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
