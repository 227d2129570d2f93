//! Customer entity - A registered member of the loyalty program.
//!
//! Rows are created by the in-store registration process; this crate only reads them
//! and applies profile updates. Column names follow the shop's existing `clientes` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    /// Identifier printed on the customer's card / QR code
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Full name
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    #[sea_orm(column_name = "telefono")]
    pub phone: Option<String>,
    /// Postal address
    #[sea_orm(column_name = "direccion")]
    pub address: Option<String>,
    /// Age in years
    #[sea_orm(column_name = "edad")]
    pub age: i32,
    /// Stored sex code (`F`, `M`, `Otro`), see [`crate::core::choices::Sex`].
    /// NULL when registration skipped it.
    #[sea_orm(column_name = "sexo")]
    pub sex: Option<String>,
    /// Stored flavor preference, see [`crate::core::choices::Preference`]
    #[sea_orm(column_name = "preferencias")]
    pub preference: Option<String>,
    /// Current loyalty point balance
    #[sea_orm(column_name = "puntos_lealtad")]
    pub loyalty_points: i32,
    /// Date of the last profile update
    #[sea_orm(column_name = "ultima_visita")]
    pub last_visit: Option<Date>,
    /// Marketing segment assigned offline; -1 or NULL when unclassified
    pub cluster: Option<i32>,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many sales
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
    /// One customer has many suggestions
    #[sea_orm(has_many = "super::suggestion::Entity")]
    Suggestions,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::suggestion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suggestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
