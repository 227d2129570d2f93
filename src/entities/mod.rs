//! Entity module - SeaORM definitions for the `clientes`, `ventas` and `sugerencias` tables.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod customer;
pub mod sale;
pub mod suggestion;

pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use sale::{Column as SaleColumn, Entity as Sale, Model as SaleModel};
pub use suggestion::{
    Column as SuggestionColumn, Entity as Suggestion, Model as SuggestionModel,
};
