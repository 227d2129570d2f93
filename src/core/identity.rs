//! Identity resolution - turns the ID a customer types (or scans) into their record.
//!
//! The raw input is trimmed and parsed before any query runs, and the lookup itself is
//! a parameterized primary-key fetch. Storage failures are logged here and surfaced as
//! a generic [`LookupError::Access`].

use crate::{
    entities::{Customer, customer},
    errors::LookupError,
};
use sea_orm::prelude::*;
use tracing::{debug, error, info, instrument};

/// Parses a customer-supplied identifier.
///
/// # Errors
/// [`LookupError::EmptyId`] for blank input, [`LookupError::InvalidId`] when the trimmed
/// input is not an integer.
pub fn parse_customer_id(raw: &str) -> Result<i64, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyId);
    }
    trimmed.parse::<i64>().map_err(|_| LookupError::InvalidId {
        raw: trimmed.to_string(),
    })
}

/// Finds a customer by primary key.
pub async fn get_customer_by_id<C>(db: &C, id: i64) -> Result<Option<customer::Model>, DbErr>
where
    C: ConnectionTrait,
{
    Customer::find_by_id(id).one(db).await
}

/// Resolves raw input to exactly one registered customer.
///
/// The caller stores the returned model as the session subject; on any error the
/// session must be left untouched.
#[instrument(skip(db))]
pub async fn resolve_customer<C>(db: &C, raw: &str) -> Result<customer::Model, LookupError>
where
    C: ConnectionTrait,
{
    let id = parse_customer_id(raw)?;
    debug!(id, "Looking up customer");

    match get_customer_by_id(db, id).await {
        Ok(Some(customer)) => {
            info!(id, points = customer.loyalty_points, "Customer resolved");
            Ok(customer)
        }
        Ok(None) => {
            info!(id, "No customer registered with this id");
            Err(LookupError::NotRegistered { id })
        }
        Err(e) => {
            error!(id, "Customer lookup failed: {}", e);
            Err(LookupError::Access(e))
        }
    }
}

/// Greeting shown after a successful lookup.
#[must_use]
pub fn format_greeting(customer: &customer::Model) -> String {
    format!(
        "¡Hola {}! Tienes {} puntos.",
        customer.name, customer.loyalty_points
    )
}
