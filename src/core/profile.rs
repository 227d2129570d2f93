//! Profile update business logic.
//!
//! Every successful submission of the profile form rewrites the editable fields and
//! awards [`POINTS_PER_UPDATE`] points in a single `UPDATE` statement:
//! `UPDATE clientes SET ..., puntos_lealtad = puntos_lealtad + 10, ultima_visita = ? WHERE id = ?`
//! so the increment stays atomic against other writers of the same row without an
//! explicit transaction.

use crate::{
    core::choices::{Preference, Sex},
    entities::{Customer, customer},
    errors::UpdateError,
};
use chrono::NaiveDate;
use sea_orm::{prelude::*, sea_query::Expr};
use tracing::{error, info, instrument, warn};

/// Points awarded per completed profile update.
pub const POINTS_PER_UPDATE: i32 = 10;

/// Youngest age accepted by the form.
pub const MIN_AGE: i32 = 18;

/// Oldest age accepted by the form.
pub const MAX_AGE: i32 = 100;

/// Promotion attached to every successful update.
pub const UPDATE_PROMO: &str = "Recibe promo: 10% off en tu próximo latte.";

/// Edited values for the profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Age in years, 18..=100
    pub age: i32,
    /// Sex selector
    pub sex: Sex,
    /// Flavor selector
    pub preference: Preference,
}

impl ProfileEdit {
    /// Pre-fills the form with the subject's current values.
    ///
    /// Missing contact fields become empty strings and stored enum values go through
    /// the selector fallbacks. An age outside the form's bounds is clamped so the
    /// pre-filled form is always submittable.
    #[must_use]
    pub fn from_subject(subject: &customer::Model) -> Self {
        Self {
            name: subject.name.clone(),
            email: subject.email.clone().unwrap_or_default(),
            phone: subject.phone.clone().unwrap_or_default(),
            address: subject.address.clone().unwrap_or_default(),
            age: subject.age.clamp(MIN_AGE, MAX_AGE),
            sex: Sex::from_stored(subject.sex.as_deref()),
            preference: Preference::from_stored(subject.preference.as_deref()),
        }
    }
}

/// Checks the age bound of the form.
///
/// # Errors
/// [`UpdateError::AgeOutOfRange`] outside 18..=100.
pub fn validate_age(age: i32) -> Result<(), UpdateError> {
    if age < MIN_AGE || age > MAX_AGE {
        return Err(UpdateError::AgeOutOfRange { age });
    }
    Ok(())
}

/// Persists the edit, awards points and stamps today's visit.
///
/// Returns the subject's new in-memory snapshot, built locally from `subject` and
/// `edit` so the dashboard reflects the change without re-querying. On error nothing
/// is returned and the caller keeps its old snapshot.
#[instrument(skip(db, subject, edit), fields(customer_id = subject.id))]
pub async fn update_profile<C>(
    db: &C,
    subject: &customer::Model,
    edit: &ProfileEdit,
    today: NaiveDate,
) -> Result<customer::Model, UpdateError>
where
    C: ConnectionTrait,
{
    validate_age(edit.age)?;

    let result = Customer::update_many()
        .col_expr(customer::Column::Name, Expr::value(edit.name.clone()))
        .col_expr(customer::Column::Email, Expr::value(edit.email.clone()))
        .col_expr(customer::Column::Phone, Expr::value(edit.phone.clone()))
        .col_expr(customer::Column::Address, Expr::value(edit.address.clone()))
        .col_expr(customer::Column::Age, Expr::value(edit.age))
        .col_expr(customer::Column::Sex, Expr::value(edit.sex.code()))
        .col_expr(
            customer::Column::Preference,
            Expr::value(edit.preference.code()),
        )
        .col_expr(
            customer::Column::LoyaltyPoints,
            Expr::col(customer::Column::LoyaltyPoints).add(POINTS_PER_UPDATE),
        )
        .col_expr(customer::Column::LastVisit, Expr::value(today))
        .filter(customer::Column::Id.eq(subject.id))
        .exec(db)
        .await
        .map_err(|e| {
            error!("Profile update failed: {}", e);
            UpdateError::Storage(e)
        })?;

    if result.rows_affected == 0 {
        warn!("Profile update matched no customer row");
        return Err(UpdateError::SubjectMissing { id: subject.id });
    }

    info!(points_awarded = POINTS_PER_UPDATE, "Profile updated");
    Ok(apply_edit(subject, edit, today))
}

/// Builds the post-update snapshot of `subject`.
///
/// The balance saturates at `i32::MAX` instead of wrapping.
#[must_use]
pub fn apply_edit(
    subject: &customer::Model,
    edit: &ProfileEdit,
    today: NaiveDate,
) -> customer::Model {
    customer::Model {
        name: edit.name.clone(),
        email: Some(edit.email.clone()),
        phone: Some(edit.phone.clone()),
        address: Some(edit.address.clone()),
        age: edit.age,
        sex: Some(edit.sex.code().to_string()),
        preference: Some(edit.preference.code().to_string()),
        loyalty_points: subject.loyalty_points.saturating_add(POINTS_PER_UPDATE),
        last_visit: Some(today),
        ..subject.clone()
    }
}

/// Confirmation shown after a successful update.
#[must_use]
pub fn format_update_confirmation() -> String {
    format!("¡Datos actualizados! Ganaste {POINTS_PER_UPDATE} puntos. {UPDATE_PROMO}")
}
