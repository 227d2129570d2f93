//! Menu suggestions left from the dashboard.

use crate::{
    entities::{Suggestion, suggestion},
    errors::FeedbackError,
};
use chrono::NaiveDate;
use sea_orm::{Set, prelude::*};
use tracing::{error, info, instrument};

/// Confirmation shown after a suggestion is stored.
pub const FEEDBACK_CONFIRMATION: &str = "✅ ¡Gracias por tu sugerencia! La tomaremos en cuenta.";

/// Stores a trimmed suggestion for the customer.
///
/// Blank input is rejected before any statement runs. The insert does not read the row
/// back, since shop `sugerencias` tables carry no `id` column.
#[instrument(skip(db, text), fields(len = text.len()))]
pub async fn submit_suggestion<C>(
    db: &C,
    customer_id: i64,
    text: &str,
    today: NaiveDate,
) -> Result<(), FeedbackError>
where
    C: ConnectionTrait,
{
    let body = text.trim();
    if body.is_empty() {
        return Err(FeedbackError::Empty);
    }

    let model = suggestion::ActiveModel {
        customer_id: Set(customer_id),
        text: Set(body.to_string()),
        date: Set(today),
        ..Default::default()
    };

    Suggestion::insert(model)
        .exec_without_returning(db)
        .await
        .map_err(|e| {
            error!("Failed to store suggestion: {}", e);
            FeedbackError::Save(e)
        })?;
    info!(customer_id, "Suggestion stored");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Statement};

    #[tokio::test]
    async fn test_submit_stores_trimmed_text() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;
        let today = date(2026, 10, 16);

        submit_suggestion(&db, customer.id, "  Más opciones veganas \n", today)
            .await
            .unwrap();

        let all = Suggestion::find().all(&db).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Más opciones veganas");
        assert_eq!(all[0].customer_id, customer.id);
        assert_eq!(all[0].date, today);
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_suggestion_inserts_nothing() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        for text in ["", "   ", "\n\t"] {
            let err = submit_suggestion(&db, customer.id, text, date(2026, 10, 16))
                .await
                .unwrap_err();
            assert!(matches!(err, FeedbackError::Empty));
            assert!(err.is_warning());
        }

        assert!(Suggestion::find().all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_on_shop_schema() -> Result<()> {
        let db = setup_shop_schema_db().await?;

        submit_suggestion(&db, 5, "Leche de avena", date(2026, 10, 16))
            .await
            .unwrap();

        let row = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT cliente_id, texto FROM sugerencias",
            ))
            .await?
            .unwrap();
        assert_eq!(row.try_get::<i64>("", "cliente_id")?, 5);
        assert_eq!(row.try_get::<String>("", "texto")?, "Leche de avena");
        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_is_save_error() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("readonly database".to_string())])
            .append_exec_errors([DbErr::Custom("readonly database".to_string())])
            .into_connection();

        let err = submit_suggestion(&db, 1, "Pan de elote", date(2026, 10, 16))
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Save(_)));
    }
}
