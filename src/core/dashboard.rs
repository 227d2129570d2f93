//! Profile dashboard business logic.
//!
//! Reads the subject's sales and stored segment, derives visit and spend aggregates,
//! and provides the reward simulator. Everything here except [`load_dashboard`] is a
//! pure function so the bot layer can recompute it on every interaction.

use crate::{
    entities::{Customer, Sale, customer, sale},
    errors::DashboardError,
};
use sea_orm::{QueryOrder, QuerySelect, prelude::*, sea_query::Expr};
use std::fmt::Write;
use tracing::{debug, error, instrument};

/// Points earned per projected visit.
pub const POINTS_PER_VISIT: i32 = 10;

/// Largest visit count the simulator accepts.
pub const MAX_SIMULATED_VISITS: u8 = 10;

/// Simulator value used when the customer does not pick one.
pub const DEFAULT_SIMULATED_VISITS: u8 = 3;

/// Projected balance that unlocks the top reward.
pub const TOP_TIER_THRESHOLD: i32 = 100;

/// Projected balance that unlocks the mid reward.
pub const MID_TIER_THRESHOLD: i32 = 50;

/// Marketing cohort assigned offline and stored in `clientes.cluster`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Cluster 0
    Student,
    /// Cluster 1
    Professional,
    /// Cluster 2
    Creative,
    /// -1, NULL or any label this version does not know
    Unclassified,
}

impl Segment {
    /// Maps a stored label to a segment.
    #[must_use]
    pub const fn from_label(label: Option<i32>) -> Self {
        match label {
            Some(0) => Self::Student,
            Some(1) => Self::Professional,
            Some(2) => Self::Creative,
            _ => Self::Unclassified,
        }
    }

    /// Human-readable profile description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Student => "🎓 Estudiante con consumo moderado",
            Self::Professional => "💼 Profesional con alto poder adquisitivo",
            Self::Creative => "🎨 Creativo con consumo variable",
            Self::Unclassified => "Perfil no clasificado aún",
        }
    }

    /// Personalized offer, if this segment has one.
    #[must_use]
    pub const fn offer(self) -> Option<&'static str> {
        match self {
            Self::Student => Some("2x1 en café americano los lunes"),
            Self::Professional => Some("15% off en espresso doble entre semana"),
            Self::Creative => Some("Combo creativo: café + pan artesanal por $55"),
            Self::Unclassified => None,
        }
    }
}

/// Visit and spend aggregates over a customer's sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitStats {
    /// Number of recorded sales
    pub visits: usize,
    /// Sum of all ticket totals
    pub total_spend: f64,
    /// `total_spend / visits`, or 0 with no visits
    pub average_ticket: f64,
}

impl VisitStats {
    /// Aggregates a list of sales.
    #[must_use]
    pub fn from_sales(sales: &[sale::Model]) -> Self {
        let visits = sales.len();
        let total_spend: f64 = sales.iter().map(|s| s.total).sum();
        #[allow(clippy::cast_precision_loss)] // visit counts are far below 2^52
        let average_ticket = if visits == 0 {
            0.0
        } else {
            total_spend / visits as f64
        };

        Self {
            visits,
            total_spend,
            average_ticket,
        }
    }
}

/// Everything the dashboard shows besides the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Aggregates over `sales`
    pub stats: VisitStats,
    /// Stored segment
    pub segment: Segment,
    /// Sales, newest first
    pub sales: Vec<sale::Model>,
}

/// Reward unlocked by a projected balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardTier {
    /// Projected balance of at least 100
    Top,
    /// Projected balance of at least 50
    Mid,
    /// Below both thresholds
    None,
}

impl RewardTier {
    /// Classifies a projected balance.
    #[must_use]
    pub const fn for_points(points: i32) -> Self {
        if points >= TOP_TIER_THRESHOLD {
            Self::Top
        } else if points >= MID_TIER_THRESHOLD {
            Self::Mid
        } else {
            Self::None
        }
    }

    /// Message for the tier; nothing is shown below the mid threshold.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Top => Some("🎁 ¡Desbloqueas combo gratis de café + snack!"),
            Self::Mid => Some("☕ Obtienes 20% de descuento en tu bebida favorita."),
            Self::None => None,
        }
    }
}

/// Result of the reward simulator. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Visits the customer plans
    pub visits: u8,
    /// Balance after those visits
    pub projected_points: i32,
    /// Reward reached
    pub tier: RewardTier,
}

/// Projects the balance after `visits` more visits. Saturates at `i32::MAX`.
///
/// # Errors
/// [`DashboardError::VisitsOutOfRange`] when `visits` exceeds 10.
pub fn project_points(balance: i32, visits: u8) -> Result<Projection, DashboardError> {
    if visits > MAX_SIMULATED_VISITS {
        return Err(DashboardError::VisitsOutOfRange { visits });
    }
    let projected_points = balance.saturating_add(i32::from(visits) * POINTS_PER_VISIT);
    Ok(Projection {
        visits,
        projected_points,
        tier: RewardTier::for_points(projected_points),
    })
}

/// Fetches the customer's sales, newest first.
///
/// `ventas.total` is `numeric`, so `SQLite` keeps whole amounts as INTEGER and the rest
/// as REAL; the cast makes every row decode as `f64`. Shop tables have no `id` column,
/// so the row id stands in for it.
pub async fn get_sales_for_customer<C>(
    db: &C,
    customer_id: i64,
) -> Result<Vec<sale::Model>, DbErr>
where
    C: ConnectionTrait,
{
    Sale::find()
        .select_only()
        .column_as(Expr::cust("rowid"), "id")
        .column(sale::Column::CustomerId)
        .column(sale::Column::Date)
        .column_as(Expr::cust("CAST(COALESCE(total, 0) AS REAL)"), "total")
        .filter(sale::Column::CustomerId.eq(customer_id))
        .order_by_desc(sale::Column::Date)
        .order_by_desc(Expr::cust("rowid"))
        .all(db)
        .await
}

/// Reads the stored segment label. A missing row reads as unclassified.
pub async fn get_segment_label<C>(db: &C, customer_id: i64) -> Result<Option<i32>, DbErr>
where
    C: ConnectionTrait,
{
    let label: Option<Option<i32>> = Customer::find_by_id(customer_id)
        .select_only()
        .column(customer::Column::Cluster)
        .into_tuple()
        .one(db)
        .await?;
    Ok(label.flatten())
}

/// Loads the dashboard for a customer.
#[instrument(skip(db))]
pub async fn load_dashboard<C>(db: &C, customer_id: i64) -> Result<Dashboard, DashboardError>
where
    C: ConnectionTrait,
{
    let sales = get_sales_for_customer(db, customer_id)
        .await
        .map_err(|e| {
            error!("Failed to load sales: {}", e);
            DashboardError::Load(e)
        })?;
    let label = get_segment_label(db, customer_id).await.map_err(|e| {
        error!("Failed to load segment: {}", e);
        DashboardError::Load(e)
    })?;

    let stats = VisitStats::from_sales(&sales);
    debug!(visits = stats.visits, ?label, "Dashboard loaded");

    Ok(Dashboard {
        stats,
        segment: Segment::from_label(label),
        sales,
    })
}

/// Formats an amount the way tickets are shown to customers: `$` and no decimals.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.0}")
}

/// Formats the visit history, one line per sale in the given order.
pub fn format_sales_history(sales: &[sale::Model]) -> Result<String, std::fmt::Error> {
    if sales.is_empty() {
        return Ok("Aún no tienes visitas registradas.".to_string());
    }

    let mut out = String::new();
    writeln!(&mut out, "{:<12} {:>10}", "Fecha", "Total")?;
    for sale in sales {
        writeln!(
            &mut out,
            "{:<12} {:>10}",
            sale.date.format("%Y-%m-%d").to_string(),
            format!("${:.2}", sale.total)
        )?;
    }
    Ok(out)
}

/// Formats the simulator output.
#[must_use]
pub fn format_projection(projection: &Projection) -> String {
    let mut out = format!(
        "Si cumples tu meta, tendrás **{} puntos**.",
        projection.projected_points
    );
    if let Some(message) = projection.tier.message() {
        out.push('\n');
        out.push_str(message);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;
    use sea_orm::{ActiveModelTrait, DatabaseBackend, MockDatabase, Set};

    #[test]
    fn test_stats_with_no_sales() {
        let stats = VisitStats::from_sales(&[]);
        assert_eq!(stats.visits, 0);
        assert_eq!(stats.total_spend, 0.0);
        assert_eq!(stats.average_ticket, 0.0);
    }

    #[test]
    fn test_stats_average_is_exact() {
        let sales = vec![
            sale::Model {
                id: 1,
                customer_id: 1,
                date: date(2026, 1, 1),
                total: 45.0,
            },
            sale::Model {
                id: 2,
                customer_id: 1,
                date: date(2026, 1, 2),
                total: 80.0,
            },
        ];
        let stats = VisitStats::from_sales(&sales);
        assert_eq!(stats.visits, 2);
        assert_eq!(stats.total_spend, 125.0);
        assert_eq!(stats.average_ticket, 62.5);
    }

    #[test]
    fn test_projection_examples() {
        let p = project_points(40, 2).unwrap();
        assert_eq!(p.projected_points, 60);
        assert_eq!(p.tier, RewardTier::Mid);

        let p = project_points(40, 6).unwrap();
        assert_eq!(p.projected_points, 100);
        assert_eq!(p.tier, RewardTier::Top);

        let p = project_points(0, 4).unwrap();
        assert_eq!(p.projected_points, 40);
        assert_eq!(p.tier, RewardTier::None);
    }

    #[test]
    fn test_projection_tier_boundaries() {
        assert_eq!(RewardTier::for_points(49), RewardTier::None);
        assert_eq!(RewardTier::for_points(50), RewardTier::Mid);
        assert_eq!(RewardTier::for_points(99), RewardTier::Mid);
        assert_eq!(RewardTier::for_points(100), RewardTier::Top);
        assert!(RewardTier::None.message().is_none());
    }

    #[test]
    fn test_projection_accepts_full_slider_range() {
        for visits in 0..=MAX_SIMULATED_VISITS {
            let p = project_points(15, visits).unwrap();
            assert_eq!(p.projected_points, 15 + i32::from(visits) * 10);
        }
        assert!(matches!(
            project_points(15, 11),
            Err(DashboardError::VisitsOutOfRange { visits: 11 })
        ));
    }

    #[test]
    fn test_projection_saturates_near_max_balance() {
        let p = project_points(i32::MAX - 5, MAX_SIMULATED_VISITS).unwrap();
        assert_eq!(p.projected_points, i32::MAX);
        assert_eq!(p.tier, RewardTier::Top);
    }

    #[test]
    fn test_unknown_segment_is_unclassified_without_offer() {
        for label in [Some(7), Some(-1), None] {
            let segment = Segment::from_label(label);
            assert_eq!(segment, Segment::Unclassified);
            assert_eq!(segment.description(), "Perfil no clasificado aún");
            assert!(segment.offer().is_none());
        }
    }

    #[test]
    fn test_known_segments_have_offers() {
        assert_eq!(
            Segment::from_label(Some(1)).offer(),
            Some("15% off en espresso doble entre semana")
        );
        assert!(Segment::from_label(Some(0)).offer().is_some());
        assert!(Segment::from_label(Some(2)).offer().is_some());
    }

    #[tokio::test]
    async fn test_load_dashboard_sorts_and_aggregates() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;
        let mut segmented: customer::ActiveModel = customer.clone().into();
        segmented.cluster = Set(Some(2));
        segmented.update(&db).await?;

        create_test_sale(&db, customer.id, date(2026, 3, 1), 50.0).await?;
        create_test_sale(&db, customer.id, date(2026, 9, 20), 70.0).await?;
        create_test_sale(&db, customer.id, date(2026, 6, 5), 30.0).await?;
        let other = create_test_customer(&db, 2002, "Beto", 0).await?;
        create_test_sale(&db, other.id, date(2026, 9, 30), 999.0).await?;

        let dashboard = load_dashboard(&db, customer.id).await.unwrap();
        assert_eq!(dashboard.stats.visits, 3);
        assert_eq!(dashboard.stats.total_spend, 150.0);
        assert_eq!(dashboard.stats.average_ticket, 50.0);
        assert_eq!(dashboard.segment, Segment::Creative);

        let dates: Vec<_> = dashboard.sales.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 9, 20), date(2026, 6, 5), date(2026, 3, 1)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_load_dashboard_without_sales() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        let dashboard = load_dashboard(&db, customer.id).await.unwrap();
        assert_eq!(dashboard.stats.visits, 0);
        assert_eq!(dashboard.stats.average_ticket, 0.0);
        assert_eq!(dashboard.segment, Segment::Unclassified);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_dashboard_on_shop_schema() -> Result<()> {
        let db = setup_shop_schema_db().await?;

        let dashboard = load_dashboard(&db, 5).await.unwrap();
        assert_eq!(dashboard.stats.visits, 2);
        assert_eq!(dashboard.stats.total_spend, 125.5);
        assert_eq!(dashboard.stats.average_ticket, 62.75);
        assert_eq!(dashboard.segment, Segment::Professional);

        let totals: Vec<_> = dashboard.sales.iter().map(|s| s.total).collect();
        assert_eq!(totals, vec![80.5, 45.0]);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_dashboard_whole_amount_ticket() -> Result<()> {
        let db = setup_shop_schema_db().await?;

        let dashboard = load_dashboard(&db, 6).await.unwrap();
        assert_eq!(dashboard.stats.total_spend, 12.0);
        assert_eq!(dashboard.segment, Segment::Unclassified);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_dashboard_storage_failure() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("no such table: ventas".to_string())])
            .into_connection();

        let err = load_dashboard(&db, 1).await.unwrap_err();
        assert!(matches!(err, DashboardError::Load(_)));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(
            format_sales_history(&[]).unwrap(),
            "Aún no tienes visitas registradas."
        );

        let sales = vec![sale::Model {
            id: 1,
            customer_id: 1,
            date: date(2026, 9, 20),
            total: 70.5,
        }];
        let history = format_sales_history(&sales).unwrap();
        assert!(history.contains("2026-09-20"));
        assert!(history.contains("$70.50"));
    }

    #[test]
    fn test_format_projection_includes_tier_message() {
        let text = format_projection(&project_points(40, 2).unwrap());
        assert!(text.contains("60 puntos"));
        assert!(text.contains("20% de descuento"));

        let text = format_projection(&project_points(0, 1).unwrap());
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_format_currency_drops_decimals() {
        assert_eq!(format_currency(62.4), "$62");
        assert_eq!(format_currency(118.0), "$118");
        assert_eq!(format_currency(0.0), "$0");
    }
}
