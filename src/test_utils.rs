//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases and inserting customers and sales
//! the way the registration and point-of-sale processes would.

use crate::{
    entities::{customer, sale},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Balance of customer 5 in [`setup_shop_schema_db`].
pub const SHOP_CUSTOMER_POINTS: i32 = 40;

/// Tables as the shop's registration and point-of-sale processes create them: loose
/// column types, nullable text, `numeric` totals and no surrogate keys on `ventas` or
/// `sugerencias`.
const SHOP_SCHEMA: [&str; 3] = [
    "CREATE TABLE clientes (
        id INTEGER PRIMARY KEY,
        nombre TEXT,
        email TEXT,
        telefono TEXT,
        direccion TEXT,
        edad INTEGER,
        sexo TEXT,
        preferencias TEXT,
        puntos_lealtad INTEGER,
        ultima_visita DATE,
        cluster INTEGER
    )",
    "CREATE TABLE ventas (
        cliente_id INTEGER REFERENCES clientes(id),
        fecha DATE,
        total NUMERIC
    )",
    "CREATE TABLE sugerencias (
        cliente_id INTEGER REFERENCES clientes(id),
        texto TEXT,
        fecha DATE
    )",
];

const SHOP_ROWS: [&str; 5] = [
    "INSERT INTO clientes VALUES
        (5, 'Carla', NULL, NULL, NULL, 34, NULL, NULL, 40, '2026-01-10', 1)",
    "INSERT INTO clientes VALUES
        (6, 'Diego', 'diego@example.com', '555-0101', 'Centro 3', 52, 'Masculino', 'Amargo', 0, NULL, NULL)",
    "INSERT INTO ventas VALUES (5, '2026-02-01', 45)",
    "INSERT INTO ventas VALUES (5, '2026-03-15', 80.5)",
    "INSERT INTO ventas VALUES (6, '2026-03-20', 12)",
];

/// Creates an in-memory database laid out like an existing shop database.
///
/// Customer 5 (Carla) has NULL `sexo`/`preferencias`/contact fields, cluster 1 and two
/// sales: 45 stored as INTEGER and 80.5 stored as REAL. Customer 6 (Diego) has one sale.
pub async fn setup_shop_schema_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    for sql in SHOP_SCHEMA.iter().chain(SHOP_ROWS.iter()) {
        db.execute_unprepared(sql).await?;
    }
    Ok(db)
}

/// Builds a customer row without touching the database.
///
/// # Defaults
/// * `email`: `"{name}@example.com"` lowercased
/// * `phone`, `address`: set
/// * `age`: 30
/// * `sex`: `Some("F")`
/// * `preference`: `Some("Dulce")`
/// * `last_visit`: None
/// * `cluster`: -1
#[must_use]
pub fn customer_fixture(id: i64, name: &str, loyalty_points: i32) -> customer::Model {
    customer::Model {
        id,
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: Some("555-0100".to_string()),
        address: Some("Av. Reforma 10".to_string()),
        age: 30,
        sex: Some("F".to_string()),
        preference: Some("Dulce".to_string()),
        loyalty_points,
        last_visit: None,
        cluster: Some(-1),
    }
}

/// Inserts a customer built by [`customer_fixture`].
pub async fn create_test_customer(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    loyalty_points: i32,
) -> Result<customer::Model> {
    insert_customer(db, customer_fixture(id, name, loyalty_points)).await
}

/// Inserts an arbitrary customer row.
pub async fn insert_customer(
    db: &DatabaseConnection,
    model: customer::Model,
) -> Result<customer::Model> {
    let active = customer::ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        email: Set(model.email),
        phone: Set(model.phone),
        address: Set(model.address),
        age: Set(model.age),
        sex: Set(model.sex),
        preference: Set(model.preference),
        loyalty_points: Set(model.loyalty_points),
        last_visit: Set(model.last_visit),
        cluster: Set(model.cluster),
    };
    Ok(active.insert(db).await?)
}

/// Inserts a sale for a customer.
pub async fn create_test_sale(
    db: &DatabaseConnection,
    customer_id: i64,
    date: NaiveDate,
    total: f64,
) -> Result<sale::Model> {
    let active = sale::ActiveModel {
        customer_id: Set(customer_id),
        date: Set(date),
        total: Set(total),
        ..Default::default()
    };
    Ok(active.insert(db).await?)
}

/// Shorthand for building dates in tests.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Sets up a database with one registered customer.
/// Returns (db, customer) for common test scenarios.
pub async fn setup_with_customer() -> Result<(DatabaseConnection, customer::Model)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, 1001, "Ana", 40).await?;
    Ok((db, customer))
}
