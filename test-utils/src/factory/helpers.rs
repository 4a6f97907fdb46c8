//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a store, a product and one price observation linking them.
///
/// # Returns
/// - `Ok((store, product, price))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_price_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::store::Model,
        entity::product::Model,
        entity::price::Model,
    ),
    DbErr,
> {
    let store = crate::factory::store::create_store(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let price = crate::factory::price::create_price(db, product.id, store.id).await?;

    Ok((store, product, price))
}
