//! Price observations and price alerts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification::NotificationRepository, price::PriceRepository,
        product::ProductRepository, store::StoreRepository,
        tracked_product::TrackedProductRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        catalog::Product,
        notification::{CreateNotificationParams, NotificationKind},
        price::{Price, PriceHistoryQuery},
    },
    service::email::{template::EmailTemplate, EmailService},
    util::money,
    validation::catalog::PriceBuilder,
};

pub struct PriceService<'a> {
    db: &'a DatabaseConnection,
    email: &'a EmailService,
}

impl<'a> PriceService<'a> {
    pub fn new(db: &'a DatabaseConnection, email: &'a EmailService) -> Self {
        Self { db, email }
    }

    /// Records a price observation and alerts users whose target it meets.
    ///
    /// # Returns
    /// - `Ok(Price)` - Recorded price
    /// - `Err(AppError::ValidationErr)` - Amount or date rejected
    /// - `Err(AppError::NotFound)` - Product or store does not exist
    /// - `Err(AppError::Conflict)` - Price already recorded for that product, store and day
    pub async fn record(&self, builder: PriceBuilder) -> Result<Price, AppError> {
        let params = builder.build()?;
        let price_repo = PriceRepository::new(self.db);

        let product = ProductRepository::new(self.db)
            .find_by_id(params.product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
        if StoreRepository::new(self.db)
            .find_by_id(params.store_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Store not found".to_string()));
        }

        if price_repo
            .exists(params.product_id, params.store_id, params.recorded_on)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A price for this product and store is already recorded on {}",
                params.recorded_on
            )));
        }

        let price = price_repo.create(params).await?;
        tracing::debug!(
            "Recorded price {} for product {} at store {}",
            price.id,
            price.product_id,
            price.store_id
        );

        self.send_price_alerts(&product, &price).await?;

        Ok(price)
    }

    /// Price history for a product, ordered by date then store.
    pub async fn history(
        &self,
        product_id: i32,
        query: PriceHistoryQuery,
    ) -> Result<Vec<Price>, AppError> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "'from' must not be after 'to'".to_string(),
                ));
            }
        }

        if ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(PriceRepository::new(self.db)
            .get_history(product_id, &query)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = PriceRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Price not found".to_string()));
        }
        Ok(())
    }

    /// Notifies every tracker whose target price is at or above the new price.
    ///
    /// Email delivery problems are logged; notifications are always stored.
    async fn send_price_alerts(&self, product: &Product, price: &Price) -> Result<(), AppError> {
        let targets = TrackedProductRepository::new(self.db)
            .find_alert_targets(price.product_id, price.amount_cents)
            .await?;

        let notification_repo = NotificationRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let amount = money::from_cents(price.amount_cents);

        for tracked in targets {
            let Some(target_cents) = tracked.target_price_cents else {
                continue;
            };
            let target = money::from_cents(target_cents);

            notification_repo
                .create(CreateNotificationParams {
                    user_id: tracked.user_id,
                    todo_item_id: None,
                    kind: NotificationKind::PriceAlert,
                    message: format!(
                        "{} is {} at {} (your target: {})",
                        product.name, amount, price.store_name, target
                    ),
                })
                .await?;

            if let Some(user) = user_repo.find_by_id(tracked.user_id).await? {
                self.email
                    .send_or_log(
                        &user.email,
                        EmailTemplate::PriceAlert {
                            username: user.username,
                            product_name: product.name.clone(),
                            store_name: price.store_name.clone(),
                            amount,
                            target,
                        },
                    )
                    .await;
            }
        }

        Ok(())
    }
}
