use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stores.
pub struct StoreFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
    website: Option<String>,
}

impl<'a> StoreFactory<'a> {
    /// Defaults: name `"Store {id}"`, no address, no website.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Store {}", next_id()),
            address: None,
            website: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub async fn build(self) -> Result<entity::store::Model, DbErr> {
        entity::store::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            website: ActiveValue::Set(self.website),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_store(db: &DatabaseConnection) -> Result<entity::store::Model, DbErr> {
    StoreFactory::new(db).build().await
}
