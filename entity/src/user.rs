//! Registered application user with credentials and two-factor state.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    pub admin: bool,
    pub two_factor_enabled: bool,
    /// Base32 TOTP shared secret, present once the authenticator has been set up.
    pub authenticator_key: Option<String>,
    pub access_failed_count: i32,
    pub lockout_end: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_token::Entity")]
    UserToken,
    #[sea_orm(has_many = "super::recovery_code::Entity")]
    RecoveryCode,
    #[sea_orm(has_many = "super::tracked_product::Entity")]
    TrackedProduct,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
    #[sea_orm(has_many = "super::monthly_budget::Entity")]
    MonthlyBudget,
    #[sea_orm(has_many = "super::todo_item::Entity")]
    TodoItem,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::user_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserToken.def()
    }
}

impl Related<super::recovery_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecoveryCode.def()
    }
}

impl Related<super::tracked_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackedProduct.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl Related<super::monthly_budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyBudget.def()
    }
}

impl Related<super::todo_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoItem.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
