pub use super::expense::Entity as Expense;
pub use super::monthly_budget::Entity as MonthlyBudget;
pub use super::notification::Entity as Notification;
pub use super::price::Entity as Price;
pub use super::product::Entity as Product;
pub use super::recovery_code::Entity as RecoveryCode;
pub use super::store::Entity as Store;
pub use super::todo_item::Entity as TodoItem;
pub use super::tracked_product::Entity as TrackedProduct;
pub use super::user::Entity as User;
pub use super::user_token::Entity as UserToken;
