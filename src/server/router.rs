use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        account, admin, auth, budget, expense, notification, price, product, store, todo,
        tracking, two_factor,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pricebook API", description = "Price tracking, expenses and to-dos"),
    tags(
        (name = "auth", description = "Registration, sign-in and password recovery"),
        (name = "two-factor", description = "Authenticator app two-factor authentication"),
        (name = "account", description = "Profile and account management"),
        (name = "admin", description = "User administration"),
        (name = "store", description = "Stores"),
        (name = "product", description = "Product catalog"),
        (name = "price", description = "Recorded prices"),
        (name = "tracking", description = "Tracked products and price alerts"),
        (name = "expense", description = "Personal expenses"),
        (name = "budget", description = "Monthly budgets"),
        (name = "todo", description = "To-do items"),
        (name = "notification", description = "In-app notifications"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::confirm_email))
        .routes(routes!(auth::resend_confirmation))
        .routes(routes!(auth::login))
        .routes(routes!(auth::login_with_2fa))
        .routes(routes!(auth::login_with_recovery_code))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::forgot_password))
        .routes(routes!(auth::reset_password))
        .routes(routes!(auth::get_user))
        .routes(routes!(two_factor::get_status))
        .routes(routes!(two_factor::get_authenticator_setup))
        .routes(routes!(two_factor::enable))
        .routes(routes!(two_factor::disable))
        .routes(routes!(two_factor::reset_authenticator))
        .routes(routes!(two_factor::regenerate_recovery_codes))
        .routes(routes!(account::get_profile, account::delete_account))
        .routes(routes!(account::change_password))
        .routes(routes!(account::change_email))
        .routes(routes!(admin::get_all_users))
        .routes(routes!(admin::set_admin))
        .routes(routes!(store::get_stores, store::create_store))
        .routes(routes!(
            store::get_store,
            store::update_store,
            store::delete_store
        ))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(
            product::get_product,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(price::record_price))
        .routes(routes!(price::get_price_history))
        .routes(routes!(price::delete_price))
        .routes(routes!(tracking::get_tracked_products))
        .routes(routes!(tracking::track_product, tracking::untrack_product))
        .routes(routes!(expense::get_expenses, expense::create_expense))
        .routes(routes!(expense::update_expense, expense::delete_expense))
        .routes(routes!(budget::get_budgets, budget::set_budget))
        .routes(routes!(budget::get_budget_summary))
        .routes(routes!(budget::delete_budget))
        .routes(routes!(todo::get_todos, todo::create_todo))
        .routes(routes!(todo::update_todo, todo::delete_todo))
        .routes(routes!(todo::complete_todo))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_read))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(notification::delete_notification))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
