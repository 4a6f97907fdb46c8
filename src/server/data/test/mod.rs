mod budget;
mod expense;
mod notification;
mod product;
mod recovery_code;
mod store;
mod todo;
mod tracked_product;
mod user;
mod user_token;
