use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, service::store::StoreService, validation::catalog::StoreBuilder,
};

mod create;

fn store(name: &str) -> StoreBuilder {
    StoreBuilder::new().name(name)
}
