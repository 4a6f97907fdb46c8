use crate::server::{
    data::product::ProductRepository,
    model::catalog::{ProductParams, ProductQuery},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
