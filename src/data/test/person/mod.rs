use crate::{
    data::person::PersonRepository,
    model::person::{Role, UpsertPersonParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod roles;
mod upsert;
