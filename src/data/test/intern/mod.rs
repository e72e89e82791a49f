use crate::{
    data::intern::InternRepository,
    model::intern::{CreateInternParams, UpdateInternParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod update;
