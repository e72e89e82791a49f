use crate::data::speciality::SpecialityRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod get_by_id;
mod missing_ids;
mod update;
