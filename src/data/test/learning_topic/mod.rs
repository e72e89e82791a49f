use crate::{
    data::learning_topic::LearningTopicRepository,
    model::learning_topic::{CreateLearningTopicParams, UpdateLearningTopicParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
mod get_by_speciality_paginated;
