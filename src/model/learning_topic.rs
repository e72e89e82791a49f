//! Learning topic domain models and parameters.

use crate::dto::learning_topic::{
    CreateLearningTopicDto, LearningTopicDto, PaginatedLearningTopicsDto, UpdateLearningTopicDto,
};

/// Learning topic attached to a speciality's curriculum.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningTopic {
    pub id: i32,
    pub speciality_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl LearningTopic {
    pub fn into_dto(self) -> LearningTopicDto {
        LearningTopicDto {
            id: self.id,
            speciality_id: self.speciality_id,
            name: self.name,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::learning_topic::Model) -> Self {
        Self {
            id: entity.id,
            speciality_id: entity.speciality_id,
            name: entity.name,
            description: entity.description,
        }
    }
}

/// Parameters for creating a learning topic under a speciality.
#[derive(Debug, Clone)]
pub struct CreateLearningTopicParams {
    pub speciality_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl CreateLearningTopicParams {
    pub fn from_dto(speciality_id: i32, dto: CreateLearningTopicDto) -> Self {
        Self {
            speciality_id,
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Parameters for updating a learning topic.
#[derive(Debug, Clone)]
pub struct UpdateLearningTopicParams {
    pub id: i32,
    pub speciality_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl UpdateLearningTopicParams {
    pub fn from_dto(id: i32, speciality_id: i32, dto: UpdateLearningTopicDto) -> Self {
        Self {
            id,
            speciality_id,
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Paginated collection of learning topics with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedLearningTopics {
    pub topics: Vec<LearningTopic>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedLearningTopics {
    pub fn into_dto(self) -> PaginatedLearningTopicsDto {
        PaginatedLearningTopicsDto {
            topics: self.topics.into_iter().map(|t| t.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
