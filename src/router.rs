use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, auth, campaign, intern, learning_topic, mentor, speciality},
    middleware::auth::authenticate,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_me,
        campaign::create_campaign,
        campaign::get_campaigns,
        campaign::get_campaign_by_id,
        campaign::update_campaign,
        campaign::delete_campaign,
        speciality::create_speciality,
        speciality::get_specialities,
        speciality::get_speciality_by_id,
        speciality::update_speciality,
        speciality::delete_speciality,
        learning_topic::create_learning_topic,
        learning_topic::get_learning_topics,
        learning_topic::get_learning_topic_by_id,
        learning_topic::update_learning_topic,
        learning_topic::delete_learning_topic,
        mentor::create_mentor,
        mentor::get_mentors,
        mentor::get_mentor_by_id,
        mentor::update_mentor,
        mentor::delete_mentor,
        intern::create_intern,
        intern::get_interns,
        intern::get_intern_by_id,
        intern::update_intern,
        intern::delete_intern,
        admin::get_admins,
        admin::invite_admin,
        admin::revoke_admin,
    ),
    tags(
        (name = "auth", description = "Authentication and provisioning"),
        (name = "campaign", description = "Internship campaign management"),
        (name = "speciality", description = "Speciality management"),
        (name = "learning-topic", description = "Learning topics within specialities"),
        (name = "mentor", description = "Mentor management"),
        (name = "intern", description = "Intern enrollment within campaigns"),
        (name = "admin", description = "Administrator management")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/api` route sits behind the bearer token middleware; the Swagger
/// UI stays public.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/auth/me", get(auth::get_me))
        .route("/api/campaigns", post(campaign::create_campaign))
        .route("/api/campaigns", get(campaign::get_campaigns))
        .route("/api/campaigns/{campaign_id}", get(campaign::get_campaign_by_id))
        .route("/api/campaigns/{campaign_id}", put(campaign::update_campaign))
        .route("/api/campaigns/{campaign_id}", delete(campaign::delete_campaign))
        .route("/api/campaigns/{campaign_id}/interns", post(intern::create_intern))
        .route("/api/campaigns/{campaign_id}/interns", get(intern::get_interns))
        .route(
            "/api/campaigns/{campaign_id}/interns/{intern_id}",
            get(intern::get_intern_by_id),
        )
        .route(
            "/api/campaigns/{campaign_id}/interns/{intern_id}",
            put(intern::update_intern),
        )
        .route(
            "/api/campaigns/{campaign_id}/interns/{intern_id}",
            delete(intern::delete_intern),
        )
        .route("/api/specialities", post(speciality::create_speciality))
        .route("/api/specialities", get(speciality::get_specialities))
        .route(
            "/api/specialities/{speciality_id}",
            get(speciality::get_speciality_by_id),
        )
        .route(
            "/api/specialities/{speciality_id}",
            put(speciality::update_speciality),
        )
        .route(
            "/api/specialities/{speciality_id}",
            delete(speciality::delete_speciality),
        )
        .route(
            "/api/specialities/{speciality_id}/topics",
            post(learning_topic::create_learning_topic),
        )
        .route(
            "/api/specialities/{speciality_id}/topics",
            get(learning_topic::get_learning_topics),
        )
        .route(
            "/api/specialities/{speciality_id}/topics/{topic_id}",
            get(learning_topic::get_learning_topic_by_id),
        )
        .route(
            "/api/specialities/{speciality_id}/topics/{topic_id}",
            put(learning_topic::update_learning_topic),
        )
        .route(
            "/api/specialities/{speciality_id}/topics/{topic_id}",
            delete(learning_topic::delete_learning_topic),
        )
        .route("/api/mentors", post(mentor::create_mentor))
        .route("/api/mentors", get(mentor::get_mentors))
        .route("/api/mentors/{mentor_id}", get(mentor::get_mentor_by_id))
        .route("/api/mentors/{mentor_id}", put(mentor::update_mentor))
        .route("/api/mentors/{mentor_id}", delete(mentor::delete_mentor))
        .route("/api/admins", get(admin::get_admins))
        .route("/api/admins/invitations", post(admin::invite_admin))
        .route("/api/admins/{person_id}", delete(admin::revoke_admin))
        .layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .with_state(state)
}
