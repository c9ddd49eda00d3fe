use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::clubs::{dtos as clubs_dtos, handlers as clubs_handlers};
use crate::features::courses::{dtos as courses_dtos, handlers as courses_handlers};
use crate::features::establishments::{
    dtos as establishments_dtos, handlers as establishments_handlers,
};
use crate::features::hcp_history::{dtos as hcp_history_dtos, handlers as hcp_history_handlers};
use crate::features::hole_lengths::{dtos as hole_lengths_dtos, handlers as hole_lengths_handlers};
use crate::features::hole_stats::{dtos as hole_stats_dtos, handlers as hole_stats_handlers};
use crate::features::holes::{dtos as holes_dtos, handlers as holes_handlers};
use crate::features::scorecards::{
    dtos as scorecards_dtos, handlers as scorecards_handlers, models as scorecards_models,
};
use crate::features::shots::{
    dtos as shots_dtos, handlers as shots_handlers, models as shots_models,
};
use crate::features::tees::{dtos as tees_dtos, handlers as tees_handlers};
use crate::features::type_of_shots::{
    dtos as type_of_shots_dtos, handlers as type_of_shots_handlers,
};
use crate::features::user_clubs::{dtos as user_clubs_dtos, handlers as user_clubs_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::geo::{GeoPoint, PointKind};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::get_me,
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::update_me,
        users_handlers::delete_user,
        users_handlers::delete_me,
        users_handlers::get_user_hcp_history,
        users_handlers::get_user_clubs,
        users_handlers::get_user_clubs_in_bag,
        // Handicap history
        hcp_history_handlers::get_hcp_history,
        hcp_history_handlers::create_hcp_history,
        hcp_history_handlers::update_hcp_history,
        // Clubs
        clubs_handlers::list_clubs,
        clubs_handlers::get_club,
        clubs_handlers::create_club,
        clubs_handlers::update_club,
        clubs_handlers::delete_club,
        // User clubs
        user_clubs_handlers::list_user_clubs,
        user_clubs_handlers::get_user_club,
        user_clubs_handlers::create_user_club,
        user_clubs_handlers::update_user_club,
        user_clubs_handlers::delete_user_club,
        // Establishments
        establishments_handlers::list_establishments,
        establishments_handlers::get_establishment,
        establishments_handlers::find_establishments_nearby,
        establishments_handlers::create_establishment,
        establishments_handlers::update_establishment,
        establishments_handlers::delete_establishment,
        // Courses
        courses_handlers::list_courses,
        courses_handlers::get_course,
        courses_handlers::create_course,
        courses_handlers::update_course,
        courses_handlers::delete_course,
        // Tees
        tees_handlers::list_tees,
        tees_handlers::get_tee,
        tees_handlers::list_tees_by_course,
        tees_handlers::create_tee,
        tees_handlers::update_tee,
        tees_handlers::delete_tee,
        // Holes
        holes_handlers::list_holes,
        holes_handlers::get_hole,
        holes_handlers::get_hole_by_course_and_number,
        holes_handlers::create_hole,
        holes_handlers::create_holes,
        holes_handlers::update_hole,
        holes_handlers::delete_hole,
        // Hole lengths
        hole_lengths_handlers::list_hole_lengths,
        hole_lengths_handlers::get_hole_length,
        hole_lengths_handlers::create_hole_length,
        hole_lengths_handlers::update_hole_length,
        hole_lengths_handlers::delete_hole_length,
        // Types of shot
        type_of_shots_handlers::list_type_of_shots,
        type_of_shots_handlers::get_type_of_shot,
        type_of_shots_handlers::create_type_of_shot,
        type_of_shots_handlers::update_type_of_shot,
        type_of_shots_handlers::delete_type_of_shot,
        // Scorecards
        scorecards_handlers::list_scorecards,
        scorecards_handlers::get_scorecard,
        scorecards_handlers::create_scorecard,
        scorecards_handlers::update_scorecard,
        scorecards_handlers::delete_scorecard,
        // Hole stats
        hole_stats_handlers::list_hole_stats,
        hole_stats_handlers::get_hole_stats,
        hole_stats_handlers::create_hole_stats,
        hole_stats_handlers::update_hole_stats,
        hole_stats_handlers::delete_hole_stats,
        // Shots
        shots_handlers::list_shots,
        shots_handlers::get_shot,
        shots_handlers::list_shot_ids_by_hole_stats,
        shots_handlers::create_shot,
        shots_handlers::update_shot,
        shots_handlers::delete_shot,
    ),
    components(
        schemas(
            // Shared
            Meta,
            GeoPoint,
            PointKind,
            // Auth
            auth::model::UserRole,
            auth::model::AuthenticatedUser,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            ApiResponse<auth::model::AuthenticatedUser>,
            ApiResponse<auth::dtos::AuthResponseDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::BagClubDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Handicap history
            hcp_history_dtos::CreateHcpHistoryDto,
            hcp_history_dtos::UpdateHcpHistoryDto,
            hcp_history_dtos::HcpHistoryResponseDto,
            ApiResponse<hcp_history_dtos::HcpHistoryResponseDto>,
            ApiResponse<Vec<hcp_history_dtos::HcpHistoryResponseDto>>,
            // Clubs
            clubs_dtos::CreateClubDto,
            clubs_dtos::UpdateClubDto,
            clubs_dtos::ClubResponseDto,
            ApiResponse<clubs_dtos::ClubResponseDto>,
            ApiResponse<Vec<clubs_dtos::ClubResponseDto>>,
            // User clubs
            user_clubs_dtos::CreateUserClubDto,
            user_clubs_dtos::UpdateUserClubDto,
            user_clubs_dtos::UserClubResponseDto,
            ApiResponse<user_clubs_dtos::UserClubResponseDto>,
            ApiResponse<Vec<user_clubs_dtos::UserClubResponseDto>>,
            // Establishments
            establishments_dtos::CreateEstablishmentDto,
            establishments_dtos::UpdateEstablishmentDto,
            establishments_dtos::EstablishmentCourseDto,
            establishments_dtos::EstablishmentResponseDto,
            ApiResponse<establishments_dtos::EstablishmentResponseDto>,
            ApiResponse<Vec<establishments_dtos::EstablishmentResponseDto>>,
            // Courses
            courses_dtos::CreateCourseDto,
            courses_dtos::UpdateCourseDto,
            courses_dtos::CourseResponseDto,
            ApiResponse<courses_dtos::CourseResponseDto>,
            ApiResponse<Vec<courses_dtos::CourseResponseDto>>,
            // Tees
            tees_dtos::CreateTeeDto,
            tees_dtos::UpdateTeeDto,
            tees_dtos::TeeSummaryDto,
            tees_dtos::TeeHoleLengthDto,
            tees_dtos::TeeDto,
            tees_dtos::TeeResponseDto,
            ApiResponse<tees_dtos::TeeResponseDto>,
            ApiResponse<Vec<tees_dtos::TeeResponseDto>>,
            ApiResponse<Vec<tees_dtos::TeeDto>>,
            // Holes
            holes_dtos::CreateHoleDto,
            holes_dtos::UpdateHoleDto,
            holes_dtos::CreateHolesDto,
            holes_dtos::SkippedHoleDto,
            holes_dtos::CreateHolesResponseDto,
            holes_dtos::HoleResponseDto,
            ApiResponse<holes_dtos::HoleResponseDto>,
            ApiResponse<Vec<holes_dtos::HoleResponseDto>>,
            ApiResponse<holes_dtos::CreateHolesResponseDto>,
            // Hole lengths
            hole_lengths_dtos::CreateHoleLengthDto,
            hole_lengths_dtos::UpdateHoleLengthDto,
            hole_lengths_dtos::HoleLengthResponseDto,
            ApiResponse<hole_lengths_dtos::HoleLengthResponseDto>,
            ApiResponse<Vec<hole_lengths_dtos::HoleLengthResponseDto>>,
            // Types of shot
            type_of_shots_dtos::TypeOfShotRequestDto,
            type_of_shots_dtos::TypeOfShotResponseDto,
            ApiResponse<type_of_shots_dtos::TypeOfShotResponseDto>,
            ApiResponse<Vec<type_of_shots_dtos::TypeOfShotResponseDto>>,
            // Scorecards
            scorecards_models::RoundType,
            scorecards_dtos::CreateScorecardDto,
            scorecards_dtos::UpdateScorecardDto,
            scorecards_dtos::ScorecardTeeDto,
            scorecards_dtos::ScorecardStatsDto,
            scorecards_dtos::ScorecardResponseDto,
            ApiResponse<scorecards_dtos::ScorecardResponseDto>,
            ApiResponse<Vec<scorecards_dtos::ScorecardResponseDto>>,
            // Hole stats
            hole_stats_dtos::HoleStatsInputDto,
            hole_stats_dtos::CreateHoleStatsDto,
            hole_stats_dtos::ScorecardHoleDto,
            hole_stats_dtos::UpdateHoleStatsDto,
            hole_stats_dtos::HoleStatsResponseDto,
            hole_stats_dtos::HoleStatsDetailDto,
            ApiResponse<hole_stats_dtos::HoleStatsResponseDto>,
            ApiResponse<Vec<hole_stats_dtos::HoleStatsResponseDto>>,
            ApiResponse<hole_stats_dtos::HoleStatsDetailDto>,
            // Shots
            shots_models::ShotDirection,
            shots_models::ShotDistance,
            shots_dtos::ShotInputDto,
            shots_dtos::CreateShotDto,
            shots_dtos::UpdateShotDto,
            shots_dtos::ShotResponseDto,
            shots_dtos::ShotDetailDto,
            ApiResponse<shots_dtos::ShotResponseDto>,
            ApiResponse<Vec<shots_dtos::ShotResponseDto>>,
            ApiResponse<Vec<i64>>,
        )
    ),
    tags(
        (name = "auth", description = "Login and token inspection"),
        (name = "users", description = "Players, registration and profiles"),
        (name = "hcp-history", description = "Handicap history entries"),
        (name = "clubs", description = "Club catalogue"),
        (name = "user-clubs", description = "Clubs in a player's bag with shot counters"),
        (name = "establishments", description = "Golf venues and nearby search"),
        (name = "courses", description = "Courses of an establishment"),
        (name = "tees", description = "Tees with ratings, lengths and par"),
        (name = "holes", description = "Holes of a course"),
        (name = "hole-lengths", description = "Length and par per hole and tee"),
        (name = "type-of-shots", description = "Shot type catalogue"),
        (name = "scorecards", description = "Rounds with aggregated statistics"),
        (name = "hole-stats", description = "Per-hole statistics of a round"),
        (name = "shots", description = "Individual shots"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Golf Scorekeeper API",
        version = "0.1.0",
        description = "Courses, scorecards and shot tracking",
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_document_lists_feature_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/users/{id}",
            "/api/establishments/location/{lng}/{lat}",
            "/api/holes/multi",
            "/api/scorecards/{id}",
            "/api/shots/hole-stats/{hole_stats_id}/ids",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Club API".to_string(),
            version: "2.0.0".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Club API");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
