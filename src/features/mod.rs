pub mod auth;
pub mod clubs;
pub mod courses;
pub mod establishments;
pub mod hcp_history;
pub mod hole_lengths;
pub mod hole_stats;
pub mod holes;
pub mod scorecards;
pub mod shots;
pub mod tees;
pub mod type_of_shots;
pub mod user_clubs;
pub mod users;
