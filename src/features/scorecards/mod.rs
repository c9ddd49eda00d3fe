//! Scorecards: one round played by a user from one tee.
//!
//! Responses aggregate the round: tee and course data, total par and
//! score, per-hole statistics with shots, and counters over all holes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/scorecards?userId=&page=&pageSize=` | Yes | Paginated, newest first |
//! | GET | `/api/scorecards/{id}` | Yes | Get aggregated scorecard |
//! | POST | `/api/scorecards` | Yes | Create with holes and shots (caller owns it) |
//! | PUT | `/api/scorecards/{id}` | Yes | Partial update (owner or admin) |
//! | DELETE | `/api/scorecards/{id}` | Yes | Delete (owner or admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ScorecardService;
