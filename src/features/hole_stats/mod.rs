//! Per-hole statistics of a scorecard.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/hole-stats?scorecardId=` | Yes | Hole statistics of one scorecard |
//! | GET | `/api/hole-stats/{id}` | Yes | Get with shots |
//! | POST | `/api/hole-stats` | Yes | Create (scorecard owner or admin) |
//! | PUT | `/api/hole-stats/{id}` | Yes | Partial update (scorecard owner or admin) |
//! | DELETE | `/api/hole-stats/{id}` | Yes | Delete (scorecard owner or admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HoleStatsService;
