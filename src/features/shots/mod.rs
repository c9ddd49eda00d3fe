//! Individual shots played on a hole.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/shots` | Yes | List shots |
//! | GET | `/api/shots/{id}` | Yes | Get shot |
//! | GET | `/api/shots/hole-stats/{holeStatsId}/ids` | Yes | Shot ids of one hole |
//! | POST | `/api/shots` | Yes | Create (scorecard owner or admin) |
//! | PUT | `/api/shots/{id}` | Yes | Partial update (scorecard owner or admin) |
//! | DELETE | `/api/shots/{id}` | Yes | Delete (scorecard owner or admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ShotService;
