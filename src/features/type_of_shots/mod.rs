//! Shot types (tee shot, approach, chip, putt, ...), referenced by shots.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/type-of-shots` | Yes | List shot types |
//! | GET | `/api/type-of-shots/{id}` | Yes | Get shot type |
//! | POST | `/api/type-of-shots` | Yes | Create shot type |
//! | PUT | `/api/type-of-shots/{id}` | Yes | Rename shot type |
//! | DELETE | `/api/type-of-shots/{id}` | Yes | Delete shot type |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TypeOfShotService;
