//! Club catalogue (driver, 7 iron, putter, ...).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/clubs` | Yes | List clubs |
//! | GET | `/api/clubs/{id}` | Yes | Get club |
//! | POST | `/api/clubs` | Yes | Create club |
//! | PUT | `/api/clubs/{id}` | Yes | Rename club |
//! | DELETE | `/api/clubs/{id}` | Yes | Delete club |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ClubService;
