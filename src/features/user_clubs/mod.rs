//! The player's bag: which clubs a player owns and per-club shot counters.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/user-clubs` | Yes | List all bag entries |
//! | GET | `/api/user-clubs/{id}` | Yes | Get a bag entry |
//! | POST | `/api/user-clubs` | Owner/Admin | Add a club to a bag |
//! | PUT | `/api/user-clubs/{id}` | Owner/Admin | Update in-bag flag and counters |
//! | DELETE | `/api/user-clubs/{id}` | Owner/Admin | Remove a bag entry |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserClubService;
