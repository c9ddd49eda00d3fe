//! Length and par of a hole as played from one tee.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/hole-lengths` | Yes | List |
//! | GET | `/api/hole-lengths/{id}` | Yes | Get |
//! | POST | `/api/hole-lengths` | Yes | Create |
//! | PUT | `/api/hole-lengths/{id}` | Yes | Partial update |
//! | DELETE | `/api/hole-lengths/{id}` | Yes | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HoleLengthService;
