//! Local email/password login issuing HS256 access tokens.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Exchange credentials for a token |
//! | GET | `/api/auth/me` | Yes | The principal behind the token |

mod validator;

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod password;
pub mod routes;
pub mod services;

pub use validator::JwtValidator;
