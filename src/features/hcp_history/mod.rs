//! Handicap history: one dated handicap entry per change.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/hcp-history/{id}` | Yes | Get an entry |
//! | POST | `/api/hcp-history` | Owner/Admin | Record an entry |
//! | PUT | `/api/hcp-history/{id}` | Owner/Admin | Update an entry |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HcpHistoryService;
