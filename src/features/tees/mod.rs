//! Tees of a course, with hole-length totals.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/tees` | Yes | List with course length, par and hole lengths |
//! | GET | `/api/tees/{id}` | Yes | Get with course length, par and hole lengths |
//! | GET | `/api/tees/course/{courseId}` | Yes | Plain tees of one course |
//! | POST | `/api/tees` | Yes | Create |
//! | PUT | `/api/tees/{id}` | Yes | Partial update |
//! | DELETE | `/api/tees/{id}` | Yes | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TeeService;
