//! Holes of a course.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/holes` | Yes | List holes |
//! | GET | `/api/holes/{id}` | Yes | Get hole |
//! | GET | `/api/holes/course/{courseId}/number/{holeNumber}` | Yes | Look up by course and number |
//! | POST | `/api/holes` | Yes | Create |
//! | POST | `/api/holes/multi` | Yes | Create several, skipping existing numbers |
//! | PUT | `/api/holes/{id}` | Yes | Partial update |
//! | DELETE | `/api/holes/{id}` | Yes | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HoleService;
