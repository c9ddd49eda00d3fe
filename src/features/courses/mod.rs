//! Courses of an establishment.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/courses` | Yes | List with tees and their lengths |
//! | GET | `/api/courses/{id}` | Yes | Get with tees and their lengths |
//! | POST | `/api/courses` | Yes | Create |
//! | PUT | `/api/courses/{id}` | Yes | Partial update |
//! | DELETE | `/api/courses/{id}` | Yes | Delete (cascades to tees and holes) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CourseService;
