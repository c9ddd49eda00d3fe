//! Golf establishments (the venue), each holding one or more courses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/establishments` | Yes | List with courses and tees |
//! | GET | `/api/establishments/{id}` | Yes | Get with courses and tees |
//! | GET | `/api/establishments/location/{lng}/{lat}` | Yes | Nearby, nearest first |
//! | POST | `/api/establishments` | Yes | Create |
//! | PUT | `/api/establishments/{id}` | Yes | Partial update |
//! | DELETE | `/api/establishments/{id}` | Yes | Delete (cascades to courses) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::EstablishmentService;
