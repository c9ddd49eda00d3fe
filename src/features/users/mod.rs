//! Player accounts.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/users` | No | Register |
//! | GET | `/api/users` | Yes | List users (paginated) |
//! | GET/PUT/DELETE | `/api/users/me` | Yes | Own profile |
//! | GET | `/api/users/{id}` | Yes | Get user |
//! | PUT | `/api/users/{id}` | Self/Admin | Update user, bag and handicap |
//! | DELETE | `/api/users/{id}` | Admin | Delete user |
//! | GET | `/api/users/{id}/hcp-history` | Yes | Handicap history |
//! | GET | `/api/users/{id}/clubs` | Yes | All clubs of the user |
//! | GET | `/api/users/{id}/clubs/in-bag` | Yes | Clubs in the bag |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
