//! HTTP request layer.
//!
//! An explicit routing table maps each endpoint to its handler:
//!
//! | Method | Path                       | Handler                    |
//! |--------|----------------------------|----------------------------|
//! | GET    | `/{customerId}/session`    | [`handler::session`]       |
//! | POST   | `/{marketId}/stake`        | [`handler::stake`]         |
//! | GET    | `/{marketId}/highstakes`   | [`handler::high_stakes`]   |
//! | GET    | `/health`                  | [`handler::health`]        |
//!
//! Anything else answers `404 Not Found`.

pub mod handler;
pub mod response;
mod router;

pub use response::ApiError;
pub use router::{router, AppState};
