//! HTTP client for the practice backend. The wire surface is a single
//! idempotent create (`POST /sessions`); everything interesting here is the
//! error-reduction policy that turns transport failures, structured error
//! bodies, and malformed responses into one human-readable line.

mod client;
mod error;
mod transport;

pub use client::{CreateSessionPayload, CreateSessionResponse, SessionClient};
pub use error::{ApiError, GENERIC_SESSION_ERROR};
pub use transport::{HttpTransport, ReqwestTransport, ResponseParts};
