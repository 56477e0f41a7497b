//! Client library for the SAURES remote metering API
//! (`https://api.saures.ru/1.0/`).
//!
//! The API is session-based: [`SauresClient::login`] trades the stored
//! credentials for a short-lived session token (`sid`, 15 minutes,
//! enforced server-side) that every other call forwards. Each operation
//! maps to one HTTP endpoint — GET with query parameters for reads, POST
//! with a form body for writes — and returns the service's uniform
//! `{data, errors, status}` envelope verbatim. Application failures
//! arrive as `status: "bad"` with populated `errors`, not as Rust errors;
//! only transport failures and unparseable bodies become [`Error`].
//!
//! The service caps usage at roughly 10 calls per minute. The client does
//! not throttle, retry, or re-authenticate on the caller's behalf.
//!
//! # Example
//!
//! ```no_run
//! use saures_api::SauresClient;
//!
//! # fn main() -> Result<(), saures_api::Error> {
//! let mut client = SauresClient::new(
//!     Some("user@example.com".into()),
//!     Some("secret".into()),
//! )?;
//! client.login()?;
//!
//! let objects = client.user_objects()?;
//! if objects.is_ok() {
//!     println!("{}", objects.data);
//! }
//! # Ok(())
//! # }
//! ```

mod agent;
mod client;
mod error;
mod params;
mod response;
mod types;

pub use client::SauresClient;
pub use error::Error;
pub use response::{ApiResponse, Status};
pub use types::{
    Dispatch, Group, MeterCommand, NewObject, NoticeKind, NoticeSetup, ScheduleKind,
    ScheduleSetup, SensorInput,
};
