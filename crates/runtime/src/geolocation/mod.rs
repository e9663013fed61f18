//! Privacy-preserving location submission.
//!
//! The platform seams are traits so the flow runs the same against a
//! browser bridge, a command line fixture or a test double:
//! - [`LocationService`]: single-shot position lookup
//! - [`FormSubmitter`]: the HTTP POST
//! - [`Notifier`]: user-visible alerts
mod error;
mod flow;
pub mod form;
mod notify;
mod receive;
mod service;

pub use error::{GeolocationError, PositionError, SubmitError};
pub use flow::{FAILURE_PREFIX, GeolocationSubmitFlow, UNSUPPORTED_MESSAGE};
pub use form::{FormSubmission, FormSubmitter, GeoForm, HttpMethod, RecordingSubmitter};
pub use notify::{Notifier, RecordingNotifier};
pub use receive::LocationUpdate;
pub use service::{FixedLocation, LocationService, NoLocationSupport};
