//! Page runtime: loaded widget pages, event routing and geolocation
//! submission.
//!
//! This crate wires the synchronous `widget-core` model and the pure
//! `geo-fuzz` numerics into the pieces a client embeds:
//! - [`page`] hosts a [`Page`] that publishes component and menu activity
//! - [`events`] provides the topic-based event bus
//! - [`geolocation`] runs the request → fuzz → submit flow behind platform
//!   traits
//! - [`config`] loads settings from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod geolocation;
pub mod page;

pub use config::{GeoConfig, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, GeolocationEvent, MenuEvent, RenderEvent, Topic};
pub use geolocation::{
    FixedLocation, FormSubmission, FormSubmitter, GeoForm, GeolocationError,
    GeolocationSubmitFlow, LocationService, LocationUpdate, NoLocationSupport, Notifier,
    PositionError, RecordingNotifier, RecordingSubmitter, SubmitError,
};
pub use page::Page;
