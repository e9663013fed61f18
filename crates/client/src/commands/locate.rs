//! Run the geolocation submission flow against a fixed position.

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use geo_fuzz::{GeoFuzzer, PositionReading};
use runtime::{
    EventBus, FixedLocation, GeoForm, GeolocationSubmitFlow, LocationService, NoLocationSupport,
    Notifier, PositionError, RecordingSubmitter, RuntimeConfig, Topic,
};

/// Fuzz a position and print the form that would be posted
#[derive(Parser)]
pub struct Locate {
    /// True latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// True longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Fuzz radius in km, as typed into the form (blank uses the default)
    #[arg(long, default_value = "")]
    fuzzy: String,

    /// Simulate the user denying the permission prompt
    #[arg(long, conflicts_with = "unsupported")]
    deny: bool,

    /// Simulate a platform without location lookup
    #[arg(long)]
    unsupported: bool,

    /// Seed for reproducible fuzzing
    #[arg(long)]
    seed: Option<u64>,

    /// Form action URL (overrides GEO_FORM_ACTION)
    #[arg(long)]
    action: Option<String>,

    /// Also print geolocation events
    #[arg(long)]
    events: bool,
}

/// Alerts go to stderr.
struct StderrNotifier;

#[async_trait]
impl Notifier for StderrNotifier {
    async fn alert(&self, message: &str) {
        eprintln!("alert: {message}");
    }
}

impl Locate {
    pub async fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let events = EventBus::with_capacity(config.event_bus_capacity);
        let mut rx = events.subscribe(Topic::Geolocation);
        let submitter = RecordingSubmitter::new();

        let flow = if self.unsupported {
            self.flow(NoLocationSupport, &submitter, config)
        } else if self.deny {
            self.flow(
                FixedLocation::failing(PositionError::PermissionDenied),
                &submitter,
                config,
            )
        } else {
            let reading = PositionReading {
                latitude: self.lat,
                longitude: self.lng,
            };
            self.flow(FixedLocation::new(reading), &submitter, config)
        };
        let mut flow = flow.with_events(events);

        let action = self
            .action
            .clone()
            .unwrap_or_else(|| config.geo.form_action.clone());
        let mut form = GeoForm::new(action).with_fuzzy(self.fuzzy.clone());
        let outcome = flow.run(&mut form).await;

        if self.events {
            while let Ok(event) = rx.try_recv() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }

        outcome?;
        for submission in submitter.submissions().await {
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
        Ok(())
    }

    fn flow(
        &self,
        location: impl LocationService + 'static,
        submitter: &RecordingSubmitter,
        config: &RuntimeConfig,
    ) -> GeolocationSubmitFlow {
        let flow = GeolocationSubmitFlow::new(
            location,
            submitter.clone(),
            StderrNotifier,
            config.geo.clone(),
        );
        match self.seed {
            Some(seed) => flow.with_fuzzer(GeoFuzzer::seeded(seed)),
            None => flow,
        }
    }
}
