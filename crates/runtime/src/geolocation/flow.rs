//! Request a position, fuzz it, write it into the form and submit.
use geo_fuzz::GeoFuzzer;
use rand::rngs::StdRng;

use super::{
    FormSubmission, FormSubmitter, GeoForm, GeolocationError, LocationService, Notifier,
};
use crate::config::GeoConfig;
use crate::events::{EventBus, GeolocationEvent};

pub const UNSUPPORTED_MESSAGE: &str = "Your browser doesn't support geo location lookup.";
pub const FAILURE_PREFIX: &str = "Sorry, could not find your geolocation: ";

/// One user-triggered geolocation submission.
///
/// Any failure aborts the attempt, alerts the user and publishes
/// [`GeolocationEvent::Failed`]. The form is only submitted once a fuzzed
/// position has been written to it.
pub struct GeolocationSubmitFlow {
    location: Box<dyn LocationService>,
    submitter: Box<dyn FormSubmitter>,
    notifier: Box<dyn Notifier>,
    fuzzer: GeoFuzzer<StdRng>,
    config: GeoConfig,
    events: Option<EventBus>,
}

impl GeolocationSubmitFlow {
    pub fn new(
        location: impl LocationService + 'static,
        submitter: impl FormSubmitter + 'static,
        notifier: impl Notifier + 'static,
        config: GeoConfig,
    ) -> Self {
        let fuzzer = GeoFuzzer::from_entropy().with_strategy(config.strategy);
        Self {
            location: Box::new(location),
            submitter: Box::new(submitter),
            notifier: Box::new(notifier),
            fuzzer,
            config,
            events: None,
        }
    }

    /// Replaces the random source, keeping the configured strategy.
    pub fn with_fuzzer(mut self, fuzzer: GeoFuzzer<StdRng>) -> Self {
        self.fuzzer = fuzzer.with_strategy(self.config.strategy);
        self
    }

    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Runs one attempt against `form`.
    pub async fn run(&mut self, form: &mut GeoForm) -> Result<FormSubmission, GeolocationError> {
        self.publish(GeolocationEvent::Requested);

        match self.attempt(form).await {
            Ok(submission) => Ok(submission),
            Err(err) => {
                let message = match &err {
                    GeolocationError::Unsupported => UNSUPPORTED_MESSAGE.to_string(),
                    other => format!("{FAILURE_PREFIX}{other}"),
                };
                tracing::warn!(error = %err, "geolocation submission aborted");
                self.notifier.alert(&message).await;
                self.publish(GeolocationEvent::Failed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    async fn attempt(&mut self, form: &mut GeoForm) -> Result<FormSubmission, GeolocationError> {
        if !self.location.is_supported() {
            return Err(GeolocationError::Unsupported);
        }

        let reading = self.location.current_position().await?;
        let radius = form.fuzz_radius(self.config.default_fuzz_km)?;
        let result = self.fuzzer.fuzz(reading, radius)?;

        // The caller's form only takes the fuzzed fields once the post went out.
        let mut posted = form.clone();
        posted.set_coordinate(result.fuzzed);
        let submission = posted.submission();
        self.submitter.submit(submission.clone()).await?;
        *form = posted;

        tracing::info!(
            action = %submission.action,
            %radius,
            strategy = %result.strategy,
            "fuzzed location submitted"
        );
        self.publish(GeolocationEvent::Submitted {
            fuzzed: result.fuzzed,
            radius_km: radius.km(),
            strategy: result.strategy,
            action: submission.action.clone(),
        });
        Ok(submission)
    }

    fn publish(&self, event: GeolocationEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}

impl std::fmt::Debug for GeolocationSubmitFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeolocationSubmitFlow")
            .field("config", &self.config)
            .field("strategy", &self.fuzzer.strategy())
            .finish_non_exhaustive()
    }
}
