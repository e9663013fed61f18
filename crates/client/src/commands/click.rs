//! Replay clicks against a page and print the menu events they cause.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{EventBus, Page, RuntimeConfig, Topic};
use widget_core::{ClickTarget, HostId};

use crate::fixture;

/// Dispatch clicks on a page
#[derive(Parser)]
pub struct Click {
    /// Page file (JSON); the built-in demo page when omitted
    #[arg(short, long, value_name = "FILE")]
    page: Option<PathBuf>,

    /// Clicks in order: `activator:<host>`, `within:<host>` or `outside`
    #[arg(value_name = "CLICK", required = true)]
    clicks: Vec<ClickSpec>,

    /// Print the page markup after the last click
    #[arg(long)]
    html: bool,
}

/// A click parsed from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickSpec(pub ClickTarget);

impl FromStr for ClickSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let host = |id: &str| {
            id.trim()
                .parse::<u32>()
                .map(HostId)
                .map_err(|_| format!("invalid host id '{id}'"))
        };

        match s.trim().split_once(':') {
            None if s.trim() == "outside" => Ok(Self(ClickTarget::Outside)),
            Some(("activator", id)) => Ok(Self(ClickTarget::Activator(host(id)?))),
            Some(("within", id)) => Ok(Self(ClickTarget::Within(host(id)?))),
            _ => Err(format!(
                "unknown click '{s}': expected activator:<host>, within:<host> or outside"
            )),
        }
    }
}

impl Click {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let nodes = fixture::page_or_demo(self.page.as_deref())?;
        let events = EventBus::with_capacity(config.event_bus_capacity);
        let mut rx = events.subscribe(Topic::Menu);
        let mut page = Page::with_builtin_widgets(events);
        page.load(nodes);

        for ClickSpec(target) in self.clicks {
            page.click(target)
                .with_context(|| format!("Failed to dispatch {target:?}"))?;

            while let Ok(event) = rx.try_recv() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }

        if self.html {
            println!("{}", page.to_html());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_specs() {
        assert_eq!(
            "activator:3".parse::<ClickSpec>(),
            Ok(ClickSpec(ClickTarget::Activator(HostId(3))))
        );
        assert_eq!(
            "within:0".parse::<ClickSpec>(),
            Ok(ClickSpec(ClickTarget::Within(HostId(0))))
        );
        assert_eq!("outside".parse::<ClickSpec>(), Ok(ClickSpec(ClickTarget::Outside)));
        assert!("activator:x".parse::<ClickSpec>().is_err());
        assert!("hover:1".parse::<ClickSpec>().is_err());
    }
}
