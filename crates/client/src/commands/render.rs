//! Upgrade a page and print the result.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtime::{EventBus, Page, RuntimeConfig};
use serde_json::json;

use crate::fixture;

/// Render a page and print its markup
#[derive(Parser)]
pub struct Render {
    /// Page file (JSON); the built-in demo page when omitted
    #[arg(short, long, value_name = "FILE")]
    page: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Serialized page with declarative shadow roots
    Html,
    /// One JSON line per upgraded component
    Summary,
}

impl Render {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let nodes = fixture::page_or_demo(self.page.as_deref())?;
        let mut page = Page::with_builtin_widgets(EventBus::with_capacity(
            config.event_bus_capacity,
        ));
        let ids = page.load(nodes);

        match self.format {
            OutputFormat::Html => println!("{}", page.to_html()),
            OutputFormat::Summary => {
                for id in ids {
                    let Some(instance) = page.document().instance(id) else {
                        continue;
                    };
                    let line = json!({
                        "host": id,
                        "tag": instance.tag(),
                        "kind": instance.kind(),
                        "encapsulated": instance.shadow_root().is_some(),
                        "menu": instance.menu_state(),
                    });
                    println!("{line}");
                }
            }
        }
        Ok(())
    }
}
