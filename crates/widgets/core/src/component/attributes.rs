//! Attribute binding: a one-time snapshot of the host's attributes mapped into
//! a typed, per-widget configuration.
//!
//! The snapshot is captured when the instance is constructed. Mutating the
//! host's attributes afterwards has no effect on the rendered output.
//!
//! Binding never fails. A recognized attribute that is absent yields an empty
//! value; no default is substituted and no error is raised.
use crate::dom::Element;

/// Attribute values captured from a host element at construction time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSnapshot {
    values: Vec<(String, String)>,
}

impl AttributeSnapshot {
    pub fn capture(host: &Element) -> Self {
        Self {
            values: host
                .attributes()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value copied verbatim, or an empty string when absent.
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(str::to_string).unwrap_or_default()
    }

    /// Presence check for boolean-style attributes.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Typed attribute configuration for one widget kind.
pub trait BindAttributes: Sized {
    /// Every attribute name the widget reads.
    const RECOGNIZED: &'static [&'static str];

    fn bind(snapshot: &AttributeSnapshot) -> Self;
}

/// Widgets that take no attributes.
impl BindAttributes for () {
    const RECOGNIZED: &'static [&'static str] = &[];

    fn bind(_snapshot: &AttributeSnapshot) -> Self {}
}

/// Logs recognized attributes missing from `snapshot`.
///
/// Missing attributes are expected and rendered as empty slots, so this only
/// ever emits at debug level.
pub(crate) fn trace_missing<A: BindAttributes>(tag: &str, snapshot: &AttributeSnapshot) {
    for name in A::RECOGNIZED {
        if !snapshot.has(name) {
            tracing::debug!(tag, attribute = *name, "attribute missing, rendering empty slot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_detached_from_host() {
        let mut host = Element::new("c14l-header").with_attr("name", "dtr5");
        let snapshot = AttributeSnapshot::capture(&host);
        host.set_attribute("name", "changed");

        assert_eq!(snapshot.get("name"), Some("dtr5"));
        assert_eq!(snapshot.text("logo"), "");
        assert!(!snapshot.has("logo"));
    }
}
