//! Subreddit status flags shared by the chip and list widgets.
use bitflags::bitflags;
use strum::{AsRefStr, Display};

use crate::component::AttributeSnapshot;
use crate::dom::Element;

bitflags! {
    /// Presence attributes on a subreddit chip or list row.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChipFlags: u8 {
        const BANNED = 1 << 0;
        const MUTED = 1 << 1;
        const MOD = 1 << 2;
        const NSFW = 1 << 3;
    }
}

/// Attribute name for each flag, in priority order.
const FLAG_ATTRIBUTES: [(&str, ChipFlags); 4] = [
    ("isbanned", ChipFlags::BANNED),
    ("ismuted", ChipFlags::MUTED),
    ("ismod", ChipFlags::MOD),
    ("isnsfw", ChipFlags::NSFW),
];

impl ChipFlags {
    pub const ATTRIBUTES: [&'static str; 4] = ["isbanned", "ismuted", "ismod", "isnsfw"];

    pub fn from_snapshot(snapshot: &AttributeSnapshot) -> Self {
        FLAG_ATTRIBUTES
            .iter()
            .filter(|(name, _)| snapshot.has(name))
            .fold(ChipFlags::empty(), |flags, (_, flag)| flags | *flag)
    }

    pub fn from_element(element: &Element) -> Self {
        FLAG_ATTRIBUTES
            .iter()
            .filter(|(name, _)| element.has_attribute(name))
            .fold(ChipFlags::empty(), |flags, (_, flag)| flags | *flag)
    }
}

/// Where a variant's tag span goes relative to the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagPlacement {
    Before,
    After,
}

/// The single variant applied to a chip label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipVariant {
    #[default]
    Plain,
    Banned,
    Muted,
    Moderator,
    Nsfw,
}

impl ChipVariant {
    /// First matching flag wins: banned, muted, moderator, nsfw.
    pub fn from_flags(flags: ChipFlags) -> Self {
        if flags.contains(ChipFlags::BANNED) {
            ChipVariant::Banned
        } else if flags.contains(ChipFlags::MUTED) {
            ChipVariant::Muted
        } else if flags.contains(ChipFlags::MOD) {
            ChipVariant::Moderator
        } else if flags.contains(ChipFlags::NSFW) {
            ChipVariant::Nsfw
        } else {
            ChipVariant::Plain
        }
    }

    /// Class, text and placement of the tag span marking this variant.
    pub fn tag(self) -> Option<(&'static str, &'static str, TagPlacement)> {
        match self {
            ChipVariant::Plain => None,
            ChipVariant::Banned => Some(("banned-tag", "banned from", TagPlacement::Before)),
            ChipVariant::Muted => Some(("muted-tag", "muted on", TagPlacement::Before)),
            ChipVariant::Moderator => Some(("mod-tag", "moderator of", TagPlacement::Before)),
            ChipVariant::Nsfw => Some(("nsfw-tag", "NSFW", TagPlacement::After)),
        }
    }

    pub fn tag_span(self) -> Option<(Element, TagPlacement)> {
        self.tag().map(|(class, text, placement)| {
            (
                Element::new("span").with_attr("class", class).with_text(text),
                placement,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_flag_wins() {
        let all = ChipFlags::all();
        assert_eq!(ChipVariant::from_flags(all), ChipVariant::Banned);
        assert_eq!(
            ChipVariant::from_flags(ChipFlags::MUTED | ChipFlags::MOD | ChipFlags::NSFW),
            ChipVariant::Muted
        );
        assert_eq!(
            ChipVariant::from_flags(ChipFlags::MOD | ChipFlags::NSFW),
            ChipVariant::Moderator
        );
        assert_eq!(ChipVariant::from_flags(ChipFlags::NSFW), ChipVariant::Nsfw);
        assert_eq!(ChipVariant::from_flags(ChipFlags::empty()), ChipVariant::Plain);
    }

    #[test]
    fn flags_read_presence_only() {
        let el = Element::new("a")
            .with_attr("ismod", "")
            .with_attr("isnsfw", "false");
        assert_eq!(ChipFlags::from_element(&el), ChipFlags::MOD | ChipFlags::NSFW);
    }
}
