//! [`Status`]-related definitions.

use std::fmt;

use itertools::Itertools as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(doc)]
use crate::domain::Property;

/// Construction status of a [`Property`].
///
/// The vocabulary is closed; raw values outside of it are carried through as
/// [`Status::Custom`] and rendered with a generic fallback descriptor. They
/// never classify into any status group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// Launch announced, construction not started yet.
    Upcoming,

    /// Under active construction.
    UnderConstruction,

    /// Construction finishing, possession handover approaching.
    NearingPossession,

    /// Ready to move in.
    ReadyToMoveIn,

    /// Construction completed.
    Completed,

    /// A value outside the closed vocabulary, carried through as-is.
    Custom(String),
}

impl Status {
    /// Parses a raw status string leniently.
    ///
    /// Any case/separator variant of a known status (`"READY_TO_MOVE_IN"`,
    /// `"ready-to-move-in"`, `"Ready to Move In"`) maps onto the same
    /// variant, so differently-sourced spellings cannot diverge. Anything
    /// else is carried through as [`Status::Custom`]. Blank input means
    /// "status unknown" and returns [`None`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let canonical = raw
            .split(['-', '_', ' '])
            .filter(|token| !token.is_empty())
            .map(str::to_ascii_uppercase)
            .join("_");

        Some(match canonical.as_str() {
            "UPCOMING" => Self::Upcoming,
            "UNDER_CONSTRUCTION" => Self::UnderConstruction,
            "NEARING_POSSESSION" => Self::NearingPossession,
            "READY_TO_MOVE_IN" => Self::ReadyToMoveIn,
            "COMPLETED" => Self::Completed,
            _ => Self::Custom(raw.to_owned()),
        })
    }

    /// Returns the canonical wire form of this [`Status`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::UnderConstruction => "UNDER_CONSTRUCTION",
            Self::NearingPossession => "NEARING_POSSESSION",
            Self::ReadyToMoveIn => "READY_TO_MOVE_IN",
            Self::Completed => "COMPLETED",
            Self::Custom(raw) => raw,
        }
    }

    /// Indicates whether this [`Status`] means the construction is finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        match self {
            Self::ReadyToMoveIn | Self::Completed => true,
            Self::Upcoming
            | Self::UnderConstruction
            | Self::NearingPossession
            | Self::Custom(_) => false,
        }
    }

    /// Indicates whether this [`Status`] means the project is announced but
    /// not started.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        match self {
            Self::Upcoming => true,
            Self::UnderConstruction
            | Self::NearingPossession
            | Self::ReadyToMoveIn
            | Self::Completed
            | Self::Custom(_) => false,
        }
    }

    /// Indicates whether this [`Status`] means the construction is in
    /// progress.
    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        match self {
            Self::UnderConstruction | Self::NearingPossession => true,
            Self::Upcoming
            | Self::ReadyToMoveIn
            | Self::Completed
            | Self::Custom(_) => false,
        }
    }

    /// Returns the display descriptor of this [`Status`].
    ///
    /// Values of the closed vocabulary carry a configured descriptor;
    /// [`Status::Custom`] falls back to a title-cased rendering of the raw
    /// value with generic styling.
    #[must_use]
    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Upcoming => StatusDisplay {
                label: "Upcoming".to_owned(),
                color: "#8e24aa",
                icon: "calendar",
            },
            Self::UnderConstruction => StatusDisplay {
                label: "Under Construction".to_owned(),
                color: "#fb8c00",
                icon: "crane",
            },
            Self::NearingPossession => StatusDisplay {
                label: "Nearing Possession".to_owned(),
                color: "#fdd835",
                icon: "key",
            },
            Self::ReadyToMoveIn => StatusDisplay {
                label: "Ready to Move In".to_owned(),
                color: "#43a047",
                icon: "home",
            },
            Self::Completed => StatusDisplay {
                label: "Completed".to_owned(),
                color: "#1e88e5",
                icon: "badge-check",
            },
            Self::Custom(raw) => StatusDisplay {
                label: title_case(raw),
                color: StatusDisplay::FALLBACK_COLOR,
                icon: StatusDisplay::FALLBACK_ICON,
            },
        }
    }

    /// Returns the display descriptor of an optional [`Status`].
    ///
    /// An absent status renders with the literal `"N/A"` label.
    #[must_use]
    pub fn display_opt(status: Option<&Self>) -> StatusDisplay {
        status.map_or_else(
            || StatusDisplay {
                label: "N/A".to_owned(),
                color: StatusDisplay::FALLBACK_COLOR,
                icon: StatusDisplay::FALLBACK_ICON,
            },
            Self::display,
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes an optional raw status string, treating absent, `null` and
/// blank values as "status unknown".
///
/// # Errors
///
/// Never errors by itself, only if the [`Deserializer`] does.
pub fn opt_lenient<'de, D>(
    deserializer: D,
) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(Status::parse_lenient))
}

/// Display descriptor of a [`Status`]: the label, badge color and icon a
/// card renders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusDisplay {
    /// Human-readable label.
    pub label: String,

    /// Badge color, as a hex triplet.
    pub color: &'static str,

    /// Badge icon name.
    pub icon: &'static str,
}

impl StatusDisplay {
    /// Badge color used outside the closed vocabulary.
    pub const FALLBACK_COLOR: &'static str = "#757575";

    /// Badge icon used outside the closed vocabulary.
    pub const FALLBACK_ICON: &'static str = "info";
}

/// Title-cases the provided raw value: tokens split on `-`/`_`/whitespace,
/// each capitalized, joined with single spaces.
fn title_case(raw: &str) -> String {
    raw.split(['-', '_', ' '])
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .join(" ")
}

#[cfg(test)]
mod spec {
    use super::Status;

    #[test]
    fn parses_known_values_leniently() {
        assert_eq!(
            Status::parse_lenient("READY_TO_MOVE_IN"),
            Some(Status::ReadyToMoveIn),
        );
        assert_eq!(
            Status::parse_lenient("ready-to-move-in"),
            Some(Status::ReadyToMoveIn),
        );
        assert_eq!(
            Status::parse_lenient("Nearing Possession"),
            Some(Status::NearingPossession),
        );
        assert_eq!(
            Status::parse_lenient("NEARING_POSSESSION"),
            Some(Status::NearingPossession),
        );
        assert_eq!(Status::parse_lenient("upcoming"), Some(Status::Upcoming));
    }

    #[test]
    fn carries_unknown_values_through() {
        assert_eq!(
            Status::parse_lenient("some-custom-status"),
            Some(Status::Custom("some-custom-status".to_owned())),
        );
    }

    #[test]
    fn blank_input_is_unknown() {
        assert_eq!(Status::parse_lenient(""), None);
        assert_eq!(Status::parse_lenient("   "), None);
    }

    #[test]
    fn known_values_use_configured_labels() {
        // The configured label differs from what the title-case fallback
        // would produce ("Ready To Move In"), so a hit on the closed
        // vocabulary is observable.
        let display = Status::ReadyToMoveIn.display();
        assert_eq!(display.label, "Ready to Move In");

        let display =
            Status::parse_lenient("ready-to-move-in").unwrap().display();
        assert_eq!(display.label, "Ready to Move In");
    }

    #[test]
    fn unknown_values_render_title_cased() {
        let display = Status::Custom("some-custom-status".to_owned()).display();
        assert_eq!(display.label, "Some Custom Status");
        assert_eq!(display.color, super::StatusDisplay::FALLBACK_COLOR);

        let display = Status::Custom("SOLD_OUT".to_owned()).display();
        assert_eq!(display.label, "Sold Out");
    }

    #[test]
    fn absent_status_renders_not_available() {
        assert_eq!(Status::display_opt(None).label, "N/A");
    }

    #[test]
    fn grouping_predicates() {
        assert!(Status::Completed.is_completed());
        assert!(Status::ReadyToMoveIn.is_completed());
        assert!(!Status::UnderConstruction.is_completed());

        assert!(Status::UnderConstruction.is_ongoing());
        assert!(Status::NearingPossession.is_ongoing());
        assert!(!Status::Upcoming.is_ongoing());

        assert!(Status::Upcoming.is_upcoming());
        assert!(!Status::Custom("whatever".to_owned()).is_upcoming());
    }
}
