//! Behavioral styles and their descriptive metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four behavioral styles.
///
/// The derived ordering is the canonical enumeration order used for
/// tallies, blended labels and export columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Style {
    Driver,
    Analytical,
    Amiable,
    Expressive,
}

impl Style {
    /// All styles in enumeration order.
    pub const ALL: [Style; 4] = [
        Style::Driver,
        Style::Analytical,
        Style::Amiable,
        Style::Expressive,
    ];

    /// Display label, also used as the export column suffix.
    pub fn label(&self) -> &'static str {
        match self {
            Style::Driver => "Driver",
            Style::Analytical => "Analytical",
            Style::Amiable => "Amiable",
            Style::Expressive => "Expressive",
        }
    }

    /// Chart colour for this style's wedge.
    pub fn color(&self) -> &'static str {
        match self {
            Style::Driver => "#FF6B6B",
            Style::Analytical => "#4ECDC4",
            Style::Amiable => "#45B7D1",
            Style::Expressive => "#FFA07A",
        }
    }

    /// Position in [`Style::ALL`].
    pub fn ordinal(&self) -> usize {
        match self {
            Style::Driver => 0,
            Style::Analytical => 1,
            Style::Amiable => 2,
            Style::Expressive => 3,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("style", format!("unknown style '{}'", s)))
    }
}

/// Descriptive text shown for a dominant style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub behaviors: &'static [&'static str],
    pub tips: &'static [&'static str],
}
