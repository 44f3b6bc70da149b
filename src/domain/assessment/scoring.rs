//! Scoring Engine - style tallies and dominant-style resolution.
//!
//! Both operations are pure: identical inputs always produce identical output.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::catalog::{AssessmentCatalog, CatalogError};
use super::responses::ResponseSet;
use super::style::Style;

/// Per-style counts. Every style is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreTally(BTreeMap<Style, u32>);

impl ScoreTally {
    /// A tally with every style at zero.
    pub fn zero() -> Self {
        Self(Style::ALL.into_iter().map(|s| (s, 0)).collect())
    }

    /// Builds a tally from explicit counts; styles not listed stay at zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (Style, u32)>) -> Self {
        let mut tally = Self::zero();
        for (style, count) in counts {
            tally.0.insert(style, count);
        }
        tally
    }

    pub fn increment(&mut self, style: Style) {
        *self.0.entry(style).or_insert(0) += 1;
    }

    pub fn count(&self, style: Style) -> u32 {
        self.0.get(&style).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Highest count across styles.
    pub fn max(&self) -> u32 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// `(style, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Style, u32)> + '_ {
        self.0.iter().map(|(style, count)| (*style, *count))
    }
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::zero()
    }
}

/// Non-empty set of styles sharing the maximum count, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominantStyles(Vec<Style>);

impl DominantStyles {
    pub fn styles(&self) -> &[Style] {
        &self.0
    }

    pub fn contains(&self, style: Style) -> bool {
        self.0.contains(&style)
    }

    /// True when more than one style shares the maximum.
    pub fn is_blend(&self) -> bool {
        self.0.len() > 1
    }

    /// The single dominant style, if there is exactly one.
    pub fn single(&self) -> Option<Style> {
        match self.0.as_slice() {
            [style] => Some(*style),
            _ => None,
        }
    }

    /// Labels joined with `" & "`, e.g. `"Driver & Analytical"`.
    pub fn label(&self) -> String {
        self.0
            .iter()
            .map(Style::label)
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

impl Serialize for DominantStyles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Tallies the style of every answered question.
///
/// Question numbers are 1-based (`index + 1`); unanswered slots contribute nothing.
///
/// # Errors
///
/// - `MissingScore` if the scoring table lacks an entry for a selection
pub fn compute_tally(
    responses: &ResponseSet,
    catalog: &AssessmentCatalog,
) -> Result<ScoreTally, CatalogError> {
    let mut tally = ScoreTally::zero();
    for (index, selection) in responses.iter() {
        if let Some(letter) = selection {
            let style = catalog.resolve_style(index + 1, letter)?;
            tally.increment(style);
        }
    }
    Ok(tally)
}

/// Every style whose count equals the maximum. An all-zero tally yields all four.
pub fn resolve_dominant(tally: &ScoreTally) -> DominantStyles {
    let max = tally.max();
    DominantStyles(
        tally
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(style, _)| style)
            .collect(),
    )
}
