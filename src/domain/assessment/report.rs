//! Rendering payload for the results view.

use serde::Serialize;

use super::catalog::AssessmentCatalog;
use super::scoring::{DominantStyles, ScoreTally};
use super::session::AssessmentOutcome;
use super::style::{Style, StyleDescriptor};
use crate::domain::foundation::Percentage;

/// How the dominant styles should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMode {
    /// One detailed panel.
    Single,
    /// One tab per dominant style.
    Blend,
}

/// Descriptor panel for one dominant style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePanel {
    pub style: Style,
    #[serde(flatten)]
    pub descriptor: StyleDescriptor,
}

/// One wedge of the style chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub style: Style,
    pub count: u32,
    /// Share of the tally total.
    pub share: Percentage,
    pub color: &'static str,
    /// True for every wedge at the maximum count.
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsReport {
    pub mode: ResultMode,
    pub headline: String,
    pub summary: Option<String>,
    pub dominant: DominantStyles,
    pub tally: ScoreTally,
    pub total_questions: usize,
    pub panels: Vec<StylePanel>,
    pub chart: Vec<ChartSlice>,
}

impl ResultsReport {
    pub fn build(outcome: &AssessmentOutcome, catalog: &AssessmentCatalog) -> Self {
        let dominant = &outcome.dominant;
        let tally = &outcome.tally;

        let panels: Vec<StylePanel> = dominant
            .styles()
            .iter()
            .map(|style| StylePanel {
                style: *style,
                descriptor: catalog.descriptor(*style).clone(),
            })
            .collect();

        let (mode, headline, summary) = match dominant.single() {
            Some(style) => (
                ResultMode::Single,
                format!("Your Dominant Style is {}", catalog.descriptor(style).title),
                None,
            ),
            None => (
                ResultMode::Blend,
                "You have a blend of styles!".to_string(),
                Some(format!("Your dominant styles are: {}", dominant.label())),
            ),
        };

        Self {
            mode,
            headline,
            summary,
            dominant: dominant.clone(),
            tally: tally.clone(),
            total_questions: catalog.len(),
            panels,
            chart: chart_slices(tally),
        }
    }
}

fn chart_slices(tally: &ScoreTally) -> Vec<ChartSlice> {
    let total = tally.total();
    let max = tally.max();
    tally
        .iter()
        .map(|(style, count)| ChartSlice {
            style,
            count,
            share: Percentage::of(count, total),
            color: style.color(),
            emphasized: count == max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::scoring::resolve_dominant;

    fn outcome(counts: [u32; 4]) -> AssessmentOutcome {
        let tally = ScoreTally::from_counts(Style::ALL.into_iter().zip(counts));
        let dominant = resolve_dominant(&tally);
        AssessmentOutcome { tally, dominant }
    }

    #[test]
    fn single_style_gets_one_panel_and_titled_headline() {
        let report = ResultsReport::build(&outcome([3, 6, 5, 4]), AssessmentCatalog::standard());
        assert_eq!(report.mode, ResultMode::Single);
        assert_eq!(report.headline, "Your Dominant Style is Analytical Style");
        assert_eq!(report.summary, None);
        assert_eq!(report.panels.len(), 1);
        assert_eq!(report.panels[0].style, Style::Analytical);
        assert!(!report.panels[0].descriptor.tips.is_empty());
    }

    #[test]
    fn blend_gets_a_panel_per_style() {
        let report = ResultsReport::build(&outcome([5, 5, 4, 4]), AssessmentCatalog::standard());
        assert_eq!(report.mode, ResultMode::Blend);
        assert_eq!(report.headline, "You have a blend of styles!");
        assert_eq!(
            report.summary.as_deref(),
            Some("Your dominant styles are: Driver & Analytical")
        );
        let styles: Vec<Style> = report.panels.iter().map(|p| p.style).collect();
        assert_eq!(styles, vec![Style::Driver, Style::Analytical]);
    }

    #[test]
    fn chart_emphasizes_every_maximum_wedge() {
        let report = ResultsReport::build(&outcome([5, 5, 4, 4]), AssessmentCatalog::standard());
        let emphasized: Vec<bool> = report.chart.iter().map(|s| s.emphasized).collect();
        assert_eq!(emphasized, vec![true, true, false, false]);
        assert_eq!(report.chart[0].color, "#FF6B6B");
        assert_eq!(report.chart[0].share.to_string(), "27.8%");
    }

    #[test]
    fn degenerate_tally_renders_as_four_way_blend() {
        let report = ResultsReport::build(&outcome([0, 0, 0, 0]), AssessmentCatalog::standard());
        assert_eq!(report.mode, ResultMode::Blend);
        assert_eq!(report.panels.len(), 4);
        assert!(report.chart.iter().all(|s| s.emphasized && s.share == Percentage::ZERO));
    }

    #[test]
    fn panel_serializes_descriptor_fields_inline() {
        let report = ResultsReport::build(&outcome([6, 4, 4, 4]), AssessmentCatalog::standard());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "single");
        assert_eq!(json["panels"][0]["style"], "Driver");
        assert_eq!(json["panels"][0]["title"], "Driver Style");
        assert!(json["panels"][0]["keywords"].is_array());
        assert_eq!(json["tally"]["Driver"], 6);
    }
}
