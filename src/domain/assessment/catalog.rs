//! Question catalog, scoring table and style descriptors.
//!
//! The catalog is built once and read by every session. Choice text is
//! normalized at construction: a trailing `" (Label)"` annotation is removed
//! from display text, and scoring always goes through the [`ScoringTable`]
//! by choice position.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use super::battery;
use super::style::{Style, StyleDescriptor};

/// Number of choices every question offers.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Letter code for a choice position (`A` is the first choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceLetter {
    A,
    B,
    C,
    D,
}

impl ChoiceLetter {
    pub const ALL: [ChoiceLetter; 4] = [ChoiceLetter::A, ChoiceLetter::B, ChoiceLetter::C, ChoiceLetter::D];

    /// Maps a 0-based choice index to its letter.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based choice index.
    pub fn index(&self) -> usize {
        match self {
            ChoiceLetter::A => 0,
            ChoiceLetter::B => 1,
            ChoiceLetter::C => 2,
            ChoiceLetter::D => 3,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ChoiceLetter::A => 'A',
            ChoiceLetter::B => 'B',
            ChoiceLetter::C => 'C',
            ChoiceLetter::D => 'D',
        }
    }
}

impl fmt::Display for ChoiceLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Data-integrity failures in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Question index {index} is out of range (catalog has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("No scoring entry for question {question}, choice {letter}")]
    MissingScore { question: usize, letter: ChoiceLetter },

    #[error("Question {question} has {choices} choices, expected 4")]
    MalformedQuestion { question: usize, choices: usize },

    #[error("Catalog has no questions")]
    Empty,
}

/// A question with its display-ready choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            text: text.into(),
            choices,
        }
    }
}

/// Letter-to-style mapping per 1-based question number.
///
/// A question's letters need not map to distinct styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringTable {
    rows: HashMap<usize, HashMap<ChoiceLetter, Style>>,
}

impl ScoringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from rows of `(question_number, [style for A, B, C, D])`.
    pub fn from_rows(rows: &[(usize, [Style; 4])]) -> Self {
        let mut table = Self::new();
        for (number, styles) in rows {
            for (letter, style) in ChoiceLetter::ALL.into_iter().zip(styles.iter()) {
                table.insert(*number, letter, *style);
            }
        }
        table
    }

    pub fn insert(&mut self, question_number: usize, letter: ChoiceLetter, style: Style) {
        self.rows.entry(question_number).or_default().insert(letter, style);
    }

    pub fn get(&self, question_number: usize, letter: ChoiceLetter) -> Option<Style> {
        self.rows.get(&question_number)?.get(&letter).copied()
    }
}

/// A choice whose authored annotation names a different style than the
/// scoring table. The scoring table wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationConflict {
    pub question: usize,
    pub letter: ChoiceLetter,
    pub annotated: Style,
    pub scored: Style,
}

/// The complete, immutable assessment definition.
#[derive(Debug, Clone)]
pub struct AssessmentCatalog {
    questions: Vec<Question>,
    scoring: ScoringTable,
    descriptors: [StyleDescriptor; 4],
    annotation_conflicts: Vec<AnnotationConflict>,
}

static STANDARD: Lazy<AssessmentCatalog> = Lazy::new(|| {
    let questions = battery::QUESTIONS
        .iter()
        .map(|raw| Question::new(raw.text, raw.choices.iter().map(|c| c.to_string()).collect()))
        .collect();
    AssessmentCatalog::new(
        questions,
        ScoringTable::from_rows(&battery::SCORING_ROWS),
        Style::ALL.map(battery::descriptor),
    )
    .expect("built-in battery is well-formed")
});

impl AssessmentCatalog {
    /// Builds and validates a catalog, stripping choice annotations.
    ///
    /// `descriptors` is indexed by [`Style::ordinal`].
    ///
    /// # Errors
    ///
    /// - `Empty` if there are no questions
    /// - `MalformedQuestion` if a question does not have exactly four choices
    /// - `MissingScore` if any question/letter pair is absent from `scoring`
    pub fn new(
        questions: Vec<Question>,
        scoring: ScoringTable,
        descriptors: [StyleDescriptor; 4],
    ) -> Result<Self, CatalogError> {
        let mut annotation_conflicts = Vec::new();
        let mut normalized = Vec::with_capacity(questions.len());

        for (index, question) in questions.into_iter().enumerate() {
            let number = index + 1;
            let mut choices = Vec::with_capacity(question.choices.len());
            for (position, raw) in question.choices.iter().enumerate() {
                let (text, annotation) = split_annotation(raw);
                if let (Some(letter), Some(annotated)) = (
                    ChoiceLetter::from_index(position),
                    annotation.and_then(|a| a.parse::<Style>().ok()),
                ) {
                    if let Some(scored) = scoring.get(number, letter) {
                        if scored != annotated {
                            tracing::warn!(
                                question = number,
                                letter = %letter,
                                annotated = %annotated,
                                scored = %scored,
                                "Choice annotation disagrees with scoring table; using scoring table"
                            );
                            annotation_conflicts.push(AnnotationConflict {
                                question: number,
                                letter,
                                annotated,
                                scored,
                            });
                        }
                    }
                }
                choices.push(text.to_string());
            }
            normalized.push(Question::new(question.text, choices));
        }

        let catalog = Self {
            questions: normalized,
            scoring,
            descriptors,
            annotation_conflicts,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in 18-question battery.
    pub fn standard() -> &'static AssessmentCatalog {
        &STANDARD
    }

    /// Checks that every question has four choices and a complete scoring row.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, question) in self.questions.iter().enumerate() {
            let number = index + 1;
            if question.choices.len() != CHOICES_PER_QUESTION {
                return Err(CatalogError::MalformedQuestion {
                    question: number,
                    choices: question.choices.len(),
                });
            }
            for letter in ChoiceLetter::ALL {
                self.resolve_style(number, letter)?;
            }
        }
        Ok(())
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at a 0-based index.
    pub fn question(&self, index: usize) -> Result<&Question, CatalogError> {
        self.questions.get(index).ok_or(CatalogError::QuestionOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Resolves the style scored by `letter` on 1-based question `number`.
    pub fn resolve_style(&self, number: usize, letter: ChoiceLetter) -> Result<Style, CatalogError> {
        self.scoring
            .get(number, letter)
            .ok_or(CatalogError::MissingScore {
                question: number,
                letter,
            })
    }

    pub fn descriptor(&self, style: Style) -> &StyleDescriptor {
        &self.descriptors[style.ordinal()]
    }

    /// Annotations that disagreed with the scoring table at load time.
    pub fn annotation_conflicts(&self) -> &[AnnotationConflict] {
        &self.annotation_conflicts
    }
}

/// Splits `"Text. (Label)"` into `("Text.", Some("Label"))`.
fn split_annotation(raw: &str) -> (&str, Option<&str>) {
    let trimmed = raw.trim_end();
    if let Some(stripped) = trimmed.strip_suffix(')') {
        if let Some(open) = stripped.rfind(" (") {
            return (stripped[..open].trim_end(), Some(&stripped[open + 2..]));
        }
    }
    (trimmed, None)
}
