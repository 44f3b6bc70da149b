//! Respondent identity and per-question answer slots.

use serde::{Deserialize, Serialize};

use super::catalog::ChoiceLetter;
use crate::domain::foundation::ValidationError;

/// Placeholder exported when an identity field was left empty.
pub const MISSING_IDENTITY: &str = "N/A";

/// Name and company captured during intake. Values are stored trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    company: String,
}

impl Identity {
    pub fn new(name: impl AsRef<str>, company: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            company: company.as_ref().trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// True when both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.company.is_empty()
    }

    /// Fails on the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.company.is_empty() {
            return Err(ValidationError::empty_field("company"));
        }
        Ok(())
    }

    pub(crate) fn export_name(&self) -> &str {
        non_empty_or_placeholder(&self.name)
    }

    pub(crate) fn export_company(&self) -> &str {
        non_empty_or_placeholder(&self.company)
    }
}

fn non_empty_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        MISSING_IDENTITY
    } else {
        value
    }
}

/// One answer slot per question, index-aligned with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(Vec<Option<ChoiceLetter>>);

impl ResponseSet {
    /// Creates `len` unanswered slots.
    pub fn unanswered(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Builds a set from explicit slots.
    pub fn from_slots(slots: Vec<Option<ChoiceLetter>>) -> Self {
        Self(slots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The selection for a 0-based question index.
    pub fn get(&self, question_index: usize) -> Option<ChoiceLetter> {
        self.0.get(question_index).copied().flatten()
    }

    /// Records a selection, replacing any earlier one for that question.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for an unknown question index or a choice index above 3
    pub fn select(&mut self, question_index: usize, choice_index: usize) -> Result<ChoiceLetter, ValidationError> {
        if question_index >= self.0.len() {
            return Err(ValidationError::out_of_range(
                "question_index",
                0,
                self.0.len() as i32 - 1,
                question_index as i32,
            ));
        }
        let letter = ChoiceLetter::from_index(choice_index).ok_or_else(|| {
            ValidationError::out_of_range("choice_index", 0, 3, choice_index as i32)
        })?;
        self.0[question_index] = Some(letter);
        Ok(letter)
    }

    /// Clears every slot back to unanswered.
    pub fn clear(&mut self) {
        self.0.iter_mut().for_each(|slot| *slot = None);
    }

    /// True when every slot holds a selection.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// 1-based numbers of the questions still unanswered.
    pub fn missing_numbers(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Slots as letters, in question order.
    pub fn letters(&self) -> &[Option<ChoiceLetter>] {
        &self.0
    }

    /// Iterates `(0-based index, selection)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<ChoiceLetter>)> + '_ {
        self.0.iter().copied().enumerate()
    }
}
