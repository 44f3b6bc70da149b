//! GetCatalogHandler - Query handler for the question battery.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::assessment::{AssessmentCatalog, Question, CHOICES_PER_QUESTION};

#[derive(Debug, Clone, Default)]
pub struct GetCatalogQuery;

/// Display-ready catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub total_questions: usize,
    pub choices_per_question: usize,
    pub questions: Vec<Question>,
}

pub struct GetCatalogHandler {
    catalog: Arc<AssessmentCatalog>,
}

impl GetCatalogHandler {
    pub fn new(catalog: Arc<AssessmentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, _query: GetCatalogQuery) -> CatalogView {
        CatalogView {
            total_questions: self.catalog.len(),
            choices_per_question: CHOICES_PER_QUESTION,
            questions: self.catalog.questions().to_vec(),
        }
    }
}
