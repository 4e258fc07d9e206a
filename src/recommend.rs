//! Keyword-overlap perfume recommender.
//!
//! A query narrows the dataset to records whose notes mention the scent
//! category, scores each candidate by how many query keywords occur in its
//! notes, and answers with the best candidate. Ties go to the candidate that
//! comes first in dataset order.

use rand::RngCore;

use crate::dataset::{DatasetProvider, PerfumeRecord};
use crate::error::{ChatError, Result};
use crate::keywords::extract_keywords;
use crate::knowledge;

#[derive(Debug, Clone)]
pub struct Recommender {
    records: Vec<PerfumeRecord>,
}

impl Recommender {
    /// Fails fast when there is nothing to recommend from.
    pub fn new(records: Vec<PerfumeRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChatError::configuration("perfume dataset has no rows"));
        }
        Ok(Self { records })
    }

    pub fn from_provider(provider: &dyn DatasetProvider) -> Result<Self> {
        Self::new(provider.load()?)
    }

    pub fn records(&self) -> &[PerfumeRecord] {
        &self.records
    }

    /// Records whose notes contain `category`, ignoring case. An empty
    /// category keeps everything.
    pub fn filter_by_category(&self, category: &str) -> Vec<&PerfumeRecord> {
        if category.is_empty() {
            return self.records.iter().collect();
        }
        let category = category.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.notes.to_lowercase().contains(&category))
            .collect()
    }

    /// Best record for `utterance` within `category`, with its score.
    pub fn best_match(&self, utterance: &str, category: &str) -> Result<(&PerfumeRecord, usize)> {
        let keywords = extract_keywords(utterance);
        let candidates = self.filter_by_category(category);
        let scores = score_candidates(&candidates, &keywords);
        let best = select_best(&scores).ok_or_else(|| ChatError::NoCandidates {
            category: category.to_string(),
        })?;
        log::debug!(
            "Picked '{}' (score {}) out of {} candidates for '{}'",
            candidates[best].name,
            scores[best],
            candidates.len(),
            category
        );
        Ok((candidates[best], scores[best]))
    }

    pub fn recommend(&self, utterance: &str, category: &str, rng: &mut dyn RngCore) -> Result<String> {
        let (record, _) = self.best_match(utterance, category)?;
        Ok(knowledge::recommendation_reply(
            &record.name,
            &record.brand,
            &record.notes,
            rng,
        ))
    }
}

/// Number of keywords occurring in a record's notes. Repeated keywords count
/// once each time they appear in `keywords`.
pub fn score(record: &PerfumeRecord, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| record.notes.contains(keyword.as_str()))
        .count()
}

pub fn score_candidates(candidates: &[&PerfumeRecord], keywords: &[String]) -> Vec<usize> {
    candidates.iter().map(|record| score(record, keywords)).collect()
}

/// Index of the first maximum. `None` only for an empty slice.
pub fn select_best(scores: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some(b) if s <= scores[b] => {}
            _ => best = Some(i),
        }
    }
    best
}
