//! A turn-based perfume consultant.
//!
//! Each utterance is either a scent request, answered by the keyword-overlap
//! [`Recommender`], or anything else, answered by the [`IntentRouter`] rule
//! cascade. [`Perfumer`] ties the two together and drives the session.

pub mod bot;
pub mod dataset;
pub mod error;
pub mod keywords;
pub mod knowledge;
pub mod lexicon;
pub mod recommend;
pub mod router;
pub mod sentiment;
pub mod settings;

pub use bot::Perfumer;
pub use dataset::{CsvDataset, DatasetProvider, PerfumeRecord};
pub use error::{ChatError, Result};
pub use lexicon::ScentLexicon;
pub use recommend::Recommender;
pub use router::{Intent, IntentRouter};
pub use sentiment::{VaderScorer, SentimentClassifier, SentimentScorer};
pub use settings::Settings;
