use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::{ChatError, Result};
use crate::knowledge;
use crate::lexicon::ScentLexicon;
use crate::recommend::Recommender;
use crate::router::IntentRouter;
use crate::sentiment::SentimentScorer;

/// Phrases that end the session, compared after trimming and lower-casing.
pub const EXIT_PHRASES: &[&str] = &["exit", "quit", "bye", "goodbye"];

pub fn is_exit_phrase(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_PHRASES.contains(&line.as_str())
}

/// The perfume consultant: scent requests go to the recommender, everything
/// else to the intent router.
pub struct Perfumer<S, R = StdRng> {
    name: String,
    lexicon: ScentLexicon,
    recommender: Recommender,
    router: IntentRouter<S>,
    rng: R,
}

impl<S: SentimentScorer> Perfumer<S, StdRng> {
    pub fn new(
        name: impl Into<String>,
        lexicon: ScentLexicon,
        recommender: Recommender,
        router: IntentRouter<S>,
    ) -> Self {
        Self::with_rng(name, lexicon, recommender, router, StdRng::from_entropy())
    }
}

impl<S: SentimentScorer, R: RngCore> Perfumer<S, R> {
    pub fn with_rng(
        name: impl Into<String>,
        lexicon: ScentLexicon,
        recommender: Recommender,
        router: IntentRouter<S>,
        rng: R,
    ) -> Self {
        Self {
            name: name.into(),
            lexicon,
            recommender,
            router,
            rng,
        }
    }

    pub fn greeting(&self) -> String {
        knowledge::greeting(&self.name)
    }

    pub fn farewell(&self) -> &'static str {
        knowledge::FAREWELL
    }

    /// Reply for one utterance.
    ///
    /// The first lexicon category with a keyword in the utterance wins and
    /// goes to the recommender. An empty candidate set becomes the apology
    /// reply. Scorer failures are returned.
    pub fn process_input(&mut self, utterance: &str) -> Result<String> {
        let text = utterance.to_lowercase();
        if let Some(category) = self.lexicon.detect(&text) {
            log::debug!("Scent category '{}' detected", category);
            return match self.recommender.recommend(&text, category, &mut self.rng) {
                Ok(reply) => Ok(reply),
                Err(ChatError::NoCandidates { category }) => {
                    log::info!("No perfume carries '{}'", category);
                    Ok(knowledge::NO_PERFUME_FOUND.to_string())
                }
                Err(err) => Err(err),
            };
        }
        self.router.route(&text, &mut self.rng)
    }

    /// Runs the conversation until an exit phrase or end of input.
    ///
    /// A turn whose scorer fails is logged and answered with a fixed notice;
    /// the session carries on with the next line.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> Result<()> {
        writeln!(output, "{}", self.greeting())?;
        let mut line = String::new();
        loop {
            write!(output, "\nYou: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::info!("Input closed, ending session");
                break;
            }
            let received = line.trim().to_lowercase();
            if is_exit_phrase(&received) {
                break;
            }

            match self.process_input(&received) {
                Ok(reply) => writeln!(output, "Bot: {}", reply)?,
                Err(err) => {
                    log::error!("Turn failed for {:?}: {}", received, err);
                    writeln!(output, "Bot: {}", knowledge::TURN_FAILED)?;
                }
            }
        }
        writeln!(output, "{}", self.farewell())?;
        output.flush()?;
        Ok(())
    }
}
