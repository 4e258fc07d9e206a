//! Ordered rule cascade for utterances that are not scent requests.
//!
//! [`RULES`] is evaluated top to bottom against the lower-cased utterance and
//! the first rule that fires decides the reply. Keyword rules are plain
//! substring tests, so "hi" fires on "this" and "when" fires on any sentence
//! containing it. When nothing fires the bot says it did not understand and
//! repeats its capabilities.

use chrono::{Local, NaiveTime};
use rand::RngCore;

use crate::error::Result;
use crate::knowledge::{self, Topic};
use crate::sentiment::{SentimentClassifier, SentimentScorer};

/// What a rule looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    Keywords(&'static [&'static str]),
    Happy,
    Upset,
    Angry,
    Zodiac,
}

/// Outcome of classifying an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    History,
    Brand,
    SelfDescription,
    SmallTalk,
    Joke,
    Help,
    Time,
    FollowUp,
    Happy,
    Upset,
    Angry,
    Zodiac(&'static str),
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub detector: Detector,
    pub intent: Intent,
}

const fn keywords(words: &'static [&'static str], intent: Intent) -> Rule {
    Rule {
        detector: Detector::Keywords(words),
        intent,
    }
}

/// Priority order of the cascade. For [`Detector::Zodiac`] the intent's
/// sign is a placeholder, replaced by the sign actually found.
pub const RULES: &[Rule] = &[
    keywords(
        &["perfume history", "history of perfume", "origin of perfume", "history"],
        Intent::History,
    ),
    keywords(
        &["perfume brands", "brand information", "perfume brand information", "brand"],
        Intent::Brand,
    ),
    keywords(
        &["who are you", "what do you do", "introduce yourself"],
        Intent::SelfDescription,
    ),
    keywords(
        &["hello", "hi", "bro", "small talk", "good morning", "good afternoon", "good evening"],
        Intent::SmallTalk,
    ),
    keywords(&["joke", "make fun"], Intent::Joke),
    keywords(&["help", "assist", "aid"], Intent::Help),
    keywords(&["what time is it", "current time", "time", "when"], Intent::Time),
    keywords(&["next", "other"], Intent::FollowUp),
    Rule {
        detector: Detector::Happy,
        intent: Intent::Happy,
    },
    Rule {
        detector: Detector::Upset,
        intent: Intent::Upset,
    },
    Rule {
        detector: Detector::Angry,
        intent: Intent::Angry,
    },
    Rule {
        detector: Detector::Zodiac,
        intent: Intent::Zodiac(""),
    },
];

pub struct IntentRouter<S> {
    sentiment: SentimentClassifier<S>,
    clock: fn() -> NaiveTime,
}

fn local_time() -> NaiveTime {
    Local::now().time()
}

impl<S: SentimentScorer> IntentRouter<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            sentiment: SentimentClassifier::new(scorer),
            clock: local_time,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    /// Walks [`RULES`] and returns the first intent that fires.
    ///
    /// Mood rules consult the scorer, so a scorer failure aborts
    /// classification of any utterance that reaches them.
    pub fn classify(&self, utterance: &str) -> Result<Intent> {
        let text = utterance.to_lowercase();
        for rule in RULES {
            let fired = match rule.detector {
                Detector::Keywords(words) => words.iter().any(|w| text.contains(w)),
                Detector::Happy => self.sentiment.is_happy(&text)?,
                Detector::Upset => self.sentiment.is_upset(&text)?,
                Detector::Angry => self.sentiment.is_angry(&text)?,
                Detector::Zodiac => {
                    if let Some(sign) = knowledge::find_zodiac(&text) {
                        return Ok(Intent::Zodiac(sign));
                    }
                    false
                }
            };
            if fired {
                return Ok(rule.intent);
            }
        }
        Ok(Intent::Fallback)
    }

    pub fn respond(&self, intent: Intent, rng: &mut dyn RngCore) -> String {
        match intent {
            Intent::History => Topic::History.reply(rng).to_string(),
            Intent::Brand => Topic::Brand.reply(rng).to_string(),
            Intent::SelfDescription => Topic::SelfDescription.reply(rng).to_string(),
            Intent::SmallTalk | Intent::FollowUp => knowledge::capability_banner(),
            Intent::Joke => Topic::Joke.reply(rng).to_string(),
            Intent::Help => Topic::Help.reply(rng).to_string(),
            Intent::Time => {
                let now = (self.clock)();
                knowledge::time_reply(&now.format("%H:%M:%S").to_string())
            }
            Intent::Happy => Topic::Happy.reply(rng).to_string(),
            Intent::Upset => Topic::Upset.reply(rng).to_string(),
            Intent::Angry => Topic::Angry.reply(rng).to_string(),
            Intent::Zodiac(sign) => {
                knowledge::zodiac_reply(sign, knowledge::zodiac_suggestion(sign))
            }
            Intent::Fallback => format!(
                "{}\n{}",
                Topic::NotUnderstood.reply(rng),
                knowledge::guidance_banner()
            ),
        }
    }

    pub fn route(&self, utterance: &str, rng: &mut dyn RngCore) -> Result<String> {
        let intent = self.classify(utterance)?;
        log::debug!("Routed {:?} to {:?}", utterance, intent);
        Ok(self.respond(intent, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;
    use rand::rngs::mock::StepRng;

    fn neutral(_: &str) -> Result<f64> {
        Ok(0.0)
    }

    fn router() -> IntentRouter<fn(&str) -> Result<f64>> {
        IntentRouter::new(neutral as fn(&str) -> Result<f64>)
    }

    #[test]
    fn keyword_rules_in_priority_order() {
        let router = router();
        let cases = [
            ("Tell me the history of perfume", Intent::History),
            ("any brand tips?", Intent::Brand),
            ("who are you", Intent::SelfDescription),
            ("hello", Intent::SmallTalk),
            ("tell me a joke", Intent::Joke),
            ("can you assist", Intent::Help),
            ("what time is it", Intent::Time),
            ("next", Intent::FollowUp),
            ("aries", Intent::Zodiac("aries")),
            ("qwerty", Intent::Fallback),
        ];
        for (text, expected) in cases {
            assert_eq!(router.classify(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn brand_beats_greeting() {
        let router = router();
        assert_eq!(router.classify("hello, which brand?").unwrap(), Intent::Brand);
    }

    #[test]
    fn history_beats_everything_after_it() {
        let router = router();
        assert_eq!(
            router.classify("hello, brand history joke").unwrap(),
            Intent::History
        );
    }

    #[test]
    fn substring_matching_is_imprecise_on_purpose() {
        let router = router();
        // "this" contains "hi".
        assert_eq!(router.classify("this").unwrap(), Intent::SmallTalk);
        // "said" contains "aid".
        assert_eq!(router.classify("you said").unwrap(), Intent::Help);
        // "when" picks the time rule whatever the question.
        assert_eq!(router.classify("when does spring come").unwrap(), Intent::Time);
        // "mother" contains "other".
        assert_eq!(router.classify("my mother").unwrap(), Intent::FollowUp);
    }

    #[test]
    fn matching_ignores_case() {
        let router = router();
        assert_eq!(router.classify("HISTORY").unwrap(), Intent::History);
        assert_eq!(router.classify("I'm a Leo").unwrap(), Intent::Zodiac("leo"));
    }

    #[test]
    fn mood_rules_run_after_keyword_rules() {
        let glowing = IntentRouter::new(|_: &str| -> Result<f64> { Ok(0.9) });
        assert_eq!(glowing.classify("hello").unwrap(), Intent::SmallTalk);
        assert_eq!(glowing.classify("great day").unwrap(), Intent::Happy);
    }

    #[test]
    fn mood_order_happy_upset_angry() {
        let router = router();
        // Keyword "delighted" and "furious" both present: happy wins.
        assert_eq!(router.classify("delighted yet furious").unwrap(), Intent::Happy);
        assert_eq!(router.classify("upset and furious").unwrap(), Intent::Upset);
        assert_eq!(router.classify("furious").unwrap(), Intent::Angry);

        // -0.6 is below both the upset and angry thresholds.
        let gloomy = IntentRouter::new(|_: &str| -> Result<f64> { Ok(-0.6) });
        assert_eq!(gloomy.classify("meh").unwrap(), Intent::Upset);
    }

    #[test]
    fn mood_rules_run_before_zodiac() {
        let router = router();
        assert_eq!(router.classify("happy aries").unwrap(), Intent::Happy);
    }

    #[test]
    fn zodiac_scan_follows_sign_order() {
        let router = router();
        assert_eq!(router.classify("pisces or aries").unwrap(), Intent::Zodiac("aries"));
    }

    #[test]
    fn scorer_failure_surfaces_past_keyword_rules() {
        let failing = IntentRouter::new(|_: &str| -> Result<f64> {
            Err(ChatError::scorer("sentiment error"))
        });
        assert_eq!(failing.classify("hello").unwrap(), Intent::SmallTalk);
        let err = failing.classify("qwerty").unwrap_err();
        assert!(matches!(err, ChatError::ScorerFailure { .. }));
    }

    #[test]
    fn time_reply_uses_the_clock() {
        let router = router().with_clock(|| NaiveTime::from_hms_opt(9, 5, 7).expect("valid time"));
        let mut rng = StepRng::new(0, 0);
        let reply = router.route("current time", &mut rng).unwrap();
        assert!(reply.starts_with("The time is 09:05:07."));
    }

    #[test]
    fn zodiac_reply_names_sign_and_scent() {
        let router = router();
        let mut rng = StepRng::new(0, 0);
        let reply = router.route("I am a Scorpio", &mut rng).unwrap();
        assert!(reply.starts_with("Based on your zodiac sign (scorpio)"));
        assert!(reply.contains("leather and oud"));
    }

    #[test]
    fn fallback_appends_guidance() {
        let router = router();
        let mut rng = StepRng::new(0, 0);
        let reply = router.route("qwerty", &mut rng).unwrap();
        assert!(reply.starts_with("Sorry, I didn't quite catch that.\n"));
        assert!(reply.ends_with(&knowledge::guidance_banner()));
    }

    #[test]
    fn greeting_and_follow_up_share_the_banner() {
        let router = router();
        let mut rng = StepRng::new(0, 0);
        let banner = knowledge::capability_banner();
        assert_eq!(router.route("hello", &mut rng).unwrap(), banner);
        assert_eq!(router.route("next", &mut rng).unwrap(), banner);
    }

    #[test]
    fn vader_moods_reach_their_replies() {
        let router = IntentRouter::new(crate::sentiment::VaderScorer);
        assert_eq!(router.classify("what a lovely day").unwrap(), Intent::Happy);
        assert_eq!(router.classify("i feel lonely").unwrap(), Intent::Upset);
    }
}
