use std::io::Cursor;

use perfumer::knowledge;
use perfumer::{
    ChatError, IntentRouter, Perfumer, PerfumeRecord, Recommender, Result, ScentLexicon,
};
use rand::rngs::mock::StepRng;

fn sample_bot<S: perfumer::SentimentScorer>(scorer: S) -> Perfumer<S, StepRng> {
    let recommender = Recommender::new(vec![
        PerfumeRecord::new("Rose Delight", "BrandA", "rose lavender"),
        PerfumeRecord::new("Citrus Splash", "BrandB", "citrus lemon"),
    ])
    .unwrap();
    let lexicon = ScentLexicon::new([("rose", vec!["rose"]), ("citrus", vec!["citrus"])]).unwrap();
    Perfumer::with_rng(
        "Perfumer",
        lexicon,
        recommender,
        IntentRouter::new(scorer),
        StepRng::new(0, 0),
    )
}

fn neutral(_: &str) -> Result<f64> {
    Ok(0.0)
}

fn session(bot: &mut Perfumer<impl perfumer::SentimentScorer, StepRng>, input: &str) -> String {
    let mut output = Vec::new();
    bot.run(Cursor::new(input.as_bytes()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn full_session_greets_answers_and_says_goodbye() {
    let mut bot = sample_bot(neutral);
    let transcript = session(&mut bot, "I like ROSE\nhello\n  Bye  \nnever read\n");

    assert!(transcript.starts_with("Hello, I am Perfumer,"));
    assert!(transcript.contains("Bot: You're in for a treat! How about the delightful [Rose Delight]"));
    assert!(transcript.contains(&format!("Bot: {}", knowledge::capability_banner())));
    assert!(transcript.trim_end().ends_with(knowledge::FAREWELL));
    assert_eq!(transcript.matches("\nYou: ").count(), 3);
    assert_eq!(transcript.matches("Bot: ").count(), 2);
}

#[test]
fn end_of_input_ends_the_session() {
    let mut bot = sample_bot(neutral);
    let transcript = session(&mut bot, "what time is it");
    assert!(transcript.contains("Bot: The time is "));
    assert!(transcript.trim_end().ends_with(knowledge::FAREWELL));
}

#[test]
fn exit_phrase_inside_a_sentence_is_routed() {
    let mut bot = sample_bot(neutral);
    let transcript = session(&mut bot, "say goodbye to me\nexit\n");
    assert!(transcript.contains("Bot: Sorry, I didn't quite catch that.\n"));
}

#[test]
fn failing_scorer_gets_a_notice_and_the_session_goes_on() {
    let failing = |_: &str| -> Result<f64> { Err(ChatError::scorer("offline")) };
    let mut bot = sample_bot(failing);
    let transcript = session(&mut bot, "qwerty\nI like citrus\nquit\n");
    assert_eq!(transcript.matches("Bot: ").count(), 2);
    assert!(transcript.contains(&format!("Bot: {}\n", knowledge::TURN_FAILED)));
    assert!(transcript.contains("[Citrus Splash]"));
}

#[test]
fn failing_scorer_is_returned_from_process_input() {
    let failing = |_: &str| -> Result<f64> { Err(ChatError::scorer("offline")) };
    let mut bot = sample_bot(failing);
    let err = bot.process_input("qwerty").unwrap_err();
    assert!(matches!(err, ChatError::ScorerFailure { .. }));
}

#[test]
fn seeded_sessions_repeat() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let build = || {
        let recommender = Recommender::new(vec![PerfumeRecord::new("A", "B", "rose")]).unwrap();
        let lexicon = ScentLexicon::new([("rose", vec!["rose"])]).unwrap();
        Perfumer::with_rng(
            "Perfumer",
            lexicon,
            recommender,
            IntentRouter::new(neutral),
            StdRng::seed_from_u64(42),
        )
    };
    let (mut first, mut second) = (build(), build());
    for text in ["tell me a joke", "rose", "brand", "history", "qwerty"] {
        assert_eq!(
            first.process_input(text).unwrap(),
            second.process_input(text).unwrap()
        );
    }
}
