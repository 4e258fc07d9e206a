use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use perfumer::{
    CsvDataset, IntentRouter, Perfumer, Recommender, ScentLexicon, Settings, VaderScorer,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load("Config").context("Failed to read settings")?;

    let dataset = CsvDataset::new(&settings.dataset_path);
    if !dataset.path().exists() {
        log::error!("Perfume dataset not found at {:?}.", dataset.path());
        log::error!("Set `dataset_path` in Config.toml or PERFUMER_DATASET_PATH.");
        return Err(anyhow::anyhow!("Dataset file not found."));
    }
    let recommender = Recommender::from_provider(&dataset)
        .with_context(|| format!("Cannot use dataset {:?}", dataset.path()))?;

    let lexicon = match &settings.lexicon_path {
        Some(path) => ScentLexicon::load_from_file(path)
            .with_context(|| format!("Cannot load scent lexicon {:?}", path))?,
        None => ScentLexicon::builtin().context("Built-in scent lexicon is invalid")?,
    };

    log::info!(
        "Starting {} with {} perfumes and {} scent categories",
        settings.name,
        recommender.records().len(),
        lexicon.len()
    );
    let router = IntentRouter::new(VaderScorer);
    let mut bot = match settings.seed {
        Some(seed) => Perfumer::with_rng(
            settings.name.clone(),
            lexicon,
            recommender,
            router,
            StdRng::seed_from_u64(seed),
        ),
        None => Perfumer::new(settings.name.clone(), lexicon, recommender, router),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    bot.run(stdin.lock(), stdout.lock())?;
    Ok(())
}
