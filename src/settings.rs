use std::path::PathBuf;

use serde::Deserialize;

/// Runtime settings, layered from `Config.toml` and `PERFUMER_*` variables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Name the bot introduces itself with.
    pub name: String,
    pub dataset_path: PathBuf,
    /// Overrides the built-in scent lexicon when set.
    pub lexicon_path: Option<PathBuf>,
    /// Seeds reply selection for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Perfumer".to_string(),
            dataset_path: PathBuf::from("data/perfume_dataset.csv"),
            lexicon_path: None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn load(file: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("PERFUMER"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let settings = Settings::load("definitely-not-here").unwrap();
        assert_eq!(settings.name, "Perfumer");
        assert_eq!(settings.dataset_path, PathBuf::from("data/perfume_dataset.csv"));
        assert_eq!(settings.lexicon_path, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("Perfumer.toml")).unwrap();
        writeln!(file, "name = \"Nose\"\nseed = 7\ndataset_path = \"perfumes.csv\"").unwrap();
        let base = dir.path().join("Perfumer");
        let settings = Settings::load(base.to_str().unwrap()).unwrap();
        assert_eq!(settings.name, "Nose");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.dataset_path, PathBuf::from("perfumes.csv"));
    }
}
