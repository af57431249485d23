// src/config/load.rs
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{Defuzzifier, EngineConfig, EngineConfigFile};
use crate::engine::centroid_label_mismatches;
use crate::lexicon::Lexicon;

pub const ENV_ENGINE_CONFIG_PATH: &str = "FUZZY_SENTIMENT_CONFIG";
pub const ENV_LEXICON_PATH: &str = "FUZZY_SENTIMENT_LEXICON";

pub const DEFAULT_ENGINE_CONFIG_TOML: &str = "config/engine.toml";
pub const DEFAULT_ENGINE_CONFIG_JSON: &str = "config/engine.json";

/// Load and validate an engine config from an explicit path. Supports TOML or JSON.
pub fn load_engine_config_from(path: &Path) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading engine config from {}", path.display()))?;
    let file: EngineConfigFile = parse(&content, &extension(path))
        .with_context(|| format!("parsing engine config {}", path.display()))?;
    let cfg = file.resolve();
    cfg.validate()
        .with_context(|| format!("validating engine config {}", path.display()))?;
    info!(
        path = %path.display(),
        profile = ?cfg.profile,
        rules = cfg.rules.len(),
        defuzzifier = ?cfg.defuzzifier,
        "engine config loaded"
    );
    if cfg.defuzzifier == Defuzzifier::Centroid {
        for rule in centroid_label_mismatches(&cfg) {
            warn!(
                path = %path.display(),
                rule = %rule.id,
                target = rule.target,
                "rule target and its centroid output set fall under different labels"
            );
        }
    }
    Ok(cfg)
}

/// Load engine config using env var + fallbacks:
/// 1) $FUZZY_SENTIMENT_CONFIG
/// 2) config/engine.toml
/// 3) config/engine.json
/// 4) built-in wide profile
pub fn load_engine_config_default() -> Result<EngineConfig> {
    if let Ok(p) = std::env::var(ENV_ENGINE_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_engine_config_from(&pb);
        } else {
            return Err(anyhow!(
                "{ENV_ENGINE_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
    }
    for candidate in [DEFAULT_ENGINE_CONFIG_TOML, DEFAULT_ENGINE_CONFIG_JSON] {
        let pb = PathBuf::from(candidate);
        if pb.exists() {
            return load_engine_config_from(&pb);
        }
    }
    Ok(EngineConfig::wide())
}

/// Load a lexicon from an explicit path. Supports TOML or JSON.
/// Overlapping lists are logged, not rejected.
pub fn load_lexicon_from(path: &Path) -> Result<Lexicon> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon from {}", path.display()))?;
    let lexicon: Lexicon = parse(&content, &extension(path))
        .with_context(|| format!("parsing lexicon {}", path.display()))?;
    let overlaps = lexicon.overlaps();
    if !overlaps.is_empty() {
        warn!(path = %path.display(), ?overlaps, "lexicon lists overlap; first matching category wins");
    }
    if lexicon.is_empty() {
        warn!(path = %path.display(), "lexicon is empty; every text will classify as neutral");
    }
    Ok(lexicon)
}

/// $FUZZY_SENTIMENT_LEXICON, else the built-in Portuguese seed.
pub fn load_lexicon_default() -> Result<Lexicon> {
    match std::env::var(ENV_LEXICON_PATH) {
        Ok(p) => load_lexicon_from(Path::new(&p)),
        Err(_) => Ok(Lexicon::portuguese()),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn parse<T: DeserializeOwned>(s: &str, hint_ext: &str) -> Result<T> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        // Unknown extension: TOML first, then JSON.
        _ => match toml::from_str(s) {
            Ok(v) => Ok(v),
            Err(toml_err) => serde_json::from_str(s).map_err(|json_err| {
                anyhow!("unsupported config format (toml: {toml_err}; json: {json_err})")
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use std::{env, fs};

    #[test]
    fn parse_prefers_hint_and_falls_back() {
        let cfg: EngineConfigFile = parse(r#"profile = "narrow""#, "toml").unwrap();
        assert_eq!(cfg.profile, Some(Profile::Narrow));

        let cfg: EngineConfigFile = parse(r#"{"defuzzifier":"centroid"}"#, "").unwrap();
        assert_eq!(cfg.defuzzifier, Some(Defuzzifier::Centroid));

        assert!(parse::<EngineConfigFile>("profile = [", "txt").is_err());
    }

    #[test]
    fn invalid_config_is_rejected_with_context() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("bad.toml");
        fs::write(
            &p,
            r#"
[thresholds]
negative_below = 0.9
positive_from = 0.1
"#,
        )
        .unwrap();
        let err = load_engine_config_from(&p).unwrap_err();
        assert!(format!("{err:#}").contains("invalid thresholds"));
    }

    #[test]
    fn centroid_boundary_target_loads_with_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("edge.toml");
        fs::write(
            &p,
            r#"
defuzzifier = "centroid"

[[rules]]
id = "edge"
conditions = [["fp", "high"]]
target = 0.3
"#,
        )
        .unwrap();
        let cfg = load_engine_config_from(&p).unwrap();
        assert_eq!(centroid_label_mismatches(&cfg).len(), 1);
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        // Isolate CWD so the repo's own config/ is not picked up.
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_ENGINE_CONFIG_PATH);

        assert_eq!(load_engine_config_default().unwrap(), EngineConfig::wide());

        let cfg_dir = tmp.path().join("config");
        fs::create_dir_all(&cfg_dir).unwrap();
        fs::write(cfg_dir.join("engine.json"), r#"{"profile":"narrow"}"#).unwrap();
        assert_eq!(load_engine_config_default().unwrap(), EngineConfig::narrow());

        env::set_var(ENV_ENGINE_CONFIG_PATH, tmp.path().join("missing.toml"));
        assert!(load_engine_config_default().is_err());
        env::remove_var(ENV_ENGINE_CONFIG_PATH);

        env::set_current_dir(&old).unwrap();
    }
}
