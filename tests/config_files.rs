// tests/config_files.rs
use fuzzy_sentiment::config::{
    load_engine_config_default, load_engine_config_from, load_lexicon_default, load_lexicon_from,
    ENV_ENGINE_CONFIG_PATH, ENV_LEXICON_PATH,
};
use fuzzy_sentiment::{Defuzzifier, EngineConfig, Label, Lexicon, Profile, Variable};
use std::{env, fs};

#[test]
fn toml_profile_with_custom_rules() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("engine.toml");
    fs::write(
        &p,
        r#"
profile = "narrow"
defuzzifier = "weighted_average"

[thresholds]
negative_below = 0.3
positive_from = 0.7

[[rules]]
id = "positive"
conditions = [["fp", "high"]]
target = 0.9

[[rules]]
id = "negated"
conditions = [["fp", "high"], ["n", "high"]]
target = 0.1
"#,
    )
    .unwrap();

    let cfg = load_engine_config_from(&p).unwrap();
    assert_eq!(cfg.profile, Some(Profile::Narrow));
    assert_eq!(cfg.membership, EngineConfig::narrow().membership);
    assert_eq!(cfg.rules.len(), 2);
    assert_eq!(cfg.rules.rules()[1].conditions[1], (Variable::N, fuzzy_sentiment::Term::High));
    assert_eq!(cfg.thresholds.label(0.69), Label::Neutral);
}

#[test]
fn json_full_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("engine.json");
    let original = EngineConfig::wide().with_defuzzifier(Defuzzifier::Centroid);
    fs::write(&p, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let loaded = load_engine_config_from(&p).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn invalid_membership_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("engine.toml");
    fs::write(
        &p,
        r#"
[membership.fp]
low = [0.3, 0.1]
medium = [0.2, 0.4, 0.6]
high = [0.4, 0.7]
"#,
    )
    .unwrap();
    let err = load_engine_config_from(&p).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("fp.low"), "{msg}");
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("engine.toml");
    fs::write(&p, "profil = \"wide\"\n").unwrap();
    assert!(load_engine_config_from(&p).is_err());
}

#[test]
fn lexicon_from_toml_and_json() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("lexicon.toml");
    fs::write(
        &p_toml,
        r#"
positive = ["Great", " good "]
negative = ["bad"]
intensifiers = ["very"]
negations = ["not"]
"#,
    )
    .unwrap();
    let lx = load_lexicon_from(&p_toml).unwrap();
    assert!(lx.positive.contains("good"));
    assert_eq!(lx.len(), 5);

    let p_json = dir.path().join("lexicon.json");
    fs::write(&p_json, r#"{"positive":["yes"],"negations":["no"]}"#).unwrap();
    let lx = load_lexicon_from(&p_json).unwrap();
    assert_eq!(lx.len(), 2);
}

#[test]
fn lexicon_with_misspelled_list_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let p_json = dir.path().join("lexicon.json");
    fs::write(&p_json, r#"{"positive":["gostei"],"negation":["não"]}"#).unwrap();
    let err = load_lexicon_from(&p_json).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("negation"), "{msg}");

    let p_toml = dir.path().join("lexicon.toml");
    fs::write(&p_toml, "positive = [\"gostei\"]\nnegation = [\"não\"]\n").unwrap();
    assert!(load_lexicon_from(&p_toml).is_err());
}

#[test]
fn duplicate_rule_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("engine.toml");
    fs::write(
        &p,
        r#"
[[rules]]
id = "pos"
conditions = [["fp", "high"]]
target = 0.8

[[rules]]
id = "pos"
conditions = [["fn", "high"]]
target = 0.2
"#,
    )
    .unwrap();
    let err = load_engine_config_from(&p).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("duplicate rule id"), "{msg}");
}

#[serial_test::serial]
#[test]
fn defaults_use_env_then_fallbacks() {
    // Isolate CWD so the repo's config/ is not read.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_ENGINE_CONFIG_PATH);
    env::remove_var(ENV_LEXICON_PATH);

    // 1) Nothing on disk → built-ins
    assert_eq!(load_engine_config_default().unwrap(), EngineConfig::wide());
    assert_eq!(load_lexicon_default().unwrap(), Lexicon::portuguese());

    // 2) config/engine.toml fallback
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("engine.toml"), "profile = \"narrow\"\n").unwrap();
    assert_eq!(load_engine_config_default().unwrap(), EngineConfig::narrow());

    // 3) ENV wins
    let p_env = tmp.path().join("custom.json");
    fs::write(&p_env, r#"{"defuzzifier":"centroid"}"#).unwrap();
    env::set_var(ENV_ENGINE_CONFIG_PATH, p_env.display().to_string());
    let cfg = load_engine_config_default().unwrap();
    assert_eq!(cfg.defuzzifier, Defuzzifier::Centroid);
    assert_eq!(cfg.profile, Some(Profile::Wide));
    env::remove_var(ENV_ENGINE_CONFIG_PATH);

    let p_lex = tmp.path().join("lex.json");
    fs::write(&p_lex, r#"{"positive":["sim"]}"#).unwrap();
    env::set_var(ENV_LEXICON_PATH, p_lex.display().to_string());
    let c = fuzzy_sentiment::classifier_from_env().unwrap();
    assert_eq!(c.classify("sim").unwrap().label, Label::Positive);
    assert_eq!(c.engine().config(), &EngineConfig::narrow());
    env::remove_var(ENV_LEXICON_PATH);

    env::set_current_dir(&old).unwrap();
}

#[test]
fn shipped_config_files_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config");

    let engine = load_engine_config_from(&root.join("engine.toml")).unwrap();
    assert_eq!(engine, EngineConfig::wide());

    let narrow = load_engine_config_from(&root.join("narrow.toml")).unwrap();
    assert_eq!(narrow.membership, EngineConfig::narrow().membership);
    assert_eq!(narrow.rules, fuzzy_sentiment::RuleBase::minimal());

    let lexicon = load_lexicon_from(&root.join("lexicon.toml")).unwrap();
    assert_eq!(lexicon, Lexicon::portuguese());
}
