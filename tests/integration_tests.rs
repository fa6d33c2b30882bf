use small_nn::core::OverwritePolicy;
use small_nn::{
    DummyMachine, LocalModelStore, ModelKind, ModelStore, Module, NetError, Network,
    NetworkEngine, TomlConfig,
};
use tempfile::TempDir;

#[test]
fn test_save_creates_directory_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let models_dir = temp_dir.path().join("models");
    assert!(!models_dir.exists());

    let store = LocalModelStore::new(&models_dir);
    let model = DummyMachine::default();
    let path = model.save_model(&store, None).unwrap();

    assert!(models_dir.is_dir());
    assert_eq!(path, models_dir.join("dummy_machine.json"));
    assert!(path.exists());
}

#[test]
fn test_save_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalModelStore::new(temp_dir.path().join("models"));
    let model = DummyMachine::new("twice").unwrap();

    let first = model.save_model(&store, None).unwrap();
    let second = model.save_model(&store, None).unwrap();

    assert_eq!(first, second);
    let entries = std::fs::read_dir(temp_dir.path().join("models")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_saved_record_restores_same_behaviour() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalModelStore::new(temp_dir.path());
    let model = DummyMachine::new("round_trip").unwrap();
    model.save_model(&store, None).unwrap();

    let record = store.load_record("round_trip").unwrap();
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["round_trip"]);

    let restored = record.into_model().unwrap();
    assert_eq!(restored.model_name(), "round_trip");
    assert_eq!(restored.forward(3.5_f64), model.forward(3.5_f64));
    assert_eq!(restored.forward("x"), 60);
}

#[test]
fn test_saved_file_is_single_key_json_object() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalModelStore::new(temp_dir.path());
    let path = DummyMachine::new("shape")
        .unwrap()
        .save_model(&store, Some(&serde_json::json!({"ignored": true})))
        .unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(object["shape"]["model_name"], "shape");
    assert_eq!(object["shape"]["kind"], "dummy");
}

#[test]
fn test_save_overwrites_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalModelStore::new(temp_dir.path());
    let path = store.record_path("dummy_machine");
    std::fs::write(&path, b"stale").unwrap();

    DummyMachine::default().save_model(&store, None).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"dummy_machine\""));
}

#[test]
fn test_refuse_policy_from_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let toml_content = format!(
        "[model]\nname = \"guarded\"\n\n[storage]\ndirectory = '{}'\nextension = \"p\"\non_existing = \"refuse\"\n",
        temp_dir.path().display()
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    let store = LocalModelStore::from_settings(&config);
    assert_eq!(
        store.record_path("guarded"),
        temp_dir.path().join("guarded.p")
    );

    let network = config.model.kind.build(config.model.name.as_deref()).unwrap();
    network.save_model(&store, None).unwrap();

    let err = network.save_model(&store, None).unwrap_err();
    assert!(matches!(err, NetError::ModelAlreadyExists { .. }));

    let default_store = LocalModelStore::new(temp_dir.path())
        .with_extension("p")
        .with_overwrite_policy(OverwritePolicy::Overwrite);
    assert!(network.save_model(&default_store, None).is_ok());
}

#[test]
fn test_abstract_network_cannot_be_built() {
    let err = ModelKind::Network.build(Some("anything")).unwrap_err();
    assert!(matches!(err, NetError::UnimplementedCapability { .. }));
}

#[test]
fn test_engine_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalModelStore::new(temp_dir.path().join("models"));
    let network = ModelKind::Dummy.build(None).unwrap();

    let engine = NetworkEngine::with_store(network, &store);
    let report = engine.run(serde_json::json!([1, 2, 3]), None).unwrap();

    assert_eq!(report.output, 60);
    assert!(report.passed);
    let saved = report.saved_to.unwrap();
    assert!(saved.ends_with("models/dummy_machine.json"));
    assert!(saved.exists());
}

#[test]
fn test_bundled_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/small-nn.toml");
    let config = TomlConfig::from_file(path).unwrap();

    assert_eq!(config.model.kind, ModelKind::Dummy);
    assert_eq!(config.model_name(), "dummy_machine");
    assert_eq!(config.storage.on_existing, OverwritePolicy::Overwrite);
}
