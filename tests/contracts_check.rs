use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).expect("read schema");
    serde_json::from_str(&raw).expect("parse schema")
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();
    let target = env.write_doc(
        "draft.md",
        "# Draft\n\nRotation policy. Rotation matters for tokens.\n",
    );

    let report = env.run_json(&["validate"]);
    assert_eq!(report["ok"], true);
    validate("validate.schema.json", &report["data"]);

    let stats = env.run_json(&["stats", "--top", "5"]);
    assert_eq!(stats["ok"], true);
    validate("stats.schema.json", &stats["data"]);

    let graph = env.run_json(&["graph"]);
    assert_eq!(graph["ok"], true);
    validate("graph.schema.json", &graph["data"]);

    let suggest = env.run_json(&[
        "suggest",
        "--confidence",
        target.to_str().expect("target utf8"),
    ]);
    assert_eq!(suggest["ok"], true);
    validate("suggest.schema.json", &suggest["data"]);
}
