mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
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

    let analysis = env.run_json(&[
        "analyze",
        "AI-assisted collaborative research",
        "--context",
        "academic",
    ]);
    assert_eq!(analysis["ok"], true);
    validate("analyze.schema.json", &analysis["data"]);

    let policy = env.run_json(&["policy", "government", "national strategy"]);
    assert_eq!(policy["ok"], true);
    validate("policy.schema.json", &policy["data"]);

    let score = env.run_json(&["score"]);
    assert_eq!(score["ok"], true);
    validate("score.schema.json", &score["data"]);
}
