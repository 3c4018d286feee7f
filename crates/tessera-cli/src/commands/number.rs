use crate::support::{fail, hash_json, parse_integer, print_json};
use serde_json::json;
use tessera_hash::{Hash, hash_number};

pub fn run(value: String, float: bool, json_output: bool) {
    let (kind, hash) = if float {
        let parsed: f64 = value
            .trim()
            .parse()
            .unwrap_or_else(|_| fail(format!("not a float: {value:?}")));
        ("float", hash_number(parsed))
    } else {
        let bits = parse_integer(&value).unwrap_or_else(|e| fail(e));
        ("integer", hash_number(bits))
    };
    tracing::debug!(kind, %hash, "hashed number");

    if json_output {
        print_json(&json!({
            "action": "number",
            "input": value,
            "kind": kind,
            "hash": hash_json(hash),
        }));
    } else {
        print!("{}", render(&value, kind, hash));
    }
}

fn render(value: &str, kind: &str, hash: Hash) -> String {
    format!("tessera number\n  Input: {value} ({kind})\n  Hash: {hash}\n")
}
