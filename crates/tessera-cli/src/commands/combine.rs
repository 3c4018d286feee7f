use crate::support::{fail, hash_json, parse_integer, print_json};
use serde_json::json;
use tessera_hash::{Hash, combine_iter, hash_number};

pub fn run(values: Vec<String>, json_output: bool) {
    let parts: Vec<Hash> = values
        .iter()
        .map(|raw| hash_number(parse_integer(raw).unwrap_or_else(|e| fail(e))))
        .collect();
    let hash = combine_iter(parts.iter().copied());
    tracing::debug!(count = parts.len(), %hash, "combined numbers");

    if json_output {
        let parts_json: Vec<_> = values
            .iter()
            .zip(&parts)
            .map(|(input, part)| json!({ "input": input, "hash": hash_json(*part) }))
            .collect();
        print_json(&json!({
            "action": "combine",
            "count": parts.len(),
            "parts": parts_json,
            "hash": hash_json(hash),
        }));
    } else {
        print!("{}", render(&values, &parts, hash));
    }
}

fn render(values: &[String], parts: &[Hash], hash: Hash) -> String {
    let mut out = String::from("tessera combine\n");
    for (input, part) in values.iter().zip(parts) {
        out.push_str(&format!("  {input}: {part}\n"));
    }
    out.push_str(&format!("  Hash: {hash}\n"));
    out
}
