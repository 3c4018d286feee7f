use crate::cli::BytesInput;
use crate::support::{fail, hash_json, parse_hex, print_json};
use serde_json::json;
use std::fs;
use tessera_hash::{Hash, hash_bytes};
use tessera_kernel::KernelConfig;

pub fn run(input: BytesInput, config: &KernelConfig, json_output: bool) {
    let (source, bytes) = read_input(input, config);
    let hash = hash_bytes(&bytes);
    tracing::debug!(source, length = bytes.len(), %hash, "hashed byte run");

    if json_output {
        print_json(&json!({
            "action": "bytes",
            "source": source,
            "length": bytes.len(),
            "hash": hash_json(hash),
        }));
    } else {
        print!("{}", render(source, bytes.len(), hash));
    }
}

fn read_input(input: BytesInput, config: &KernelConfig) -> (&'static str, Vec<u8>) {
    if let Some(text) = input.text {
        return ("text", text.into_bytes());
    }
    if let Some(hex) = input.hex {
        let bytes = parse_hex(&hex, &config.assumptions()).unwrap_or_else(|e| fail(e));
        return ("hex", bytes);
    }
    match input.file {
        Some(path) => {
            let bytes = fs::read(&path)
                .unwrap_or_else(|e| fail(format!("failed to read {}: {e}", path.display())));
            ("file", bytes)
        }
        None => fail("one of --text, --hex or --file is required"),
    }
}

fn render(source: &str, length: usize, hash: Hash) -> String {
    format!("tessera bytes\n  Source: {source}\n  Length: {length}\n  Hash: {hash}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_summary() {
        insta::assert_snapshot!(render("text", 3, hash_bytes(b"abc")), @r"
        tessera bytes
          Source: text
          Length: 3
          Hash: 0061beb719813114
        ");
    }

    #[test]
    fn text_input_is_taken_verbatim() {
        let input = BytesInput {
            text: Some("hello world".to_string()),
            hex: None,
            file: None,
        };
        let (source, bytes) = read_input(input, &KernelConfig::default());
        assert_eq!(source, "text");
        assert_eq!(hash_bytes(&bytes), Hash(0x0a292f4fe1ea3866));
    }
}
