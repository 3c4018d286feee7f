use serde_json::Value;
use std::path::Path;
use tessera_hash::Hash;
use tessera_kernel::{Assumptions, Exception, KernelConfig, USER_ASSUMES};

pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn load_config_or_exit(path: Option<&Path>) -> KernelConfig {
    let config = match path {
        Some(path) => KernelConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => KernelConfig::default(),
    };
    config.with_env_override().unwrap_or_else(|e| fail(e))
}

pub fn print_json(payload: &Value) {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("json serialization: {e}")),
    }
}

pub fn hash_json(hash: Hash) -> Value {
    serde_json::json!({
        "value": hash,
        "hex": hash.to_string(),
    })
}

/// Parse an integer argument into its 64-bit hashing pattern.
///
/// Unsigned values up to `u64::MAX` are taken as-is, negative values
/// sign-extend, matching `hash_number` on the typed value.
pub fn parse_integer(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    if let Ok(unsigned) = trimmed.parse::<u64>() {
        return Ok(unsigned);
    }
    trimmed
        .parse::<i64>()
        .map(|signed| signed as u64)
        .map_err(|_| format!("not a 64-bit integer: {raw:?}"))
}

/// Decode hex digits, ignoring whitespace.
///
/// An odd digit count is rejected when user-level assumptions are enabled.
/// With checks off the missing leading `0` is implied.
pub fn parse_hex(raw: &str, assumptions: &Assumptions) -> Result<Vec<u8>, Exception> {
    let mut digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    assumptions.assume(
        USER_ASSUMES,
        digits.len() % 2 == 0,
        "hex input must have an even number of digits",
    )?;
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }

    hex::decode(&digits).map_err(|e| Exception::convert(format!("invalid hex input: {e}")))
}
