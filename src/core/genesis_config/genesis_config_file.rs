// src/core/genesis_config/genesis_config_file.rs

use std::fs;
use std::path::Path;
use serde_json::{Map, Value};
use log::info;
use crate::core::error::GenesisError;
use crate::core::genesis_types::{GenesisSpec, InitialAllocation};

/// Reads one spec (JSON object) or several (JSON array of objects) from disk.
pub fn load_spec_file(path: &Path) -> Result<Vec<GenesisSpec>, GenesisError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| GenesisError::Io(format!("{}: {}", path.display(), e)))?;
    let specs = parse_specs_json(&raw)?;
    info!("Loaded {} genesis spec(s) from {}", specs.len(), path.display());
    Ok(specs)
}

pub fn parse_specs_json(raw: &str) -> Result<Vec<GenesisSpec>, GenesisError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| spec_from_value(item, &format!("[{}].", i)))
            .collect(),
        value => Ok(vec![spec_from_value(&value, "")?]),
    }
}

pub fn parse_spec_json(raw: &str) -> Result<GenesisSpec, GenesisError> {
    let value: Value = serde_json::from_str(raw)?;
    spec_from_value(&value, "")
}

fn spec_from_value(value: &Value, prefix: &str) -> Result<GenesisSpec, GenesisError> {
    let obj = value
        .as_object()
        .ok_or_else(|| GenesisError::invalid_field(format!("{}spec", prefix), "must be a JSON object"))?;

    let chain_id = string_field(obj, prefix, &["chain_id"])?;
    let network_id = string_field(obj, prefix, &["network_id"])?;
    // psz_timestamp wie im Referenz-Hasher, timestamp_message als Alias
    let psz = string_field(obj, prefix, &["psz_timestamp", "timestamp_message"])?;

    let seed_peers = array_field(obj, prefix, "seed_peers")?
        .iter()
        .enumerate()
        .map(|(i, peer)| {
            peer.as_str()
                .map(str::to_string)
                .ok_or_else(|| GenesisError::invalid_field(format!("{}seed_peers[{}]", prefix, i), "must be a string"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let initial_allocations = array_field(obj, prefix, "initial_allocations")?
        .iter()
        .enumerate()
        .map(|(i, entry)| allocation_from_value(entry, &format!("{}initial_allocations[{}]", prefix, i)))
        .collect::<Result<Vec<_>, _>>()?;

    GenesisSpec::new(chain_id, network_id, psz, seed_peers, initial_allocations).map_err(|e| match e {
        GenesisError::InvalidField { field, reason } => {
            GenesisError::InvalidField { field: format!("{}{}", prefix, field), reason }
        }
        other => other,
    })
}

fn string_field(obj: &Map<String, Value>, prefix: &str, keys: &[&str]) -> Result<String, GenesisError> {
    let (key, value) = keys
        .iter()
        .find_map(|key| obj.get(*key).map(|v| (*key, v)))
        .ok_or_else(|| GenesisError::invalid_field(format!("{}{}", prefix, keys[0]), "missing"))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GenesisError::invalid_field(format!("{}{}", prefix, key), "must be a string"))
}

/// Missing or `null` collections count as empty.
fn array_field<'a>(obj: &'a Map<String, Value>, prefix: &str, key: &str) -> Result<&'a [Value], GenesisError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(GenesisError::invalid_field(format!("{}{}", prefix, key), "must be an array")),
    }
}

fn allocation_from_value(entry: &Value, field: &str) -> Result<InitialAllocation, GenesisError> {
    let pair = match entry.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(GenesisError::invalid_field(field, "must be a [recipient, amount] pair")),
    };
    let recipient = pair[0]
        .as_str()
        .ok_or_else(|| GenesisError::invalid_field(format!("{}.recipient", field), "must be a string"))?;
    let amount = pair[1]
        .as_u64()
        .ok_or_else(|| GenesisError::invalid_field(format!("{}.amount", field), "must be a non-negative integer"))?;
    Ok(InitialAllocation::new(recipient, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_spec() {
        let spec = parse_spec_json(
            r#"{"chain_id":"x","network_id":"y","psz_timestamp":"t","seed_peers":["a:1","b:2"],"initial_allocations":[["alice",100]]}"#,
        )
        .unwrap();
        assert_eq!(spec.chain_id(), "x");
        assert_eq!(spec.seed_peers(), &["a:1".to_string(), "b:2".to_string()]);
        assert_eq!(spec.initial_allocations(), &[InitialAllocation::new("alice", 100)]);
    }

    #[test]
    fn test_timestamp_message_alias_and_default_collections() {
        let spec = parse_spec_json(r#"{"chain_id":"x","network_id":"y","timestamp_message":"t"}"#).unwrap();
        assert_eq!(spec.timestamp_message(), "t");
        assert!(spec.seed_peers().is_empty());
        assert!(spec.initial_allocations().is_empty());
    }

    #[test]
    fn test_negative_amount_names_field() {
        let err = parse_spec_json(
            r#"{"chain_id":"x","network_id":"y","psz_timestamp":"t","initial_allocations":[["a",1],["b",-5]]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenesisError::invalid_field("initial_allocations[1].amount", "must be a non-negative integer")
        );
    }

    #[test]
    fn test_fractional_amount_rejected() {
        let err = parse_spec_json(
            r#"{"chain_id":"x","network_id":"y","psz_timestamp":"t","initial_allocations":[["a",1.5]]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenesisError::InvalidField { ref field, .. } if field == "initial_allocations[0].amount"));
    }

    #[test]
    fn test_array_of_specs_prefixes_fields() {
        let err = parse_specs_json(
            r#"[{"chain_id":"x","network_id":"y","psz_timestamp":"t"},{"chain_id":"","network_id":"y","psz_timestamp":"t"}]"#,
        )
        .unwrap_err();
        assert_eq!(err, GenesisError::invalid_field("[1].chain_id", "must not be empty"));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let err = parse_spec_json(r#"{"network_id":"y","psz_timestamp":"t"}"#).unwrap_err();
        assert_eq!(err, GenesisError::invalid_field("chain_id", "missing"));
        let err = parse_spec_json(r#"{"chain_id":"x","network_id":3,"psz_timestamp":"t"}"#).unwrap_err();
        assert_eq!(err, GenesisError::invalid_field("network_id", "must be a string"));
        let err = parse_spec_json(r#"{"chain_id":"x","network_id":"y","psz_timestamp":"t","seed_peers":"a:1"}"#).unwrap_err();
        assert_eq!(err, GenesisError::invalid_field("seed_peers", "must be an array"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_spec_json("{not json"), Err(GenesisError::ParseError(_))));
    }

    #[test]
    fn test_load_spec_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chain_id":"x","network_id":"y","psz_timestamp":"t","seed_peers":["a:1"]}}"#).unwrap();
        let specs = load_spec_file(file.path()).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].network_id(), "y");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_spec_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GenesisError::Io(_)));
    }
}
