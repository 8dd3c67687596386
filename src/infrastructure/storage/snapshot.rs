//! Token and pool snapshots

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::domain::pool::PoolRecord;
use crate::domain::token::TokenRecord;
use crate::shared::errors::DataSourceError;

/// Keys the indexer uses for the list inside `{"data": {...}}`
const ENVELOPE_KEYS: [&str; 4] = ["items", "tokens", "pools", "pairs"];

/// Take the record list out of a snapshot: a bare array or the indexer's
/// `{"data": {"<kind>": [...]}}` envelope
fn snapshot_items(value: Value) -> Result<Value, String> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Object(mut root) => match root.remove("data") {
            Some(Value::Object(mut data)) => ENVELOPE_KEYS
                .iter()
                .find_map(|key| data.remove(*key))
                .ok_or_else(|| format!("\"data\" has none of the keys {}", ENVELOPE_KEYS.join(", "))),
            Some(_) => Err("\"data\" is not an object".to_string()),
            None => Err("expected an array or an object with a \"data\" field".to_string()),
        },
        other => Err(format!("expected an array or an object, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataSourceError> {
    let content = fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_json(path, &content)
}

pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, DataSourceError> {
    serde_json::from_str(content).map_err(|e| DataSourceError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn load_snapshot<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<Vec<T>, DataSourceError> {
    let parse_error = |reason: String| DataSourceError::Parse {
        path: path.display().to_string(),
        reason,
    };
    let list = snapshot_items(read_json::<Value>(path)?).map_err(parse_error)?;
    let items: Vec<T> = serde_json::from_value(list).map_err(|e| parse_error(e.to_string()))?;
    info!("Loaded {} {} from {}", items.len(), kind, path.display());
    Ok(items)
}

pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<TokenRecord>, DataSourceError> {
    load_snapshot(path.as_ref(), "tokens")
}

pub fn load_pools<P: AsRef<Path>>(path: P) -> Result<Vec<PoolRecord>, DataSourceError> {
    load_snapshot(path.as_ref(), "pools")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("poolboard-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_tokens_from_array() {
        let path = write_temp(
            "tokens-array.json",
            r#"[{"id":"0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270","name":"Wrapped Matic","symbol":"WMATIC",
                 "priceUSD":"0.71","totalLiquidityUSD":1200000}]"#,
        );
        let tokens = load_tokens(&path).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol, "WMATIC");
        assert_eq!(tokens[0].price_usd, Some(0.71));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_pools_from_envelope() {
        let path = write_temp(
            "pools-envelope.json",
            r#"{"data":{"pools":[{"id":"0xpool","token0":{"id":"0x1","symbol":"A"},"token1":{"id":"0x2","symbol":"B"},
                "totalValueLockedUSD":"10"}]}}"#,
        );
        let pools = load_pools(&path).unwrap();
        assert_eq!(pools[0].pair_name, "A/B");
        assert_eq!(pools[0].tvl_usd, Some(10.0));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_tokens("/nonexistent/poolboard/tokens.json");
        assert!(matches!(result, Err(DataSourceError::Io { .. })));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let path = write_temp("garbage.json", "not json");
        assert!(matches!(load_pools(&path), Err(DataSourceError::Parse { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_record_errors_reach_the_caller() {
        let path = write_temp(
            "pools-missing-field.json",
            r#"{"data":{"pools":[{"id":"0xpool","token1":{"id":"0x2","symbol":"B"}}]}}"#,
        );
        match load_pools(&path) {
            Err(DataSourceError::Parse { reason, .. }) => assert!(reason.contains("missing field `token0`"), "{}", reason),
            other => panic!("unexpected result {:?}", other),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_unknown_shape_is_named() {
        let path = write_temp("tokens-shape.json", r#"{"data":{"swaps":[]}}"#);
        match load_tokens(&path) {
            Err(DataSourceError::Parse { reason, .. }) => assert!(reason.contains("none of the keys"), "{}", reason),
            other => panic!("unexpected result {:?}", other),
        }
        fs::remove_file(path).ok();
    }
}
