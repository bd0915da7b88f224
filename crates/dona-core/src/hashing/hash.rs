use serde_json::Value;

use super::to_canonical_json;

/// Fingerprint blake3 (hex) de la forma canónica de `value`; el orden de
/// claves no influye.
pub fn hash_value(value: &Value) -> String {
    blake3::hash(to_canonical_json(value).as_bytes()).to_hex()
                                                     .to_string()
}
