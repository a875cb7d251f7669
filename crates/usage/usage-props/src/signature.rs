//! Props signatures: a compact, order-independent fingerprint of sanitized props.

use usage_core::models::SafeProps;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 32-bit rolling hash over UTF-16 code units: `h = h * 31 + unit`, wrapping.
pub fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Lowercase base-36 rendering.
pub fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// `key:value` pairs in key order, joined by `|`.
pub fn canonical_string(props: &SafeProps) -> String {
    let mut pairs = props.canonical_pairs();
    pairs.sort();
    pairs
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Signature of sanitized props. Key order never affects the result.
pub fn props_signature(props: &SafeProps) -> String {
    to_base36(rolling_hash(&canonical_string(props)).unsigned_abs())
}
