//! Reversible text encoding for persisted collections.
//!
//! Values are serialised to JSON and the UTF-8 bytes are base64 encoded so
//! the blob is plain ASCII in the storage inspector. This is an encoding,
//! not encryption: anyone with access to the storage can read it back.

use base64::{engine::general_purpose, Engine as _};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Encodes `value`, surfacing serialisation failures.
pub fn try_encode<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(general_purpose::STANDARD.encode(json.as_bytes()))
}

/// Encodes `value`, returning the empty string if it cannot be serialised.
///
/// The empty string decodes to `None`, so callers should treat it as
/// "nothing to store".
pub fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    match try_encode(value) {
        Ok(text) => text,
        Err(err) => {
            warn!("encode failed: {}", err);
            String::new()
        }
    }
}

/// Decodes text produced by [`encode`] into an untyped JSON value.
///
/// Returns `None` for the empty string and for anything that is not a valid
/// encoding.
pub fn decode_value(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }

    let bytes = match general_purpose::STANDARD.decode(text) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("decode rejected non-base64 input: {}", err);
            return None;
        }
    };
    let json = String::from_utf8(bytes).ok()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("decode rejected malformed payload: {}", err);
            None
        }
    }
}

/// Typed inverse of [`encode`].
pub fn decode<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_value(decode_value(text)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, LoginRecord, StudyFile, Subject};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample_files() -> Vec<StudyFile> {
        vec![
            StudyFile {
                id: "a1".to_string(),
                name: "Cinématique, unit 1".to_string(),
                subject: Subject::Mechanics,
                category: Category::SolvedPyqs,
                unit: 1,
                url: "https://example.org/k.pdf?x=1&y=2".to_string(),
                upload_date: "2/3/2025, 4:05:06 PM".to_string(),
            },
            StudyFile {
                id: "b2".to_string(),
                name: "Integrals".to_string(),
                subject: Subject::MathsTwo,
                category: Category::ImportantQuestions,
                unit: 42,
                url: "drive:folder/123".to_string(),
                upload_date: String::new(),
            },
        ]
    }

    #[test]
    fn test_round_trip_records() {
        let files = sample_files();
        let decoded: Vec<StudyFile> = decode(&encode(&files)).unwrap();
        assert_eq!(decoded, files);

        let logins = vec![LoginRecord {
            email: "a@b.c".to_string(),
            password: "p<a>ss \u{1F511}".to_string(),
            login_time: "now".to_string(),
        }];
        let decoded: Vec<LoginRecord> = decode(&encode(&logins)).unwrap();
        assert_eq!(decoded, logins);
    }

    #[test]
    fn test_round_trip_untyped_values() {
        let value = json!([{"n": -12.5, "s": "text", "nested": [1, [2, {"k": null}]]}, true]);
        assert_eq!(decode_value(&encode(&value)), Some(value));
    }

    #[test]
    fn test_round_trip_floats_exactly() {
        let floats = vec![
            1.0715660391465826e-75,
            -1.81996730402717e-179,
            -1.603964615428183e143,
            0.1 + 0.2,
            f64::MIN_POSITIVE,
            f64::MAX,
            -f64::EPSILON,
            5e-324,
            std::f64::consts::PI,
        ];
        let decoded: Vec<f64> = decode(&encode(&floats)).unwrap();
        for (got, want) in decoded.iter().zip(&floats) {
            assert_eq!(got.to_bits(), want.to_bits(), "{} came back as {}", want, got);
        }

        let value = decode_value(&encode(&floats)).unwrap();
        let untyped: Vec<f64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_eq!(untyped, floats);
    }

    #[test]
    fn test_encoding_is_deterministic_ascii() {
        let files = sample_files();
        let first = encode(&files);
        assert_eq!(first, encode(&files));
        assert!(first.is_ascii());
    }

    #[test]
    fn test_decode_rejects_empty_and_garbage() {
        assert_eq!(decode_value(""), None);
        assert_eq!(decode_value("not-a-valid-encoding"), None);
        // valid base64, but not JSON
        assert_eq!(decode_value("aGVsbG8gd29ybGQ="), None);
        assert_eq!(decode::<Vec<StudyFile>>("%%%"), None);
    }

    #[test]
    fn test_encode_failure_yields_empty_sentinel() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8, 2], 3u8);
        assert!(try_encode(&map).is_err());
        assert_eq!(encode(&map), "");
        assert_eq!(decode_value(&encode(&map)), None);
    }
}
