//! JSON array and JSON Lines decoding into raw records.

use std::path::Path;

use salon_agg_ports::RawRecord;
use salon_agg_shared_kernel::{InfraResult, InfrastructureError, ScalarValue};
use serde_json::{Map, Value};

use super::DOCUMENT_ID_FIELD;

/// Parses a top-level JSON array whose elements are objects.
pub fn parse_array(text: &str, path: &Path) -> InfraResult<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(InfrastructureError::SerializationError {
            format: "JSON".to_string(),
            details: format!("'{}' must contain an array of objects", path.display()),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| into_record(item, path, i + 1))
        .collect()
}

/// Parses one object per non-blank line.
pub fn parse_lines(text: &str, path: &Path) -> InfraResult<Vec<RawRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let value: Value = serde_json::from_str(line).map_err(|e| InfrastructureError::MalformedRecord {
                path: path.to_path_buf(),
                record: i + 1,
                details: e.to_string(),
            })?;
            into_record(value, path, i + 1)
        })
        .collect()
}

fn into_record(value: Value, path: &Path, record: usize) -> InfraResult<RawRecord> {
    match value {
        Value::Object(map) => Ok(from_object(map)),
        other => Err(InfrastructureError::MalformedRecord {
            path: path.to_path_buf(),
            record,
            details: format!("expected an object, found {other}"),
        }),
    }
}

fn from_object(map: Map<String, Value>) -> RawRecord {
    map.into_iter()
        .filter(|(k, _)| k != DOCUMENT_ID_FIELD)
        .map(|(k, v)| (k, ScalarValue::from(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_objects_drops_document_id() {
        let text = r#"[{"_id": {"$oid": "65a"}, "id_cust": "C1", "nama_cust": "Ana"}]"#;
        let records = parse_array(text, Path::new("customers.json")).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].get("_id").is_none());
        assert_eq!(records[0].get("nama_cust"), Some(&ScalarValue::Text("Ana".into())));
    }

    #[test]
    fn non_array_document_is_rejected() {
        let err = parse_array(r#"{"id_cust": "C1"}"#, Path::new("customers.json")).unwrap_err();
        assert!(matches!(err, InfrastructureError::SerializationError { .. }));
    }

    #[test]
    fn lines_skip_blanks_and_report_line_numbers() {
        let text = "{\"id_cust\": \"C1\", \"total\": 50000}\n\n[1, 2]\n";
        let err = parse_lines(text, Path::new("appointments.jsonl")).unwrap_err();
        match err {
            InfrastructureError::MalformedRecord { record, .. } => assert_eq!(record, 3),
            other => panic!("unexpected error: {other:?}"),
        }

        let records = parse_lines("{\"id_cust\": \"C1\", \"total\": 50000}\n\n", Path::new("a.jsonl")).unwrap();
        assert_eq!(records[0].get("total"), Some(&ScalarValue::Int(50_000)));
    }
}
