//! Response-shape descriptors sent with structured requests.
//!
//! The model service constrains its own output to these shapes; the
//! normalizer still re-checks everything it cares about on the way back in.

use serde_json::{json, Value};

/// Shape of a quote response: a JSON array of line items with closed value
/// sets for `source` and `priceSource`.
pub fn quote_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": { "type": "STRING" },
                "itemDescription": { "type": "STRING" },
                "brand": { "type": "STRING" },
                "model": { "type": "STRING" },
                "quantity": { "type": "INTEGER" },
                "unitPrice": { "type": "NUMBER" },
                "totalPrice": { "type": "NUMBER" },
                "source": { "type": "STRING", "enum": ["database", "web"] },
                "priceSource": { "type": "STRING", "enum": ["database", "estimated"] }
            },
            "required": [
                "category", "itemDescription", "brand", "model", "quantity",
                "unitPrice", "totalPrice", "source", "priceSource"
            ]
        }
    })
}

/// Shape of a validation response.
pub fn validation_report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isValid": { "type": "BOOLEAN" },
            "warnings": { "type": "ARRAY", "items": { "type": "STRING" } },
            "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "missingComponents": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["isValid", "warnings", "suggestions", "missingComponents"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_schema_lists_every_line_item_field() {
        let schema = quote_list_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 9);
        assert_eq!(
            schema["items"]["properties"]["source"]["enum"],
            json!(["database", "web"])
        );
    }
}
