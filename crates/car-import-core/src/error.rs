use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarImportError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown country: '{0}' is not in the rate table")]
    UnknownCountry(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CarImportError {
    fn from(e: serde_json::Error) -> Self {
        CarImportError::SerializationError(e.to_string())
    }
}

impl CarImportError {
    /// Map a failure to deserialize a request into `InvalidInput`, naming
    /// the missing or malformed field when serde reports one.
    pub fn from_request_error(e: serde_json::Error) -> Self {
        let reason = e.to_string();
        let field = reason
            .strip_prefix("missing field `")
            .or_else(|| reason.strip_prefix("unknown field `"))
            .and_then(|rest| rest.split('`').next())
            .unwrap_or("request")
            .to_string();
        CarImportError::InvalidInput { field, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Request {
        country_id: String,
        car_value_eur: u32,
    }

    #[test]
    fn test_missing_field_named() {
        let e = serde_json::from_str::<Request>(r#"{"country_id": "germany"}"#).unwrap_err();
        let err = CarImportError::from_request_error(e);
        assert!(
            matches!(err, CarImportError::InvalidInput { ref field, .. } if field == "car_value_eur")
        );
    }

    #[test]
    fn test_malformed_json_is_invalid_request() {
        let e = serde_json::from_str::<Request>("{not json").unwrap_err();
        let err = CarImportError::from_request_error(e);
        assert!(matches!(err, CarImportError::InvalidInput { ref field, .. } if field == "request"));
    }
}
