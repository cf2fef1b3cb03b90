//! Wire models specific to the registry API
//!
//! The Person entity itself lives in [`crate::domain::person`]; only
//! endpoint-specific response shapes belong here.

use serde::{Deserialize, Serialize};

/// Response body of the ideal-weight endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightResponse {
    /// Ideal weight computed by the server
    pub peso_ideal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_weight_response_deserializes() {
        let response: IdealWeightResponse =
            serde_json::from_str(r#"{"peso_ideal": 62.37}"#).unwrap();
        assert_eq!(response.peso_ideal, 62.37);
    }
}
