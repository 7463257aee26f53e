/// Response type for the arithmetic endpoint
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Body returned by `GET /`
///
/// `result` is unbounded; it is carried as a JSON number with its exact digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddResponse {
    pub result: serde_json::Number,
}

impl AddResponse {
    pub fn new(result: &BigInt) -> Result<Self, serde_json::Error> {
        Ok(Self {
            result: result.to_string().parse()?,
        })
    }
}
