//! Generic operation outcome body.

use serde::Serialize;

/// `{"result":"success"}` returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
