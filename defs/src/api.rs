use serde::{Deserialize, Serialize};

/// Value returned to the Lambda trigger after a successful invocation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl FunctionResponse {
    pub fn ok() -> Self {
        FunctionResponse {
            status_code: 200,
            body: String::new(),
        }
    }
}
