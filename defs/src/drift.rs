use serde::{Deserialize, Serialize};

/// Drift state of a single stack resource as reported by CloudFormation.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftStatus {
    Deleted,
    Modified,
    InSync,
    NotChecked,
    /// Any status string this function does not know about
    #[serde(other)]
    Unknown,
}

impl DriftStatus {
    /// Slack emoji shown in front of a resource line. Statuses without an
    /// indicator map to an empty string.
    pub fn emoji(&self) -> &'static str {
        match self {
            DriftStatus::Deleted => ":x:",
            DriftStatus::Modified => ":warning:",
            DriftStatus::InSync => ":heavy_check_mark:",
            DriftStatus::NotChecked | DriftStatus::Unknown => "",
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResourceDriftEntry {
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: String,
    #[serde(rename = "ResourceType")]
    pub resource_type: String,
    #[serde(rename = "StackResourceDriftStatus")]
    pub drift_status: DriftStatus,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StackDriftResult {
    #[serde(rename = "StackId")]
    pub stack_id: String,
    #[serde(rename = "StackName")]
    pub stack_name: String,
    #[serde(rename = "no_of_drifted_resources")]
    pub drifted_resource_count: u64,
    #[serde(rename = "no_of_resources", default)]
    pub resource_count: u64,
    #[serde(rename = "drift")]
    pub resources: Vec<ResourceDriftEntry>,
}

/// A stack whose drift detection run did not complete.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DetectionFailureResult {
    #[serde(rename = "StackId")]
    pub stack_id: String,
    #[serde(rename = "StackName")]
    pub stack_name: String,
}

/// Payload the function is invoked with.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct DriftEvent {
    pub stacks: Vec<StackDriftResult>,
    pub detection_failed_stacks: Vec<DetectionFailureResult>,
}
