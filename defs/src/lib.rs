mod api;
mod drift;
mod errors;
mod notification;

pub use api::FunctionResponse;
pub use drift::{
    DetectionFailureResult, DriftEvent, DriftStatus, ResourceDriftEntry, StackDriftResult,
};
pub use errors::NotifierError;
pub use notification::{Block, NotificationMessage, TextKind, TextObject};
