use serde::{Deserialize, Serialize};

use crate::enums::activity_kind::ActivityKind;
use crate::enums::activity_status::ActivityStatus;

/// Entry in the recent-activity feed. `time` is the display string the
/// feed shows ("2 hours ago"), not a machine timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub repo: String,
    pub action: String,
    pub time: String,
    pub status: ActivityStatus,
    pub details: String,
}
