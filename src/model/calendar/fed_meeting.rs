use crate::common::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct FedMeeting {
    pub meeting_date: String,
    pub event_type: String,
    pub description: String,
}
