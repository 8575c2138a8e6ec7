use crate::common::*;

use crate::model::calendar::{economic_release::*, fed_meeting::*};

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct CalendarConfig {
    pub fed_meeting: Vec<FedMeeting>,
    pub economic_release: Vec<EconomicRelease>,
}
