use crate::common::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct EconomicRelease {
    pub release_name: String,
    pub frequency: String,
    pub description: String,
    pub importance: String,
    pub color: String,
}
