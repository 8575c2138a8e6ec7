use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct FredServerConfig {
    pub fred_host: String,
    pub fred_api_key: String,
    pub timeout_sec: u64,
}
