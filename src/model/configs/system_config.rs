use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub ticker_sec: u64,
    pub spread_short_key: String,
    pub spread_long_key: String,
}
