use crate::common::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TreasuryConfig {
    pub treasury_key: String,
    pub treasury_name: String,
    pub series_id: String,
    pub maturity: f64,
}
