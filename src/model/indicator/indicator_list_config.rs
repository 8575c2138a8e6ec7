use crate::common::*;

use crate::model::indicator::{indicator_config::*, treasury_config::*};

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct IndicatorListConfig {
    pub indicator: Vec<IndicatorConfig>,
    pub treasury: Vec<TreasuryConfig>,
}
