use crate::common::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct IndicatorConfig {
    pub indicator_key: String,
    pub indicator_name: String,
    pub series_id: String,
    pub page_name: String,
    pub full_history_yn: bool,
    pub observation_start: Option<String>,
}
