use crate::common::*;

use crate::model::{calendar::calendar_config::*, indicator::indicator_list_config::*};

#[async_trait]
pub trait PageService: Send + Sync {
    async fn generate_index_page(&self) -> anyhow::Result<()>;
    async fn generate_dashboard_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()>;
    async fn generate_indicator_pages(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()>;
    async fn generate_yield_curve_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()>;
    async fn generate_compare_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()>;
    async fn generate_calendar_page(&self, calendar_config: &CalendarConfig)
        -> anyhow::Result<()>;
}
