use crate::common::*;

use crate::model::{indicator::indicator_list_config::*, series::series_data::*};

use crate::dto::{
    dashboard_summary::*, observation::*, observation_row::*, yield_point::*, yield_spread::*,
};

#[async_trait]
pub trait QueryService: Send + Sync {
    async fn get_series_observations(
        &self,
        series_id: &str,
        full_history_yn: bool,
        observation_start: Option<&str>,
    ) -> anyhow::Result<Arc<Vec<Observation>>>;

    async fn get_indicator_rows(
        &self,
        indicator_list: &IndicatorListConfig,
        indicator_key: &str,
    ) -> anyhow::Result<Vec<ObservationRow>>;

    async fn get_dashboard_summaries(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<Vec<DashboardSummary>>;

    async fn get_series_collection(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<SeriesCollection>;

    async fn get_treasury_series_collection(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<SeriesCollection>;

    async fn get_yield_curve_points(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<Vec<YieldPoint>>;

    async fn get_yield_spread(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<YieldSpread>;
}
