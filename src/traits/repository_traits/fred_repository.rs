use crate::common::*;

#[async_trait]
pub trait FredRepository: Send + Sync {
    async fn get_series_observations(
        &self,
        series_id: &str,
        observation_start: Option<&str>,
    ) -> Result<Value, anyhow::Error>;
}
