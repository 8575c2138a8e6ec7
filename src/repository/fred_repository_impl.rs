use crate::common::*;

use crate::model::configs::fred_server_config::*;

use crate::traits::repository_traits::fred_repository::*;

#[derive(Debug, Getters, Clone)]
pub struct FredRepositoryImpl {
    fred_client: FredClient,
}

#[derive(Debug, Getters, Clone, new)]
#[getset(get = "pub")]
pub(crate) struct FredClient {
    http_conn: Client,
    fred_host: String,
    fred_api_key: String,
}

impl FredRepositoryImpl {
    pub fn new(fred_config: &FredServerConfig) -> Result<Self, anyhow::Error> {
        let http_conn: Client = Client::builder()
            .timeout(Duration::new(*fred_config.timeout_sec(), 0))
            .build()?;

        let fred_client: FredClient = FredClient::new(
            http_conn,
            fred_config.fred_host().to_string(),
            fred_config.fred_api_key().to_string(),
        );

        Ok(FredRepositoryImpl { fred_client })
    }
}

#[async_trait]
impl FredRepository for FredRepositoryImpl {
    #[doc = "Function that EXECUTES FRED queries - series observations"]
    async fn get_series_observations(
        &self,
        series_id: &str,
        observation_start: Option<&str>,
    ) -> Result<Value, anyhow::Error> {
        let mut query_params: Vec<(&str, &str)> = vec![
            ("series_id", series_id),
            ("api_key", self.fred_client.fred_api_key()),
            ("file_type", "json"),
        ];

        if let Some(observation_start) = observation_start {
            query_params.push(("observation_start", observation_start));
        }

        let response: reqwest::Response = self
            .fred_client
            .http_conn()
            .get(self.fred_client.fred_host())
            .query(&query_params)
            .send()
            .await?;

        if response.status().is_success() {
            let response_body: Value = response.json::<Value>().await?;
            Ok(response_body)
        } else {
            let error_body: String = response.text().await?;
            Err(anyhow!(
                "[FRED Error][get_series_observations()] response status is failed: {:?}",
                error_body
            ))
        }
    }
}
