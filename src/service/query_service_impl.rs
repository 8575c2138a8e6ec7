use crate::common::*;

use crate::traits::{repository_traits::fred_repository::*, service_traits::query_service::*};

use crate::repository::fred_repository_impl::*;

use crate::utils_modules::{time_utils::*, traits::*};

use crate::model::configs::total_config::*;
use crate::model::{
    indicator::{indicator_list_config::*, treasury_config::*},
    series::series_data::*,
};

use crate::dto::{
    dashboard_summary::*, observation::*, observation_row::*, yield_point::*, yield_spread::*,
};

#[derive(Debug, new)]
pub struct QueryServiceImpl {
    fred_conn: Arc<FredRepositoryImpl>,
    #[new(default)]
    series_cache: RwLock<HashMap<String, Arc<Vec<Observation>>>>,
}

impl QueryServiceImpl {
    #[doc = r#"
        FRED observation 응답을 파싱하여 벡터 형태의 구조화된 객체로 변환하는 제네릭 함수.

        1. 응답의 `observations` 배열에서 각 관측 행을 추출
        2. `FromObservation` 트레이트를 통해 최종 타입 `T`로 변환
        3. 모든 결과를 벡터로 수집하여 반환

        # Type Parameters
        * `T` - 최종 반환할 객체 타입 (`FromObservation` 트레이트 구현 필요)

        # Arguments
        * `response_body` - FRED observation 응답 JSON

        # Returns
        * `Vec<T>` - 변환된 객체들의 벡터
        * `anyhow::Error` - 응답 파싱 실패, 필수 필드 누락 시
    "#]
    fn get_observation_result_vec<T>(&self, response_body: &Value) -> Result<Vec<T>, anyhow::Error>
    where
        T: FromObservation,
    {
        let observations: &Value = response_body.get("observations").ok_or_else(|| {
            anyhow!("[QueryServiceImpl->get_observation_result_vec] Missing 'observations' field")
        })?;

        let arr: &Vec<Value> = observations.as_array().ok_or_else(|| {
            anyhow!("[QueryServiceImpl->get_observation_result_vec] 'observations' is not an array")
        })?;

        let results: Vec<T> = arr
            .iter()
            .map(|observation| T::from_observation(observation))
            .collect::<Result<_, _>>()?;

        Ok(results)
    }

    #[doc = r#"
        시리즈별 캐시 키를 생성해주는 함수.

        전체 이력 시리즈는 프로세스 수명 동안 한 번만 적재되도록 고정 키를 사용하고,
        나머지 시리즈는 시간 단위로 키가 바뀌어 매시간 재조회된다.
    "#]
    fn get_series_cache_key(series_id: &str, full_history_yn: bool) -> String {
        if full_history_yn {
            format!("full_{}", series_id)
        } else {
            format!("{}_{}", series_id, get_current_hour_key())
        }
    }

    #[doc = ""]
    fn get_cached_series(&self, cache_key: &str) -> Option<Arc<Vec<Observation>>> {
        self.series_cache.read().ok()?.get(cache_key).cloned()
    }

    #[doc = "조회 결과를 캐시에 적재하고, 같은 시리즈의 지난 시간 키는 정리해주는 함수"]
    fn insert_cached_series(
        &self,
        series_id: &str,
        cache_key: &str,
        observations: Arc<Vec<Observation>>,
    ) {
        if let Ok(mut cache) = self.series_cache.write() {
            let stale_prefix: String = format!("{}_", series_id);
            cache.retain(|key, _| !key.starts_with(&stale_prefix) || key.as_str() == cache_key);
            cache.insert(cache_key.to_string(), observations);
        }
    }

    #[doc = "관측치 벡터를 date/value 배열 쌍으로 변환해주는 함수. 입력 순서를 그대로 유지한다."]
    fn build_series_data(observations: &[Observation]) -> SeriesData {
        let mut date: Vec<String> = Vec::new();
        let mut value: Vec<Option<f64>> = Vec::new();

        for observation in observations {
            date.push(convert_naivedate_to_str(*observation.date()));
            value.push(*observation.value());
        }

        SeriesData::new(date, value)
    }

    #[doc = "설정된 국채 시리즈의 최신 금리를 조회해주는 함수"]
    async fn get_latest_treasury_rate(
        &self,
        indicator_list: &IndicatorListConfig,
        treasury_key: &str,
    ) -> anyhow::Result<Option<f64>> {
        let treasury: &TreasuryConfig = match indicator_list
            .treasury()
            .iter()
            .find(|treasury| treasury.treasury_key() == treasury_key)
        {
            Some(treasury) => treasury,
            None => {
                warn!(
                    "[QueryServiceImpl->get_latest_treasury_rate] Treasury '{}' is not configured",
                    treasury_key
                );
                return Ok(None);
            }
        };

        let observations: Arc<Vec<Observation>> = self
            .get_series_observations(treasury.series_id(), false, None)
            .await?;

        Ok(observations.first().and_then(|latest| *latest.value()))
    }
}

#[async_trait]
impl QueryService for QueryServiceImpl {
    #[doc = r#"
        FRED 시리즈의 관측치를 조회하는 함수. 결과는 최신 날짜가 앞에 오도록 정렬된다.

        1. 캐시 키 조회 - 적중 시 캐시된 벡터를 그대로 반환
        2. 미적중 시 FRED API 호출. 전송 오류는 로그만 남기고 빈 벡터로 대체
        3. `observations` 필드가 없거나 형식이 다르면 경고 후 빈 벡터로 대체
        4. 날짜 내림차순 정렬 후 캐시에 적재

        # Arguments
        * `series_id` - FRED 시리즈 ID
        * `full_history_yn` - 전체 이력 적재 여부 (캐시 만료 정책이 달라진다)
        * `observation_start` - 조회 시작일 (전체 이력 시리즈용)

        # Returns
        * `Arc<Vec<Observation>>` - 최신순 관측치. 조회 실패 시 빈 벡터
    "#]
    async fn get_series_observations(
        &self,
        series_id: &str,
        full_history_yn: bool,
        observation_start: Option<&str>,
    ) -> anyhow::Result<Arc<Vec<Observation>>> {
        let cache_key: String = Self::get_series_cache_key(series_id, full_history_yn);

        if let Some(cached_observations) = self.get_cached_series(&cache_key) {
            return Ok(cached_observations);
        }

        let response_body: Value = match self
            .fred_conn
            .get_series_observations(series_id, observation_start)
            .await
        {
            Ok(response_body) => response_body,
            Err(e) => {
                error!(
                    "[QueryServiceImpl->get_series_observations] Error fetching data for {}: {:?}",
                    series_id, e
                );
                return Ok(Arc::new(Vec::new()));
            }
        };

        let mut observations: Vec<Observation> =
            match self.get_observation_result_vec::<Observation>(&response_body) {
                Ok(observations) => observations,
                Err(e) => {
                    warn!(
                        "[QueryServiceImpl->get_series_observations] Observations missing for {}: {:?}",
                        series_id, e
                    );
                    Vec::new()
                }
            };

        observations.sort_by(|a, b| b.date().cmp(a.date()));

        let observations: Arc<Vec<Observation>> = Arc::new(observations);
        self.insert_cached_series(series_id, &cache_key, Arc::clone(&observations));

        Ok(observations)
    }

    #[doc = "지표 페이지 테이블용 (날짜, 값) 행을 조회해주는 함수"]
    async fn get_indicator_rows(
        &self,
        indicator_list: &IndicatorListConfig,
        indicator_key: &str,
    ) -> anyhow::Result<Vec<ObservationRow>> {
        let indicator = indicator_list
            .indicator()
            .iter()
            .find(|indicator| indicator.indicator_key() == indicator_key)
            .ok_or_else(|| {
                anyhow!(
                    "[QueryServiceImpl->get_indicator_rows] Indicator '{}' is not configured",
                    indicator_key
                )
            })?;

        let observations: Arc<Vec<Observation>> = self
            .get_series_observations(
                indicator.series_id(),
                *indicator.full_history_yn(),
                indicator.observation_start().as_deref(),
            )
            .await?;

        let rows: Vec<ObservationRow> = observations
            .iter()
            .map(|observation| {
                ObservationRow::new(
                    convert_naivedate_to_str(*observation.date()),
                    *observation.value(),
                )
            })
            .collect();

        Ok(rows)
    }

    #[doc = r#"
        대시보드 요약 행들을 생성해주는 함수.

        각 지표의 최신/직전 관측치로 변화량과 추세를 계산한다.
        지표별 조회는 동시에 수행되며, 관측치가 없는 지표는 건너뛴다.
    "#]
    async fn get_dashboard_summaries(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<Vec<DashboardSummary>> {
        let observation_tasks = indicator_list.indicator().iter().map(|indicator| {
            self.get_series_observations(
                indicator.series_id(),
                *indicator.full_history_yn(),
                indicator.observation_start().as_deref(),
            )
        });

        let observation_results: Vec<anyhow::Result<Arc<Vec<Observation>>>> =
            join_all(observation_tasks).await;

        let mut summaries: Vec<DashboardSummary> = Vec::new();

        for (indicator, observations) in indicator_list.indicator().iter().zip(observation_results)
        {
            let observations: Arc<Vec<Observation>> = observations?;

            let latest: &Observation = match observations.first() {
                Some(latest) => latest,
                None => continue,
            };

            summaries.push(DashboardSummary::from_observations(
                indicator.indicator_key(),
                indicator.indicator_name(),
                latest,
                observations.get(1),
            ));
        }

        Ok(summaries)
    }

    #[doc = "비교 페이지 페이로드용 시리즈 컬렉션을 생성해주는 함수"]
    async fn get_series_collection(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<SeriesCollection> {
        let mut series_collection: SeriesCollection = SeriesCollection::new();

        for indicator in indicator_list.indicator() {
            let observations: Arc<Vec<Observation>> = self
                .get_series_observations(
                    indicator.series_id(),
                    *indicator.full_history_yn(),
                    indicator.observation_start().as_deref(),
                )
                .await?;

            series_collection.insert(
                indicator.indicator_name().to_string(),
                Self::build_series_data(&observations),
            );
        }

        Ok(series_collection)
    }

    #[doc = "수익률 곡선 페이지 페이로드용 시리즈 컬렉션을 생성해주는 함수"]
    async fn get_treasury_series_collection(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<SeriesCollection> {
        let mut series_collection: SeriesCollection = SeriesCollection::new();

        for treasury in indicator_list.treasury() {
            let observations: Arc<Vec<Observation>> = self
                .get_series_observations(treasury.series_id(), false, None)
                .await?;

            series_collection.insert(
                treasury.treasury_name().to_string(),
                Self::build_series_data(&observations),
            );
        }

        Ok(series_collection)
    }

    #[doc = "만기 오름차순으로 정렬된 수익률 곡선 점들을 조회해주는 함수. 최신 값이 결측인 시리즈는 제외된다."]
    async fn get_yield_curve_points(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<Vec<YieldPoint>> {
        let mut yield_points: Vec<YieldPoint> = Vec::new();

        for treasury in indicator_list.treasury() {
            let observations: Arc<Vec<Observation>> = self
                .get_series_observations(treasury.series_id(), false, None)
                .await?;

            let latest: &Observation = match observations.first() {
                Some(latest) => latest,
                None => continue,
            };

            if let Some(yield_rate) = latest.value() {
                yield_points.push(YieldPoint::new(
                    *treasury.maturity(),
                    treasury.treasury_name().to_string(),
                    *yield_rate,
                    convert_naivedate_to_str(*latest.date()),
                ));
            }
        }

        yield_points.sort_by(|a, b| {
            a.maturity()
                .partial_cmp(b.maturity())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(yield_points)
    }

    #[doc = "설정된 장단기 시리즈 쌍의 스프레드를 계산해주는 함수"]
    async fn get_yield_spread(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<YieldSpread> {
        let short_rate: Option<f64> = self
            .get_latest_treasury_rate(indicator_list, get_system_config_info().spread_short_key())
            .await?;

        let long_rate: Option<f64> = self
            .get_latest_treasury_rate(indicator_list, get_system_config_info().spread_long_key())
            .await?;

        Ok(YieldSpread::from_rates(short_rate, long_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_series_data_preserves_order_and_pairing() {
        let observations: Vec<Observation> = vec![
            Observation::new(naivedate(2024, 1, 2), Some(12.0)),
            Observation::new(naivedate(2024, 1, 1), None),
        ];

        let series_data: SeriesData = QueryServiceImpl::build_series_data(&observations);

        assert_eq!(series_data.date(), &vec!["2024-01-02", "2024-01-01"]);
        assert_eq!(series_data.value(), &vec![Some(12.0), None]);
    }

    #[test]
    fn series_cache_key_is_fixed_for_full_history_series() {
        assert_eq!(
            QueryServiceImpl::get_series_cache_key("SP500", true),
            "full_SP500"
        );
    }

    #[test]
    fn series_cache_key_carries_the_current_hour() {
        let cache_key: String = QueryServiceImpl::get_series_cache_key("GDP", false);

        assert!(cache_key.starts_with("GDP_"));
        assert_eq!(cache_key, format!("GDP_{}", get_current_hour_key()));
    }

    fn naivedate(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
