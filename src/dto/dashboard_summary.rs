use crate::common::*;

use crate::dto::observation::*;

use crate::enums::trend::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    대시보드 요약 테이블의 한 행.

    최신 관측치와 직전 관측치가 모두 존재할 때만 변화량/변화율/추세가 계산된다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardSummary {
    pub indicator_key: String,
    pub indicator_name: String,
    pub current: Option<f64>,
    pub date: String,
    pub change: Option<f64>,
    pub pct_change: Option<f64>,
    pub trend: Option<Trend>,
}

impl DashboardSummary {
    #[doc = "최신/직전 관측치로부터 요약 행을 계산해주는 함수"]
    pub fn from_observations(
        indicator_key: &str,
        indicator_name: &str,
        latest: &Observation,
        previous: Option<&Observation>,
    ) -> Self {
        let mut change: Option<f64> = None;
        let mut pct_change: Option<f64> = None;
        let mut trend: Option<Trend> = None;

        if let (Some(previous), Some(latest_value)) = (previous, latest.value()) {
            if let Some(previous_value) = previous.value() {
                let diff: f64 = latest_value - previous_value;
                change = Some(diff);
                pct_change = Some((diff / previous_value) * 100.0);
                trend = Some(Trend::from_change(diff));
            }
        }

        let date: String = if latest.value().is_some() {
            convert_naivedate_to_str(*latest.date())
        } else {
            String::from("N/A")
        };

        DashboardSummary::new(
            indicator_key.to_string(),
            indicator_name.to_string(),
            *latest.value(),
            date,
            change,
            pct_change,
            trend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_observations_computes_change_and_trend() {
        let latest: Observation = Observation::new(naivedate(2024, 2, 1), Some(12.0));
        let previous: Observation = Observation::new(naivedate(2024, 1, 1), Some(10.0));

        let summary: DashboardSummary =
            DashboardSummary::from_observations("GDP", "Nominal GDP (Billions $)", &latest, Some(&previous));

        assert_eq!(*summary.current(), Some(12.0));
        assert_eq!(summary.date(), "2024-02-01");
        assert_eq!(*summary.change(), Some(2.0));
        assert_eq!(*summary.pct_change(), Some(20.0));
        assert_eq!(*summary.trend(), Some(Trend::Up));
    }

    #[test]
    fn from_observations_classifies_falling_series_as_down() {
        let latest: Observation = Observation::new(naivedate(2024, 2, 1), Some(3.5));
        let previous: Observation = Observation::new(naivedate(2024, 1, 1), Some(4.0));

        let summary: DashboardSummary =
            DashboardSummary::from_observations("UNRATE", "Unemployment Rate (%)", &latest, Some(&previous));

        assert_eq!(*summary.trend(), Some(Trend::Down));
    }

    #[test]
    fn from_observations_skips_change_when_previous_is_missing() {
        let latest: Observation = Observation::new(naivedate(2024, 2, 1), Some(3.5));

        let summary: DashboardSummary =
            DashboardSummary::from_observations("CPI", "CPI (Index)", &latest, None);

        assert_eq!(*summary.change(), None);
        assert_eq!(*summary.pct_change(), None);
        assert_eq!(*summary.trend(), None);
    }

    #[test]
    fn from_observations_marks_date_na_when_latest_value_is_missing() {
        let latest: Observation = Observation::new(naivedate(2024, 2, 1), None);
        let previous: Observation = Observation::new(naivedate(2024, 1, 1), Some(4.0));

        let summary: DashboardSummary =
            DashboardSummary::from_observations("SP500", "S&P 500 Index", &latest, Some(&previous));

        assert_eq!(summary.date(), "N/A");
        assert_eq!(*summary.change(), None);
    }

    fn naivedate(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
