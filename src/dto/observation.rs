use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    FRED observation 응답의 한 행을 변환한 DTO

    # Fields
    * `date` - 관측 날짜
    * `value` - 관측값. FRED 는 값을 문자열로 내려주며 숫자가 아닌 값("." 등)은 None 처리한다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl FromObservation for Observation {
    fn from_observation(observation: &Value) -> Result<Self, anyhow::Error> {
        /* 1) date */
        let date_str: &str = observation
            .get("date")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                anyhow!("[Observation->from_observation] Missing or invalid 'date'")
            })?;

        let date: NaiveDate = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            anyhow!(
                "[Observation->from_observation] Failed to parse 'date' '{}': {}",
                date_str,
                e
            )
        })?;

        /* 2) value - 숫자로 강제 변환, 실패 시 결측 처리 */
        let value: Option<f64> = observation
            .get("value")
            .and_then(|v| v.as_str())
            .and_then(|v| v.parse::<f64>().ok());

        Ok(Observation::new(date, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_observation_parses_numeric_value() {
        let row: Value = json!({"date": "2024-01-02", "value": "3.75"});
        let observation: Observation = Observation::from_observation(&row).unwrap();

        assert_eq!(convert_date(&observation), "2024-01-02");
        assert_eq!(*observation.value(), Some(3.75));
    }

    #[test]
    fn from_observation_coerces_missing_value_marker_to_none() {
        let row: Value = json!({"date": "2024-01-02", "value": "."});
        let observation: Observation = Observation::from_observation(&row).unwrap();

        assert_eq!(*observation.value(), None);
    }

    #[test]
    fn from_observation_fails_without_date() {
        let row: Value = json!({"value": "1.0"});
        assert!(Observation::from_observation(&row).is_err());
    }

    fn convert_date(observation: &Observation) -> String {
        observation.date().format("%Y-%m-%d").to_string()
    }
}
