use crate::common::*;

#[doc = r#"
    장단기 금리차 정보. 기준 시리즈 쌍은 시스템 설정(spread_short_key / spread_long_key)을 따른다.

    # Fields
    * `spread_2_10` - 장기 금리 - 단기 금리. 둘 중 하나라도 결측이면 None
    * `inverted_yn` - 스프레드가 음수(역전)인지 여부
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct YieldSpread {
    pub spread_2_10: Option<f64>,
    pub inverted_yn: bool,
}

impl YieldSpread {
    #[doc = "단기/장기 최신 금리로부터 스프레드를 계산해주는 함수"]
    pub fn from_rates(short_rate: Option<f64>, long_rate: Option<f64>) -> Self {
        let spread: Option<f64> = match (short_rate, long_rate) {
            (Some(short_rate), Some(long_rate)) => Some(long_rate - short_rate),
            _ => None,
        };

        let inverted_yn: bool = matches!(spread, Some(s) if s < 0.0);

        YieldSpread::new(spread, inverted_yn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rates_flags_inversion_when_short_exceeds_long() {
        let spread: YieldSpread = YieldSpread::from_rates(Some(4.8), Some(4.2));

        let spread_value: f64 = spread.spread_2_10().unwrap();
        assert!((spread_value + 0.6).abs() < 1e-9);
        assert!(*spread.inverted_yn());
    }

    #[test]
    fn from_rates_reports_normal_curve() {
        let spread: YieldSpread = YieldSpread::from_rates(Some(4.0), Some(4.5));

        assert_eq!(*spread.spread_2_10(), Some(0.5));
        assert!(!*spread.inverted_yn());
    }

    #[test]
    fn from_rates_yields_none_when_a_rate_is_missing() {
        let spread: YieldSpread = YieldSpread::from_rates(None, Some(4.5));

        assert_eq!(*spread.spread_2_10(), None);
        assert!(!*spread.inverted_yn());
    }
}
