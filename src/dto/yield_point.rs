use crate::common::*;

#[doc = r#"
    수익률 곡선의 한 점

    # Fields
    * `maturity` - 만기 (연 단위)
    * `maturity_name` - 만기 표시 이름
    * `yield_rate` - 최신 수익률 (%)
    * `date` - 최신 관측 날짜
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct YieldPoint {
    pub maturity: f64,
    pub maturity_name: String,
    pub yield_rate: f64,
    pub date: String,
}
