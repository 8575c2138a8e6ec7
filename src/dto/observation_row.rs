use crate::common::*;

#[doc = "지표 페이지 테이블에 표시되는 (날짜, 값) 한 행"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ObservationRow {
    pub date: String,
    pub value: Option<f64>,
}
