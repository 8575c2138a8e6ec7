use crate::common::*;

/* FRED observation 행 → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromObservation
where
    Self: Sized,
{
    fn from_observation(observation: &Value) -> Result<Self, anyhow::Error>;
}
