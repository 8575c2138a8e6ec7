use crate::common::*;

/* 시리즈명 → 시리즈 데이터 매핑. 렌더링 순서는 디코더가 생성한 순서를 따른다. */
pub type SeriesCollection = BTreeMap<String, SeriesData>;

#[doc = r#"
    이름을 가진 하나의 시계열 데이터.

    `date` 와 `value` 는 길이가 같은 순서 있는 배열이며, 같은 인덱스끼리 짝을 이룬다.
    이 불변식은 페이로드 생산자의 책임이며 렌더러는 검증하지 않는다.
    관측치가 없는 시점의 값은 null 로 표현된다.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesData {
    pub date: Vec<String>,
    pub value: Vec<Option<f64>>,
}
