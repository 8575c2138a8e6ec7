use crate::common::*;

#[doc = r#"
    하나의 시리즈에 대해 렌더링된 차트

    # Fields
    * `target_id` - 차트가 장착될 호스트 페이지 요소의 식별자
    * `series_name` - 시리즈 표시 이름 (트레이스명이자 차트 제목)
    * `chart_html` - 플로팅 라이브러리가 생성한 inline HTML/JS
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    pub target_id: String,
    pub series_name: String,
    pub chart_html: String,
}
