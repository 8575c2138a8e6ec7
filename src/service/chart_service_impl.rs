use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::model::series::series_data::*;

use crate::dto::rendered_chart::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = r#"
        시리즈 이름으로부터 대상 요소 식별자를 계산해주는 함수.

        첫 번째 공백 하나만 언더스코어로 치환한다. 호스트 페이지의 요소 식별자들이
        이 규칙으로 만들어져 있으므로, 전체 치환으로 바꾸면 공백이 둘 이상인
        시리즈의 차트가 모두 대상을 찾지 못하게 된다.
    "#]
    fn target_element_id(series_name: &str) -> String {
        series_name.replacen(' ', "_", 1)
    }

    #[doc = "하나의 시리즈를 trace 로 렌더링해주는 함수. x/y 는 입력 배열을 순서 그대로 사용한다."]
    fn render_single_chart(series_name: &str, series_data: &SeriesData) -> RenderedChart {
        let trace = Scatter::new(series_data.date().clone(), series_data.value().clone())
            .mode(Mode::LinesMarkers)
            .name(series_name);

        let mut plot: Plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(Layout::new().title(Title::with_text(series_name)));

        let target_id: String = Self::target_element_id(series_name);
        let chart_html: String = plot.to_inline_html(Some(target_id.as_str()));

        RenderedChart::new(target_id, series_name.to_string(), chart_html)
    }
}

impl ChartService for ChartServiceImpl {
    #[doc = r#"
        이름 붙은 시계열 페이로드를 디코딩하여 시리즈마다 독립적인 차트를 렌더링하는 함수.

        1. 페이로드 문자열 전체를 JSON 으로 파싱. 실패 시 오류가 그대로 전파되며
           어떤 시리즈도 렌더링되지 않는다 (디코딩은 페이로드 단위로 한 번 수행)
        2. 디코더가 생성한 순서대로 각 (이름, 데이터) 항목에 대해:
           - x = date, y = value, scatter / lines+markers, trace 명 = 시리즈명인 trace 생성
           - 시리즈명의 첫 공백을 언더스코어로 치환한 대상 식별자 계산
           - 대상 식별자와 시리즈명 제목으로 단일 trace 차트 생성

        # Arguments
        * `payload` - JSON 객체 문자열: 시리즈명 -> { date: [..], value: [..] }

        # Returns
        * `Vec<RenderedChart>` - 디코딩된 시리즈당 하나의 렌더링 결과
        * `anyhow::Error` - 페이로드가 올바른 JSON 이 아닌 경우
    "#]
    fn render_series_charts(&self, payload: &str) -> anyhow::Result<Vec<RenderedChart>> {
        let series_collection: SeriesCollection = serde_json::from_str(payload).map_err(|e| {
            anyhow!(
                "[ChartServiceImpl->render_series_charts] Failed to decode series payload: {}",
                e
            )
        })?;

        let mut rendered_charts: Vec<RenderedChart> = Vec::new();

        for (series_name, series_data) in &series_collection {
            rendered_charts.push(Self::render_single_chart(series_name, series_data));
        }

        Ok(rendered_charts)
    }

    #[doc = r#"
        렌더링된 차트들을 호스트 페이지에 장착해주는 함수.

        각 차트의 대상 요소 `<div id="..."></div>` 를 차트 HTML 로 치환한다.
        대상 요소가 페이지에 없으면 해당 차트만 로그를 남기고 건너뛰며,
        나머지 차트의 장착은 계속 진행된다.
    "#]
    fn mount_charts_into_page(&self, page_html: &str, rendered_charts: &[RenderedChart]) -> String {
        let mut mounted_page: String = page_html.to_string();

        for rendered_chart in rendered_charts {
            let target_element: String = format!("<div id=\"{}\"></div>", rendered_chart.target_id());

            if mounted_page.contains(&target_element) {
                mounted_page = mounted_page.replace(&target_element, rendered_chart.chart_html());
            } else {
                error!(
                    "[ChartServiceImpl->mount_charts_into_page] Target element '{}' not found in the page",
                    rendered_chart.target_id()
                );
            }
        }

        mounted_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_series_charts_renders_one_chart_per_series() {
        let payload: &str = r#"{
            "Nominal GDP (Billions $)": {"date": ["2024-01-01"], "value": [27000.5]},
            "Unemployment Rate (%)": {"date": ["2024-01-01"], "value": [3.7]}
        }"#;

        let rendered_charts: Vec<RenderedChart> = ChartServiceImpl::new()
            .render_series_charts(payload)
            .unwrap();

        assert_eq!(rendered_charts.len(), 2);
    }

    #[test]
    fn render_series_charts_matches_single_series_payload() {
        let payload: &str =
            r#"{"Temp": {"date": ["2024-01-01", "2024-01-02"], "value": [10, 12]}}"#;

        let rendered_charts: Vec<RenderedChart> = ChartServiceImpl::new()
            .render_series_charts(payload)
            .unwrap();

        assert_eq!(rendered_charts.len(), 1);
        assert_eq!(rendered_charts[0].target_id(), "Temp");
        assert_eq!(rendered_charts[0].series_name(), "Temp");

        /* trace 는 입력 배열과 모드/타입을 그대로 담아야 한다 */
        let chart_html: &String = rendered_charts[0].chart_html();
        assert!(chart_html.contains("2024-01-01"));
        assert!(chart_html.contains("2024-01-02"));
        assert!(chart_html.contains("scatter"));
        assert!(chart_html.contains("lines+markers"));
        assert!(chart_html.contains("Temp"));
    }

    #[test]
    fn render_series_charts_returns_no_charts_for_empty_payload() {
        let rendered_charts: Vec<RenderedChart> = ChartServiceImpl::new()
            .render_series_charts("{}")
            .unwrap();

        assert!(rendered_charts.is_empty());
    }

    #[test]
    fn render_series_charts_fails_on_malformed_payload() {
        assert!(ChartServiceImpl::new()
            .render_series_charts("not json")
            .is_err());
    }

    #[test]
    fn target_element_id_replaces_only_the_first_space() {
        assert_eq!(ChartServiceImpl::target_element_id("A B C"), "A_B C");
        assert_eq!(
            ChartServiceImpl::target_element_id("Unemployment Rate (%)"),
            "Unemployment_Rate (%)"
        );
    }

    #[test]
    fn target_element_id_keeps_spaceless_names_unchanged() {
        assert_eq!(ChartServiceImpl::target_element_id("Temp"), "Temp");
    }

    #[test]
    fn decoded_series_keeps_input_sequences_unmodified() {
        let payload: &str =
            r#"{"Temp": {"date": ["2024-01-03", "2024-01-01"], "value": [12, null]}}"#;

        let series_collection: SeriesCollection = serde_json::from_str(payload).unwrap();
        let series_data: &SeriesData = &series_collection["Temp"];

        /* 재정렬 없이 인덱스 쌍이 유지되어야 한다 */
        assert_eq!(series_data.date(), &vec!["2024-01-03", "2024-01-01"]);
        assert_eq!(series_data.value(), &vec![Some(12.0), None]);
    }

    #[test]
    fn mount_charts_into_page_replaces_found_targets_and_skips_missing_ones() {
        let page_html: &str = "<body><div id=\"A_B C\"></div></body>";
        let rendered_charts: Vec<RenderedChart> = vec![
            RenderedChart::new(
                String::from("A_B C"),
                String::from("A B C"),
                String::from("<div id=\"A_B C\">chart</div>"),
            ),
            RenderedChart::new(
                String::from("Missing_Target"),
                String::from("Missing Target"),
                String::from("<div id=\"Missing_Target\">chart</div>"),
            ),
        ];

        let mounted_page: String =
            ChartServiceImpl::new().mount_charts_into_page(page_html, &rendered_charts);

        assert_eq!(
            mounted_page,
            "<body><div id=\"A_B C\">chart</div></body>"
        );
    }
}
