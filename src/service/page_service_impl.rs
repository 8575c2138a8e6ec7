use crate::common::*;

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::{chart_service::*, page_service::*, query_service::*};

use crate::model::{
    calendar::calendar_config::*, configs::total_config::*, indicator::indicator_list_config::*,
    series::series_data::*,
};

use crate::dto::{
    dashboard_summary::*, observation_row::*, rendered_chart::*, upcoming_meeting::*,
    yield_point::*, yield_spread::*,
};

use crate::enums::page_type::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct PageServiceImpl<Q: QueryService, C: ChartService> {
    query_service: Q,
    chart_service: C,
}

impl<Q, C> PageServiceImpl<Q, C>
where
    Q: QueryService,
    C: ChartService,
{
    #[doc = "템플릿 디렉토리에서 페이지 템플릿을 읽어오는 함수"]
    fn read_page_template(&self, template_file_name: &str) -> anyhow::Result<String> {
        let template_path: String = format!("{}/{}", &*HTML_TEMPLATE_PATH, template_file_name);

        fs::read_to_string(&template_path).map_err(|e| {
            anyhow!(
                "[PageServiceImpl->read_page_template] Failed to read template '{}': {:?}",
                template_path,
                e
            )
        })
    }

    #[doc = "완성된 페이지를 출력 디렉토리에 기록해주는 함수"]
    async fn write_page_to_output(
        &self,
        output_file_name: &str,
        page_html: &str,
    ) -> anyhow::Result<()> {
        let output_dir: &String = get_page_config_info().output_dir();

        tokio::fs::create_dir_all(output_dir).await?;

        let output_path: PathBuf = PathBuf::from(format!("{}/{}", output_dir, output_file_name));
        tokio::fs::write(&output_path, page_html).await?;

        info!("Page generated: {}", output_path.to_string_lossy());

        Ok(())
    }

    #[doc = ""]
    fn generate_table_rows<T, F>(&self, rows: &[T], row_formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        rows.iter().map(row_formatter).collect::<Vec<String>>().join("\n")
    }

    #[doc = ""]
    fn format_optional_value(value: &Option<f64>) -> String {
        match value {
            Some(value) => format!("{}", value),
            None => String::from("N/A"),
        }
    }

    #[doc = ""]
    fn format_signed_value(value: &Option<f64>, suffix: &str) -> String {
        match value {
            Some(value) => format!("{:+.2}{}", value, suffix),
            None => String::from("N/A"),
        }
    }

    #[doc = "대시보드 요약 테이블 행 생성"]
    fn generate_summary_rows(&self, summaries: &[DashboardSummary]) -> String {
        self.generate_table_rows(summaries, |summary| {
            let trend: &str = summary
                .trend()
                .as_ref()
                .map(|trend| trend.as_str())
                .unwrap_or("N/A");

            format!(
                r#"<tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td class="trend-{}">{}</td>
                </tr>"#,
                summary.indicator_name(),
                Self::format_optional_value(summary.current()),
                summary.date(),
                Self::format_signed_value(summary.change(), ""),
                Self::format_signed_value(summary.pct_change(), "%"),
                trend,
                trend
            )
        })
    }

    #[doc = "수익률 곡선 테이블 행 생성"]
    fn generate_yield_curve_rows(&self, yield_points: &[YieldPoint]) -> String {
        self.generate_table_rows(yield_points, |yield_point| {
            format!(
                r#"<tr>
                    <td>{}</td>
                    <td>{:.2}%</td>
                    <td>{}</td>
                </tr>"#,
                yield_point.maturity_name(),
                yield_point.yield_rate(),
                yield_point.date()
            )
        })
    }

    #[doc = "지표 관측치 테이블 행 생성"]
    fn generate_observation_rows(&self, rows: &[ObservationRow]) -> String {
        self.generate_table_rows(rows, |row| {
            format!(
                r#"<tr>
                    <td>{}</td>
                    <td>{}</td>
                </tr>"#,
                row.date(),
                Self::format_optional_value(row.value())
            )
        })
    }

    #[doc = "FOMC 일정 테이블 행 생성"]
    fn generate_fed_meeting_rows(&self, upcoming_meetings: &[UpcomingMeeting]) -> String {
        self.generate_table_rows(upcoming_meetings, |meeting| {
            format!(
                r#"<tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>D-{}</td>
                </tr>"#,
                meeting.meeting_date(),
                meeting.event_type(),
                meeting.description(),
                meeting.days_until()
            )
        })
    }

    #[doc = "경제지표 발표 일정 테이블 행 생성"]
    fn generate_economic_release_rows(&self, calendar_config: &CalendarConfig) -> String {
        self.generate_table_rows(calendar_config.economic_release(), |release| {
            format!(
                r#"<tr>
                    <td style="border-left: 6px solid {};">{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                </tr>"#,
                release.color(),
                release.release_name(),
                release.frequency(),
                release.description(),
                release.importance()
            )
        })
    }

    #[doc = "스프레드 배너용 표시 문자열 쌍을 생성해주는 함수"]
    fn format_spread(yield_spread: &YieldSpread) -> (String, &'static str) {
        let spread_text: String = match yield_spread.spread_2_10() {
            Some(spread) => format!("{:.2}%p", spread),
            None => String::from("N/A"),
        };

        let curve_status: &str = if *yield_spread.inverted_yn() {
            "Inverted"
        } else {
            "Normal"
        };

        (spread_text, curve_status)
    }
}

#[async_trait]
impl<Q, C> PageService for PageServiceImpl<Q, C>
where
    Q: QueryService + Sync + Send,
    C: ChartService + Sync + Send,
{
    #[doc = "네비게이션 인덱스 페이지 생성"]
    async fn generate_index_page(&self) -> anyhow::Result<()> {
        let template: String =
            self.read_page_template(get_template_file_name(PageType::Index))?;

        let page_html: String = template.replace(
            "{{GENERATED_AT}}",
            &convert_datetime_to_str_human(get_current_local_datetime()),
        );

        self.write_page_to_output(get_output_file_name(PageType::Index), &page_html)
            .await
    }

    #[doc = r#"
        대시보드 페이지 생성.

        1. 지표별 요약(최신값/변화량/추세) 테이블
        2. 만기순 수익률 곡선 테이블
        3. 장단기 스프레드 배너 (역전 여부 포함)
    "#]
    async fn generate_dashboard_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()> {
        let summaries: Vec<DashboardSummary> = self
            .query_service
            .get_dashboard_summaries(indicator_list)
            .await?;

        let yield_points: Vec<YieldPoint> = self
            .query_service
            .get_yield_curve_points(indicator_list)
            .await?;

        let yield_spread: YieldSpread =
            self.query_service.get_yield_spread(indicator_list).await?;

        let (spread_text, curve_status) = Self::format_spread(&yield_spread);

        let template: String =
            self.read_page_template(get_template_file_name(PageType::Dashboard))?;

        let page_html: String = template
            .replace("{{SUMMARY_ROWS}}", &self.generate_summary_rows(&summaries))
            .replace(
                "{{YIELD_CURVE_ROWS}}",
                &self.generate_yield_curve_rows(&yield_points),
            )
            .replace("{{SPREAD_2_10}}", &spread_text)
            .replace("{{CURVE_STATUS}}", curve_status)
            .replace(
                "{{GENERATED_AT}}",
                &convert_datetime_to_str_human(get_current_local_datetime()),
            );

        self.write_page_to_output(get_output_file_name(PageType::Dashboard), &page_html)
            .await
    }

    #[doc = r#"
        지표별 상세 페이지 생성.

        지표마다 관측치 테이블 페이지를 하나씩 기록한다. 출력 파일명은 지표 설정의
        `page_name` 을 따른다. 한 지표의 실패는 로그만 남기고 다음 지표로 진행한다.
    "#]
    async fn generate_indicator_pages(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()> {
        let template: String =
            self.read_page_template(get_template_file_name(PageType::Indicator))?;

        for indicator in indicator_list.indicator() {
            let rows: Vec<ObservationRow> = match self
                .query_service
                .get_indicator_rows(indicator_list, indicator.indicator_key())
                .await
            {
                Ok(rows) => rows,
                Err(e) => {
                    error!("{:?}", e);
                    continue;
                }
            };

            let page_html: String = template
                .replace("{{INDICATOR_NAME}}", indicator.indicator_name())
                .replace(
                    "{{ROW_COUNT}}",
                    &rows.len().to_formatted_string(&Locale::en),
                )
                .replace("{{INDICATOR_ROWS}}", &self.generate_observation_rows(&rows))
                .replace(
                    "{{GENERATED_AT}}",
                    &convert_datetime_to_str_human(get_current_local_datetime()),
                );

            let output_file_name: String = format!("{}.html", indicator.page_name());
            self.write_page_to_output(&output_file_name, &page_html).await?;
        }

        Ok(())
    }

    #[doc = r#"
        수익률 곡선 페이지 생성.

        만기별 국채 시리즈의 이력을 시리즈 컬렉션 페이로드로 인코딩한 뒤
        차트 서비스로 렌더링하여 템플릿의 대상 요소들에 장착한다.
    "#]
    async fn generate_yield_curve_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()> {
        let series_collection: SeriesCollection = self
            .query_service
            .get_treasury_series_collection(indicator_list)
            .await?;

        let payload: String = convert_json_from_struct(&series_collection)?.to_string();
        let rendered_charts: Vec<RenderedChart> =
            self.chart_service.render_series_charts(&payload)?;

        let yield_points: Vec<YieldPoint> = self
            .query_service
            .get_yield_curve_points(indicator_list)
            .await?;

        let yield_spread: YieldSpread =
            self.query_service.get_yield_spread(indicator_list).await?;

        let (spread_text, curve_status) = Self::format_spread(&yield_spread);

        let template: String =
            self.read_page_template(get_template_file_name(PageType::YieldCurve))?;

        let page_html: String = template
            .replace(
                "{{YIELD_CURVE_ROWS}}",
                &self.generate_yield_curve_rows(&yield_points),
            )
            .replace("{{SPREAD_2_10}}", &spread_text)
            .replace("{{CURVE_STATUS}}", curve_status)
            .replace(
                "{{GENERATED_AT}}",
                &convert_datetime_to_str_human(get_current_local_datetime()),
            );

        let mounted_page: String = self
            .chart_service
            .mount_charts_into_page(&page_html, &rendered_charts);

        self.write_page_to_output(get_output_file_name(PageType::YieldCurve), &mounted_page)
            .await
    }

    #[doc = r#"
        지표 비교 페이지 생성.

        모든 지표의 시계열을 하나의 시리즈 컬렉션 페이로드로 인코딩하고,
        시리즈마다 독립적인 차트를 렌더링하여 템플릿에 미리 선언된
        대상 요소들에 장착한다.
    "#]
    async fn generate_compare_page(
        &self,
        indicator_list: &IndicatorListConfig,
    ) -> anyhow::Result<()> {
        let series_collection: SeriesCollection = self
            .query_service
            .get_series_collection(indicator_list)
            .await?;

        let payload: String = convert_json_from_struct(&series_collection)?.to_string();
        let rendered_charts: Vec<RenderedChart> =
            self.chart_service.render_series_charts(&payload)?;

        let template: String =
            self.read_page_template(get_template_file_name(PageType::Compare))?;

        let page_html: String = template.replace(
            "{{GENERATED_AT}}",
            &convert_datetime_to_str_human(get_current_local_datetime()),
        );

        let mounted_page: String = self
            .chart_service
            .mount_charts_into_page(&page_html, &rendered_charts);

        self.write_page_to_output(get_output_file_name(PageType::Compare), &mounted_page)
            .await
    }

    #[doc = "경제 캘린더 페이지 생성. 앞으로 180일 이내의 FOMC 일정과 정기 발표 일정을 담는다."]
    async fn generate_calendar_page(
        &self,
        calendar_config: &CalendarConfig,
    ) -> anyhow::Result<()> {
        let upcoming_meetings: Vec<UpcomingMeeting> =
            UpcomingMeeting::filter_upcoming(calendar_config, get_current_naivedate());

        let template: String =
            self.read_page_template(get_template_file_name(PageType::Calendar))?;

        let page_html: String = template
            .replace(
                "{{FED_MEETING_ROWS}}",
                &self.generate_fed_meeting_rows(&upcoming_meetings),
            )
            .replace(
                "{{ECONOMIC_RELEASE_ROWS}}",
                &self.generate_economic_release_rows(calendar_config),
            )
            .replace(
                "{{GENERATED_AT}}",
                &convert_datetime_to_str_human(get_current_local_datetime()),
            );

        self.write_page_to_output(get_output_file_name(PageType::Calendar), &page_html)
            .await
    }
}
