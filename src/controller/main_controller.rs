use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::{
    calendar::calendar_config::*, configs::total_config::*, indicator::indicator_list_config::*,
};

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::page_service::*;

#[derive(Debug, new)]
pub struct MainController<P: PageService> {
    page_service: P,
}

impl<P: PageService> MainController<P> {
    #[doc = r#"
        메인 루프를 실행하는 핵심 함수로, 설정된 주기마다 대시보드 페이지 전체를 재생성한다.

        1. 지표 설정 파일(`INDICATOR_LIST_PATH`)과 캘린더 설정 파일(`CALENDAR_CONFIG_PATH`)을 읽어온다
        2. `ticker_sec` 주기마다 모든 페이지를 순서대로 재생성:
           - 인덱스 / 대시보드 / 지표별 상세 / 수익률 곡선 / 비교 / 캘린더
        3. 무한루프로 동작하며, 개별 페이지 생성 오류는 로그만 남기고 다음 페이지로 진행

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let indicator_list: IndicatorListConfig =
            read_toml_from_file::<IndicatorListConfig>(&INDICATOR_LIST_PATH)?;
        let calendar_config: CalendarConfig =
            read_toml_from_file::<CalendarConfig>(&CALENDAR_CONFIG_PATH)?;

        let ticker_sec: u64 = *get_system_config_info().ticker_sec();
        let mut ticker: Interval = interval(Duration::from_secs(ticker_sec));

        loop {
            ticker.tick().await;

            self.generate_site_pages(&indicator_list, &calendar_config)
                .await;
        }
    }

    #[doc = "모든 페이지를 한 차례 재생성해주는 함수. 페이지 간 실패는 서로 독립적이다."]
    async fn generate_site_pages(
        &self,
        indicator_list: &IndicatorListConfig,
        calendar_config: &CalendarConfig,
    ) {
        info!("Regenerating dashboard pages");

        if let Err(e) = self.page_service.generate_index_page().await {
            error!("[MainController->generate_site_pages] index: {:?}", e);
        }

        if let Err(e) = self.page_service.generate_dashboard_page(indicator_list).await {
            error!("[MainController->generate_site_pages] dashboard: {:?}", e);
        }

        if let Err(e) = self
            .page_service
            .generate_indicator_pages(indicator_list)
            .await
        {
            error!("[MainController->generate_site_pages] indicators: {:?}", e);
        }

        if let Err(e) = self
            .page_service
            .generate_yield_curve_page(indicator_list)
            .await
        {
            error!("[MainController->generate_site_pages] yield curve: {:?}", e);
        }

        if let Err(e) = self.page_service.generate_compare_page(indicator_list).await {
            error!("[MainController->generate_site_pages] compare: {:?}", e);
        }

        if let Err(e) = self
            .page_service
            .generate_calendar_page(calendar_config)
            .await
        {
            error!("[MainController->generate_site_pages] calendar: {:?}", e);
        }

        info!("Dashboard page regeneration finished");
    }
}
