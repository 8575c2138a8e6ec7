/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description :

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::fred_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod dto;

mod enums;

mod service;
use service::{chart_service_impl::*, page_service_impl::*, query_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Indicator tracking program start!");

    /* FRED connection */
    let fred_conn: FredRepositoryImpl = FredRepositoryImpl::new(get_fred_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing fred_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl = QueryServiceImpl::new(Arc::new(fred_conn));
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let page_service: PageServiceImpl<QueryServiceImpl, ChartServiceImpl> =
        PageServiceImpl::new(query_service, chart_service);

    let main_controller: MainController<PageServiceImpl<QueryServiceImpl, ChartServiceImpl>> =
        MainController::new(page_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
