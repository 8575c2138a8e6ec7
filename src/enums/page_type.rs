#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Index,
    Dashboard,
    Indicator,
    YieldCurve,
    Compare,
    Calendar,
}

pub fn get_template_file_name(page_type: PageType) -> &'static str {
    match page_type {
        PageType::Index => "index.html",
        PageType::Dashboard => "dashboard.html",
        PageType::Indicator => "indicator.html",
        PageType::YieldCurve => "yield_curve.html",
        PageType::Compare => "compare.html",
        PageType::Calendar => "calendar.html",
    }
}

/* 지표 상세 페이지의 출력 파일명은 지표 설정의 page_name 을 따른다 */
pub fn get_output_file_name(page_type: PageType) -> &'static str {
    get_template_file_name(page_type)
}
