use crate::common::*;

/* 핸들이 drop 되면 로거가 종료되므로 전역으로 유지 */
static LOGGER_HANDLE: once_lazy<LoggerHandle> = once_lazy::new(init_global_logger);

#[doc = r#"
    전역 로거를 초기화하는 함수.

    1. `logs/` 디렉토리 하위에 일 단위로 로테이션되는 로그 파일을 생성
    2. 동일한 로그를 stdout 으로도 복제 출력
    3. 30일이 지난 로그 파일은 정리

    # Panics
    로그 스펙이 잘못되었거나 로거 시작에 실패한 경우 애플리케이션 종료
"#]
fn init_global_logger() -> LoggerHandle {
    Logger::try_with_str("info")
        .unwrap_or_else(|e| {
            panic!("[Error][init_global_logger()] Invalid log specification: {:?}", e)
        })
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("fred_indicator_tracking"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(default_log_format)
        .format_for_stdout(default_log_format)
        .start()
        .unwrap_or_else(|e| panic!("[Error][init_global_logger()] Failed to start logger: {:?}", e))
}

#[doc = "전역 로거 설정 함수"]
pub fn set_global_logger() {
    once_lazy::force(&LOGGER_HANDLE);
}

#[doc = ""]
fn default_log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}
