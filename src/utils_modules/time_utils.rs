use crate::common::*;

#[doc = "현재 로컬 시각을 반환해주는 함수"]
pub fn get_current_local_datetime() -> DateTime<Local> {
    Local::now()
}

#[doc = "현재 로컬 날짜를 반환해주는 함수"]
pub fn get_current_naivedate() -> NaiveDate {
    Local::now().date_naive()
}

#[doc = "시간 단위로 변하는 캐시 키를 생성해주는 함수"]
pub fn get_current_hour_key() -> String {
    Local::now().format("%Y-%m-%d-%H").to_string()
}

#[doc = ""]
pub fn convert_naivedate_to_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[doc = "날짜 문자열을 NaiveDate 로 변환해주는 함수"]
pub fn convert_str_to_naivedate(date_str: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        anyhow!(
            "[convert_str_to_naivedate()] Invalid date format '{}': {}",
            date_str,
            e
        )
    })
}

#[doc = ""]
pub fn convert_datetime_to_str_human(datetime: DateTime<Local>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_str_to_naivedate_accepts_iso_dates() {
        let date: NaiveDate = convert_str_to_naivedate("2024-12-17").unwrap();
        assert_eq!(convert_naivedate_to_str(date), "2024-12-17");
    }

    #[test]
    fn convert_str_to_naivedate_rejects_garbage() {
        assert!(convert_str_to_naivedate("17/12/2024").is_err());
        assert!(convert_str_to_naivedate("not a date").is_err());
    }
}
