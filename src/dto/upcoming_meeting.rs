use crate::common::*;

use crate::model::calendar::calendar_config::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    캘린더 페이지에 표시되는 다가오는 FOMC 일정 한 건

    # Fields
    * `meeting_date` - 일정 날짜 (YYYY-MM-DD)
    * `event_type` - 일정 종류 (FOMC Meeting / Press Conference 등)
    * `description` - 일정 설명
    * `days_until` - 오늘부터 남은 일수
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct UpcomingMeeting {
    pub meeting_date: String,
    pub event_type: String,
    pub description: String,
    pub days_until: i64,
}

impl UpcomingMeeting {
    #[doc = r#"
        캘린더 설정에서 앞으로 180일 이내의 FOMC 일정만 추려서 날짜순으로 반환해주는 함수.

        1. 각 일정의 날짜 문자열을 파싱 (실패한 항목은 로그를 남기고 건너뛴다)
        2. 오늘 기준 0 ~ 180일 사이의 일정만 선별
        3. 남은 일수를 계산하여 날짜 오름차순으로 정렬
    "#]
    pub fn filter_upcoming(calendar_config: &CalendarConfig, today: NaiveDate) -> Vec<UpcomingMeeting> {
        let mut upcoming_meetings: Vec<UpcomingMeeting> = Vec::new();

        for meeting in calendar_config.fed_meeting() {
            let meeting_date: NaiveDate = match convert_str_to_naivedate(meeting.meeting_date()) {
                Ok(meeting_date) => meeting_date,
                Err(e) => {
                    error!(
                        "[UpcomingMeeting->filter_upcoming] Invalid meeting date '{}': {:?}",
                        meeting.meeting_date(),
                        e
                    );
                    continue;
                }
            };

            let days_until: i64 = meeting_date.signed_duration_since(today).num_days();

            if (0..=180).contains(&days_until) {
                upcoming_meetings.push(UpcomingMeeting::new(
                    meeting.meeting_date().to_string(),
                    meeting.event_type().to_string(),
                    meeting.description().to_string(),
                    days_until,
                ));
            }
        }

        upcoming_meetings.sort_by(|a, b| a.meeting_date().cmp(b.meeting_date()));

        upcoming_meetings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calendar::fed_meeting::*;

    #[test]
    fn filter_upcoming_keeps_only_meetings_within_180_days() {
        let calendar_config: CalendarConfig = calendar_with_dates(&[
            "2024-11-01", /* past */
            "2024-12-17", /* in window */
            "2025-03-18", /* in window */
            "2025-08-01", /* beyond window */
        ]);
        let today: NaiveDate = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

        let upcoming: Vec<UpcomingMeeting> =
            UpcomingMeeting::filter_upcoming(&calendar_config, today);

        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].meeting_date(), "2024-12-17");
        assert_eq!(*upcoming[0].days_until(), 16);
        assert_eq!(upcoming[1].meeting_date(), "2025-03-18");
    }

    #[test]
    fn filter_upcoming_includes_meetings_happening_today() {
        let calendar_config: CalendarConfig = calendar_with_dates(&["2024-12-01"]);
        let today: NaiveDate = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

        let upcoming: Vec<UpcomingMeeting> =
            UpcomingMeeting::filter_upcoming(&calendar_config, today);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(*upcoming[0].days_until(), 0);
    }

    #[test]
    fn filter_upcoming_skips_unparseable_dates() {
        let calendar_config: CalendarConfig = calendar_with_dates(&["not-a-date", "2024-12-17"]);
        let today: NaiveDate = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();

        let upcoming: Vec<UpcomingMeeting> =
            UpcomingMeeting::filter_upcoming(&calendar_config, today);

        assert_eq!(upcoming.len(), 1);
    }

    fn calendar_with_dates(dates: &[&str]) -> CalendarConfig {
        let fed_meeting: Vec<FedMeeting> = dates
            .iter()
            .map(|date| FedMeeting {
                meeting_date: date.to_string(),
                event_type: String::from("FOMC Meeting"),
                description: String::from("Federal Reserve interest rate decision"),
            })
            .collect();

        CalendarConfig {
            fed_meeting,
            economic_release: Vec::new(),
        }
    }
}
