use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;
use crate::filter::utils::date_key;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::current_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn today_key() -> String {
    date_key(today_in_app_tz())
}
