pub use chrono::{DateTime, Local, NaiveDate};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use num_format::{Locale, ToFormattedString};
pub use once_cell::sync::Lazy as once_lazy;
pub use plotly::{
    Layout, Plot, Scatter,
    common::{Mode, Title},
};
pub use reqwest::Client;
