use chrono::{DateTime, FixedOffset, Offset, Utc};
use dioxus::prelude::*;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref LOCAL_TZ: FixedOffset = browser_offset();
}

#[cfg(target_arch = "wasm32")]
fn browser_offset() -> FixedOffset {
    local_offset(js_sys::Date::new_0().get_timezone_offset())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_offset() -> FixedOffset {
    Utc.fix()
}

/// `Date.getTimezoneOffset()` is in minutes, positive west of UTC.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn local_offset(minutes_west: f64) -> FixedOffset {
    FixedOffset::west_opt((minutes_west * 60.) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn humanize(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    chrono_humanize::HumanTime::from(time - now).to_string()
}

/// Relative to `now` rather than the wall clock, so the caller decides when it re-renders.
#[inline_props]
pub fn Time<'a>(cx: Scope<'a>, time: &'a DateTime<Utc>, now: DateTime<Utc>) -> Element {
    let duration = humanize(**time, *now);
    let full_time = time
        .with_timezone(&*LOCAL_TZ)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    cx.render(rsx! (
        span {
            title: "{full_time}",
            "{duration}"
        }
    ))
}
