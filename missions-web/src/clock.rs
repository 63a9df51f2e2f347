//! Wall-clock source for "today".

use missions_game::{Clock, DateKey};

/// Local calendar day from the browser clock. No timezone conversion beyond
/// what `Date` itself applies. Off wasm it is pinned to the epoch day so
/// server-side renders stay deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[cfg(target_arch = "wasm32")]
    fn today(&self) -> DateKey {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        // getMonth is zero-based
        DateKey::from_ymd(year, now.get_month() + 1, now.get_date())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn today(&self) -> DateKey {
        DateKey::from_ymd(1970, 1, 1)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_clock_is_pinned() {
        assert_eq!(BrowserClock.today().as_str(), "1970-01-01");
    }
}
