//! Adapter for Indian monitoring station feeds.
//!
//! Documents look like:
//!
//! ```json
//! {"name": "Delhi",
//!  "results": {"collection1": [
//!    {"parameter": {"text": "Ozone"}, "measuredValue": "42 µg/m3",
//!     "date": "Monday, January 1, 2018", "time": "10:00:00"}]}}
//! ```
//!
//! Station clocks are Indian Standard Time.

use chrono_tz::Tz;

use crate::Adapter;

pub struct IndiaAdapter;

impl Adapter for IndiaAdapter {
    fn name(&self) -> &'static str {
        "india"
    }

    fn timezone(&self) -> Tz {
        chrono_tz::Asia::Kolkata
    }
}
