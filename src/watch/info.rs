//! Watch details record

use std::fmt;

const CASE_TYPE: &str = "Solid";
const BEZEL: &str = "Titanium";
const DIAL: &str = "Roman";
const CASE_FINISH: &str = "Silver";
const JEWELS: u32 = 15;

/// Details reported for a watch model.
///
/// Only `manufacturer` varies between requests; it carries the caller's
/// `model` value verbatim. The remaining fields are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchInfo {
    pub manufacturer: String,
    pub case_type: &'static str,
    pub bezel: &'static str,
    pub dial: &'static str,
    pub case_finish: &'static str,
    pub jewels: u32,
}

impl WatchInfo {
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            manufacturer: model.into(),
            case_type: CASE_TYPE,
            bezel: BEZEL,
            dial: DIAL,
            case_finish: CASE_FINISH,
            jewels: JEWELS,
        }
    }
}

/// Renders `Watch Details: {Manufacturer}, {CaseType}, {Bezel}, {Dial}, {CaseFinish}, {Jewels}`.
/// The manufacturer is written as-is, without escaping.
impl fmt::Display for WatchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Watch Details: {}, {}, {}, {}, {}, {}",
            self.manufacturer, self.case_type, self.bezel, self.dial, self.case_finish, self.jewels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fields() {
        let info = WatchInfo::for_model("abc");
        assert_eq!(info.manufacturer, "abc");
        assert_eq!(info.case_type, "Solid");
        assert_eq!(info.bezel, "Titanium");
        assert_eq!(info.dial, "Roman");
        assert_eq!(info.case_finish, "Silver");
        assert_eq!(info.jewels, 15);
    }

    #[test]
    fn test_display() {
        let info = WatchInfo::for_model("abc");
        assert_eq!(
            info.to_string(),
            "Watch Details: abc, Solid, Titanium, Roman, Silver, 15"
        );
    }

    #[test]
    fn test_display_does_not_escape() {
        let info = WatchInfo::for_model("{a}, b");
        assert_eq!(
            info.to_string(),
            "Watch Details: {a}, b, Solid, Titanium, Roman, Silver, 15"
        );
    }
}
