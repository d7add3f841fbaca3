use regex::Regex;

pub const MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

/// A recognized (start, end[, duration]) triple from a single line,
/// e.g. "Jan 2020 - Present · 4 yrs". Dates stay free-form text.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
    pub duration: Option<String>,
}

/// Two-tier matcher for date spans. The primary pattern covers
/// `<Month Year|Year> <sep> <Present|Month Year|Year>` with an optional
/// duration suffix; the fallback covers bare `Year-Year` ranges.
pub struct DateRecognizer {
    range: Regex,
    year_range: Regex,
    total_duration: Regex,
}

impl DateRecognizer {
    pub fn new() -> Self {
        let range = Regex::new(&format!(
            r"(?i)(?P<start>(?:{m}) \d{{4}}|\d{{4}})\s*(?:[–-]|\s+to\s+)\s*(?P<end>Present|(?:{m}) \d{{4}}|\d{{4}})(?:\s*[·•\-]\s*(?P<duration>[\w\s]+))?",
            m = MONTHS
        ))
        .unwrap();
        let year_range = Regex::new(r"(?P<start>\d{4})\s*[-–]\s*(?P<end>\d{4})").unwrap();
        let total_duration = Regex::new(r"\d+\s*yrs?(?:\s*\d+\s*mos?)?").unwrap();

        Self {
            range,
            year_range,
            total_duration,
        }
    }

    /// Extract a date span from a line, or None when the line has none.
    pub fn span(&self, line: &str) -> Option<DateSpan> {
        if let Some(caps) = self.range.captures(line) {
            return Some(DateSpan {
                start: caps["start"].to_string(),
                end: caps["end"].to_string(),
                duration: caps
                    .name("duration")
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|d| !d.is_empty()),
            });
        }
        if let Some(caps) = self.year_range.captures(line) {
            return Some(DateSpan {
                start: caps["start"].to_string(),
                end: caps["end"].to_string(),
                duration: None,
            });
        }
        None
    }

    pub fn is_date_line(&self, line: &str) -> bool {
        self.range.is_match(line) || self.year_range.is_match(line)
    }

    /// A grouped-employer total like "9 yrs 3 mos"; the company name is
    /// the line preceding it.
    pub fn is_total_duration(&self, line: &str) -> bool {
        self.total_duration.is_match(line)
    }
}

impl Default for DateRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: &str) -> Option<DateSpan> {
        DateRecognizer::new().span(line)
    }

    #[test]
    fn month_year_to_present() {
        let s = span("Jan 2020 - Present").unwrap();
        assert_eq!(s.start, "Jan 2020");
        assert_eq!(s.end, "Present");
        assert_eq!(s.duration, None);
    }

    #[test]
    fn bare_year_range() {
        let s = span("2018 - 2022").unwrap();
        assert_eq!(s.start, "2018");
        assert_eq!(s.end, "2022");
        assert_eq!(s.duration, None);
    }

    #[test]
    fn no_dates() {
        assert_eq!(span("no dates here"), None);
        assert!(!DateRecognizer::new().is_date_line("no dates here"));
    }

    #[test]
    fn duration_suffix() {
        let s = span("Jan 2020 - Present · 4 yrs 2 mos").unwrap();
        assert_eq!(s.start, "Jan 2020");
        assert_eq!(s.end, "Present");
        assert_eq!(s.duration.as_deref(), Some("4 yrs 2 mos"));
    }

    #[test]
    fn to_separator_and_en_dash() {
        let s = span("Mar 2015 to Jun 2017").unwrap();
        assert_eq!(s.start, "Mar 2015");
        assert_eq!(s.end, "Jun 2017");

        let s = span("2014\u{2013}2018").unwrap();
        assert_eq!(s.start, "2014");
        assert_eq!(s.end, "2018");
    }

    #[test]
    fn month_year_to_month_year() {
        let s = span("Sep 2019 - Dec 2021 · 2 yrs 4 mos").unwrap();
        assert_eq!(s.start, "Sep 2019");
        assert_eq!(s.end, "Dec 2021");
        assert_eq!(s.duration.as_deref(), Some("2 yrs 4 mos"));
    }

    #[test]
    fn total_duration_line() {
        let rec = DateRecognizer::new();
        assert!(rec.is_total_duration("9 yrs 3 mos"));
        assert!(rec.is_total_duration("2 yrs"));
        assert!(!rec.is_total_duration("Acme Corp"));
    }
}
