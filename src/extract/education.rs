use crate::config::options::EducationOptions;
use crate::domain::model::EducationEntry;
use crate::extract::dates::DateRecognizer;
use crate::extract::diag::{DiagnosticSink, ParseEvent, SkipReason};
use crate::extract::lines::{element_text, split_lines};
use crate::extract::locator::Section;
use regex::Regex;
use scraper::{ElementRef, Selector};

/// Parse the education section. The institution-keyword whitelist filters
/// out skill and certification list items that share the same markup.
pub struct EducationParser<'a> {
    dates: &'a DateRecognizer,
    opts: &'a EducationOptions,
    ignore: Regex,
}

impl<'a> EducationParser<'a> {
    pub fn new(dates: &'a DateRecognizer, opts: &'a EducationOptions) -> Self {
        let ignore =
            Regex::new(r"(?i)(course covers|skill|licenses|certifications|exam qualified|first time pass)")
                .unwrap();
        Self {
            dates,
            opts,
            ignore,
        }
    }

    pub fn parse(&self, section: ElementRef, sink: &mut dyn DiagnosticSink) -> Vec<EducationEntry> {
        let li_sel = Selector::parse("li").unwrap();
        let mut entries = Vec::new();

        for li in section.select(&li_sel) {
            let mut lines = split_lines(&element_text(li));
            if lines.is_empty() {
                continue;
            }
            if self.ignore.is_match(&lines[0]) {
                sink.event(ParseEvent::BlockSkipped {
                    section: Section::Education,
                    reason: SkipReason::IgnoredFirstLine,
                });
                continue;
            }

            let institution = lines[0].clone();
            let lowered = institution.to_lowercase();
            if !self
                .opts
                .institution_keywords
                .iter()
                .any(|kw| lowered.contains(kw.as_str()))
            {
                sink.event(ParseEvent::BlockSkipped {
                    section: Section::Education,
                    reason: SkipReason::NoInstitutionKeyword,
                });
                continue;
            }

            // Collapse an immediately repeated institution line (duplicated
            // accessibility copy in the source markup).
            while lines.len() > 1 && lines[1] == institution {
                lines.remove(1);
            }

            let course = lines[1..]
                .iter()
                .find(|l| !self.dates.is_date_line(l))
                .cloned();
            let span = lines.iter().find_map(|l| self.dates.span(l));

            sink.event(ParseEvent::EducationParsed {
                institution: institution.clone(),
            });
            entries.push(EducationEntry {
                institution,
                course,
                start: span.as_ref().map(|s| s.start.clone()),
                end: span.map(|s| s.end),
            });
        }

        entries
    }
}
