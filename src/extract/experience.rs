use crate::config::options::ExperienceOptions;
use crate::domain::model::Role;
use crate::extract::dates::DateRecognizer;
use crate::extract::diag::{DiagnosticSink, ParseEvent, SkipReason};
use crate::extract::lines::{element_text, inline_text, normalise, split_lines};
use crate::extract::locator::Section;
use scraper::{ElementRef, Selector};

const EMPLOYMENT_TYPES: &[&str] = &[
    "full-time",
    "part-time",
    "contract",
    "freelance",
    "internship",
];

/// Parse the experience section into roles. Entries holding a nested
/// sub-component list are grouped employers: the employer name is resolved
/// once and passed down as the default company for every nested block.
pub fn parse_experience(
    section: ElementRef,
    dates: &DateRecognizer,
    opts: &ExperienceOptions,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Role> {
    let pvs_list = Selector::parse(r#"ul[class*="pvs-list"]"#).unwrap();
    let any_list = Selector::parse("ul").unwrap();
    let sub_components = Selector::parse(r#"div[class*="pvs-entity__sub-components"]"#).unwrap();

    let Some(list) = section
        .select(&pvs_list)
        .next()
        .or_else(|| section.select(&any_list).next())
    else {
        sink.event(ParseEvent::ListMissing {
            section: Section::Experience,
        });
        return Vec::new();
    };

    let parser = RoleBlockParser::new(dates, opts);
    let mut roles = Vec::new();

    for li in direct_list_items(list) {
        let text = element_text(li);
        if text.is_empty() {
            continue;
        }
        if !split_lines(&text).iter().any(|l| dates.is_date_line(l)) {
            sink.event(ParseEvent::BlockSkipped {
                section: Section::Experience,
                reason: SkipReason::NoDate,
            });
            continue;
        }

        let grouped = li.select(&sub_components).next().and_then(|div| {
            let sub_list = div.select(&any_list).next()?;
            let items = direct_list_items(sub_list);
            if items.is_empty() {
                None
            } else {
                Some((div, items))
            }
        });

        match grouped {
            Some((sub_div, items)) => {
                let company = company_from_link(li, dates)
                    .or_else(|| company_before_total_duration(li, sub_div, dates));
                let before = roles.len();
                for role_li in items {
                    let lines = split_lines(&element_text(role_li));
                    if let Some(role) = parser.parse(&lines, company.as_deref(), sink) {
                        roles.push(role);
                    }
                }
                sink.event(ParseEvent::GroupedEmployer {
                    company,
                    roles: roles.len() - before,
                });
            }
            None => {
                let lines = split_lines(&text);
                if let Some(role) = parser.parse(&lines, None, sink) {
                    roles.push(role);
                }
            }
        }
    }

    roles
}

fn direct_list_items(list: ElementRef) -> Vec<ElementRef> {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
        .collect()
}

/// Employer name from the company link, first trying the visible
/// (aria-hidden) span to avoid the duplicated accessibility copy.
fn company_from_link(li: ElementRef, dates: &DateRecognizer) -> Option<String> {
    let company_link = Selector::parse(r#"a[href*="/company/"]"#).unwrap();
    let visible_span = Selector::parse(r#"span[aria-hidden="true"]"#).unwrap();
    let any_span = Selector::parse("span").unwrap();

    let link = li.select(&company_link).next()?;
    let span = link
        .select(&visible_span)
        .next()
        .or_else(|| link.select(&any_span).next())?;
    let text = inline_text(span);
    if text.is_empty() || dates.is_date_line(&text) {
        None
    } else {
        Some(text)
    }
}

/// Fallback employer heuristic: in the entry text before the sub-component
/// list, the line preceding a total-duration line ("9 yrs 3 mos") is the
/// company name.
fn company_before_total_duration(
    li: ElementRef,
    sub_div: ElementRef,
    dates: &DateRecognizer,
) -> Option<String> {
    let mut parts = Vec::new();
    for child in li.children() {
        if child.id() == sub_div.id() {
            break;
        }
        if let Some(el) = ElementRef::wrap(child) {
            parts.push(element_text(el));
        }
    }
    let lines = split_lines(&parts.join("\n"));
    let idx = lines.iter().position(|l| dates.is_total_duration(l))?;
    if idx > 0 {
        Some(lines[idx - 1].clone())
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    SeekingTitle,
    SeekingDate,
    SeekingLocation,
    CollectingDescription,
}

/// Finite-state classifier over one block's line sequence. A block without
/// a date-bearing line is not a role and yields None.
pub struct RoleBlockParser<'a> {
    dates: &'a DateRecognizer,
    opts: &'a ExperienceOptions,
}

impl<'a> RoleBlockParser<'a> {
    pub fn new(dates: &'a DateRecognizer, opts: &'a ExperienceOptions) -> Self {
        Self { dates, opts }
    }

    pub fn parse(
        &self,
        lines: &[String],
        default_company: Option<&str>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Role> {
        if lines.is_empty() {
            sink.event(ParseEvent::BlockSkipped {
                section: Section::Experience,
                reason: SkipReason::Empty,
            });
            return None;
        }

        let Some(date_idx) = lines.iter().position(|l| self.dates.is_date_line(l)) else {
            sink.event(ParseEvent::BlockSkipped {
                section: Section::Experience,
                reason: SkipReason::NoDate,
            });
            return None;
        };
        let span = self.dates.span(&lines[date_idx]);

        let mut state = BlockState::SeekingTitle;
        let mut title: Option<String> = None;
        let mut company: Option<String> = default_company.map(str::to_string);
        // Once the block itself names a company, the value is final; a
        // grouped-employer default stays overridable by a separator line.
        let mut company_from_block = false;
        let mut location: Option<String> = None;
        let mut description: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = &lines[i];
            match state {
                BlockState::SeekingTitle => {
                    if i >= date_idx {
                        break;
                    }
                    if self.is_title_candidate(line, default_company) {
                        title = Some(line.clone());
                        state = BlockState::SeekingDate;
                    }
                    i += 1;
                }
                BlockState::SeekingDate => {
                    if i == date_idx {
                        state = BlockState::SeekingLocation;
                    } else if !company_from_block && !self.is_employment_type(line) {
                        if let Some(c) = separator_company(line) {
                            company = Some(c);
                            company_from_block = true;
                        } else if company.is_none() && title.as_deref() != Some(line.as_str()) {
                            company = Some(line.clone());
                            company_from_block = true;
                        }
                    }
                    i += 1;
                }
                BlockState::SeekingLocation => {
                    if i > date_idx + self.opts.location_lookahead {
                        // Window exhausted: the description starts right
                        // after the date line instead.
                        state = BlockState::CollectingDescription;
                        i = date_idx + 1;
                        continue;
                    }
                    if let Some(loc) = self.location_from_line(line) {
                        location = Some(loc);
                        state = BlockState::CollectingDescription;
                    }
                    i += 1;
                }
                BlockState::CollectingDescription => {
                    if self.keep_description_line(
                        line,
                        title.as_deref(),
                        company.as_deref(),
                        location.as_deref(),
                    ) {
                        description.push(line);
                    }
                    i += 1;
                }
            }
        }

        // The lines ended while still scanning for a location; they belong
        // to the description.
        if state == BlockState::SeekingLocation {
            for line in &lines[date_idx + 1..] {
                if self.keep_description_line(
                    line,
                    title.as_deref(),
                    company.as_deref(),
                    location.as_deref(),
                ) {
                    description.push(line);
                }
            }
        }

        let Some(title) = title else {
            sink.event(ParseEvent::BlockSkipped {
                section: Section::Experience,
                reason: SkipReason::NoTitle,
            });
            return None;
        };

        sink.event(ParseEvent::RoleParsed {
            title: title.clone(),
        });

        Some(Role {
            company,
            title,
            start: span.as_ref().map(|s| s.start.clone()),
            end: span.as_ref().map(|s| s.end.clone()),
            time_in_role: span.and_then(|s| s.duration),
            location,
            description: if description.is_empty() {
                None
            } else {
                Some(description.join("\n"))
            },
        })
    }

    fn is_employment_type(&self, line: &str) -> bool {
        EMPLOYMENT_TYPES.contains(&line.to_lowercase().as_str())
    }

    fn is_title_candidate(&self, line: &str, default_company: Option<&str>) -> bool {
        !line.is_empty()
            && Some(line) != default_company
            && !self.is_employment_type(line)
            && !line.ends_with(" logo")
            && !line.to_lowercase().contains("skills")
    }

    fn location_from_line(&self, line: &str) -> Option<String> {
        let hit = line.contains(',')
            || self
                .opts
                .location_cues
                .iter()
                .any(|cue| line.contains(cue.as_str()));
        if hit {
            Some(normalise(line.split('·').next().unwrap_or(line)))
        } else {
            None
        }
    }

    fn keep_description_line(
        &self,
        line: &str,
        title: Option<&str>,
        company: Option<&str>,
        location: Option<&str>,
    ) -> bool {
        !self.dates.is_date_line(line)
            && !line.to_lowercase().contains("helped me get this job")
            && !line.starts_with("Show all")
            && !line.ends_with("skills")
            && !line.contains("…see more")
            && Some(line) != title
            && Some(line) != company
            && Some(line) != location
            && !self.is_employment_type(line)
    }
}

/// A line naming the company with a separator token, e.g.
/// "Acme Corp · Full-time" or "Engineer at Acme".
fn separator_company(line: &str) -> Option<String> {
    if line.contains('·') || line.contains(" at ") {
        let company = line.split('·').next().unwrap_or(line).replace(" at ", " ");
        let company = normalise(&company);
        if company.is_empty() {
            None
        } else {
            Some(company)
        }
    } else {
        None
    }
}
