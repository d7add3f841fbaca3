use crate::config::options::ParserOptions;
use crate::domain::model::Profile;
use crate::extract::dates::DateRecognizer;
use crate::extract::diag::{DiagnosticSink, ParseEvent};
use crate::extract::education::EducationParser;
use crate::extract::experience::parse_experience;
use crate::extract::lines::{element_text, inline_text, split_lines};
use crate::extract::locator::{find_section, Section};
use scraper::{ElementRef, Html, Selector};

/// Parses one saved profile page into a [`Profile`]. Absence of any
/// section or field is a valid, empty outcome, never an error.
pub struct ProfileParser {
    opts: ParserOptions,
    dates: DateRecognizer,
}

impl ProfileParser {
    pub fn new(opts: ParserOptions) -> Self {
        Self {
            opts,
            dates: DateRecognizer::new(),
        }
    }

    pub fn parse(&self, html: &str, sink: &mut dyn DiagnosticSink) -> Profile {
        let doc = Html::parse_document(html);

        let (name, headline) = parse_name_headline(&doc);
        let about = self.section(&doc, Section::About, sink).and_then(parse_about);
        let experience = self
            .section(&doc, Section::Experience, sink)
            .map(|el| parse_experience(el, &self.dates, &self.opts.experience, sink))
            .unwrap_or_default();
        let education = self
            .section(&doc, Section::Education, sink)
            .map(|el| EducationParser::new(&self.dates, &self.opts.education).parse(el, sink))
            .unwrap_or_default();
        let activity = self.section(&doc, Section::Activity, sink).and_then(parse_activity);

        Profile {
            name,
            headline,
            about,
            experience,
            education,
            activity,
            ..Default::default()
        }
    }

    fn section<'a>(
        &self,
        doc: &'a Html,
        section: Section,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ElementRef<'a>> {
        match find_section(doc, section) {
            Some((el, strategy)) => {
                sink.event(ParseEvent::SectionFound { section, strategy });
                Some(el)
            }
            None => {
                sink.event(ParseEvent::SectionMissing { section });
                None
            }
        }
    }
}

fn parse_name_headline(doc: &Html) -> (Option<String>, Option<String>) {
    let h1 = Selector::parse("h1").unwrap();
    let name = doc
        .select(&h1)
        .next()
        .map(inline_text)
        .filter(|t| !t.is_empty());

    let headline_sel = Selector::parse("div.text-body-medium.break-words").unwrap();
    let headline = doc
        .select(&headline_sel)
        .next()
        .map(inline_text)
        .filter(|t| !t.is_empty());

    (name, headline)
}

/// Collect the section's span texts, skipping the heading itself and
/// duplicated accessibility copy.
fn parse_about(section: ElementRef) -> Option<String> {
    let span = Selector::parse("span").unwrap();
    let mut seen = std::collections::HashSet::new();
    let mut texts = Vec::new();
    for el in section.select(&span) {
        let text = inline_text(el);
        if text.is_empty() || text == Section::About.label() {
            continue;
        }
        if seen.insert(text.clone()) {
            texts.push(text);
        }
    }
    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n"))
    }
}

fn parse_activity(section: ElementRef) -> Option<String> {
    let lines = split_lines(&element_text(section));
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::diag::CollectSink;

    const SAMPLE: &str = r#"<html><body>
      <h1>Jane Doe</h1>
      <div class="text-body-medium break-words">Engineering Lead</div>
      <section id="about">
        <div><span>About</span></div>
        <div><span>Builds data tooling.</span><span>Builds data tooling.</span></div>
      </section>
      <section id="experience">
        <ul class="pvs-list">
          <li><span>Software Engineer</span><span>Acme Corp · Full-time</span><span>Jan 2020 - Present · 4 yrs</span><span>London, UK</span><span>Built things</span></li>
        </ul>
      </section>
      <section id="education">
        <ul><li><span>Example University</span><span>BSc Computer Science</span><span>2014 - 2018</span></li></ul>
      </section>
    </body></html>"#;

    #[test]
    fn parses_a_full_document() {
        let parser = ProfileParser::new(ParserOptions::default());
        let mut sink = CollectSink::default();
        let profile = parser.parse(SAMPLE, &mut sink);

        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.headline.as_deref(), Some("Engineering Lead"));
        assert_eq!(profile.about.as_deref(), Some("Builds data tooling."));

        assert_eq!(profile.experience.len(), 1);
        let role = &profile.experience[0];
        assert_eq!(role.title, "Software Engineer");
        assert_eq!(role.company.as_deref(), Some("Acme Corp"));
        assert_eq!(role.start.as_deref(), Some("Jan 2020"));
        assert_eq!(role.end.as_deref(), Some("Present"));
        assert_eq!(role.location.as_deref(), Some("London, UK"));
        assert_eq!(role.description.as_deref(), Some("Built things"));

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].institution, "Example University");

        assert_eq!(profile.activity, None);
        assert!(sink.events.contains(&ParseEvent::SectionMissing {
            section: Section::Activity
        }));
    }

    #[test]
    fn empty_document_yields_empty_profile() {
        let parser = ProfileParser::new(ParserOptions::default());
        let mut sink = CollectSink::default();
        let profile = parser.parse("<html><body><p>not a profile</p></body></html>", &mut sink);

        assert_eq!(profile, Profile::default());
        let missing = sink
            .events
            .iter()
            .filter(|e| matches!(e, ParseEvent::SectionMissing { .. }))
            .count();
        assert_eq!(missing, 4);
    }

    #[test]
    fn activity_section_joins_lines() {
        let html = r#"<html><body><section id="activity">
          <span>Activity</span><span>1,234 followers</span><span>Jane reposted this</span>
        </section></body></html>"#;
        let parser = ProfileParser::new(ParserOptions::default());
        let mut sink = CollectSink::default();
        let profile = parser.parse(html, &mut sink);
        assert_eq!(
            profile.activity.as_deref(),
            Some("Activity 1,234 followers Jane reposted this")
        );
    }
}
