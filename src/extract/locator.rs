use crate::extract::lines::inline_text;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Education,
    Activity,
}

impl Section {
    pub fn spec(self) -> SectionSpec {
        match self {
            Section::About => SectionSpec {
                id: "about",
                label: "About",
                exact_heading: true,
                cues: &[],
            },
            Section::Experience => SectionSpec {
                id: "experience",
                label: "Experience",
                exact_heading: false,
                cues: MONTH_CUES,
            },
            Section::Education => SectionSpec {
                id: "education",
                label: "Education",
                exact_heading: false,
                cues: &[],
            },
            Section::Activity => SectionSpec {
                id: "activity",
                label: "Activity",
                exact_heading: false,
                cues: &[],
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

/// How to find one labeled region: a stable element id, a heading label,
/// and content cue tokens for the last-resort full-text scan.
pub struct SectionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub exact_heading: bool,
    pub cues: &'static [&'static str],
}

const MONTH_CUES: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

type Strategy = for<'a> fn(&'a Html, &SectionSpec) -> Option<ElementRef<'a>>;

/// Ordered, independent locator strategies; first hit wins. New strategies
/// are appended here without touching the existing ones.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("id", by_id),
    ("heading", by_heading),
    ("cue-scan", by_cue_scan),
];

/// Locate the content container for a section, together with the name of
/// the strategy that found it. Returns None when the document simply does
/// not carry the section.
pub fn find_section(doc: &Html, section: Section) -> Option<(ElementRef<'_>, &'static str)> {
    let spec = section.spec();
    STRATEGIES
        .iter()
        .find_map(|(name, locate)| locate(doc, &spec).map(|el| (el, *name)))
}

fn by_id<'a>(doc: &'a Html, spec: &SectionSpec) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!("section#{}", spec.id)).unwrap();
    doc.select(&selector).next()
}

fn by_heading<'a>(doc: &'a Html, spec: &SectionSpec) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("h2, span").unwrap();
    for el in doc.select(&selector) {
        let text = inline_text(el);
        let hit = if spec.exact_heading {
            text == spec.label
        } else {
            text.contains(spec.label)
        };
        if !hit {
            continue;
        }
        if let Some(section) = enclosing_section(el) {
            return Some(section);
        }
    }
    None
}

fn by_cue_scan<'a>(doc: &'a Html, spec: &SectionSpec) -> Option<ElementRef<'a>> {
    if spec.cues.is_empty() {
        return None;
    }
    let selector = Selector::parse("section, div").unwrap();
    doc.select(&selector).find(|el| {
        let text: String = el.text().collect();
        text.contains(spec.label) && spec.cues.iter().any(|cue| text.contains(cue))
    })
}

fn enclosing_section(el: ElementRef) -> Option<ElementRef> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "section")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_section_by_id() {
        let doc = Html::parse_document(
            r#"<html><body><section id="about"><span>About</span><span>Text</span></section></body></html>"#,
        );
        let (_, strategy) = find_section(&doc, Section::About).unwrap();
        assert_eq!(strategy, "id");
    }

    #[test]
    fn finds_section_by_heading_and_ascends() {
        let doc = Html::parse_document(
            r#"<html><body><section class="card"><div><h2>Education</h2></div><ul><li>Example University</li></ul></section></body></html>"#,
        );
        let (el, strategy) = find_section(&doc, Section::Education).unwrap();
        assert_eq!(strategy, "heading");
        assert_eq!(el.value().name(), "section");
    }

    #[test]
    fn about_heading_must_match_exactly() {
        let doc = Html::parse_document(
            r#"<html><body><section><h2>About the company</h2></section></body></html>"#,
        );
        assert!(find_section(&doc, Section::About).is_none());
    }

    #[test]
    fn experience_falls_back_to_cue_scan() {
        let doc = Html::parse_document(
            r#"<html><body><div class="x"><div>Experience</div><div>Jan 2020 - Present</div></div></body></html>"#,
        );
        let (_, strategy) = find_section(&doc, Section::Experience).unwrap();
        assert_eq!(strategy, "cue-scan");
    }

    #[test]
    fn missing_section_is_none() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(find_section(&doc, Section::Activity).is_none());
    }
}
