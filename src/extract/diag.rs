use crate::extract::locator::Section;

/// Structured events emitted while a document is being parsed. The sink
/// is injected so the extraction logic has no global output side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    SectionMissing {
        section: Section,
    },
    SectionFound {
        section: Section,
        strategy: &'static str,
    },
    ListMissing {
        section: Section,
    },
    BlockSkipped {
        section: Section,
        reason: SkipReason,
    },
    RoleParsed {
        title: String,
    },
    GroupedEmployer {
        company: Option<String>,
        roles: usize,
    },
    EducationParsed {
        institution: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    NoDate,
    NoTitle,
    IgnoredFirstLine,
    NoInstitutionKeyword,
}

pub trait DiagnosticSink {
    fn event(&mut self, event: ParseEvent);
}

/// Production sink: forwards events to the tracing subscriber.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn event(&mut self, event: ParseEvent) {
        tracing::debug!(?event, "parse event");
    }
}

/// Test sink: records events for assertions.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub events: Vec<ParseEvent>,
}

impl DiagnosticSink for CollectSink {
    fn event(&mut self, event: ParseEvent) {
        self.events.push(event);
    }
}
