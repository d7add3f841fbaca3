// Heuristic extraction of structured records from saved profile markup.

pub mod dates;
pub mod diag;
pub mod education;
pub mod experience;
pub mod lines;
pub mod locator;
pub mod profile;

pub use dates::{DateRecognizer, DateSpan};
pub use diag::{CollectSink, DiagnosticSink, ParseEvent, SkipReason, TracingSink};
pub use locator::{find_section, Section};
pub use profile::ProfileParser;
