//! File-picker intake: typed selection events and the report sink they
//! feed. Free of DOM types so the whole module runs under host tests.

use gloo::console::log;

/// A read-only handle to one candidate file from a picker interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRef {
    name: String,
    size: u64,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// The signal produced when the user interacts with the file picker.
///
/// Carries zero or more candidate files in selection order. The picker is
/// rendered single-select, but events with any number of entries are
/// accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionEvent {
    files: Vec<FileRef>,
}

impl SelectionEvent {
    pub fn new(files: Vec<FileRef>) -> Self {
        Self { files }
    }

    /// The first selected file, if any.
    pub fn first(&self) -> Option<&FileRef> {
        self.files.first()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Where the intake handler reports the name of a selected file.
pub trait ReportSink {
    fn report(&self, name: &str);
}

impl<S: ReportSink + ?Sized> ReportSink for &S {
    fn report(&self, name: &str) {
        (**self).report(name);
    }
}

/// Reports through the browser console.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn report(&self, name: &str) {
        log!(format!("Selected file: {}", name));
    }
}

/// Responds to file-picker selections.
///
/// An event with no files is a no-op, not an error. When files are
/// present, the first one's name goes to the sink exactly once and the
/// rest are ignored. Holds no state between invocations.
pub struct FileIntake<S> {
    sink: S,
}

impl<S: ReportSink> FileIntake<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn handle(&self, event: &SelectionEvent) {
        if let Some(file) = event.first() {
            self.sink.report(file.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        reports: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                reports: RefCell::new(Vec::new()),
            }
        }

        fn reports(&self) -> Vec<String> {
            self.reports.borrow().clone()
        }
    }

    impl ReportSink for RecordingSink {
        fn report(&self, name: &str) {
            self.reports.borrow_mut().push(name.to_string());
        }
    }

    #[test]
    fn test_single_file_reports_its_name_once() {
        let sink = RecordingSink::new();
        let intake = FileIntake::new(&sink);

        intake.handle(&SelectionEvent::new(vec![FileRef::new("report.pdf", 1024)]));

        assert_eq!(sink.reports(), vec!["report.pdf"]);
    }

    #[test]
    fn test_empty_selection_emits_nothing() {
        let sink = RecordingSink::new();
        let intake = FileIntake::new(&sink);

        intake.handle(&SelectionEvent::default());

        assert!(sink.reports().is_empty());
    }

    #[test]
    fn test_first_file_wins() {
        let sink = RecordingSink::new();
        let intake = FileIntake::new(&sink);
        let event = SelectionEvent::new(vec![
            FileRef::new("a.txt", 3),
            FileRef::new("b.txt", 2),
        ]);

        intake.handle(&event);

        assert_eq!(sink.reports(), vec!["a.txt"]);
    }

    #[test]
    fn test_invocations_are_independent() {
        let sink = RecordingSink::new();
        let intake = FileIntake::new(&sink);

        intake.handle(&SelectionEvent::new(vec![FileRef::new("one.txt", 1)]));
        intake.handle(&SelectionEvent::default());
        intake.handle(&SelectionEvent::new(vec![FileRef::new("two.txt", 2)]));

        assert_eq!(sink.reports(), vec!["one.txt", "two.txt"]);
    }

    #[test]
    fn test_file_ref_exposes_name_and_size() {
        let file = FileRef::new("notes.md", 42);
        assert_eq!(file.name(), "notes.md");
        assert_eq!(file.size(), 42);

        let event = SelectionEvent::new(vec![file]);
        assert!(!event.is_empty());
        assert_eq!(event.first().map(FileRef::name), Some("notes.md"));
    }
}
