// Status display contract and the reporter that writes through it.
// Every outcome of a sync, good or bad, ends up as exactly one line on
// the host status display.

use chrono::Local;

/// A single-line status display owned by the host. The display can be
/// frozen (further writes ignored until unfrozen), which the reporter
/// has to undo before its line can show up.
pub trait StatusSink {
    fn is_frozen(&self) -> bool;
    fn unfreeze(&mut self);
    fn set_text(&mut self, text: &str);
}

/// Write `message` to the display, stamped with the local time. Unfreezes
/// a frozen display first so the new text is visible.
pub fn report(sink: &mut dyn StatusSink, message: &str) {
    if sink.is_frozen() {
        sink.unfreeze();
    }
    let line = format!(
        "[{}][botvs] - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        message
    );
    sink.set_text(&line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[derive(Default)]
    struct MemorySink {
        frozen: bool,
        lines: Vec<String>,
        unfroze: usize,
    }

    impl StatusSink for MemorySink {
        fn is_frozen(&self) -> bool {
            self.frozen
        }
        fn unfreeze(&mut self) {
            self.frozen = false;
            self.unfroze += 1;
        }
        fn set_text(&mut self, text: &str) {
            if !self.frozen {
                self.lines.push(text.to_string());
            }
        }
    }

    #[test]
    fn line_is_timestamped_and_tagged() {
        let mut sink = MemorySink::default();
        report(&mut sink, "upload successfully!");
        assert_eq!(sink.lines.len(), 1);
        let shape =
            Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]\[botvs\] - upload successfully!$")
                .unwrap();
        assert!(shape.is_match(&sink.lines[0]), "got {:?}", sink.lines[0]);
    }

    #[test]
    fn frozen_display_is_unfrozen_before_writing() {
        let mut sink = MemorySink {
            frozen: true,
            ..Default::default()
        };
        report(&mut sink, "hello");
        assert_eq!(sink.unfroze, 1);
        assert_eq!(sink.lines.len(), 1);
    }

    #[test]
    fn thawed_display_is_left_alone() {
        let mut sink = MemorySink::default();
        report(&mut sink, "hello");
        assert_eq!(sink.unfroze, 0);
    }
}
