// Inline renderer
// Single status line rewritten in place

use std::io::Write;

use anyhow::Result;

use super::labels::LabelSet;
use super::renderer::CountdownRenderer;
use crate::models::time_parts::TimeParts;

const ERASE_LINE: &str = "\r\x1b[2K";

/// Compact one-line countdown, `4y 0m 0d 00:00:00`, rewritten over itself on
/// every tick. Suited to running inside an existing terminal session without
/// taking over the screen.
pub struct InlineRenderer<W: Write> {
    out: W,
    labels: LabelSet,
}

impl<W: Write> InlineRenderer<W> {
    pub fn new(out: W, labels: LabelSet) -> Self {
        Self { out, labels }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CountdownRenderer for InlineRenderer<W> {
    fn render(&mut self, parts: &TimeParts, reached: bool) -> Result<()> {
        if reached {
            writeln!(self.out, "{ERASE_LINE}{}", self.labels.reached_message)?;
        } else {
            write!(
                self.out,
                "{ERASE_LINE}{}y {}m {}d {:02}:{:02}:{:02}",
                parts.years, parts.months, parts.days, parts.hours, parts.minutes, parts.seconds
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}
