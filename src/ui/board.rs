// Board renderer
// Full-screen bordered grid, redrawn in place each tick

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local};

use super::labels::LabelSet;
use super::renderer::CountdownRenderer;
use crate::models::time_parts::TimeParts;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Draws the countdown as a bordered six-cell board with the value above its
/// unit label, plus a caption naming the target. Clears the terminal and
/// redraws from the top-left on every tick. Once the target is reached the
/// board keeps showing the (all-zero) grid and only the caption line changes.
pub struct BoardRenderer<W: Write> {
    out: W,
    labels: LabelSet,
    target: DateTime<Local>,
}

impl<W: Write> BoardRenderer<W> {
    pub fn new(out: W, labels: LabelSet, target: DateTime<Local>) -> Self {
        Self {
            out,
            labels,
            target,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_block(&self, parts: &TimeParts, reached: bool) -> String {
        let pairs = self.labels.unit_pairs(parts);

        // Column widths track the wider of label and value, plus padding.
        let widths: Vec<usize> = pairs
            .iter()
            .map(|(label, value)| label.chars().count().max(value.to_string().len()) + 2)
            .collect();

        let border = widths.iter().fold(String::from("+"), |mut line, width| {
            line.push_str(&"-".repeat(*width));
            line.push('+');
            line
        });

        let mut values = String::from("|");
        let mut names = String::from("|");
        for ((label, value), width) in pairs.iter().zip(widths.iter().copied()) {
            values.push_str(&format!("{:^width$}|", value));
            names.push_str(&format!("{:^width$}|", label));
        }

        let caption = if reached {
            self.labels.reached_message.clone()
        } else {
            self.labels.format_target(&self.target)
        };

        format!("{border}\n{values}\n{names}\n{border}\n{caption}\n")
    }
}

impl<W: Write> CountdownRenderer for BoardRenderer<W> {
    fn render(&mut self, parts: &TimeParts, reached: bool) -> Result<()> {
        write!(self.out, "{CLEAR_SCREEN}{}", self.format_block(parts, reached))?;
        self.out.flush()?;
        Ok(())
    }
}
