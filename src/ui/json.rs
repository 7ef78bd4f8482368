// JSON renderer
// One frame per line, for piping into other tools

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::renderer::CountdownRenderer;
use crate::models::time_parts::TimeParts;

#[derive(Serialize)]
struct Frame<'a> {
    #[serde(flatten)]
    parts: &'a TimeParts,
    reached: bool,
}

/// Emits each tick as a single JSON object on its own line. Unlike the
/// interactive renderers this one never rewrites earlier output, so the
/// stream stays valid line-delimited JSON.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CountdownRenderer for JsonRenderer<W> {
    fn render(&mut self, parts: &TimeParts, reached: bool) -> Result<()> {
        let frame = Frame { parts, reached };
        serde_json::to_writer(&mut self.out, &frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
