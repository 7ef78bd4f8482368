// Renderer trait and construction

use anyhow::Result;
use chrono::{DateTime, Local};

use super::{BoardRenderer, InlineRenderer, JsonRenderer, LabelSet};
use crate::models::time_parts::TimeParts;

/// Presentation seam for the countdown: one call per tick with the fresh
/// breakdown and the target-reached flag. Implementations own their output
/// stream and decide how (and whether) to repaint.
#[cfg_attr(test, mockall::automock)]
pub trait CountdownRenderer {
    fn render(&mut self, parts: &TimeParts, reached: bool) -> Result<()>;
}

impl<R: CountdownRenderer + ?Sized> CountdownRenderer for Box<R> {
    fn render(&mut self, parts: &TimeParts, reached: bool) -> Result<()> {
        (**self).render(parts, reached)
    }
}

/// Built-in renderer variants selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// Full-screen bordered board, redrawn in place each tick.
    Board,
    /// Single line rewritten in place, `4y 0m 0d 00:00:00`.
    Inline,
    /// One JSON object per line, for piping into other tools.
    Json,
}

impl RendererKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "board" => Some(Self::Board),
            "inline" => Some(Self::Inline),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Inline => "inline",
            Self::Json => "json",
        }
    }
}

/// Construct the configured renderer over stdout.
pub fn make_renderer(
    kind: RendererKind,
    labels: LabelSet,
    target: DateTime<Local>,
) -> Box<dyn CountdownRenderer> {
    match kind {
        RendererKind::Board => Box::new(BoardRenderer::new(std::io::stdout(), labels, target)),
        RendererKind::Inline => Box::new(InlineRenderer::new(std::io::stdout(), labels)),
        RendererKind::Json => Box::new(JsonRenderer::new(std::io::stdout())),
    }
}
