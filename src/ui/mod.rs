// Terminal presentation layer
// One renderer seam, three interchangeable output styles

mod board;
mod inline;
mod json;
mod labels;
mod renderer;

pub use board::BoardRenderer;
pub use inline::InlineRenderer;
pub use json::JsonRenderer;
pub use labels::LabelSet;
pub use renderer::{make_renderer, CountdownRenderer, RendererKind};

#[cfg(test)]
pub use renderer::MockCountdownRenderer;
