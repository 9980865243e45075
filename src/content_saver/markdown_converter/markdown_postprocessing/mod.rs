//! Text transforms applied to the assembled Markdown.
//!
//! Each stage is a pure `&str -> String` function. Stages run in a fixed
//! order (see [`processor`]): brace escaping must see the text before block
//! wrapping adds `$$` delimiters, and the renderer workarounds expect both to
//! have run.

mod latex_blocks;
mod latex_escaping;
mod processor;
mod renderer_workarounds;
mod whitespace_normalization;


pub use latex_blocks::wrap_latex_environments;
pub use latex_escaping::escape_latex_braces;
pub use processor::postprocess_markdown;
pub use renderer_workarounds::{fold_trailing_words_into_math, replace_operatorname};
pub use whitespace_normalization::normalize_non_breaking_spaces;
