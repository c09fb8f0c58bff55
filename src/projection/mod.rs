pub mod projector;
pub mod html;
pub mod text;

pub use projector::{project, ProjectedRow, Projection};
pub use html::{html_escape, render_html_table};
pub use text::render_text_table;
