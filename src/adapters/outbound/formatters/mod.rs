/// Formatter adapters turning a resolved graph into text
mod dot_formatter;
mod tree_formatter;

pub use dot_formatter::DotFormatter;
pub use tree_formatter::TreeFormatter;
