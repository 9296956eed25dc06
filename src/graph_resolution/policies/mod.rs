mod figure_size_policy;
mod requirement_policy;
mod size_color_policy;

pub use figure_size_policy::FigureSizePolicy;
pub use requirement_policy::RequirementPolicy;
pub use size_color_policy::SizeColorPolicy;
