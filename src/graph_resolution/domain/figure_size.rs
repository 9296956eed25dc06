use crate::shared::error::GraphError;
use crate::shared::Result;

/// Canvas dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl FigureSize {
    /// Canvas used for tiny graphs
    pub const DEFAULT: FigureSize = FigureSize {
        width: 8.0,
        height: 6.0,
    };

    /// # Errors
    /// Returns a validation error unless both dimensions are finite and positive
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GraphError::Validation {
                message: format!(
                    "Figure size must be two positive numbers, got {} x {}",
                    width, height
                ),
            }
            .into());
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl std::fmt::Display for FigureSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x{:.2}in", self.width, self.height)
    }
}
