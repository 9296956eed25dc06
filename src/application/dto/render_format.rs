use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::Path;

/// Image format of the rendered graph, chosen by the output file extension
///
/// Every format except `Dot` needs the Graphviz `dot` executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Png,
    Svg,
    Pdf,
    Jpeg,
    Gif,
    /// Graphviz source text, written without running Graphviz
    Dot,
}

impl RenderFormat {
    /// Determines the format from the extension of `path`
    ///
    /// # Errors
    /// Returns `GraphError::InvalidOutputPath` if the path has no extension
    /// or the extension is not supported.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| GraphError::InvalidOutputPath {
                path: path.to_path_buf(),
                reason: "the file name has no extension".to_string(),
            })?;

        extension.parse().map_err(|reason| {
            GraphError::InvalidOutputPath {
                path: path.to_path_buf(),
                reason,
            }
            .into()
        })
    }

    /// Value passed to `dot -T`, or `None` for DOT source output
    pub fn graphviz_type(self) -> Option<&'static str> {
        match self {
            RenderFormat::Png => Some("png"),
            RenderFormat::Svg => Some("svg"),
            RenderFormat::Pdf => Some("pdf"),
            RenderFormat::Jpeg => Some("jpg"),
            RenderFormat::Gif => Some("gif"),
            RenderFormat::Dot => None,
        }
    }
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(RenderFormat::Png),
            "svg" => Ok(RenderFormat::Svg),
            "pdf" => Ok(RenderFormat::Pdf),
            "jpg" | "jpeg" => Ok(RenderFormat::Jpeg),
            "gif" => Ok(RenderFormat::Gif),
            "dot" | "gv" => Ok(RenderFormat::Dot),
            _ => Err(format!("unsupported image format '{}'", s)),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Png => write!(f, "png"),
            RenderFormat::Svg => write!(f, "svg"),
            RenderFormat::Pdf => write!(f, "pdf"),
            RenderFormat::Jpeg => write!(f, "jpeg"),
            RenderFormat::Gif => write!(f, "gif"),
            RenderFormat::Dot => write!(f, "dot"),
        }
    }
}
