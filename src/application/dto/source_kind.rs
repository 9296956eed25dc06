/// Where dependency metadata is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// The PyPI JSON API (or a compatible index)
    #[default]
    PyPi,
    /// `pip show` against a local Python environment
    Installed,
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pypi" => Ok(SourceKind::PyPi),
            "installed" => Ok(SourceKind::Installed),
            _ => Err(format!(
                "Invalid source: {}. Please specify 'pypi' or 'installed'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::PyPi => write!(f, "pypi"),
            SourceKind::Installed => write!(f, "installed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_source_kind_from_str() {
        assert_eq!(SourceKind::from_str("pypi").unwrap(), SourceKind::PyPi);
        assert_eq!(SourceKind::from_str("PyPI").unwrap(), SourceKind::PyPi);
        assert_eq!(
            SourceKind::from_str("installed").unwrap(),
            SourceKind::Installed
        );
    }

    #[test]
    fn test_source_kind_from_str_invalid() {
        let err = SourceKind::from_str("conda").unwrap_err();
        assert!(err.contains("Invalid source: conda"));
    }

    #[test]
    fn test_source_kind_default_and_display() {
        assert_eq!(SourceKind::default(), SourceKind::PyPi);
        assert_eq!(SourceKind::Installed.to_string(), "installed");
    }
}
