use super::PackageName;

/// What went wrong for one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The metadata source does not know the package
    PackageNotFound,
    /// The lookup failed for another reason (network, subprocess, parsing)
    LookupFailed,
    /// A declared or cached dependency name is not a valid package name
    InvalidDependencyName,
    /// The package size could not be determined; the node is drawn unlabeled
    SizeUnavailable,
}

/// A non-fatal problem recorded while resolving one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionWarning {
    package: PackageName,
    kind: WarningKind,
    details: String,
}

impl ResolutionWarning {
    pub fn new(package: PackageName, kind: WarningKind, details: impl Into<String>) -> Self {
        Self {
            package,
            kind,
            details: details.into(),
        }
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    pub fn kind(&self) -> WarningKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl std::fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            WarningKind::PackageNotFound => write!(
                f,
                "Package '{}' was not found; it is shown without dependencies",
                self.package
            ),
            WarningKind::LookupFailed => write!(
                f,
                "Could not look up dependencies of '{}'; it is shown without dependencies",
                self.package
            ),
            WarningKind::InvalidDependencyName => write!(
                f,
                "Skipped an invalid dependency name declared by '{}'",
                self.package
            ),
            WarningKind::SizeUnavailable => {
                write!(f, "Could not determine the size of '{}'", self.package)
            }
        }?;
        if !self.details.is_empty() {
            write!(f, " ({})", self.details.lines().next().unwrap_or_default())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_accessors() {
        let warning = ResolutionWarning::new(
            PackageName::new("ghost").unwrap(),
            WarningKind::PackageNotFound,
            "404",
        );
        assert_eq!(warning.package().as_str(), "ghost");
        assert_eq!(warning.kind(), WarningKind::PackageNotFound);
        assert_eq!(warning.details(), "404");
    }

    #[test]
    fn test_warning_display_uses_first_detail_line() {
        let warning = ResolutionWarning::new(
            PackageName::new("flaky").unwrap(),
            WarningKind::LookupFailed,
            "connection reset\n\n💡 Hint: retry later",
        );
        let display = warning.to_string();
        assert!(display.contains("Could not look up dependencies of 'flaky'"));
        assert!(display.ends_with("(connection reset)"));
    }

    #[test]
    fn test_warning_display_without_details() {
        let warning = ResolutionWarning::new(
            PackageName::new("pkg").unwrap(),
            WarningKind::InvalidDependencyName,
            "",
        );
        assert_eq!(
            warning.to_string(),
            "Skipped an invalid dependency name declared by 'pkg'"
        );
    }

    #[test]
    fn test_size_warning_display() {
        let warning = ResolutionWarning::new(
            PackageName::new("numpy").unwrap(),
            WarningKind::SizeUnavailable,
            "no release files",
        );
        assert_eq!(
            warning.to_string(),
            "Could not determine the size of 'numpy' (no release files)"
        );
    }
}
