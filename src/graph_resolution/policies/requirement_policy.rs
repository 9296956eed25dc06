use crate::graph_resolution::domain::PackageName;
use std::collections::HashSet;

/// RequirementPolicy decides which declared requirements count as dependencies
///
/// Package metadata lists requirements as PEP 508 strings such as
/// `urllib3<3,>=1.21.1` or `PySocks!=1.5.7; extra == "socks"`. Only the
/// distribution name is kept; version specifiers, extras and URLs are dropped.
///
/// Rules:
/// 1. Requirements guarded by an `extra` marker are optional and skipped
/// 2. Other environment markers (`python_version`, `sys_platform`, ...) are kept
/// 3. Duplicates are removed, keeping the first occurrence
pub struct RequirementPolicy;

impl RequirementPolicy {
    /// Extracts the distribution name from one requirement string
    ///
    /// # Returns
    /// `None` for blank lines, comments, extra-only requirements, and strings
    /// that do not start with a valid name
    pub fn dependency_name(requirement: &str) -> Option<PackageName> {
        let requirement = requirement.trim();
        if requirement.is_empty() || requirement.starts_with('#') {
            return None;
        }

        let (clause, marker) = match requirement.split_once(';') {
            Some((clause, marker)) => (clause, Some(marker)),
            None => (requirement, None),
        };

        if marker.is_some_and(Self::is_extra_marker) {
            return None;
        }

        let raw_name: String = clause
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .collect();

        PackageName::new(raw_name).ok()
    }

    /// Applies [`dependency_name`](Self::dependency_name) to a whole list
    pub fn direct_dependencies<S: AsRef<str>>(requirements: &[S]) -> Vec<PackageName> {
        let mut seen = HashSet::new();
        requirements
            .iter()
            .filter_map(|requirement| Self::dependency_name(requirement.as_ref()))
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// True when the marker tests the `extra` variable
    ///
    /// Quoted strings are blanked out first: outside quotes every identifier is
    /// a marker variable, so `platform_release == 'extra'` does not count.
    fn is_extra_marker(marker: &str) -> bool {
        let mut unquoted = String::with_capacity(marker.len());
        let mut open_quote = None;
        for c in marker.chars() {
            match open_quote {
                Some(quote) if c == quote => open_quote = None,
                Some(_) => {}
                None if c == '"' || c == '\'' => {
                    open_quote = Some(c);
                    unquoted.push(' ');
                }
                None => unquoted.push(c),
            }
        }

        unquoted
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|token| token == "extra")
    }
}
