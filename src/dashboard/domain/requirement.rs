use super::{PackageName, Version};
use crate::shared::Result;

/// Requirement - a package requested on the command line, optionally
/// pinned to an exact version with `name==version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: PackageName,
    pub pin: Option<Version>,
}

impl Requirement {
    /// Parses a requirement string such as `requests` or `requests==2.32.3`.
    ///
    /// # Errors
    /// Returns an error when the extracted name or pinned version fails
    /// newtype validation.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if let Some((name, version)) = trimmed.split_once("==") {
            return Ok(Self {
                name: PackageName::new(base_name(name).to_string())?,
                pin: Some(Version::new(version.trim().to_string())?),
            });
        }
        Ok(Self {
            name: PackageName::new(base_name(trimmed).to_string())?,
            pin: None,
        })
    }

    /// The argument handed to pip: `name==version` for pinned requirements,
    /// the bare name otherwise.
    pub fn pip_argument(&self) -> String {
        match &self.pin {
            Some(version) => format!("{}=={}", self.name, version),
            None => self.name.to_string(),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pip_argument())
    }
}

/// Extracts the base package name from a requirement specifier, stripping
/// environment markers, extras, parenthesized constraints, and version
/// specifier tails.
pub fn base_name(spec: &str) -> &str {
    let head = spec
        .split(';')
        .next()
        .unwrap_or("")
        .split('[')
        .next()
        .unwrap_or("")
        .split('(')
        .next()
        .unwrap_or("")
        .trim();
    head.split(['<', '>', '=', '!', '~'])
        .next()
        .unwrap_or("")
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let req = Requirement::parse("requests").unwrap();
        assert_eq!(req.name.as_str(), "requests");
        assert!(req.pin.is_none());
        assert_eq!(req.pip_argument(), "requests");
    }

    #[test]
    fn test_parse_pinned() {
        let req = Requirement::parse("requests==2.32.3").unwrap();
        assert_eq!(req.name.as_str(), "requests");
        assert_eq!(req.pin.unwrap().as_str(), "2.32.3");
    }

    #[test]
    fn test_parse_pinned_pip_argument_round_trip() {
        let req = Requirement::parse(" requests == 2.32.3 ".replace(' ', "").as_str()).unwrap();
        assert_eq!(req.pip_argument(), "requests==2.32.3");
    }

    #[test]
    fn test_parse_rejects_invalid_name() {
        assert!(Requirement::parse("bad name").is_err());
        assert!(Requirement::parse("").is_err());
    }

    #[test]
    fn test_base_name_strips_extras() {
        assert_eq!(base_name("requests[socks]"), "requests");
    }

    #[test]
    fn test_base_name_strips_version_specifiers() {
        assert_eq!(base_name("urllib3>=1.21.1"), "urllib3");
        assert_eq!(base_name("charset-normalizer<4"), "charset-normalizer");
        assert_eq!(base_name("idna!=3.0"), "idna");
        assert_eq!(base_name("certifi~=2025.1"), "certifi");
    }

    #[test]
    fn test_base_name_strips_environment_markers() {
        assert_eq!(
            base_name(r#"colorama; platform_system == "Windows""#),
            "colorama"
        );
    }

    #[test]
    fn test_base_name_strips_parenthesized_constraints() {
        assert_eq!(base_name("requests (>=2.0)"), "requests");
    }
}
