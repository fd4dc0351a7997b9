use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Security: Restrict to the characters pip itself accepts in names.
        // This prevents injection into pip command lines and registry URLs.
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PyPI treats names case-insensitively with `-` and `_` interchangeable.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase().replace('_', "-")
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // Security: Validate characters (PEP 440 versions plus wildcards)
        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '!' || c == '*')
        {
            anyhow::bail!(
                "Package version contains invalid characters. Only alphanumeric, dots, hyphens, plus, exclamation marks, and asterisks are allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("requests".to_string()).unwrap();
        assert_eq!(name.as_str(), "requests");
    }

    #[test]
    fn test_package_name_new_empty() {
        let result = PackageName::new("".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_package_name_rejects_shell_metacharacters() {
        assert!(PackageName::new("requests; rm -rf /".to_string()).is_err());
        assert!(PackageName::new("a/b".to_string()).is_err());
        assert!(PackageName::new("a b".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let result = PackageName::new("a".repeat(MAX_PACKAGE_NAME_LENGTH + 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_package_name_normalized() {
        let name = PackageName::new("Charset_Normalizer".to_string()).unwrap();
        assert_eq!(name.normalized(), "charset-normalizer");
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("requests".to_string()).unwrap();
        assert_eq!(format!("{}", name), "requests");
    }

    #[test]
    fn test_version_new_valid() {
        let version = Version::new("2.32.3".to_string()).unwrap();
        assert_eq!(version.as_str(), "2.32.3");
    }

    #[test]
    fn test_version_new_empty() {
        let result = Version::new("".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_version_accepts_epoch_and_local_segments() {
        assert!(Version::new("1!2.0.0".to_string()).is_ok());
        assert!(Version::new("2.0.0+local.1".to_string()).is_ok());
    }

    #[test]
    fn test_version_rejects_invalid_characters() {
        assert!(Version::new("1.0.0; echo".to_string()).is_err());
    }

    #[test]
    fn test_version_display() {
        let version = Version::new("1.0.0".to_string()).unwrap();
        assert_eq!(format!("{}", version), "1.0.0");
    }
}
