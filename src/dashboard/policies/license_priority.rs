/// LicensePriority policy for determining license information precedence
///
/// Encodes the business rules for selecting a display license when multiple
/// sources are available (pip's License field, the registry license field,
/// an SPDX expression, trove classifiers).
///
/// Priority order:
/// 1. license field (if non-empty and not "UNKNOWN")
/// 2. license_expression field (if non-empty)
/// 3. OSI Approved license from classifiers
pub struct LicensePriority;

impl LicensePriority {
    /// Selects the most appropriate license text based on priority rules
    ///
    /// # Arguments
    /// * `license` - License field from package metadata
    /// * `license_expression` - SPDX expression field from package metadata
    /// * `classifiers` - List of classifier strings from package metadata
    ///
    /// # Returns
    /// The selected license text, or None if no valid license found
    pub fn select_license(
        license: Option<String>,
        license_expression: Option<String>,
        classifiers: &[String],
    ) -> Option<String> {
        license
            .filter(|l| !l.is_empty() && l != "UNKNOWN")
            .or_else(|| license_expression.filter(|l| !l.is_empty()))
            .or_else(|| Self::extract_license_from_classifiers(classifiers))
    }

    /// Extracts license information from classifier strings
    ///
    /// Looks for classifiers with the prefix "License :: OSI Approved :: "
    /// and extracts the license name.
    fn extract_license_from_classifiers(classifiers: &[String]) -> Option<String> {
        for classifier in classifiers {
            if let Some(license) = classifier.strip_prefix("License :: OSI Approved :: ") {
                return Some(license.to_string());
            }
        }
        None
    }
}
