/// InstallReport - per-name outcome of a multi-package install
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// (name, installed version) in request order.
    pub succeeded: Vec<(String, String)>,
    /// (name, failure reason) in request order.
    pub failed: Vec<(String, String)>,
}

impl InstallReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_succeeded_when_no_failures() {
        let report = InstallReport {
            succeeded: vec![("requests".to_string(), "2.32.3".to_string())],
            failed: vec![],
        };
        assert!(report.all_succeeded());
    }

    #[test]
    fn test_not_all_succeeded_with_failure() {
        let report = InstallReport {
            succeeded: vec![],
            failed: vec![("ghost-pkg".to_string(), "not found".to_string())],
        };
        assert!(!report.all_succeeded());
    }
}
