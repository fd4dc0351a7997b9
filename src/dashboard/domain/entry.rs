use super::PackageRecord;

/// DashboardEntry - the outcome of resolving one requested package name.
///
/// A missing or faulting package degrades to its own entry variant so the
/// rest of the dashboard still renders.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEntry {
    Resolved(PackageRecord),
    NotFound { name: String },
    Error { name: String, message: String },
}

impl DashboardEntry {
    pub fn name(&self) -> &str {
        match self {
            DashboardEntry::Resolved(record) => &record.name,
            DashboardEntry::NotFound { name } => name,
            DashboardEntry::Error { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_not_found() {
        let entry = DashboardEntry::NotFound {
            name: "ghost-pkg".to_string(),
        };
        assert_eq!(entry.name(), "ghost-pkg");
    }

    #[test]
    fn test_entry_name_error() {
        let entry = DashboardEntry::Error {
            name: "flaky".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(entry.name(), "flaky");
    }
}
