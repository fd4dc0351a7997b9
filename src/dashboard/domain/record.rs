use chrono::NaiveDate;

/// A `name (version)` reference inside a dependency subgroup.
///
/// The version is optional: a dependency can be declared by the package
/// metadata without being resolvable in the current environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub name: String,
    pub version: Option<String>,
}

impl DependencyRef {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// PackageRecord aggregate - everything the dashboard shows for one package.
///
/// Constructed per invocation of the list command from the underlying
/// package manager's metadata; never persisted by this tool.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub name: String,
    pub current_version: String,
    /// Latest version known to the registry; None when the lookup failed
    /// or offline mode is active.
    pub latest_version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub install_date: Option<NaiveDate>,
    /// True when the registry digest for the installed release passed the
    /// integrity check.
    pub security_verified: bool,
    /// Direct dependencies in resolver-supplied order.
    pub direct_dependencies: Vec<DependencyRef>,
    /// Closure of the direct dependencies' dependencies, minus the direct
    /// set and the package itself, in traversal order.
    pub transitive_dependencies: Vec<DependencyRef>,
}

impl PackageRecord {
    /// True when the registry reports a newer version than the one installed.
    pub fn update_available(&self) -> bool {
        self.latest_version
            .as_deref()
            .is_some_and(|latest| latest != self.current_version)
    }
}
