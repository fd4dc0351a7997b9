use std::collections::{HashMap, HashSet};

/// DependencyPartitioner service for splitting a package's dependency graph
/// into direct and transitive sets.
///
/// Pure business logic with no I/O dependencies. The transitive set is the
/// closure of the direct dependencies' dependencies minus anything already
/// listed as direct, and never contains the root package itself.
pub struct DependencyPartitioner;

impl DependencyPartitioner {
    /// Maximum recursion depth to prevent stack overflow on hostile graphs
    const MAX_RECURSION_DEPTH: usize = 100;

    /// Partitions the dependencies of `root` into (direct, transitive).
    ///
    /// # Arguments
    /// * `root` - The package under inspection
    /// * `dependency_map` - Map of package name to its dependencies, in
    ///   resolver-supplied order
    ///
    /// # Returns
    /// Direct dependencies in resolver order, then transitive dependencies
    /// in traversal order. Order is preserved, never re-sorted.
    pub fn partition(
        root: &str,
        dependency_map: &HashMap<String, Vec<String>>,
    ) -> (Vec<String>, Vec<String>) {
        let direct: Vec<String> = dependency_map
            .get(root)
            .map(|deps| deps.iter().filter(|d| *d != root).cloned().collect())
            .unwrap_or_default();

        let direct_set: HashSet<String> = direct.iter().cloned().collect();
        let mut transitive = Vec::new();
        let mut visited = HashSet::new();
        // The root never appears in its own tree.
        visited.insert(root.to_string());

        for dep in &direct {
            Self::collect_transitive(
                dep,
                dependency_map,
                &mut transitive,
                &mut visited,
                &direct_set,
                root,
                0,
            );
        }

        (direct, transitive)
    }

    /// Recursively collects transitive dependencies for a package.
    #[allow(clippy::too_many_arguments)]
    fn collect_transitive(
        package_name: &str,
        dependency_map: &HashMap<String, Vec<String>>,
        transitive: &mut Vec<String>,
        visited: &mut HashSet<String>,
        direct: &HashSet<String>,
        root: &str,
        depth: usize,
    ) {
        if depth >= Self::MAX_RECURSION_DEPTH {
            eprintln!(
                "Warning: Maximum recursion depth ({}) reached for package '{}'. \
                 Dependency chain may be truncated.",
                Self::MAX_RECURSION_DEPTH,
                package_name
            );
            return;
        }

        if !visited.insert(package_name.to_string()) {
            return;
        }

        if let Some(dependencies) = dependency_map.get(package_name) {
            for dep in dependencies {
                if dep != root && !direct.contains(dep) && !transitive.contains(dep) {
                    transitive.push(dep.clone());
                }
                Self::collect_transitive(
                    dep,
                    dependency_map,
                    transitive,
                    visited,
                    direct,
                    root,
                    depth + 1,
                );
            }
        }
    }
}
