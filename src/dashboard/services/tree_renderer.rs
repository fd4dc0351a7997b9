use crate::dashboard::domain::{DashboardEntry, DependencyRef, PackageRecord, StatusIndicator};

/// A rendered tree node: a label plus nested children.
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    fn group(label: &str, children: Vec<Node>) -> Self {
        Self {
            label: label.to_string(),
            children,
        }
    }
}

/// TreeRenderer service - the Package Version Dashboard formatter.
///
/// A stateless pure transformation: resolved entries in, tree text out.
/// No network, no filesystem, no interior state; rendering the same
/// entries twice produces byte-identical output.
pub struct TreeRenderer;

impl TreeRenderer {
    /// Renders a full dashboard, one top-level entry per requested name,
    /// in the order the entries were supplied. Entries are separated by a
    /// blank line.
    pub fn render(entries: &[DashboardEntry]) -> String {
        let blocks: Vec<String> = entries.iter().map(Self::render_entry).collect();
        blocks.join("\n")
    }

    /// Renders a single dashboard entry.
    ///
    /// NotFound and Error entries are single lines; a resolved record gets
    /// its status line, attribute lines, and dependency subgroups.
    pub fn render_entry(entry: &DashboardEntry) -> String {
        match entry {
            DashboardEntry::NotFound { name } => {
                format!("{} {}\n", StatusIndicator::NotFound.glyph(), name)
            }
            DashboardEntry::Error { name, message } => {
                format!("{} {}: {}\n", StatusIndicator::Error.glyph(), name, message)
            }
            DashboardEntry::Resolved(record) => Self::render_record(record),
        }
    }

    fn render_record(record: &PackageRecord) -> String {
        let mut out = String::new();
        out.push_str(&Self::status_line(record));
        out.push('\n');

        let children = Self::build_children(record);
        let count = children.len();
        for (idx, child) in children.iter().enumerate() {
            Self::write_node(&mut out, child, "", idx + 1 == count);
        }
        out
    }

    /// The status line: primary glyph, optional security glyph, name.
    fn status_line(record: &PackageRecord) -> String {
        let primary = StatusIndicator::for_record(record).glyph();
        if record.security_verified {
            format!(
                "{} {} {}",
                primary,
                StatusIndicator::SecurityVerified.glyph(),
                record.name
            )
        } else {
            format!("{} {}", primary, record.name)
        }
    }

    /// Attribute lines in fixed order, then the Dependencies group.
    /// The Latest line appears only when it differs from Current; empty
    /// dependency subgroups are omitted.
    fn build_children(record: &PackageRecord) -> Vec<Node> {
        let mut children = vec![Node::leaf(format!("Current: {}", record.current_version))];

        if record.update_available() {
            if let Some(latest) = &record.latest_version {
                children.push(Node::leaf(format!("Latest: {}", latest)));
            }
        }

        children.push(Node::leaf(format!(
            "License: {}",
            record.license.as_deref().unwrap_or("unknown")
        )));
        children.push(Node::leaf(format!(
            "Author: {}",
            record.author.as_deref().unwrap_or("unknown")
        )));
        children.push(Node::leaf(format!(
            "Summary: {}",
            record.summary.as_deref().unwrap_or("unknown")
        )));
        children.push(Node::leaf(format!(
            "Install Date: {}",
            record
                .install_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )));

        let mut subgroups = Vec::new();
        if !record.direct_dependencies.is_empty() {
            subgroups.push(Node::group(
                "Direct",
                Self::dependency_leaves(&record.direct_dependencies),
            ));
        }
        if !record.transitive_dependencies.is_empty() {
            subgroups.push(Node::group(
                "Transitive",
                Self::dependency_leaves(&record.transitive_dependencies),
            ));
        }
        if !subgroups.is_empty() {
            children.push(Node::group("Dependencies", subgroups));
        }

        children
    }

    /// Dependency leaves in resolver-supplied order, never re-sorted.
    fn dependency_leaves(deps: &[DependencyRef]) -> Vec<Node> {
        deps.iter()
            .map(|dep| match &dep.version {
                Some(version) => Node::leaf(format!("{} ({})", dep.name, version)),
                None => Node::leaf(dep.name.clone()),
            })
            .collect()
    }

    fn write_node(out: &mut String, node: &Node, prefix: &str, is_last: bool) {
        out.push_str(prefix);
        out.push_str(Self::connector(is_last));
        out.push_str(&node.label);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, Self::continuation(is_last));
        let count = node.children.len();
        for (idx, child) in node.children.iter().enumerate() {
            Self::write_node(out, child, &child_prefix, idx + 1 == count);
        }
    }

    /// Connector token for a node given its position among siblings.
    fn connector(is_last: bool) -> &'static str {
        if is_last { "└── " } else { "├── " }
    }

    /// Indentation under a node: a continuation bar while the ancestor
    /// still has following siblings, plain spaces otherwise.
    fn continuation(is_last: bool) -> &'static str {
        if is_last { "    " } else { "│   " }
    }
}
