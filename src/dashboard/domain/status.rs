use super::PackageRecord;

/// StatusIndicator - derived display status for one dashboard entry.
///
/// Recomputed on each render from the record contents; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    UpToDate,
    UpdateAvailable,
    SecurityVerified,
    NotFound,
    Error,
}

impl StatusIndicator {
    /// Derives the primary status for a resolved record.
    ///
    /// A record with no known latest version renders as up to date: with
    /// no registry evidence of a newer release, the dashboard does not
    /// claim one.
    pub fn for_record(record: &PackageRecord) -> Self {
        if record.update_available() {
            StatusIndicator::UpdateAvailable
        } else {
            StatusIndicator::UpToDate
        }
    }

    /// The fixed display token for this status.
    pub fn glyph(self) -> &'static str {
        match self {
            StatusIndicator::UpToDate => "✓",
            StatusIndicator::UpdateAvailable => "↑",
            StatusIndicator::SecurityVerified => "🔒",
            StatusIndicator::NotFound => "?",
            StatusIndicator::Error => "!",
        }
    }
}
