//! Collection kinds and name classification.

/// The kind of record collection a feature collection name refers to.
///
/// Produced once by [`classify`] and matched on everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Field boundaries with descriptive metadata.
    Partfield,
    /// Time-stamped sensor logs.
    TimeLog,
    /// Raster grids of per-cell values.
    Grid,
    /// Guidance lines.
    GuidancePattern,
    /// Matches no known prefix. No schema content and no reader.
    Unknown,
}

impl CollectionKind {
    /// Known kinds in classification order.
    pub const KNOWN: [Self; 4] = [
        Self::Partfield,
        Self::TimeLog,
        Self::Grid,
        Self::GuidancePattern,
    ];

    /// Name prefix that selects this kind, `None` for [`Self::Unknown`].
    pub const fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Partfield => Some("Partfield"),
            Self::TimeLog => Some("TimeLog"),
            Self::Grid => Some("Grid"),
            Self::GuidancePattern => Some("GuidancePattern"),
            Self::Unknown => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self.prefix() {
            Some(prefix) => prefix,
            None => "Unknown",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a collection name by case-sensitive prefix.
///
/// Prefixes are tested in [`CollectionKind::KNOWN`] order and the first match
/// wins, so `TimeLog1` and `TimeLog2` are both time log collections.
pub fn classify(name: &str) -> CollectionKind {
    CollectionKind::KNOWN
        .into_iter()
        .find(|kind| kind.prefix().is_some_and(|prefix| name.starts_with(prefix)))
        .unwrap_or(CollectionKind::Unknown)
}
