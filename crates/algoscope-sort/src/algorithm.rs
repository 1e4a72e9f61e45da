//! Sort algorithm identity, labels and complexity table.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The six instrumented sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

/// Asymptotic cost labels shown next to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

impl SortAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Host identifier (`bubble`, `quick`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    pub fn complexity(&self) -> Complexity {
        let (time, space) = match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => {
                ("O(n²)", "O(1)")
            }
            SortAlgorithm::Merge => ("O(n log n)", "O(n)"),
            SortAlgorithm::Quick => ("O(n log n)", "O(log n)"),
            SortAlgorithm::Heap => ("O(n log n)", "O(1)"),
        };
        Complexity { time, space }
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_identifiers() {
        for algo in SortAlgorithm::ALL {
            assert_eq!(algo.id().parse::<SortAlgorithm>().unwrap(), algo);
        }
        assert_eq!(" Quick ".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "bogo".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(err, Error::InvalidAlgorithm("bogo".into()));
    }

    #[test]
    fn complexity_labels() {
        assert_eq!(SortAlgorithm::Bubble.complexity().time, "O(n²)");
        assert_eq!(SortAlgorithm::Merge.complexity().space, "O(n)");
        assert_eq!(SortAlgorithm::Quick.complexity().space, "O(log n)");
        assert_eq!(SortAlgorithm::Heap.complexity().space, "O(1)");
    }
}
