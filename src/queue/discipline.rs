//! Removal disciplines supported by the ordered queue

use crate::queue::error::{QueueError, QueueResult};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Removal-order policy of a queue, fixed at construction
///
/// Whatever the discipline, the element due for removal next is kept at the
/// back of the backing sequence; disciplines differ only in where a new
/// element is placed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Discipline {
    /// Oldest inserted element is removed first
    Fifo,
    /// Newest inserted element is removed first
    Lifo,
    /// Highest priority is removed first
    PriorityHigh,
    /// Lowest priority is removed first
    PriorityLow,
    /// Fifo bounded by a capacity limit, evicting the oldest on overflow
    FifoLimited,
}

impl Discipline {
    /// Numeric tag of the discipline (declaration order, starting at 0)
    pub fn tag(&self) -> i64 {
        match self {
            Self::Fifo => 0,
            Self::Lifo => 1,
            Self::PriorityHigh => 2,
            Self::PriorityLow => 3,
            Self::FifoLimited => 4,
        }
    }

    /// Resolve a numeric tag, rejecting anything outside the declared set
    pub fn from_tag(tag: i64) -> QueueResult<Self> {
        Self::iter()
            .find(|d| d.tag() == tag)
            .ok_or_else(|| QueueError::InvalidDiscipline {
                tag: tag.to_string(),
            })
    }

    /// Resolve a discipline name such as `priority-high`
    pub fn from_name(name: &str) -> QueueResult<Self> {
        name.trim()
            .to_ascii_lowercase()
            .parse::<Self>()
            .map_err(|_| QueueError::InvalidDiscipline {
                tag: name.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether placement depends on element priority
    pub fn is_priority_ordered(&self) -> bool {
        matches!(self, Self::PriorityHigh | Self::PriorityLow)
    }

    /// Comma separated list of every discipline name, for help and error text
    pub fn all_names() -> String {
        Self::iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
    }
}
