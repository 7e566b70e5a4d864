//! Dotted identifiers for catalog entries
//!
//! Ids encode ancestry through their prefix: sub-strategy `3.2` belongs to
//! strategy `3`, guideline `3.2.4` belongs to sub-strategy `3.2`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

macro_rules! dotted_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create id from its dotted string form
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Dotted string form
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

dotted_id!(
    /// Strategy id, e.g. `"3"`
    StrategyId
);

dotted_id!(
    /// Sub-strategy id, e.g. `"3.2"`
    SubStrategyId
);

dotted_id!(
    /// Guideline id, e.g. `"3.2.4"`
    GuidelineId
);

/// Everything before the last dot, or `None` for a single-segment id
fn parent_prefix(id: &str) -> Option<&str> {
    id.rfind('.').map(|pos| &id[..pos])
}

/// `child` is `parent` followed by `.` and at least one more character
fn is_direct_prefix(parent: &str, child: &str) -> bool {
    child.len() > parent.len() + 1
        && child.starts_with(parent)
        && child.as_bytes()[parent.len()] == b'.'
}

impl SubStrategyId {
    /// Build `<strategy>.<index>`
    #[must_use]
    pub fn child_of(strategy: &StrategyId, index: impl Display) -> Self {
        Self(format!("{strategy}.{index}"))
    }

    /// Owning strategy id, derived from the prefix
    #[must_use]
    pub fn strategy_id(&self) -> StrategyId {
        StrategyId::new(parent_prefix(&self.0).unwrap_or(&self.0))
    }

    /// Check whether this sub-strategy belongs to `strategy`
    #[inline]
    #[must_use]
    pub fn belongs_to(&self, strategy: &str) -> bool {
        is_direct_prefix(strategy, &self.0)
    }
}

impl GuidelineId {
    /// Build `<sub-strategy>.<position>`
    #[must_use]
    pub fn child_of(sub: &SubStrategyId, position: usize) -> Self {
        Self(format!("{sub}.{position}"))
    }

    /// Owning sub-strategy id, derived from the prefix
    #[must_use]
    pub fn sub_strategy_id(&self) -> SubStrategyId {
        SubStrategyId::new(parent_prefix(&self.0).unwrap_or(&self.0))
    }
}
