use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub String);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CleanupId(pub u64);

impl CleanupId {
    /// Element id of the list card rendered for this cleanup.
    pub fn card_id(&self) -> String {
        format!("cleanup-{}", self.0)
    }
}

impl FromStr for CleanupId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(CleanupId)
            .map_err(|_| crate::Error::InvalidCleanupId(s.to_string()))
    }
}

impl Display for CleanupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_ids_parse_from_text() {
        assert_eq!(" 2 ".parse::<CleanupId>().unwrap(), CleanupId(2));
        assert!(matches!(
            "two".parse::<CleanupId>(),
            Err(crate::Error::InvalidCleanupId(v)) if v == "two"
        ));
        assert_eq!(CleanupId(2).card_id(), "cleanup-2");
    }
}
