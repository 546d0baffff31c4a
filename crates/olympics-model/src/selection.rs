//! Sentinel-aware filter values.
//!
//! Every selector list starts with an "Overall" entry meaning "no constraint
//! on this dimension". [`Selection`] makes that sentinel a distinct variant
//! instead of a magic string compared at every call site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSelectionError;

/// Label shown for the unconstrained choice.
pub const OVERALL: &str = "Overall";

/// A filter value: either the "Overall" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Selection<T> {
    Overall,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }
}

impl Selection<String> {
    pub fn as_deref(&self) -> Selection<&str> {
        match self {
            Selection::Overall => Selection::Overall,
            Selection::Only(value) => Selection::Only(value.as_str()),
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Overall
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str(OVERALL),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(OVERALL) {
            return Ok(Selection::Overall);
        }
        trimmed
            .parse::<T>()
            .map(Selection::Only)
            .map_err(|err| ParseSelectionError {
                value: s.to_string(),
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinel_and_values() {
        assert_eq!("Overall".parse::<Selection<i32>>().unwrap(), Selection::Overall);
        assert_eq!("overall".parse::<Selection<i32>>().unwrap(), Selection::Overall);
        assert_eq!("1996".parse::<Selection<i32>>().unwrap(), Selection::Only(1996));
        assert_eq!(
            "France".parse::<Selection<String>>().unwrap(),
            Selection::Only("France".to_string())
        );
        assert!("nineteen".parse::<Selection<i32>>().is_err());
    }

    #[test]
    fn displays_sentinel_label() {
        assert_eq!(Selection::<i32>::Overall.to_string(), "Overall");
        assert_eq!(Selection::Only(2000).to_string(), "2000");
    }

    #[test]
    fn sentinel_sorts_first() {
        let mut values = vec![Selection::Only(2004), Selection::Overall, Selection::Only(1996)];
        values.sort();
        assert_eq!(
            values,
            vec![Selection::Overall, Selection::Only(1996), Selection::Only(2004)]
        );
    }

    #[test]
    fn borrows_owned_selection() {
        let owned = Selection::Only("Rowing".to_string());
        assert_eq!(owned.as_deref(), Selection::Only("Rowing"));
        assert!(Selection::<String>::default().as_deref().is_overall());
    }
}
