//! Filter types: what narrows the job list.

use std::fmt;
use std::str::FromStr;

use super::Category;

/// Inputs to the job filter.
///
/// Derived from live state each time it is needed, never stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub immediate_only: bool,
}

/// Either every category or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    /// All → service → physical → technical → creative → All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[0]),
            Self::Only(c) => {
                let i = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Category::ALL
                    .get(i + 1)
                    .map_or(Self::All, |next| Self::Only(*next))
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "all" {
            return Ok(Self::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .map(Self::Only)
            .ok_or_else(|| {
                format!("unknown category '{s}' (expected all, service, physical, technical, creative)")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_every_category() {
        let mut filter = CategoryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                CategoryFilter::Only(Category::Service),
                CategoryFilter::Only(Category::Physical),
                CategoryFilter::Only(Category::Technical),
                CategoryFilter::Only(Category::Creative),
                CategoryFilter::All,
            ]
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "creative".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Creative))
        );
        assert!("office".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn all_admits_everything() {
        for c in Category::ALL {
            assert!(CategoryFilter::All.admits(c));
        }
        assert!(!CategoryFilter::Only(Category::Service).admits(Category::Physical));
    }
}
