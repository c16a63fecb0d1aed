use std::fmt;

use crate::{Error, Result};

/// Strategy used to place a newly arriving point into the ring.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InsertionHeuristic {
    /// Arbitrary insertion: the point becomes the new head.
    Beginning,
    /// Next to the closest existing point, on its closer side.
    Nearest,
    /// On the edge whose length increase is smallest.
    #[default]
    Smallest,
}

impl InsertionHeuristic {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "beginning" | "arbitrary" => Ok(Self::Beginning),
            "nearest" | "nearest-neighbor" => Ok(Self::Nearest),
            "smallest" | "cheapest" => Ok(Self::Smallest),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --heuristic: {raw} (expected beginning|nearest|smallest)"
            ))),
        }
    }
}

impl fmt::Display for InsertionHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Beginning => "beginning",
            Self::Nearest => "nearest",
            Self::Smallest => "smallest",
        };
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::InsertionHeuristic;

    #[test]
    fn parse_accepts_canonical_names_and_aliases() {
        assert_eq!(
            InsertionHeuristic::parse("beginning").expect("parse"),
            InsertionHeuristic::Beginning
        );
        assert_eq!(
            InsertionHeuristic::parse("Nearest-Neighbor").expect("parse"),
            InsertionHeuristic::Nearest
        );
        assert_eq!(
            InsertionHeuristic::parse("CHEAPEST").expect("parse"),
            InsertionHeuristic::Smallest
        );
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = InsertionHeuristic::parse("2opt").expect_err("unknown heuristic should fail");
        assert!(err.to_string().contains("Invalid value for --heuristic: 2opt"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for heuristic in [
            InsertionHeuristic::Beginning,
            InsertionHeuristic::Nearest,
            InsertionHeuristic::Smallest,
        ] {
            let parsed = InsertionHeuristic::parse(&heuristic.to_string()).expect("parse");
            assert_eq!(parsed, heuristic);
        }
    }

    #[test]
    fn defaults_to_smallest() {
        assert_eq!(InsertionHeuristic::default(), InsertionHeuristic::Smallest);
    }
}
