//! Output format selection.

use std::fmt;
use std::str::FromStr;

use crate::error::DiffError;
use crate::stylish;
use crate::tree::DiffTree;

/// A supported output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Indented brace-delimited tree with `+`/`-` markers.
    #[default]
    Stylish,
}

impl Format {
    /// Render `tree` in this format.
    pub fn render(&self, tree: &DiffTree) -> String {
        match self {
            Format::Stylish => stylish::render(tree),
        }
    }
}

impl FromStr for Format {
    type Err = DiffError;

    /// Parse a format name, ignoring ASCII case. An empty name selects the
    /// default format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("stylish") {
            Ok(Format::Stylish)
        } else {
            Err(DiffError::UnsupportedFormat(s.to_owned()))
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Stylish => f.write_str("stylish"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("stylish".parse::<Format>().unwrap(), Format::Stylish);
        assert_eq!("Stylish".parse::<Format>().unwrap(), Format::Stylish);
        assert_eq!("".parse::<Format>().unwrap(), Format::default());
    }

    #[test]
    fn unknown_format_rejected() {
        let err = "plain".parse::<Format>().unwrap_err();
        assert_eq!(err, DiffError::UnsupportedFormat("plain".into()));
        assert!(err.to_string().contains("plain"));
    }

    #[test]
    fn display_roundtrips_name() {
        assert_eq!(Format::Stylish.to_string(), "stylish");
    }

    #[test]
    fn render_delegates_to_stylish() {
        assert_eq!(Format::Stylish.render(&DiffTree::new()), "{\n}");
    }
}
