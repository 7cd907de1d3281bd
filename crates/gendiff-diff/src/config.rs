use serde::{Deserialize, Serialize};

/// Layout settings for the stylish renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylishConfig {
    /// Spaces per nesting level.
    pub indent_size: usize,
    /// Width of the `+ `/`- ` marker, taken out of the node's indent so that
    /// markers sit left of the key column.
    pub marker_width: usize,
}

impl Default for StylishConfig {
    fn default() -> Self {
        Self {
            indent_size: 4,
            marker_width: 2,
        }
    }
}

impl StylishConfig {
    /// Indent of the marker on a node line at `depth` (top level is 1).
    pub fn marker_indent(&self, depth: usize) -> usize {
        self.key_indent(depth).saturating_sub(self.marker_width)
    }

    /// Indent of the key column at `depth`, also used for closing braces.
    pub fn key_indent(&self, depth: usize) -> usize {
        depth * self.indent_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = StylishConfig::default();
        assert_eq!(c.indent_size, 4);
        assert_eq!(c.marker_width, 2);
        assert_eq!(c.marker_indent(1), 2);
        assert_eq!(c.key_indent(1), 4);
        assert_eq!(c.marker_indent(3), 10);
    }

    #[test]
    fn marker_wider_than_indent_clamps() {
        let c = StylishConfig {
            indent_size: 1,
            marker_width: 2,
        };
        assert_eq!(c.marker_indent(1), 0);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let c: StylishConfig = serde_json::from_str(r#"{"indent_size": 2}"#).unwrap();
        assert_eq!(c.indent_size, 2);
        assert_eq!(c.marker_width, 2);
    }
}
