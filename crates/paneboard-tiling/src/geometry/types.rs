//! Layout template descriptors and engine configuration.

use serde::{Deserialize, Serialize};

/// Split axis for the two-cell template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Cells stacked top/bottom.
    Horizontal,
    /// Cells side by side.
    #[default]
    Vertical,
}

/// A named geometry recipe. Stateless; chosen per display context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "snake_case")]
pub enum LayoutTemplate {
    /// Four equal cells in a 2×2 grid.
    #[default]
    Quad,
    /// Two equal cells.
    Half { orientation: Orientation },
    /// One tall cell on the left, two stacked cells on the right.
    MixThree,
}

impl LayoutTemplate {
    /// Number of cells the template produces before truncation.
    pub fn cell_count(&self) -> usize {
        match self {
            LayoutTemplate::Quad => 4,
            LayoutTemplate::Half { .. } => 2,
            LayoutTemplate::MixThree => 3,
        }
    }

    /// Resolve a template from config identifiers.
    ///
    /// Matching ignores case and surrounding whitespace. `HALF` and `MIX_3`
    /// select their templates; anything else is `Quad`. The orientation only
    /// matters for `HALF`: `HORIZONTAL` stacks, anything else splits columns.
    pub fn from_ids(id: &str, orientation: &str) -> Self {
        let id = id.trim().to_ascii_uppercase();
        match id.as_str() {
            "HALF" => {
                let orientation = if orientation.trim().eq_ignore_ascii_case("horizontal") {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                LayoutTemplate::Half { orientation }
            }
            "MIX_3" => LayoutTemplate::MixThree,
            _ => LayoutTemplate::Quad,
        }
    }
}

/// Layout engine bound to one template and gap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    pub template: LayoutTemplate,
    /// Gap in pixels around and between cells. Negative values act as 0.
    pub gap: i32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            template: LayoutTemplate::Quad,
            gap: 6,
        }
    }
}
