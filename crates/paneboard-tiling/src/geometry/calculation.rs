//! Template-to-rectangle computation.
//!
//! Every template insets the container by `gap` on the leading edges and
//! separates cells by `gap`. Along a split axis each cell is half of the inset
//! extent, so the second cell starts at `gap + cell + gap`. Arithmetic
//! saturates, so any non-negative gap is accepted.

use paneboard_common::types::Rect;

use super::types::{LayoutEngine, LayoutTemplate, Orientation};

/// Compute pane rectangles for `template` inside a `width` × `height` container.
///
/// Returns at most `pane_count` rectangles, in template order. A non-positive
/// container dimension or a zero pane count yields an empty list.
pub fn compute_layout(
    template: LayoutTemplate,
    width: i32,
    height: i32,
    gap: i32,
    pane_count: usize,
) -> Vec<Rect> {
    let gap = gap.max(0);
    if width <= 0 || height <= 0 || pane_count == 0 {
        return Vec::new();
    }

    let area = Inset::new(width, height, gap);
    let mut rects = match template {
        LayoutTemplate::Quad => build_quad(&area),
        LayoutTemplate::Half { orientation } => build_half(&area, orientation),
        LayoutTemplate::MixThree => build_mix_three(&area),
    };
    rects.truncate(pane_count);
    rects
}

impl LayoutEngine {
    pub fn new(template: LayoutTemplate, gap: i32) -> Self {
        Self { template, gap }
    }

    /// Compute rectangles for `pane_count` panes in a container.
    pub fn compute(&self, width: i32, height: i32, pane_count: usize) -> Vec<Rect> {
        compute_layout(self.template, width, height, self.gap, pane_count)
    }

    /// The four Quad cells regardless of the configured template.
    ///
    /// Slot `i` of the workspace maps to element `i`. Empty when the container
    /// has no area.
    pub fn slot_rects(&self, width: i32, height: i32) -> Vec<Rect> {
        compute_layout(LayoutTemplate::Quad, width, height, self.gap, 4)
    }
}

/// The container after removing the leading gap on each axis.
struct Inset {
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    gap: i32,
}

impl Inset {
    fn new(width: i32, height: i32, gap: i32) -> Self {
        Self {
            x0: gap,
            y0: gap,
            width: width.saturating_sub(gap.saturating_mul(2)).max(0),
            height: height.saturating_sub(gap.saturating_mul(2)).max(0),
            gap,
        }
    }

    fn half_width(&self) -> i32 {
        (self.width / 2).max(1)
    }

    fn half_height(&self) -> i32 {
        (self.height / 2).max(1)
    }

    fn full_width(&self) -> i32 {
        self.width.max(1)
    }

    fn full_height(&self) -> i32 {
        self.height.max(1)
    }

    /// Origin of the cell that follows one of `extent` starting at `start`.
    fn after(&self, start: i32, extent: i32) -> i32 {
        start.saturating_add(extent).saturating_add(self.gap)
    }
}

fn build_quad(area: &Inset) -> Vec<Rect> {
    let cw = area.half_width();
    let ch = area.half_height();
    let x1 = area.after(area.x0, cw);
    let y1 = area.after(area.y0, ch);

    vec![
        Rect::new(area.x0, area.y0, cw, ch),
        Rect::new(x1, area.y0, cw, ch),
        Rect::new(area.x0, y1, cw, ch),
        Rect::new(x1, y1, cw, ch),
    ]
}

fn build_half(area: &Inset, orientation: Orientation) -> Vec<Rect> {
    match orientation {
        Orientation::Horizontal => {
            let w = area.full_width();
            let h = area.half_height();
            vec![
                Rect::new(area.x0, area.y0, w, h),
                Rect::new(area.x0, area.after(area.y0, h), w, h),
            ]
        }
        Orientation::Vertical => {
            let w = area.half_width();
            let h = area.full_height();
            vec![
                Rect::new(area.x0, area.y0, w, h),
                Rect::new(area.after(area.x0, w), area.y0, w, h),
            ]
        }
    }
}

fn build_mix_three(area: &Inset) -> Vec<Rect> {
    let left_width = area.half_width();
    // The right column takes whatever the left column and gap leave over.
    let right_width = area
        .width
        .saturating_sub(left_width)
        .saturating_sub(area.gap)
        .max(1);
    let right_height = area.half_height();
    let right_x = area.after(area.x0, left_width);

    vec![
        Rect::new(area.x0, area.y0, left_width, area.full_height()),
        Rect::new(right_x, area.y0, right_width, right_height),
        Rect::new(
            right_x,
            area.after(area.y0, right_height),
            right_width,
            right_height,
        ),
    ]
}
