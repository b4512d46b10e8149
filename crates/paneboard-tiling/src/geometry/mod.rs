mod calculation;
mod types;

pub use calculation::compute_layout;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use paneboard_common::types::Rect;

    const VERTICAL_HALF: LayoutTemplate = LayoutTemplate::Half {
        orientation: Orientation::Vertical,
    };
    const HORIZONTAL_HALF: LayoutTemplate = LayoutTemplate::Half {
        orientation: Orientation::Horizontal,
    };

    fn assert_disjoint(rects: &[Rect]) {
        for (i, a) in rects.iter().enumerate() {
            assert!(a.width >= 1 && a.height >= 1, "degenerate rect {a:?}");
            for b in &rects[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn quad_square_container() {
        let rects = compute_layout(LayoutTemplate::Quad, 1000, 1000, 10, 4);
        assert_eq!(
            rects,
            vec![
                Rect::new(10, 10, 490, 490),
                Rect::new(510, 10, 490, 490),
                Rect::new(10, 510, 490, 490),
                Rect::new(510, 510, 490, 490),
            ]
        );
    }

    #[test]
    fn half_vertical_splits_columns() {
        let rects = compute_layout(VERTICAL_HALF, 1000, 500, 10, 2);
        assert_eq!(
            rects,
            vec![Rect::new(10, 10, 490, 480), Rect::new(510, 10, 490, 480)]
        );
    }

    #[test]
    fn half_horizontal_stacks_rows() {
        let rects = compute_layout(HORIZONTAL_HALF, 1000, 500, 10, 2);
        assert_eq!(
            rects,
            vec![Rect::new(10, 10, 980, 240), Rect::new(10, 260, 980, 240)]
        );
    }

    #[test]
    fn mix_three_tall_left_and_stacked_right() {
        let rects = compute_layout(LayoutTemplate::MixThree, 1000, 600, 10, 3);
        assert_eq!(
            rects,
            vec![
                Rect::new(10, 10, 490, 580),
                Rect::new(510, 10, 480, 290),
                Rect::new(510, 310, 480, 290),
            ]
        );
    }

    #[test]
    fn mix_three_right_column_absorbs_remainder() {
        // Inset width 981: left takes 490, right takes 981 - 490 - 10.
        let rects = compute_layout(LayoutTemplate::MixThree, 1001, 600, 10, 3);
        assert_eq!(rects[0].width, 490);
        assert_eq!(rects[1].width, 481);
        assert_eq!(rects[2].width, 481);
    }

    #[test]
    fn truncates_to_pane_count() {
        let rects = compute_layout(LayoutTemplate::Quad, 1000, 1000, 10, 2);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(10, 10, 490, 490));
        assert_eq!(rects[1], Rect::new(510, 10, 490, 490));
    }

    #[test]
    fn never_pads_beyond_template_cells() {
        assert_eq!(compute_layout(VERTICAL_HALF, 800, 600, 6, 5).len(), 2);
        assert_eq!(compute_layout(LayoutTemplate::MixThree, 800, 600, 6, 9).len(), 3);
        assert_eq!(compute_layout(LayoutTemplate::Quad, 800, 600, 6, 99).len(), 4);
    }

    #[test]
    fn empty_for_degenerate_inputs() {
        assert!(compute_layout(LayoutTemplate::Quad, 0, 600, 6, 4).is_empty());
        assert!(compute_layout(LayoutTemplate::Quad, 800, -1, 6, 4).is_empty());
        assert!(compute_layout(LayoutTemplate::Quad, 800, 600, 6, 0).is_empty());
    }

    #[test]
    fn negative_gap_is_clamped() {
        let rects = compute_layout(LayoutTemplate::Quad, 100, 100, -5, 4);
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 50, 50),
                Rect::new(50, 0, 50, 50),
                Rect::new(0, 50, 50, 50),
                Rect::new(50, 50, 50, 50),
            ]
        );
    }

    #[test]
    fn huge_gap_does_not_panic() {
        for template in [
            LayoutTemplate::Quad,
            VERTICAL_HALF,
            HORIZONTAL_HALF,
            LayoutTemplate::MixThree,
        ] {
            for gap in [i32::MAX / 2 + 1, i32::MAX] {
                let rects = compute_layout(template, 1000, 1000, gap, 4);
                assert_eq!(rects.len(), template.cell_count());
                assert!(rects.iter().all(|r| r.width >= 1 && r.height >= 1));
            }
            let rects = compute_layout(template, i32::MAX, i32::MAX, i32::MAX / 2, 4);
            assert_eq!(rects.len(), template.cell_count());
        }
    }

    #[test]
    fn huge_gap_quad_origins_saturate() {
        let rects = compute_layout(LayoutTemplate::Quad, 1000, 1000, i32::MAX, 4);
        assert_eq!(rects[0], Rect::new(i32::MAX, i32::MAX, 1, 1));
        assert_eq!(rects[3].x, i32::MAX);
    }

    #[test]
    fn tiny_container_floors_at_one_pixel() {
        for template in [
            LayoutTemplate::Quad,
            VERTICAL_HALF,
            HORIZONTAL_HALF,
            LayoutTemplate::MixThree,
        ] {
            let rects = compute_layout(template, 10, 10, 10, 4);
            assert_eq!(rects.len(), template.cell_count());
            assert_disjoint(&rects);
        }
    }

    #[test]
    fn cells_never_overlap_across_sizes() {
        for template in [
            LayoutTemplate::Quad,
            VERTICAL_HALF,
            HORIZONTAL_HALF,
            LayoutTemplate::MixThree,
        ] {
            for (w, h) in [(1, 1), (7, 3), (640, 480), (1001, 777), (1920, 1080)] {
                for gap in [0, 1, 6, 25] {
                    assert_disjoint(&compute_layout(template, w, h, gap, 4));
                }
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = compute_layout(LayoutTemplate::MixThree, 1366, 768, 6, 3);
        let b = compute_layout(LayoutTemplate::MixThree, 1366, 768, 6, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn engine_delegates_to_template() {
        let engine = LayoutEngine::new(VERTICAL_HALF, 10);
        assert_eq!(engine.compute(1000, 500, 2), compute_layout(VERTICAL_HALF, 1000, 500, 10, 2));
    }

    #[test]
    fn engine_slot_rects_are_quad_cells() {
        let engine = LayoutEngine::new(LayoutTemplate::MixThree, 10);
        let slots = engine.slot_rects(1000, 1000);
        assert_eq!(slots, compute_layout(LayoutTemplate::Quad, 1000, 1000, 10, 4));
        assert!(engine.slot_rects(0, 0).is_empty());
    }

    #[test]
    fn engine_default_gap() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.gap, 6);
        assert_eq!(engine.template, LayoutTemplate::Quad);
    }

    #[test]
    fn template_from_ids() {
        assert_eq!(LayoutTemplate::from_ids("QUAD", ""), LayoutTemplate::Quad);
        assert_eq!(LayoutTemplate::from_ids(" half ", "Horizontal"), HORIZONTAL_HALF);
        assert_eq!(LayoutTemplate::from_ids("Half", "vertical"), VERTICAL_HALF);
        assert_eq!(LayoutTemplate::from_ids("HALF", "diagonal"), VERTICAL_HALF);
        assert_eq!(LayoutTemplate::from_ids("mix_3", ""), LayoutTemplate::MixThree);
        assert_eq!(LayoutTemplate::from_ids("grid-9", ""), LayoutTemplate::Quad);
    }

    #[test]
    fn template_cell_counts() {
        assert_eq!(LayoutTemplate::Quad.cell_count(), 4);
        assert_eq!(VERTICAL_HALF.cell_count(), 2);
        assert_eq!(LayoutTemplate::MixThree.cell_count(), 3);
    }

    #[test]
    fn template_deserializes_from_tagged_json() {
        let json = r#"{"id":"half","orientation":"horizontal"}"#;
        let template: LayoutTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template, HORIZONTAL_HALF);

        let template: LayoutTemplate = serde_json::from_str(r#"{"id":"mix_three"}"#).unwrap();
        assert_eq!(template, LayoutTemplate::MixThree);
    }
}
