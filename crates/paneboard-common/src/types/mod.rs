mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 300, 200);
        assert_eq!(r.right(), 310);
        assert_eq!(r.bottom(), 220);
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(10, 10, 490, 490);
        let b = Rect::new(10, 510, 490, 490);
        assert_eq!(a.union(&b), Rect::new(10, 10, 490, 990));
    }

    #[test]
    fn rect_union_floors_at_one_pixel() {
        let a = Rect::new(5, 5, 0, 0);
        let u = a.union(&a);
        assert_eq!(u.width, 1);
        assert_eq!(u.height, 1);
    }

    #[test]
    fn rect_edges_saturate_at_max() {
        let far = Rect::new(i32::MAX, i32::MAX, 1, 1);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MAX);
        let u = Rect::new(0, 0, 10, 10).union(&far);
        assert_eq!(u, Rect::new(0, 0, i32::MAX, i32::MAX));
    }

    #[test]
    fn rect_overlap_detection() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(a.overlaps(&Rect::new(50, 50, 100, 100)));
        // Touching edges do not overlap
        assert!(!a.overlaps(&Rect::new(100, 0, 100, 100)));
        assert!(!a.overlaps(&Rect::new(0, 110, 100, 100)));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0, 0, 1920, 1080);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn pane_id_display() {
        assert_eq!(PaneId(42).to_string(), "pane-42");
    }

    #[test]
    fn pane_id_orders_by_admission() {
        assert!(PaneId(1) < PaneId(2));
    }

    #[test]
    fn pane_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PaneId(1));
        set.insert(PaneId(2));
        set.insert(PaneId(1));
        assert_eq!(set.len(), 2);
    }
}
