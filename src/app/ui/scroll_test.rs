use super::*;

#[test]
fn test_last_snaps_to_bottom() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 20);
    scroll.last();
    assert_eq!(scroll.position, 80);
    assert!(scroll.is_at_bottom());
}

#[test]
fn test_last_with_short_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 20);
    scroll.last();
    assert_eq!(scroll.position, 0);
    assert!(scroll.is_at_bottom());
}

#[test]
fn test_down_clamps_at_bottom() {
    let mut scroll = Scroll::default();
    scroll.set_state(25, 20);
    for _ in 0..50 {
        scroll.down();
    }
    assert_eq!(scroll.position, 5);
}

#[test]
fn test_up_clamps_at_top() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 20);
    scroll.up();
    assert_eq!(scroll.position, 0);
    scroll.page_up();
    assert_eq!(scroll.position, 0);
}

#[test]
fn test_growing_content_keeps_bottom_reachable() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 20);
    scroll.last();
    assert_eq!(scroll.position, 10);

    // a new message arrives
    scroll.set_state(36, 20);
    assert!(!scroll.is_at_bottom());
    scroll.last();
    assert_eq!(scroll.position, 16);
}
