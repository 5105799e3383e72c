use charta_generator::progress::{ease, progress};

#[test]
fn anchor_is_zero_and_last_visit_is_one() {
    assert_eq!(progress(1, 1, 12), 0.0);
    assert_eq!(progress(12, 1, 12), 1.0);
    assert_eq!(progress(5, 5, 3), 0.0);
    assert_eq!(progress(7, 5, 3), 1.0);
}

#[test]
fn strictly_increasing_inside_the_window() {
    let mut last = -1.0;
    for index in 3..=22 {
        let p = progress(index, 3, 20);
        assert!(p > last, "progress did not increase at visit {index}");
        assert!((0.0..=1.0).contains(&p));
        last = p;
    }
}

#[test]
fn clamped_outside_the_window() {
    assert_eq!(progress(1, 4, 10), 0.0);
    assert_eq!(progress(40, 4, 10), 1.0);
}

#[test]
fn one_visit_course() {
    assert_eq!(progress(1, 1, 1), 0.0);
    assert_eq!(progress(2, 1, 1), 1.0);
}

#[test]
fn ease_is_front_loaded_and_monotone() {
    assert_eq!(ease(0.0), 0.0);
    assert_eq!(ease(1.0), 1.0);
    assert!(ease(0.5) > 0.5);
    let mut last = 0.0;
    for step in 1..=100 {
        let value = ease(f64::from(step) / 100.0);
        assert!(value >= last);
        last = value;
    }
    assert_eq!(ease(-0.3), 0.0);
    assert_eq!(ease(1.7), 1.0);
}
