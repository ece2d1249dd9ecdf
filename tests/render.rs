#![cfg(feature = "in_memory")]

use linebar::{Alignment, AppearanceUpdate, InMemoryTerm, ProgressBar, ProgressDrawTarget};
use pretty_assertions::assert_eq;

fn bar(in_mem: &InMemoryTerm, length: usize) -> ProgressBar {
    ProgressBar::with_draw_target(length, ProgressDrawTarget::term_like(Box::new(in_mem.clone())))
}

#[test]
fn basic_progress_bar() {
    let in_mem = InMemoryTerm::new(10, 50);
    let pb = bar(&in_mem, 10);

    assert_eq!(in_mem.contents(), String::new());

    pb.update(0, 10).unwrap();
    assert_eq!(in_mem.contents().trim_start(), "[----------]   0.0%");

    pb.update(5, 10).unwrap();
    assert_eq!(in_mem.contents().trim_start(), "[#####-----]  50.0%");

    pb.update(10, 10).unwrap();
    assert_eq!(in_mem.contents().trim_start(), "[##########] 100.0%");
}

#[test]
fn redraws_stay_on_one_line() {
    let in_mem = InMemoryTerm::new(10, 60);
    let mut pb = bar(&in_mem, 20);
    pb.set_message("Updating...").unwrap();

    for value in 0..50 {
        pb.update(value, 50).unwrap();
        assert_eq!(in_mem.contents().lines().count(), 1);
        assert_eq!(in_mem.cursor_position(), (0, 0));
    }
    pb.update(50, 50).unwrap();
    assert_eq!(in_mem.cursor_position().0, 1);

    let screen = in_mem.contents();
    assert!(screen.starts_with("Updating... "));
    assert!(screen.ends_with("[####################] 100.0%"));
}

#[test]
fn next_bar_starts_on_fresh_line() {
    let in_mem = InMemoryTerm::new(10, 50);
    let first = bar(&in_mem, 10).with_alignment(Alignment::Left);
    first.update(4, 4).unwrap();

    // the finished bar stays put and the next one draws on the line below
    let mut second = bar(&in_mem, 10).with_alignment(Alignment::Left);
    second.set_message("second").unwrap();
    second.update(1, 4).unwrap();

    let screen = in_mem.contents();
    let lines: Vec<_> = screen.lines().map(str::trim_end).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[##########] 100.0%");
    assert!(lines[1].trim_start().starts_with("[###-------]  25.0%"));
    assert!(lines[1].ends_with("second"));
}

#[test]
fn restyled_bar() {
    let in_mem = InMemoryTerm::new(10, 40);
    let mut pb = bar(&in_mem, 40);
    pb.set_appearance(
        AppearanceUpdate::new()
            .fill("=")
            .empty(".")
            .left("|")
            .right("|")
            .color_name("magenta")
            .length(16),
    );

    pb.update(3, 4).unwrap();
    assert_eq!(in_mem.contents().trim_start(), "|============....|  75.0%");
}
