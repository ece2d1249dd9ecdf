use std::thread;
use std::time::Duration;

use linebar::{Alignment, AppearanceUpdate, ProgressBar};

fn main() {
    let styles = [
        ("Hashes:", "#", "-", "[", "]", "default"),
        ("Equals:", "=", " ", "|", "|", "yellow"),
        ("Blocks:", "█", "░", "▕", "▏", "green"),
        ("Dots:  ", "●", "·", "(", ")", "magenta"),
    ];

    for (msg, fill, empty, left, right, color) in styles {
        let mut pb = ProgressBar::new(30).with_alignment(Alignment::Left);
        pb.set_appearance(
            AppearanceUpdate::new()
                .fill(fill)
                .empty(empty)
                .left(left)
                .right(right)
                .color_name(color),
        );
        pb.set_message(msg).unwrap();
        for i in 0..=60 {
            pb.update(i, 60).unwrap();
            thread::sleep(Duration::from_millis(20));
        }
    }
}
