use std::thread;
use std::time::Duration;

use linebar::ProgressBar;

fn main() {
    let mut pb = ProgressBar::new(40);
    pb.set_message("Updating...").unwrap();
    for i in 0..=250 {
        pb.update(i, 250).unwrap();
        thread::sleep(Duration::from_millis(12));
    }
}
