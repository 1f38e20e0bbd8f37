use mkshare::fifo;
use mkshare::permissions::Mode;

fn main() {
    let perm = Mode::new(0o644).unwrap();
    fifo::create("test.fifo", perm).unwrap();
}
