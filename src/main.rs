use mkshare::config;
use mkshare::fifo;

// Arguments are accepted but never consumed, and the exit status is 0 even
// when creation fails; callers learn of failure from stdout only.
fn main() {
    if fifo::create(config::PIPE_PATH, config::pipe_mode()).is_err() {
        print!("Error creating pipe");
    }
}
