use crate::permissions::{Mode, Perms};

/// Well-known rendezvous path. Readers and writers of different privilege
/// levels open this path independently; nothing else about them is known here.
pub const PIPE_PATH: &str = "/data/local/tmp/share";

/// No owner or group bits; the "other" class gets read, write, and execute.
pub fn pipe_mode() -> Mode {
    Mode::from_perms(
        Perms::from_bools(false, false, false),
        Perms::from_bools(false, false, false),
        Perms::from_bools(true, true, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_mode_is_other_rwx() {
        assert_eq!(pipe_mode().as_int(), 0o007);
    }
}
