/// The owner/group/other permission classes of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub user: Perms,
    pub group: Perms,
    pub other: Perms,
}

impl Mode {
    // Splits an octal number into per-class permissions
    pub fn new(mode: u16) -> Result<Self, ()> {
        if mode > 0o777 {
            return Err(());
        }

        Ok(Mode {
            user: Perms::new((mode >> 6) & 0o7).unwrap(),
            group: Perms::new((mode >> 3) & 0o7).unwrap(),
            other: Perms::new(mode & 0o7).unwrap(),
        })
    }

    pub fn from_perms(user: Perms, group: Perms, other: Perms) -> Self {
        Mode { user, group, other }
    }

    pub fn as_int(&self) -> u16 {
        (self.user.as_int() << 6) | (self.group.as_int() << 3) | self.other.as_int()
    }

    // What the creation syscall expects
    pub fn as_mode_t(&self) -> libc::mode_t {
        libc::mode_t::from(self.as_int())
    }
}

/// One class's read/write/execute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perms {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Perms {
    pub fn new(bits: u16) -> Result<Self, ()> {
        if bits > 0b111 {
            return Err(());
        }

        Ok(Perms {
            read: bits & 0b100 != 0,
            write: bits & 0b010 != 0,
            execute: bits & 0b001 != 0,
        })
    }

    pub fn from_bools(r: bool, w: bool, x: bool) -> Self {
        Perms {
            read: r,
            write: w,
            execute: x,
        }
    }

    pub fn as_int(&self) -> u16 {
        (self.read as u16) << 2 | (self.write as u16) << 1 | self.execute as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_class_only() {
        let mode = Mode::new(0o007).unwrap();
        assert_eq!(mode.user.as_int(), 0);
        assert_eq!(mode.group.as_int(), 0);
        assert!(mode.other.read && mode.other.write && mode.other.execute);
        assert_eq!(mode.as_mode_t(), 0o007);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Mode::new(0o1000).is_err());
        assert!(Perms::new(0b1000).is_err());
    }

    #[test]
    fn perms_match_their_octal_digit() {
        let rw = Perms::from_bools(true, true, false);
        assert_eq!(rw.as_int(), 0o6);
        assert_eq!(Mode::from_perms(rw, rw, Perms::new(0o4).unwrap()).as_int(), 0o664);
    }
}
