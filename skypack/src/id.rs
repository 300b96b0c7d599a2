use std::fmt;

/// Caller-assigned identity of a rectangle.
///
/// Skypack never generates these itself. Callers usually use the index of the
/// rectangle in their own collection, which is what
/// [`pack_dimensions`][crate::pack_dimensions] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    #[inline]
    pub fn new(value: u64) -> Self {
        Id(value)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value)
    }
}

impl From<usize> for Id {
    fn from(value: usize) -> Self {
        Id(value as u64)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
