//! Domain types for allocation backtrace dumps
//!
//! Records borrow from the input line they were parsed from and are dropped
//! once their output line has been written.

use std::fmt;

/// Instruction address taken from a dumped backtrace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub u64);

impl Address {
    /// Parse a hexadecimal address token, with or without a `0x` prefix.
    ///
    /// Returns `None` for anything that is not a valid 64-bit hex number.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() {
            return None;
        }
        u64::from_str_radix(digits, 16).ok().map(Address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// One line of a memory dump: `<size> <count> <addr_1> ... <addr_n>`
///
/// `size` and `count` are kept as text. `size` is copied verbatim into the
/// output line and `count` is only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub size: &'a str,
    pub count: &'a str,
    pub addresses: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a dump line on its first two spaces.
    ///
    /// Returns `None` when the line has fewer than three space separated
    /// fields. Address tokens are not validated here.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.splitn(3, ' ');
        let size = fields.next()?;
        let count = fields.next()?;
        let rest = fields.next()?;

        let addresses = rest.trim().split(' ').filter(|token| !token.is_empty()).collect();

        Some(Self { size, count, addresses })
    }
}
