//!
//! An executable model of `test_project/src/Counter.sol`, the contract the
//! linter's fixture project is built around. The model follows Solidity's
//! checked arithmetic: a call that overflows reverts and leaves every field as it
//! was.
//!

use std::error::Error;
use std::fmt;

/// A 256-bit unsigned integer, as two 128-bit halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint256 {
    hi: u128,
    lo: u128,
}

impl Uint256 {
    pub const ZERO: Uint256 = Uint256 { hi: 0, lo: 0 };
    pub const ONE: Uint256 = Uint256 { hi: 0, lo: 1 };
    pub const MAX: Uint256 = Uint256 {
        hi: u128::MAX,
        lo: u128::MAX,
    };

    pub const fn from_parts(hi: u128, lo: u128) -> Self {
        Uint256 { hi, lo }
    }

    /// Addition that fails instead of wrapping
    pub fn checked_add(self, other: Uint256) -> Option<Uint256> {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self.hi.checked_add(other.hi)?.checked_add(carry as u128)?;
        Some(Uint256 { hi, lo })
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Uint256 { hi: 0, lo: value }
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "0x{:x}{:032x}", self.hi, self.lo)
        }
    }
}

/// Why a call was reverted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revert {
    /// Checked arithmetic overflowed, `Panic(0x11)` on chain
    ArithmeticOverflow,
}

impl Revert {
    /// The Solidity panic code for this revert
    pub fn panic_code(self) -> u8 {
        match self {
            Revert::ArithmeticOverflow => 0x11,
        }
    }
}

impl fmt::Display for Revert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revert::ArithmeticOverflow => write!(
                f,
                "Panic({:#04x}): arithmetic underflow or overflow",
                self.panic_code()
            ),
        }
    }
}

impl Error for Revert {}

/// `bad_constant`
pub const BAD_CONSTANT: Uint256 = Uint256::ONE;

/// Values assigned by the constructor
pub const GOOD_IMMUTABLE_VALUE: u128 = 2000;
pub const BAD_IMMUTABLE_VALUE: u128 = 5;

/// What `_internalHasLeadingUnderscore` adds to `number`
pub const INTERNAL_PROBE_STEP: u128 = 1000;

/// The deployed state of a `Counter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    good_immutable: Uint256,
    bad_immutable: Uint256,
    number: Uint256,
}

impl Counter {
    /// Runs the constructor
    pub fn deploy() -> Self {
        Counter {
            good_immutable: GOOD_IMMUTABLE_VALUE.into(),
            bad_immutable: BAD_IMMUTABLE_VALUE.into(),
            number: Uint256::ZERO,
        }
    }

    /// `_GOOD__IMMUTABLE_`
    pub fn good_immutable(&self) -> Uint256 {
        self.good_immutable
    }

    /// `badImmutable`
    pub fn bad_immutable(&self) -> Uint256 {
        self.bad_immutable
    }

    /// `bad_constant`
    pub fn bad_constant(&self) -> Uint256 {
        BAD_CONSTANT
    }

    pub fn number(&self) -> Uint256 {
        self.number
    }

    pub fn set_number(&mut self, new_number: Uint256) {
        self.number = new_number;
    }

    pub fn increment(&mut self) -> Result<(), Revert> {
        self.add_to_number(Uint256::ONE)
    }

    // Naming convention probes. Internal ones are crate visible, private ones
    // aren't visible at all; none of them are called by the contract itself.

    #[allow(dead_code)]
    pub(crate) fn internal_should_have_leading_underscore(&mut self) {}

    #[allow(dead_code)]
    pub(crate) fn _internal_has_leading_underscore(&mut self) -> Result<(), Revert> {
        self.add_to_number(INTERNAL_PROBE_STEP.into())
    }

    #[allow(dead_code)]
    fn private_should_have_leading_underscore(&mut self) {}

    #[allow(dead_code)]
    fn _private_has_leading_underscore(&mut self) {}

    fn add_to_number(&mut self, amount: Uint256) -> Result<(), Revert> {
        self.number = self
            .number
            .checked_add(amount)
            .ok_or(Revert::ArithmeticOverflow)?;
        Ok(())
    }
}
