// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of a STARK-friendly prime field with modulus $3 \cdot 2^{30} + 1$.
//!
//! Elements are stored in their canonical form using `u64` as the backing type. All
//! operations are performed via 128-bit widening followed by a modular reduction; this
//! field was chosen for clarity of the protocol rather than for arithmetic performance.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand::Rng;

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

// Field modulus = 3 * 2^30 + 1
const M: u64 = 3221225473;

// FIELD ELEMENT
// ================================================================================================

/// Represents a base field element.
///
/// Internal values are stored in their canonical form in the range [0, M). The backing type
/// is `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct BaseElement(u64);

impl BaseElement {
    /// Field modulus.
    pub const MODULUS: u64 = M;

    /// Additive identity.
    pub const ZERO: Self = BaseElement(0);

    /// Multiplicative identity.
    pub const ONE: Self = BaseElement(1);

    /// A generator of the entire multiplicative group of the field; its order is MODULUS - 1.
    ///
    /// sage: GF(3221225473).primitive_element() \
    /// 5
    pub const GENERATOR: Self = BaseElement(5);

    /// The largest v such that 2^v divides MODULUS - 1.
    ///
    /// sage: factor(3221225473 - 1) \
    /// 2^30 * 3
    pub const TWO_ADICITY: u32 = 30;

    /// A root of unity of order 2^30.
    ///
    /// sage: GF(3221225473).primitive_element()^3 \
    /// 125
    pub const TWO_ADIC_ROOT_OF_UNITY: Self = BaseElement(125);

    /// Creates a new field element from a u64 value. If the value is greater than or equal
    /// to the field modulus, modular reduction is silently performed. This function can also
    /// be used to initialize constants.
    pub const fn new(value: u64) -> Self {
        BaseElement(value % M)
    }

    /// Returns the canonical integer representation of this element.
    pub const fn as_int(&self) -> u64 {
        self.0
    }

    /// Computes the multiplicative inverse of this element using Fermat's little theorem.
    ///
    /// # Panics
    /// Panics if this element is ZERO.
    pub fn inv(self) -> Self {
        assert!(self != Self::ZERO, "cannot compute an inverse of zero");
        self.exp(M - 2)
    }

    /// Exponentiates this element by the specified non-negative power.
    pub fn exp(self, power: u64) -> Self {
        let mut b = self;
        let mut p = power;
        let mut r = Self::ONE;
        while p > 0 {
            if p & 1 == 1 {
                r *= b;
            }
            b *= b;
            p >>= 1;
        }
        r
    }

    /// Returns an element drawn uniformly at random from the entire field using the
    /// provided source of randomness.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        BaseElement(rng.gen_range(0..M))
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add(self.0, rhs.0))
    }
}

impl AddAssign for BaseElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub(self.0, rhs.0))
    }
}

impl SubAssign for BaseElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul(self.0, rhs.0))
    }
}

impl MulAssign for BaseElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Div for BaseElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl DivAssign for BaseElement {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(sub(0, self.0))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into a field element, reducing it modulo the field modulus.
    fn from(value: u64) -> Self {
        BaseElement::new(value)
    }
}

impl From<u32> for BaseElement {
    /// Converts a 32-bit value into a field element.
    fn from(value: u32) -> Self {
        BaseElement::new(value as u64)
    }
}

impl From<u8> for BaseElement {
    /// Converts an 8-bit value into a field element.
    fn from(value: u8) -> Self {
        BaseElement(value as u64)
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Computes (a + b) % m; a and b are assumed to be valid field elements.
const fn add(a: u64, b: u64) -> u64 {
    let z = a + b;
    if z >= M {
        z - M
    } else {
        z
    }
}

/// Computes (a - b) % m; a and b are assumed to be valid field elements.
const fn sub(a: u64, b: u64) -> u64 {
    if a < b {
        M - b + a
    } else {
        a - b
    }
}

/// Computes (a * b) % m; a and b are assumed to be valid field elements.
const fn mul(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % M as u128) as u64
}
