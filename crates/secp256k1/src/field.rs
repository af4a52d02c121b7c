//! Prime-field arithmetic over `GF(prime)`, used by [`crate::curve`] for point coordinates.
use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Secp256k1Error, Secp256k1Result};

/// An element of `GF(prime)`.
///
/// `num` is always kept reduced into `[0, prime)`; there is no way to construct a
/// [`FieldElement`] holding an out-of-range representative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}

impl FieldElement {
    /// Construct an element of `GF(prime)`, reducing `num` into range first.
    pub fn new(num: BigUint, prime: BigUint) -> Self {
        FieldElement {
            num: num % &prime,
            prime,
        }
    }

    /// The element's representative in `[0, prime)`.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// The prime modulus this element belongs to.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    fn check_domain(&self, other: &FieldElement) -> Secp256k1Result<()> {
        if self.prime != other.prime {
            return Err(Secp256k1Error::DomainMismatch);
        }
        Ok(())
    }

    /// `self + other`.
    pub fn add(&self, other: &FieldElement) -> Secp256k1Result<FieldElement> {
        self.check_domain(other)?;
        Ok(FieldElement::new(&self.num + &other.num, self.prime.clone()))
    }

    /// `self - other`, computed without relying on `BigUint` wraparound.
    pub fn sub(&self, other: &FieldElement) -> Secp256k1Result<FieldElement> {
        self.check_domain(other)?;
        let sum = &self.num + &self.prime - &other.num;
        Ok(FieldElement::new(sum, self.prime.clone()))
    }

    /// `self * other`.
    pub fn mul(&self, other: &FieldElement) -> Secp256k1Result<FieldElement> {
        self.check_domain(other)?;
        Ok(FieldElement::new(&self.num * &other.num, self.prime.clone()))
    }

    /// Multiply by a plain `BigUint` scalar rather than another field element, useful for curve
    /// coefficients like `3` in the point-doubling slope.
    pub fn scale(&self, scalar: &BigUint) -> FieldElement {
        FieldElement::new(&self.num * scalar, self.prime.clone())
    }

    /// `self ^ exponent`, for any signed `exponent`.
    ///
    /// The exponent is first reduced modulo `prime - 1` (Fermat's little theorem), then
    /// `BigUint::modpow` carries out a constant-size modular exponentiation in the reduced range.
    pub fn pow(&self, exponent: &BigInt) -> FieldElement {
        let order = BigInt::from_biguint(Sign::Plus, &self.prime - BigUint::one());
        let mut reduced = exponent % &order;
        if reduced.sign() == Sign::Minus {
            reduced += &order;
        }
        let (_, reduced_uint) = reduced.into_parts();
        FieldElement::new(self.num.modpow(&reduced_uint, &self.prime), self.prime.clone())
    }

    /// `self / other`, via `self * other^(prime - 2)` (Fermat's little theorem inverse).
    pub fn div(&self, other: &FieldElement) -> Secp256k1Result<FieldElement> {
        self.check_domain(other)?;
        if other.num.is_zero() {
            return Err(Secp256k1Error::DivisionByZero);
        }
        let exponent = BigInt::from_biguint(Sign::Plus, &self.prime - BigUint::from(2u32));
        let inverse = other.pow(&exponent);
        self.mul(&inverse)
    }

    /// True if `self` is the additive identity of its field.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}
