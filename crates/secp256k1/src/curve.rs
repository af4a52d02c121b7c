//! Generic short-Weierstrass curve points over [`FieldElement`].
//!
//! Infinity is its own variant rather than the sentinel coordinate pair `(0, 0)` some
//! implementations use — a curve that legitimately passes through `(0, 0)` could never be told
//! apart from the point at infinity under that scheme.
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{Secp256k1Error, Secp256k1Result};
use crate::field::FieldElement;

/// A point on a short-Weierstrass curve `y^2 = x^3 + ax + b` over `GF(p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The identity element of the curve's group.
    Infinity {
        /// The curve's `a` coefficient.
        a: FieldElement,
        /// The curve's `b` coefficient.
        b: FieldElement,
    },
    /// A finite point `(x, y)` known to satisfy the curve equation.
    Affine {
        /// x-coordinate.
        x: FieldElement,
        /// y-coordinate.
        y: FieldElement,
        /// The curve's `a` coefficient.
        a: FieldElement,
        /// The curve's `b` coefficient.
        b: FieldElement,
    },
}

impl Point {
    /// Construct the point at infinity for the curve described by `a`, `b`.
    pub fn infinity(a: FieldElement, b: FieldElement) -> Point {
        Point::Infinity { a, b }
    }

    /// Construct an affine point, checking it lies on the curve `y^2 = x^3 + ax + b`.
    pub fn new_affine(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Secp256k1Result<Point> {
        let lhs = y.mul(&y)?;
        let rhs = x
            .mul(&x)?
            .mul(&x)?
            .add(&a.mul(&x)?)?
            .add(&b)?;
        if lhs != rhs {
            return Err(Secp256k1Error::PointNotOnCurve);
        }
        Ok(Point::Affine { x, y, a, b })
    }

    fn coeffs(&self) -> (&FieldElement, &FieldElement) {
        match self {
            Point::Infinity { a, b } => (a, b),
            Point::Affine { a, b, .. } => (a, b),
        }
    }

    /// The point's x-coordinate, if it is not the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity { .. } => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The point's y-coordinate, if it is not the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity { .. } => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// True if this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity { .. })
    }

    fn check_domain(&self, other: &Point) -> Secp256k1Result<()> {
        let (a1, b1) = self.coeffs();
        let (a2, b2) = other.coeffs();
        if a1 != a2 || b1 != b2 {
            return Err(Secp256k1Error::DomainMismatch);
        }
        Ok(())
    }

    /// Point addition, per the short-Weierstrass group law.
    pub fn add(&self, other: &Point) -> Secp256k1Result<Point> {
        self.check_domain(other)?;
        match (self, other) {
            (Point::Infinity { .. }, _) => Ok(other.clone()),
            (_, Point::Infinity { .. }) => Ok(self.clone()),
            (
                Point::Affine { x: x1, y: y1, a, b },
                Point::Affine { x: x2, y: y2, .. },
            ) => {
                if x1 == x2 && y1 != y2 {
                    // P + (-P) = O
                    return Ok(Point::Infinity {
                        a: a.clone(),
                        b: b.clone(),
                    });
                }
                if x1 != x2 {
                    let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
                    let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
                    let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
                    return Point::new_affine(x3, y3, a.clone(), b.clone());
                }
                if y1.is_zero() {
                    // P == -P with y == 0: tangent is vertical, doubling gives infinity.
                    return Ok(Point::Infinity {
                        a: a.clone(),
                        b: b.clone(),
                    });
                }
                // x1 == x2, y1 == y2: point doubling.
                let two = FieldElement::new(BigUint::from(2u32), x1.prime().clone());
                let three = FieldElement::new(BigUint::from(3u32), x1.prime().clone());
                let slope = three
                    .mul(&x1.mul(x1)?)?
                    .add(a)?
                    .div(&two.mul(y1)?)?;
                let x3 = slope.mul(&slope)?.sub(&x1.add(x1)?)?;
                let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
                Point::new_affine(x3, y3, a.clone(), b.clone())
            }
        }
    }

    /// Scalar multiplication `scalar * self`, via double-and-add.
    ///
    /// `scalar` is a signed [`BigInt`] so that a negative coefficient is rejected explicitly
    /// rather than silently reinterpreted; every caller in this crate only ever has non-negative
    /// scalars in hand (nonces, private keys), so this is a defensive boundary, not a live path.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Secp256k1Result<Point> {
        if scalar.sign() == Sign::Minus {
            return Err(Secp256k1Error::NegativeScalar);
        }
        let (_, mut coefficient) = scalar.clone().into_parts();
        let (a, b) = self.coeffs();
        let mut current = self.clone();
        let mut result = Point::Infinity {
            a: a.clone(),
            b: b.clone(),
        };
        while !coefficient.is_zero() {
            if &coefficient & BigUint::from(1u32) == BigUint::from(1u32) {
                result = result.add(&current)?;
            }
            current = current.add(&current)?;
            coefficient >>= 1;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fe(num: i64, prime: u64) -> FieldElement {
        let num = if num < 0 {
            BigUint::from(prime) - BigUint::from((-num) as u64)
        } else {
            BigUint::from(num as u64)
        };
        FieldElement::new(num, BigUint::from(prime))
    }

    // y^2 = x^3 + 7 over GF(223), a small test curve with easy-to-hand-check arithmetic.
    const PRIME: u64 = 223;

    fn curve_coeffs() -> (FieldElement, FieldElement) {
        (fe(0, PRIME), fe(7, PRIME))
    }

    #[test]
    fn it_accepts_points_on_the_curve() {
        let (a, b) = curve_coeffs();
        let valid = [(192, 105), (17, 56), (1, 193)];
        for (x, y) in valid {
            assert!(Point::new_affine(fe(x, PRIME), fe(y, PRIME), a.clone(), b.clone()).is_ok());
        }
    }

    #[test]
    fn it_rejects_points_off_the_curve() {
        let (a, b) = curve_coeffs();
        let invalid = [(200, 119), (42, 99)];
        for (x, y) in invalid {
            assert!(Point::new_affine(fe(x, PRIME), fe(y, PRIME), a.clone(), b.clone()).is_err());
        }
    }

    #[test]
    fn it_adds_distinct_points() {
        let (a, b) = curve_coeffs();
        let p1 = Point::new_affine(fe(192, PRIME), fe(105, PRIME), a.clone(), b.clone()).unwrap();
        let p2 = Point::new_affine(fe(17, PRIME), fe(56, PRIME), a.clone(), b.clone()).unwrap();
        let sum = p1.add(&p2).unwrap();
        assert_eq!(sum.x().unwrap().num(), &BigUint::from(170u32));
        assert_eq!(sum.y().unwrap().num(), &BigUint::from(142u32));
    }

    #[test]
    fn it_adds_identity() {
        let (a, b) = curve_coeffs();
        let p1 = Point::new_affine(fe(192, PRIME), fe(105, PRIME), a.clone(), b.clone()).unwrap();
        let inf = Point::infinity(a, b);
        assert_eq!(p1.add(&inf).unwrap(), p1);
    }

    #[test]
    fn it_doubles_a_point() {
        let (a, b) = curve_coeffs();
        let p1 = Point::new_affine(fe(192, PRIME), fe(105, PRIME), a.clone(), b.clone()).unwrap();
        let doubled = p1.add(&p1).unwrap();
        assert_eq!(doubled.x().unwrap().num(), &BigUint::from(49u32));
        assert_eq!(doubled.y().unwrap().num(), &BigUint::from(71u32));
    }

    #[test]
    fn it_scalar_multiplies_to_infinity_at_group_order() {
        let (a, b) = curve_coeffs();
        let g = Point::new_affine(fe(15, PRIME), fe(86, PRIME), a.clone(), b.clone()).unwrap();
        // order of (15, 86) on this toy curve is 7
        let result = g.scalar_mul(&BigInt::from(7)).unwrap();
        assert!(result.is_infinity());
    }

    #[test]
    fn it_rejects_negative_scalars() {
        let (a, b) = curve_coeffs();
        let g = Point::new_affine(fe(15, PRIME), fe(86, PRIME), a, b).unwrap();
        assert!(matches!(
            g.scalar_mul(&BigInt::from(-1)),
            Err(Secp256k1Error::NegativeScalar)
        ));
    }
}
