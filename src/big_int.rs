//! # BigSignedInt
//! Immutable arbitrary-precision signed integers, stored as a fixed-capacity bit vector plus a sign flag.
//! Every operation returns a new value. Operands are never touched, so a value can be shared freely.
//! # Example
//! ```
//! use big_signed_int::BigSignedInt;
//!
//! let a: BigSignedInt = "-123".parse().unwrap();
//! let b = BigSignedInt::from(7);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a = {:b} (binary)", a);
//!
//! let (q, r) = a.divide(&b).unwrap();
//! assert_eq!(q.to_string(), "-17");
//! assert_eq!(r.to_string(), "-4");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub, Mul, Div, Rem, Neg};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::big_num_error::{BigNumError, BigNumResult};

#[derive(Debug, Clone)]
pub struct BigSignedInt {
    /// magnitude, index 0 is the least significant bit. `digits.len()` is the capacity.
    digits: Vec<bool>,
    /// true for values >= 0, zero is always positive
    positive: bool,
    /// index of the most significant set bit, 0 for zero
    high: usize,
}

// 实现构造
impl BigSignedInt {
    /// Creates a zero with room for `bits` bits.
    pub fn new(bits: usize) -> BigNumResult<BigSignedInt> {
        if bits < 1 {
            return Err(BigNumError::InvalidCapacity { bits });
        }
        Ok(BigSignedInt::zeroed(bits))
    }

    fn zeroed(bits: usize) -> BigSignedInt {
        debug_assert!(bits >= 1);
        BigSignedInt { digits: vec![false; bits.max(1)], positive: true, high: 0 }
    }

    /// Sets bit `index` of a value still under construction.
    fn set(&mut self, index: usize) -> BigNumResult<()> {
        match self.digits.get_mut(index) {
            Some(digit) => *digit = true,
            None => return Err(BigNumError::Overflow { index, bits: self.digits.len() }),
        }
        if index > self.high {
            self.high = index;
        }
        Ok(())
    }

    /// Attaches a sign, keeping zero positive.
    fn signed(mut self, positive: bool) -> BigSignedInt {
        self.positive = positive || self.is_zero();
        self
    }
}

impl Default for BigSignedInt {
    fn default() -> Self {
        BigSignedInt::zeroed(DEFAULT_BITS)
    }
}

// 杂项辅助函数
impl BigSignedInt {
    pub fn capacity_bits(&self) -> usize {
        self.digits.len()
    }
    pub fn used_bits(&self) -> usize {
        self.high + 1
    }
    pub fn unused_bits(&self) -> usize {
        self.digits.len() - self.high - 1
    }
    pub fn is_zero(&self) -> bool {
        self.high == 0 && !self.digits[0]
    }
    pub fn is_negative(&self) -> bool {
        !self.positive
    }
    /// Bit `index` of the magnitude, false past the highest used bit.
    pub fn bit(&self, index: usize) -> bool {
        index <= self.high && self.digits[index]
    }
    fn is_magnitude_one(&self) -> bool {
        self.high == 0 && self.digits[0]
    }
    /// Value of a magnitude known to fit in a u64.
    fn small_value(&self) -> u64 {
        (0..=self.high)
            .rev()
            .fold(0, |acc, i| (acc << 1) | self.digits[i] as u64)
    }

    /// Capacity of the result of a binary operation.
    ///
    /// `a.used_bits() + b.used_bits()` bits always hold a sum, difference or product.
    /// If neither operand has that much room the result gets twice as much,
    /// otherwise it reuses the smallest operand capacity that fits.
    fn result_bits(a: &BigSignedInt, b: &BigSignedInt) -> usize {
        let combined = a.used_bits() + b.used_bits();
        let smaller = a.capacity_bits().min(b.capacity_bits());
        let larger = a.capacity_bits().max(b.capacity_bits());
        if combined > larger {
            debug!("growing to {} bits, {} used bits exceed both {} and {}",
                   2 * combined, combined, smaller, larger);
            2 * combined
        } else if combined > smaller {
            larger
        } else {
            smaller
        }
    }

    /// |self| << n, in a new value of `bits` bits.
    fn shl_mag(&self, n: usize, bits: usize) -> BigNumResult<BigSignedInt> {
        let mut shifted = BigSignedInt::zeroed(bits);
        for i in 0..=self.high {
            if self.digits[i] {
                shifted.set(i + n)?;
            }
        }
        Ok(shifted)
    }
}

// 实现大小比较
impl BigSignedInt {
    fn compare_mag(&self, other: &BigSignedInt) -> Ordering {
        if self.high != other.high {
            return self.high.cmp(&other.high);
        }
        for i in (0..=self.high).rev() {
            match (self.digits[i], other.digits[i]) {
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                _ => {}
            }
        }
        Ordering::Equal
    }

    fn is_less(&self, other: &BigSignedInt) -> bool {
        // only sound because zero is never negative
        if self.positive != other.positive {
            return !self.positive;
        }
        match self.compare_mag(other) {
            Ordering::Less => self.positive,
            Ordering::Greater => !self.positive,
            Ordering::Equal => false,
        }
    }
}

impl PartialEq for BigSignedInt {
    fn eq(&self, other: &Self) -> bool {
        self.positive == other.positive
            && self.high == other.high
            && self.digits[..=self.high] == other.digits[..=other.high]
    }
}
impl Eq for BigSignedInt {}

impl Hash for BigSignedInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.positive.hash(state);
        self.digits[..=self.high].hash(state);
    }
}

impl PartialOrd for BigSignedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        self.is_less(other)
    }
    fn gt(&self, other: &Self) -> bool {
        other.is_less(self)
    }
    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }
    fn ge(&self, other: &Self) -> bool {
        self.gt(other) || self == other
    }
}

impl Ord for BigSignedInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_less(other) {
            Ordering::Less
        } else if self == other {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

// 实现绝对值和取反
impl BigSignedInt {
    pub fn abs(&self) -> BigSignedInt {
        self.clone().signed(true)
    }
    fn negated(&self) -> BigSignedInt {
        let positive = !self.positive;
        self.clone().signed(positive)
    }
}

impl Neg for BigSignedInt {
    type Output = BigSignedInt;

    fn neg(self) -> Self::Output {
        let positive = !self.positive;
        self.signed(positive)
    }
}

impl Neg for &BigSignedInt {
    type Output = BigSignedInt;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// 实现加法
impl BigSignedInt {
    pub fn try_add(&self, other: &BigSignedInt) -> BigNumResult<BigSignedInt> {
        let bits = BigSignedInt::result_bits(self, other);
        let sum = match (self.positive, other.positive) {
            (true, false) => BigSignedInt::difference(self, other, bits)?,
            (false, true) => BigSignedInt::difference(other, self, bits)?,
            (positive, _) => BigSignedInt::add_mag(self, other, positive, bits)?,
        };
        trace!("{:b} + {:b} = {:b}", self, other, sum);
        Ok(sum)
    }

    pub fn increment(&self) -> BigNumResult<BigSignedInt> {
        self.try_add(&ONE)
    }

    /// |x| + |y| carrying the given sign.
    fn add_mag(x: &BigSignedInt, y: &BigSignedInt, positive: bool, bits: usize) -> BigNumResult<BigSignedInt> {
        let mut sum = BigSignedInt::zeroed(bits);
        let longest = x.high.max(y.high);
        let mut carry = false;
        // past its highest bit the shorter operand reads as zero, so only the carry moves
        for i in 0..=longest {
            let (a, b) = (x.bit(i), y.bit(i));
            if a ^ b ^ carry {
                sum.set(i)?;
            }
            carry = (a && b) || (carry && (a ^ b));
        }
        if carry {
            sum.set(longest + 1)?;
        }
        Ok(sum.signed(positive))
    }
}

// 实现减法
impl BigSignedInt {
    pub fn try_subtract(&self, other: &BigSignedInt) -> BigNumResult<BigSignedInt> {
        let bits = BigSignedInt::result_bits(self, other);
        let diff = match (self.positive, other.positive) {
            (true, true) => BigSignedInt::difference(self, other, bits)?,
            (true, false) => BigSignedInt::add_mag(self, other, true, bits)?,
            (false, true) => BigSignedInt::add_mag(self, other, false, bits)?,
            // -|x| - (-|y|) = |y| - |x|
            (false, false) => BigSignedInt::difference(other, self, bits)?,
        };
        trace!("{:b} - {:b} = {:b}", self, other, diff);
        Ok(diff)
    }

    pub fn decrement(&self) -> BigNumResult<BigSignedInt> {
        self.try_subtract(&ONE)
    }

    /// |x| - |y|, negative when |y| is the bigger magnitude.
    fn difference(x: &BigSignedInt, y: &BigSignedInt, bits: usize) -> BigNumResult<BigSignedInt> {
        match x.compare_mag(y) {
            Ordering::Less => BigSignedInt::sub_mag(y, x, false, bits),
            _ => BigSignedInt::sub_mag(x, y, true, bits),
        }
    }

    /// |big| - |little|, requires |big| >= |little|.
    fn sub_mag(big: &BigSignedInt, little: &BigSignedInt, positive: bool, bits: usize) -> BigNumResult<BigSignedInt> {
        let mut diff = BigSignedInt::zeroed(bits);
        let mut borrow = false;
        for i in 0..=big.high {
            let (a, b) = (big.bit(i), little.bit(i));
            if a ^ b ^ borrow {
                diff.set(i)?;
            }
            borrow = (!a && (b || borrow)) || (a && b && borrow);
        }
        debug_assert!(!borrow, "subtrahend larger than minuend");
        Ok(diff.signed(positive))
    }
}

// 实现乘法
impl BigSignedInt {
    pub fn try_multiply(&self, other: &BigSignedInt) -> BigNumResult<BigSignedInt> {
        let bits = BigSignedInt::result_bits(self, other);
        let positive = self.positive == other.positive;
        let product = if self.is_zero() || other.is_zero() {
            BigSignedInt::zeroed(bits)
        } else if self.is_magnitude_one() {
            other.clone().signed(positive)
        } else if other.is_magnitude_one() {
            self.clone().signed(positive)
        } else {
            BigSignedInt::shift_add(self, other, bits)?.signed(positive)
        };
        trace!("{:b} * {:b} = {:b}", self, other, product);
        Ok(product)
    }

    pub fn try_multiply_native(&self, val: i64) -> BigNumResult<BigSignedInt> {
        match val {
            1 => Ok(self.clone()),
            -1 => Ok(self.negated()),
            _ => self.try_multiply(&BigSignedInt::from(val)),
        }
    }

    /// Schoolbook multiplication of the magnitudes. The shorter operand drives the loop.
    fn shift_add(x: &BigSignedInt, y: &BigSignedInt, bits: usize) -> BigNumResult<BigSignedInt> {
        let (multiplier, multiplicand) = if x.high <= y.high { (x, y) } else { (y, x) };
        let mut product = BigSignedInt::zeroed(bits);
        for i in 0..=multiplier.high {
            if multiplier.digits[i] {
                let partial = multiplicand.shl_mag(i, bits)?;
                product = BigSignedInt::add_mag(&product, &partial, true, bits)?;
            }
        }
        Ok(product)
    }
}

// 实现除法
impl BigSignedInt {
    /// Truncating division, returns `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of `self`,
    /// so `quotient * divisor + remainder == self` and `|remainder| < |divisor|`.
    pub fn divide(&self, divisor: &BigSignedInt) -> BigNumResult<(BigSignedInt, BigSignedInt)> {
        if divisor.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        // the running remainder stays below 2 * |divisor| before each subtraction
        let remainder_bits = divisor.capacity_bits().max(divisor.used_bits() + 1);
        let mut quotient = BigSignedInt::zeroed(self.capacity_bits());
        let mut remainder = BigSignedInt::zeroed(remainder_bits);

        for i in (0..=self.high).rev() {
            let mut shifted = remainder.shl_mag(1, remainder_bits)?;
            if self.digits[i] {
                shifted.set(0)?;
            }
            remainder = if shifted.compare_mag(divisor).is_lt() {
                shifted
            } else {
                quotient.set(i)?;
                BigSignedInt::sub_mag(&shifted, divisor, true, remainder_bits)?
            };
        }

        let quotient = quotient.signed(self.positive == divisor.positive);
        let remainder = remainder.signed(self.positive);
        trace!("{:b} / {:b} = {:b} remainder {:b}", self, divisor, quotient, remainder);
        Ok((quotient, remainder))
    }

    fn checked_quotient(&self, divisor: &BigSignedInt) -> BigNumResult<BigSignedInt> {
        self.divide(divisor).map(|(quotient, _)| quotient)
    }

    fn checked_remainder(&self, divisor: &BigSignedInt) -> BigNumResult<BigSignedInt> {
        self.divide(divisor).map(|(_, remainder)| remainder)
    }
}

macro_rules! forward_binop {
    ($imp: ident, $method: ident, $checked: ident) => {
        impl $imp<&BigSignedInt> for &BigSignedInt {
            type Output = BigSignedInt;

            fn $method(self, rhs: &BigSignedInt) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(val) => val,
                    Err(err) => panic!("{:b} {} {:b}: {}", self, stringify!($method), rhs, err),
                }
            }
        }

        impl $imp for BigSignedInt {
            type Output = BigSignedInt;

            fn $method(self, rhs: Self) -> Self::Output {
                <&BigSignedInt as $imp<&BigSignedInt>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigSignedInt> for BigSignedInt {
            type Output = BigSignedInt;

            fn $method(self, rhs: &BigSignedInt) -> Self::Output {
                <&BigSignedInt as $imp<&BigSignedInt>>::$method(&self, rhs)
            }
        }

        impl $imp<BigSignedInt> for &BigSignedInt {
            type Output = BigSignedInt;

            fn $method(self, rhs: BigSignedInt) -> Self::Output {
                <&BigSignedInt as $imp<&BigSignedInt>>::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, try_add);
forward_binop!(Sub, sub, try_subtract);
forward_binop!(Mul, mul, try_multiply);
forward_binop!(Div, div, checked_quotient);
forward_binop!(Rem, rem, checked_remainder);

impl Mul<i64> for &BigSignedInt {
    type Output = BigSignedInt;

    fn mul(self, rhs: i64) -> Self::Output {
        match self.try_multiply_native(rhs) {
            Ok(val) => val,
            Err(err) => panic!("{:b} mul {}: {}", self, rhs, err),
        }
    }
}

impl Mul<i64> for BigSignedInt {
    type Output = BigSignedInt;

    fn mul(self, rhs: i64) -> Self::Output {
        &self * rhs
    }
}

impl Mul<&BigSignedInt> for i64 {
    type Output = BigSignedInt;

    fn mul(self, rhs: &BigSignedInt) -> Self::Output {
        rhs * self
    }
}

impl Mul<BigSignedInt> for i64 {
    type Output = BigSignedInt;

    fn mul(self, rhs: BigSignedInt) -> Self::Output {
        &rhs * self
    }
}

// 实现原生类型转换
macro_rules! impl_unsigned_to_big_signed_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigSignedInt {
        fn from(val: $u) -> Self {
            BigSignedInt::value_of(val as u64, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_signed_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigSignedInt {
        fn from(val: $i) -> Self {
            BigSignedInt::value_of((val as i64).unsigned_abs(), val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_signed_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_signed_int!(i8, i16, i32, isize, i64);

impl BigSignedInt {
    fn value_of(val: u64, positive: bool) -> BigSignedInt {
        if val <= MAX_CONSTANT as u64 {
            if positive {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            }
        } else {
            BigSignedInt::from_magnitude(val, positive)
        }
    }

    /// Builds a value with twice the bits `val` needs, bypassing the cache.
    pub(crate) fn from_magnitude(val: u64, positive: bool) -> BigSignedInt {
        let needed = (u64::BITS - val.leading_zeros()).max(1) as usize;
        let mut result = BigSignedInt::zeroed(2 * needed);
        // bit i is set iff val mod 2^(i+1) >= 2^i
        let val = val as u128;
        let mut power: u128 = 1;
        let mut index = 0;
        while power <= val {
            if val % (power << 1) >= power {
                result.digits[index] = true;
                result.high = index;
            }
            power <<= 1;
            index += 1;
        }
        result.signed(positive)
    }
}

impl TryFrom<f64> for BigSignedInt {
    type Error = BigNumError;

    /// Truncates toward zero.
    fn try_from(val: f64) -> BigNumResult<Self> {
        if !val.is_finite() {
            return Err(BigNumError::NotFinite { value: val.to_string() });
        }
        let truncated = val.trunc();
        let positive = truncated >= 0.0;
        let magnitude = truncated.abs();
        if magnitude < 18446744073709551616.0 {
            return Ok(BigSignedInt::value_of(magnitude as u64, positive));
        }
        // at least 2^64: exactly mantissa * 2^exponent with exponent >= 12
        let raw = magnitude.to_bits();
        let exponent = ((raw >> 52) & 0x7ff) as usize - 1075;
        let mantissa = (raw & ((1 << 52) - 1)) | (1 << 52);
        let base = BigSignedInt::from_magnitude(mantissa, true);
        let bits = 2 * (base.used_bits() + exponent);
        Ok(base.shl_mag(exponent, bits)?.signed(positive))
    }
}

impl TryFrom<&BigSignedInt> for i64 {
    type Error = BigNumError;

    fn try_from(val: &BigSignedInt) -> BigNumResult<Self> {
        if val.high >= u64::BITS as usize {
            return Err(BigNumError::OutOfRange { ty: "i64" });
        }
        let magnitude = val.small_value() as i128;
        let signed = if val.positive { magnitude } else { -magnitude };
        i64::try_from(signed).map_err(|_| BigNumError::OutOfRange { ty: "i64" })
    }
}

// 实现解析
impl BigSignedInt {
    /// Parses `-?[0-9]+`. Digit strings of any length are accepted.
    pub fn from_decimal_str(text: &str) -> BigNumResult<BigSignedInt> {
        let (positive, digits) = BigSignedInt::split_sign(text)?;
        // Horner's rule: result = result * 10 + digit
        let mut result = POS_CACHE[0].clone();
        for c in digits.chars() {
            let digit = match c.to_digit(DECIMAL_RADIX) {
                Some(digit) => digit as usize,
                None => return Err(BigNumError::format(text, "expected a decimal digit")),
            };
            result = result.try_multiply(&TEN)?.try_add(&POS_CACHE[digit])?;
        }
        Ok(result.signed(positive))
    }

    /// Parses `-?[01]+`, most significant bit first.
    pub fn from_binary_str(text: &str) -> BigNumResult<BigSignedInt> {
        let (positive, digits) = BigSignedInt::split_sign(text)?;
        let mut result = BigSignedInt::zeroed(2 * text.len());
        for (index, c) in digits.chars().rev().enumerate() {
            match c {
                '0' => {}
                '1' => result.set(index)?,
                _ => return Err(BigNumError::format(text, "expected a binary digit")),
            }
        }
        Ok(result.signed(positive))
    }

    fn split_sign(text: &str) -> BigNumResult<(bool, &str)> {
        let (positive, digits) = match text.strip_prefix(NEGATIVE_SIGN) {
            Some(rest) => (false, rest),
            None => (true, text),
        };
        if digits.is_empty() {
            return Err(BigNumError::format(text, "no digits"));
        }
        if digits.contains(NEGATIVE_SIGN) {
            return Err(BigNumError::format(text, "misplaced sign"));
        }
        Ok((positive, digits))
    }
}

impl FromStr for BigSignedInt {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigSignedInt::from_decimal_str(s)
    }
}

// 实现打印
impl BigSignedInt {
    pub fn to_binary_string(&self) -> String {
        format!("{:b}", self)
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    fn binary_digits(&self) -> String {
        (0..=self.high)
            .rev()
            .map(|i| DIGITS[self.digits[i] as usize])
            .collect()
    }

    /// Peels off decimal digits by repeated division by ten.
    fn decimal_digits(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut digits = Vec::new();
        let mut magnitude = self.abs();
        while !magnitude.is_zero() {
            let (quotient, remainder) = match magnitude.divide(&TEN) {
                Ok(pair) => pair,
                Err(err) => panic!("decimal conversion of {:b} failed: {}", self, err),
            };
            digits.push(DIGITS[remainder.small_value() as usize]);
            magnitude = quotient;
        }
        digits.iter().rev().collect()
    }
}

impl fmt::Display for BigSignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.positive, "", &self.decimal_digits())
    }
}

impl fmt::Binary for BigSignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.positive, "0b", &self.binary_digits())
    }
}

#[cfg(test)]
fn bin(text: &str) -> BigSignedInt {
    BigSignedInt::from_binary_str(text).unwrap()
}

#[cfg(test)]
fn dec(text: &str) -> BigSignedInt {
    BigSignedInt::from_decimal_str(text).unwrap()
}

#[test]
fn test_new() {
    assert_eq!(BigSignedInt::new(0), Err(BigNumError::InvalidCapacity { bits: 0 }));

    let zero = BigSignedInt::new(8).unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.capacity_bits(), 8);
    assert_eq!(zero.used_bits(), 1);
    assert_eq!(zero.unused_bits(), 7);

    let one_bit = BigSignedInt::new(1).unwrap();
    assert_eq!(one_bit.unused_bits(), 0);

    let default = BigSignedInt::default();
    assert_eq!(default.capacity_bits(), DEFAULT_BITS);
    assert_eq!(default, zero);
}

#[test]
fn test_result_bits() {
    // combined fits the smaller capacity
    let sum = BigSignedInt::from(3) + BigSignedInt::from(2);
    assert_eq!(sum.capacity_bits(), 4);
    assert_eq!(sum, BigSignedInt::from(5));

    // combined only fits the larger capacity
    let a = BigSignedInt::from(255);
    assert_eq!(a.capacity_bits(), 16);
    let sum = &a + &BigSignedInt::from(1);
    assert_eq!(sum.capacity_bits(), 16);
    assert_eq!(sum, BigSignedInt::from(256));

    // combined exceeds both
    let square = &a * &a;
    assert_eq!(square.capacity_bits(), 16);
    assert_eq!(square.used_bits(), 16);
    let fourth = &square * &square;
    assert_eq!(fourth.capacity_bits(), 64);
    assert_eq!(fourth, BigSignedInt::from(65025_u64 * 65025));
}

#[test]
fn test_from_native() {
    let six = BigSignedInt::from(6);
    assert_eq!(six.to_binary_string(), "110");
    assert_eq!(six.capacity_bits(), 6);

    let big = BigSignedInt::from(1000);
    assert_eq!(big.capacity_bits(), 20);
    assert_eq!(big.to_binary_string(), "1111101000");

    let zero = BigSignedInt::from(0_u8);
    assert!(zero.is_zero());
    assert_eq!(zero.capacity_bits(), 2);

    assert_eq!(BigSignedInt::from(-5_i8).to_binary_string(), "-101");
    assert_eq!(BigSignedInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigSignedInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigSignedInt::from(u64::MAX).capacity_bits(), 128);
}

#[test]
fn test_from_f64() {
    assert_eq!(BigSignedInt::try_from(3.9_f64).unwrap(), BigSignedInt::from(3));
    assert_eq!(BigSignedInt::try_from(-3.9_f64).unwrap(), BigSignedInt::from(-3));

    let zero = BigSignedInt::try_from(-0.5_f64).unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    assert_eq!(BigSignedInt::try_from(1e20_f64).unwrap().to_string(), "100000000000000000000");
    assert_eq!(BigSignedInt::try_from(-1e20_f64).unwrap().to_string(), "-100000000000000000000");
    assert_eq!(BigSignedInt::try_from(2f64.powi(100)).unwrap(), bin(&format!("1{}", "0".repeat(100))));

    assert!(matches!(BigSignedInt::try_from(f64::NAN), Err(BigNumError::NotFinite { .. })));
    assert!(matches!(BigSignedInt::try_from(f64::INFINITY), Err(BigNumError::NotFinite { .. })));
}

#[test]
fn test_to_i64() {
    assert_eq!(i64::try_from(&BigSignedInt::from(-42)), Ok(-42));
    assert_eq!(i64::try_from(&dec("-9223372036854775808")), Ok(i64::MIN));
    assert_eq!(i64::try_from(&dec("9223372036854775807")), Ok(i64::MAX));
    assert_eq!(i64::try_from(&dec("9223372036854775808")), Err(BigNumError::OutOfRange { ty: "i64" }));
    assert_eq!(i64::try_from(&dec("100000000000000000000")), Err(BigNumError::OutOfRange { ty: "i64" }));
}

#[test]
fn test_parse_binary() {
    let value = bin("0011");
    assert_eq!(value.used_bits(), 2);
    assert_eq!(value.capacity_bits(), 8);
    assert_eq!(value, BigSignedInt::from(3));
    assert_eq!(bin("-1001"), BigSignedInt::from(-9));

    let zero = bin("-000");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    for text in ["", "-", "12", "1-0", "--1", "+1", " 1"] {
        assert!(matches!(BigSignedInt::from_binary_str(text), Err(BigNumError::Format { .. })), "{:?}", text);
    }
}

#[test]
fn test_parse_decimal() {
    assert_eq!(dec("-123").to_decimal_string(), "-123");
    assert_eq!(dec("007"), BigSignedInt::from(7));
    assert_eq!("42".parse::<BigSignedInt>().unwrap(), BigSignedInt::from(42));

    let zero = dec("-0");
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "0");

    let long = "123456789012345678901234567890123456789012345678901234567890";
    assert_eq!(dec(long).to_string(), long);

    for text in ["", "-", "12a", "1-2", "--1", "+5", "1.5", "١٢"] {
        assert!(matches!(BigSignedInt::from_decimal_str(text), Err(BigNumError::Format { .. })), "{:?}", text);
    }
}

#[test]
fn test_format() {
    assert_eq!(BigSignedInt::new(16).unwrap().to_binary_string(), "0");
    assert_eq!(BigSignedInt::new(16).unwrap().to_decimal_string(), "0");
    assert_eq!(BigSignedInt::from(-5).to_binary_string(), "-101");
    assert_eq!(format!("{:#b}", BigSignedInt::from(5)), "0b101");
    assert_eq!(format!("{}", BigSignedInt::from(-1234567)), "-1234567");
    assert_eq!(format!("{:>6}", BigSignedInt::from(42)), "    42");
}

#[test]
fn test_compare() {
    let values: Vec<BigSignedInt> = [-300, -8, -7, -1, 0, 1, 2, 7, 8, 300]
        .iter()
        .map(|&v| BigSignedInt::from(v))
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a < b, i < j, "{} < {}", a, b);
            assert_eq!(a > b, i > j, "{} > {}", a, b);
            assert_eq!(a <= b, i <= j, "{} <= {}", a, b);
            assert_eq!(a >= b, i >= j, "{} >= {}", a, b);
            assert_eq!(a == b, i == j, "{} == {}", a, b);
            assert_eq!(a != b, i != j, "{} != {}", a, b);
            assert_eq!(a.cmp(b), i.cmp(&j));
        }
    }

    // capacity does not take part in equality
    assert_eq!(BigSignedInt::new(64).unwrap(), BigSignedInt::from(0));
    assert_eq!(bin("101"), BigSignedInt::from(5));
    assert_ne!(BigSignedInt::from(5), BigSignedInt::from(-5));
}

#[test]
fn test_hash() {
    use std::collections::hash_map::DefaultHasher;

    let hash = |val: &BigSignedInt| {
        let mut hasher = DefaultHasher::new();
        val.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&BigSignedInt::new(64).unwrap()), hash(&BigSignedInt::from(0)));
    assert_eq!(hash(&bin("0110")), hash(&BigSignedInt::from(6)));
}

#[test]
fn test_add() {
    assert_eq!((bin("1011") + bin("0011")).to_binary_string(), "1110");
    assert_eq!(BigSignedInt::from(-5) + BigSignedInt::from(3), BigSignedInt::from(-2));
    assert_eq!(BigSignedInt::from(5) + BigSignedInt::from(-3), BigSignedInt::from(2));
    assert_eq!(BigSignedInt::from(3) + BigSignedInt::from(-5), BigSignedInt::from(-2));
    assert_eq!(BigSignedInt::from(-5) + BigSignedInt::from(-3), BigSignedInt::from(-8));
    assert_eq!(bin("1111") + bin("1"), BigSignedInt::from(16));

    let a = BigSignedInt::from(-77);
    let zero = &a + &(-&a);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(&a + &BigSignedInt::from(0), a);
}

#[test]
fn test_subtract() {
    assert_eq!((bin("0100") - bin("0011")).to_binary_string(), "1");
    assert_eq!((bin("0011") - bin("0100")).to_binary_string(), "-1");
    assert_eq!(BigSignedInt::from(3) - BigSignedInt::from(-5), BigSignedInt::from(8));
    assert_eq!(BigSignedInt::from(-3) - BigSignedInt::from(5), BigSignedInt::from(-8));
    assert_eq!(BigSignedInt::from(-3) - BigSignedInt::from(-5), BigSignedInt::from(2));
    assert_eq!(BigSignedInt::from(-5) - BigSignedInt::from(-3), BigSignedInt::from(-2));

    let diff = bin("10000000") - bin("1");
    assert_eq!(diff.to_binary_string(), "1111111");
    assert_eq!(diff.used_bits(), 7);

    let a = BigSignedInt::from(-19);
    let zero = &a - &a;
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.used_bits(), 1);
}

#[test]
fn test_increment_decrement() {
    let zero = BigSignedInt::from(-1).increment().unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.decrement().unwrap(), BigSignedInt::from(-1));
    assert_eq!(bin("111").increment().unwrap(), BigSignedInt::from(8));
    assert_eq!(BigSignedInt::from(-8).decrement().unwrap(), BigSignedInt::from(-9));
}

#[test]
fn test_operands_untouched() {
    let a = BigSignedInt::from(-12);
    let b = BigSignedInt::from(5);
    let (a_before, b_before) = (a.clone(), b.clone());
    let _ = &a + &b;
    let _ = &b + &a;
    let _ = &a - &b;
    let _ = &b - &a;
    let _ = &a * &b;
    let _ = a.divide(&b).unwrap();
    let _ = a.try_multiply_native(-1).unwrap();
    assert_eq!(a, a_before);
    assert!(a.is_negative());
    assert_eq!(b, b_before);
}

#[test]
fn test_multiply() {
    assert_eq!(BigSignedInt::from(6) * BigSignedInt::from(7), BigSignedInt::from(42));
    assert_eq!(BigSignedInt::from(-6) * BigSignedInt::from(7), BigSignedInt::from(-42));
    assert_eq!(BigSignedInt::from(-6) * BigSignedInt::from(-7), BigSignedInt::from(42));
    assert_eq!(bin("1011") * bin("1101"), BigSignedInt::from(143));

    let zero = BigSignedInt::from(-6) * BigSignedInt::from(0);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    let x = BigSignedInt::from(-300);
    assert_eq!(&x * &BigSignedInt::from(1), x);
    assert_eq!(&BigSignedInt::from(1) * &x, x);
    assert_eq!(&x * &BigSignedInt::from(-1), BigSignedInt::from(300));
    assert_eq!(&BigSignedInt::from(-1) * &x, BigSignedInt::from(300));

    assert_eq!(&x * 1, x);
    assert_eq!(&x * -1, BigSignedInt::from(300));
    assert_eq!(3 * &x, BigSignedInt::from(-900));
    assert_eq!(x.clone() * -2, BigSignedInt::from(600));
    assert_eq!(-2 * x, BigSignedInt::from(600));

    let zero = BigSignedInt::from(0).try_multiply_native(-1).unwrap();
    assert!(!zero.is_negative());
}

#[test]
fn test_divide() {
    let check = |a: i64, b: i64| {
        let (q, r) = BigSignedInt::from(a).divide(&BigSignedInt::from(b)).unwrap();
        assert_eq!(q, BigSignedInt::from(a / b), "{} / {}", a, b);
        assert_eq!(r, BigSignedInt::from(a % b), "{} % {}", a, b);
        assert!(!q.is_zero() || !q.is_negative());
        assert!(!r.is_zero() || !r.is_negative());
    };
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (1, 5), (-1, 5), (6, -3), (0, 9), (1000, 1), (-1000, 33)] {
        check(a, b);
    }

    let (q, r) = BigSignedInt::from(7).divide(&BigSignedInt::from(2)).unwrap();
    assert_eq!(q, BigSignedInt::from(3));
    assert_eq!(r, BigSignedInt::from(1));
    assert_eq!(BigSignedInt::from(100) / BigSignedInt::from(7), BigSignedInt::from(14));
    assert_eq!(BigSignedInt::from(100) % BigSignedInt::from(7), BigSignedInt::from(2));

    assert_eq!(BigSignedInt::from(5).divide(&BigSignedInt::new(32).unwrap()), Err(BigNumError::DivisionByZero));
}

#[test]
#[should_panic]
fn test_div_operator_by_zero() {
    let _ = BigSignedInt::from(5) / BigSignedInt::from(0);
}
