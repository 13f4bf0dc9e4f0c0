/// Capacity of a `BigSignedInt::default()`, ten 32-bit words worth of bits.
pub const DEFAULT_BITS: usize = 512;

/// Largest magnitude kept in `POS_CACHE` / `NEG_CACHE`.
pub const MAX_CONSTANT: usize = 16;

pub const DECIMAL_RADIX: u32 = 10;

pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

pub const NEGATIVE_SIGN: char = '-';
