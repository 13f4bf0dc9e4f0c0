use lazy_static::*;

use crate::BigSignedInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigSignedInt> = (0..=MAX_CONSTANT as u64)
        .map(|val| BigSignedInt::from_magnitude(val, true))
        .collect();
    pub static ref NEG_CACHE: Vec<BigSignedInt> = (0..=MAX_CONSTANT as u64)
        .map(|val| BigSignedInt::from_magnitude(val, false))
        .collect();
    pub static ref ONE: BigSignedInt = POS_CACHE[1].clone();
    pub static ref TEN: BigSignedInt = POS_CACHE[DECIMAL_RADIX as usize].clone();
}
