use crate::alphabet::BASE;
use alloc::vec::Vec;
#[cfg(not(feature = "no-runtime-cpu-detection"))]
use multiversion::multiversion;

/// Number of base94 digits handled per limb operation.
pub const CHUNK_DIGITS: usize = 4;

/// `94^CHUNK_DIGITS`, the largest power of 94 below `2^32`.
pub const CHUNK_BASE: u32 = pow_base(CHUNK_DIGITS);

/// Returns `94^exponent`.
pub(crate) const fn pow_base(exponent: usize) -> u32 {
    let mut result = 1u32;
    let mut x = 0;
    while x < exponent {
        result *= BASE as u32;
        x += 1;
    }
    result
}

/// Upper bound on the limbs needed for a number of `digits` base94 digits.
///
/// Each digit carries `log2(94) / 32 ≈ 0.20483` limbs; `2049 / 10000` rounds that up.
#[inline]
pub(crate) fn limbs_for_digits(digits: usize) -> usize {
    (digits as u64 * 2049).div_ceil(10000) as usize + 1
}

/// Divides the big endian number in `limbs` by [`CHUNK_BASE`] in place.
/// Returns the remainder, which is below [`CHUNK_BASE`].
#[inline]
pub(crate) fn divide_by_chunk_base(limbs: &mut [u32]) -> u32 {
    #[cfg_attr(
        not(feature = "no-runtime-cpu-detection"),
        multiversion(targets(
            // x86-64-v3 without lahfsahf
            "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
            // x86-64-v2 without lahfsahf
            "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
        ))
    )]
    fn divide(limbs: &mut [u32]) -> u32 {
        let divisor = CHUNK_BASE as u64;
        let mut remainder = 0u64;
        for limb in limbs.iter_mut() {
            // remainder < 94^4 < 2^27, so acc < 2^59 and the quotient fits a limb.
            let acc = (remainder << 32) | *limb as u64;
            *limb = (acc / divisor) as u32;
            remainder = acc % divisor;
        }
        remainder as u32
    }

    divide(limbs)
}

/// Multiplies the little endian number in `limbs` by `multiplier` and adds `addend`,
/// growing `limbs` by at most one limb.
///
/// `multiplier` and `addend` must not exceed [`CHUNK_BASE`]. The most significant limb stays
/// non-zero as long as the result is non-zero.
#[inline]
pub(crate) fn multiply_add(limbs: &mut Vec<u32>, multiplier: u32, addend: u32) {
    debug_assert!(multiplier <= CHUNK_BASE && addend <= CHUNK_BASE);

    #[cfg_attr(
        not(feature = "no-runtime-cpu-detection"),
        multiversion(targets(
            // x86-64-v3 without lahfsahf
            "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
            // x86-64-v2 without lahfsahf
            "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
        ))
    )]
    fn mul_add(limbs: &mut [u32], multiplier: u64, addend: u64) -> u64 {
        let mut carry = addend;
        for limb in limbs.iter_mut() {
            // limb * 94^4 + carry < 2^59, carry out stays below 2^27.
            let acc = *limb as u64 * multiplier + carry;
            *limb = acc as u32;
            carry = acc >> 32;
        }
        carry
    }

    let carry = mul_add(limbs, multiplier as u64, addend as u64);
    if carry != 0 {
        limbs.push(carry as u32);
    }
}

/// Packs big endian bytes into big endian `u32` limbs. The first limb holds the
/// `bytes.len() % 4` leading bytes when the length is not a multiple of 4.
pub(crate) fn bytes_to_limbs(bytes: &[u8]) -> Vec<u32> {
    let head = bytes.len() % 4;
    let mut limbs = Vec::with_capacity(bytes.len().div_ceil(4));
    if head != 0 {
        limbs.push(
            bytes[..head]
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | b as u32),
        );
    }

    for chunk in bytes[head..].chunks_exact(4) {
        limbs.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    limbs
}

/// Writes the little endian number in `limbs` to `output` as big endian bytes without leading
/// zeros. Returns the number of bytes written.
///
/// The last limb of `limbs` must be non-zero.
pub(crate) fn limbs_to_bytes(limbs: &[u32], output: &mut [u8]) -> usize {
    let Some((&top, rest)) = limbs.split_last() else {
        return 0;
    };
    debug_assert!(top != 0);

    let skip = top.leading_zeros() as usize / 8;
    let mut written = 4 - skip;
    output[..written].copy_from_slice(&top.to_be_bytes()[skip..]);

    for &limb in rest.iter().rev() {
        output[written..written + 4].copy_from_slice(&limb.to_be_bytes());
        written += 4;
    }
    written
}
