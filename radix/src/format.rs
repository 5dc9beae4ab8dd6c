//! Formatting of 64-bit integers in bases 2 through 62.

use std::str;

use crate::{DIGITS, MAX_BASE, MIN_BASE};

/// Values below this are served whole out of the small-integer cache
/// in base 10.
const NSMALLS: u64 = 100;

/// Two-digit decimal strings for 0..=99.
const SMALLS: &str = "00010203040506070809\
                      10111213141516171819\
                      20212223242526272829\
                      30313233343536373839\
                      40414243444546474849\
                      50515253545556575859\
                      60616263646566676869\
                      70717273747576777879\
                      80818283848586878889\
                      90919293949596979899";

/// Decimal string for a value below [`NSMALLS`].
fn small(v: usize) -> &'static str {
    debug_assert!(v < NSMALLS as usize);
    if v < 10 {
        &DIGITS[v..v + 1]
    } else {
        &SMALLS[v * 2..v * 2 + 2]
    }
}

/// Returns the string representation of `value` in the given base,
/// for `2 <= base <= 62`. Digit symbols above 9 are `a-z` then `A-Z`.
///
/// # Panics
///
/// Panics if `base` is outside `2..=62`.
pub fn format_uint(value: u64, base: u32) -> String {
    if base == 10 && value < NSMALLS {
        return small(value as usize).to_string();
    }
    let mut s = String::new();
    format_bits(&mut s, value, base, false);
    s
}

/// Returns the string representation of `value` in the given base,
/// for `2 <= base <= 62`, with a leading `-` for negative values.
///
/// # Panics
///
/// Panics if `base` is outside `2..=62`.
pub fn format_int(value: i64, base: u32) -> String {
    if base == 10 && (0..NSMALLS as i64).contains(&value) {
        return small(value as usize).to_string();
    }
    let mut s = String::new();
    format_bits(&mut s, value as u64, base, value < 0);
    s
}

/// Equivalent to `format_int(value, 10)`.
pub fn itoa(value: i64) -> String {
    format_int(value, 10)
}

/// Appends the string form of `value`, as produced by [`format_uint`],
/// to `dst`.
///
/// # Panics
///
/// Panics if `base` is outside `2..=62`.
pub fn append_uint(dst: &mut String, value: u64, base: u32) {
    if base == 10 && value < NSMALLS {
        dst.push_str(small(value as usize));
        return;
    }
    format_bits(dst, value, base, false);
}

/// Appends the string form of `value`, as produced by [`format_int`],
/// to `dst`.
///
/// # Panics
///
/// Panics if `base` is outside `2..=62`.
pub fn append_int(dst: &mut String, value: i64, base: u32) {
    if base == 10 && (0..NSMALLS as i64).contains(&value) {
        dst.push_str(small(value as usize));
        return;
    }
    format_bits(dst, value as u64, base, value < 0);
}

/// Worst case: 64 binary digits plus one sign byte.
const BUF_LEN: usize = 65;

/// Writes the digits of `u` into `dst`, most significant first. When
/// `neg` is set, `u` holds the bit pattern of a negative i64 and a
/// `-` is emitted before the magnitude; negating through the unsigned
/// pattern keeps `i64::MIN` exact.
fn format_bits(dst: &mut String, mut u: u64, base: u32, neg: bool) {
    assert!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        "invalid base {base}, must be in 2..=62"
    );

    let digits = DIGITS.as_bytes();
    let smalls = SMALLS.as_bytes();

    // Digits are produced least significant first, filling `a` from
    // the tail; the final output is the trailing slice.
    let mut a = [0u8; BUF_LEN];
    let mut i = a.len();

    if neg {
        u = u.wrapping_neg();
    }

    if base == 10 {
        // On 32-bit targets, peel nine decimal digits per u64 division
        // so the loop below runs on register-sized values.
        #[cfg(target_pointer_width = "32")]
        while u >= 1_000_000_000 {
            let q = u / 1_000_000_000;
            let mut us = (u - q * 1_000_000_000) as u32;
            for _ in 0..4 {
                let is = (us % 100 * 2) as usize;
                us /= 100;
                i -= 2;
                a[i + 1] = smalls[is + 1];
                a[i] = smalls[is];
            }
            // us < 10: the ninth digit of the chunk.
            i -= 1;
            a[i] = smalls[(us * 2 + 1) as usize];
            u = q;
        }

        let mut us = u as usize;
        while us >= 100 {
            let is = us % 100 * 2;
            us /= 100;
            i -= 2;
            a[i + 1] = smalls[is + 1];
            a[i] = smalls[is];
        }

        // us < 100
        let is = us * 2;
        i -= 1;
        a[i] = smalls[is + 1];
        if us >= 10 {
            i -= 1;
            a[i] = smalls[is];
        }
    } else if base.is_power_of_two() {
        // Shifts and masks instead of division. The largest power of
        // two in range is 32, so the shift is at most 5.
        let shift = base.trailing_zeros();
        let mask = u64::from(base) - 1;
        while u >= u64::from(base) {
            i -= 1;
            a[i] = digits[(u & mask) as usize];
            u >>= shift;
        }
        // u < base
        i -= 1;
        a[i] = digits[u as usize];
    } else {
        // General case: one division per digit, remainder recovered
        // from the quotient.
        let b = u64::from(base);
        while u >= b {
            let q = u / b;
            i -= 1;
            a[i] = digits[(u - q * b) as usize];
            u = q;
        }
        // u < base
        i -= 1;
        a[i] = digits[u as usize];
    }

    if neg {
        i -= 1;
        a[i] = b'-';
    }

    dst.push_str(str::from_utf8(&a[i..]).unwrap());
}
