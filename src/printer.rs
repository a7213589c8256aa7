use crate::interpreter::{self, Error};
use crate::types::Number;
use std::cmp::Ordering;

// Every finite f64 has an exact decimal expansion of at most 767 significant
// digits, so formatting with this precision never rounds.
const EXACT_PRECISION: usize = 767;

/// Significant digits, most significant first, and the power of ten of the
/// first one.
#[derive(Debug, PartialEq)]
struct Decimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    fn new(mut digits: Vec<u8>, exponent: i32) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Self { digits, exponent }
    }

    /// Reads Rust's `{:e}` output, e.g. `1.25e-3`.
    fn from_exp_str(repr: &str) -> Self {
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr, "0"));
        let digits = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Self::new(digits, exponent.parse().unwrap_or(0))
    }

    fn mantissa(&self) -> String {
        let digits = self.digit_chars();
        match digits.len() {
            1 => digits,
            _ => format!("{}.{}", &digits[..1], &digits[1..]),
        }
    }

    fn digit_chars(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    fn value(&self) -> Number {
        format!("{}e{}", self.mantissa(), self.exponent)
            .parse()
            .unwrap_or(Number::NAN)
    }

    /// The nearest decimal with `len` significant digits, ties to even.
    fn round_half_even(&self, len: usize) -> Self {
        let (head, tail) = self.digits.split_at(len.min(self.digits.len()));
        let mut digits = head.to_vec();
        let mut exponent = self.exponent;
        let round_up = match tail.split_first() {
            None => false,
            Some((&first, rest)) => match first.cmp(&5) {
                Ordering::Less => false,
                Ordering::Greater => true,
                Ordering::Equal => {
                    rest.iter().any(|&d| d != 0) || digits.last().map_or(false, |d| d % 2 == 1)
                }
            },
        };
        if round_up {
            let mut index = digits.len();
            loop {
                if index == 0 {
                    digits.insert(0, 1);
                    exponent += 1;
                    break;
                }
                index -= 1;
                if digits[index] == 9 {
                    digits[index] = 0;
                } else {
                    digits[index] += 1;
                    break;
                }
            }
        }
        Self::new(digits, exponent)
    }

    fn render(&self) -> String {
        let digits = self.digit_chars();
        let exponent = self.exponent;
        if exponent < -4 || exponent >= 16 {
            let (sign, magnitude) = if exponent < 0 {
                ('-', -exponent)
            } else {
                ('+', exponent)
            };
            return format!("{}e{}{:02}", self.mantissa(), sign, magnitude);
        }
        if exponent < 0 {
            return format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits);
        }
        let point = exponent as usize + 1;
        if digits.len() <= point {
            format!("{}{}.0", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    }
}

/// Shortest digits that read back as `magnitude`. When two candidates of that
/// length are equally close, the even one wins.
fn shortest(magnitude: Number) -> Decimal {
    let shortest = Decimal::from_exp_str(&format!("{:e}", magnitude));
    let exact = Decimal::from_exp_str(&format!("{:.*e}", EXACT_PRECISION, magnitude));
    let nearest = exact.round_half_even(shortest.digits.len());
    if nearest.value() == magnitude {
        nearest
    } else {
        shortest
    }
}

/// Shortest round-trip rendering. Whole numbers keep their `.0`; magnitudes
/// below 1e-4 or from 1e16 up switch to scientific notation with a signed,
/// at least two digit exponent (`1e+16`, `2.5e-07`).
pub fn pr_number(value: Number) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}", sign, shortest(value.abs()).render())
}

/// The line reported for one cycle. A failed division is still a result;
/// reading and lookup failures are shown bare.
pub fn print(result: &interpreter::Result) -> String {
    match result {
        Ok(value) => format!("Result: {}", pr_number(*value)),
        Err(e @ Error::Arithmetic(_)) => format!("Result: {}", e),
        Err(e) => e.to_string(),
    }
}
