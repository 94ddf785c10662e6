use std::error::Error;
use std::fmt;

/// Arithmetic functions a member can execute on behalf of callers.
pub trait Calculator {
    fn add(&self, operand_one: f64, operand_two: f64) -> f64;

    fn divide(&self, numerator: f64, divisor: f64) -> Result<f64, CalculatorError>;

    fn factorial(&self, number: u64) -> Result<u64, CalculatorError>;

    fn multiply(&self, operand_one: f64, operand_two: f64) -> f64;

    fn square_root(&self, number: f64) -> Result<f64, CalculatorError>;

    fn squared(&self, number: f64) -> f64;

    fn subtract(&self, operand_one: f64, operand_two: f64) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorError {
    DivisionByZero,
    NegativeSquareRoot(f64),
    /// The factorial of this number does not fit in a `u64`.
    Overflow(u64),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::DivisionByZero => write!(f, "cannot divide by zero"),
            CalculatorError::NegativeSquareRoot(n) => {
                write!(f, "cannot take the square root of negative number {}", n)
            }
            CalculatorError::Overflow(n) => write!(f, "factorial of {} overflows", n),
        }
    }
}

impl Error for CalculatorError {}

/// In-process [`Calculator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculator;

impl Calculator for LocalCalculator {
    fn add(&self, operand_one: f64, operand_two: f64) -> f64 {
        operand_one + operand_two
    }

    fn divide(&self, numerator: f64, divisor: f64) -> Result<f64, CalculatorError> {
        if divisor == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(numerator / divisor)
    }

    fn factorial(&self, number: u64) -> Result<u64, CalculatorError> {
        (2..=number).try_fold(1u64, |acc, n| {
            acc.checked_mul(n).ok_or(CalculatorError::Overflow(number))
        })
    }

    fn multiply(&self, operand_one: f64, operand_two: f64) -> f64 {
        operand_one * operand_two
    }

    fn square_root(&self, number: f64) -> Result<f64, CalculatorError> {
        if number < 0.0 {
            return Err(CalculatorError::NegativeSquareRoot(number));
        }
        Ok(number.sqrt())
    }

    fn squared(&self, number: f64) -> f64 {
        number * number
    }

    fn subtract(&self, operand_one: f64, operand_two: f64) -> f64 {
        operand_one - operand_two
    }
}
