use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of minor units in one whole unit (four decimal places).
const SCALE: i64 = 10_000;
const DECIMALS: i64 = 4;

/// Fixed-point amount held in ten-thousandths of a unit.
///
/// Wallet balances and the amounts moved by deposit, pay and refund are all
/// `Money`. Storing an `i64` keeps arithmetic exact; text is parsed and
/// printed through `BigDecimal` with four decimals. Text carrying more
/// precision than that is refused rather than rounded.
///
/// The `+`/`-` operators panic if the result leaves the `i64` range; use
/// [`Money::checked_add`] or [`Money::checked_sub`] where that can happen.
///
/// # Examples
/// ```
/// use digital_wallet::common::money::Money;
///
/// let fee: Money = "2.5".parse().unwrap();
/// assert_eq!(fee.minor_units(), 25_000);
/// assert_eq!(fee.to_string(), "2.5000");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Money(i64);

impl Money {
    pub fn from_minor_units(value: i64) -> Self {
        Money(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum of two amounts, or `None` if it does not fit in the fixed-point range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Difference of two amounts, or `None` if it does not fit in the fixed-point range.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        if bd.with_scale(DECIMALS) != bd {
            return Err(ParseBigDecimalError::Other(
                "more than 4 decimal places".into(),
            ));
        }
        let value = (bd * BigDecimal::from(SCALE))
            .with_scale(0)
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    ///
    /// If the sum overflows `i64`.
    fn add(self, rhs: Money) -> Money {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!("money overflow: {self} + {rhs}"),
        }
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    ///
    /// If the difference overflows `i64`.
    fn sub(self, rhs: Money) -> Money {
        match self.checked_sub(rhs) {
            Some(diff) => diff,
            None => panic!("money overflow: {self} - {rhs}"),
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
