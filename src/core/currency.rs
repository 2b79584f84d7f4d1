use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies with their decimal precision and locale grouping rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Vietnamese Dong (no decimal places, `.` grouping)
    #[default]
    VND,
    /// US Dollar (2 decimal places, `,` grouping)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - VND: 0 (no decimals)
    /// - USD: 2 (2 decimal places)
    pub fn scale(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn group_separator(&self) -> char {
        match self {
            Currency::VND => '.',
            Currency::USD => ',',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::VND => ',',
            Currency::USD => '.',
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Currency::VND => "₫",
            Currency::USD => "$",
        }
    }

    /// Formats an amount for display: thousands grouping plus currency suffix
    ///
    /// `1212000` in VND renders as `1.212.000 ₫`, `460000` in USD as `460,000.00 $`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.scale() as usize;
        let rounded = self.round(amount);
        let plain = format!("{:.width$}", rounded.abs(), width = scale);

        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain.as_str(), None),
        };

        let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 4);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.group_separator()));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator());
            out.push_str(frac);
        }
        out.push(' ');
        out.push_str(self.suffix());
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::VND => write!(f, "VND"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VND" => Ok(Currency::VND),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
