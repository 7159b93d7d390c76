use crate::money::{Cents, CURRENCY, THOUSANDS};

/// Format cents for display with thousands separators: -$1,234.56
///
/// Display only; the canonical form written to files is `Cents`' own
/// `Display`, which has no separators.
pub fn money(amount: Cents) -> String {
    let (dollars, pennies) = amount.split();
    let digits = dollars.to_string();

    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push_str(THOUSANDS);
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    let sign = if amount.value() < 0 { "-" } else { "" };
    format!("{sign}{CURRENCY}{with_commas}.{pennies:02}")
}
