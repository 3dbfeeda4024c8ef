use salon_agg_shared_kernel::Amount;

/// Formats `amount` as whole Rupiah with comma thousands separators,
/// e.g. `Rp1,250,000`. Halves round to even.
pub fn rupiah(amount: Amount) -> String {
    let value = amount.value().round_ties_even();
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}Rp{grouped}")
}
