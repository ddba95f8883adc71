use serde::de::DeserializeOwned;

/// Renders a stored budget as a dollar amount with thousands separators,
/// e.g. `30000000` becomes `$30,000,000`.
pub fn format_budget(budget: i64) -> String {
    let digits = budget.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if budget < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Decodes one of the JSON array columns (`genres`, `productionCompanies`).
/// A missing or blank column is an empty list.
pub fn decode_json_list<T: DeserializeOwned>(
    column: Option<&str>,
) -> Result<Vec<T>, serde_json::Error> {
    match column.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw),
    }
}
