/// Format a probability in [0, 1] as a percentage with `decimals` places
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Format an optional probability for tables; undefined values show as `n/a`
pub fn format_probability(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |p| format_percent(p, 2))
}

/// Format an axis coordinate compactly (e.g., 0.02, 1.7, 100)
pub fn format_axis_value(value: f64) -> String {
    let s = format!("{value:.4}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Lower-case roman numeral for panel numbering (1..=10)
pub fn roman(n: usize) -> &'static str {
    match n {
        1 => "i",
        2 => "ii",
        3 => "iii",
        4 => "iv",
        5 => "v",
        6 => "vi",
        7 => "vii",
        8 => "viii",
        9 => "ix",
        10 => "x",
        _ => "?",
    }
}
