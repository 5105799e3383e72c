/// Tongue and pulse baseline for a systemic pattern. The most specific
/// keyword wins.
pub fn tongue_and_pulse(systemic_pattern: &str) -> (&'static str, &'static str) {
    const TABLE: &[(&str, &str, &str)] = &[
        ("kidney yang", "pale, swollen with white coat", "deep, slow"),
        ("kidney yin", "red with little coat", "thin, rapid"),
        ("blood deficiency", "pale and thin", "thready"),
        ("blood stasis", "purple with dark spots", "choppy"),
        ("liver qi", "thin white coat, slightly purple sides", "wiry"),
        ("damp", "greasy white coat", "slippery"),
        ("spleen", "pale with teeth marks, thin white coat", "weak"),
        ("qi deficiency", "pale with thin white coat", "weak"),
        ("heat", "red with yellow coat", "rapid"),
    ];

    let pattern = systemic_pattern.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(keyword, _, _)| pattern.contains(keyword))
        .map(|(_, tongue, pulse)| (*tongue, *pulse))
        .unwrap_or(("pink with thin white coat", "even, moderate"))
}

/// General condition line from the ADL severity value (1 mild ..= 5 severe).
pub fn general_condition(adl_severity: f64) -> &'static str {
    if adl_severity <= 2.0 {
        "good"
    } else if adl_severity <= 4.0 {
        "fair"
    } else {
        "poor"
    }
}
