//! Cross-ladder proportionality rules shared by generation and audit.

/// Minimum tenderness grade a pain level implies: a patient reporting severe
/// pain cannot be charted with trace tenderness.
pub fn tenderness_floor(pain: f64) -> Option<f64> {
    if pain >= 7.0 {
        Some(2.0)
    } else if pain >= 4.0 {
        Some(1.0)
    } else {
        None
    }
}

/// Continuous ADL severity (1 = mild .. 5 = severe) implied by a pain value.
pub fn severity_from_pain(pain: f64) -> f64 {
    (pain / 2.0).clamp(1.0, 5.0)
}
