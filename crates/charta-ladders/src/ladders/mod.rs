pub mod adl;
pub mod frequency;
pub mod pain;
pub mod spasm;
pub mod strength;
pub mod tenderness;
pub mod tightness;

use charta_core::models::context::Severity;

use crate::Rung;

/// Rungs for the five-band severity wording shared by tightness and ADL.
pub(crate) fn severity_rungs() -> Vec<Rung> {
    Severity::ALL
        .into_iter()
        .map(|sev| Rung {
            label: sev.label().to_string(),
            value: f64::from(sev.step()),
        })
        .collect()
}

/// Find the severity band named in a phrase. Compound bands are checked
/// first so "mild to moderate" is not read as "mild".
pub(crate) fn parse_severity_phrase(label: &str) -> Option<f64> {
    let lower = label.to_ascii_lowercase();
    [
        Severity::ModerateToSevere,
        Severity::MildToModerate,
        Severity::Severe,
        Severity::Moderate,
        Severity::Mild,
    ]
    .into_iter()
    .find(|sev| lower.contains(sev.label()))
    .map(|sev| f64::from(sev.step()))
}

/// Read a "+N" grade within `min..=max`, e.g. "(+3) = considerable tenderness".
/// "+12" is not a grade.
pub(crate) fn parse_plus_grade(label: &str, min: u32, max: u32) -> Option<f64> {
    let chars: Vec<char> = label.chars().collect();
    chars.windows(2).enumerate().find_map(|(position, pair)| {
        let digit = pair[1].to_digit(10)?;
        let followed_by_digit = chars.get(position + 2).is_some_and(|c| c.is_ascii_digit());
        (pair[0] == '+' && !followed_by_digit && (min..=max).contains(&digit))
            .then(|| f64::from(digit))
    })
}

pub(crate) fn plus_rungs(min: u32, max: u32) -> Vec<Rung> {
    (min..=max)
        .map(|grade| Rung {
            label: format!("+{grade}"),
            value: f64::from(grade),
        })
        .collect()
}
