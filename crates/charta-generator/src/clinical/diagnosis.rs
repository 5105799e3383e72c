use charta_core::models::context::{BodyPart, Laterality};

/// (right, left, unspecified) codes and the region phrase for limb joints.
fn limb_codes(body_part: BodyPart) -> Option<(&'static str, &'static str, &'static str)> {
    match body_part {
        BodyPart::Knee => Some(("M25.561", "M25.562", "M25.569")),
        BodyPart::Shoulder => Some(("M25.511", "M25.512", "M25.519")),
        BodyPart::Elbow => Some(("M25.521", "M25.522", "M25.529")),
        BodyPart::Hip => Some(("M25.551", "M25.552", "M25.559")),
        _ => None,
    }
}

/// ICD-10 style diagnosis lines for the region, followed by the pattern
/// diagnosis.
pub fn diagnosis(
    body_part: BodyPart,
    laterality: Laterality,
    local_pattern: &str,
    systemic_pattern: &str,
) -> Vec<String> {
    let region = body_part.name();
    let mut lines = match limb_codes(body_part) {
        Some((right, left, unspecified)) => match laterality {
            Laterality::Right => vec![format!("{right} Pain in right {region}")],
            Laterality::Left => vec![format!("{left} Pain in left {region}")],
            Laterality::Bilateral => vec![
                format!("{right} Pain in right {region}"),
                format!("{left} Pain in left {region}"),
            ],
            Laterality::Unspecified => vec![format!("{unspecified} Pain in unspecified {region}")],
        },
        None => match body_part {
            BodyPart::Neck => vec!["M54.2 Cervicalgia".to_string()],
            BodyPart::MidBack => vec!["M54.6 Pain in thoracic spine".to_string()],
            BodyPart::LowerBack => vec!["M54.50 Low back pain, unspecified".to_string()],
            _ => Vec::new(),
        },
    };

    let patterns: Vec<&str> = [local_pattern, systemic_pattern]
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if !patterns.is_empty() {
        lines.push(format!("TCM: {}", patterns.join("; ")));
    }
    lines
}
