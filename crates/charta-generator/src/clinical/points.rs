use charta_core::models::context::BodyPart;

/// Local treatment points for a region.
pub fn local_points(body_part: BodyPart) -> &'static [&'static str] {
    match body_part {
        BodyPart::Knee => &[
            "ST35", "ST36", "SP9", "SP10", "GB34", "ST34", "LR8", "BL40", "KI10", "GB33",
        ],
        BodyPart::Shoulder => &[
            "LI15", "SJ14", "SI9", "SI10", "SI11", "SI12", "LI14", "GB21", "SJ13", "LI11",
        ],
        BodyPart::Elbow => &["LI11", "LI10", "LI12", "LU5", "HT3", "SJ10", "SI8", "SJ5"],
        BodyPart::Hip => &["GB29", "GB30", "GB31", "BL36", "BL54", "ST31", "GB34", "BL40"],
        BodyPart::Neck => &[
            "GB20", "GB21", "BL10", "SI14", "SI15", "DU14", "GB39", "SJ5", "BL11", "SI3",
        ],
        BodyPart::MidBack => &[
            "BL13", "BL15", "BL17", "BL18", "BL19", "BL20", "DU9", "SI11", "BL43",
        ],
        BodyPart::LowerBack => &[
            "BL23", "BL25", "BL40", "BL52", "DU4", "DU3", "GB30", "BL57", "BL60",
        ],
        BodyPart::Wrist | BodyPart::Ankle | BodyPart::Foot | BodyPart::Hand | BodyPart::Head => {
            &[]
        }
    }
}

/// Distal points matched by keywords in the diagnostic patterns. Order
/// follows the first matching keyword; duplicates are dropped.
pub fn pattern_points(local_pattern: &str, systemic_pattern: &str) -> Vec<&'static str> {
    const TABLE: &[(&str, &[&str])] = &[
        ("liver qi", &["LR3", "LI4", "PC6"]),
        ("kidney", &["KI3", "KI7", "BL23"]),
        ("spleen", &["SP6", "ST36", "REN12"]),
        ("blood stasis", &["SP10", "BL17", "SP6"]),
        ("damp", &["SP9", "ST40"]),
        ("wind", &["GB20", "LI4"]),
        ("cold", &["DU4", "ST36"]),
        ("qi stagnation", &["LI4", "LR3"]),
    ];
    const DEFAULT: &[&str] = &["LI4", "LR3", "SP6"];

    let text = format!("{local_pattern} {systemic_pattern}").to_ascii_lowercase();
    let mut points: Vec<&'static str> = Vec::new();
    for (keyword, candidates) in TABLE {
        if text.contains(keyword) {
            for point in *candidates {
                if !points.contains(point) {
                    points.push(*point);
                }
            }
        }
    }
    if points.is_empty() {
        points.extend_from_slice(DEFAULT);
    }
    points
}
