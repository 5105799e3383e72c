use charta_core::models::context::BodyPart;

/// A charted joint movement with its normal range in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub name: &'static str,
    pub normal_degrees: f64,
}

const fn movement(name: &'static str, normal_degrees: f64) -> Movement {
    Movement {
        name,
        normal_degrees,
    }
}

static KNEE: [Movement; 1] = [movement("Flexion", 135.0)];

static SHOULDER: [Movement; 6] = [
    movement("Flexion", 180.0),
    movement("Extension", 60.0),
    movement("Abduction", 180.0),
    movement("Adduction", 45.0),
    movement("Internal rotation", 90.0),
    movement("External rotation", 90.0),
];

static ELBOW: [Movement; 3] = [
    movement("Flexion", 150.0),
    movement("Supination", 80.0),
    movement("Pronation", 80.0),
];

static HIP: [Movement; 6] = [
    movement("Flexion", 120.0),
    movement("Extension", 30.0),
    movement("Abduction", 45.0),
    movement("Adduction", 30.0),
    movement("Internal rotation", 45.0),
    movement("External rotation", 45.0),
];

static NECK: [Movement; 6] = [
    movement("Flexion", 50.0),
    movement("Extension", 60.0),
    movement("Left lateral flexion", 45.0),
    movement("Right lateral flexion", 45.0),
    movement("Left rotation", 80.0),
    movement("Right rotation", 80.0),
];

static MID_BACK: [Movement; 3] = [
    movement("Flexion", 50.0),
    movement("Left rotation", 30.0),
    movement("Right rotation", 30.0),
];

static LOWER_BACK: [Movement; 4] = [
    movement("Flexion", 60.0),
    movement("Extension", 25.0),
    movement("Left lateral flexion", 25.0),
    movement("Right lateral flexion", 25.0),
];

/// Movement catalog for a region; `None` when the region has no ROM table,
/// which makes it ungeneratable.
pub fn movements(body_part: BodyPart) -> Option<&'static [Movement]> {
    match body_part {
        BodyPart::Knee => Some(&KNEE),
        BodyPart::Shoulder => Some(&SHOULDER),
        BodyPart::Elbow => Some(&ELBOW),
        BodyPart::Hip => Some(&HIP),
        BodyPart::Neck => Some(&NECK),
        BodyPart::MidBack => Some(&MID_BACK),
        BodyPart::LowerBack => Some(&LOWER_BACK),
        BodyPart::Wrist | BodyPart::Ankle | BodyPart::Foot | BodyPart::Hand | BodyPart::Head => {
            None
        }
    }
}

/// Fraction of normal range lost at baseline for a severity step (1..=5).
pub fn baseline_limitation(step: u8) -> f64 {
    match step {
        0 | 1 => 0.15,
        2 => 0.25,
        3 => 0.35,
        4 => 0.45,
        _ => 0.55,
    }
}
