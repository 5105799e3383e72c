use std::collections::BTreeMap;

use charta_core::models::document::VisitRecord;
use charta_core::models::visit::{Side, parse_symptom_scale};
use charta_ladders::{Dimension, GradingModel};

/// One ROM row's readable numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RomMeasure {
    pub degrees: Option<f64>,
    pub strength: Option<f64>,
}

/// Numeric view of one visit, read from its written labels. Generated and
/// parsed visits go through the same path so their deltas agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub pain: Option<f64>,
    pub frequency: Option<f64>,
    pub adl: Option<f64>,
    pub symptom: Option<f64>,
    pub tightness: Option<f64>,
    pub tenderness: Option<f64>,
    pub spasm: Option<f64>,
    /// Keyed by normalized movement name and side.
    pub rom: BTreeMap<(String, Side), RomMeasure>,
}

impl Measurements {
    pub fn from_record(model: &GradingModel, record: &VisitRecord) -> Self {
        let read = |dimension: Dimension, label: &Option<String>| {
            label
                .as_deref()
                .and_then(|label| model.value_of(dimension, label))
        };

        let rom = record
            .rom
            .iter()
            .map(|row| {
                let measure = RomMeasure {
                    degrees: row.degrees,
                    strength: read(Dimension::Strength, &row.strength),
                };
                ((movement_key(&row.movement), row.side), measure)
            })
            .collect();

        Self {
            pain: read(Dimension::Pain, &record.pain),
            frequency: read(Dimension::PainFrequency, &record.frequency),
            adl: read(Dimension::AdlSeverity, &record.severity),
            symptom: record
                .symptom_scale
                .as_deref()
                .and_then(parse_symptom_scale)
                .map(f64::from),
            tightness: read(Dimension::Tightness, &record.tightness),
            tenderness: read(Dimension::Tenderness, &record.tenderness),
            spasm: read(Dimension::Spasm, &record.spasm),
            rom,
        }
    }

    /// Mean per-row change of a ROM field over rows present in both visits.
    pub(crate) fn mean_rom_delta(
        &self,
        previous: &Measurements,
        field: impl Fn(&RomMeasure) -> Option<f64>,
    ) -> Option<f64> {
        let deltas: Vec<f64> = self
            .rom
            .iter()
            .filter_map(|(key, current)| {
                let before = previous.rom.get(key)?;
                Some(field(current)? - field(before)?)
            })
            .collect();
        if deltas.is_empty() {
            None
        } else {
            Some(deltas.iter().sum::<f64>() / deltas.len() as f64)
        }
    }
}

/// Movement names are matched case- and whitespace-insensitively.
pub fn movement_key(movement: &str) -> String {
    movement
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
