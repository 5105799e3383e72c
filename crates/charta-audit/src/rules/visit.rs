use std::cmp::Ordering;

use charta_core::models::context::{MedicalHistoryFlag, electrical_stimulation_contraindicated};
use charta_core::models::document::VisitRecord;
use charta_core::models::visit::{VisitType, parse_symptom_scale};
use charta_ladders::Dimension;
use charta_ladders::proportionality::tenderness_floor;
use charta_narrative::measure::movement_key;

use super::{EPSILON, RuleContext, graded_fields, present, rom_field};
use crate::violation::{RuleId, Section, Violation};

/// Checks that need only the one visit (plus chart-level history).
pub(crate) fn check(
    ctx: &RuleContext<'_>,
    history: &[MedicalHistoryFlag],
    record: &VisitRecord,
    out: &mut Vec<Violation>,
) {
    let index = Some(record.index);

    if record.diagnosis.iter().all(|d| d.trim().is_empty()) {
        out.push(Violation::new(
            RuleId::MissingDiagnosis,
            index,
            Section::Assessment,
            "diagnosis",
            "visit has no diagnosis",
        ));
    }
    if record.acupoints.iter().all(|p| p.trim().is_empty()) {
        out.push(Violation::new(
            RuleId::MissingAcupoints,
            index,
            Section::Plan,
            "acupoints",
            "visit has no treatment points",
        ));
    }
    if present(&record.pain).is_none() {
        out.push(Violation::new(
            RuleId::MissingPain,
            index,
            Section::Subjective,
            "pain",
            "visit has no pain rating",
        ));
    }

    match record.visit_type {
        VisitType::InitialEvaluation => {
            check_evaluation(ctx, record, out);
        }
        VisitType::Treatment => {
            if record.goals.is_some() {
                out.push(Violation::new(
                    RuleId::UnexpectedGoals,
                    index,
                    Section::Plan,
                    "goals",
                    "treatment visit restates goals; goals belong to the initial evaluation",
                ));
            }
        }
    }

    check_labels(ctx, record, out);
    check_tenderness_floor(ctx, record, out);

    if record.electrical_stimulation && electrical_stimulation_contraindicated(history) {
        let flags: Vec<String> = history
            .iter()
            .filter(|flag| flag.contraindicates_electrical_stimulation())
            .map(|flag| format!("{flag:?}").to_ascii_lowercase())
            .collect();
        out.push(
            Violation::new(
                RuleId::ContraindicatedStimulation,
                index,
                Section::Plan,
                "electrical_stimulation",
                format!(
                    "electrical stimulation charted despite {}",
                    flags.join(", ")
                ),
            )
            .with_expected("no electrical stimulation")
            .with_actual("electrical stimulation"),
        );
    }
}

fn check_evaluation(ctx: &RuleContext<'_>, record: &VisitRecord, out: &mut Vec<Violation>) {
    let index = Some(record.index);

    match &record.goals {
        None => out.push(Violation::new(
            RuleId::MissingGoals,
            index,
            Section::Plan,
            "goals",
            "initial evaluation has no treatment goals",
        )),
        Some(goals) => {
            if let Some(pain) = present(&record.pain)
                && ctx.model.compare(Dimension::Pain, &goals.short_term.pain, pain)
                    == Some(Ordering::Greater)
            {
                out.push(
                    Violation::new(
                        RuleId::GoalPainAboveBaseline,
                        index,
                        Section::Plan,
                        "goals.short_term.pain",
                        "short-term pain goal is worse than the evaluation pain",
                    )
                    .with_expected(format!("at most {pain}"))
                    .with_actual(goals.short_term.pain.clone()),
                );
            }
        }
    }

    for (field, value) in [("tongue", &record.tongue), ("pulse", &record.pulse)] {
        if present(value).is_none() {
            out.push(Violation::new(
                RuleId::MissingTonguePulse,
                index,
                Section::Objective,
                field,
                format!("initial evaluation has no {field} baseline"),
            ));
        }
    }
}

fn check_labels(ctx: &RuleContext<'_>, record: &VisitRecord, out: &mut Vec<Violation>) {
    let index = Some(record.index);

    let mut label_check = |dimension: Dimension, field: String, section: Section, label: &str| {
        if ctx.model.value_of(dimension, label).is_none() {
            out.push(
                Violation::new(
                    RuleId::UnreadableLabel,
                    index,
                    section,
                    field,
                    format!("label is not on the {dimension} ladder"),
                )
                .with_actual(label),
            );
        } else if !ctx.model.is_allowed(dimension, label) {
            out.push(
                Violation::new(
                    RuleId::LabelNotAllowed,
                    index,
                    section,
                    field,
                    "label is readable but not in the template vocabulary",
                )
                .with_actual(label),
            );
        }
    };

    for graded in graded_fields(record) {
        if let Some(label) = graded.label {
            label_check(graded.dimension, graded.field.to_string(), graded.section, label);
        }
    }
    for row in &record.rom {
        if let Some(label) = present(&row.strength) {
            label_check(
                Dimension::Strength,
                rom_field(&movement_key(&row.movement), row.side, "strength"),
                Section::Objective,
                label,
            );
        }
    }

    if let Some(label) = present(&record.symptom_scale)
        && parse_symptom_scale(label).is_none()
    {
        out.push(
            Violation::new(
                RuleId::UnreadableLabel,
                index,
                Section::Subjective,
                "symptom_scale",
                "symptom scale has no percentage",
            )
            .with_actual(label),
        );
    }
}

fn check_tenderness_floor(ctx: &RuleContext<'_>, record: &VisitRecord, out: &mut Vec<Violation>) {
    let Some(pain) = present(&record.pain).and_then(|l| ctx.model.value_of(Dimension::Pain, l))
    else {
        return;
    };
    let Some(label) = present(&record.tenderness) else {
        return;
    };
    let Some(tenderness) = ctx.model.value_of(Dimension::Tenderness, label) else {
        return;
    };
    if let Some(floor) = tenderness_floor(pain)
        && tenderness < floor - EPSILON
    {
        out.push(
            Violation::new(
                RuleId::TendernessBelowFloor,
                Some(record.index),
                Section::Objective,
                "tenderness",
                format!("tenderness is lighter than pain {pain} implies"),
            )
            .with_expected(format!(
                "at least {}",
                ctx.model.snap(Dimension::Tenderness, floor).label
            ))
            .with_actual(label),
        );
    }
}
