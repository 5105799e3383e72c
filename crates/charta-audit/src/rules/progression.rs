use std::cmp::Ordering;

use charta_core::models::document::VisitRecord;
use charta_core::models::visit::{acupoint_overlap, parse_symptom_scale};
use charta_ladders::Dimension;
use charta_narrative::measure::movement_key;

use super::{EPSILON, RuleContext, graded_fields, present, rom_field};
use crate::violation::{RuleId, Section, Violation};

/// Checks over two consecutive visits.
pub(crate) fn check_pair(
    ctx: &RuleContext<'_>,
    previous: &VisitRecord,
    current: &VisitRecord,
    out: &mut Vec<Violation>,
) {
    let index = Some(current.index);

    if current.index <= previous.index {
        out.push(
            Violation::new(
                RuleId::IndexOrder,
                index,
                Section::Header,
                "index",
                "visit index does not increase",
            )
            .with_expected(format!("greater than {}", previous.index))
            .with_actual(current.index.to_string()),
        );
    }
    if let (Some(before), Some(after)) = (previous.date, current.date)
        && after < before
    {
        out.push(
            Violation::new(
                RuleId::DateOrder,
                index,
                Section::Header,
                "date",
                "visit is dated before the previous visit",
            )
            .with_expected(format!("on or after {before}"))
            .with_actual(after.to_string()),
        );
    }

    for (before, after) in graded_fields(previous).into_iter().zip(graded_fields(current)) {
        let (Some(prev_label), Some(cur_label)) = (before.label, after.label) else {
            continue;
        };
        if ctx.model.worsened(after.dimension, prev_label, cur_label) == Some(true) {
            out.push(
                Violation::new(
                    after.worsened,
                    index,
                    after.section,
                    after.field,
                    format!("{} got worse since the previous visit", after.field),
                )
                .with_expected(format!("no worse than {prev_label}"))
                .with_actual(cur_label),
            );
        }
    }

    if let (Some(before), Some(after)) = (
        present(&previous.symptom_scale).and_then(parse_symptom_scale),
        present(&current.symptom_scale).and_then(parse_symptom_scale),
    ) && after > before
    {
        out.push(
            Violation::new(
                RuleId::SymptomIncreased,
                index,
                Section::Subjective,
                "symptom_scale",
                "symptom scale rose since the previous visit",
            )
            .with_expected(format!("at most {before}%"))
            .with_actual(format!("{after}%")),
        );
    }

    check_rom(ctx, previous, current, out);

    if !previous.acupoints.is_empty() && !current.acupoints.is_empty() {
        let overlap = acupoint_overlap(&previous.acupoints, &current.acupoints);
        let minimum = ctx.policy.min_acupoint_overlap;
        if overlap + EPSILON < minimum {
            out.push(
                Violation::new(
                    RuleId::AcupointContinuity,
                    index,
                    Section::Plan,
                    "acupoints",
                    "treatment points changed too much from the previous visit",
                )
                .with_expected(format!("at least {:.0}% shared", minimum * 100.0))
                .with_actual(format!("{:.0}% shared", overlap * 100.0)),
            );
        }
    }
}

fn check_rom(
    ctx: &RuleContext<'_>,
    previous: &VisitRecord,
    current: &VisitRecord,
    out: &mut Vec<Violation>,
) {
    let index = Some(current.index);

    for row in &current.rom {
        let key = movement_key(&row.movement);
        let Some(before) = previous
            .rom
            .iter()
            .find(|r| r.side == row.side && movement_key(&r.movement) == key)
        else {
            continue;
        };

        if let (Some(prev_degrees), Some(cur_degrees)) = (before.degrees, row.degrees)
            && cur_degrees < prev_degrees - EPSILON
        {
            out.push(
                Violation::new(
                    RuleId::RomDecreased,
                    index,
                    Section::Objective,
                    rom_field(&key, row.side, "degrees"),
                    format!("{} range of motion decreased", row.movement),
                )
                .with_expected(format!("at least {prev_degrees}"))
                .with_actual(cur_degrees.to_string()),
            );
        }

        let (Some(prev_label), Some(cur_label)) = (present(&before.strength), present(&row.strength))
        else {
            continue;
        };
        if ctx.model.compare(Dimension::Strength, cur_label, prev_label) == Some(Ordering::Greater) {
            out.push(
                Violation::new(
                    RuleId::StrengthDecreased,
                    index,
                    Section::Objective,
                    rom_field(&key, row.side, "strength"),
                    format!("{} strength decreased", row.movement),
                )
                .with_expected(format!("at least {prev_label}"))
                .with_actual(cur_label),
            );
        }
    }
}

/// Tongue and pulse must match the evaluation baseline.
pub(crate) fn check_baseline(
    baseline: &VisitRecord,
    current: &VisitRecord,
    out: &mut Vec<Violation>,
) {
    for (field, expected, actual) in [
        ("tongue", &baseline.tongue, &current.tongue),
        ("pulse", &baseline.pulse, &current.pulse),
    ] {
        if let (Some(expected), Some(actual)) = (present(expected), present(actual))
            && !expected.eq_ignore_ascii_case(actual)
        {
            out.push(
                Violation::new(
                    RuleId::TonguePulseChanged,
                    Some(current.index),
                    Section::Objective,
                    field,
                    format!("{field} differs from the evaluation baseline"),
                )
                .with_expected(expected)
                .with_actual(actual),
            );
        }
    }
}
