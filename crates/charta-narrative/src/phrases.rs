use charta_core::models::narrative::{AssessmentCategory, ReasonPhrase};

/// How many words back a negator still applies ("has not really improved").
const NEGATION_REACH: usize = 3;

const NEGATORS: &[&str] = &[
    "no", "not", "without", "never", "nor", "cannot", "hasn't", "haven't", "isn't", "wasn't",
    "didn't", "doesn't", "don't", "can't", "won't", "hardly",
];

const WORSENING_STEMS: &[&str] = &["exacerbat", "flar", "worse", "aggravat"];
const IMPROVEMENT_WORDS: &[&str] = &["improvement", "improved", "improving", "better"];
const SLIGHT_WORDS: &[&str] = &["slight", "slightly", "mild", "mildly", "somewhat"];
const SIMILAR_WORDS: &[&str] = &["similar", "same", "unchanged", "stable"];
const CHANGE_WORDS: &[&str] = &["change", "changes", "difference"];

const GOOD_WORDS: &[&str] = &[
    "improved", "improving", "improvement", "better", "easier", "eased", "resolved",
];
const BAD_WORDS: &[&str] = &["worse", "worsened", "worsening", "aggravated", "harder"];
const DOWN_WORDS: &[&str] = &[
    "decreased", "decrease", "decreasing", "reduced", "reduction", "less", "lessened", "fewer",
    "lower", "diminished",
];
const UP_WORDS: &[&str] = &[
    "increased", "increase", "increasing", "more", "higher", "greater", "longer", "stronger",
];

/// A phrase split into lowercase words, one clause at a time. Negation never
/// reaches across a comma or a "but".
fn clauses(text: &str) -> Vec<Vec<String>> {
    let lower = text.to_lowercase().replace(['\u{2019}', '`'], "'");
    lower
        .split([',', '.', ';', ':', '!', '?', '(', ')'])
        .flat_map(|part| {
            let words: Vec<String> = part
                .split(|c: char| !c.is_alphanumeric() && c != '\'')
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            let mut split = Vec::new();
            let mut current = Vec::new();
            for word in words {
                if word == "but" || word == "although" || word == "however" {
                    split.push(std::mem::take(&mut current));
                } else {
                    current.push(word);
                }
            }
            split.push(current);
            split
        })
        .filter(|clause| !clause.is_empty())
        .collect()
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn negated(clause: &[String], position: usize) -> bool {
    clause[position.saturating_sub(NEGATION_REACH)..position]
        .iter()
        .any(|w| is_negator(w))
}

/// Words in `clause` matching `matches`, each paired with whether it is negated.
fn cues(clause: &[String], matches: impl Fn(&str) -> bool) -> impl Iterator<Item = bool> {
    clause
        .iter()
        .enumerate()
        .filter(move |(_, word)| matches(word.as_str()))
        .map(move |(position, _)| negated(clause, position))
}

/// Read the assessment category out of written assessment or subjective text.
///
/// Negated claims never count as improvement or exacerbation: "no
/// improvement" and "no worse" both read as similar symptoms. `None` when
/// the text states no direction.
pub fn classify_assessment(text: &str) -> Option<AssessmentCategory> {
    let mut worsened = false;
    let mut slight = false;
    let mut improved = false;
    let mut similar = false;

    for clause in clauses(text) {
        for is_negated in cues(&clause, |w| WORSENING_STEMS.iter().any(|s| w.starts_with(*s))) {
            if is_negated {
                similar = true;
            } else {
                worsened = true;
            }
        }
        for (position, word) in clause.iter().enumerate() {
            if !IMPROVEMENT_WORDS.contains(&word.as_str()) {
                continue;
            }
            if negated(&clause, position) {
                similar = true;
            } else if position > 0 && SLIGHT_WORDS.contains(&clause[position - 1].as_str()) {
                slight = true;
            } else {
                improved = true;
            }
        }
        if cues(&clause, |w| SIMILAR_WORDS.contains(&w)).any(|is_negated| !is_negated)
            || cues(&clause, |w| CHANGE_WORDS.contains(&w)).any(|is_negated| is_negated)
        {
            similar = true;
        }
    }

    if worsened {
        Some(AssessmentCategory::Exacerbation)
    } else if slight {
        Some(AssessmentCategory::SlightImprovement)
    } else if improved {
        Some(AssessmentCategory::Improvement)
    } else if similar {
        Some(AssessmentCategory::SimilarSymptoms)
    } else {
        None
    }
}

/// Words naming what a reason talks about, most specific reasons first so
/// "pain episodes are less frequent" is about frequency, not intensity.
const SUBJECTS: &[(ReasonPhrase, &[&str])] = &[
    (ReasonPhrase::LessFrequentPain, &["frequen", "less often"]),
    (
        ReasonPhrase::LongerActivityTolerance,
        &["for longer", "longer periods", "tolerance"],
    ),
    (
        ReasonPhrase::EasierDailyActivities,
        &["daily activities", "daily living", "adl"],
    ),
    (ReasonPhrase::ReducedSymptoms, &["symptom"]),
    (ReasonPhrase::ReducedTightness, &["tight"]),
    (ReasonPhrase::DecreasedTenderness, &["tender"]),
    (ReasonPhrase::FewerSpasms, &["spasm"]),
    (
        ReasonPhrase::IncreasedRangeOfMotion,
        &["range of motion", "mobility", "rom"],
    ),
    (ReasonPhrase::ImprovedStrength, &["strength", "stronger"]),
    (ReasonPhrase::DecreasedPainIntensity, &["pain"]),
];

/// Reasons whose good direction is up rather than down.
fn more_is_better(reason: ReasonPhrase) -> bool {
    matches!(
        reason,
        ReasonPhrase::LongerActivityTolerance
            | ReasonPhrase::IncreasedRangeOfMotion
            | ReasonPhrase::ImprovedStrength
    )
}

fn mentions(words: &[String], joined: &str, key: &str) -> bool {
    if key.len() <= 3 && !key.contains(' ') {
        words.iter().any(|w| w == key)
    } else {
        joined.contains(key)
    }
}

/// Map a written reason phrase back onto the catalogue.
///
/// Every catalogue reason claims its dimension improved, so a phrase only
/// maps when it reads as an improvement. "increased tenderness" or "no
/// decrease in pain" report something else and return `None`.
pub fn classify_reason(text: &str) -> Option<ReasonPhrase> {
    let clauses = clauses(text);
    let words: Vec<String> = clauses.iter().flatten().cloned().collect();
    let joined = words.join(" ");

    let reason = SUBJECTS
        .iter()
        .find(|(_, keys)| keys.iter().any(|key| mentions(&words, &joined, key)))
        .map(|(reason, _)| *reason)?;

    let mut good = false;
    let mut bad = false;
    for clause in &clauses {
        for (position, word) in clause.iter().enumerate() {
            let word = word.as_str();
            let improves = if GOOD_WORDS.contains(&word) {
                true
            } else if BAD_WORDS.contains(&word) {
                false
            } else if UP_WORDS.contains(&word) {
                more_is_better(reason)
            } else if DOWN_WORDS.contains(&word) {
                !more_is_better(reason)
            } else {
                continue;
            };
            // A negated worsening ("not increased") says no change, not improvement.
            match (improves, negated(clause, position)) {
                (true, false) => good = true,
                (true, true) | (false, false) => bad = true,
                (false, true) => {}
            }
        }
    }

    (good && !bad).then_some(reason)
}
