use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::LadderError;
use crate::{Dimension, all_ladders};

/// Template-legal label strings per dimension. Supplied by the caller once;
/// the engine never invents a label outside this list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelVocabulary {
    pub labels: BTreeMap<Dimension, Vec<String>>,
}

impl LabelVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the allow-list for one dimension. Injecting the same dimension
    /// twice is a configuration error.
    pub fn insert(
        &mut self,
        dimension: Dimension,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), LadderError> {
        if self.labels.contains_key(&dimension) {
            return Err(LadderError::DuplicateDimension(dimension));
        }
        self.labels
            .insert(dimension, labels.into_iter().map(Into::into).collect());
        Ok(())
    }

    pub fn with(
        mut self,
        dimension: Dimension,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, LadderError> {
        self.insert(dimension, labels)?;
        Ok(self)
    }

    pub fn get(&self, dimension: Dimension) -> Option<&[String]> {
        self.labels.get(&dimension).map(Vec::as_slice)
    }

    /// The stock template phrases: every canonical rung of every ladder.
    pub fn standard() -> Self {
        let labels = all_ladders()
            .iter()
            .map(|ladder| {
                let rungs = ladder.rungs().iter().map(|r| r.label.clone()).collect();
                (ladder.dimension(), rungs)
            })
            .collect();
        Self { labels }
    }

    pub fn from_json(json: &str) -> Result<Self, LadderError> {
        Ok(serde_json::from_str(json)?)
    }
}
