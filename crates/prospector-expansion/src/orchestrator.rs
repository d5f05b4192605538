//! Single-flight vertical expansion over a shared working set.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use prospector_core::{ClassifiedProspect, ProspectRecord, Scope, UserLocale};
use prospector_scope::ScopeClassifier;
use prospector_taxonomy::IndustryTaxonomyIndex;

use crate::error::ExpansionError;
use crate::generator::ProspectGenerator;
use crate::types::{
    ExpansionOutcome, ExpansionRequest, ExploredVerticalEntry, GenerationRequest, InFlight,
};

#[derive(Debug)]
struct State {
    locale: UserLocale,
    explored: Vec<ExploredVerticalEntry>,
    expanding: Option<InFlight>,
    base: Vec<ProspectRecord>,
    expanded: Vec<ProspectRecord>,
}

/// Owns the working prospect set and the explored-vertical ledger.
///
/// Every UI surface shares one orchestrator, so at most one expansion runs in
/// total. Only a successful expansion mutates the record sets or the ledger.
/// Read methods return classified copies computed from the current locale.
pub struct ExpansionOrchestrator<G> {
    generator: G,
    classifier: ScopeClassifier,
    state: Mutex<State>,
}

impl<G: ProspectGenerator> ExpansionOrchestrator<G> {
    #[must_use]
    pub fn new(
        generator: G,
        classifier: ScopeClassifier,
        locale: UserLocale,
        base_records: Vec<ProspectRecord>,
    ) -> Self {
        Self {
            generator,
            classifier,
            state: Mutex::new(State {
                locale,
                explored: Vec::new(),
                expanding: None,
                base: base_records,
                expanded: Vec::new(),
            }),
        }
    }

    /// Seed the ledger, e.g. from entries persisted by an earlier session.
    #[must_use]
    pub fn with_ledger(self, entries: Vec<ExploredVerticalEntry>) -> Self {
        self.lock().explored = entries;
        self
    }

    /// Replace the core record set. Expanded records are kept.
    pub fn set_base_records(&self, records: Vec<ProspectRecord>) {
        self.lock().base = records;
    }

    /// Update the viewer's location or radius. Subsequent reads reclassify.
    pub fn set_locale(&self, locale: UserLocale) {
        self.lock().locale = locale;
    }

    #[must_use]
    pub fn locale(&self) -> UserLocale {
        self.lock().locale.clone()
    }

    #[must_use]
    pub fn expanding(&self) -> Option<InFlight> {
        self.lock().expanding.clone()
    }

    #[must_use]
    pub fn is_expanding(&self) -> bool {
        self.lock().expanding.is_some()
    }

    /// Snapshot of the explored-vertical ledger.
    #[must_use]
    pub fn explored(&self) -> Vec<ExploredVerticalEntry> {
        self.lock().explored.clone()
    }

    #[must_use]
    pub fn times_expanded(&self, vertical_id: &str) -> u32 {
        self.lock()
            .explored
            .iter()
            .find(|e| e.vertical_id == vertical_id)
            .map_or(0, |e| e.times_expanded)
    }

    #[must_use]
    pub fn expanded_records(&self) -> Vec<ProspectRecord> {
        self.lock().expanded.clone()
    }

    /// Base and expanded records, in that order, each classified against the
    /// current locale.
    #[must_use]
    pub fn all_records(&self) -> Vec<ClassifiedProspect> {
        let state = self.lock();
        self.classifier
            .classify_all(state.base.iter().chain(state.expanded.iter()), &state.locale)
    }

    /// Generate prospects for one vertical and merge them into the working set.
    ///
    /// Returns [`ExpansionOutcome::Ignored`] without calling the generator when
    /// another expansion is already in flight.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::Generator`] if the generator fails. The ledger
    /// and record sets are left as they were and the in-flight marker is cleared.
    pub async fn expand_vertical(
        &self,
        request: ExpansionRequest,
    ) -> Result<ExpansionOutcome, ExpansionError> {
        let locale = {
            let mut state = self.lock();
            if let Some(in_flight) = &state.expanding {
                tracing::warn!(
                    requested = %request.vertical_id,
                    in_flight = %in_flight.vertical_id,
                    "expansion already in flight; ignoring request"
                );
                return Ok(ExpansionOutcome::Ignored {
                    in_flight: in_flight.clone(),
                });
            }
            state.expanding = Some(InFlight {
                vertical_id: request.vertical_id.clone(),
                scope: request.scope,
            });
            state.locale.clone()
        };
        let mut marker = InFlightMarker::new(&self.state);

        tracing::info!(
            vertical = %request.vertical_id,
            sector = %request.sector_name,
            scope = %request.scope,
            "starting vertical expansion"
        );

        let generation = GenerationRequest::new(&request, &locale);
        let records = match self.generator.generate(&generation).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    vertical = %request.vertical_id,
                    error = %e,
                    "vertical expansion failed"
                );
                return Err(e.into());
            }
        };

        let added = records.len();
        {
            let mut state = self.lock();
            state
                .expanded
                .extend(records.into_iter().map(|mut record| {
                    record.source_vertical = Some(request.vertical_id.clone());
                    record
                }));
            record_expansion(&mut state.explored, &request);
            state.expanding = None;
            marker.disarm();
        }

        tracing::info!(
            vertical = %request.vertical_id,
            added,
            times_expanded = self.times_expanded(&request.vertical_id),
            "vertical expansion complete"
        );

        Ok(ExpansionOutcome::Completed {
            vertical_id: request.vertical_id,
            added,
        })
    }

    /// Look up `vertical_id` in `index` and expand it.
    ///
    /// # Errors
    ///
    /// Returns [`ExpansionError::UnknownVertical`] if the index has no such
    /// vertical, otherwise as [`Self::expand_vertical`].
    pub async fn expand_from_index(
        &self,
        index: &IndustryTaxonomyIndex,
        vertical_id: &str,
        scope: Scope,
    ) -> Result<ExpansionOutcome, ExpansionError> {
        let vertical = index
            .get(vertical_id)
            .ok_or_else(|| ExpansionError::UnknownVertical(vertical_id.to_string()))?;
        self.expand_vertical(ExpansionRequest::for_vertical(vertical, scope))
            .await
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        lock_state(&self.state)
    }
}

/// State mutations never panic mid-update, so a poisoned lock still holds
/// consistent data.
fn lock_state(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Upsert the ledger row for `request`'s vertical, whatever scope was asked for.
fn record_expansion(explored: &mut Vec<ExploredVerticalEntry>, request: &ExpansionRequest) {
    let now = Utc::now();
    if let Some(entry) = explored
        .iter_mut()
        .find(|e| e.vertical_id == request.vertical_id)
    {
        entry.times_expanded += 1;
        entry.last_expanded_at = now;
    } else {
        explored.push(ExploredVerticalEntry {
            vertical_id: request.vertical_id.clone(),
            vertical_name: request.vertical_name.clone(),
            sector_name: request.sector_name.clone(),
            times_expanded: 1,
            last_expanded_at: now,
        });
    }
}

/// Clears the in-flight marker if the expansion exits early, including when
/// its future is dropped before completion.
struct InFlightMarker<'a> {
    state: &'a Mutex<State>,
    armed: bool,
}

impl<'a> InFlightMarker<'a> {
    fn new(state: &'a Mutex<State>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightMarker<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock_state(self.state).expanding = None;
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
