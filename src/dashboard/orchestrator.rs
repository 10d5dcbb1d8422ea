use std::collections::BTreeMap;

use crate::{
    aggregate::kpi::{Kpis, compute_kpis_with},
    dashboard::{
        config::DashboardConfig,
        graph::{Artifact, Input, evaluation_order},
    },
    foundation::error::DelayscopeResult,
    records::store::RecordStore,
    render::{
        chart::{AggregateDataset, aggregate, draw},
        plan::{ChartKind, DrawingInstructionSet},
    },
    selection::{
        filter::{FilteredView, filter},
        state::{ActiveView, SelectionState},
    },
};

/// Where the dashboard is within a recompute cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Filtering,
    Rendering,
}

/// Everything one cycle derived. Replaced whole at the end of the next cycle.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cycle: u64,
    pub selection: SelectionState,
    pub view: FilteredView,
    pub kpis: Kpis,
    /// Only the charts of `selection.active_view()`.
    pub datasets: BTreeMap<ChartKind, AggregateDataset>,
    pub drawings: BTreeMap<ChartKind, DrawingInstructionSet>,
}

/// Summary of one finished cycle.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub trigger: Input,
    pub phases: Vec<Phase>,
    pub charts: Vec<ChartKind>,
    /// Artifacts of this cycle that read `trigger`, directly or transitively. Every artifact is
    /// still recomputed.
    pub invalidated: Vec<Artifact>,
}

/// Reactive dashboard state: records, selection and config in; one consistent [`Frame`] out.
///
/// Every mutation runs a full cycle (Idle → Filtering → Rendering → Idle) before returning,
/// rendering only the charts of the active view. Filtering covers the filter, the KPIs and the
/// view's reducers; Rendering starts with the first drawing.
#[derive(Debug)]
pub struct Dashboard {
    store: RecordStore,
    universe: Vec<String>,
    selection: SelectionState,
    config: DashboardConfig,
    phase: Phase,
    frame: Frame,
}

impl Dashboard {
    pub fn new(store: RecordStore, config: DashboardConfig) -> DelayscopeResult<Self> {
        Self::with_selection(store, config, SelectionState::default())
    }

    pub fn with_selection(
        store: RecordStore,
        config: DashboardConfig,
        selection: SelectionState,
    ) -> DelayscopeResult<Self> {
        config.validate()?;
        let universe = store.carriers();
        let mut dashboard = Self {
            store,
            universe,
            selection,
            config,
            phase: Phase::Idle,
            frame: Frame::default(),
        };
        dashboard.recompute(Input::Records);
        Ok(dashboard)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn kpis(&self) -> Kpis {
        self.frame.kpis
    }

    pub fn drawing(&self, kind: ChartKind) -> Option<&DrawingInstructionSet> {
        self.frame.drawings.get(&kind)
    }

    pub fn toggle_carrier(&mut self, code: &str) -> CycleReport {
        self.selection.toggle_carrier(code);
        self.recompute(Input::Selection)
    }

    pub fn toggle_airport(&mut self, code: &str) -> CycleReport {
        self.selection.toggle_airport(code);
        self.recompute(Input::Selection)
    }

    /// Rejects indices above 11 without running a cycle.
    pub fn set_month_range(&mut self, start: u8, end: u8) -> DelayscopeResult<CycleReport> {
        self.selection.set_month_range(start, end)?;
        Ok(self.recompute(Input::Selection))
    }

    pub fn clear_filters(&mut self) -> CycleReport {
        self.selection.clear_filters();
        self.recompute(Input::Selection)
    }

    pub fn set_active_view(&mut self, view: ActiveView) -> CycleReport {
        self.selection.set_active_view(view);
        self.recompute(Input::ActiveView)
    }

    pub fn replace_records(&mut self, store: RecordStore) -> CycleReport {
        self.universe = store.carriers();
        self.store = store;
        self.recompute(Input::Records)
    }

    pub fn replace_config(&mut self, config: DashboardConfig) -> DelayscopeResult<CycleReport> {
        config.validate()?;
        self.config = config;
        Ok(self.recompute(Input::Config))
    }

    /// Apply several selection changes with a single cycle.
    ///
    /// When `apply` fails the selection is left untouched and no cycle runs.
    pub fn update<F>(&mut self, apply: F) -> DelayscopeResult<CycleReport>
    where
        F: FnOnce(&mut SelectionState) -> DelayscopeResult<()>,
    {
        let mut next = self.selection.clone();
        apply(&mut next)?;

        let only_view = {
            let mut same_filters = next.clone();
            same_filters.set_active_view(self.selection.active_view());
            same_filters == self.selection && next.active_view() != self.selection.active_view()
        };
        self.selection = next;
        let trigger = if only_view {
            Input::ActiveView
        } else {
            Input::Selection
        };
        Ok(self.recompute(trigger))
    }

    fn enter(&mut self, phase: Phase, phases: &mut Vec<Phase>) {
        tracing::debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
        phases.push(phase);
    }

    #[tracing::instrument(skip(self), fields(cycle = self.frame.cycle + 1))]
    fn recompute(&mut self, trigger: Input) -> CycleReport {
        let cycle = self.frame.cycle + 1;
        let mut phases = Vec::with_capacity(3);
        let mut next = Frame {
            cycle,
            selection: self.selection.clone(),
            ..Frame::default()
        };

        self.enter(Phase::Filtering, &mut phases);
        let order = evaluation_order(self.selection.active_view());
        for artifact in &order {
            if matches!(artifact, Artifact::Drawing(_)) && self.phase != Phase::Rendering {
                self.enter(Phase::Rendering, &mut phases);
            }
            match *artifact {
                Artifact::FilteredView => next.view = filter(&self.store, &self.selection),
                Artifact::Kpis => {
                    next.kpis = compute_kpis_with(&next.view, self.config.on_time_threshold)
                }
                Artifact::Aggregate(kind) => {
                    let dataset = aggregate(kind, &next.view, &self.config, &self.universe);
                    next.datasets.insert(kind, dataset);
                }
                Artifact::Drawing(kind) => {
                    if let Some(dataset) = next.datasets.get(&kind) {
                        next.drawings.insert(kind, draw(dataset, &self.config));
                    }
                }
            }
        }
        if self.phase != Phase::Rendering {
            self.enter(Phase::Rendering, &mut phases);
        }

        let charts: Vec<ChartKind> = next.drawings.keys().copied().collect();
        let invalidated: Vec<Artifact> = order
            .into_iter()
            .filter(|artifact| artifact.is_affected_by(trigger))
            .collect();
        self.frame = next;
        self.enter(Phase::Idle, &mut phases);
        tracing::debug!(
            ?trigger,
            records = self.frame.view.len(),
            charts = charts.len(),
            "cycle finished"
        );

        CycleReport {
            cycle,
            trigger,
            phases,
            charts,
            invalidated,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/orchestrator.rs"]
mod tests;
