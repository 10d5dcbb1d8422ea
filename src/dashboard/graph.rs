use crate::{render::plan::ChartKind, selection::state::ActiveView};

/// Mutable inputs of a recompute cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    Records,
    Selection,
    ActiveView,
    Config,
}

/// Values derived during a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "artifact", content = "chart", rename_all = "snake_case")]
pub enum Artifact {
    FilteredView,
    Kpis,
    Aggregate(ChartKind),
    Drawing(ChartKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dependency {
    Input(Input),
    Artifact(Artifact),
}

impl Artifact {
    /// Direct dependencies.
    pub fn depends_on(self) -> Vec<Dependency> {
        use Dependency::{Artifact as A, Input as I};

        match self {
            Self::FilteredView => vec![I(Input::Records), I(Input::Selection)],
            Self::Kpis => vec![A(Self::FilteredView), I(Input::Config)],
            // The heatmap's universe axis needs the store, not only the filtered view.
            Self::Aggregate(ChartKind::Heatmap) => vec![
                A(Self::FilteredView),
                I(Input::Records),
                I(Input::Config),
            ],
            Self::Aggregate(_) => vec![A(Self::FilteredView), I(Input::Config)],
            Self::Drawing(kind) => vec![
                A(Self::Aggregate(kind)),
                I(Input::ActiveView),
                I(Input::Config),
            ],
        }
    }

    /// Whether a change to `input` reaches this artifact, directly or through upstream artifacts.
    pub fn is_affected_by(self, input: Input) -> bool {
        self.depends_on().into_iter().any(|dep| match dep {
            Dependency::Input(direct) => direct == input,
            Dependency::Artifact(upstream) => upstream.is_affected_by(input),
        })
    }

    pub fn chart(self) -> Option<ChartKind> {
        match self {
            Self::Aggregate(kind) | Self::Drawing(kind) => Some(kind),
            Self::FilteredView | Self::Kpis => None,
        }
    }
}

/// Artifacts needed to show `view`, each listed after everything it depends on.
///
/// Every aggregate of the view comes before the first drawing.
pub fn evaluation_order(view: ActiveView) -> Vec<Artifact> {
    let mut order = Vec::new();
    visit(Artifact::Kpis, &mut order);
    for &kind in view.charts() {
        visit(Artifact::Aggregate(kind), &mut order);
    }
    for &kind in view.charts() {
        visit(Artifact::Drawing(kind), &mut order);
    }
    order
}

fn visit(artifact: Artifact, order: &mut Vec<Artifact>) {
    if order.contains(&artifact) {
        return;
    }
    for dep in artifact.depends_on() {
        if let Dependency::Artifact(upstream) = dep {
            visit(upstream, order);
        }
    }
    order.push(artifact);
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/graph.rs"]
mod tests;
