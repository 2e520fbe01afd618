use crate::types::scoring::clamp_score;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resource {
    #[serde(rename = "JS")]
    Js,
    #[serde(rename = "CSS")]
    Css,
    Images,
    Fonts,
}

impl Resource {
    pub const ALL: [Resource; 4] = [Resource::Js, Resource::Css, Resource::Images, Resource::Fonts];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Js => "JS",
            Resource::Css => "CSS",
            Resource::Images => "Images",
            Resource::Fonts => "Fonts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// How strongly `from` blocks `to` at the given score.
pub fn severity(from: Resource, to: Resource, performance_score: f64) -> Severity {
    use Resource::{Css, Fonts, Images, Js};

    if from == to {
        return Severity::None;
    }

    let score = clamp_score(performance_score);
    if score >= 85.0 {
        return match (from, to) {
            (Js, Images) | (Js, Fonts) => Severity::Medium,
            _ => Severity::Low,
        };
    }

    if score >= 60.0 {
        return match (from, to) {
            (Js, _) => Severity::High,
            (Css, Fonts) => Severity::Medium,
            _ => Severity::Low,
        };
    }

    match from {
        Js => Severity::High,
        Css => Severity::Medium,
        _ => Severity::Low,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyMatrix {
    pub resources: [Resource; 4],
    /// Row = blocking resource, column = blocked resource.
    pub cells: [[Severity; 4]; 4],
}

impl DependencyMatrix {
    pub fn get(&self, from: Resource, to: Resource) -> Severity {
        let index = |resource: Resource| {
            Resource::ALL
                .iter()
                .position(|candidate| *candidate == resource)
                .unwrap_or_default()
        };
        self.cells[index(from)][index(to)]
    }
}

pub fn generate(performance_score: f64) -> DependencyMatrix {
    let cells = Resource::ALL.map(|from| {
        Resource::ALL.map(|to| severity(from, to, performance_score))
    });
    DependencyMatrix {
        resources: Resource::ALL,
        cells,
    }
}
