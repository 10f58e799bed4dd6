use super::hover::render_summary;
use crate::core::catalog::{Catalog, ParameterDefinition, ParameterType};
use crate::core::syntax::line::byte_offset;
use crate::core::utils::names;
use itertools::Itertools;
use phf::{Map, Set, phf_map, phf_set};
use regex::Regex;
use std::sync::LazyLock;

static VALUE_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(.*)$")
        .expect("internal value-context pattern must compile")
});

static NAME_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)?$")
        .expect("internal name-context pattern must compile")
});

/// Parameters listed ahead of the rest in name completions.
static COMMON_PARAMETERS: Set<&'static str> = phf_set! {
    "integrator", "dt", "nsteps", "tcoupl", "pcoupl", "constraints",
};

/// Short explanations for frequently used enum values, keyed by
/// `parameter/value` in lower case.
static VALUE_NOTES: Map<&'static str, &'static str> = phf_map! {
    "integrator/md" => "Leap-frog integrator",
    "integrator/md-vv" => "Velocity-verlet integrator",
    "integrator/sd" => "Stochastic dynamics integrator",
    "integrator/bd" => "Brownian dynamics",
    "integrator/steep" => "Steepest descent minimization",
    "integrator/cg" => "Conjugate gradient minimization",
    "integrator/l-bfgs" => "Limited-memory Broyden-Fletcher-Goldfarb-Shanno minimization",
    "coulombtype/pme" => "Particle-Mesh Ewald for long-range electrostatics",
    "coulombtype/cut-off" => "Simple cutoff",
    "coulombtype/reaction-field" => "Reaction field method",
    "coulombtype/ewald" => "Classical Ewald summation",
    "vdwtype/cut-off" => "Simple cutoff for van der Waals",
    "vdwtype/switch" => "Switching function",
    "vdwtype/shift" => "Force-shifted potential",
    "vdwtype/pme" => "Particle-Mesh Ewald for Lennard-Jones",
    "tcoupl/no" => "No temperature coupling",
    "tcoupl/berendsen" => "Berendsen weak coupling",
    "tcoupl/nose-hoover" => "Nose-Hoover extended ensemble",
    "tcoupl/v-rescale" => "Velocity rescaling with correct kinetic energy distribution",
    "tcoupl/andersen" => "Andersen thermostat",
    "tcoupl/andersen-massive" => "Andersen thermostat with massive collisions",
    "pcoupl/no" => "No pressure coupling",
    "pcoupl/berendsen" => "Berendsen weak coupling",
    "pcoupl/parrinello-rahman" => "Extended-ensemble pressure coupling",
    "pcoupl/mttk" => "Martyna-Tobias-Klein barostat",
    "pcoupl/c-rescale" => "C-rescale barostat",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Parameter,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    /// Markdown.
    pub documentation: Option<String>,
    pub insert_text: String,
    /// Editors order items by this key instead of the label.
    pub sort_text: String,
}

/// Completions for a cursor at character `column` of `line`.
///
/// Only the text before the cursor matters. After a `;` nothing is offered.
/// After `name =` the candidates are the values of that parameter; at the start
/// of a line, or while typing a name, they are parameter names filtered by the
/// typed prefix.
pub fn complete(catalog: &Catalog, line: &str, column: usize) -> Vec<CompletionItem> {
    let before = &line[..byte_offset(line, column)];
    if before.contains(';') {
        return Vec::new();
    }

    if let Some(captures) = VALUE_CONTEXT.captures(before) {
        return captures
            .get(1)
            .and_then(|name| catalog.lookup(name.as_str()))
            .map(value_completions)
            .unwrap_or_default();
    }

    match NAME_CONTEXT.captures(before) {
        Some(captures) => {
            let prefix = captures.get(1).map_or("", |m| m.as_str());
            name_completions(catalog, prefix)
        }
        None => Vec::new(),
    }
}

fn name_completions(catalog: &Catalog, prefix: &str) -> Vec<CompletionItem> {
    let prefix = names::hyphenated(&prefix.to_ascii_lowercase());
    catalog
        .iter()
        .filter(|definition| {
            names::hyphenated(&definition.name.to_ascii_lowercase()).starts_with(&prefix)
        })
        .map(|definition| {
            let rank = if COMMON_PARAMETERS.contains(definition.name.as_str()) {
                0
            } else {
                1
            };
            CompletionItem {
                label: definition.name.clone(),
                kind: CompletionKind::Parameter,
                detail: definition.description.lines().next().unwrap_or_default().to_string(),
                documentation: Some(render_summary(definition)),
                insert_text: format!(
                    "{} = {}",
                    definition.name,
                    definition.default_value.as_deref().unwrap_or_default()
                ),
                sort_text: format!("{}_{}", rank, definition.name),
            }
        })
        .collect()
}

fn value_completions(definition: &ParameterDefinition) -> Vec<CompletionItem> {
    let mut items: Vec<CompletionItem> = definition
        .valid_values
        .iter()
        .map(|value| {
            let key = format!(
                "{}/{}",
                definition.name,
                value.to_ascii_lowercase()
            );
            let note = VALUE_NOTES
                .get(key.as_str())
                .map(|note| note.to_string())
                .unwrap_or_else(|| format!("Value: **{}**", value));
            value_item(value, format!("Valid value for {}", definition.name), Some(note))
        })
        .collect();

    match definition.kind {
        ParameterType::Integer | ParameterType::Real => {
            if let Some(default) = &definition.default_value {
                let unit = definition
                    .unit
                    .as_deref()
                    .map(|unit| format!(" {}", unit))
                    .unwrap_or_default();
                items.push(value_item(
                    default,
                    format!("Default value for {}", definition.name),
                    Some(format!("Default: {}{}", default, unit)),
                ));
            }
            if let Some(range) = definition.effective_range() {
                if let Some(min) = range.min {
                    items.push(value_item(
                        &min.to_string(),
                        format!("Minimum value for {}", definition.name),
                        None,
                    ));
                }
                if let Some(max) = range.max {
                    items.push(value_item(
                        &max.to_string(),
                        format!("Maximum value for {}", definition.name),
                        None,
                    ));
                }
            }
        }
        ParameterType::Boolean => {
            for value in ["yes", "no"] {
                items.push(value_item(
                    value,
                    format!("Boolean value for {}", definition.name),
                    None,
                ));
            }
        }
        ParameterType::Enum | ParameterType::String => {}
    }

    items
        .into_iter()
        .unique_by(|item| item.label.clone())
        .enumerate()
        .map(|(position, mut item)| {
            item.sort_text = format!("{:03}", position);
            item
        })
        .collect()
}

fn value_item(label: &str, detail: String, documentation: Option<String>) -> CompletionItem {
    CompletionItem {
        label: label.to_string(),
        kind: CompletionKind::Value,
        detail,
        documentation,
        insert_text: label.to_string(),
        sort_text: String::new(),
    }
}
