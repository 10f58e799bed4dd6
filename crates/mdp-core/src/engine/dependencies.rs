use super::config::ValidationConfig;
use super::diagnostic::{Diagnostic, DiagnosticCode, Severity, TextRange};
use crate::core::catalog::Catalog;
use crate::core::syntax::AssignmentRecord;
use crate::core::utils::names;
use std::collections::HashMap;

/// Condition on the controlling parameter's value. Comparisons ignore case.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    NotEqual(&'static str),
    Equal(&'static str),
}

impl Trigger {
    fn fires(&self, value: &str) -> bool {
        match self {
            Trigger::NotEqual(off) => !value.eq_ignore_ascii_case(off),
            Trigger::Equal(on) => value.eq_ignore_ascii_case(on),
        }
    }
}

/// "When `controller` is active, each of `companions` should be present."
struct CompanionRule {
    controller: &'static str,
    trigger: Trigger,
    companions: &'static [&'static str],
    severity: Severity,
    code: DiagnosticCode,
    /// `{parameter}` is replaced with the missing companion's name.
    template: &'static str,
}

const COMPANION_RULES: &[CompanionRule] = &[
    CompanionRule {
        controller: "tcoupl",
        trigger: Trigger::NotEqual("no"),
        companions: &["tau-t", "ref-t"],
        severity: Severity::Warning,
        code: DiagnosticCode::MissingDependentParameter,
        template: "Parameter {parameter} is required when tcoupl is not \"no\"",
    },
    CompanionRule {
        controller: "pcoupl",
        trigger: Trigger::NotEqual("no"),
        companions: &["tau-p", "ref-p"],
        severity: Severity::Warning,
        code: DiagnosticCode::MissingDependentParameter,
        template: "Parameter {parameter} is required when pcoupl is not \"no\"",
    },
    CompanionRule {
        controller: "coulombtype",
        trigger: Trigger::Equal("PME"),
        companions: &["fourierspacing"],
        severity: Severity::Information,
        code: DiagnosticCode::MissingRecommendedParameter,
        template: "Parameter {parameter} is recommended when using PME",
    },
    CompanionRule {
        controller: "constraints",
        trigger: Trigger::NotEqual("none"),
        companions: &["constraint-algorithm"],
        severity: Severity::Information,
        code: DiagnosticCode::MissingDependentParameter,
        template: "Parameter {parameter} should be specified when using constraints",
    },
    CompanionRule {
        controller: "free-energy",
        trigger: Trigger::Equal("yes"),
        companions: &["init-lambda-state", "delta-lambda"],
        severity: Severity::Warning,
        code: DiagnosticCode::MissingDependentParameter,
        template: "Parameter {parameter} is required for free energy calculations",
    },
];

/// The assignments of one document, keyed by canonical parameter name.
///
/// The first occurrence of each parameter wins; later ones are kept aside as
/// duplicates. Unknown names are keyed by their hyphenated form, so `my_opt` and
/// `my-opt` still collide.
pub struct DocumentParameters<'a> {
    catalog: &'a Catalog,
    first: HashMap<String, &'a AssignmentRecord>,
    duplicates: Vec<(&'a AssignmentRecord, &'a AssignmentRecord)>,
}

impl<'a> DocumentParameters<'a> {
    pub fn collect<I>(catalog: &'a Catalog, records: I) -> Self
    where
        I: IntoIterator<Item = &'a AssignmentRecord>,
    {
        let mut first: HashMap<String, &'a AssignmentRecord> = HashMap::new();
        let mut duplicates = Vec::new();

        for record in records {
            let key = canonical_key(catalog, &record.parameter_name);
            match first.get(&key) {
                Some(&original) => duplicates.push((original, record)),
                None => {
                    first.insert(key, record);
                }
            }
        }

        Self {
            catalog,
            first,
            duplicates,
        }
    }

    /// The first assignment of `name`, in any spelling.
    pub fn get(&self, name: &str) -> Option<&'a AssignmentRecord> {
        self.first.get(&canonical_key(self.catalog, name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct parameters assigned.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Pairs of (first occurrence, later occurrence), in document order of the
    /// later line.
    pub fn duplicates(&self) -> &[(&'a AssignmentRecord, &'a AssignmentRecord)] {
        &self.duplicates
    }
}

/// The name used to decide whether two spellings denote the same parameter.
pub fn canonical_key(catalog: &Catalog, name: &str) -> String {
    catalog
        .canonical_name(name)
        .map(str::to_string)
        .unwrap_or_else(|| names::hyphenated(name))
}

/// A `duplicate-parameter` warning at each later occurrence.
pub fn check_duplicates(parameters: &DocumentParameters<'_>) -> Vec<Diagnostic> {
    parameters
        .duplicates()
        .iter()
        .map(|(original, repeat)| {
            Diagnostic::warning(
                name_range(repeat),
                DiagnosticCode::DuplicateParameter,
                format!(
                    "Duplicate parameter '{}'. Previous definition at line {}",
                    repeat.parameter_name,
                    original.line_number + 1
                ),
            )
        })
        .collect()
}

/// Companion parameters implied by the value of a controlling parameter.
///
/// Findings are anchored at the controlling parameter's name. A controller
/// without a value triggers nothing; its own diagnostic already covers it.
pub fn check_companions(parameters: &DocumentParameters<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for rule in COMPANION_RULES {
        let Some(controller) = parameters.get(rule.controller) else {
            continue;
        };
        if !controller.has_value() || !rule.trigger.fires(&controller.raw_value) {
            continue;
        }
        for companion in rule.companions {
            if !parameters.contains(companion) {
                diagnostics.push(Diagnostic::new(
                    name_range(controller),
                    rule.severity,
                    rule.code,
                    rule.template.replace("{parameter}", companion),
                ));
            }
        }
    }

    diagnostics
}

/// Document-wide presence checks, anchored at the start of the document.
pub fn check_presence(
    parameters: &DocumentParameters<'_>,
    config: &ValidationConfig,
) -> Vec<Diagnostic> {
    let required = config
        .required
        .iter()
        .filter(|name| !parameters.contains(name))
        .map(|name| {
            Diagnostic::error(
                TextRange::document_start(),
                DiagnosticCode::MissingRequiredParameter,
                format!("Missing required parameter: {}", name),
            )
        });
    let recommended = config
        .recommended
        .iter()
        .filter(|name| !parameters.contains(name))
        .map(|name| {
            Diagnostic::information(
                TextRange::document_start(),
                DiagnosticCode::MissingRecommendedParameter,
                format!("Recommended parameter not found: {}", name),
            )
        });
    required.chain(recommended).collect()
}

fn name_range(record: &AssignmentRecord) -> TextRange {
    TextRange::from_byte_span(record.line_number, &record.raw_line, &record.name_span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::syntax::{ParsedLine, parse_document};

    fn records(text: &str) -> Vec<AssignmentRecord> {
        parse_document(text)
            .into_iter()
            .filter_map(|line| match line {
                ParsedLine::Assignment(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn collect_keys_spellings_canonically() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("tau_t = 0.1\nmy_option = 1\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        assert_eq!(parameters.len(), 2);
        assert!(parameters.contains("tau-t"));
        assert!(parameters.contains("tau_t"));
        assert!(parameters.contains("my-option"));
        assert!(!parameters.is_empty());
    }

    #[test]
    fn duplicates_reference_first_line_and_anchor_at_repeat() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("integrator = md\n\n\n\n  integrator = steep\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_duplicates(&parameters);

        assert_eq!(diagnostics.len(), 1);
        let duplicate = &diagnostics[0];
        assert_eq!(duplicate.code, DiagnosticCode::DuplicateParameter);
        assert_eq!(duplicate.severity, Severity::Warning);
        assert_eq!(duplicate.range, TextRange::new(4, 2, 12));
        assert_eq!(
            duplicate.message,
            "Duplicate parameter 'integrator'. Previous definition at line 1"
        );
    }

    #[test]
    fn duplicates_span_hyphen_and_underscore_spellings() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("ref-t = 300\nref_t = 310\nref-t = 320\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_duplicates(&parameters);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.message.ends_with("line 1")));
        assert_eq!(diagnostics[0].line(), 1);
        assert_eq!(diagnostics[1].line(), 2);
    }

    #[test]
    fn temperature_coupling_requires_tau_t_and_ref_t() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("integrator = md\ntcoupl = v-rescale\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_companions(&parameters);

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Parameter tau-t is required when tcoupl is not \"no\"",
                "Parameter ref-t is required when tcoupl is not \"no\"",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
        assert!(diagnostics.iter().all(|d| d.range == TextRange::new(1, 0, 6)));
    }

    #[test]
    fn companions_in_either_spelling_satisfy_rules() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("tcoupl = v-rescale\ntau_t = 0.1\nref_t = 300\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        assert!(check_companions(&parameters).is_empty());
    }

    #[test]
    fn inactive_controllers_trigger_nothing() {
        let catalog = Catalog::builtin().unwrap();
        let text = "tcoupl = No\npcoupl = no\nconstraints = none\nfree-energy = no\ncoulombtype = Cut-off\n";
        let records = records(text);
        let parameters = DocumentParameters::collect(&catalog, &records);
        assert!(check_companions(&parameters).is_empty());
    }

    #[test]
    fn controller_without_value_triggers_nothing() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("tcoupl =\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        assert!(check_companions(&parameters).is_empty());
    }

    #[test]
    fn pressure_coupling_reports_canonical_names() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("pcoupl = C-rescale\ntau-p = 2.0\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_companions(&parameters);
        assert_eq!(
            messages(&diagnostics),
            vec!["Parameter ref-p is required when pcoupl is not \"no\""]
        );
    }

    #[test]
    fn pme_recommends_fourierspacing_as_information() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("coulombtype = pme\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_companions(&parameters);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Information);
        assert_eq!(diagnostics[0].code, DiagnosticCode::MissingRecommendedParameter);
        assert_eq!(
            diagnostics[0].message,
            "Parameter fourierspacing is recommended when using PME"
        );
    }

    #[test]
    fn constraints_and_free_energy_rules() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("constraints = h-bonds\nfree_energy = YES\ninit-lambda-state = 0\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_companions(&parameters);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Parameter constraint-algorithm should be specified when using constraints",
                "Parameter delta-lambda is required for free energy calculations",
            ]
        );
        assert_eq!(diagnostics[0].severity, Severity::Information);
        assert_eq!(diagnostics[1].severity, Severity::Warning);
        assert_eq!(diagnostics[1].line(), 1);
    }

    #[test]
    fn presence_checks_follow_config() {
        let catalog = Catalog::builtin().unwrap();
        let records = records("nstlist = 10\n");
        let parameters = DocumentParameters::collect(&catalog, &records);
        let diagnostics = check_presence(&parameters, &ValidationConfig::default());

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Missing required parameter: integrator",
                "Recommended parameter not found: coulombtype",
                "Recommended parameter not found: vdwtype",
            ]
        );
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics.iter().all(|d| d.range == TextRange::document_start()));

        let config = ValidationConfig {
            required: vec![],
            recommended: vec![],
            ..ValidationConfig::default()
        };
        assert!(check_presence(&parameters, &config).is_empty());
    }
}
