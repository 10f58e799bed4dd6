use crate::error::{CliError, Result};
use mdpcheck::Catalog;
use mdpcheck::core::utils::similarity::{SuggestionPolicy, suggest};
use mdpcheck::workflows::hover::render_documentation;
use std::io::Write;

pub fn run(parameter: &str, catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    let Some(definition) = catalog.lookup(parameter) else {
        let suggestions = suggest(parameter, catalog.all_names(), SuggestionPolicy::default());
        let mut message = format!("Unknown parameter '{}'", parameter);
        if !suggestions.is_empty() {
            message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
        }
        return Err(CliError::Argument(message));
    };

    writeln!(out, "{}", render_documentation(definition).trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_parameter_prints_documentation() {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        run("pme_order", &catalog, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("### pme-order"));
        assert!(text.contains("#mdp-pme-order"));
    }

    #[test]
    fn unknown_parameter_suggests_alternatives() {
        let catalog = Catalog::builtin().unwrap();
        let result = run("tcoupll", &catalog, &mut Vec::new());
        assert!(matches!(
            result,
            Err(CliError::Argument(msg)) if msg.contains("Did you mean: tcoupl")
        ));
    }
}
