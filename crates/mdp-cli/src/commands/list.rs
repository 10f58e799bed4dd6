use crate::error::{CliError, Result};
use mdpcheck::Catalog;
use mdpcheck::core::catalog::categories::category_title;
use std::io::Write;

pub fn run(
    category: Option<&str>,
    categories: bool,
    catalog: &Catalog,
    out: &mut dyn Write,
) -> Result<()> {
    if categories {
        for tag in catalog.categories() {
            writeln!(
                out,
                "{:<32} {:>4}  {}",
                tag,
                catalog.by_category(tag).count(),
                category_title(tag)
            )?;
        }
        return Ok(());
    }

    let definitions: Vec<_> = match category {
        Some(tag) => {
            let selected: Vec<_> = catalog.by_category(tag).collect();
            if selected.is_empty() {
                return Err(CliError::Argument(format!(
                    "Unknown category '{}'. Run `mdpcheck list --categories` to see all categories.",
                    tag
                )));
            }
            selected
        }
        None => catalog.iter().collect(),
    };

    let width = definitions
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(0);
    for definition in definitions {
        let default = definition.default_value.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:<width$}  {:<8} {}",
            definition.name,
            definition.kind.as_str(),
            default,
            width = width
        )?;
    }
    Ok(())
}
