use phf::{Map, phf_map};

static CATEGORY_TITLES: Map<&'static str, &'static str> = phf_map! {
    "preprocessing" => "Preprocessing",
    "run-control" => "Run Control",
    "langevin-dynamics" => "Langevin Dynamics",
    "energy-minimization" => "Energy Minimization",
    "shell-molecular-dynamics" => "Shell Molecular Dynamics",
    "test-particle-insertion" => "Test Particle Insertion",
    "output-control" => "Output Control",
    "neighbor-searching" => "Neighbor Searching",
    "electrostatics" => "Electrostatics",
    "van-der-waals" => "Van der Waals",
    "tables" => "Tables",
    "ewald" => "Ewald",
    "temperature-coupling" => "Temperature Coupling",
    "pressure-coupling" => "Pressure Coupling",
    "simulated-annealing" => "Simulated Annealing",
    "velocity-generation" => "Velocity Generation",
    "bonds" => "Bonds",
    "energy-group-exclusions" => "Energy Group Exclusions",
    "walls" => "Walls",
    "com-pulling" => "COM Pulling",
    "awh-adaptive-biasing" => "AWH Adaptive Biasing",
    "enforced-rotation" => "Enforced Rotation",
    "nmr-refinement" => "NMR Refinement",
    "free-energy-calculations" => "Free Energy Calculations",
    "expanded-ensemble-calculations" => "Expanded Ensemble Calculations",
    "non-equilibrium-md" => "Non-equilibrium MD",
    "electric-fields" => "Electric Fields",
    "qmmm" => "QM/MM",
    "computational-electrophysiology" => "Computational Electrophysiology",
    "density-guided-simulations" => "Density-guided Simulations",
    "qmmm-cp2k" => "QM/MM with CP2K",
    "colvars" => "Collective Variables (Colvars)",
};

/// Human-readable title for a category tag, falling back to the tag itself for
/// categories of custom catalogs.
pub fn category_title(category: &str) -> &str {
    CATEGORY_TITLES.get(category).copied().unwrap_or(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn category_title_maps_known_tags() {
        assert_eq!(category_title("run-control"), "Run Control");
        assert_eq!(category_title("qmmm-cp2k"), "QM/MM with CP2K");
    }

    #[test]
    fn category_title_falls_back_to_tag() {
        assert_eq!(category_title("my-plugin"), "my-plugin");
    }

    #[test]
    fn every_builtin_category_has_a_title() {
        let catalog = Catalog::builtin().unwrap();
        for category in catalog.categories() {
            assert!(
                CATEGORY_TITLES.contains_key(category),
                "no title for category '{}'",
                category
            );
        }
    }
}
