use std::fmt;

use nanofab_core::Material;
use serde::{Deserialize, Serialize};

/// One user-level process step.
///
/// `masked` steps only touch columns exposed by the current photomask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStep {
    /// Grow one layer of a material.
    Deposit {
        material: Material,
        #[serde(default)]
        masked: bool,
    },
    /// Blanket photoresist coat.
    SpinCoat,
    /// Remove the top layer.
    Etch {
        #[serde(default)]
        masked: bool,
    },
    /// Expose through the photomask and dissolve exposed resist.
    Develop,
    /// Strip resist and everything on top of it (plasma clean).
    Liftoff,
    /// Chemical-mechanical polish to the lowest surface.
    Planarize,
}

impl ProcessStep {
    /// Whether the step cannot run without an exposure pattern.
    pub fn needs_pattern(&self) -> bool {
        match self {
            ProcessStep::Deposit { masked, .. } | ProcessStep::Etch { masked } => *masked,
            ProcessStep::Develop => true,
            ProcessStep::SpinCoat | ProcessStep::Liftoff | ProcessStep::Planarize => false,
        }
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStep::Deposit { material, masked } => {
                write!(f, "Deposit {material}")?;
                if *masked {
                    f.write_str(" (masked)")?;
                }
                Ok(())
            }
            ProcessStep::SpinCoat => f.write_str("Spin Photoresist"),
            ProcessStep::Etch { masked: false } => f.write_str("Dry Etch"),
            ProcessStep::Etch { masked: true } => f.write_str("Dry Etch (masked)"),
            ProcessStep::Develop => f.write_str("Expose & Develop"),
            ProcessStep::Liftoff => f.write_str("Plasma Clean"),
            ProcessStep::Planarize => f.write_str("CMP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_pattern() {
        assert!(ProcessStep::Develop.needs_pattern());
        assert!(ProcessStep::Etch { masked: true }.needs_pattern());
        assert!(!ProcessStep::Etch { masked: false }.needs_pattern());
        assert!(!ProcessStep::Liftoff.needs_pattern());
        assert!(ProcessStep::Deposit {
            material: Material::Copper,
            masked: true
        }
        .needs_pattern());
    }

    #[test]
    fn test_recipe_from_ron() {
        let ron = r#"[
            SpinCoat,
            Develop,
            Deposit(material: copper),
            Etch(masked: true),
            Liftoff,
            Planarize,
        ]"#;
        let steps: Vec<ProcessStep> = ron::from_str(ron).expect("should parse");
        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[2],
            ProcessStep::Deposit {
                material: Material::Copper,
                masked: false
            }
        );
        assert_eq!(steps[3], ProcessStep::Etch { masked: true });
    }

    #[test]
    fn test_display() {
        assert_eq!(ProcessStep::Planarize.to_string(), "CMP");
        assert_eq!(
            ProcessStep::Deposit {
                material: Material::SiliconOxide,
                masked: false
            }
            .to_string(),
            "Deposit SiO2"
        );
    }
}
