//! # Content Catalog
//!
//! Compile-time content for the landing and workspace views: subjects, the
//! visualization carousel, the feature highlights, the footer and the fixed
//! simulation list of each subject.
//!
//! Everything here is `'static` and immutable for the life of the process.

use serde::Serialize;

/// The three learning subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    /// All subjects in card order.
    pub fn all() -> &'static [Subject] {
        &[Subject::Physics, Subject::Chemistry, Subject::Mathematics]
    }

    /// Display name, also used as the prompt context.
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// Card blurb on the landing view.
    pub fn description(&self) -> &'static str {
        match self {
            Subject::Physics => {
                "Discover the fundamental laws that govern our universe through interactive experiments and simulations."
            }
            Subject::Chemistry => {
                "Visualize molecular structures, chemical reactions, and laboratory experiments in an interactive environment."
            }
            Subject::Mathematics => {
                "Master complex mathematical concepts through step-by-step problem solving and visual representations."
            }
        }
    }

    /// Card accent colour as RGB.
    pub fn accent_rgb(&self) -> [u8; 3] {
        match self {
            Subject::Physics => [220, 38, 38],
            Subject::Chemistry => [22, 163, 74],
            Subject::Mathematics => [37, 99, 235],
        }
    }

    /// Icon for the subject card.
    pub fn icon(&self) -> Icon {
        match self {
            Subject::Physics => Icon::Atom,
            Subject::Chemistry => Icon::Beaker,
            Subject::Mathematics => Icon::Calculator,
        }
    }

    /// Fixed simulation list shown in this subject's workspace.
    pub fn simulations(&self) -> &'static [Simulation] {
        match self {
            Subject::Physics => PHYSICS_SIMULATIONS,
            Subject::Chemistry => CHEMISTRY_SIMULATIONS,
            Subject::Mathematics => MATHEMATICS_SIMULATIONS,
        }
    }

    /// Look up a simulation of this subject by id.
    pub fn simulation(&self, id: &str) -> Option<&'static Simulation> {
        self.simulations().iter().find(|sim| sim.id == id)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbolic icon reference; the UI maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Atom,
    Beaker,
    Calculator,
    Cube,
    Microscope,
    LineChart,
    Users,
    Book,
    Award,
    GraduationCap,
}

/// One entry of the rotating carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub image_url: &'static str,
}

/// The carousel content. Its length is the rotation modulus.
pub static VISUALIZATIONS: &[VisualizationDescriptor] = &[
    VisualizationDescriptor {
        title: "3D Projections",
        description: "Experience geometric shapes and mathematical concepts through interactive 3D projections that bring abstract ideas to life.",
        icon: Icon::Cube,
        image_url: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?auto=format&fit=crop&q=80&w=800",
    },
    VisualizationDescriptor {
        title: "Molecular Structures",
        description: "Explore the building blocks of matter with detailed molecular visualizations that showcase chemical bonds and atomic arrangements.",
        icon: Icon::Microscope,
        image_url: "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?auto=format&fit=crop&q=80&w=800",
    },
    VisualizationDescriptor {
        title: "Vector Fields",
        description: "Understand complex physics concepts through dynamic vector field visualizations that demonstrate forces and mathematical relationships.",
        icon: Icon::LineChart,
        image_url: "https://images.unsplash.com/photo-1635241161466-541f065683ba?auto=format&fit=crop&q=80&w=800",
    },
];

/// A "Why choose us" highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Collaborative Learning",
        description: "Learn together with peers through shared virtual experiments",
        icon: Icon::Users,
    },
    Feature {
        title: "Interactive Content",
        description: "Engage with dynamic simulations and 3D visualizations",
        icon: Icon::Book,
    },
    Feature {
        title: "Progress Tracking",
        description: "Monitor your learning journey with detailed analytics",
        icon: Icon::Award,
    },
];

/// A named simulation in a subject workspace. None of them are implemented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

static PHYSICS_SIMULATIONS: &[Simulation] = &[
    Simulation { id: "projectile-motion", title: "Projectile Motion", summary: "Launch angle, initial velocity and gravity." },
    Simulation { id: "pendulum", title: "Pendulum Dynamics", summary: "Period, damping and energy exchange." },
    Simulation { id: "wave-interference", title: "Wave Interference", summary: "Superposition of two coherent sources." },
    Simulation { id: "electric-fields", title: "Electric Fields", summary: "Field lines around point charges." },
];

static CHEMISTRY_SIMULATIONS: &[Simulation] = &[
    Simulation { id: "molecular-bonding", title: "Molecular Bonding", summary: "Covalent and ionic bonds in 3D." },
    Simulation { id: "reaction-kinetics", title: "Reaction Kinetics", summary: "Concentration, temperature and rate." },
    Simulation { id: "gas-laws", title: "Gas Laws", summary: "Pressure, volume and temperature." },
    Simulation { id: "titration", title: "Titration Lab", summary: "Acid-base neutralisation curves." },
];

static MATHEMATICS_SIMULATIONS: &[Simulation] = &[
    Simulation { id: "function-plotter", title: "3D Function Plotter", summary: "Surfaces z = f(x, y)." },
    Simulation { id: "vector-fields", title: "Vector Fields", summary: "Divergence and curl made visible." },
    Simulation { id: "geometric-projections", title: "Geometric Projections", summary: "Polyhedra projected onto planes." },
    Simulation { id: "probability", title: "Probability Explorer", summary: "Distributions by repeated sampling." },
];

/// A footer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const BRAND_NAME: &str = "EduNexus";
pub const BRAND_TAGLINE: &str = "Transforming education through interactive learning experiences.";
pub const HERO_TITLE: &str = "Welcome to Interactive Learning";
pub const HERO_SUBTITLE: &str = "Explore complex topics in Physics, Chemistry, and Mathematics through interactive simulations and visualizations designed to enhance your understanding.";
pub const SEARCH_PLACEHOLDER: &str = "Ask anything about Physics, Chemistry, or Math...";

pub static FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection { heading: "Resources", links: &["Help Center", "Documentation", "Community"] },
    FooterSection { heading: "Legal", links: &["Privacy Policy", "Terms of Service"] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_visualizations() {
        assert_eq!(VISUALIZATIONS.len(), 3);
        assert_eq!(VISUALIZATIONS[0].title, "3D Projections");
        assert!(VISUALIZATIONS.iter().all(|v| v.image_url.starts_with("https://")));
    }

    #[test]
    fn test_simulation_ids_unique_per_subject() {
        for subject in Subject::all() {
            let ids: HashSet<_> = subject.simulations().iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), subject.simulations().len(), "{subject} has duplicate ids");
            assert!(!ids.is_empty());
        }
    }

    #[test]
    fn test_simulation_lookup_is_scoped_to_subject() {
        assert!(Subject::Chemistry.simulation("gas-laws").is_some());
        assert!(Subject::Physics.simulation("gas-laws").is_none());
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(&VISUALIZATIONS[1]).unwrap();
        assert_eq!(json["title"], "Molecular Structures");
        assert_eq!(json["icon"], "Microscope");
    }
}
