use crate::theme::Theme;
use anyhow::Context;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

pub mod foundations;
pub mod generative;
pub mod limits;
pub mod prompting;
pub mod roadmap;
pub mod tones;

/// Output subdirectory key. `Index` holds front-matter diagrams, the rest
/// map onto the book chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chapter {
    Index,
    Ch01,
    Ch02,
    Ch03,
    Ch04,
    Ch05,
}

impl Chapter {
    pub fn dir_name(self) -> &'static str {
        match self {
            Chapter::Index => "index",
            Chapter::Ch01 => "ch01",
            Chapter::Ch02 => "ch02",
            Chapter::Ch03 => "ch03",
            Chapter::Ch04 => "ch04",
            Chapter::Ch05 => "ch05",
        }
    }
}

#[derive(Debug)]
pub struct Diagram {
    pub name: &'static str,
    pub chapter: Chapter,
    pub render: fn(&Theme) -> String,
}

impl Diagram {
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }

    pub fn output_path(&self, root: &Path, flat: bool) -> PathBuf {
        if flat {
            root.join(self.file_name())
        } else {
            root.join(self.chapter.dir_name()).join(self.file_name())
        }
    }
}

static REGISTRY: Lazy<Vec<Diagram>> = Lazy::new(|| {
    use Chapter::*;
    vec![
        Diagram {
            name: "digital-humanities-timeline",
            chapter: Ch01,
            render: foundations::digital_humanities_timeline,
        },
        Diagram {
            name: "ai-hierarchy-pyramid",
            chapter: Ch01,
            render: foundations::ai_hierarchy_pyramid,
        },
        Diagram {
            name: "ai-landscape-grid",
            chapter: Ch01,
            render: foundations::ai_landscape_grid,
        },
        Diagram {
            name: "search-vs-generative",
            chapter: Ch02,
            render: generative::search_vs_generative,
        },
        Diagram {
            name: "ml-era-timeline",
            chapter: Ch02,
            render: generative::ml_era_timeline,
        },
        Diagram {
            name: "data-evolution-flow",
            chapter: Ch02,
            render: generative::data_evolution_flow,
        },
        Diagram {
            name: "ai-working-principle",
            chapter: Ch02,
            render: generative::ai_working_principle,
        },
        Diagram {
            name: "data-misconceptions",
            chapter: Ch02,
            render: generative::data_misconceptions,
        },
        Diagram {
            name: "prompt-4-principles",
            chapter: Ch03,
            render: prompting::prompt_4_principles,
        },
        Diagram {
            name: "prompt-before-after",
            chapter: Ch03,
            render: prompting::prompt_before_after,
        },
        Diagram {
            name: "tone-combination-formula",
            chapter: Ch04,
            render: tones::tone_combination_formula,
        },
        Diagram {
            name: "six-tones-radar",
            chapter: Ch04,
            render: tones::six_tones_radar,
        },
        Diagram {
            name: "ai-writing-problems",
            chapter: Ch04,
            render: tones::ai_writing_problems,
        },
        Diagram {
            name: "multiturn-strategy",
            chapter: Ch03,
            render: prompting::multiturn_strategy,
        },
        Diagram {
            name: "ai-limitations-overview",
            chapter: Ch05,
            render: limits::ai_limitations_overview,
        },
        Diagram {
            name: "book-roadmap",
            chapter: Index,
            render: roadmap::book_roadmap,
        },
    ]
});

pub fn all() -> &'static [Diagram] {
    &REGISTRY
}

pub fn find(name: &str) -> Option<&'static Diagram> {
    REGISTRY.iter().find(|d| d.name == name)
}

/// Render one diagram and write it at its documented path, creating the
/// parent directory if missing. Existing files are overwritten.
pub fn write_diagram(diagram: &Diagram, root: &Path, flat: bool, theme: &Theme) -> anyhow::Result<PathBuf> {
    let path = diagram.output_path(root, flat);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let svg = (diagram.render)(theme);
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Render and write all 16 diagrams. Returns the file count.
pub fn generate(root: &Path, flat: bool, theme: &Theme) -> anyhow::Result<usize> {
    for diagram in all() {
        write_diagram(diagram, root, flat, theme)?;
    }
    Ok(all().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_holds_sixteen_unique_names() {
        assert_eq!(all().len(), 16);
        let names: HashSet<&str> = all().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn registry_order_and_chapters_match_the_book() {
        let expected = [
            ("digital-humanities-timeline", "ch01"),
            ("ai-hierarchy-pyramid", "ch01"),
            ("ai-landscape-grid", "ch01"),
            ("search-vs-generative", "ch02"),
            ("ml-era-timeline", "ch02"),
            ("data-evolution-flow", "ch02"),
            ("ai-working-principle", "ch02"),
            ("data-misconceptions", "ch02"),
            ("prompt-4-principles", "ch03"),
            ("prompt-before-after", "ch03"),
            ("tone-combination-formula", "ch04"),
            ("six-tones-radar", "ch04"),
            ("ai-writing-problems", "ch04"),
            ("multiturn-strategy", "ch03"),
            ("ai-limitations-overview", "ch05"),
            ("book-roadmap", "index"),
        ];
        for (diagram, (name, dir)) in all().iter().zip(expected) {
            assert_eq!(diagram.name, name);
            assert_eq!(diagram.chapter.dir_name(), dir);
        }
    }

    #[test]
    fn output_path_honors_layout() {
        let diagram = find("six-tones-radar").unwrap();
        let root = Path::new("out");
        assert_eq!(
            diagram.output_path(root, false),
            Path::new("out/ch04/six-tones-radar.svg")
        );
        assert_eq!(
            diagram.output_path(root, true),
            Path::new("out/six-tones-radar.svg")
        );
    }
}
