use crate::config::load_config;
use crate::diagrams::{self, Diagram};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen-diagrams", version, about = "Generate the book's explanatory SVG diagrams")]
pub struct Args {
    /// Output root directory
    #[arg(short = 'o', long = "out-dir", default_value = "docs/assets/images/diagrams")]
    pub out_dir: PathBuf,

    /// Write all files directly under the output root (legacy layout)
    #[arg(long = "flat")]
    pub flat: bool,

    /// Render only the named diagrams (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// List diagram names and chapters, then exit
    #[arg(long = "list")]
    pub list: bool,

    /// Theme config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    if args.list {
        for diagram in diagrams::all() {
            println!("{:<26} {}", diagram.name, diagram.chapter.dir_name());
        }
        return Ok(());
    }

    let selected = select(&args.only)?;
    let total = selected.len();
    for (idx, diagram) in selected.iter().enumerate() {
        let path = diagrams::write_diagram(diagram, &args.out_dir, args.flat, &config.theme)?;
        println!("[{:2}/{total}] {} -> {}", idx + 1, diagram.name, path.display());
    }
    println!("done: {total} diagrams under {}", args.out_dir.display());
    Ok(())
}

fn select(only: &[String]) -> Result<Vec<&'static Diagram>> {
    if only.is_empty() {
        return Ok(diagrams::all().iter().collect());
    }
    let mut selected = Vec::new();
    for name in only {
        let diagram = diagrams::find(name)
            .ok_or_else(|| anyhow::anyhow!("unknown diagram name: {name}"))?;
        selected.push(diagram);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_defaults_to_full_registry() {
        assert_eq!(select(&[]).unwrap().len(), 16);
    }

    #[test]
    fn select_rejects_unknown_names() {
        let err = select(&["no-such-diagram".to_string()]).unwrap_err();
        assert!(err.to_string().contains("no-such-diagram"));
    }

    #[test]
    fn select_keeps_request_order() {
        let names = ["book-roadmap".to_string(), "ai-hierarchy-pyramid".to_string()];
        let selected = select(&names).unwrap();
        assert_eq!(selected[0].name, "book-roadmap");
        assert_eq!(selected[1].name, "ai-hierarchy-pyramid");
    }
}
