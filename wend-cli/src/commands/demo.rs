//! Demo command implementation.
//!
//! Walks through building, inspecting, simplifying, resolving and rebasing
//! expressions with fixed bindings.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use wend::{Bindings, ExprKind, Param, PathExpr, RelativePath, Template};

/// Run a short demonstration.
#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    /// Execute the demo command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let root = Param::new("root");
        let dataset = Param::new("dataset");

        let data_dir = &root / "data" / &dataset;
        let chunk = Template::parse("chunk_{idx:04d}-of-{total:04d}.parquet")?;
        let chunk_file = &data_dir / chunk;

        let names: Vec<String> = chunk_file.required_params().into_iter().collect();
        println!("Required params: {}", names.join(", "));

        let bindings = Bindings::from([("root", "/mnt/storage"), ("dataset", "train")])
            .with("idx", 7)
            .with("total", 100);
        println!("Resolved: {}", chunk_file.resolve(&bindings)?.display());

        let folded = PathExpr::literal("/home") / "user" / "data";
        println!("Folded: {} ({})", folded, variant_name(folded.kind()));

        let expr = &root / "a" / "b";
        let parent = expr.parent();
        println!("Parent of join: {} ({})", parent, variant_name(parent.kind()));

        let double_suffix = (&root / "file.txt").with_suffix(".tmp").with_suffix(".json");
        println!("Suffix chain: {double_suffix}");

        let config = RelativePath::new(&root, PathExpr::literal("config") / "settings.yaml");
        let project = Bindings::from([("root", "/project")]);
        println!("Config path: {}", config.resolve(&project)?.display());

        let test_config = config.rebase("/tmp/test");
        println!(
            "Test config: {}",
            test_config.resolve(&Bindings::new())?.display()
        );
        Ok(())
    }
}

fn variant_name(kind: &ExprKind) -> &'static str {
    match kind {
        ExprKind::Literal { .. } => "literal",
        ExprKind::ParamRef { .. } => "param",
        ExprKind::Template { .. } => "template",
        ExprKind::Join { .. } => "join",
        ExprKind::Parent { .. } => "parent",
        ExprKind::WithName { .. } => "with_name",
        ExprKind::WithSuffix { .. } => "with_suffix",
    }
}
