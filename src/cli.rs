//! Command-line arguments and output of the `labeltree` binary.

use crate::model::{DEFAULT_ID_PREFIX, LabelTree, LabelTreeBuilder, outline};
use crate::parser::label_source::read_label_file;
use crate::parser::parsing_error::Result;
use crate::render::defs::{DEFAULT_HEADER_PREFIX, DEFAULT_MOUNT_ID};
use crate::render::{self, Document, RenderConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Accordion HTML fragment
    Html,
    /// Nested JSON outline
    Json,
    /// Indented plain-text outline
    Text,
}

/// Command-line arguments for labeltree
#[derive(Parser, Debug)]
#[command(name = "labeltree")]
#[command(about = "Rebuild a dotted taxonomy label list as a tree")]
#[command(version)]
pub struct Args {
    /// Taxonomy file, one label per line
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html, env = "LABELTREE_FORMAT")]
    pub format: Format,

    /// Id of the element holding the accordion
    #[arg(long, default_value = DEFAULT_MOUNT_ID, env = "LABELTREE_MOUNT_ID")]
    pub mount_id: String,

    /// Prefix of node ids
    #[arg(long, default_value = DEFAULT_ID_PREFIX, env = "LABELTREE_ID_PREFIX")]
    pub id_prefix: String,

    /// Prefix of header ids, prepended to the node id
    #[arg(long, default_value = DEFAULT_HEADER_PREFIX, env = "LABELTREE_HEADER_PREFIX")]
    pub header_prefix: String,

    /// Render groups expanded
    #[arg(long, env = "LABELTREE_EXPANDED")]
    pub expanded: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Returns the render settings given on the command line.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_id_prefix(self.id_prefix.as_str())
            .with_header_prefix(self.header_prefix.as_str())
            .with_expanded(self.expanded)
    }
}

/// Reads the taxonomy file named in `args` and formats it.
///
/// # Errors
/// Returns [LabelTreeError::Io](crate::LabelTreeError::Io) if the file
/// cannot be read, or the errors of [format_labels].
pub fn run(args: &Args) -> Result<String> {
    let labels = read_label_file(&args.file)?;
    info!("Read {} labels from {}", labels.len(), args.file.display());
    format_labels(args, &labels)
}

/// Formats labels in the output format selected by `args`.
///
/// # Errors
/// Returns [LabelTreeError::OutlineTooDeep](crate::LabelTreeError::OutlineTooDeep)
/// if a JSON outline nests too deep.
pub fn format_labels(args: &Args, labels: &[String]) -> Result<String> {
    match args.format {
        Format::Html => {
            let (mut doc, mount) = Document::checklist(&args.mount_id, labels);
            let tree = render::rebuild(&mut doc, &mount, &args.render_config());
            info!("Rendered {} groups", tree.num_nodes());
            Ok(render::to_html(&doc, mount))
        }
        Format::Json => outline::to_json_pretty(&build(args, labels)),
        Format::Text => Ok(render::to_text_outline(&build(args, labels))),
    }
}

fn build(args: &Args, labels: &[String]) -> LabelTree {
    let mut builder = LabelTreeBuilder::with_capacity(labels.len()).with_id_prefix(args.id_prefix.as_str());
    for label in labels {
        builder.add_label(label);
    }
    builder.finish()
}
