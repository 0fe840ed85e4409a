use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::args::CliArgs;
use rpcdoc::introspect::{Introspector, SubstitutionContext, TypeUniverse};
use rpcdoc::metadata::{
    EntityDescriptor, InterfaceDescriptor, SkippedMember, describe_entity, describe_interface,
};

/// Everything one run documents.
#[derive(Debug, Serialize)]
pub struct Document {
    pub interfaces: Vec<InterfaceDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityDescriptor>,
    /// Interfaces that could not be documented at all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<SkippedMember>,
}

pub fn load_universe(path: &Path) -> Result<TypeUniverse> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    TypeUniverse::from_json(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

pub fn build_document(introspector: &Introspector<'_>, args: &CliArgs) -> Result<Document> {
    let selected = if args.interfaces.is_empty() {
        introspector.interfaces().collect::<Vec<_>>()
    } else {
        let mut selected = Vec::with_capacity(args.interfaces.len());
        for name in &args.interfaces {
            let Some(interface) = introspector.interface(name) else {
                bail!("interface `{name}` is not declared in the snapshot");
            };
            selected.push(interface);
        }
        selected
    };

    let mut interfaces = Vec::with_capacity(selected.len());
    let mut failed = Vec::new();
    for interface in selected {
        match describe_interface(introspector, interface) {
            Ok(descriptor) => {
                info!(
                    interface = %descriptor.name,
                    operations = descriptor.operations.len(),
                    skipped = descriptor.skipped.len(),
                    "described interface"
                );
                interfaces.push(descriptor);
            }
            Err(err) => {
                warn!(interface = %interface.name, error = %err, "cannot document interface");
                failed.push(SkippedMember {
                    name: interface.name.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let context: SubstitutionContext = args.bindings.iter().cloned().collect();
    let mut entities = Vec::with_capacity(args.entities.len());
    for name in &args.entities {
        let entity = describe_entity(introspector, name, &context)
            .with_context(|| format!("cannot document entity `{name}`"))?;
        entities.push(entity);
    }

    Ok(Document {
        interfaces,
        entities,
        failed,
    })
}

pub fn render(document: &Document, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.context("failed to serialize document")
}

/// Load, introspect, describe and write.
///
/// Startup failures abort the run. Interfaces that fail are listed in the
/// written document and turn the run into an error once output is written.
pub fn run(args: &CliArgs) -> Result<()> {
    let universe = load_universe(&args.snapshot)?;
    let introspector = Introspector::acquire(&universe)
        .with_context(|| format!("cannot introspect {}", args.snapshot.display()))?;

    let document = build_document(&introspector, args)?;
    let mut output = render(&document, args.pretty)?;
    output.push('\n');

    match &args.out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout")?,
    }

    if !document.failed.is_empty() {
        let names = document
            .failed
            .iter()
            .map(|failure| failure.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        bail!(
            "{} interface(s) could not be documented: {names}",
            document.failed.len()
        );
    }
    Ok(())
}
