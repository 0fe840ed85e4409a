use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the rpcdoc binary.
#[derive(Parser, Debug)]
#[command(
    name = "rpcdoc",
    version,
    about = "Describe JSON-RPC service interfaces from compiled generic signatures"
)]
pub struct CliArgs {
    /// Type-universe snapshot (JSON) to document.
    pub snapshot: PathBuf,

    /// Only describe these interfaces (fully qualified names). Defaults to all.
    #[arg(short = 'i', long = "interface")]
    pub interfaces: Vec<String>,

    /// Also describe the properties of these entity classes.
    #[arg(short = 'e', long = "entity")]
    pub entities: Vec<String>,

    /// Bind a type variable for entity descriptions, as `VAR=CLASS`.
    #[arg(short = 'b', long = "bind", value_parser = parse_binding)]
    pub bindings: Vec<(String, String)>,

    /// Pretty-print the JSON document.
    #[arg(long)]
    pub pretty: bool,

    /// Write the document to this file instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,
}

fn parse_binding(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((variable, class)) if !variable.trim().is_empty() && !class.trim().is_empty() => {
            Ok((variable.trim().to_string(), class.trim().to_string()))
        }
        _ => Err(format!("expected VAR=CLASS, found `{value}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("T=com.example.Invoice"),
            Ok(("T".to_string(), "com.example.Invoice".to_string()))
        );
        assert!(parse_binding("T").is_err());
        assert!(parse_binding("=com.example.Invoice").is_err());
        assert!(parse_binding("T=").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = CliArgs::parse_from([
            "rpcdoc",
            "snapshot.json",
            "-i",
            "com.example.BillingApi",
            "--entity",
            "com.example.Page",
            "--bind",
            "T=com.example.Invoice",
            "--pretty",
        ]);
        assert_eq!(args.snapshot, PathBuf::from("snapshot.json"));
        assert_eq!(args.interfaces, vec!["com.example.BillingApi"]);
        assert_eq!(args.entities, vec!["com.example.Page"]);
        assert_eq!(
            args.bindings,
            vec![("T".to_string(), "com.example.Invoice".to_string())]
        );
        assert!(args.pretty);
        assert!(args.out.is_none());
    }
}
