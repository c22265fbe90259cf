use clap::Parser;
use userfile::config::Arguments;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "userfile")]
#[command(version = VERSION)]
#[command(about = "Keep a list of user records in a JSON file", long_about = None)]
pub struct Cli {
    /// Operation to run: list, add, remove or findById
    #[arg(long, default_value = "")]
    pub operation: String,

    /// Path to the JSON file holding the records
    #[arg(long = "fileName", default_value = "")]
    pub file_name: String,

    /// Record to add, as JSON: {"id": "...", "email": "...", "age": 0}
    #[arg(long, default_value = "")]
    pub item: String,

    /// Record id for remove and findById
    #[arg(long, default_value = "")]
    pub id: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn arguments(&self) -> Arguments {
        Arguments {
            operation: self.operation.clone(),
            file_name: self.file_name.clone(),
            item: self.item.clone(),
            id: self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_resolve_to_empty() {
        let cli = Cli::try_parse_from(["userfile"]).unwrap();
        assert_eq!(cli.arguments(), Arguments::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_resolves_named_flags() {
        let cli = Cli::try_parse_from([
            "userfile",
            "--operation",
            "add",
            "--fileName",
            "users.json",
            "--item",
            r#"{"id":"1"}"#,
            "-v",
        ])
        .unwrap();
        let args = cli.arguments();
        assert_eq!(args.operation, "add");
        assert_eq!(args.file_name, "users.json");
        assert_eq!(args.item, r#"{"id":"1"}"#);
        assert_eq!(args.id, "");
        assert!(cli.verbose);
    }

    #[test]
    fn test_equals_syntax() {
        let cli = Cli::try_parse_from(["userfile", "--operation=findById", "--id=7"]).unwrap();
        assert_eq!(cli.arguments().operation, "findById");
        assert_eq!(cli.arguments().id, "7");
    }
}
