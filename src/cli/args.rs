use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lct")]
#[command(about = "English-to-Chinese dictionary and translation CLI")]
#[command(version)]
pub struct Args {
    /// Text to translate (prompts or reads stdin if not provided)
    pub text: Vec<String>,

    /// Model identifier (skips automatic selection from the catalog)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API base URL (e.g. https://openrouter.ai/api/v1)
    #[arg(short = 'b', long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Suppress spinners and status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List models from the catalog and show which one would be selected
    Models {
        /// Show every model, not only the preferred vendor's
        #[arg(short = 'a', long)]
        all: bool,
    },
    /// Configure lct settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

impl Args {
    /// Positional words joined into one text, if any were given.
    pub fn joined_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let args = Args::parse_from(["lct", "hello", "world"]);
        assert_eq!(args.joined_text(), Some("hello world".to_string()));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_no_text() {
        let args = Args::parse_from(["lct", "-q"]);
        assert_eq!(args.joined_text(), None);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_verbosity_count() {
        let args = Args::parse_from(["lct", "-vv", "hello"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_parse_models_subcommand_with_global_flag() {
        let args = Args::parse_from(["lct", "models", "--all", "--base-url", "http://localhost:8080/v1"]);
        assert!(matches!(args.command, Some(Command::Models { all: true })));
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8080/v1"));
    }

    #[test]
    fn test_parse_model_override() {
        let args = Args::parse_from(["lct", "--model", "deepseek/deepseek-v3", "don't"]);
        assert_eq!(args.model.as_deref(), Some("deepseek/deepseek-v3"));
        assert_eq!(args.joined_text(), Some("don't".to_string()));
    }
}
