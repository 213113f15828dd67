pub mod output;
pub mod read;
pub mod service;

use clap::{ArgAction, Parser};

use crate::api::connection::{DEFAULT_HOST, DEFAULT_PORT};

/// Default token specifier: first line of `token.txt` in the working directory.
pub const DEFAULT_TOKEN: &str = "@token.txt";

#[derive(Parser)]
#[command(
    name = "haa",
    version,
    about = "Home Assistant REST API client - read states and call services",
    disable_help_flag = true,
    allow_negative_numbers = true,
    after_help = "Commands:\n  \
        (none)                       API root\n  \
        config | events | services   Read server metadata\n  \
        states [ENTITY]              All states, or one entity\n  \
        services DOMAIN              Services of one domain\n  \
        services DOMAIN SERVICE [KEY VALUE]...\n  \
        toggle | turn_on | turn_off [ENTITY]\n  \
        shell_command NAME\n  \
        remote ENTITY COMMAND"
)]
pub struct Cli {
    /// Hostname of the Home Assistant server
    #[arg(
        short = 'h',
        long = "host",
        visible_alias = "homeassistant",
        env = "HAA_HOST",
        default_value = DEFAULT_HOST
    )]
    pub host: String,

    /// Port of the Home Assistant server
    #[arg(short, long, env = "HAA_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Access token, or @FILE to read it from the first line of FILE
    #[arg(
        short,
        long,
        env = "HAA_TOKEN",
        hide_env_values = true,
        default_value = DEFAULT_TOKEN
    )]
    pub token: String,

    /// Read the token from the first line of FILE (same as --token @FILE)
    #[arg(short = 'T', long = "tfile", value_name = "FILE", conflicts_with = "token")]
    pub token_file: Option<String>,

    /// Entity id, e.g. light.kitchen
    #[arg(short, long = "entity", visible_alias = "entity_id")]
    pub entity_id: Option<String>,

    /// Extra service data, may be repeated
    #[arg(short, long, num_args = 2, value_names = ["KEY", "VALUE"])]
    pub data: Vec<String>,

    /// Render states, services and events as a table instead of JSON
    #[arg(long)]
    pub table: bool,

    /// Verbose output (show HTTP requests and response codes)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(short = '?', long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Command and its arguments
    #[arg(value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// The token specifier to resolve: `--tfile` as `@FILE`, else `--token`.
    pub fn token_spec(&self) -> String {
        match &self.token_file {
            Some(file) => format!("@{}", file),
            None => self.token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["haa"]).unwrap();
        assert_eq!(cli.host, "homeassistant");
        assert_eq!(cli.port, 8123);
        assert!(cli.entity_id.is_none());
        assert!(cli.data.is_empty());
        assert!(cli.args.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_short_flags_and_positionals() {
        let cli = Cli::try_parse_from([
            "haa", "-h", "ha.local", "-p", "80", "-t", "abc", "-e", "light.kitchen", "-v",
            "toggle",
        ])
        .unwrap();
        assert_eq!(cli.host, "ha.local");
        assert_eq!(cli.port, 80);
        assert_eq!(cli.token, "abc");
        assert_eq!(cli.entity_id.as_deref(), Some("light.kitchen"));
        assert!(cli.verbose);
        assert_eq!(cli.args, vec!["toggle"]);
    }

    #[test]
    fn test_repeated_data_pairs() {
        let cli = Cli::try_parse_from([
            "haa",
            "--data",
            "brightness",
            "80",
            "-d",
            "transition",
            "2",
            "services",
            "light",
            "turn_on",
        ])
        .unwrap();
        assert_eq!(cli.data, vec!["brightness", "80", "transition", "2"]);
        assert_eq!(cli.args, vec!["services", "light", "turn_on"]);
    }

    #[test]
    fn test_entity_alias() {
        let cli = Cli::try_parse_from(["haa", "--entity_id", "switch.fan", "state"]).unwrap();
        assert_eq!(cli.entity_id.as_deref(), Some("switch.fan"));
    }

    #[test]
    fn test_negative_values_are_not_flags() {
        let cli = Cli::try_parse_from([
            "haa",
            "-d",
            "brightness_step",
            "-10",
            "services",
            "input_number",
            "set_value",
            "value",
            "-5",
        ])
        .unwrap();
        assert_eq!(cli.data, vec!["brightness_step", "-10"]);
        assert_eq!(
            cli.args,
            vec!["services", "input_number", "set_value", "value", "-5"]
        );
    }

    #[test]
    fn test_tfile_becomes_file_specifier() {
        let cli = Cli::try_parse_from(["haa", "-T", "/etc/haa/token", "config"]).unwrap();
        assert_eq!(cli.token_spec(), "@/etc/haa/token");

        let cli = Cli::try_parse_from(["haa", "--tfile", "secret.txt"]).unwrap();
        assert_eq!(cli.token_spec(), "@secret.txt");

        let cli = Cli::try_parse_from(["haa", "-t", "literal"]).unwrap();
        assert_eq!(cli.token_spec(), "literal");
    }

    #[test]
    fn test_tfile_conflicts_with_token() {
        assert!(Cli::try_parse_from(["haa", "-t", "abc", "-T", "token.txt"]).is_err());
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(Cli::try_parse_from(["haa", "--port", "not-a-port"]).is_err());
    }
}
