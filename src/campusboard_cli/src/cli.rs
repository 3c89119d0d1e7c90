use clap::{ArgAction, Parser, Subcommand};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "campusboard",
    version,
    about = "Campus board client: create an account and publish posts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: campusboard.json in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Backend domain, overrides the configured one
    #[arg(long, global = true)]
    pub domain: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account with a college email
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Publish a post (needs a session token, see `session set`)
    Post {
        #[arg(long, default_value = "general")]
        label: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },

    /// Manage the stored session token
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Store a token issued by the backend
    Set { token: String },
    /// Forget the stored token
    Clear,
    /// Report whether a token is stored
    Show,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signup() {
        let cli = Cli::try_parse_from([
            "campusboard",
            "signup",
            "--email",
            "test@test.edu",
            "--username",
            "testuser",
            "--password",
            "TestPassword01",
        ])
        .unwrap();

        match &cli.command {
            Commands::Signup { email, .. } => assert_eq!(email, "test@test.edu"),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn post_label_defaults_to_general() {
        let cli = Cli::try_parse_from([
            "campusboard",
            "-vv",
            "post",
            "--title",
            "Hello",
            "--content",
            "World",
        ])
        .unwrap();

        match &cli.command {
            Commands::Post { label, .. } => assert_eq!(label, "general"),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn parses_session_actions() {
        let cli = Cli::try_parse_from(["campusboard", "session", "set", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Session { action: SessionAction::Set { ref token } } if token == "abc"
        ));
    }

    #[test]
    fn signup_requires_all_fields() {
        assert!(Cli::try_parse_from(["campusboard", "signup", "--email", "a@b.edu"]).is_err());
    }
}
