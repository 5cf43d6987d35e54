use clap::Parser;

/// taskview — fetch a remote task list and show a filtered view
#[derive(Parser, Debug, Clone)]
#[command(name = "taskview", version, about)]
pub struct Cli {
    /// Endpoint to fetch the task list from
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Display filter (all, open, completed)
    #[arg(long)]
    pub filter: Option<String>,

    /// Select a task by id and print its detail line
    #[arg(long)]
    pub select: Option<u64>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["taskview"]);
        assert!(cli.endpoint.is_none());
        assert!(cli.filter.is_none());
        assert!(cli.select.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "taskview",
            "--endpoint",
            "https://example.com/todos",
            "--filter",
            "open",
            "--select",
            "3",
            "--config",
            "/tmp/taskview.toml",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("https://example.com/todos"));
        assert_eq!(cli.filter.as_deref(), Some("open"));
        assert_eq!(cli.select, Some(3));
        assert_eq!(cli.config.as_deref(), Some("/tmp/taskview.toml"));
    }

    #[test]
    fn test_parse_non_numeric_select_rejected() {
        assert!(Cli::try_parse_from(["taskview", "--select", "abc"]).is_err());
    }
}
