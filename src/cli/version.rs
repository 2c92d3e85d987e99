//! Version and usage text for blogdeck CLI.

/// The current version of blogdeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Browse and publish blog posts from the terminal.

USAGE:
    blogdeck [--base-url URL]
    blogdeck serve [--port N] [--data FILE]

OPTIONS:
    --base-url URL    Blog API base URL (default http://localhost:3001)
    -V, --version     Print version
    -h, --help        Print this help

SERVE OPTIONS:
    -p, --port N      Port to listen on (default 3001)
    -d, --data FILE   Seed posts from a json-server style db.json

ENVIRONMENT:
    BLOGDECK_BASE_URL   Blog API base URL
    BLOGDECK_LOG        Log filter directive (default info)
    BLOGDECK_LOG_FILE   Log file path, or 'off'
";

/// `blogdeck <version>`
pub fn version_string() -> String {
    format!("blogdeck {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() {
    println!("{}", version_string());
}

/// Handle the --help command.
pub fn handle_help_command() {
    println!("{}\n\n{}", version_string(), USAGE);
}
