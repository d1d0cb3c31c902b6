use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("MAILZ_GIT_HASH");
    const IS_RELEASE: &str = env!("MAILZ_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "mailz",
    bin_name = "mailz",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Disposable inbox addresses from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Address,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Address => "Per-Address Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "new" | "list" | "search" => Some(CommandGroup::Core),
            "open" | "copy" | "delete" | "clear" => Some(CommandGroup::Address),
            "config" | "paths" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Address, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("mailz {version}\n"));
    output.push_str("Disposable inbox addresses from the command line\n");
    output.push('\n');
    output.push_str("Usage: mailz [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::New { .. } => "new",
            CoreCommands::List { .. } => "list",
            CoreCommands::Search { .. } => "search",
        },
        Some(Commands::Address(c)) => match c {
            AddressCommands::Open { .. } => "open",
            AddressCommands::Copy { .. } => "copy",
            AddressCommands::Delete { .. } => "delete",
            AddressCommands::Clear { .. } => "clear",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Paths => "paths",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(subcommand_name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Address(AddressCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Generate a new address, copy it and open its inbox
    #[command(alias = "n", display_order = 1)]
    New {
        /// Don't copy the address to the clipboard
        #[arg(long)]
        no_copy: bool,

        /// Don't open the inbox in the browser
        #[arg(long)]
        no_open: bool,

        /// Build the address from random words
        #[arg(long)]
        words: bool,
    },

    /// List addresses, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List addresses containing a term
    #[command(display_order = 3)]
    Search { term: String },
}

#[derive(Subcommand, Debug)]
pub enum AddressCommands {
    /// Copy an address and open its inbox (defaults to the latest)
    #[command(alias = "o", display_order = 10)]
    Open {
        /// Index or id of the address (e.g. 1)
        selector: Option<String>,

        /// Don't copy the address to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Copy an address to the clipboard
    #[command(alias = "c", display_order = 11)]
    Copy {
        /// Index or id of the address (e.g. 2)
        selector: String,
    },

    /// Delete one or more addresses
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Indexes or ids of the addresses (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete every address
    #[command(display_order = 13)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., domain, word-count)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print where addresses and config are stored
    #[command(display_order = 31)]
    Paths,

    /// Print help for mailz or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
