use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version,
    disable_help_subcommand = true,
    about = "Author block-based documentation and export it as one HTML page",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "FOLIO_DATA", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Act as this user id
    #[arg(long, global = true, env = "FOLIO_USER", help_heading = "Options")]
    pub user: Option<String>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, list, rename and remove projects
    #[command(alias = "p", display_order = 1)]
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Manage a project's outline
    #[command(alias = "h", display_order = 2)]
    Header {
        /// Project name or id prefix
        project: String,
        #[command(subcommand)]
        action: HeaderCommands,
    },

    /// Edit the blocks of one section
    #[command(alias = "b", display_order = 3)]
    Block {
        /// Project name or id prefix
        project: String,
        /// Header number, title or id prefix
        header: String,
        #[command(subcommand)]
        action: BlockCommands,
    },

    /// Lay out the navigation bar
    #[command(display_order = 4)]
    Nav {
        /// Project name or id prefix
        project: String,
        #[command(subcommand)]
        action: NavCommands,
    },

    /// Write the project as a single HTML file
    #[command(display_order = 5)]
    Export {
        /// Project name or id prefix
        project: String,
        /// Directory to write into
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show or change the docs theme and color preferences
    #[command(display_order = 6)]
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsCommands>,
    },

    /// Print the acting user id
    #[command(display_order = 7)]
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a project
    #[command(alias = "n")]
    New {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List your projects
    #[command(alias = "ls")]
    List,
    /// Rename a project
    Rename { project: String, name: String },
    /// Delete a project with all its headers and navbar items
    Rm { project: String },
}

#[derive(Subcommand, Debug)]
pub enum HeaderCommands {
    /// Add a header, optionally under a top-level parent
    Add {
        title: String,
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Show the numbered outline
    #[command(alias = "ls")]
    List {
        /// Only headers whose title contains this (plus their parents)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Delete a header and its children
    Rm { header: String },
    Rename { header: String, title: String },
    /// Set the header's icon (any glyph; `--list` shows suggestions)
    Icon {
        header: String,
        icon: Option<String>,
        #[arg(long)]
        list: bool,
    },
    /// Move a header to the place of a sibling
    Move { header: String, over: String },
    /// Replace a markdown section's text
    Write { header: String, text: String },
    /// Apply a markdown format to a character range of a markdown section
    Format {
        header: String,
        /// bold, italic, code, link, h1, h2, quote, list, ordered-list, info,
        /// warning, table, image, divider, codeblock[:lang]
        format: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        end: Option<usize>,
    },
    /// Print a section's content
    Show { header: String },
}

#[derive(Subcommand, Debug)]
pub enum BlockCommands {
    /// Add a block (text, heading, code, callout, image, table, divider, button, badge, quote)
    Add {
        kind: String,
        /// Insert after this block instead of at the end
        #[arg(short, long)]
        after: Option<String>,
    },
    /// List the section's blocks
    #[command(alias = "ls")]
    List,
    /// List the block kinds on offer
    Palette,
    Rm { block: String },
    /// Duplicate a block right after itself
    Dup { block: String },
    Up { block: String },
    Down { block: String },
    /// Move a block to the position of another
    Move { block: String, over: String },
    /// Set layout width: full, 1/2, 1/3, 2/3
    Width { block: String, width: String },
    /// Replace the body of a text, heading, callout or quote block
    SetText { block: String, text: String },
    /// Set one field: font-size, color, bg-color, code, language, icon, url,
    /// caption, label, href, radius, text-color, author, cell:ROW:COL
    Set { block: String, field: String, value: String },
}

#[derive(Subcommand, Debug)]
pub enum NavCommands {
    /// Add an item (title, search, link, button, badge, divider-v, github, theme-toggle)
    Add { kind: String },
    #[command(alias = "ls")]
    List,
    Rm { item: String },
    /// Drag an item horizontally by DX pixels
    Move {
        item: String,
        #[arg(allow_negative_numbers = true)]
        dx: f64,
    },
    /// Set an item's width (minimum 60)
    Resize { item: String, width: f64 },
    /// Set a style override: bgColor, textColor, fontSize, padding, borderRadius
    Style { item: String, key: String, value: String },
    Label { item: String, label: String },
    Href { item: String, href: String },
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Set the docs theme (light or dark); without a value, toggle it
    Theme { mode: Option<String> },
    /// Set one color: bg, bg-alt, border, accent
    Color { key: String, value: String },
    /// Restore the default colors
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_nav_move() {
        let cli = Cli::try_parse_from(["folio", "nav", "guide", "move", "1", "-25"]).unwrap();
        match cli.command {
            Commands::Nav {
                action: NavCommands::Move { dx, .. },
                ..
            } => assert_eq!(dx, -25.0),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "project", "list", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }
}
