use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version)]
#[command(about = "Manage the posts of a portfolio blog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $FOLIO_DATA, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a new post
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Title words (joined with spaces)
        #[arg(required = true)]
        title: Vec<String>,

        #[command(flatten)]
        fields: PostFields,
    },

    /// List posts, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Case-insensitive match on title, excerpt or tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts with a tag containing this ("All" disables the filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post by slug
    #[command(alias = "v", display_order = 3)]
    View {
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite fields of an existing post
    #[command(alias = "e", display_order = 10)]
    Update {
        /// Id of the post
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: PostFields,
    },

    /// Delete posts by id
    #[command(alias = "rm", display_order = 11)]
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Replace every post with the built-in seed posts
    #[command(display_order = 20)]
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set configuration (author, fallback-image, storage-key, duplicates)
    #[command(display_order = 21)]
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

/// Draft fields shared by `create` and `update`. Unset fields keep their
/// previous value on update and are empty on create.
#[derive(Args, Debug, Default)]
pub struct PostFields {
    /// Short summary shown on cards
    #[arg(long)]
    pub excerpt: Option<String>,

    /// Post body as HTML (use "-" to read stdin)
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the post body from a file
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_fields() {
        let cli = Cli::try_parse_from([
            "folio", "create", "--tags", "a, b", "--excerpt", "Short", "My", "Post",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create { title, fields }) => {
                assert_eq!(title, vec!["My", "Post"]);
                assert_eq!(fields.tags.as_deref(), Some("a, b"));
                assert_eq!(fields.excerpt.as_deref(), Some("Short"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn flags_after_title_are_still_flags() {
        let cli =
            Cli::try_parse_from(["folio", "create", "My", "Post", "--tags", "a,b"]).unwrap();
        match cli.command {
            Some(Commands::Create { title, fields }) => {
                assert_eq!(title, vec!["My", "Post"]);
                assert_eq!(fields.tags.as_deref(), Some("a,b"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn delete_requires_ids() {
        assert!(Cli::try_parse_from(["folio", "delete"]).is_err());
    }

    #[test]
    fn content_and_content_file_conflict() {
        let parsed = Cli::try_parse_from([
            "folio",
            "create",
            "--content",
            "x",
            "--content-file",
            "y.html",
            "T",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["folio", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
