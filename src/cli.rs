use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zipstore")]
#[command(version)]
#[command(about = "Pack and unpack store-only ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipstore pack -o out.zip a.txt b.txt     pack two files into out.zip\n  \
  zipstore pack -o out.b64 -b a.txt        pack and emit Base64 text\n  \
  zipstore unpack -d outdir out.zip        unpack into outdir\n  \
  zipstore list -v out.zip                 list entries with sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack files into a store-only ZIP archive
    Pack {
        /// Output path (`-` for stdout)
        #[arg(short, long, value_name = "FILE")]
        output: String,

        /// Files to pack, in archive order
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Emit the archive as Base64 text
        #[arg(short, long)]
        base64: bool,
    },

    /// Unpack all entries of an archive
    Unpack {
        /// Archive path
        #[arg(value_name = "FILE")]
        file: String,

        /// Directory to unpack into
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        out_dir: String,

        /// Treat the input as Base64 text
        #[arg(short, long)]
        base64: bool,
    },

    /// List the entries of an archive
    List {
        /// Archive path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show sizes and totals
        #[arg(short = 'v')]
        verbose: bool,

        /// Treat the input as Base64 text
        #[arg(short, long)]
        base64: bool,
    },
}
