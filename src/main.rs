//! Main entry point for the zipstore CLI application.
//!
//! This binary packs files into store-only ZIP archives, unpacks them
//! again, and lists their contents, with optional Base64 text transport
//! on either side.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use zipstore::cli::Command;
use zipstore::{Cli, Entry, ZipReader, ZipWriter, base64};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Pack {
            output,
            files,
            base64,
        } => pack(&output, &files, base64),
        Command::Unpack {
            file,
            out_dir,
            base64,
        } => unpack(&file, &out_dir, base64),
        Command::List {
            file,
            verbose,
            base64,
        } => list(&file, verbose, base64),
    }
}

/// Pack the given files into an archive.
///
/// Each file becomes one entry named after its basename, in command-line
/// order. With `as_text` the archive is written as Base64; `-` sends the
/// output to stdout either way.
fn pack(output: &str, files: &[String], as_text: bool) -> Result<()> {
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let data = fs::read(path).with_context(|| format!("reading {path}"))?;
        let name = Path::new(path)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.clone());
        entries.push(Entry::new(name, data));
    }

    let archive = ZipWriter::new().write(&entries)?;
    let bytes = if as_text {
        base64::encode(&archive).into_bytes()
    } else {
        archive
    };

    if output == "-" {
        std::io::stdout().write_all(&bytes)?;
    } else {
        fs::write(output, &bytes).with_context(|| format!("writing {output}"))?;
    }

    Ok(())
}

/// Unpack every entry of an archive into a directory.
fn unpack(file: &str, out_dir: &str, as_text: bool) -> Result<()> {
    let archive = read_archive(file, as_text)?;
    let entries = ZipReader::new(&archive).extract()?;

    for entry in &entries {
        if !is_safe_name(&entry.name) {
            eprintln!("Skipping: {} (unsafe path)", entry.name);
            continue;
        }

        let output_path = PathBuf::from(out_dir).join(&entry.name);

        if entry.is_directory() {
            fs::create_dir_all(&output_path)
                .with_context(|| format!("creating {}", output_path.display()))?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        println!("  extracting: {}", entry.name);
        fs::write(&output_path, &entry.data)
            .with_context(|| format!("writing {}", output_path.display()))?;
    }

    Ok(())
}

/// List the entries of an archive.
///
/// Simple format prints one name per line; verbose adds a size column
/// and a totals row.
fn list(file: &str, verbose: bool, as_text: bool) -> Result<()> {
    let archive = read_archive(file, as_text)?;
    let entries = ZipReader::new(&archive).extract()?;

    if !verbose {
        for entry in &entries {
            println!("{}", entry.name);
        }
        return Ok(());
    }

    println!("{:>10}  Name", "Length");
    println!("{}", "-".repeat(40));

    let mut total = 0usize;
    let mut file_count = 0usize;
    for entry in &entries {
        println!("{:>10}  {}", entry.data.len(), entry.name);
        if !entry.is_directory() {
            total += entry.data.len();
            file_count += 1;
        }
    }

    println!("{}", "-".repeat(40));
    println!("{total:>10}  {file_count} files");

    Ok(())
}

/// Read an archive from disk, decoding Base64 text first when asked.
fn read_archive(file: &str, as_text: bool) -> Result<Vec<u8>> {
    if as_text {
        let text = fs::read_to_string(file).with_context(|| format!("reading {file}"))?;
        Ok(base64::decode(&text))
    } else {
        fs::read(file).with_context(|| format!("reading {file}"))
    }
}

/// Reject entry names that would escape the output directory.
///
/// Only plain relative components are allowed: no absolute paths, no
/// `..`, no drive prefixes.
fn is_safe_name(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::is_safe_name;

    #[test]
    fn safe_names() {
        assert!(is_safe_name("a.txt"));
        assert!(is_safe_name("dir/b.bin"));
    }

    #[test]
    fn unsafe_names() {
        assert!(!is_safe_name("../escape.txt"));
        assert!(!is_safe_name("/etc/passwd"));
        assert!(!is_safe_name("dir/../../escape"));
    }
}
