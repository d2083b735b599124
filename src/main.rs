//! Restage CLI - WebXR project restructuring tool
//!
//! Usage: restage [--path <dir>] [--json] [-v]
//!
//! Runs the full restructure against the base path: directory layout,
//! asset relocation, descriptor generation, documentation generation, and
//! the legacy directory report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use restage::Restructurer;

/// Restage - WebXR project restructuring tool
#[derive(Parser, Debug)]
#[command(name = "restage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base path of the project
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Output format for CI
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let restructurer = Restructurer::new(&cli.path);

    if cli.json {
        let report = restructurer.run()?;
        let output = serde_json::json!({
            "event": "restructure",
            "status": "success",
            "base": cli.path.display().to_string(),
            "report": report,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("🚀 Restage");
    println!("Base: {}", cli.path.display());

    println!("\n🏗  Creating directory layout...");
    let directories = restructurer.create_directories()?;
    if cli.verbose > 0 {
        for dir in &directories {
            println!("   ✓ {dir}");
        }
    } else {
        println!("   ✓ {} directories ensured", directories.len());
    }

    println!("\n📦 Copying components...");
    let components = restructurer.copy_components()?;
    print_copies(&components.copied, &components.skipped, cli.verbose);

    println!("\n🔧 Copying utilities...");
    let utilities = restructurer.copy_utilities()?;
    print_copies(&utilities.copied, &utilities.skipped, cli.verbose);

    println!("\n🖼  Copying media...");
    let media = restructurer.copy_media()?;
    if media.is_empty() {
        println!("   - no legacy media found");
    } else if cli.verbose > 0 {
        for file in &media {
            println!("   ✓ {file}");
        }
    } else {
        println!("   ✓ {} media files relocated", media.len());
    }

    println!("\n⚙  Writing descriptors...");
    for file in restructurer.write_descriptors()? {
        println!("   ✓ {file}");
    }

    println!("\n📚 Writing documentation...");
    for file in restructurer.write_docs()? {
        println!("   ✓ {file}");
    }

    let legacy = restructurer.legacy_directories();
    if !legacy.is_empty() {
        println!("\n🧹 Legacy directories:");
        for dir in &legacy {
            println!("   ⚠ would remove: {dir} (deletion disabled)");
        }
    }

    println!("\n✨ Project restructuring complete!");
    println!("\n📋 Next steps:");
    println!("   1. Copy your index.html to the project root");
    println!("   2. Review package.json and vercel.json");
    println!("   3. Test locally with: npm run dev");
    println!("   4. Deploy with: vercel");

    Ok(())
}

fn print_copies(copied: &[String], skipped: &[String], verbose: u8) {
    for file in copied {
        println!("   ✓ {file}");
    }
    if verbose > 0 {
        for file in skipped {
            println!("   - {file} (missing, skipped)");
        }
    }
    if copied.is_empty() {
        println!("   - nothing to copy");
    }
}
