//! Ansel CLI - static photo gallery build and deploy tool
//!
//! Usage: ansel <COMMAND>
//!
//! Commands:
//!   build        Build the gallery into the output directory
//!   deploy-site  Mirror the build directory to the remote target
//!   deploy       Build, then deploy
//!   doctor       Check external tools and configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Ansel - static photo gallery build and deploy tool
#[derive(Parser, Debug)]
#[command(name = "ansel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output machine-readable event lines
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the gallery into the output directory
    Build,

    /// Mirror the build directory to the remote target
    DeploySite {
        /// Show what would be transferred without transferring
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the gallery, then mirror it to the remote target
    Deploy {
        /// Show what the transfer would do without transferring
        #[arg(long)]
        dry_run: bool,
    },

    /// Check external tools and configuration
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build => cmd_build(cli.json, cli.verbose),
        Commands::DeploySite { dry_run } => cmd_deploy_site(dry_run, cli.json, cli.verbose),
        Commands::Deploy { dry_run } => cmd_deploy(dry_run, cli.json, cli.verbose),
        Commands::Doctor => cmd_doctor(cli.json),
    };

    if let Err(e) = result {
        eprintln!("✗ {e:#}");
        std::process::exit(exit_code(&e));
    }
}

/// Map an error to the process exit status.
///
/// Library errors know their own code (config errors exit 2, tool
/// failures propagate the child's status); anything else exits 1.
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ansel::AnselError>()
        .map(ansel::AnselError::exit_code)
        .unwrap_or(1)
}

/// Load config from the working directory and surface warnings
fn load_config(json: bool) -> Result<ansel::Config> {
    use anyhow::Context;

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let (config, warnings) = ansel::config::load_or_default(&cwd)?;

    if !json {
        for warning in &warnings {
            match warning.line {
                Some(line) => eprintln!(
                    "⚠ unknown config key '{}' in {}:{}",
                    warning.key,
                    warning.file.display(),
                    line
                ),
                None => eprintln!(
                    "⚠ unknown config key '{}' in {}",
                    warning.key,
                    warning.file.display()
                ),
            }
        }
    }

    Ok(config)
}

fn cmd_build(json: bool, verbose: u8) -> Result<()> {
    use ansel::deploy::Deployer;
    use ansel::tools::{FgalleryBuilder, RsyncTransfer};

    let config = load_config(json)?;
    let build_dir = config.build_dir()?;

    if !json {
        println!("📸 Ansel Build");
        println!("Photos: {}", config.gallery.photos.display());
        if verbose > 0 {
            println!("Builder: {}", config.gallery.command);
            println!("Output: {}", build_dir.display());
        }
        println!();
    }

    let builder = FgalleryBuilder::new(config.gallery.command.as_str(), json);
    let deployer = Deployer::new(&config, builder, RsyncTransfer);
    deployer.build()?;

    if json {
        let output = serde_json::json!({
            "event": "build",
            "status": "success",
            "output": build_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n✓ Gallery built: {}", build_dir.display());
    }

    Ok(())
}

fn cmd_deploy_site(dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    use ansel::deploy::{DeployOptions, Deployer};
    use ansel::tools::{FgalleryBuilder, RsyncTransfer};

    let config = load_config(json)?;

    if !json {
        println!("🚀 Ansel Deploy Site");
        if let Ok(target) = config.remote_target() {
            println!("Target: {}", target);
        }
        if dry_run {
            println!("Mode: Dry run");
        }
        if verbose > 0 {
            println!("Build dir: {}", config.build_dir()?.display());
        }
        println!();
    }

    let options = DeployOptions::new().with_dry_run(dry_run).with_quiet(json);
    let builder = FgalleryBuilder::new(config.gallery.command.as_str(), json);
    let deployer = Deployer::new(&config, builder, RsyncTransfer);
    deployer.deploy_site(&options)?;

    report_deployed(&config, dry_run, json)
}

fn cmd_deploy(dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    use ansel::deploy::{DeployOptions, Deployer};
    use ansel::tools::{FgalleryBuilder, RsyncTransfer};

    let config = load_config(json)?;

    if !json {
        println!("🚀 Ansel Deploy");
        println!("Photos: {}", config.gallery.photos.display());
        if let Ok(target) = config.remote_target() {
            println!("Target: {}", target);
        }
        if dry_run {
            println!("Mode: Dry run");
        }
        if verbose > 0 {
            println!("Builder: {}", config.gallery.command);
            println!("Build dir: {}", config.build_dir()?.display());
        }
        println!();
    }

    let options = DeployOptions::new().with_dry_run(dry_run).with_quiet(json);
    let builder = FgalleryBuilder::new(config.gallery.command.as_str(), json);
    let deployer = Deployer::new(&config, builder, RsyncTransfer);
    deployer.deploy(&options)?;

    report_deployed(&config, dry_run, json)
}

fn report_deployed(config: &ansel::Config, dry_run: bool, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "event": "deploy",
            "status": "success",
            "dry_run": dry_run,
            "target": config.remote_target().ok(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if dry_run {
        println!("\n✓ Dry run complete - nothing transferred");
    } else {
        println!("\n✓ Site deployed: {}", config.remote_target()?);
        if let Some(url) = &config.remote.site_url {
            println!("🌐 {}", url);
        }
    }

    Ok(())
}

fn cmd_doctor(json: bool) -> Result<()> {
    use ansel::tools::{FgalleryBuilder, GalleryBuilder, RsyncTransfer, TransferAgent};

    let config = load_config(json)?;

    let builder = FgalleryBuilder::new(config.gallery.command.as_str(), true);
    let builder_ok = builder.is_available();
    let transfer_ok = RsyncTransfer.is_available();
    let photos_ok = config.gallery.photos.is_dir();
    let target_ok = config.remote.target.is_some();

    if json {
        let output = serde_json::json!({
            "event": "doctor",
            "builder": { "command": config.gallery.command, "available": builder_ok },
            "rsync": transfer_ok,
            "photos": photos_ok,
            "remote_target": target_ok,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("🩺 Ansel Doctor");
    println!();
    print_check(
        builder_ok,
        &format!("{} on PATH", builder.name()),
        "install fgallery and make sure it is on PATH",
    );
    print_check(transfer_ok, "rsync on PATH", "install rsync");
    print_check(
        photos_ok,
        &format!("photo source {}", config.gallery.photos.display()),
        "create the photos directory or set [gallery] photos in ansel.toml",
    );
    print_check(
        target_ok,
        "remote target configured",
        "set SCP_TARGET or [remote] target in ansel.toml",
    );

    let failed = [builder_ok, transfer_ok, photos_ok, target_ok]
        .iter()
        .filter(|ok| !**ok)
        .count();

    println!();
    if failed == 0 {
        println!("🟢 All checks passed!");
    } else {
        println!("🔴 {} check(s) failed.", failed);
    }

    Ok(())
}

fn print_check(ok: bool, name: &str, recommendation: &str) {
    if ok {
        println!("  ✓ {}", name);
    } else {
        println!("  ✗ {}", name);
        println!("    ↳ {}", recommendation);
    }
}
