use std::path::{Path, PathBuf};

use clap::Parser;

use webkiosk_bridge::{
    AssetLoader, AssetPath, BridgeError, BundleHandler, DirBundle, MediaType, DEFAULT_DOMAIN,
};
use webkiosk_bundle::BundleError;
use webkiosk_shell::ShellError;

/// webkiosk-check - validate a web bundle directory before shipping it
#[derive(Parser, Debug)]
#[command(name = "webkiosk-check")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bundle directory containing the built web application
    root: PathBuf,

    /// Virtual path prefix the bundle is mounted under
    #[arg(long, default_value = "/assets/")]
    prefix: String,

    /// Entry file the kiosk navigates to first
    #[arg(long, default_value = "index.html")]
    entry: String,

    /// Virtual origin host
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// List every asset with its served URL, media type and size
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ShellError> {
    let loader = AssetLoader::builder()
        .domain(args.domain.as_str())
        .add_handler(
            &args.prefix,
            BundleHandler::new(DirBundle::new(&args.root)?),
        )
        .build()?;

    let prefix = AssetPath::parse(&args.prefix).map_err(BridgeError::from)?;
    let entry = AssetPath::parse(&args.entry).map_err(BridgeError::from)?;
    let entry_url = loader.url_for(&prefix.join(&entry));

    // Resolve the entry exactly the way the host would at first navigation.
    match loader.intercept(&entry_url) {
        Some(response) => {
            println!(
                "entry ok: {} ({}, {} bytes)",
                entry_url,
                response.media_type(),
                response.len()
            );
        }
        None => return Err(ShellError::EntryMissing { url: entry_url }),
    }

    if args.list {
        list_assets(&args.root, &loader, &prefix)?;
    }

    Ok(())
}

fn list_assets(root: &Path, loader: &AssetLoader, prefix: &AssetPath) -> Result<(), ShellError> {
    let mut count = 0usize;
    let mut unservable = 0usize;

    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| BundleError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root");
        let rel: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let path = match AssetPath::parse(&rel.join("/")) {
            Ok(p) => p,
            Err(e) => {
                println!("skip  {} ({})", entry.path().display(), e);
                unservable += 1;
                continue;
            }
        };

        let size = entry.metadata().map_err(|e| BundleError::Io(e.into()))?.len();
        println!(
            "{:>9}  {:<24}  {}",
            size,
            MediaType::for_path(&path).as_str(),
            loader.url_for(&prefix.join(&path))
        );
        count += 1;
    }

    println!("{} assets, {} unservable", count, unservable);
    Ok(())
}
