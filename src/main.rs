use anyhow::bail;

use m2prefab::store::FsAssetStore;
use m2prefab::{ImportBatch, PipelineSettings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((root, assets)) = args.split_first() else {
        bail!("usage: m2prefab <project-root> <model-asset>...");
    };
    if assets.is_empty() {
        bail!("no model assets given");
    }

    let settings = PipelineSettings::load();
    let mut store = FsAssetStore::new(root);

    let mut batch = ImportBatch::new();
    for asset in assets {
        batch.queue(asset);
    }

    let report = batch.post_process(&mut store, &settings);

    for processed in &report.processed {
        println!(
            "{}: prefab {}, {} clip(s)",
            processed.path.display(),
            processed.prefab.as_deref().unwrap_or("-"),
            processed.clips.len()
        );
        for err in &processed.clip_errors {
            println!("  clip error: {}", err);
        }
    }
    for skipped in &report.skipped {
        println!("{}: no metadata, skipped", skipped.display());
    }
    for failure in &report.failed {
        println!("{}: {} ({})", failure.path.display(), failure.message, failure.key);
    }

    println!(
        "Processed {}, skipped {}, failed {}, {} clip(s) written",
        report.processed.len(),
        report.skipped.len(),
        report.failed.len(),
        report.clip_count()
    );

    Ok(())
}
