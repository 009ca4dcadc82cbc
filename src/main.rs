use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use icontint::models::GridConfig;
use icontint::services::{self, IconOverride, RunReport};
use hue_swatch::SwatchOptions;

#[derive(Parser)]
#[command(name = "icontint")]
#[command(about = "Icontint - derives UI accent swatches from sprite-atlas icons")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive item swatch colors from the sprite atlas
    Swatches {
        /// Pack manifest (JSON) with the item list
        #[arg(short, long, default_value = "public/packs/dsp.json")]
        pack: PathBuf,

        /// Sprite atlas image
        #[arg(short, long, default_value = "public/icons.webp")]
        atlas: PathBuf,

        /// Output JSON mapping (item id -> #rrggbb)
        #[arg(short, long, default_value = "src/gamedata/itemColors.json")]
        output: PathBuf,

        /// Diagnostics report file
        #[arg(short, long, default_value = "color_log.txt")]
        report: PathBuf,

        /// Icon cell size in pixels
        #[arg(long, default_value_t = 64)]
        icon_size: u32,

        /// Grid width in cells
        #[arg(long, default_value_t = 23)]
        columns: u32,
    },

    /// Apply explicit icon-index overrides to the pack manifest
    PatchIcons {
        /// Pack manifest (JSON) to patch in place
        #[arg(short, long, default_value = "public/packs/dsp.json")]
        pack: PathBuf,

        /// Override in id=index form (repeatable)
        #[arg(long = "set", value_name = "ID=INDEX", required = true)]
        set: Vec<IconOverride>,
    },

    /// Split gathering recipes into the gatherers table
    ExtractGatherers {
        /// Pack manifest (JSON) to rewrite in place
        #[arg(short, long, default_value = "public/packs/dsp.json")]
        pack: PathBuf,

        /// Recipe category to extract
        #[arg(long, default_value = "Gathering")]
        category: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icontint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Swatches {
            pack,
            atlas,
            output,
            report,
            icon_size,
            columns,
        }) => run_swatches(
            &pack,
            &atlas,
            &output,
            &report,
            GridConfig::new(icon_size, columns),
        ),
        Some(Commands::PatchIcons { pack, set }) => run_patch_icons(&pack, &set),
        Some(Commands::ExtractGatherers { pack, category }) => {
            run_extract_gatherers(&pack, &category)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Walk the atlas and persist the color mapping plus the diagnostics report.
fn run_swatches(
    pack_path: &PathBuf,
    atlas_path: &PathBuf,
    output_path: &PathBuf,
    report_path: &PathBuf,
    grid: GridConfig,
) -> anyhow::Result<()> {
    let pack = services::pack_store::load_pack(pack_path)?;
    let atlas = services::load_atlas(atlas_path, &grid)?;

    tracing::info!(
        width = atlas.width(),
        height = atlas.height(),
        items = pack.items.len(),
        "Atlas decoded"
    );

    let options = SwatchOptions::default();
    let outcome = services::walk_atlas(&atlas, &pack.items, &grid, &options);

    services::pack_store::save_colors(output_path, &outcome.colors)?;

    let report = RunReport {
        atlas_width: atlas.width(),
        atlas_height: atlas.height(),
        colored: outcome.colors.len(),
        diagnostics: outcome.diagnostics,
    };
    report.write_to(report_path)?;

    println!(
        "Calculated colors for {} of {} items ({} flagged).",
        outcome.colors.len(),
        pack.items.len(),
        report.diagnostics.len()
    );
    println!("Check {} for details.", report_path.display());

    Ok(())
}

/// Apply icon-index overrides and write the pack back.
fn run_patch_icons(pack_path: &PathBuf, overrides: &[IconOverride]) -> anyhow::Result<()> {
    let mut pack = services::pack_store::load_pack(pack_path)?;

    let outcome = services::apply_overrides(&mut pack, overrides);
    for id in &outcome.unknown {
        tracing::warn!(%id, "Override matched no item");
    }

    services::pack_store::save_pack(pack_path, &pack)?;
    println!(
        "Updated {} of {} overrides in {}",
        outcome.updated,
        overrides.len(),
        pack_path.display()
    );

    Ok(())
}

/// Split gathering recipes out of the recipe list and write the pack back.
fn run_extract_gatherers(pack_path: &PathBuf, category: &str) -> anyhow::Result<()> {
    let mut pack = services::pack_store::load_pack(pack_path)?;
    let total = pack.recipes.len();

    let extracted = services::split_gatherers(&mut pack, category);
    services::pack_store::save_pack(pack_path, &pack)?;

    for gatherer in &pack.gatherers {
        println!(
            "  - {}: {} @ {:.3}/s via {}",
            gatherer.id, gatherer.output_item_id, gatherer.extraction_rate, gatherer.machine_id
        );
    }
    println!(
        "Extracted {extracted} gatherers from {total} recipes ({} remaining).",
        pack.recipes.len()
    );

    Ok(())
}

/// Display status and usage information.
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Icontint v{VERSION} - accent swatches from sprite-atlas icons\n");
    println!("Commands:");
    println!("  icontint swatches            Derive item colors from the sprite atlas");
    println!("  icontint patch-icons         Apply icon-index overrides to the pack");
    println!("  icontint extract-gatherers   Split gathering recipes into the gatherers table");
    println!("\nRun 'icontint --help' for more details.");
}
