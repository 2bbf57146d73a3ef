use std::cell::RefCell;
use std::env;
use std::path::Path;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use cafe_gallery::cli::{Cli, Sub};
use cafe_gallery::gallery::{
    items_from_config, ContainerResize, Gallery, GalleryItem, ViewportChange,
};
use cafe_gallery::layout::{MasonryLayout, Options};
use cafe_gallery::observer::Observer;
use cafe_gallery_config::Config;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "cafe_gallery=info,cafe_gallery_config=info";

#[derive(Serialize)]
struct LayoutOutput<'a> {
    viewport_width: f64,
    container_width: f64,
    container_height: f64,
    layout: &'a MasonryLayout<String>,
}

fn main() -> anyhow::Result<()> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.subcommand {
        Sub::Layout {
            viewport_width,
            container_width,
            json,
        } => {
            let container_width = container_width.unwrap_or(viewport_width);
            let gallery = laid_out_gallery(&config, viewport_width, container_width)?;

            if json {
                let output = LayoutOutput {
                    viewport_width,
                    container_width,
                    container_height: gallery.container_height(),
                    layout: gallery.layout(),
                };
                let json = serde_json::to_string_pretty(&output)
                    .context("error serializing layout")?;
                println!("{json}");
            } else {
                print_layout(&gallery);
            }
        }
        Sub::Validate => {
            info!("config is valid: {} items", config.items.len());
        }
        Sub::Simulate { widths } => simulate(&config, &widths)?,
        Sub::Show {
            viewport_width,
            index,
        } => {
            let mut gallery = laid_out_gallery(&config, viewport_width, viewport_width)?;
            gallery
                .click_index(index)
                .context("error opening the lightbox")?;

            let item = gallery
                .selected_item()
                .context("lightbox has no selected item")?;
            print_item(item);
            if let Some(tile) = gallery.layout().tile(index) {
                println!(
                    "tile: column {} at ({}, {}), {}x{}",
                    tile.column, tile.x, tile.y, tile.width, tile.height
                );
            }

            gallery.dismiss();
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        // Debug formatting renders the full miette diagnostic with source snippets.
        Some(path) => Config::load(path).map_err(|err| anyhow!("{err:?}")),
        None => {
            debug!("using the built-in config");
            Ok(Config::default())
        }
    }
}

fn laid_out_gallery(
    config: &Config,
    viewport_width: f64,
    container_width: f64,
) -> anyhow::Result<Gallery> {
    let options = Rc::new(Options::from_config(config));
    let mut gallery =
        Gallery::new(items_from_config(config), options).context("error creating gallery")?;
    gallery.on_viewport_change(viewport_width)?;
    gallery.on_container_resize(container_width)?;
    Ok(gallery)
}

fn print_layout(gallery: &Gallery) {
    let layout = gallery.layout();
    println!(
        "{} columns of width {}, container height {}",
        layout.column_count(),
        layout.column_width(),
        gallery.container_height(),
    );

    for tile in layout.tiles() {
        println!(
            "{:>3}  {:<20} column {}  x {:>7.1}  y {:>7.1}  {:.1}x{:.1}",
            tile.index, tile.id, tile.column, tile.x, tile.y, tile.width, tile.height
        );
    }
}

fn print_item(item: &GalleryItem) {
    println!("{} ({})", item.alt, item.id);
    println!("src: {}", item.src);
}

fn simulate(config: &Config, widths: &[f64]) -> anyhow::Result<()> {
    let options = Rc::new(Options::from_config(config));
    let gallery = Gallery::new(items_from_config(config), options)
        .context("error creating gallery")?;
    let gallery = Rc::new(RefCell::new(gallery));

    let mut resize = Observer::new("container-resize");
    let mut viewport = Observer::new("viewport");
    let attachment = Gallery::attach(&gallery, &mut resize, &mut viewport);

    for &width in widths {
        viewport.notify(&ViewportChange { width });
        resize.notify(&ContainerResize { width, height: 0. });

        let mut gallery = gallery.borrow_mut();
        let layout = gallery.layout();
        print!(
            "width {width}: {} columns, height {}",
            layout.column_count(),
            gallery.container_height(),
        );

        match gallery.take_animation() {
            Some(plan) => println!(
                ", {:?} animation over {} ms",
                plan.strategy,
                plan.end_time().as_millis()
            ),
            None => println!(", no animation"),
        }
    }

    attachment.detach(&mut resize, &mut viewport);
    Ok(())
}
