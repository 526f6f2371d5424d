mod config;
mod controls;
mod studio;

use anyhow::{Context, Result};
use facet_engine::logging::{init_logging, LoggingConfig};

use crate::config::StudioConfig;
use crate::studio::Studio;

fn main() -> Result<()> {
    let cfg = StudioConfig::from_args(std::env::args().skip(1))
        .context("reading studio arguments")?;

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cfg.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    anyhow::ensure!(cfg.frames > 0, "--frames must be at least 1");

    let mut studio = Studio::new(&cfg);
    for (name, value) in &cfg.overrides {
        studio
            .set(name, *value)
            .with_context(|| format!("applying --set {name}={value}"))?;
    }

    log::info!("facet studio: {} shape, {} frame(s)", cfg.shape, cfg.frames);

    let mut last = None;
    for frame in 0..cfg.frames {
        last = Some(studio.on_frame(frame, cfg.key_at(frame)));
    }

    if let Some(stats) = last {
        let p = studio.params();
        println!();
        println!("  facet studio · {}", cfg.shape);
        println!("  radius top     {:.0}", p.radius_top);
        println!("  radius bottom  {:.0}", p.radius_bottom);
        println!("  slope          {:.3}", p.slope_factor);
        println!("  segments       {}", p.segments);
        println!("  draw items     {}", stats.items);
        println!("  triangles      {}", stats.triangles);
        println!("  vertices       {}", stats.vertices);
        println!();
    }

    Ok(())
}
