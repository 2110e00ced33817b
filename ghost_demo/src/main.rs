//! Ghost demo application
//!
//! Builds the scene's default emphasis materials, loads any material configs
//! given on the command line (TOML or RON), then walks the ghost material
//! through every preset while a mock render loop polls the redraw flag.

use std::path::PathBuf;
use std::rc::Rc;

use emphasis_engine::foundation::logging;
use emphasis_engine::prelude::*;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("material error: {0}")]
    Material(#[from] MaterialError),
}

/// Stand-in for the renderer: uploads UBOs for materials whose state changed
struct MockRenderer {
    redraw: Rc<RedrawFlag>,
    frames: u32,
    uploaded_bytes: usize,
}

impl MockRenderer {
    fn new(redraw: Rc<RedrawFlag>) -> Self {
        Self {
            redraw,
            frames: 0,
            uploaded_bytes: 0,
        }
    }

    fn frame<'a>(&mut self, materials: impl IntoIterator<Item = &'a mut EmphasisMaterial>) {
        if !self.redraw.take() {
            return;
        }
        self.frames += 1;

        for material in materials {
            let dirty = material.take_dirty();
            if dirty.is_empty() {
                continue;
            }
            let ubo = EmphasisMaterialUBO::from_material(material);
            self.uploaded_bytes += ubo.as_bytes().len();
            log::debug!(
                "Frame {}: '{}' re-uploaded ({} dirty fields, revision {})",
                self.frames,
                material.id().unwrap_or("<anonymous>"),
                dirty.len(),
                material.state().revision()
            );
        }
    }
}

fn run() -> Result<(), DemoError> {
    let pool = StatePool::shared();
    let flag = Rc::new(RedrawFlag::new());
    let redraw: Rc<dyn RedrawListener> = flag.clone();
    let mut renderer = MockRenderer::new(Rc::clone(&flag));

    let mut scene = EmphasisMaterials::new(&pool, &redraw)?;

    let mut custom = Vec::new();
    for path in std::env::args().skip(1).map(PathBuf::from) {
        let config = EmphasisMaterialConfig::load_from_file(&path)?;
        log::info!("Loaded {}", path.display());
        custom.push(EmphasisMaterial::new(&pool, Rc::clone(&redraw), &config)?);
    }

    renderer.frame(
        [&mut scene.ghost, &mut scene.highlight, &mut scene.selected]
            .into_iter()
            .chain(custom.iter_mut()),
    );

    for name in preset_names() {
        let before = flag.requests();
        scene.ghost.set_preset(Some(name))?;
        log::info!(
            "Ghost preset '{}': {} field changes, {} live states, {} distinct",
            name,
            flag.requests() - before,
            pool.borrow().len(),
            pool.borrow().distinct_keys()
        );
        renderer.frame([&mut scene.ghost]);
    }

    if let Err(err) = scene.ghost.set_preset(Some("neon")) {
        log::warn!("Rejected as expected: {}", err);
    }

    let shared = pool.borrow().equivalents(scene.ghost.state().id()).len();
    log::info!("Ghost shares its parameters with {} other material(s)", shared);

    log::info!(
        "Rendered {} frames, uploaded {} bytes for {} redraw requests",
        renderer.frames,
        renderer.uploaded_bytes,
        flag.requests()
    );

    for material in custom {
        material.destroy();
    }
    scene.destroy();
    log::info!("{} render states left in the pool", pool.borrow().len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting ghost demo");

    match run() {
        Ok(()) => {
            log::info!("Ghost demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            Err(e.into())
        }
    }
}
