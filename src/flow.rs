//! Scene lifecycle and the frame loop.
//!
//! A [`Scene`] owns everything with state: the live configuration, the instance
//! registry, the population generator and the animation driver. It can only be
//! built from loaded [`SceneAssets`], so there is never a moment where a frame
//! runs or a regeneration happens without the label in place.
//!
//! # Lifecycle
//!
//! 1. Assets (font + matcap) finish loading, see [`Scene::load`] / [`Scene::from_assets`]
//! 2. The protected label is spawned, then the initial population is generated
//! 3. Every frame the host reads the clock once and calls [`Scene::on_frame`]
//! 4. The host draws [`Scene::on_render`]
//! 5. Whenever the panel changes a value the host calls [`Scene::configure`], which
//!    regenerates synchronously if a spatial parameter changed
//!
//! There is no stop state. [`Frames`] is an endless iterator and the loop ends with
//! the process.

use rand::Rng;

use crate::{
    animation::{AnimationDriver, StepMode},
    clock::Clock,
    config::{ConfigChange, ConfigObserver, ConfigPatch, Configuration, ConfigurationState},
    data_structures::{
        geometry::GeometryCatalog,
        instance::Instance,
        registry::InstanceRegistry,
    },
    generator::{PopulationGenerator, PopulationSummary},
    render::Render,
    resources::{AssetPaths, SceneAssets, load_scene_assets},
};

/// The populated, animated scene.
#[derive(Debug)]
pub struct Scene<R: Rng> {
    config: ConfigurationState,
    registry: InstanceRegistry,
    catalog: GeometryCatalog,
    generator: PopulationGenerator<R>,
    driver: AnimationDriver,
    assets: SceneAssets,
}

impl Scene<rand::rngs::ThreadRng> {
    /// Loads the assets and builds the scene with the standard catalog.
    pub async fn load(paths: &AssetPaths, config: Configuration) -> anyhow::Result<Self> {
        let assets = load_scene_assets(paths).await?;
        Ok(Self::from_assets(
            assets,
            config,
            GeometryCatalog::standard(),
            rand::rng(),
        ))
    }
}

impl<R: Rng> Scene<R> {
    /// Spawns the label and runs the initial population.
    ///
    /// This is the asset-load completion step and the only way to get a scene.
    pub fn from_assets(
        assets: SceneAssets,
        config: Configuration,
        catalog: GeometryCatalog,
        rng: R,
    ) -> Self {
        let mut scene = Self {
            config: ConfigurationState::new(config),
            registry: InstanceRegistry::new(),
            catalog,
            generator: PopulationGenerator::new(rng),
            driver: AnimationDriver::default(),
            assets,
        };
        scene.generator.spawn_label(&mut scene.registry);
        let summary = scene.regenerate();
        log::info!(
            "scene ready with {} instances (font {})",
            summary.created + 1,
            scene.assets.font.name
        );
        scene
    }

    /// Merges `patch` into the configuration.
    ///
    /// Regenerates before returning if the number of meshes or the distance
    /// multiplier changed. A rotation speed change only affects the next frame.
    /// Observers run last, once the population matches the new configuration.
    pub fn configure(&mut self, patch: &ConfigPatch) -> ConfigChange {
        let change = self.config.merge(patch);
        if change.requires_regeneration() {
            self.regenerate();
        }
        self.config.notify(&change);
        change
    }

    /// Registers an observer called after every configuration change and any
    /// regeneration it triggered.
    pub fn subscribe(&mut self, observer: ConfigObserver) {
        self.config.subscribe(observer);
    }

    /// Replaces all unprotected instances using the current configuration.
    pub fn regenerate(&mut self) -> PopulationSummary {
        let config = self.config.get();
        self.generator.regenerate(&mut self.registry, &config)
    }

    /// Runs exactly one animation step.
    pub fn on_frame(&mut self, frame: Frame) {
        let config = self.config.get();
        self.driver.tick(frame.elapsed, &mut self.registry, &config);
    }

    pub fn on_render(&self) -> Render<'_> {
        Render::from_registry(&self.registry, &self.catalog)
    }

    pub fn set_step_mode(&mut self, mode: StepMode) {
        self.driver = AnimationDriver::new(mode);
    }

    pub fn config(&self) -> Configuration {
        self.config.get()
    }

    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &GeometryCatalog {
        &self.catalog
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    pub fn label(&self) -> &Instance {
        match self.registry.label() {
            Some(label) => label,
            None => unreachable!("a scene always holds its label"),
        }
    }
}

/// One iteration of the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub index: u64,
    /// Clock reading for this frame in seconds.
    pub elapsed: f32,
}

/// Endless sequence of frames, reading the clock once per frame.
#[derive(Debug)]
pub struct Frames<C: Clock> {
    clock: C,
    next_index: u64,
}

impl<C: Clock> Frames<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_index: 0,
        }
    }
}

impl<C: Clock> Iterator for Frames<C> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = Frame {
            index: self.next_index,
            elapsed: self.clock.elapsed(),
        };
        self.next_index += 1;
        Some(frame)
    }
}

/// Sets up the logger for the current platform; a second call only warns.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {}", e);
        }
    }
}

/// Drives `scene` without a window: tick, then build the render snapshot.
///
/// Runs `frame_limit` frames, or forever when it is `None`. Returns the number of
/// frames run.
pub fn run_headless<R: Rng, C: Clock>(
    scene: &mut Scene<R>,
    clock: C,
    frame_limit: Option<u64>,
) -> u64 {
    init_logging();
    log::info!(
        "starting frame loop with {} instances, {:?}",
        scene.registry().len(),
        scene.config()
    );

    let frames = Frames::new(clock)
        .take_while(|frame| frame_limit.is_none_or(|limit| frame.index < limit));

    let mut ran = 0;
    for frame in frames {
        scene.on_frame(frame);
        let render = scene.on_render();
        log::trace!(
            "frame {} at {:.3}s: {} batches, {} instances",
            frame.index,
            frame.elapsed,
            render.batches.len(),
            render.amount()
        );
        ran += 1;
    }
    ran
}
