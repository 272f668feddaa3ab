//! Starfield animation state and per-frame update.

use paperbuddy_core::{AnimationSpeed, Palette};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{LinearGradient, Surface, Viewport};

/// Settings used when a [`StarField`] is created.
#[derive(Debug, Clone, PartialEq)]
pub struct StarFieldOptions {
    /// Number of stars; fixed for the animator's lifetime.
    pub star_count: usize,
    /// Gradient and star colors.
    pub palette: Palette,
    /// Global drift speed.
    pub speed: AnimationSpeed,
    /// RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for StarFieldOptions {
    fn default() -> Self {
        Self {
            star_count: 200,
            palette: Palette::default(),
            speed: AnimationSpeed::default(),
            seed: None,
        }
    }
}

/// A fixed set of stars drifting upward over a vertical gradient.
///
/// The animator keeps exactly one frame request outstanding while running.
/// [`StarField::teardown`] cancels it, after which frame callbacks and
/// resizes are ignored.
#[derive(Debug)]
pub struct StarField<R = StdRng> {
    /// Stars in insertion (paint) order.
    particles: Vec<Particle>,
    /// Colors used each frame.
    palette: Palette,
    /// Global drift multiplier.
    speed: AnimationSpeed,
    /// Source of wrap-around columns.
    rng: R,
    /// Outstanding frame request.
    pending: Option<FrameHandle>,
    /// False once torn down.
    attached: bool,
}

impl StarField<StdRng> {
    /// Size `surface` to the viewport, scatter the stars, and request the
    /// first frame.
    pub fn initialize<S, V, F>(
        surface: &mut S,
        viewport: &V,
        scheduler: &mut F,
        options: &StarFieldOptions,
    ) -> Self
    where
        S: Surface,
        V: Viewport,
        F: FrameScheduler,
    {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(surface, viewport, scheduler, options, rng)
    }
}

impl<R: Rng> StarField<R> {
    /// Like [`StarField::initialize`] with a caller-provided RNG.
    pub fn with_rng<S, V, F>(
        surface: &mut S,
        viewport: &V,
        scheduler: &mut F,
        options: &StarFieldOptions,
        mut rng: R,
    ) -> Self
    where
        S: Surface,
        V: Viewport,
        F: FrameScheduler,
    {
        let size = viewport.inner_size();
        surface.set_size(size);
        let particles = (0..options.star_count)
            .map(|_| Particle::random(&mut rng, size))
            .collect();
        Self::start(particles, options.palette, options.speed, rng, scheduler)
    }

    /// Start with an explicit set of stars.
    pub fn from_particles<S, V, F>(
        surface: &mut S,
        viewport: &V,
        scheduler: &mut F,
        particles: Vec<Particle>,
        palette: Palette,
        rng: R,
    ) -> Self
    where
        S: Surface,
        V: Viewport,
        F: FrameScheduler,
    {
        surface.set_size(viewport.inner_size());
        Self::start(particles, palette, AnimationSpeed::default(), rng, scheduler)
    }

    fn start<F: FrameScheduler>(
        particles: Vec<Particle>,
        palette: Palette,
        speed: AnimationSpeed,
        rng: R,
        scheduler: &mut F,
    ) -> Self {
        tracing::debug!(stars = particles.len(), "starfield initialized");
        Self {
            particles,
            palette,
            speed,
            rng,
            pending: Some(scheduler.request_frame()),
            attached: true,
        }
    }

    /// Frame callback. Draws and requests the next frame only when `handle`
    /// is the outstanding request; returns whether a frame was drawn.
    pub fn on_frame<S, F>(&mut self, handle: FrameHandle, surface: &mut S, scheduler: &mut F) -> bool
    where
        S: Surface,
        F: FrameScheduler,
    {
        if !self.attached || self.pending != Some(handle) {
            return false;
        }
        self.render_frame(surface);
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Paint one frame and advance every star, without scheduling.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) {
        let size = surface.size();
        surface.clear();
        surface.set_global_alpha(1.0);
        surface.fill_gradient(&LinearGradient::vertical(
            size.height as f32,
            self.palette.gradient_top,
            self.palette.gradient_bottom,
        ));

        let multiplier = self.speed.multiplier();
        for particle in &mut self.particles {
            surface.set_global_alpha(particle.alpha());
            surface.fill_circle(particle.x, particle.y, particle.radius(), self.palette.star);
            particle.advance(multiplier, size, &mut self.rng);
        }
    }

    /// Refit the surface to the viewport. Stars keep their positions.
    pub fn on_resize<S: Surface, V: Viewport>(&mut self, surface: &mut S, viewport: &V) {
        if !self.attached {
            return;
        }
        let size = viewport.inner_size();
        if surface.size() != size {
            tracing::debug!(width = size.width, height = size.height, "starfield resized");
            surface.set_size(size);
        }
    }

    /// Stop the animation: cancel the outstanding frame and ignore further
    /// callbacks and resizes.
    pub fn teardown<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if self.attached {
            tracing::debug!("starfield torn down");
        }
        self.attached = false;
    }

    /// True until [`StarField::teardown`] is called.
    pub fn is_running(&self) -> bool {
        self.attached
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }
}
