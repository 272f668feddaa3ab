//! Drifting starfield animation for the PaperBuddy hero.
//!
//! A fixed set of particles drifts upward over a vertical navy gradient. The
//! animator draws through the [`Surface`] trait and paces itself through a
//! [`FrameScheduler`], so any host able to fill gradients and circles and to
//! signal display refreshes can run it. [`PixelSurface`] and
//! [`StarFieldView`] present it in a terminal via ratatui.

mod animator;
mod particle;
mod pixel;
mod scheduler;
mod surface;
mod widget;

pub use animator::{StarField, StarFieldOptions};
pub use particle::{MAX_RADIUS, MAX_SPEED, MIN_SPEED, Particle};
pub use pixel::PixelSurface;
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use surface::{LinearGradient, Surface, Viewport};
pub use widget::StarFieldView;
