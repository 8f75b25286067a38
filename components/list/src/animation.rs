//! Animated transitions of a [`ListLayout`](crate::ListLayout).

use std::fmt;
use std::time::Duration;

use crate::list::ListLayout;

/// Timing curve applied to the linear progress of an [`Animation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
    /// Accelerates for the first half and decelerates for the second.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Maps linear progress in `0..=1` onto the curve.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t).mul_add(t, -1.0)
                }
            }
        }
    }
}

type Hook = Box<dyn FnOnce(&mut ListLayout)>;

/// A queued transition.
///
/// `preparing` runs when the animation becomes the running one; structural
/// changes made inside it are animated. `completion` runs after pending
/// deletions were applied, before the next queued animation starts.
///
/// ```ignore
/// list.animate(
///     Animation::new(Duration::from_millis(250))
///         .preparing(|list| list.append([row]))
///         .completion(|list| tracing::info!(len = list.len(), "row shown")),
/// );
/// ```
pub struct Animation {
    pub(crate) duration: Duration,
    pub(crate) ease: Ease,
    pub(crate) delay: Duration,
    pub(crate) preparing: Option<Hook>,
    pub(crate) completion: Option<Hook>,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("duration", &self.duration)
            .field("ease", &self.ease)
            .field("delay", &self.delay)
            .field("preparing", &self.preparing.is_some())
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

impl Animation {
    /// An animation running for `duration` with [`Ease::EaseInOut`].
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            ease: Ease::EaseInOut,
            delay: Duration::ZERO,
            preparing: None,
            completion: None,
        }
    }

    /// Sets the timing curve.
    #[must_use]
    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Waits `delay` before progress starts moving.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs `preparing` when the animation starts.
    #[must_use]
    pub fn preparing(mut self, preparing: impl FnOnce(&mut ListLayout) + 'static) -> Self {
        self.preparing = Some(Box::new(preparing));
        self
    }

    /// Runs `completion` when the animation has finished.
    #[must_use]
    pub fn completion(mut self, completion: impl FnOnce(&mut ListLayout) + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    /// Length of the animation, without the delay.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// The running animation.
pub(crate) struct Task {
    pub(crate) duration: Duration,
    pub(crate) ease: Ease,
    pub(crate) delay: Duration,
    pub(crate) elapsed: Duration,
    pub(crate) completion: Option<Hook>,
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("duration", &self.duration)
            .field("ease", &self.ease)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

impl Task {
    /// Linear progress after `elapsed`, or `None` while still delayed.
    pub(crate) fn linear_progress(&self) -> Option<f32> {
        let active = self.elapsed.checked_sub(self.delay)?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        Some((active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert_eq!(Ease::Linear.apply(0.25), 0.25);
        assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
        assert_eq!(Ease::EaseOut.apply(0.5), 0.75);
        assert_eq!(Ease::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Ease::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_task_progress_honours_delay() {
        let mut task = Task {
            duration: Duration::from_millis(200),
            ease: Ease::Linear,
            delay: Duration::from_millis(100),
            elapsed: Duration::from_millis(50),
            completion: None,
        };
        assert_eq!(task.linear_progress(), None);
        task.elapsed = Duration::from_millis(200);
        assert_eq!(task.linear_progress(), Some(0.5));
        task.elapsed = Duration::from_secs(5);
        assert_eq!(task.linear_progress(), Some(1.0));
    }
}
