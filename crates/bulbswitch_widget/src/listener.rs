//! Switch notifications
//!
//! The switch reports three moments of a pull: the grab, the release, and
//! the end of the release animation. Hosts either implement
//! [`SwitchListener`] on their own type or assemble closures with
//! [`SwitchCallbacks`].

use bulbswitch_core::Point;

/// Receiver for switch notifications. Every method defaults to a no-op.
pub trait SwitchListener {
    /// The string was grabbed at `position`
    fn on_pull(&mut self, position: Point) {
        let _ = position;
    }

    /// The string was let go at `position`
    fn on_release(&mut self, position: Point) {
        let _ = position;
    }

    /// The release animation ran to completion
    fn on_end_release(&mut self) {}
}

/// Ignores every notification
impl SwitchListener for () {}

impl<L: SwitchListener + ?Sized> SwitchListener for &mut L {
    fn on_pull(&mut self, position: Point) {
        (**self).on_pull(position);
    }

    fn on_release(&mut self, position: Point) {
        (**self).on_release(position);
    }

    fn on_end_release(&mut self) {
        (**self).on_end_release();
    }
}

impl<L: SwitchListener + ?Sized> SwitchListener for Box<L> {
    fn on_pull(&mut self, position: Point) {
        (**self).on_pull(position);
    }

    fn on_release(&mut self, position: Point) {
        (**self).on_release(position);
    }

    fn on_end_release(&mut self) {
        (**self).on_end_release();
    }
}

type PointCallback = Box<dyn FnMut(Point) + Send>;
type EndCallback = Box<dyn FnMut() + Send>;

/// Closure-backed listener
///
/// ```rust
/// use bulbswitch_widget::{SwitchCallbacks, SwitchListener};
/// use bulbswitch_core::Point;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let releases = Arc::new(AtomicUsize::new(0));
/// let counter = releases.clone();
/// let mut callbacks = SwitchCallbacks::new().with_on_release(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// callbacks.on_release(Point::new(0.0, 0.0));
/// assert_eq!(releases.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct SwitchCallbacks {
    on_pull: Option<PointCallback>,
    on_release: Option<PointCallback>,
    on_end_release: Option<EndCallback>,
}

impl SwitchCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pull callback
    pub fn with_on_pull<F: FnMut(Point) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_pull = Some(Box::new(callback));
        self
    }

    /// Set the release callback
    pub fn with_on_release<F: FnMut(Point) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_release = Some(Box::new(callback));
        self
    }

    /// Set the animation-end callback
    pub fn with_on_end_release<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_end_release = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for SwitchCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchCallbacks")
            .field("on_pull", &self.on_pull.is_some())
            .field("on_release", &self.on_release.is_some())
            .field("on_end_release", &self.on_end_release.is_some())
            .finish()
    }
}

impl SwitchListener for SwitchCallbacks {
    fn on_pull(&mut self, position: Point) {
        if let Some(ref mut callback) = self.on_pull {
            callback(position);
        }
    }

    fn on_release(&mut self, position: Point) {
        if let Some(ref mut callback) = self.on_release {
            callback(position);
        }
    }

    fn on_end_release(&mut self) {
        if let Some(ref mut callback) = self.on_end_release {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Log(Vec<String>);

    impl SwitchListener for Log {
        fn on_pull(&mut self, position: Point) {
            self.0.push(format!("pull {} {}", position.x, position.y));
        }

        fn on_end_release(&mut self) {
            self.0.push("end".into());
        }
    }

    #[test]
    fn test_default_methods_are_noops() {
        let mut log = Log::default();
        log.on_release(Point::new(1.0, 2.0));
        assert!(log.0.is_empty());
    }

    fn pull_with<L: SwitchListener>(mut listener: L) {
        listener.on_pull(Point::new(3.0, 4.0));
        listener.on_end_release();
    }

    #[test]
    fn test_forwarding_through_references() {
        let mut log = Log::default();
        pull_with(&mut log);
        assert_eq!(log.0, vec!["pull 3 4".to_string(), "end".to_string()]);

        let boxed: Box<dyn SwitchListener> = Box::new(Log::default());
        pull_with(boxed);
    }

    #[test]
    fn test_callbacks_fire_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let (pull, release, end) = (events.clone(), events.clone(), events.clone());

        let mut callbacks = SwitchCallbacks::new()
            .with_on_pull(move |p| pull.lock().unwrap().push(format!("pull {}", p.x)))
            .with_on_release(move |p| release.lock().unwrap().push(format!("release {}", p.x)))
            .with_on_end_release(move || end.lock().unwrap().push("end".to_string()));

        callbacks.on_pull(Point::new(10.0, 0.0));
        callbacks.on_release(Point::new(20.0, 0.0));
        callbacks.on_end_release();

        assert_eq!(
            *events.lock().unwrap(),
            vec!["pull 10", "release 20", "end"]
        );
    }

    #[test]
    fn test_missing_callbacks_are_skipped() {
        let mut callbacks = SwitchCallbacks::new();
        callbacks.on_pull(Point::ZERO);
        callbacks.on_end_release();
        assert!(format!("{callbacks:?}").contains("on_pull: false"));
    }
}
