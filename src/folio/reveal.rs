//! # Scroll Reveal
//!
//! One-shot entrance animations driven by viewport intersection. Every
//! registered element starts hidden and is revealed the first time it enters
//! view; after that it is no longer observed.
//!
//! ```text
//! register ──► Suppressed ──(entering intersection)──► Revealed (terminal)
//! ```
//!
//! The controller never touches a real viewport. It talks to two
//! capabilities: a [`VisibilitySignal`] that delivers intersection entries
//! and a [`ClassList`] that applies the visual state. When no signal is
//! available the controller fails open and reveals everything immediately,
//! so content is never left permanently hidden.

use crate::error::{FolioError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SUPPRESSED_CLASS: &str = "opacity-0";
pub const REVEALED_CLASS: &str = "animate-fade-in";

/// Per-element reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Suppressed,
    Revealed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    pub root_margin: String,
    pub suppressed_class: String,
    pub revealed_class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            suppressed_class: SUPPRESSED_CLASS.to_string(),
            revealed_class: REVEALED_CLASS.to_string(),
        }
    }
}

impl RevealOptions {
    /// Options with the given visible fraction; rejects NaN and values
    /// outside `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Self::default().threshold(threshold)
    }

    pub fn threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.threshold
    }
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub element: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<E> IntersectionEntry<E> {
    pub fn entering(element: E, ratio: f64) -> Self {
        Self {
            element,
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving(element: E) -> Self {
        Self {
            element,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Source of viewport-intersection events.
pub trait VisibilitySignal<E> {
    /// Start reporting intersections for `element`.
    fn observe(&mut self, element: &E, options: &RevealOptions);

    /// Stop reporting intersections for `element`.
    fn unobserve(&mut self, element: &E);
}

/// Visual state sink: the element's class list.
pub trait ClassList<E> {
    fn add_class(&mut self, element: &E, class: &str);
    fn remove_class(&mut self, element: &E, class: &str);
}

pub struct ScrollRevealController<E, S, C>
where
    E: Eq + Hash + Clone,
    S: VisibilitySignal<E>,
    C: ClassList<E>,
{
    signal: Option<S>,
    classes: C,
    tracked: HashMap<E, Tracked>,
}

// Each element remembers the options it was registered with, so its classes
// are swapped with the same names it was hidden with.
struct Tracked {
    state: RevealState,
    options: Rc<RevealOptions>,
}

impl<E, S, C> ScrollRevealController<E, S, C>
where
    E: Eq + Hash + Clone + std::fmt::Debug,
    S: VisibilitySignal<E>,
    C: ClassList<E>,
{
    /// `signal` is `None` when the environment has no intersection support.
    pub fn new(signal: Option<S>, classes: C) -> Self {
        Self {
            signal,
            classes,
            tracked: HashMap::new(),
        }
    }

    pub fn classes(&self) -> &C {
        &self.classes
    }

    pub fn signal(&self) -> Option<&S> {
        self.signal.as_ref()
    }

    /// Whether intersection signalling is available; false means fail-open.
    pub fn is_supported(&self) -> bool {
        self.signal.is_some()
    }

    pub fn state(&self, element: &E) -> Option<RevealState> {
        self.tracked.get(element).map(|t| t.state)
    }

    /// Elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.tracked
            .values()
            .filter(|t| t.state == RevealState::Suppressed)
            .count()
    }

    /// Hides each element and starts observing it with `options`. Already
    /// tracked elements are left in their current state.
    pub fn register<I>(&mut self, elements: I, options: &RevealOptions)
    where
        I: IntoIterator<Item = E>,
    {
        let options = Rc::new(options.clone());
        for element in elements {
            if self.tracked.contains_key(&element) {
                continue;
            }

            if self.signal.is_none() {
                tracing::debug!(?element, "no visibility signal, revealing immediately");
                apply_revealed(&mut self.classes, &element, &options);
                self.tracked.insert(
                    element,
                    Tracked {
                        state: RevealState::Revealed,
                        options: Rc::clone(&options),
                    },
                );
                continue;
            }

            self.classes.add_class(&element, &options.suppressed_class);
            if let Some(signal) = self.signal.as_mut() {
                signal.observe(&element, &options);
            }
            self.tracked.insert(
                element,
                Tracked {
                    state: RevealState::Suppressed,
                    options: Rc::clone(&options),
                },
            );
        }
    }

    /// Handles one intersection report. Returns true only when the element
    /// transitioned to [`RevealState::Revealed`].
    pub fn on_intersect(&mut self, entry: &IntersectionEntry<E>) -> bool {
        if !entry.is_intersecting {
            return false;
        }

        let tracked = match self.tracked.get_mut(&entry.element) {
            Some(t) if t.state == RevealState::Suppressed => t,
            _ => return false,
        };

        apply_revealed(&mut self.classes, &entry.element, &tracked.options);
        if let Some(signal) = self.signal.as_mut() {
            signal.unobserve(&entry.element);
        }
        tracked.state = RevealState::Revealed;
        tracing::trace!(element = ?entry.element, ratio = entry.ratio, "revealed");
        true
    }

    /// Stops observing every element still suppressed. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        let Some(signal) = self.signal.as_mut() else {
            return;
        };
        for (element, _) in self
            .tracked
            .iter()
            .filter(|(_, t)| t.state == RevealState::Suppressed)
        {
            signal.unobserve(element);
        }
        // Dropping suppressed entries makes a second teardown a no-op and
        // stops late intersection reports from revealing anything.
        self.tracked.retain(|_, t| t.state == RevealState::Revealed);
    }
}

fn apply_revealed<E, C: ClassList<E>>(classes: &mut C, element: &E, options: &RevealOptions) {
    classes.add_class(element, &options.revealed_class);
    classes.remove_class(element, &options.suppressed_class);
}
