//! Glue between one mounted UI element and the engine.
//!
//! The UI layer calls `attach` when the element mounts, `update` when its
//! props change and `detach` when it unmounts. Registration with the page
//! composition happens on every attach; unregistration only when
//! `composition.track_unmounts` is enabled.

use std::sync::Arc;

use usage_composition::PageCompositionManager;
use usage_core::config::CompositionConfig;
use usage_core::models::{Props, TrackRequest};

use crate::tracker::{TrackOutcome, UsageTracker};

#[derive(Debug)]
pub struct ComponentBinding {
    name: String,
    props: Props,
    signature: String,
    manager: PageCompositionManager,
    tracker: Arc<UsageTracker>,
    track_unmounts: bool,
}

impl ComponentBinding {
    /// Register with the page and track the mount.
    pub fn attach(
        name: impl Into<String>,
        props: Props,
        manager: &PageCompositionManager,
        tracker: &Arc<UsageTracker>,
        config: &CompositionConfig,
    ) -> (Self, TrackOutcome) {
        let name = name.into();
        let signature = manager.register_component(&name, &props);
        let outcome = tracker.track(&TrackRequest::mount(name.clone(), props.clone()));
        let binding = Self {
            name,
            props,
            signature,
            manager: manager.clone(),
            tracker: Arc::clone(tracker),
            track_unmounts: config.track_unmounts,
        };
        (binding, outcome)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Apply new props. Returns `None` when the sanitized signature did not
    /// change, so nothing was re-registered or tracked.
    pub fn update(&mut self, props: Props) -> Option<TrackOutcome> {
        let signature = self
            .manager
            .reregister_component(&self.name, &self.props, &props);
        self.props = props;
        if signature == self.signature {
            return None;
        }
        self.signature = signature;
        Some(
            self.tracker
                .track(&TrackRequest::update(self.name.clone(), self.props.clone())),
        )
    }

    /// Unmount. Returns whether the page composition was changed.
    pub fn detach(self) -> bool {
        if !self.track_unmounts {
            return false;
        }
        self.manager.unregister_component(&self.name, &self.props)
    }
}
