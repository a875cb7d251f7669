use crate::models::CompositionChange;

/// Consumer of coalesced page composition changes.
pub trait ICompositionHandler: Send + Sync {
    fn on_composition_changed(&self, change: &CompositionChange);
}

impl<F> ICompositionHandler for F
where
    F: Fn(&CompositionChange) + Send + Sync,
{
    fn on_composition_changed(&self, change: &CompositionChange) {
        self(change)
    }
}
