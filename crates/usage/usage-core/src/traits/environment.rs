use crate::models::PageEnvironment;

/// Source of the current environment signals, read on every resolution.
pub trait IEnvironmentSource: Send + Sync {
    fn snapshot(&self) -> PageEnvironment;
}

/// A fixed environment.
impl IEnvironmentSource for PageEnvironment {
    fn snapshot(&self) -> PageEnvironment {
        self.clone()
    }
}
