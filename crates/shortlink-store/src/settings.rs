use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Configures a [`ShortLinkStore`](crate::ShortLinkStore) instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StoreSettings {
    /// How many candidate tokens to draw before giving up on a create.
    /// Must be at least 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Initial table capacity.
    #[builder(default = 0)]
    pub capacity: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
