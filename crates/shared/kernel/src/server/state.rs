use aasm_domain::config::SiteConfig;
use aasm_domain::registry::{FeatureSlice, InitializedSlice};
use axum::extract::FromRef;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[aasm_derive::site_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct SiteStateInner {
    pub config: SiteConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Axum state: configuration plus the registered feature slices, shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns the slice registered for `T`.
    ///
    /// # Errors
    /// Returns [`SiteStateError::MissingSlice`] if no slice of that type was registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, SiteStateError> {
        self.get_slice::<T>().ok_or_else(|| SiteStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    pub fn slice_count(&self) -> usize {
        self.inner.slices.len()
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<SiteState> for SiteConfig {
    fn from_ref(state: &SiteState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Registers a slice; a later slice of the same type replaces the earlier one.
    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    #[must_use]
    pub fn register_slices<I>(self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        slices.into_iter().fold(self, Self::register_slice)
    }

    /// # Errors
    /// Returns [`SiteStateError::Validation`] when no configuration was supplied.
    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let config = self.config.ok_or_else(|| SiteStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        Ok(SiteState { inner: Arc::new(SiteStateInner { config, slices: self.slices }) })
    }
}
