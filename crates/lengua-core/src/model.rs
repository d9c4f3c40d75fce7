// Language-model lifecycle: lazy, shared, released exactly once.
//
// A language model is an expensive on-disk statistical resource used by
// probability-based rules. Each profile owns at most one live instance. It is
// loaded on first demand, shared with every caller afterwards, and closed when
// the profile is released or dropped.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::LanguageError;

/// An opened language-model resource.
pub trait LanguageModel: Send + Sync {
    /// Pseudo-probability of the given token sequence.
    fn pseudo_probability(&self, tokens: &[&str]) -> f64;

    /// Release the underlying resource. Called at most once by the handle.
    fn close(&self) -> io::Result<()>;
}

/// Opens language models from a storage location.
pub trait LanguageModelLoader: Send + Sync {
    fn load(&self, location: &Path) -> io::Result<Arc<dyn LanguageModel>>;
}

/// Owns zero or one shared language model for a profile instance.
///
/// [`acquire`](Self::acquire) holds the lock across the check-then-create
/// sequence, so concurrent first callers all receive the same instance and
/// the loader runs once.
pub struct LanguageModelHandle {
    loader: Option<Arc<dyn LanguageModelLoader>>,
    slot: Mutex<Option<Arc<dyn LanguageModel>>>,
}

impl LanguageModelHandle {
    /// Create an empty handle that loads models with `loader`.
    pub fn new(loader: Arc<dyn LanguageModelLoader>) -> Self {
        Self {
            loader: Some(loader),
            slot: Mutex::new(None),
        }
    }

    /// Create a handle with no loader. [`acquire`](Self::acquire) fails with
    /// [`LanguageError::ModelUnavailable`].
    pub fn unavailable() -> Self {
        Self {
            loader: None,
            slot: Mutex::new(None),
        }
    }

    /// Return the shared model, loading it from `location` on first use.
    ///
    /// Once a model is held, `location` is ignored. A failed load stores
    /// nothing, so a later call may try again.
    pub fn acquire(&self, location: &Path) -> Result<Arc<dyn LanguageModel>, LanguageError> {
        let mut slot = self.slot.lock();
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }
        let loader = self.loader.as_ref().ok_or(LanguageError::ModelUnavailable)?;
        log::debug!("loading language model from {}", location.display());
        let model = loader
            .load(location)
            .map_err(|source| LanguageError::ModelLoad {
                location: location.to_path_buf(),
                source,
            })?;
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Close and forget the held model, if any.
    ///
    /// Does nothing when no model was ever acquired. After a release the next
    /// [`acquire`](Self::acquire) loads a fresh model.
    pub fn release(&self) -> Result<(), LanguageError> {
        let mut slot = self.slot.lock();
        match slot.take() {
            Some(model) => {
                log::debug!("closing language model");
                model.close().map_err(LanguageError::ModelClose)
            }
            None => Ok(()),
        }
    }

    /// Return whether a model is currently held.
    pub fn is_loaded(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl Drop for LanguageModelHandle {
    fn drop(&mut self) {
        if let Some(model) = self.slot.get_mut().take() {
            if let Err(e) = model.close() {
                log::warn!("failed to close language model: {e}");
            }
        }
    }
}

impl fmt::Debug for LanguageModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageModelHandle")
            .field("has_loader", &self.loader.is_some())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
