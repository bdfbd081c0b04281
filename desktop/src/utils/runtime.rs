//! Global Tokio runtime for background work
//!
//! egui drives the UI from the main thread; reqwest and the carousel timer
//! need a Tokio context. `main` enters this runtime once so every
//! `tokio::spawn` made from UI handlers lands on its worker threads.
//!
//! ```rust,ignore
//! let runtime = edunexus::utils::runtime::runtime()?;
//! let _guard = runtime.enter();
//! ```

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

use crate::core::error::{AppError, Result};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Get (building on first use) the shared multi-threaded runtime.
pub fn runtime() -> Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("edunexus-worker")
            .worker_threads(2)
            .build()
            .map_err(|e| AppError::State(format!("Failed to create Tokio runtime: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_is_shared() {
        let first = runtime().unwrap() as *const Runtime;
        let second = runtime().unwrap() as *const Runtime;
        assert_eq!(first, second);
        assert_eq!(runtime().unwrap().block_on(async { 7 }), 7);
    }
}
