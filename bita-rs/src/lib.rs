//! # bita-rs
//!
//! Client-side form pipeline and component state for the Bita restaurant
//! site.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `bita-rs` to get everything, or on individual crates for
//! finer-grained control.

/// Errors, settings, settings loading, and logging setup.
pub use bita_core as core;

/// Field specs, validation, the submission state machine, and the site forms.
#[cfg(feature = "forms")]
pub use bita_forms as forms;

/// Header, menu, gallery, and accordion state.
#[cfg(feature = "ui")]
pub use bita_ui as ui;

/// Test channels and fixtures.
#[cfg(feature = "testing")]
pub use bita_test as test;

/// Third-party crates the public API is built on.
pub use async_trait;
pub use chrono;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;

/// Commonly used items.
pub mod prelude {
    pub use bita_core::{BitaError, BitaResult, FormSettings, Settings, SuccessDisplay};

    #[cfg(feature = "forms")]
    pub use bita_forms::{
        booking_form, contact_form, FormPipeline, FormStatus, Notice, NoticeBoard, Notifier,
        SimulatedChannel, SubmissionChannel, SubmitOutcome,
    };

    #[cfg(feature = "ui")]
    pub use bita_ui::{Accordion, GalleryState, HeaderState, MenuSection};
}
