//! Signup form validation.
//!
//! A [`Coordinator`] watches five fields (email, country, postal code,
//! password and its confirmation), validates each against a fixed rule and
//! tells a [`FormSurface`] how to style the field and which error to show.
//! Feedback stays hidden until a field has been touched.
//!
//! # Example
//!
//! ```
//! use formguard_lib::{Coordinator, EventOutcome, FieldId, FormEvent, MemorySurface};
//!
//! let mut form = Coordinator::new(MemorySurface::new());
//!
//! // Confirm cannot be entered before the password is complete.
//! assert_eq!(
//!     form.dispatch(FormEvent::Focus(FieldId::Confirm)),
//!     EventOutcome::FocusRejected
//! );
//! assert_eq!(
//!     form.surface().error(FieldId::Confirm),
//!     "Please complete password first."
//! );
//! ```

pub mod bindings;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod field;
pub mod message;
pub mod render;
pub mod rules;
pub mod surface;

pub use bindings::{Bindings, Handler, HandlerContext};
pub use config::FormConfig;
pub use coordinator::Coordinator;
pub use error::FormError;
pub use event::{EventKind, EventOutcome, FormEvent, Target};
pub use field::{Field, FieldId, FormState};
pub use message::{ErrorMessage, Messages};
pub use render::{RenderState, StyleClass};
pub use rules::PasswordRequirement;
pub use surface::{FormSurface, MemorySurface};
