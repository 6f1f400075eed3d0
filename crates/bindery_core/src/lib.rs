//! Bindery Core Runtime
//!
//! This crate provides the foundational primitives for binding application
//! state to form widgets:
//!
//! - **Host & Lens**: a shared application record plus explicit `{get, set}`
//!   accessors standing in for a property key
//! - **Binder**: the bidirectional contract every form builder is made of
//!   (initial value from the host, live widget value back into the host)
//! - **Fragments & Refs**: template descriptions handed to a renderer, and
//!   weak handles to the widget instances it creates
//! - **Timers**: cancellable scheduling and trailing-edge debouncing
//!
//! # Example
//!
//! ```rust
//! use bindery_core::prelude::*;
//!
//! #[derive(Default)]
//! struct Settings {
//!     volume: f64,
//! }
//!
//! let host = Host::new(Settings { volume: 3.0 });
//! let volume = bindery_core::lens!(Settings, volume);
//!
//! let fragment = Binder::new(&host, &volume)
//!     .bind(element(WidgetKind::Slider), event_types::CHANGE);
//!
//! let mut renderer = HeadlessRenderer::new();
//! renderer.render(fragment);
//!
//! let slider = renderer.find_one(WidgetKind::Slider).unwrap();
//! renderer.slide(slider, 4.0).unwrap();
//! renderer.release(slider).unwrap();
//!
//! assert_eq!(host.read(|s| s.volume), 4.0);
//! ```

pub mod binder;
pub mod debounce;
pub mod error;
pub mod events;
pub mod fragment;
pub mod fsm;
pub mod headless;
pub mod host;
pub mod node_ref;
pub mod options;
pub mod scheduler;
pub mod transform;
pub mod value;
pub mod widget;

pub use binder::{Binder, Slot};
pub use debounce::Debouncer;
pub use error::{BindError, Result};
pub use events::{Event, EventData, EventHandler, EventPhase, EventType};
pub use fragment::{element, text, Element, Fragment, Listener, MountHook};
pub use fsm::{StateId, StateMachine, Transition};
pub use headless::HeadlessRenderer;
pub use host::{Host, Lens};
pub use node_ref::{LiveWidget, NodeRef};
pub use options::{options_from_json, options_from_toml};
pub use scheduler::{ManualScheduler, Scheduler, SharedScheduler, TimerHandle, TokioScheduler};
pub use transform::{Identity, IndexLookup, TextCoerce, Toggle, Transform};
pub use value::{BindValue, Value};
pub use widget::{WidgetId, WidgetInstance, WidgetKind};

/// Commonly used items for building bound widgets
pub mod prelude {
    pub use crate::binder::{Binder, Slot};
    pub use crate::error::{BindError, Result};
    pub use crate::events::{event_types, Event, EventData, EventPhase};
    pub use crate::fragment::{element, text, Element, Fragment};
    pub use crate::headless::HeadlessRenderer;
    pub use crate::host::{Host, Lens};
    pub use crate::node_ref::NodeRef;
    pub use crate::scheduler::{ManualScheduler, Scheduler, SharedScheduler, TokioScheduler};
    pub use crate::transform::{Identity, IndexLookup, TextCoerce, Toggle, Transform};
    pub use crate::value::{BindValue, Value};
    pub use crate::widget::{WidgetId, WidgetInstance, WidgetKind};
}
