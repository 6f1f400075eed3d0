//! Sliders bound to a number or a number pair
//!
//! With [`SliderTrigger::Input`] every drag step is a candidate commit. A
//! non-zero `timeout_ms` coalesces a burst of drag steps so only the last one
//! lands, once the slider has been still for the whole window. The drag-end
//! `change` event always commits synchronously and drops any pending drag
//! value.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use bindery_forms::prelude::*;
//!
//! struct Mixer {
//!     volume: f64,
//! }
//!
//! let host = Host::new(Mixer { volume: 1.0 });
//! let clock = ManualScheduler::new();
//! let options = SliderOptions::default()
//!     .range(0.0, 10.0)
//!     .timeout_ms(50)
//!     .scheduler(clock.shared());
//!
//! let mut renderer = HeadlessRenderer::new();
//! renderer.render(slider("Volume", &host, &lens!(Mixer, volume), options));
//! let id = renderer.find_one(WidgetKind::Slider).unwrap();
//!
//! renderer.slide(id, 3.0).unwrap();
//! renderer.slide(id, 4.0).unwrap();
//! assert_eq!(host.read(|m| m.volume), 1.0);
//!
//! clock.advance(Duration::from_millis(50));
//! assert_eq!(host.read(|m| m.volume), 4.0);
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, text, Binder, BindValue, Debouncer, Element, Host, Lens, SharedScheduler, Slot,
    TokioScheduler, Value, WidgetKind,
};

/// Event that commits a slider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderTrigger {
    /// Every drag step, debounced by `timeout_ms`
    #[default]
    Input,
    /// Drag end only
    Change,
}

#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks: bool,
    pub labeled: bool,
    pub disabled: bool,
    pub trigger: SliderTrigger,
    /// Quiet window for `input` commits; 0 commits every step
    pub timeout_ms: u64,
    /// Timer source for the debounce window, tokio when unset
    #[serde(skip)]
    pub scheduler: Option<SharedScheduler>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 5.0,
            step: 1.0,
            ticks: true,
            labeled: true,
            disabled: false,
            trigger: SliderTrigger::Input,
            timeout_ms: 0,
            scheduler: None,
        }
    }
}

impl SliderOptions {
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn labeled(mut self, labeled: bool) -> Self {
        self.labeled = labeled;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn trigger(mut self, trigger: SliderTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn scheduler(mut self, scheduler: SharedScheduler) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    fn window(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Scheduler for the debounce window, `None` to commit immediately
    fn resolve_scheduler(&self) -> Option<SharedScheduler> {
        if self.timeout_ms == 0 {
            return None;
        }
        if let Some(scheduler) = &self.scheduler {
            return Some(Arc::clone(scheduler));
        }
        match TokioScheduler::current() {
            Some(tokio) => Some(Arc::new(tokio)),
            None => {
                tracing::warn!(
                    timeout_ms = self.timeout_ms,
                    "no scheduler and no tokio runtime, slider commits will not be debounced"
                );
                None
            }
        }
    }
}

/// Single-value slider
pub fn slider<H, T>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: SliderOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let binder = Binder::new(host, lens).slot(Slot::Prop(props::VALUE));
    labelled(label, wire(binder, slider_element(&options), &options))
}

/// Two-handle slider bound to an ordered `(start, end)` pair
pub fn range_slider<H>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, (f64, f64)>,
    options: SliderOptions,
) -> Element
where
    H: Send + 'static,
{
    let binder = Binder::new(host, lens).slot(Slot::Pair(props::VALUE_START, props::VALUE_END));
    let el = slider_element(&options).flag(props::RANGE, true);
    labelled(label, wire(binder, el, &options))
}

fn slider_element(options: &SliderOptions) -> Element {
    element(WidgetKind::Slider)
        .class("flex-1")
        .prop(props::MIN, options.min)
        .prop(props::MAX, options.max)
        .prop(props::STEP, options.step)
        .flag(props::TICKS, options.ticks)
        .flag(props::LABELED, options.labeled)
        .flag(props::DISABLED, options.disabled)
}

fn labelled(label: &str, control: Element) -> Element {
    element(WidgetKind::Container)
        .class("flex items-center gap-3")
        .child(text(label))
        .child(control)
}

fn wire<H, T>(binder: Binder<H, T>, el: Element, options: &SliderOptions) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let el = binder.apply_initial(el).node_ref(binder.node_ref());

    match options.trigger {
        SliderTrigger::Change => el.on(event_types::CHANGE, {
            let binder = binder.clone();
            move |_: &mut bindery_core::Event| {
                binder.commit_live();
            }
        }),
        SliderTrigger::Input => {
            let debouncer = Debouncer::new(options.window(), options.resolve_scheduler(), {
                let binder = binder.clone();
                move |value: Value| {
                    binder.commit(&value);
                }
            });

            let on_input = {
                let binder = binder.clone();
                let debouncer = debouncer.clone();
                move |_: &mut bindery_core::Event| match binder.read_live() {
                    Some(value) => debouncer.call(value),
                    None => {
                        tracing::warn!(
                            field = binder.lens().name(),
                            "slider unavailable, input ignored"
                        )
                    }
                }
            };
            let on_change = move |_: &mut bindery_core::Event| {
                debouncer.cancel();
                binder.commit_live();
            };

            el.on(event_types::INPUT, on_input)
                .on(event_types::CHANGE, on_change)
        }
    }
}
