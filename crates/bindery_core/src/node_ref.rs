//! Transient references to live widgets
//!
//! A [`NodeRef`] is created when a fragment is described and filled in by the
//! renderer once the widget exists. It only holds a weak pointer: when the
//! renderer drops the widget (re-render, unmount) the ref goes dead instead
//! of keeping the widget alive.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::Notify;

use crate::error::{BindError, Result};
use crate::widget::{WidgetId, WidgetInstance};

/// Strong handle to a live widget, held only by the renderer
pub type LiveWidget = Arc<Mutex<WidgetInstance>>;

/// Lock a live widget, recovering the state from a poisoned lock
pub fn lock_widget(widget: &LiveWidget) -> MutexGuard<'_, WidgetInstance> {
    widget.lock().unwrap_or_else(PoisonError::into_inner)
}

struct RefSlot {
    widget: Mutex<Weak<Mutex<WidgetInstance>>>,
    mounted: Notify,
}

/// Weak, shareable handle to whichever widget a fragment element became
#[derive(Clone)]
pub struct NodeRef {
    slot: Arc<RefSlot>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RefSlot {
                widget: Mutex::new(Weak::new()),
                mounted: Notify::new(),
            }),
        }
    }

    /// Point the ref at a freshly mounted widget and wake mount waiters
    pub fn attach(&self, widget: &LiveWidget) {
        *self.weak_slot() = Arc::downgrade(widget);
        self.slot.mounted.notify_waiters();
    }

    pub fn detach(&self) {
        *self.weak_slot() = Weak::new();
    }

    /// The widget, if it is still alive
    pub fn get(&self) -> Option<LiveWidget> {
        self.weak_slot().upgrade()
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }

    pub fn id(&self) -> Option<WidgetId> {
        self.with(|w| w.id())
    }

    /// Read the live widget
    pub fn with<R>(&self, f: impl FnOnce(&WidgetInstance) -> R) -> Option<R> {
        let widget = self.get()?;
        let guard = lock_widget(&widget);
        Some(f(&guard))
    }

    /// Mutate the live widget
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut WidgetInstance) -> R) -> Option<R> {
        let widget = self.get()?;
        let mut guard = lock_widget(&widget);
        Some(f(&mut guard))
    }

    /// Wait until a renderer attaches a widget to this ref
    ///
    /// Resolves immediately when already attached. With `timeout = None` the
    /// wait is unbounded.
    pub async fn mounted(&self, timeout: Option<Duration>) -> Result<LiveWidget> {
        let wait = async {
            loop {
                let mut notified = std::pin::pin!(self.slot.mounted.notified());
                // Register before checking so an attach in between is not missed
                notified.as_mut().enable();
                if let Some(widget) = self.get() {
                    return widget;
                }
                notified.await;
            }
        };

        match timeout {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| BindError::MountTimeout(limit)),
            None => Ok(wait.await),
        }
    }

    /// Whether two refs share the same slot
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    fn weak_slot(&self) -> MutexGuard<'_, Weak<Mutex<WidgetInstance>>> {
        self.slot
            .widget
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;
    use slotmap::SlotMap;

    fn live(kind: WidgetKind) -> LiveWidget {
        let mut ids: SlotMap<WidgetId, ()> = SlotMap::with_key();
        Arc::new(Mutex::new(WidgetInstance::new(ids.insert(()), kind)))
    }

    #[test]
    fn test_ref_does_not_keep_widget_alive() {
        let node_ref = NodeRef::new();
        assert!(!node_ref.is_attached());

        let widget = live(WidgetKind::Switch);
        node_ref.attach(&widget);
        assert!(node_ref.is_attached());

        drop(widget);
        assert!(!node_ref.is_attached());
        assert_eq!(node_ref.with(|w| w.kind()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_resolves_after_attach() {
        let node_ref = NodeRef::new();
        let widget = live(WidgetKind::TextField);

        let waiter = {
            let node_ref = node_ref.clone();
            tokio::spawn(async move {
                let widget = node_ref.mounted(None).await?;
                let kind = lock_widget(&widget).kind();
                Ok::<_, BindError>(kind)
            })
        };
        tokio::task::yield_now().await;

        node_ref.attach(&widget);
        let kind = waiter.await.unwrap().unwrap();
        assert_eq!(kind, WidgetKind::TextField);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_times_out() {
        let node_ref = NodeRef::new();
        let result = node_ref.mounted(Some(Duration::from_millis(100))).await;
        assert!(matches!(result, Err(BindError::MountTimeout(_))));
    }
}
