//! Host records and property lenses
//!
//! The host is the application record whose fields are edited through
//! widgets. It is the single source of truth: widgets display what the host
//! holds and write user edits straight back into it.
//!
//! Instead of a bare property key, each bound field is addressed by a
//! [`Lens`]: an explicit getter/setter pair checked by the compiler.
//!
//! ```rust
//! use bindery_core::{lens, Host};
//!
//! struct Profile {
//!     name: String,
//!     nickname: Option<String>,
//! }
//!
//! let host = Host::new(Profile { name: "Ada".into(), nickname: None });
//! let name = lens!(Profile, name);
//! let nickname = lens!(Profile, nickname?);
//!
//! assert_eq!(host.get(&name), Some("Ada".to_string()));
//! assert_eq!(host.get(&nickname), None);
//!
//! host.set(&nickname, "Countess".to_string());
//! assert!(host.take_dirty());
//! assert_eq!(host.read(|p| p.nickname.clone()), Some("Countess".to_string()));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared dirty flag for triggering re-renders
pub type DirtyFlag = Arc<AtomicBool>;

/// Shared handle to an application record
pub struct Host<H> {
    state: Arc<Mutex<H>>,
    dirty: DirtyFlag,
    revision: Arc<AtomicU64>,
}

impl<H> Clone for Host<H> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            dirty: Arc::clone(&self.dirty),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<H> Host<H> {
    pub fn new(value: H) -> Self {
        Self {
            state: Arc::new(Mutex::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Read the record
    pub fn read<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the record and mark it dirty
    pub fn update<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        let result = f(&mut self.lock());
        self.revision.fetch_add(1, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        result
    }

    /// Current value of the field behind `lens`, `None` when absent
    pub fn get<T>(&self, lens: &Lens<H, T>) -> Option<T> {
        self.read(|h| lens.get(h))
    }

    /// Write the field behind `lens`
    pub fn set<T>(&self, lens: &Lens<H, T>, value: T) {
        self.update(|h| lens.set(h, value));
    }

    /// Number of writes so far
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Check and clear the dirty flag (the renderer's "should I re-render?")
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty
    }

    pub fn ptr_eq(&self, other: &Host<H>) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn lock(&self) -> MutexGuard<'_, H> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: Clone> Host<H> {
    /// Copy of the whole record
    pub fn snapshot(&self) -> H {
        self.read(H::clone)
    }
}

impl<H: fmt::Debug> fmt::Debug for Host<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("state", &*self.lock())
            .field("revision", &self.revision())
            .finish()
    }
}

type Getter<H, T> = Arc<dyn Fn(&H) -> Option<T> + Send + Sync>;
type Setter<H, T> = Arc<dyn Fn(&mut H, T) + Send + Sync>;

/// Getter/setter pair addressing one field of `H`
pub struct Lens<H, T> {
    name: &'static str,
    getter: Getter<H, T>,
    setter: Setter<H, T>,
}

impl<H, T> Clone for Lens<H, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<H, T> Lens<H, T> {
    pub fn new<G, S>(name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&H) -> Option<T> + Send + Sync + 'static,
        S: Fn(&mut H, T) + Send + Sync + 'static,
    {
        Self {
            name,
            getter: Arc::new(get),
            setter: Arc::new(set),
        }
    }

    /// Field name, used for logs and widget names
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, host: &H) -> Option<T> {
        (self.getter)(host)
    }

    pub fn set(&self, host: &mut H, value: T) {
        (self.setter)(host, value)
    }
}

impl<H, T> fmt::Debug for Lens<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").field("name", &self.name).finish()
    }
}

/// Build a [`Lens`] for a struct field
///
/// `lens!(Host, field)` reads a plain field; `lens!(Host, field?)` reads an
/// `Option` field, where `None` means the property is absent.
#[macro_export]
macro_rules! lens {
    ($host:ty, $field:ident ?) => {
        $crate::host::Lens::new(
            stringify!($field),
            |h: &$host| h.$field.clone(),
            |h: &mut $host, v| h.$field = Some(v),
        )
    };
    ($host:ty, $field:ident) => {
        $crate::host::Lens::new(
            stringify!($field),
            |h: &$host| Some(h.$field.clone()),
            |h: &mut $host, v| h.$field = v,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Settings {
        dark: bool,
        zoom: Option<f64>,
    }

    #[test]
    fn test_set_marks_dirty_and_bumps_revision() {
        let host = Host::new(Settings::default());
        let dark = crate::lens!(Settings, dark);
        assert!(!host.is_dirty());

        host.set(&dark, true);
        assert!(host.is_dirty());
        assert_eq!(host.revision(), 1);
        assert!(host.take_dirty());
        assert!(!host.take_dirty());
        assert_eq!(host.get(&dark), Some(true));
    }

    #[test]
    fn test_optional_lens() {
        let host = Host::new(Settings::default());
        let zoom = crate::lens!(Settings, zoom?);
        assert_eq!(host.get(&zoom), None);

        host.set(&zoom, 1.5);
        assert_eq!(host.snapshot().zoom, Some(1.5));
    }

    #[test]
    fn test_clones_share_state() {
        let host = Host::new(Settings::default());
        let other = host.clone();
        other.update(|s| s.dark = true);
        assert!(host.read(|s| s.dark));
        assert!(host.ptr_eq(&other));
    }
}
