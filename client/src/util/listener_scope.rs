//! Scoped event listener registration.
//!
//! ARCHITECTURE
//! ============
//! `ScopedListener` owns at most one live registration on a `ListenerTarget`.
//! A registration is tied to a dependency value: syncing with new
//! dependencies removes the old listener before adding the new one, and
//! dropping the scope removes whatever is still registered. Components hold
//! the scope for their lifetime so listeners never outlive them or pile up.

#[cfg(test)]
#[path = "listener_scope_test.rs"]
mod listener_scope_test;

/// Something listeners can be attached to and detached from.
pub trait ListenerTarget {
    type Handle;

    /// Attach the listener. `None` means registration failed and there is
    /// nothing to detach later.
    fn listen(&self) -> Option<Self::Handle>;

    fn unlisten(&self, handle: Self::Handle);
}

pub struct ScopedListener<T: ListenerTarget, D> {
    target: T,
    deps: Option<D>,
    handle: Option<T::Handle>,
}

impl<T: ListenerTarget, D: PartialEq> ScopedListener<T, D> {
    pub fn new(target: T) -> Self {
        Self { target, deps: None, handle: None }
    }

    /// Make sure a listener registered for `deps` is live.
    ///
    /// Re-registers only when `deps` differs from the last synced value.
    /// Returns `true` when a (re-)registration happened.
    pub fn sync(&mut self, deps: D) -> bool {
        if self.deps.as_ref() == Some(&deps) {
            return false;
        }
        self.release();
        self.handle = self.target.listen();
        self.deps = Some(deps);
        true
    }

    /// Remove the live listener, if any.
    pub fn clear(&mut self) {
        self.release();
        self.deps = None;
    }

    pub fn is_listening(&self) -> bool {
        self.handle.is_some()
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.target.unlisten(handle);
        }
    }
}

impl<T: ListenerTarget, D> Drop for ScopedListener<T, D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.target.unlisten(handle);
        }
    }
}

/// Listeners that register and release together under one dependency value.
pub struct ListenerGroup<T: ListenerTarget, D> {
    scopes: Vec<ScopedListener<T, D>>,
}

impl<T: ListenerTarget, D: PartialEq + Clone> ListenerGroup<T, D> {
    pub fn new(targets: impl IntoIterator<Item = T>) -> Self {
        Self { scopes: targets.into_iter().map(ScopedListener::new).collect() }
    }

    /// Sync every listener to `deps`, or release all of them for `None`.
    ///
    /// Returns how many listeners were (re-)registered.
    pub fn apply(&mut self, deps: Option<D>) -> usize {
        let Some(deps) = deps else {
            self.clear();
            return 0;
        };
        self.scopes.iter_mut().map(|scope| usize::from(scope.sync(deps.clone()))).sum()
    }

    pub fn clear(&mut self) {
        for scope in &mut self.scopes {
            scope.clear();
        }
    }

    pub fn listening(&self) -> usize {
        self.scopes.iter().filter(|scope| scope.is_listening()).count()
    }
}

/// Tie `group` to the current reactive owner.
///
/// `deps` is re-evaluated reactively and fed to [`ListenerGroup::apply`];
/// every listener is released when the owner is cleaned up.
#[cfg(feature = "hydrate")]
pub fn bind_to_owner<T, D>(group: ListenerGroup<T, D>, deps: impl Fn() -> Option<D> + 'static)
where
    T: ListenerTarget + 'static,
    T::Handle: 'static,
    D: PartialEq + Clone + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::{Effect, on_cleanup};

    let group = Rc::new(RefCell::new(group));
    let for_effect = Rc::clone(&group);
    Effect::new(move || {
        let deps = deps();
        for_effect.borrow_mut().apply(deps);
    });

    let for_cleanup = send_wrapper::SendWrapper::new(group);
    on_cleanup(move || for_cleanup.borrow_mut().clear());
}

#[cfg(feature = "hydrate")]
pub use document::DocumentListener;

#[cfg(feature = "hydrate")]
mod document {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::ListenerTarget;

    /// Listener for one event type on `window.document`.
    pub struct DocumentListener {
        event: &'static str,
        callback: Rc<dyn Fn(web_sys::Event)>,
    }

    impl DocumentListener {
        pub fn new(event: &'static str, callback: impl Fn(web_sys::Event) + 'static) -> Self {
            Self { event, callback: Rc::new(callback) }
        }
    }

    impl ListenerTarget for DocumentListener {
        type Handle = Closure<dyn FnMut(web_sys::Event)>;

        fn listen(&self) -> Option<Self::Handle> {
            let document = web_sys::window().and_then(|w| w.document())?;
            let callback = Rc::clone(&self.callback);
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| callback(ev)) as Box<dyn FnMut(web_sys::Event)>);
            if let Err(err) = document.add_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref()) {
                leptos::logging::warn!("document listener for {} not added: {err:?}", self.event);
                return None;
            }
            Some(closure)
        }

        fn unlisten(&self, handle: Self::Handle) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Err(err) = document.remove_event_listener_with_callback(self.event, handle.as_ref().unchecked_ref()) {
                leptos::logging::warn!("document listener for {} not removed: {err:?}", self.event);
            }
        }
    }
}
