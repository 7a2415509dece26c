//! Leptos DragDrop Utilities
//! 
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Pointer is over another draggable item (tree row, card)
    Item(String),
    /// Pointer is over a container's background (board column)
    Container(String),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer offset is far enough from the press to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    /// Id being dragged, if a drag is in progress
    pub fn dragging(&self) -> Option<String> {
        self.dragging_id_read.try_get_untracked().flatten()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(id))
    }

    pub fn is_target(&self, target: &DropTarget) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);
    
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is an input, textarea or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag if moved enough.
/// `on_start` receives the id once the threshold is crossed.
pub fn bind_global_mousemove<S>(dnd: DndSignals, on_start: S)
where
    S: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.try_get_untracked().flatten() else { return; };
        
        // If we have a pending drag and haven't started dragging yet
        if dnd.dragging().is_none() {
            let dx = ev.client_x() - dnd.start_x_read.get_untracked();
            let dy = ev.client_y() - dnd.start_y_read.get_untracked();
            
            // Start dragging if moved beyond threshold
            if exceeds_threshold(dx, dy) {
                log::debug!("[DND] drag start: {}", pending);
                dnd.dragging_id_write.set(Some(pending.clone()));
                on_start(pending);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging() {
            // Don't allow dropping on self
            if dragging != item_id {
                dnd.drop_target_write.set(Some(DropTarget::Item(item_id.clone())));
            }
        }
    }
}

/// Create mouseenter handler for containers
pub fn make_on_container_mouseenter(dnd: DndSignals, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Container(container_id.clone())));
        }
    }
}

/// Create mouseleave handler.
/// Leaving an item inside a container falls back to that container.
pub fn make_on_mouseleave(dnd: DndSignals, fallback: Option<DropTarget>) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging().is_some() {
            dnd.drop_target_write.set(fallback.clone());
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs for every real drag (not plain clicks) with the target
/// under the pointer, or `None` when released outside any target.
pub fn bind_global_mouseup<S, F>(dnd: DndSignals, on_start: S, on_drop: F)
where
    S: Fn(String) + 'static,
    F: Fn(String, Option<DropTarget>) + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return; };
        let drop_target = dnd.drop_target_read.get_untracked();
        
        // Clear pending state first
        dnd.pending_id_write.set(None);
        
        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging_id {
            log::debug!("[DND] drop: dragged={}, target={:?}", dragged, drop_target);
            end_drag(&dnd);
            on_drop(dragged, drop_target);
        }
        // Not dragging: click event will fire naturally on the element
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    // Also bind global mousemove
    bind_global_mousemove(dnd, on_start);
}

/// Bind document keydown so Escape abandons an in-progress drag.
/// `on_cancel` receives the dragged id; the drop target is discarded.
pub fn bind_global_escape<C>(dnd: DndSignals, on_cancel: C)
where
    C: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        let Some(dragged) = dnd.dragging() else { return; };
        log::debug!("[DND] cancel: {}", dragged);
        end_drag(&dnd);
        on_cancel(dragged);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}
