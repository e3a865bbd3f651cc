use focusring_core::{State, TableError};

use crate::{Caps, Color, Layer, SlotKind, Visual, Widget};

/// Stroke width of the stock highlight frame, in px.
pub const DEFAULT_FRAME_WIDTH: f32 = 3.0;

/// How the highlight overlay is drawn.
///
/// The frame layer is owned by the caller and cloned into every synthesized
/// rule; there is no shared default-frame singleton. Build one per theme (or
/// per screen) and pass it down.
#[derive(Clone, Debug)]
pub struct HighlightStyle {
    /// Layer stacked on top of the base when the target state is active.
    pub frame: Layer,
    /// Strip pre-existing rules for the target state before decorating, so
    /// the stock frame wins over whatever the widget shipped with.
    pub force_frame: bool,
    /// Put the overlay in the foreground slot when the widget honors it.
    /// Disable on hosts whose foreground slot doesn't exist; the overlay then
    /// goes to the image slot (for image widgets) or the background.
    pub prefer_foreground: bool,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            frame: Layer::Frame {
                width: DEFAULT_FRAME_WIDTH,
                color: Color::HIGHLIGHT,
                radius: 0.0,
            },
            force_frame: false,
            prefer_foreground: true,
        }
    }
}

impl HighlightStyle {
    pub fn frame(mut self, frame: Layer) -> Self {
        self.frame = frame;
        self
    }

    pub fn force_frame(mut self, force: bool) -> Self {
        self.force_frame = force;
        self
    }

    pub fn prefer_foreground(mut self, prefer: bool) -> Self {
        self.prefer_foreground = prefer;
        self
    }
}

/// Walks a widget tree and makes every actionable widget render the
/// highlight when it gains the relevant state.
///
/// - Clickable widgets get a FOCUSED overlay and are marked focusable; their
///   subtree is not visited further.
/// - List containers get their items decorated with SELECTED instead (the
///   container itself holds focus, the current item is "selected").
/// - Other containers are walked recursively.
pub fn decorate_tree(widget: &mut Widget, style: &HighlightStyle) -> Result<(), TableError> {
    if widget.caps.contains(Caps::CLICKABLE) {
        return decorate_widget(widget, State::FOCUSED, true, style);
    }
    if widget.caps.contains(Caps::LIST) {
        log::debug!("decorating {} list items", widget.children.len());
        for item in &mut widget.children {
            decorate_widget(item, State::SELECTED, false, style)?;
        }
    } else if widget.caps.contains(Caps::CONTAINER) {
        for child in &mut widget.children {
            decorate_tree(child, style)?;
        }
    }
    Ok(())
}

/// Rewrites one widget's slot so `target` renders the highlight.
///
/// Slot choice: the foreground, unless the widget is button-like (whose
/// foreground is not honored — background instead); on hosts without a
/// foreground slot, the image slot for image widgets, else the background.
pub fn decorate_widget(
    widget: &mut Widget,
    target: State,
    mark_focusable: bool,
    style: &HighlightStyle,
) -> Result<(), TableError> {
    if mark_focusable {
        widget.focusable = true;
    }
    if style.force_frame {
        strip_state(widget, target);
    }

    let slot = if style.prefer_foreground {
        if widget.caps.contains(Caps::BUTTON) {
            SlotKind::Background
        } else {
            SlotKind::Foreground
        }
    } else if widget.caps.contains(Caps::IMAGE) {
        SlotKind::Image
    } else {
        SlotKind::Background
    };

    apply_state(widget.slot_mut(slot), target, style)
}

/// Removes every rule mentioning `state` from the widget's background and
/// image slots. Foreground overlays are left alone — they only ever hold
/// synthesized rules for states we are about to re-add.
pub fn strip_state(widget: &mut Widget, state: State) {
    strip_slot(&mut widget.background, state);
    strip_slot(&mut widget.image, state);
}

fn strip_slot(visual: &mut Visual, state: State) {
    let Visual::Stateful(table) = visual else {
        return;
    };
    // Borrowed means nothing mentioned the state; skip the rewrite.
    let next = match table.remove_state(state) {
        std::borrow::Cow::Borrowed(_) => return,
        std::borrow::Cow::Owned(next) => next,
    };
    *table = next;
}

fn apply_state(visual: &mut Visual, target: State, style: &HighlightStyle) -> Result<(), TableError> {
    let frame = &style.frame;
    let next = visual.to_table().add_state(target, false, |base| {
        Ok(match base {
            Some(layer) => Layer::stacked(layer.clone(), frame.clone()),
            None => frame.clone(),
        })
    })?;
    *visual = Visual::Stateful(next);
    Ok(())
}
