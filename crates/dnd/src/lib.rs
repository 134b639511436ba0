//! Drag-and-drop gesture resolution for the callgrid workspace.
//!
//! The controller turns raw press/motion/release reports into layout
//! commands. It never mutates the layout itself: the application applies
//! whatever command a release resolves to, so every rearrangement flows
//! through the same layout operations whether it came from a drag, a click,
//! or a key binding.
//!
//! Sources and targets are tagged values carrying their panel ids directly;
//! nothing is encoded in strings, so resolution is a match, not a parse.

use callgrid_core::{PanelId, TabId};
use callgrid_layout::LayoutState;

/// What the user grabbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A tab, together with the panel it was grabbed from.
    Tab { tab: TabId, panel: PanelId },
    /// A whole panel, grabbed by its handle.
    Panel { panel: PanelId },
}

impl DragSource {
    /// The panel the gesture originated in.
    pub fn panel(&self) -> PanelId {
        match self {
            DragSource::Tab { panel, .. } => *panel,
            DragSource::Panel { panel } => *panel,
        }
    }
}

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A specific tab in a panel's strip.
    Tab { tab: TabId, panel: PanelId },
    /// A panel's content area, away from any tab.
    PanelArea { panel: PanelId },
}

impl DropTarget {
    /// The panel this target resolves to.
    pub fn panel(&self) -> PanelId {
        match self {
            DropTarget::Tab { panel, .. } => *panel,
            DropTarget::PanelArea { panel } => *panel,
        }
    }
}

/// A resolved rearrangement, ready to apply to the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutCommand {
    MoveTab {
        tab: TabId,
        source: PanelId,
        target: PanelId,
    },
    ReorderTabs {
        panel: PanelId,
        order: Vec<TabId>,
    },
    ReorderPanels {
        active: PanelId,
        over: PanelId,
    },
}

/// What a release amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing to do (no drag in flight, or the drop resolved to a no-op).
    None,
    /// The button went down and up without movement: a plain click on the
    /// grabbed entity.
    Click(DragSource),
    /// A completed drag, resolved into a layout command.
    Command(LayoutCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Button down on a draggable, no movement yet. A release from here is
    /// a click; the first motion away from the origin starts the drag.
    Armed { source: DragSource, origin: (u16, u16) },
    Dragging {
        source: DragSource,
        pointer: (u16, u16),
        over: Option<DropTarget>,
    },
}

/// Drag state machine: Idle, Armed on press, Dragging after motion, and
/// back to Idle on every release or cancel. There is no path that leaves a
/// drag stuck.
#[derive(Debug)]
pub struct DragController {
    phase: Phase,
}

impl DragController {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// True once motion has promoted the press into a real drag.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The grabbed entity while a press or drag is in flight.
    pub fn source(&self) -> Option<&DragSource> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Armed { source, .. } | Phase::Dragging { source, .. } => Some(source),
        }
    }

    /// Pointer position while dragging, for the floating overlay.
    pub fn pointer(&self) -> Option<(u16, u16)> {
        match &self.phase {
            Phase::Dragging { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }

    /// Advisory hover target while dragging, for highlighting only.
    pub fn hover(&self) -> Option<&DropTarget> {
        match &self.phase {
            Phase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Button pressed on a draggable entity.
    pub fn press(&mut self, source: DragSource, x: u16, y: u16) {
        self.phase = Phase::Armed {
            source,
            origin: (x, y),
        };
    }

    /// Pointer moved with the button held.
    ///
    /// Promotes an armed press into a drag once the pointer leaves its
    /// origin cell, so a steady click never turns into a drag. While
    /// dragging, records the pointer and the advisory hover target; this
    /// never mutates the layout.
    pub fn motion(&mut self, x: u16, y: u16, over: Option<DropTarget>) {
        self.phase = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Phase::Idle,
            Phase::Armed { source, origin } => {
                if (x, y) != origin {
                    Phase::Dragging {
                        source,
                        pointer: (x, y),
                        over,
                    }
                } else {
                    Phase::Armed { source, origin }
                }
            }
            Phase::Dragging { source, .. } => Phase::Dragging {
                source,
                pointer: (x, y),
                over,
            },
        };
    }

    /// Button released; always returns to `Idle`.
    ///
    /// A release without movement is a click on the grabbed entity. A
    /// completed drag resolves its target panel in priority order: a tab
    /// target names its panel outright, a panel-area target names itself,
    /// and no target at all falls back to the source panel, which resolves
    /// to nothing. Then:
    /// - panel dropped on a different panel: reorder panels;
    /// - tab dropped on a tab of its own panel: reorder that strip, the
    ///   dragged id reinserted at the target tab's index;
    /// - tab dropped on another panel (tab or area): move the tab;
    /// - anything else: nothing.
    pub fn release(&mut self, over: Option<DropTarget>, layout: &LayoutState) -> DragOutcome {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle => DragOutcome::None,
            Phase::Armed { source, .. } => DragOutcome::Click(source),
            Phase::Dragging { source, .. } => match Self::resolve(&source, over.as_ref(), layout) {
                Some(command) => DragOutcome::Command(command),
                None => DragOutcome::None,
            },
        }
    }

    /// Abort the gesture (Escape, focus loss). No mutation, back to `Idle`.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn resolve(
        source: &DragSource,
        over: Option<&DropTarget>,
        layout: &LayoutState,
    ) -> Option<LayoutCommand> {
        let target_panel = over.map(|t| t.panel()).unwrap_or_else(|| source.panel());

        match source {
            DragSource::Panel { panel } => {
                if target_panel == *panel {
                    return None;
                }
                Some(LayoutCommand::ReorderPanels {
                    active: *panel,
                    over: target_panel,
                })
            }
            DragSource::Tab { tab, panel } => {
                if let Some(DropTarget::Tab {
                    tab: over_tab,
                    panel: over_panel,
                }) = over
                {
                    if *over_panel == *panel {
                        let order = Self::reordered(layout, *panel, tab, over_tab)?;
                        return Some(LayoutCommand::ReorderTabs {
                            panel: *panel,
                            order,
                        });
                    }
                }
                if target_panel == *panel {
                    return None;
                }
                Some(LayoutCommand::MoveTab {
                    tab: tab.clone(),
                    source: *panel,
                    target: target_panel,
                })
            }
        }
    }

    /// New strip order with `dragged` pulled out and reinserted at
    /// `over_tab`'s index. Bails out when the layout changed under the
    /// drag and either tab is gone.
    fn reordered(
        layout: &LayoutState,
        panel: PanelId,
        dragged: &TabId,
        over_tab: &TabId,
    ) -> Option<Vec<TabId>> {
        if dragged == over_tab {
            return None;
        }
        let mut order = layout.panel(panel)?.tab_ids();
        let from = order.iter().position(|id| id == dragged)?;
        let to = order.iter().position(|id| id == over_tab)?;
        let id = order.remove(from);
        order.insert(to, id);
        Some(order)
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgrid_core::{ScreenCount, Tab};

    fn tab(id: &str) -> Tab {
        Tab::new(id, id.to_uppercase(), format!("/{}", id))
    }

    /// Two panels: the first holding a, b, c, the second holding d.
    fn fixture() -> (LayoutState, PanelId, PanelId) {
        let mut layout = LayoutState::new();
        layout.set_screen_count(ScreenCount::new(2));
        let p1 = layout.panels()[0].id();
        let p2 = layout.panels()[1].id();
        layout.add_tab(tab("a").with_panel(p1));
        layout.add_tab(tab("b").with_panel(p1));
        layout.add_tab(tab("c").with_panel(p1));
        layout.add_tab(tab("d").with_panel(p2));
        (layout, p1, p2)
    }

    fn grab_tab(id: &str, panel: PanelId) -> DragSource {
        DragSource::Tab {
            tab: TabId::new(id),
            panel,
        }
    }

    #[test]
    fn test_release_without_motion_is_a_click() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        assert!(!drag.is_dragging());

        let outcome = drag.release(None, &layout);
        assert_eq!(outcome, DragOutcome::Click(grab_tab("a", p1)));
        assert!(!drag.is_dragging());
        assert!(drag.source().is_none());
    }

    #[test]
    fn test_motion_in_origin_cell_stays_armed() {
        let (_, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(4, 1, None);
        assert!(!drag.is_dragging());

        drag.motion(5, 1, None);
        assert!(drag.is_dragging());
        assert_eq!(drag.pointer(), Some((5, 1)));
    }

    #[test]
    fn test_hover_is_advisory_only() {
        let (layout, p1, p2) = fixture();
        let snapshot = layout.clone();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(30, 5, Some(DropTarget::PanelArea { panel: p2 }));
        assert_eq!(drag.hover(), Some(&DropTarget::PanelArea { panel: p2 }));

        // Hovering mutated nothing.
        assert_eq!(layout.panels(), snapshot.panels());
    }

    #[test]
    fn test_tab_on_tab_same_panel_reorders() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(12, 1, None);
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("c"),
                panel: p1,
            }),
            &layout,
        );

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::ReorderTabs {
                panel: p1,
                order: vec![TabId::new("b"), TabId::new("c"), TabId::new("a")],
            })
        );
    }

    #[test]
    fn test_tab_on_earlier_tab_inserts_at_its_slot() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("c", p1), 20, 1);
        drag.motion(4, 1, None);
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("a"),
                panel: p1,
            }),
            &layout,
        );

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::ReorderTabs {
                panel: p1,
                order: vec![TabId::new("c"), TabId::new("a"), TabId::new("b")],
            })
        );
    }

    #[test]
    fn test_tab_on_tab_of_other_panel_moves() {
        let (layout, p1, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(40, 1, None);
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("d"),
                panel: p2,
            }),
            &layout,
        );

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::MoveTab {
                tab: TabId::new("a"),
                source: p1,
                target: p2,
            })
        );
    }

    #[test]
    fn test_tab_on_other_panel_area_moves() {
        let (layout, p1, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("b", p1), 8, 1);
        drag.motion(45, 10, Some(DropTarget::PanelArea { panel: p2 }));
        let outcome = drag.release(Some(DropTarget::PanelArea { panel: p2 }), &layout);

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::MoveTab {
                tab: TabId::new("b"),
                source: p1,
                target: p2,
            })
        );
    }

    #[test]
    fn test_tab_on_own_panel_area_is_noop() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(10, 8, None);
        let outcome = drag.release(Some(DropTarget::PanelArea { panel: p1 }), &layout);
        assert_eq!(outcome, DragOutcome::None);
    }

    #[test]
    fn test_drop_outside_any_target_is_noop() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(70, 20, None);
        let outcome = drag.release(None, &layout);
        assert_eq!(outcome, DragOutcome::None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_panel_on_panel_reorders() {
        let (layout, p1, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(DragSource::Panel { panel: p2 }, 40, 1);
        drag.motion(5, 1, None);
        let outcome = drag.release(Some(DropTarget::PanelArea { panel: p1 }), &layout);

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::ReorderPanels {
                active: p2,
                over: p1,
            })
        );
    }

    #[test]
    fn test_panel_on_other_panels_tab_reorders_panels() {
        let (layout, p1, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(DragSource::Panel { panel: p2 }, 40, 1);
        drag.motion(4, 1, None);
        // A tab target still names its panel; that is enough for a panel
        // drag to resolve.
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("a"),
                panel: p1,
            }),
            &layout,
        );

        assert_eq!(
            outcome,
            DragOutcome::Command(LayoutCommand::ReorderPanels {
                active: p2,
                over: p1,
            })
        );
    }

    #[test]
    fn test_panel_on_itself_is_noop() {
        let (layout, _, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(DragSource::Panel { panel: p2 }, 40, 1);
        drag.motion(42, 3, None);
        let outcome = drag.release(Some(DropTarget::PanelArea { panel: p2 }), &layout);
        assert_eq!(outcome, DragOutcome::None);
    }

    #[test]
    fn test_cancel_discards_the_gesture() {
        let (layout, p1, p2) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(40, 1, Some(DropTarget::PanelArea { panel: p2 }));
        assert!(drag.is_dragging());

        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(drag.hover().is_none());

        // A stray release after cancel resolves to nothing.
        let outcome = drag.release(Some(DropTarget::PanelArea { panel: p2 }), &layout);
        assert_eq!(outcome, DragOutcome::None);
    }

    #[test]
    fn test_stale_reorder_target_resolves_to_noop() {
        let (mut layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(12, 1, None);

        // The strip changed under the drag: the hovered tab is gone.
        layout.remove_tab(&TabId::new("c"), p1);
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("c"),
                panel: p1,
            }),
            &layout,
        );
        assert_eq!(outcome, DragOutcome::None);
    }

    #[test]
    fn test_tab_dropped_on_itself_is_noop() {
        let (layout, p1, _) = fixture();
        let mut drag = DragController::new();

        drag.press(grab_tab("a", p1), 4, 1);
        drag.motion(5, 1, None);
        let outcome = drag.release(
            Some(DropTarget::Tab {
                tab: TabId::new("a"),
                panel: p1,
            }),
            &layout,
        );
        assert_eq!(outcome, DragOutcome::None);
    }
}
