//! Layer hierarchy with parent delegation
//!
//! Layers form a tree; the root (the "view") always carries a frame and a
//! timeline, while descendants may carry their own or delegate to the
//! nearest ancestor that does. Nodes live in an owning arena and refer to
//! their parent by key, so a stale reference is a detectable panic rather
//! than a dangling pointer.

use fresco_animation::Timeline;
use fresco_core::{Rect, Size};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a layer in a [`LayerTree`]
    pub struct LayerId;
}

struct LayerNode {
    parent: Option<LayerId>,
    /// Local frame; `None` delegates to the parent chain
    frame: Option<Rect>,
    /// Local timeline; `None` delegates to the parent chain
    timeline: Option<Timeline>,
}

/// Owning arena of layers rooted at a single view
///
/// Accessors without local state walk up the parent chain until a node
/// supplies the value. A non-root layer must always have a live parent;
/// resolving through a removed parent is a programming error and panics.
pub struct LayerTree {
    nodes: SlotMap<LayerId, LayerNode>,
    root: LayerId,
}

impl LayerTree {
    /// Create a tree whose root covers `frame` and owns a fresh timeline
    pub fn new(frame: Rect) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(LayerNode {
            parent: None,
            frame: Some(frame),
            timeline: Some(Timeline::new()),
        });
        Self { nodes, root }
    }

    /// The root layer (the view)
    pub fn root(&self) -> LayerId {
        self.root
    }

    /// Whether the layer is still alive
    pub fn contains(&self, layer: LayerId) -> bool {
        self.nodes.contains_key(layer)
    }

    /// Add a child that delegates frame and timeline to its ancestors
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not alive.
    pub fn add_child(&mut self, parent: LayerId) -> LayerId {
        assert!(
            self.nodes.contains_key(parent),
            "parent layer is not alive"
        );
        self.nodes.insert(LayerNode {
            parent: Some(parent),
            frame: None,
            timeline: None,
        })
    }

    /// Add a child with its own local frame
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not alive.
    pub fn add_child_with_frame(&mut self, parent: LayerId, frame: Rect) -> LayerId {
        let child = self.add_child(parent);
        self.nodes[child].frame = Some(frame);
        child
    }

    /// Remove a layer
    ///
    /// Descendants are not removed; accessing one afterwards panics when
    /// its delegation walk reaches the dead parent. Removing the root is
    /// a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is the root.
    pub fn remove(&mut self, layer: LayerId) -> bool {
        assert!(layer != self.root, "cannot remove the root layer");
        self.nodes.remove(layer).is_some()
    }

    /// The parent link, or `None` for the root
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not alive.
    pub fn parent(&self, layer: LayerId) -> Option<LayerId> {
        self.node(layer).parent
    }

    /// Set or clear a layer's local frame
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not alive, or when clearing the root's frame.
    pub fn set_frame(&mut self, layer: LayerId, frame: Option<Rect>) {
        if frame.is_none() {
            assert!(layer != self.root, "the root layer must keep a frame");
        }
        self.node_mut(layer).frame = frame;
    }

    /// Resize the root frame, as the platform reports new view geometry
    pub fn set_root_size(&mut self, size: Size) {
        let origin = self.nodes[self.root]
            .frame
            .map(|f| f.origin)
            .unwrap_or_default();
        self.nodes[self.root].frame = Some(Rect::from_origin_size(origin, size));
    }

    /// The layer's effective frame, delegating up the chain
    pub fn frame(&self, layer: LayerId) -> Rect {
        let mut current = layer;
        loop {
            let node = self.node(current);
            if let Some(frame) = node.frame {
                return frame;
            }
            current = node.parent.expect("root layer has no frame");
        }
    }

    pub fn width(&self, layer: LayerId) -> f32 {
        self.frame(layer).width()
    }

    pub fn height(&self, layer: LayerId) -> f32 {
        self.frame(layer).height()
    }

    /// Attach a local timeline, detaching the layer's subtree from the
    /// ancestor clock
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not alive.
    pub fn attach_timeline(&mut self, layer: LayerId, timeline: Timeline) {
        self.node_mut(layer).timeline = Some(timeline);
    }

    /// The layer owning the effective timeline, delegating up the chain
    pub fn timeline_owner(&self, layer: LayerId) -> LayerId {
        let mut current = layer;
        loop {
            let node = self.node(current);
            if node.timeline.is_some() {
                return current;
            }
            current = node.parent.expect("root layer has no timeline");
        }
    }

    /// The layer's effective timeline
    pub fn timeline(&self, layer: LayerId) -> &Timeline {
        let owner = self.timeline_owner(layer);
        self.nodes[owner].timeline.as_ref().unwrap()
    }

    /// Mutable access to the layer's effective timeline
    pub fn timeline_mut(&mut self, layer: LayerId) -> &mut Timeline {
        let owner = self.timeline_owner(layer);
        self.nodes[owner].timeline.as_mut().unwrap()
    }

    /// Advance every local timeline in the tree
    ///
    /// Paused timelines ignore the tick on their own.
    pub fn tick_timelines(&mut self, dt_ms: f32) {
        for (_, node) in self.nodes.iter_mut() {
            if let Some(timeline) = node.timeline.as_mut() {
                timeline.tick(dt_ms);
            }
        }
    }

    fn node(&self, layer: LayerId) -> &LayerNode {
        self.nodes.get(layer).expect("layer is not alive")
    }

    fn node_mut(&mut self, layer: LayerId) -> &mut LayerNode {
        self.nodes.get_mut(layer).expect("layer is not alive")
    }
}

impl std::fmt::Debug for LayerTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerTree")
            .field("layers", &self.nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_animation::Tween;

    #[test]
    fn test_three_level_width_delegation() {
        let mut tree = LayerTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mid = tree.add_child(tree.root());
        let leaf = tree.add_child(mid);

        assert_eq!(tree.width(leaf), 800.0);
        assert_eq!(tree.height(leaf), 600.0);

        // Root resizes are visible through the whole chain
        tree.set_root_size(Size::new(1024.0, 768.0));
        assert_eq!(tree.width(leaf), 1024.0);
        assert_eq!(tree.width(mid), 1024.0);
    }

    #[test]
    fn test_local_frame_stops_delegation() {
        let mut tree = LayerTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mid = tree.add_child_with_frame(tree.root(), Rect::new(10.0, 10.0, 100.0, 50.0));
        let leaf = tree.add_child(mid);

        assert_eq!(tree.width(leaf), 100.0);
        tree.set_frame(mid, None);
        assert_eq!(tree.width(leaf), 800.0);
    }

    #[test]
    fn test_timeline_delegates_to_nearest_ancestor() {
        let mut tree = LayerTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mid = tree.add_child(tree.root());
        let leaf = tree.add_child(mid);

        assert_eq!(tree.timeline_owner(leaf), tree.root());

        tree.attach_timeline(mid, Timeline::new());
        assert_eq!(tree.timeline_owner(leaf), mid);

        tree.timeline_mut(leaf).add(Tween::new(0.0_f32, 1.0, 100.0));
        assert_eq!(tree.timeline(mid).len(), 1);
        assert_eq!(tree.timeline(tree.root()).len(), 0);
    }

    #[test]
    #[should_panic(expected = "layer is not alive")]
    fn test_dangling_parent_is_detected() {
        let mut tree = LayerTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mid = tree.add_child(tree.root());
        let leaf = tree.add_child(mid);

        tree.remove(mid);
        let _ = tree.width(leaf);
    }

    #[test]
    #[should_panic(expected = "parent layer is not alive")]
    fn test_add_child_of_dead_parent_panics() {
        let mut tree = LayerTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mid = tree.add_child(tree.root());
        tree.remove(mid);
        let _ = tree.add_child(mid);
    }
}
