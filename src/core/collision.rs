use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
    rc::Rc,
};

use crate::core::prelude::*;

/// An object the [`CollisionHandler`] can test against others.
pub trait Collidable {
    fn collidable_id(&self) -> CollidableId;

    /// The world-space shape to collide with, or `None` if the object currently has no shape.
    fn collision_shape(&self) -> Option<GenericShape>;

    fn collides_with(&self, other: &dyn Collidable) -> Result<bool> {
        match (self.collision_shape(), other.collision_shape()) {
            (Some(this), Some(that)) => this.collides_with(&that),
            (this, that) => Err(GeomError::UnsupportedShapePair {
                this: describe(self.collidable_id(), this.as_ref()),
                other: describe(other.collidable_id(), that.as_ref()),
            }
            .into()),
        }
    }
}

fn describe(id: CollidableId, shape: Option<&GenericShape>) -> String {
    match shape {
        Some(shape) => format!("{id} {shape}"),
        None => format!("{id} (no shape)"),
    }
}

/// A [`Collidable`] that just owns a shape.
#[derive(Debug)]
pub struct ShapeBody {
    id: CollidableId,
    shape: RefCell<Option<GenericShape>>,
}

impl ShapeBody {
    pub fn new(shape: impl Into<GenericShape>) -> Self {
        Self {
            id: CollidableId::next(),
            shape: RefCell::new(Some(shape.into())),
        }
    }
    pub fn without_shape() -> Self {
        Self {
            id: CollidableId::next(),
            shape: RefCell::new(None),
        }
    }

    pub fn id(&self) -> CollidableId {
        self.id
    }
    pub fn set_shape(&self, shape: Option<GenericShape>) {
        *self.shape.borrow_mut() = shape;
    }
    /// Applies `f` to the shape in place, if there is one.
    pub fn update_shape(&self, f: impl FnOnce(&mut GenericShape)) {
        if let Some(shape) = self.shape.borrow_mut().as_mut() {
            f(shape);
        }
    }
}

impl Collidable for ShapeBody {
    fn collidable_id(&self) -> CollidableId {
        self.id
    }
    fn collision_shape(&self) -> Option<GenericShape> {
        self.shape.borrow().clone()
    }
}

/// One colliding pair, reported once per [`find_collisions`](CollisionHandler::find_collisions)
/// call. `this` always has the smaller id.
#[derive(Clone)]
pub struct CollisionEvent {
    pub this: Rc<dyn Collidable>,
    pub other: Rc<dyn Collidable>,
}

impl CollisionEvent {
    pub fn ids(&self) -> UnorderedPair<CollidableId> {
        UnorderedPair::new(self.this.collidable_id(), self.other.collidable_id())
    }
    pub fn involves(&self, id: CollidableId) -> bool {
        self.ids().contains(id)
    }
    /// The object in this pair that is not `id`, if `id` is part of the pair.
    pub fn partner_of(&self, id: CollidableId) -> Option<&Rc<dyn Collidable>> {
        if self.this.collidable_id() == id {
            Some(&self.other)
        } else if self.other.collidable_id() == id {
            Some(&self.this)
        } else {
            None
        }
    }
}

impl Debug for CollisionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CollisionEvent({} vs. {})",
            self.this.collidable_id(),
            self.other.collidable_id()
        )
    }
}

/// Registers objects by layer and reports which of them overlap.
///
/// Only objects sharing a layer are tested against each other. An object may be in any number of
/// layers; a pair that shares several layers is still reported once.
pub struct CollisionHandler<L: Ord + Clone + Debug> {
    layers: BTreeMap<L, BTreeMap<CollidableId, Rc<dyn Collidable>>>,
}

impl<L: Ord + Clone + Debug> Default for CollisionHandler<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ord + Clone + Debug> CollisionHandler<L> {
    pub fn new() -> Self {
        Self {
            layers: BTreeMap::new(),
        }
    }

    pub fn add_to_layer<I>(&mut self, layer: L, objects: I)
    where
        I: IntoIterator<Item = Rc<dyn Collidable>>,
    {
        let entry = self.layers.entry(layer).or_default();
        entry.extend(objects.into_iter().map(|obj| (obj.collidable_id(), obj)));
    }
    pub fn remove_from_layer<I>(&mut self, layer: &L, ids: I)
    where
        I: IntoIterator<Item = CollidableId>,
    {
        if let Some(objects) = self.layers.get_mut(layer) {
            for id in ids {
                objects.remove(&id);
            }
        } else {
            warn!("remove_from_layer(): no such layer: {layer:?}");
        }
    }
    pub fn remove_from_all_layers(&mut self, id: CollidableId) {
        for objects in self.layers.values_mut() {
            objects.remove(&id);
        }
    }
    pub fn clear_layer(&mut self, layer: &L) {
        self.layers.remove(layer);
    }

    /// Ids registered on `layer`, in id order. Empty for unknown layers.
    pub fn layer(&self, layer: &L) -> Vec<CollidableId> {
        self.layers
            .get(layer)
            .map(|objects| objects.keys().copied().collect())
            .unwrap_or_default()
    }
    pub fn layers(&self) -> impl Iterator<Item = &L> {
        self.layers.keys()
    }
    pub fn is_in_layer(&self, layer: &L, id: CollidableId) -> bool {
        self.layers
            .get(layer)
            .is_some_and(|objects| objects.contains_key(&id))
    }

    /// Tests every pair of objects that share a layer, and returns one event per distinct
    /// colliding pair, ordered by pair.
    pub fn find_collisions(&self) -> Result<Vec<CollisionEvent>> {
        let mut checked = BTreeSet::<UnorderedPair<CollidableId>>::new();
        let mut collisions = BTreeMap::<UnorderedPair<CollidableId>, CollisionEvent>::new();
        for (layer, objects) in &self.layers {
            for ((&this_id, this), (&other_id, other)) in objects.iter().tuple_combinations() {
                check!(this_id < other_id);
                let ids = UnorderedPair::new(this_id, other_id);
                if !checked.insert(ids) {
                    continue;
                }
                let collides = this
                    .collides_with(other.as_ref())
                    .with_context(|| format!("layer {layer:?}: {this_id} vs. {other_id}"))?;
                if collides {
                    trace!("collision on layer {layer:?}: {this_id} vs. {other_id}");
                    collisions.insert(
                        ids,
                        CollisionEvent {
                            this: this.clone(),
                            other: other.clone(),
                        },
                    );
                }
            }
        }
        debug!(
            "find_collisions(): {} layers, {} pairs checked, {} collisions",
            self.layers.len(),
            checked.len(),
            collisions.len()
        );
        Ok(collisions.into_values().collect())
    }
}

/// How the set of colliding pairs changed between two consecutive
/// [`find_collisions`](CollisionHandler::find_collisions) results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionTransitions {
    pub started: Vec<UnorderedPair<CollidableId>>,
    pub ongoing: Vec<UnorderedPair<CollidableId>>,
    pub ended: Vec<UnorderedPair<CollidableId>>,
}

/// Remembers the previous tick's colliding pairs to derive start/end transitions.
#[derive(Clone, Debug, Default)]
pub struct CollisionTracker {
    previous: BTreeSet<UnorderedPair<CollidableId>>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, events: &[CollisionEvent]) -> CollisionTransitions {
        let current = events.iter().map(CollisionEvent::ids).collect::<BTreeSet<_>>();
        let rv = CollisionTransitions {
            started: current.difference(&self.previous).copied().collect(),
            ongoing: current.intersection(&self.previous).copied().collect(),
            ended: self.previous.difference(&current).copied().collect(),
        };
        check_eq!(rv.started.len() + rv.ongoing.len(), current.len());
        self.previous = current;
        rv
    }

    /// Drops any remembered pair involving `id`, e.g. after the object is destroyed. No `ended`
    /// transition is reported for them.
    pub fn forget(&mut self, id: CollidableId) {
        self.previous.retain(|ids| !ids.contains(id));
    }
    pub fn is_colliding(&self, ids: UnorderedPair<CollidableId>) -> bool {
        self.previous.contains(&ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64) -> Rc<ShapeBody> {
        Rc::new(ShapeBody::new(
            Polygon::square().translated(Vector2::new(x, y)),
        ))
    }
    fn dyn_of(body: &Rc<ShapeBody>) -> Rc<dyn Collidable> {
        body.clone()
    }

    #[test]
    fn reports_overlapping_pairs_in_a_layer() {
        let a = body_at(0.0, 0.0);
        let b = body_at(0.5, 0.0);
        let c = body_at(5.0, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("solid", [dyn_of(&a), dyn_of(&b), dyn_of(&c)]);
        let events = handler.find_collisions().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].ids(), UnorderedPair::new(a.id(), b.id()));
        assert_eq!(events[0].this.collidable_id(), a.id());
        assert!(events[0].involves(b.id()));
        assert!(!events[0].involves(c.id()));
        assert_eq!(
            events[0].partner_of(b.id()).map(|obj| obj.collidable_id()),
            Some(a.id())
        );
    }

    #[test]
    fn pairs_shared_by_several_layers_are_reported_once() {
        let a = body_at(0.0, 0.0);
        let b = body_at(0.5, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("x", [dyn_of(&b), dyn_of(&a)]);
        handler.add_to_layer("y", [dyn_of(&a), dyn_of(&b)]);
        let events = handler.find_collisions().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].ids(), UnorderedPair::new(a.id(), b.id()));
    }

    #[test]
    fn layers_are_independent() {
        let a = body_at(0.0, 0.0);
        let b = body_at(0.5, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer(1, [dyn_of(&a)]);
        handler.add_to_layer(2, [dyn_of(&b)]);
        assert!(handler.find_collisions().unwrap().is_empty());
    }

    #[test]
    fn events_are_in_pair_order() {
        let bodies = (0..4).map(|_| body_at(0.0, 0.0)).collect_vec();
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("all", bodies.iter().rev().map(dyn_of));
        let events = handler.find_collisions().unwrap();
        assert_eq!(events.len(), 6);
        let ids = events.iter().map(CollisionEvent::ids).collect_vec();
        assert!(ids.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn layer_membership() {
        let a = body_at(0.0, 0.0);
        let b = body_at(0.5, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("x", [dyn_of(&a), dyn_of(&b)]);
        handler.add_to_layer("y", [dyn_of(&a)]);
        assert_eq!(handler.layer(&"x"), vec![a.id(), b.id()]);
        assert!(handler.is_in_layer(&"y", a.id()));

        handler.remove_from_layer(&"x", [b.id()]);
        assert_eq!(handler.layer(&"x"), vec![a.id()]);
        assert!(handler.find_collisions().unwrap().is_empty());

        handler.add_to_layer("x", [dyn_of(&b)]);
        handler.remove_from_all_layers(a.id());
        assert!(!handler.is_in_layer(&"x", a.id()));
        assert!(!handler.is_in_layer(&"y", a.id()));

        handler.clear_layer(&"x");
        assert!(handler.layer(&"x").is_empty());
        assert_eq!(handler.layers().collect_vec(), vec![&"y"]);
    }

    #[test]
    fn results_follow_shape_updates() {
        let a = body_at(0.0, 0.0);
        let b = body_at(3.0, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer((), [dyn_of(&a), dyn_of(&b)]);
        assert!(handler.find_collisions().unwrap().is_empty());
        b.update_shape(|shape| {
            shape.translate(Vector2::new(-2.5, 0.0));
        });
        assert_eq!(handler.find_collisions().unwrap().len(), 1);
    }

    #[test]
    fn missing_shape_is_an_error() {
        let a = body_at(0.0, 0.0);
        let ghost = Rc::new(ShapeBody::without_shape());
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("x", [dyn_of(&a), dyn_of(&ghost)]);
        let err = handler.find_collisions().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeomError>(),
            Some(GeomError::UnsupportedShapePair { .. })
        ));

        ghost.set_shape(Some(Boundary::new(0.0, 1.0, 0.0, 1.0).into()));
        assert_eq!(handler.find_collisions().unwrap().len(), 1);
    }

    #[test]
    fn tracker_reports_transitions() {
        let a = body_at(0.0, 0.0);
        let b = body_at(0.5, 0.0);
        let c = body_at(5.0, 0.0);
        let mut handler = CollisionHandler::new();
        handler.add_to_layer("x", [dyn_of(&a), dyn_of(&b), dyn_of(&c)]);
        let ab = UnorderedPair::new(a.id(), b.id());
        let bc = UnorderedPair::new(b.id(), c.id());

        let mut tracker = CollisionTracker::new();
        let t = tracker.update(&handler.find_collisions().unwrap());
        assert_eq!(t.started, vec![ab]);
        assert!(t.ongoing.is_empty() && t.ended.is_empty());

        let t = tracker.update(&handler.find_collisions().unwrap());
        assert_eq!(t.ongoing, vec![ab]);
        assert!(t.started.is_empty() && t.ended.is_empty());

        b.update_shape(|shape| {
            shape.translate(Vector2::new(4.5, 0.0));
        });
        let t = tracker.update(&handler.find_collisions().unwrap());
        assert_eq!(
            t,
            CollisionTransitions {
                started: vec![bc],
                ongoing: vec![],
                ended: vec![ab],
            }
        );
        assert!(tracker.is_colliding(bc));
        tracker.forget(c.id());
        assert!(!tracker.is_colliding(bc));
    }
}
