use crate::core::prelude::*;
use crate::util::collision::impl_shape_state;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared handle to a group member. Mutations through it are visible to every group holding it.
pub type MemberHandle = Rc<RefCell<GenericShape>>;

/// An ordered collection of shapes moved together.
///
/// Members are shared, not copied: cloning a group (including via
/// [`transformed`](Shape::transformed)) gives a new group over the same member handles.
///
/// The group's effective matrix is `matrix * T(pos) * R(angle) * S(scale)`. Members are
/// evaluated under it on demand; their own matrices are never changed by the group.
///
/// A group must not contain itself, directly or through nested groups.
#[derive(Clone, Debug)]
pub struct Group {
    members: Vec<MemberHandle>,
    pos: Vector2,
    angle: f64,
    local_scale: Vector2,
    matrix: Matrix3,
    depth: f64,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            pos: Vector2::zero(),
            angle: 0.0,
            local_scale: Vector2::one(),
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }
    pub fn with_members<S: Into<GenericShape>>(members: impl IntoIterator<Item = S>) -> Self {
        let mut rv = Self::new();
        for member in members {
            rv.add(member);
        }
        rv
    }

    /// Adds a shape and returns the handle it is shared through.
    pub fn add(&mut self, shape: impl Into<GenericShape>) -> MemberHandle {
        let handle = Rc::new(RefCell::new(shape.into()));
        self.members.push(handle.clone());
        handle
    }
    pub fn add_shared(&mut self, handle: MemberHandle) {
        self.members.push(handle);
    }
    /// Removes every occurrence of `handle`, compared by identity. Returns whether any was found.
    pub fn remove(&mut self, handle: &MemberHandle) -> bool {
        let before = self.members.len();
        self.members.retain(|member| !Rc::ptr_eq(member, handle));
        self.members.len() != before
    }
    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[MemberHandle] {
        &self.members
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn pos(&self) -> Vector2 {
        self.pos
    }
    pub fn set_pos(&mut self, pos: Vector2) -> &mut Self {
        self.pos = pos;
        self
    }
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn set_angle(&mut self, radians: f64) -> &mut Self {
        self.angle = radians;
        self
    }
    pub fn local_scale(&self) -> Vector2 {
        self.local_scale
    }
    pub fn set_local_scale(&mut self, scale: impl Into<Scale>) -> &mut Self {
        self.local_scale = scale.into().as_vector();
        self
    }

    pub fn local_matrix(&self) -> Matrix3 {
        Matrix3::translate_by(self.pos)
            * Matrix3::rotate(self.angle)
            * Matrix3::scale_by(self.local_scale)
    }
    pub fn effective_matrix(&self) -> Matrix3 {
        self.matrix * self.local_matrix()
    }

    /// Copies of the members with the group's effective matrix applied.
    pub fn evaluate_members(&self) -> Result<Vec<GenericShape>> {
        let m = self.effective_matrix();
        self.members
            .iter()
            .map(|member| {
                let member = member
                    .try_borrow()
                    .context("Group::evaluate_members(): member is mutably borrowed")?;
                Ok(member.transformed(m))
            })
            .collect()
    }

    /// True if any evaluated member collides with `other`. An empty group collides with nothing.
    pub fn collides_with(&self, other: &GenericShape) -> Result<bool> {
        for member in self.evaluate_members()? {
            if member.collides_with(other)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Shape for Group {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        let mut rv = Vec::new();
        for member in self.evaluate_members()? {
            rv.extend(member.points()?);
        }
        Ok(rv)
    }
    fn bounds(&self) -> Result<Boundary> {
        let mut members = self.evaluate_members()?.into_iter();
        let first = members.next().ok_or(GeomError::EmptyGroup)?.bounds()?;
        members.try_fold(first, |acc, member| Ok(acc.union(&member.bounds()?)))
    }
    fn center(&self) -> Result<Point2> {
        self.bounds()?.center()
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Group(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn two_squares() -> Group {
        Group::with_members([
            Polygon::square().translated(Vector2::new(-2.0, 0.0)),
            Polygon::square().translated(Vector2::new(2.0, 0.0)),
        ])
    }

    #[test]
    fn empty_group() {
        let group = Group::new();
        assert!(group.is_empty());
        assert!(!group.collide(&Polygon::square()).unwrap());
        let err = group.bounds().unwrap_err();
        assert_eq!(err.downcast_ref::<GeomError>(), Some(&GeomError::EmptyGroup));
    }

    #[test]
    fn collides_if_any_member_does() {
        let group = two_squares();
        assert_eq!(group.len(), 2);
        assert!(group.collide(&Polygon::square().translated(Vector2::new(2.5, 0.0))).unwrap());
        assert!(!group.collide(&Polygon::square()).unwrap());
        // And the other way around.
        assert!(Polygon::square()
            .translated(Vector2::new(-2.5, 0.0))
            .collide(&group)
            .unwrap());
    }

    #[test]
    fn group_against_group() {
        let a = two_squares();
        let b = two_squares().translated(Vector2::new(0.0, 5.0));
        assert!(!a.collide(&b).unwrap());
        assert!(a.collide(&b.translated(Vector2::new(4.0, -5.0))).unwrap());
        let nested = Group::with_members([GenericShape::from(two_squares())]);
        assert!(nested.collide(&a).unwrap());
    }

    #[test]
    fn shared_members_see_mutation() {
        let mut group = Group::new();
        let handle = group.add(Polygon::square());
        let copy = group.clone();
        let probe = Polygon::square().translated(Vector2::new(10.0, 0.0));
        assert!(!copy.collide(&probe).unwrap());

        handle.borrow_mut().translate(Vector2::new(10.0, 0.0));
        assert!(group.collide(&probe).unwrap());
        assert!(copy.collide(&probe).unwrap());

        assert!(group.remove(&handle));
        assert!(!group.remove(&handle));
        assert!(group.is_empty());
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn local_transform_composes_under_matrix() {
        let mut group = Group::with_members([Polygon::square()]);
        group.set_pos(Vector2::new(3.0, 0.0)).set_angle(FRAC_PI_2);
        assert_eq!(group.center().unwrap(), Point2::new(3.0, 0.0));
        // The square's first vertex is on +X; the local rotation turns it to +Y.
        let first = group.evaluate_members().unwrap()[0].points().unwrap()[0];
        assert_eq!(first, Point2::new(3.0, 0.5));

        group.set_local_scale(2.0);
        group.translate(Vector2::new(0.0, 1.0));
        let first = group.evaluate_members().unwrap()[0].points().unwrap()[0];
        assert_eq!(first, Point2::new(3.0, 2.0));
        // The member itself is untouched.
        assert_eq!(group.members()[0].borrow().matrix(), Matrix3::identity());
    }

    #[test]
    fn bounds_is_union_of_members() {
        let bounds = two_squares().bounds().unwrap();
        assert_eq!(
            Point2::new(bounds.left(), bounds.bottom()),
            Point2::new(-2.5, -0.5)
        );
        assert_eq!(Point2::new(bounds.right(), bounds.top()), Point2::new(2.5, 0.5));
        assert_eq!(two_squares().points().unwrap().len(), 8);
    }

    #[test]
    fn display() {
        assert_eq!(GenericShape::from(two_squares()).to_string(), "Group[2 members]");
    }
}
