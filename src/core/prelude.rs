#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        collision::{
            Collidable, CollisionEvent, CollisionHandler, CollisionTracker, CollisionTransitions,
            ShapeBody,
        },
        config::*,
        error::GeomError,
        CollidableId,
    },
    util::{
        assert::*,
        boundary::Boundary,
        collision::{GenericShape, Polygonal, Shape, ShapeKind},
        ellipse::Ellipse,
        group::Group,
        linalg,
        linalg::{Matrix3, Point2, Scale, Transform, Vector2},
        log::warn_every_seconds,
        polygon::{Polygon, Quadrangle, Triangle},
        UnorderedPair,
    },
};
