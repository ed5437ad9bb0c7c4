use na::Unit;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::gjk::{self, ConvergenceStatus, DistanceResult, GjkOptions};
use crate::shape::{ConvexShape, Translated};

/// Parameters of the time-of-impact computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TOIOptions {
    /// The squared separation below which the shapes are considered in contact.
    pub eps: Real,
    /// The swept shape is considered as not approaching the other one if the projection of
    /// their separation on the sweep direction is smaller than this.
    pub approach_tol: Real,
    /// The maximum number of advancement steps.
    pub max_steps: usize,
    /// The parameters of the distance query run at each step.
    pub gjk: GjkOptions,
}

impl Default for TOIOptions {
    fn default() -> Self {
        TOIOptions {
            eps: 64.0,
            approach_tol: 0.01,
            max_steps: 256,
            gjk: GjkOptions::default(),
        }
    }
}

/// The result of a time-of-impact computation.
#[derive(Clone, Debug, PartialEq)]
pub struct TOI {
    /// The fraction of the sweep at which the shapes touch.
    ///
    /// This is zero if they never touch along the sweep.
    pub toi: Real,
    /// Did the swept shape reach the other one?
    pub impact: bool,
    /// The way the advancement terminated.
    pub status: ConvergenceStatus,
    /// The last distance query, with the swept shape at the pose where the advancement
    /// stopped.
    pub query: DistanceResult,
    /// The world-space contact point on the swept shape.
    ///
    /// On impact, this is the closest point of the last separated pose carried to the impact
    /// pose. Otherwise this is the closest point at the pose where the advancement stopped.
    pub witness1: Point<Real>,
    /// The world-space contact point on the static shape.
    pub witness2: Point<Real>,
    /// The world-space normal separating the shapes, oriented against the sweep.
    pub normal: Option<UnitVector<Real>>,
}

impl TOI {
    /// The world-space displacement of the swept shape up to the time of impact.
    pub fn displacement(&self, sv: &Vector<Real>) -> Vector<Real> {
        sv * self.toi
    }
}

/// Computes the time of impact of a shape swept linearly against a static one.
///
/// `g1` is translated by `sv` while `g2` stays still. The sweep is advanced conservatively:
/// at each step `g1` moves toward `g2` by their current distance, which cannot make them
/// overlap, until they are closer than `sqrt(options.eps)` or it becomes clear they will not
/// meet before the end of the sweep.
///
/// The advanced poses are only ever presented to the distance queries through a
/// [`Translated`] view: the placement of `g1` is never modified.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use hullcast2d::math::{Isometry, Point, Vector};
/// use hullcast2d::query::{time_of_impact, TOIOptions};
/// use hullcast2d::shape::ConvexPolygon;
///
/// let square = vec![
///     Point::new(-1.0, -1.0),
///     Point::new(1.0, -1.0),
///     Point::new(1.0, 1.0),
///     Point::new(-1.0, 1.0),
/// ];
/// let g1 = ConvexPolygon::from_local_points(square.clone(), Isometry::identity());
/// let g2 = ConvexPolygon::from_local_points(square, Isometry::translation(10.0, 0.0));
///
/// let options = TOIOptions {
///     eps: 1.0e-4,
///     ..TOIOptions::default()
/// };
/// let hit = time_of_impact(&g1, &Vector::new(16.0, 0.0), &g2, &options);
/// assert!(hit.impact);
/// assert!((hit.toi - 0.5).abs() < 1.0e-3);
/// # }
/// ```
pub fn time_of_impact<G1, G2>(g1: &G1, sv: &Vector<Real>, g2: &G2, options: &TOIOptions) -> TOI
where
    G1: ?Sized + ConvexShape,
    G2: ?Sized + ConvexShape,
{
    let Some((dir, len)) = Unit::try_new_and_get(*sv, 0.0) else {
        let query = gjk::distance(g1, g2, None, &options.gjk);
        let impact = query.nv.norm_squared() <= options.eps;
        let (witness1, witness2) = query.closest_points(g1, g2);
        let normal = query.separating_normal(sv);

        return TOI {
            toi: 0.0,
            impact,
            status: ConvergenceStatus::Converged,
            query,
            witness1,
            witness2,
            normal,
        };
    };

    let mut advanced: Real = 0.0;
    let mut remaining = len;
    let mut query = gjk::distance(g1, g2, None, &options.gjk);
    let mut status = ConvergenceStatus::Exhausted;
    let mut impact = false;
    // Closest points and normal of the last separated pose, carried along the last step.
    let mut last_separation = None;

    for _ in 0..options.max_steps {
        let nv2 = query.nv.norm_squared();

        if nv2 <= options.eps {
            impact = true;
            status = ConvergenceStatus::Converged;
            break;
        }

        let moved = Translated::new(g1, *dir * advanced);
        let (p1, p2) = query.closest_points(&moved, g2);
        let d1 = dir.dot(&(p2 - p1));

        if d1 <= options.approach_tol || remaining * d1 <= nv2 {
            // The shapes cannot meet before the end of the sweep.
            status = ConvergenceStatus::Converged;
            break;
        }

        let step = nv2.sqrt();
        advanced += step;
        remaining = (remaining - step).max(0.0);
        last_separation = Some((p1 + *dir * step, p2, query.separating_normal(sv)));

        let moved = Translated::new(g1, *dir * advanced);
        query = gjk::distance(&moved, g2, Some(&query.simplex), &options.gjk);
    }

    if status == ConvergenceStatus::Exhausted {
        log::debug!(
            "Time of impact did not converge after {} steps (advanced: {}, squared distance: {}).",
            options.max_steps,
            advanced,
            query.nv.norm_squared()
        );
    }

    let toi = if impact || status == ConvergenceStatus::Exhausted {
        advanced / len
    } else {
        0.0
    };

    let (witness1, witness2, normal) = match last_separation {
        Some(separation) if impact => separation,
        _ => {
            let moved = Translated::new(g1, *dir * advanced);
            let (witness1, witness2) = query.closest_points(&moved, g2);
            (witness1, witness2, query.separating_normal(sv))
        }
    };

    TOI {
        toi,
        impact,
        status,
        query,
        witness1,
        witness2,
        normal,
    }
}
