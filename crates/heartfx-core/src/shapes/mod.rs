/// Target shape generators.
///
/// Only the heart silhouette is used today; generators return points in
/// canvas pixel space.
pub mod heart;
