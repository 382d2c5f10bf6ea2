pub use crate::behaviors::{SteerSeek, SteeringBehavior};
pub use crate::paths::{normal_point, Path, PathProjection, SteerPathFollow};
pub use crate::plugin::{SteeringPlugin, SteeringSet, Vehicle, VehicleBundle, VehicleParams};
pub use crate::{SteeringTarget, SteeringTargetVec2};
